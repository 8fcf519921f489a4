use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use simplelog::{Config, LevelFilter, WriteLogger};

use edgefade::measure::char_width;
use edgefade::{
    convert_event, find_element, intrinsic_width, Content, Element, Event, LayoutResult, Overflow,
    Rect, ScrollState, ShadowState, Terminal, SCROLL_WRAPPER, SHOW_LEFT_SHADOW, SHOW_RIGHT_SHADOW,
};

const RAILS: &[(&str, &str, &str)] = &[
    ("recent-wrap", "recent", "Recently Added"),
    ("classics-wrap", "classics", "Classics"),
];

/// Left edge of each rail viewport; one column is reserved per side for
/// the fade markers.
const RAIL_X: u16 = 2;

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("rails.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let term = Terminal::new()?;
    let mut scroll = ScrollState::new();
    let mut shadows = ShadowState::new();

    let root = ui();
    shadows.attach(&root, Instant::now());

    loop {
        let (width, height) = term.size()?;
        let layout = build_layout(width, height);
        report_sizes(&root, width, &mut scroll);

        shadows.tick(Instant::now(), &scroll);

        let mut frame = root.clone();
        shadows.annotate(&mut frame);
        draw(&frame, width, &scroll)?;

        let raw = term.poll(Some(Duration::from_millis(50)))?;
        for event in &raw {
            if let CrosstermEvent::Key(key) = event {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }

        let events: Vec<Event> = raw.iter().filter_map(convert_event).collect();
        shadows.process_events(&events, &root, &layout, &mut scroll);
    }
}

fn ui() -> Element {
    Element::col()
        .id("root")
        .child(
            Element::box_().id(RAILS[0].0).class(SCROLL_WRAPPER).child(
                Element::row()
                    .id(RAILS[0].1)
                    .overflow_x(Overflow::Scroll)
                    .gap(3)
                    .children(
                        [
                            "The Iron Harbor",
                            "Night Train to Lisbon",
                            "Paper Moons",
                            "A Winter's Toll",
                            "The Cartographer",
                            "Salt and Smoke",
                            "Meridian",
                            "The Last Projectionist",
                        ]
                        .map(Element::text),
                    ),
            ),
        )
        .child(
            Element::box_().id(RAILS[1].0).class(SCROLL_WRAPPER).child(
                Element::row()
                    .id(RAILS[1].1)
                    .overflow_x(Overflow::Scroll)
                    .gap(3)
                    .children(
                        [
                            "Seven Samurai",
                            "The Third Man",
                            "Wages of Fear",
                            "Rashomon",
                            "Le Samouraï",
                            "Harakiri",
                            "High and Low",
                            "Army of Shadows",
                            "The Conformist",
                        ]
                        .map(Element::text),
                    ),
            ),
        )
        // A wrapper without a rail: silently skipped at attach.
        .child(
            Element::box_()
                .id("empty-wrap")
                .class(SCROLL_WRAPPER)
                .child(Element::text("(coming soon)")),
        )
}

fn build_layout(width: u16, height: u16) -> LayoutResult {
    let viewport = width.saturating_sub(RAIL_X * 2);
    let mut layout = LayoutResult::new();
    layout.insert("root".to_string(), Rect::from_size(width, height));

    for (i, (wrapper_id, rail_id, _)) in RAILS.iter().enumerate() {
        let title_y = 2 + i as u16 * 4;
        layout.insert(
            wrapper_id.to_string(),
            Rect::new(0, title_y, width, 2),
        );
        layout.insert(
            rail_id.to_string(),
            Rect::new(RAIL_X, title_y + 1, viewport, 1),
        );
    }

    layout
}

fn report_sizes(root: &Element, width: u16, scroll: &mut ScrollState) {
    let viewport = width.saturating_sub(RAIL_X * 2);
    for (_, rail_id, _) in RAILS {
        if let Some(rail) = find_element(root, rail_id) {
            scroll.set_sizes(rail_id, intrinsic_width(rail), viewport);
        }
    }
}

fn draw(frame: &Element, width: u16, scroll: &ScrollState) -> io::Result<()> {
    let viewport = usize::from(width.saturating_sub(RAIL_X * 2));
    let mut stdout = io::stdout();

    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(
        stdout,
        Print("edgefade demo — wheel over a rail scrolls it sideways, q quits")
    )?;

    for (i, (wrapper_id, rail_id, title)) in RAILS.iter().enumerate() {
        let title_y = 2 + i as u16 * 4;
        queue!(stdout, cursor::MoveTo(0, title_y), Print(title))?;

        let Some(wrapper) = find_element(frame, wrapper_id) else {
            continue;
        };
        let Some(rail) = find_element(frame, rail_id) else {
            continue;
        };

        let offset = usize::from(scroll.get(rail_id));
        let line = rail_line(rail);

        let left = if wrapper.has_class(SHOW_LEFT_SHADOW) {
            "◀"
        } else {
            " "
        };
        let right = if wrapper.has_class(SHOW_RIGHT_SHADOW) {
            "▶"
        } else {
            " "
        };

        queue!(
            stdout,
            cursor::MoveTo(0, title_y + 1),
            Print(left),
            cursor::MoveTo(RAIL_X, title_y + 1),
            Print(visible_slice(&line, offset, viewport)),
            cursor::MoveTo(width.saturating_sub(1), title_y + 1),
            Print(right),
        )?;
    }

    stdout.flush()
}

/// Join a rail's text children with its gap, like a row layout would.
fn rail_line(rail: &Element) -> String {
    let Content::Children(children) = &rail.content else {
        return String::new();
    };
    let gap = " ".repeat(usize::from(rail.gap));
    children
        .iter()
        .filter_map(|child| match &child.content {
            Content::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(&gap)
}

/// The display columns [offset, offset + width) of a line.
fn visible_slice(line: &str, offset: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0;

    for ch in line.chars() {
        let w = char_width(ch).max(1);
        if col + w > offset + width {
            break;
        }
        if col >= offset {
            out.push(ch);
        }
        col += w;
    }

    out
}
