use crossterm::event::{Event as CrosstermEvent, MouseEvent, MouseEventKind};

/// Cells scrolled per wheel tick.
pub const WHEEL_STEP: i16 = 3;

/// High-level events relevant to scroll tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A rail's scroll offset changed outside wheel handling
    /// (programmatic scrolling, scrollbar drag, etc.).
    Scroll { target: Option<String> },
    /// Mouse wheel input at terminal coordinates.
    Wheel {
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Convert a crossterm event.
/// Keys and clicks are not this library's concern and map to `None`.
pub fn convert_event(event: &CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn convert_mouse_event(event: &MouseEvent) -> Option<Event> {
    let (delta_x, delta_y) = match event.kind {
        MouseEventKind::ScrollUp => (0, -WHEEL_STEP),
        MouseEventKind::ScrollDown => (0, WHEEL_STEP),
        MouseEventKind::ScrollLeft => (-WHEEL_STEP, 0),
        MouseEventKind::ScrollRight => (WHEEL_STEP, 0),
        _ => return None,
    };

    Some(Event::Wheel {
        x: event.column,
        y: event.row,
        delta_x,
        delta_y,
    })
}
