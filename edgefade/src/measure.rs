use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::Direction;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Intrinsic width of an element: its text width, or its children combined
/// according to its direction (summed plus gaps in a row, widest in a
/// column). This is the content width an embedder reports to
/// `ScrollState::set_sizes` when it lays rails out itself.
pub fn intrinsic_width(element: &Element) -> u16 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => display_width(text) as u16,
        Content::Children(children) => match element.direction {
            Direction::Row => {
                let items: u16 = children.iter().map(intrinsic_width).sum();
                let gaps = element
                    .gap
                    .saturating_mul(children.len().saturating_sub(1) as u16);
                items.saturating_add(gaps)
            }
            Direction::Column => children.iter().map(intrinsic_width).max().unwrap_or(0),
        },
    }
}
