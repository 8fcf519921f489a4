use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the innermost horizontally scrollable element at the given coordinates.
/// Returns None if no rail contains the point.
pub fn hit_test_rail(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_rail(layout, child, x, y) {
                return Some(id);
            }
        }
    }

    if root.overflow_x.scrolls() {
        Some(root.id.clone())
    } else {
        None
    }
}
