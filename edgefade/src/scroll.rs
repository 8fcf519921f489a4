use std::collections::HashMap;

use log::trace;

/// Scroll metrics for a single rail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RailMetrics {
    /// Current offset from the leftmost scroll position.
    pub offset: u16,
    /// Total scrollable content width.
    pub content_width: u16,
    /// Visible viewport width.
    pub viewport_width: u16,
}

impl RailMetrics {
    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.content_width.saturating_sub(self.viewport_width)
    }
}

/// Tracks horizontal scroll offsets for rail elements.
/// This is user-managed state that persists across frames; content and
/// viewport widths are reported by whoever lays the rails out.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, u16>,
    /// (content_width, viewport_width) per rail, updated by the renderer.
    sizes: HashMap<String, (u16, u16)>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for a rail.
    pub fn get(&self, id: &str) -> u16 {
        self.offsets.get(id).copied().unwrap_or(0)
    }

    /// Current metrics for a rail, if its sizes have been reported.
    pub fn metrics(&self, id: &str) -> Option<RailMetrics> {
        let (content_width, viewport_width) = self.sizes.get(id).copied()?;
        Some(RailMetrics {
            offset: self.get(id),
            content_width,
            viewport_width,
        })
    }

    /// Set the scroll offset for a rail, clamping to the valid range.
    pub fn set(&mut self, id: &str, offset: u16) {
        let clamped = offset.min(self.max_offset(id));
        self.offsets.insert(id.to_string(), clamped);
    }

    /// Scroll a rail by a delta amount, clamping to the valid range.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, id: &str, delta: i16) -> bool {
        let current = self.get(id);
        let max = self.max_offset(id);
        let new = (i32::from(current) + i32::from(delta)).clamp(0, i32::from(max)) as u16;

        if new != current {
            trace!("rail {id}: offset {current} -> {new}");
            self.offsets.insert(id.to_string(), new);
            true
        } else {
            false
        }
    }

    /// Report content and viewport widths for a rail (called by the renderer).
    /// Re-clamps the stored offset so it stays within range.
    pub fn set_sizes(&mut self, id: &str, content_width: u16, viewport_width: u16) {
        self.sizes
            .insert(id.to_string(), (content_width, viewport_width));

        let max = content_width.saturating_sub(viewport_width);
        if let Some(offset) = self.offsets.get_mut(id) {
            *offset = (*offset).min(max);
        }
    }

    fn max_offset(&self, id: &str) -> u16 {
        match self.sizes.get(id) {
            Some((content, viewport)) => content.saturating_sub(*viewport),
            // Sizes not reported yet; leave clamping to set_sizes.
            None => u16::MAX,
        }
    }
}
