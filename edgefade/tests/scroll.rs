use edgefade::{RailMetrics, ScrollState};

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn test_unknown_rail_reads_zero() {
    let scroll = ScrollState::new();
    assert_eq!(scroll.get("nope"), 0);
    assert_eq!(scroll.metrics("nope"), None);
}

#[test]
fn test_set_clamps_to_max() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);

    scroll.set("rail", 9000);
    assert_eq!(scroll.get("rail"), 700);
}

#[test]
fn test_scroll_by_accumulates() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);

    assert!(scroll.scroll_by("rail", 3));
    assert!(scroll.scroll_by("rail", 3));
    assert_eq!(scroll.get("rail"), 6);
}

#[test]
fn test_scroll_by_clamps_to_zero() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);
    scroll.set("rail", 2);

    assert!(scroll.scroll_by("rail", -5));
    assert_eq!(scroll.get("rail"), 0);

    // Already at the left edge: nothing changes.
    assert!(!scroll.scroll_by("rail", -5));
}

#[test]
fn test_scroll_by_clamps_to_max() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);
    scroll.set("rail", 699);

    assert!(scroll.scroll_by("rail", 5));
    assert_eq!(scroll.get("rail"), 700);
    assert!(!scroll.scroll_by("rail", 5));
}

// ============================================================================
// Sizes
// ============================================================================

#[test]
fn test_set_sizes_reclamps_offset() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);
    scroll.set("rail", 700);

    // Viewport grows to match the content: no valid offset but zero.
    scroll.set_sizes("rail", 1000, 1000);
    assert_eq!(scroll.get("rail"), 0);
}

#[test]
fn test_metrics_reflect_state() {
    let mut scroll = ScrollState::new();
    scroll.set_sizes("rail", 1000, 300);
    scroll.set("rail", 350);

    let metrics = scroll.metrics("rail").unwrap();
    assert_eq!(
        metrics,
        RailMetrics {
            offset: 350,
            content_width: 1000,
            viewport_width: 300,
        }
    );
    assert_eq!(metrics.max_offset(), 700);
}

#[test]
fn test_max_offset_saturates() {
    let metrics = RailMetrics {
        offset: 0,
        content_width: 200,
        viewport_width: 300,
    };
    assert_eq!(metrics.max_offset(), 0);
}
