//! Edge-fade indicator flags for horizontally scrollable rail regions.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::element::{find_element_mut, Content, Element};
use crate::event::Event;
use crate::hit::hit_test_rail;
use crate::layout::LayoutResult;
use crate::scroll::{RailMetrics, ScrollState};

/// Class marking an element as a shadowed scroll region wrapper.
pub const SCROLL_WRAPPER: &str = "scroll-wrapper";
/// Flag class set on a wrapper while its rail can scroll further left.
pub const SHOW_LEFT_SHADOW: &str = "show-left-shadow";
/// Flag class set on a wrapper while its rail can scroll further right.
pub const SHOW_RIGHT_SHADOW: &str = "show-right-shadow";

/// Distance from an edge (in cells) still counted as being at that edge.
const EDGE_TOLERANCE: u16 = 5;
/// Delay before the one-time recomputation after attach, so asynchronous
/// layout settling (late size reports) is picked up.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Tuning knobs for shadow tracking.
#[derive(Debug, Clone, Copy)]
pub struct ShadowConfig {
    pub edge_tolerance: u16,
    pub settle_delay: Duration,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: EDGE_TOLERANCE,
            settle_delay: SETTLE_DELAY,
        }
    }
}

/// Shadow visibility flags for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowEdges {
    pub left: bool,
    pub right: bool,
}

impl ShadowEdges {
    /// Derive flags from rail metrics.
    ///
    /// The left shadow shows while the rail is scrolled past `tolerance`
    /// from its start; the right shadow while the viewport end is more than
    /// `tolerance` short of the content end. A rail whose content fits in
    /// the viewport is at both edges at once, so both flags stay off.
    pub fn from_metrics(metrics: RailMetrics, tolerance: u16) -> Self {
        let offset = u32::from(metrics.offset);
        let at_start = offset < u32::from(tolerance);
        let at_end = offset + u32::from(metrics.viewport_width)
            >= u32::from(metrics.content_width).saturating_sub(u32::from(tolerance));

        Self {
            left: !at_start,
            right: !at_end,
        }
    }
}

#[derive(Debug)]
struct Region {
    rail: String,
    edges: ShadowEdges,
    /// Pending one-shot settle recomputation.
    settle_at: Option<Instant>,
}

/// Tracks shadow flags for scroll wrapper regions.
/// Like `ScrollState`, this is user-managed state that persists across
/// frames: attach once, feed it events, annotate each frame's tree.
#[derive(Debug, Default)]
pub struct ShadowState {
    config: ShadowConfig,
    regions: HashMap<String, Region>,
}

impl ShadowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShadowConfig) -> Self {
        Self {
            config,
            regions: HashMap::new(),
        }
    }

    /// Discover wrapper regions under `root` and start tracking them.
    ///
    /// Every element carrying the `scroll-wrapper` class is paired with its
    /// first descendant rail (horizontal `Scroll`/`Auto` overflow); a wrapper
    /// without a rail is skipped. Each attached region gets a one-shot
    /// settle recomputation scheduled `settle_delay` after `now`.
    /// Returns the wrapper IDs that were attached.
    pub fn attach(&mut self, root: &Element, now: Instant) -> Vec<String> {
        let mut wrappers = Vec::new();
        collect_wrappers(root, &mut wrappers);

        let mut attached = Vec::new();
        for wrapper in wrappers {
            let Some(rail) = find_rail(wrapper) else {
                continue;
            };

            debug!("attached region: wrapper {} rail {rail}", wrapper.id);
            self.regions.insert(
                wrapper.id.clone(),
                Region {
                    rail,
                    edges: ShadowEdges::default(),
                    settle_at: Some(now + self.config.settle_delay),
                },
            );
            attached.push(wrapper.id.clone());
        }

        attached
    }

    /// Stop tracking a region.
    /// Returns false if the wrapper was not attached.
    pub fn detach(&mut self, wrapper_id: &str) -> bool {
        self.regions.remove(wrapper_id).is_some()
    }

    /// Current flags for a wrapper, if attached.
    pub fn edges_for(&self, wrapper_id: &str) -> Option<ShadowEdges> {
        self.regions.get(wrapper_id).map(|region| region.edges)
    }

    /// Process events, updating rail offsets and region flags.
    /// Returns the events that were consumed (wheel events converted to
    /// horizontal scrolling; the embedder's default vertical handling must
    /// not also run for those).
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &LayoutResult,
        scroll: &mut ScrollState,
    ) -> Vec<Event> {
        let mut consumed = Vec::new();

        for event in events {
            match event {
                Event::Wheel {
                    x,
                    y,
                    delta_x,
                    delta_y,
                } => {
                    if *delta_y == 0 {
                        // Purely horizontal gesture; default handling stands.
                        continue;
                    }
                    let Some(rail_id) = hit_test_rail(layout, root, *x, *y) else {
                        continue;
                    };
                    let Some(wrapper_id) = self.wrapper_of(&rail_id) else {
                        continue;
                    };

                    // Vertical wheel input becomes horizontal scrolling.
                    debug!("wheel over rail {rail_id}: dy {delta_y} dx {delta_x}");
                    scroll.scroll_by(&rail_id, *delta_y);
                    if *delta_x != 0 {
                        scroll.scroll_by(&rail_id, *delta_x);
                    }
                    self.recompute(&wrapper_id, scroll);
                    consumed.push(event.clone());
                }
                Event::Scroll { target } => {
                    if let Some(target) = target {
                        if let Some(wrapper_id) = self.wrapper_for_target(target) {
                            self.recompute(&wrapper_id, scroll);
                        }
                    }
                }
                Event::Resize { .. } => {
                    // Layout metrics may have changed for any region.
                    self.refresh(scroll);
                }
            }
        }

        consumed
    }

    /// Run any pending settle recomputations whose deadline has passed.
    /// The embedder's loop supplies `now`; each settle check fires once.
    pub fn tick(&mut self, now: Instant, scroll: &ScrollState) {
        let due: Vec<String> = self
            .regions
            .iter()
            .filter(|(_, region)| region.settle_at.is_some_and(|at| at <= now))
            .map(|(id, _)| id.clone())
            .collect();

        for id in due {
            if let Some(region) = self.regions.get_mut(&id) {
                region.settle_at = None;
            }
            self.recompute(&id, scroll);
        }
    }

    /// Recompute flags for every attached region from current metrics.
    pub fn refresh(&mut self, scroll: &ScrollState) {
        let ids: Vec<String> = self.regions.keys().cloned().collect();
        for id in ids {
            self.recompute(&id, scroll);
        }
    }

    /// Write each attached region's flags onto its wrapper element.
    /// Wrappers outside the registry are left untouched.
    pub fn annotate(&self, root: &mut Element) {
        for (wrapper_id, region) in &self.regions {
            if let Some(wrapper) = find_element_mut(root, wrapper_id) {
                wrapper.set_class(SHOW_LEFT_SHADOW, region.edges.left);
                wrapper.set_class(SHOW_RIGHT_SHADOW, region.edges.right);
            }
        }
    }

    fn recompute(&mut self, wrapper_id: &str, scroll: &ScrollState) {
        let tolerance = self.config.edge_tolerance;
        if let Some(region) = self.regions.get_mut(wrapper_id) {
            // A rail with no reported sizes reads as no overflow.
            let metrics = scroll.metrics(&region.rail).unwrap_or_default();
            region.edges = ShadowEdges::from_metrics(metrics, tolerance);
        }
    }

    fn wrapper_of(&self, rail_id: &str) -> Option<String> {
        self.regions
            .iter()
            .find(|(_, region)| region.rail == rail_id)
            .map(|(wrapper_id, _)| wrapper_id.clone())
    }

    /// Accepts either a wrapper ID or a rail ID.
    fn wrapper_for_target(&self, target: &str) -> Option<String> {
        if self.regions.contains_key(target) {
            return Some(target.to_string());
        }
        self.wrapper_of(target)
    }
}

fn collect_wrappers<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    if element.has_class(SCROLL_WRAPPER) {
        out.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_wrappers(child, out);
        }
    }
}

/// First descendant of `wrapper` with horizontal scroll overflow.
fn find_rail(wrapper: &Element) -> Option<String> {
    let Content::Children(children) = &wrapper.content else {
        return None;
    };
    for child in children {
        if let Some(id) = find_rail_recursive(child) {
            return Some(id);
        }
    }
    None
}

fn find_rail_recursive(element: &Element) -> Option<String> {
    if element.overflow_x.scrolls() {
        return Some(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            if let Some(id) = find_rail_recursive(child) {
                return Some(id);
            }
        }
    }
    None
}
