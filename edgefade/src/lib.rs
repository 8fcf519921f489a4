pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod measure;
pub mod scroll;
pub mod shadow;
pub mod terminal;
pub mod types;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{convert_event, Event, WHEEL_STEP};
pub use hit::hit_test_rail;
pub use layout::{LayoutResult, Rect};
pub use measure::{display_width, intrinsic_width};
pub use scroll::{RailMetrics, ScrollState};
pub use shadow::{
    ShadowConfig, ShadowEdges, ShadowState, SCROLL_WRAPPER, SHOW_LEFT_SHADOW, SHOW_RIGHT_SHADOW,
};
pub use terminal::Terminal;
pub use types::*;
