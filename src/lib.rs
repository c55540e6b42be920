//! # slide-text
//!
//! A text widget that reveals its characters with a staggered slide/fade
//! the first time it becomes visible.
//!
//! This crate provides platform-agnostic logic for:
//! - Resolving the widget's string attributes into a render config
//! - Splitting text into per-letter segments with stagger delays
//! - Generating the scoped stylesheet and markup fragment
//! - Firing the reveal exactly once when the container becomes visible
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load attribute presets from TOML
//! - `web` - Enable shadow DOM rendering and `IntersectionObserver` support
//!
//! ## Example
//!
//! ```rust
//! use slide_text::{Element, ManualWatcher, RevealMode, RevealState};
//!
//! let mut element = Element::new(RevealMode::OnVisible, ManualWatcher::new());
//! element.set_attribute("text", "AB C");
//! element.set_attribute("animation-direction", "right");
//! element.connected();
//! assert_eq!(element.reveal_state(), Some(RevealState::Armed));
//!
//! // Below the 10% threshold: nothing happens
//! assert!(!element.handle_intersection(0.05));
//!
//! // Crossing it fires the reveal once
//! assert!(element.handle_intersection(0.3));
//! assert!(element.html().contains("animation-delay: 0.2s"));
//! assert!(!element.handle_intersection(1.0));
//! ```

mod animation;
mod config;
mod element;
mod markup;
pub mod registry;
pub mod render;
mod style;
mod trigger;
#[cfg(feature = "web")]
pub mod web;

pub use animation::{Cascade, CascadeState, LetterAnimation};
pub use config::{is_observed, Attributes, Defaults, Direction, RevealMode, WidgetConfig, OBSERVED_ATTRIBUTES};
pub use element::Element;
pub use markup::{segments, stagger_delay, Segment, STAGGER_STEP_SECS};
pub use registry::{Registry, RegistryError, ELEMENT_NAME};
pub use render::Fragment;
pub use style::{keyframes, stylesheet};
pub use trigger::{ManualWatcher, RevealState, VisibilityTrigger, VisibilityWatcher, VISIBILITY_THRESHOLD};

#[cfg(feature = "web")]
pub use web::{DomWatcher, WebSlideText};
