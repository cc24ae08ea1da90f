//! Scroll and pointer driven reveal engine.
//!
//! Everything under this module is pure: rules and pinned tracks turn a
//! per-frame [`sequencer::Snapshot`] into style states, and never touch the
//! DOM. The `dom` module measures the page, feeds snapshots in and writes
//! the resulting styles back.

pub mod easing;
pub mod frame;
pub mod pin;
pub mod rule;
pub mod sequencer;
pub mod style;
pub mod timeline;
pub mod trigger;

use thiserror::Error;

pub use easing::Easing;
pub use pin::{CardFocus, PinSpec};
pub use rule::{Playback, RevealSpec, Trigger};
pub use sequencer::{Sequencer, Snapshot};
pub use style::StyleState;
pub use trigger::ScrollRegion;

/// Handle for an element the engine animates or measures. Assigned by
/// whoever resolves selectors against the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("invalid trigger position `{0}`, expected two anchors such as \"top 85%\"")]
    InvalidPosition(String),
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not attach `{event}` listener: {reason}")]
    Listen { event: &'static str, reason: String },
    #[error("could not schedule animation frame: {0}")]
    Frame(String),
}
