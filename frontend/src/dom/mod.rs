//! Browser side of the reveal engine: selector resolution, measurement,
//! listeners and the animation-frame loop.

pub mod hooks;
pub mod listeners;
pub mod measure;
pub mod scene;

pub use hooks::{use_meta_description, use_scroll_scene};
pub use scene::ScrollScene;
