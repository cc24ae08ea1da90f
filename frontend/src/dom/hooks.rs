use log::error;
use yew::prelude::*;

use super::scene::ScrollScene;
use crate::motion::{MotionError, PinSpec, RevealSpec};

pub type MotionTable = fn() -> Result<(Vec<RevealSpec>, Vec<PinSpec>), MotionError>;

/// Mount a scroll scene once the component's markup is in the document and
/// tear it down on unmount. If the table or the browser bindings fail the
/// page still renders, just without motion.
#[hook]
pub fn use_scroll_scene(table: MotionTable) {
    use_effect_with_deps(
        move |_| {
            let scene = table().and_then(|(reveals, pins)| ScrollScene::mount(&reveals, &pins));
            let scene = match scene {
                Ok(scene) => Some(scene),
                Err(err) => {
                    error!("animations disabled: {}", err);
                    None
                }
            };
            move || drop(scene)
        },
        (),
    );
}

#[hook]
pub fn use_meta_description(description: &'static str) {
    use_effect_with_deps(
        move |_| {
            let meta = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.query_selector("meta[name=\"description\"]").ok().flatten());
            if let Some(meta) = meta {
                let _ = meta.set_attribute("content", description);
            }
            || ()
        },
        (),
    );
}
