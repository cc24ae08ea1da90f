use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

use super::listeners::{DomHost, ListenerGroup};
use super::measure;
use crate::motion::frame::FrameGate;
use crate::motion::pin::PinSpec;
use crate::motion::rule::{RevealSpec, TriggerElement};
use crate::motion::trigger::Point;
use crate::motion::{MotionError, Sequencer, Snapshot, TargetId};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct TrackElements {
    track_id: TargetId,
    track: HtmlElement,
    cards: Vec<HtmlElement>,
}

/// Elements known to the engine, indexed by `TargetId`.
#[derive(Default)]
struct Registry {
    elements: Vec<HtmlElement>,
}

impl Registry {
    fn id_of(&mut self, element: HtmlElement) -> TargetId {
        let index = match self.elements.iter().position(|known| *known == element) {
            Some(index) => index,
            None => {
                self.elements.push(element);
                self.elements.len() - 1
            }
        };
        TargetId(index as u32)
    }

    fn get(&self, id: TargetId) -> Option<&HtmlElement> {
        self.elements.get(id.0 as usize)
    }

    fn select_all(&mut self, document: &Document, selector: &str) -> Vec<(TargetId, HtmlElement)> {
        let Ok(nodes) = document.query_selector_all(selector) else {
            warn!("bad selector `{}`", selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| (self.id_of(element.clone()), element))
            .collect()
    }

    fn select_first(&mut self, document: &Document, selector: &str) -> Option<TargetId> {
        let element = document.query_selector(selector).ok().flatten()?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(self.id_of(element))
    }
}

struct SceneState {
    window: Window,
    sequencer: Sequencer,
    registry: Registry,
    tracks: Vec<TrackElements>,
    pointer: Option<Point>,
    gate: FrameGate,
    frame_id: Option<i32>,
}

impl SceneState {
    fn snapshot(&self, now_ms: f64) -> Snapshot {
        let mut snapshot = Snapshot::new(now_ms, measure::scroll_y(&self.window), measure::viewport(&self.window))
            .with_pointer(self.pointer);
        for (index, element) in self.registry.elements.iter().enumerate() {
            snapshot.set_rect(TargetId(index as u32), measure::rect(element));
        }
        for track in &self.tracks {
            snapshot.set_track(
                track.track_id,
                measure::track_metrics(&self.window, &track.track, &track.cards),
            );
        }
        snapshot
    }

    /// Measure, evaluate and write back. Returns whether another frame is
    /// needed to keep a timeline moving.
    fn render(&mut self, now_ms: f64) -> bool {
        let snapshot = self.snapshot(now_ms);
        let output = self.sequencer.frame(&snapshot);

        for (target, style) in &output.styles {
            if let Some(element) = self.registry.get(*target) {
                measure::apply_style(element, &style.css());
            }
        }
        for (section, height) in &output.spacers {
            if let Some(element) = self.registry.get(*section) {
                measure::set_height(element, *height);
            }
        }
        for event in &output.events {
            debug!("reveal {:?} {:?}", event.target, event.kind);
        }
        for (section, phase) in &output.pin_phases {
            debug!("pin {:?} now {:?}", section, phase);
        }
        output.needs_frame
    }
}

fn request_frame(state: &Rc<RefCell<SceneState>>, callback: &FrameCallback) {
    let mut state = state.borrow_mut();
    if !state.gate.request() {
        return;
    }
    let callback = callback.borrow();
    let Some(callback) = callback.as_ref() else {
        state.gate.cancel();
        return;
    };
    match state.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => state.frame_id = Some(id),
        Err(err) => {
            state.gate.cancel();
            warn!("{}", MotionError::Frame(format!("{:?}", err)));
        }
    }
}

fn frame_requester(state: Weak<RefCell<SceneState>>, callback: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> impl Fn() {
    move || {
        if let (Some(state), Some(callback)) = (state.upgrade(), callback.upgrade()) {
            request_frame(&state, &callback);
        }
    }
}

/// Animation runtime for one mounted page. Holds every listener and the
/// pending frame; dropping it tears all of it down.
pub struct ScrollScene {
    state: Rc<RefCell<SceneState>>,
    callback: FrameCallback,
    listeners: ListenerGroup<DomHost>,
}

impl ScrollScene {
    pub fn mount(reveals: &[RevealSpec], pins: &[PinSpec]) -> Result<Self, MotionError> {
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let document = window.document().ok_or(MotionError::NoDocument)?;

        let mut registry = Registry::default();
        let mut sequencer = Sequencer::new();
        for spec in reveals {
            let targets: Vec<TargetId> = registry
                .select_all(&document, spec.targets)
                .into_iter()
                .map(|(id, _)| id)
                .collect();
            let trigger = match spec.trigger_element {
                TriggerElement::Each => None,
                TriggerElement::Shared(selector) => registry.select_first(&document, selector),
            };
            sequencer.register(spec, &targets, trigger);
        }

        let mut tracks = Vec::new();
        for pin in pins {
            let section = registry.select_first(&document, pin.section);
            let track = registry.select_first(&document, pin.track);
            let cards = registry.select_all(&document, pin.cards);
            let card_ids = cards.iter().map(|(id, _)| *id).collect();
            let registered = sequencer.register_pin(pin, section, track, card_ids);
            if let (true, Some(track_id)) = (registered, track) {
                if let Some(track_element) = registry.get(track_id).cloned() {
                    tracks.push(TrackElements {
                        track_id,
                        track: track_element,
                        cards: cards.into_iter().map(|(_, element)| element).collect(),
                    });
                }
            }
        }

        let rule_count = sequencer.rule_count();
        let pin_count = sequencer.pin_count();
        let skipped = sequencer.skipped();

        let state = Rc::new(RefCell::new(SceneState {
            window: window.clone(),
            sequencer,
            registry,
            tracks,
            pointer: None,
            gate: FrameGate::new(),
            frame_id: None,
        }));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        {
            let weak_state = Rc::downgrade(&state);
            let weak_callback = Rc::downgrade(&callback);
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                let (Some(state), Some(callback)) = (weak_state.upgrade(), weak_callback.upgrade()) else {
                    return;
                };
                let needs_frame = {
                    let mut scene = state.borrow_mut();
                    scene.gate.begin_frame();
                    scene.frame_id = None;
                    scene.render(now)
                };
                if needs_frame {
                    request_frame(&state, &callback);
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let mut listeners = ListenerGroup::new(DomHost::new(window));
        for event in ["scroll", "resize"] {
            let request = frame_requester(Rc::downgrade(&state), Rc::downgrade(&callback));
            listeners.listen(event, Box::new(move |_: Event| request()))?;
        }
        {
            let weak_state = Rc::downgrade(&state);
            let request = frame_requester(Rc::downgrade(&state), Rc::downgrade(&callback));
            listeners.listen(
                "pointermove",
                Box::new(move |event: Event| {
                    if let (Some(state), Some(mouse)) = (weak_state.upgrade(), event.dyn_ref::<MouseEvent>()) {
                        state.borrow_mut().pointer = Some(Point {
                            x: f64::from(mouse.client_x()),
                            y: f64::from(mouse.client_y()),
                        });
                    }
                    request();
                }),
            )?;
        }
        {
            let weak_state = Rc::downgrade(&state);
            let request = frame_requester(Rc::downgrade(&state), Rc::downgrade(&callback));
            listeners.listen(
                "pointerout",
                Box::new(move |event: Event| {
                    // the pointer left the window, not just an element
                    let left_window = event
                        .dyn_ref::<MouseEvent>()
                        .is_some_and(|mouse| mouse.related_target().is_none());
                    if !left_window {
                        return;
                    }
                    if let Some(state) = weak_state.upgrade() {
                        state.borrow_mut().pointer = None;
                    }
                    request();
                }),
            )?;
        }

        info!(
            "scroll scene mounted: {} reveals, {} pinned tracks, {} skipped, {} listeners",
            rule_count,
            pin_count,
            skipped,
            listeners.len()
        );
        request_frame(&state, &callback);
        Ok(Self { state, callback, listeners })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ScrollScene {
    fn drop(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            if let Some(id) = state.frame_id.take() {
                let _ = state.window.cancel_animation_frame(id);
            }
            state.gate.cancel();
        }
        self.listeners.release();
        self.callback.borrow_mut().take();
        info!("scroll scene torn down");
    }
}
