//! Reveal rules: a trigger condition bound to a style transition.

use super::easing::Easing;
use super::style::StyleState;
use super::timeline::Timeline;
use super::trigger::{visible_fraction, Point, Rect, ScrollRegion, Viewport};
use super::TargetId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Enters on the first frame after registration.
    Mount,
    /// Inside while scroll sits between the region's start and end.
    Scroll(ScrollRegion),
    /// Inside while at least `amount` of the element's height is visible.
    InView { amount: f64 },
    /// Inside while the pointer is over the trigger element.
    Hover,
    /// Pointer x across the trigger element, left edge 0 to right edge 1.
    PointerTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Plays on entry. Exiting before the end reverses it, finishing latches
    /// the final state.
    OneShot,
    /// Plays on the first entry and never reverses.
    Once,
    /// Plays on entry, reverses on every exit.
    Toggle,
    /// Style follows trigger progress directly, no timing involved.
    Scrubbed,
}

/// Which element decides when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerElement {
    /// Every target triggers itself.
    Each,
    /// One shared element triggers the whole group.
    Shared(&'static str),
}

/// Declarative description of a reveal, resolved against the page at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSpec {
    pub targets: &'static str,
    pub trigger_element: TriggerElement,
    pub trigger: Trigger,
    pub playback: Playback,
    pub from: StyleState,
    pub to: StyleState,
    pub easing: Easing,
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Added per target index on top of `delay_ms`.
    pub stagger_ms: f64,
}

impl RevealSpec {
    pub fn new(targets: &'static str, from: StyleState, to: StyleState) -> Self {
        Self {
            targets,
            trigger_element: TriggerElement::Each,
            trigger: Trigger::Scroll(ScrollRegion {
                start: ScrollRegion::DEFAULT_START,
                end: None,
            }),
            playback: Playback::OneShot,
            from,
            to,
            easing: Easing::default(),
            duration_ms: 500.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
        }
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn triggered_by(mut self, selector: &'static str) -> Self {
        self.trigger_element = TriggerElement::Shared(selector);
        self
    }

    pub fn playback(mut self, playback: Playback) -> Self {
        self.playback = playback;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger_ms(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_ms + self.stagger_ms * index as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEventKind {
    /// Trigger condition became true.
    Entered,
    /// Delay elapsed and the style started moving.
    Started,
    /// Reached the final style.
    Completed,
    /// Began playing back toward the initial style.
    Reversed,
    /// Back at the initial style.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub target: TargetId,
    pub kind: RevealEventKind,
}

/// What one rule sees of the current frame.
#[derive(Debug, Clone, Copy)]
pub struct RuleFrame {
    pub trigger_rect: Rect,
    pub viewport: Viewport,
    pub pointer: Option<Point>,
    pub delta_ms: f64,
}

/// A registered rule with its playback state.
#[derive(Debug, Clone)]
pub struct RevealRule {
    target: TargetId,
    trigger_target: TargetId,
    trigger: Trigger,
    playback: Playback,
    from: StyleState,
    to: StyleState,
    easing: Easing,
    timeline: Timeline,
    inside: bool,
    latched: bool,
    scrub: f64,
}

impl RevealRule {
    pub fn new(spec: &RevealSpec, target: TargetId, trigger_target: TargetId, delay_ms: f64) -> Self {
        Self {
            target,
            trigger_target,
            trigger: spec.trigger,
            playback: spec.playback,
            from: spec.from,
            to: spec.to,
            easing: spec.easing,
            timeline: Timeline::new(spec.duration_ms, delay_ms),
            inside: false,
            latched: false,
            scrub: 0.0,
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn trigger_target(&self) -> TargetId {
        self.trigger_target
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Style the rule renders right now, without advancing anything.
    pub fn style(&self) -> StyleState {
        let progress = match self.playback {
            Playback::Scrubbed => self.scrub,
            _ => self.timeline.progress(),
        };
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    /// Trigger progress in [0, 1] for scrubbed playback.
    fn trigger_progress(&self, frame: &RuleFrame) -> f64 {
        let rect = &frame.trigger_rect;
        match self.trigger {
            Trigger::Mount => 1.0,
            Trigger::Scroll(region) => region.progress(rect, &frame.viewport),
            Trigger::InView { amount } => {
                let amount = amount.clamp(0.0, 1.0);
                if amount <= 0.0 {
                    1.0
                } else {
                    (visible_fraction(rect, &frame.viewport) / amount).min(1.0)
                }
            }
            Trigger::Hover => {
                if self.pointer_inside(frame) {
                    1.0
                } else {
                    0.0
                }
            }
            Trigger::PointerTrack => match frame.pointer {
                Some(_) if rect.width <= 0.0 => 1.0,
                Some(pointer) if rect.contains(pointer) => ((pointer.x - rect.left) / rect.width).clamp(0.0, 1.0),
                _ => 0.0,
            },
        }
    }

    fn is_inside(&self, frame: &RuleFrame) -> bool {
        let rect = &frame.trigger_rect;
        match self.trigger {
            Trigger::Mount => true,
            Trigger::Scroll(region) => {
                region.has_started(rect, &frame.viewport) && !region.has_ended(rect, &frame.viewport)
            }
            Trigger::InView { amount } => {
                let visible = visible_fraction(rect, &frame.viewport);
                if amount <= 0.0 {
                    visible > 0.0
                } else {
                    visible >= amount.min(1.0)
                }
            }
            Trigger::Hover | Trigger::PointerTrack => self.pointer_inside(frame),
        }
    }

    fn pointer_inside(&self, frame: &RuleFrame) -> bool {
        frame
            .pointer
            .is_some_and(|pointer| frame.trigger_rect.contains(pointer))
    }

    /// Evaluate the rule against one frame and return the style to render.
    pub fn update(&mut self, frame: &RuleFrame, events: &mut Vec<RevealEvent>) -> StyleState {
        if self.playback == Playback::Scrubbed {
            self.update_scrubbed(frame, events);
        } else {
            self.update_timed(frame, events);
        }
        self.style()
    }

    fn update_scrubbed(&mut self, frame: &RuleFrame, events: &mut Vec<RevealEvent>) {
        let previous = self.scrub;
        let progress = self.trigger_progress(frame);
        self.scrub = progress;

        if previous <= 0.0 && progress > 0.0 {
            self.emit(events, RevealEventKind::Entered);
        }
        if previous < 1.0 && progress >= 1.0 {
            self.emit(events, RevealEventKind::Completed);
        }
        if previous > 0.0 && progress <= 0.0 {
            self.emit(events, RevealEventKind::Settled);
        }
    }

    fn update_timed(&mut self, frame: &RuleFrame, events: &mut Vec<RevealEvent>) {
        let inside = self.is_inside(frame);
        if inside && !self.inside {
            self.emit(events, RevealEventKind::Entered);
            if !self.latched {
                self.timeline.play();
            }
        } else if !inside && self.inside {
            self.on_exit(events);
        }
        self.inside = inside;

        let step = self.timeline.advance(frame.delta_ms);
        if step.started {
            self.emit(events, RevealEventKind::Started);
        }
        if step.completed {
            if matches!(self.playback, Playback::OneShot | Playback::Once) {
                self.latched = true;
            }
            self.emit(events, RevealEventKind::Completed);
        }
        if step.settled {
            self.emit(events, RevealEventKind::Settled);
        }
    }

    fn on_exit(&mut self, events: &mut Vec<RevealEvent>) {
        let reverse = match self.playback {
            Playback::OneShot => !self.latched && !self.timeline.is_complete(),
            Playback::Toggle => true,
            Playback::Once | Playback::Scrubbed => false,
        };
        if !reverse {
            return;
        }
        let was_moving = self.timeline.progress() > 0.0 || self.timeline.is_running();
        self.timeline.reverse();
        if was_moving && self.timeline.is_running() {
            self.emit(events, RevealEventKind::Reversed);
        }
    }

    fn emit(&self, events: &mut Vec<RevealEvent>, kind: RevealEventKind) {
        events.push(RevealEvent { target: self.target, kind });
    }
}
