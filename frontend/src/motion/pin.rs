//! Pinned horizontal track: a stretch of vertical scroll remapped to sideways
//! travel of a wide card strip.
//!
//! Nothing here is cached between frames. Every quantity is derived from the
//! [`PinLayout`] measured for the current frame, so a resize mid-pin moves the
//! start, end and excursion together and progress 1 keeps landing the last
//! card on the viewport edge.

use super::easing::Easing;
use super::style::StyleState;
use super::trigger::Viewport;
use super::TargetId;

/// Horizontal extent of a card inside the track, in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Measurements of the track strip itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackMetrics {
    pub scroll_width: f64,
    /// Trailing padding inside the strip after the last card.
    pub padding_end: f64,
    pub cards: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PinLayout {
    /// Document offset of the pinned section's top edge.
    pub start: f64,
    /// Viewport x where the untranslated strip begins.
    pub origin_x: f64,
    pub viewport: Viewport,
    pub track: TrackMetrics,
}

impl PinLayout {
    /// Horizontal distance the strip travels between progress 0 and 1.
    pub fn excursion(&self) -> f64 {
        let distance = self.track.scroll_width - self.viewport.width - self.track.padding_end;
        if distance.is_finite() {
            distance.max(0.0)
        } else {
            0.0
        }
    }

    /// Vertical scroll consumed while pinned equals the horizontal excursion.
    pub fn end(&self) -> f64 {
        self.start + self.excursion()
    }

    /// Height of the outer section so a sticky inner panel stays pinned for
    /// exactly the excursion.
    pub fn spacer_height(&self) -> f64 {
        self.viewport.height + self.excursion()
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        let excursion = self.excursion();
        if excursion <= 0.0 {
            return 1.0;
        }
        ((scroll_y - self.start) / excursion).clamp(0.0, 1.0)
    }

    pub fn translate_x(&self, progress: f64) -> f64 {
        -self.excursion() * progress.clamp(0.0, 1.0)
    }

    pub fn phase(&self, scroll_y: f64) -> PinPhase {
        if scroll_y < self.start {
            return PinPhase::Before;
        }
        if scroll_y >= self.end() {
            return PinPhase::After;
        }
        if self.progress(scroll_y) <= 0.0 {
            PinPhase::Pinning
        } else {
            PinPhase::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    /// Section not reached yet, strip at rest.
    Before,
    /// Section top sits on the viewport top, capture begins.
    Pinning,
    /// Scroll drives the strip sideways.
    Active,
    /// Strip reached its end, vertical scroll released.
    After,
}

/// How cards look as they travel past the viewport centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFocus {
    pub focused: StyleState,
    pub unfocused: StyleState,
    /// Distance from centre, as a fraction of viewport width, at which a card
    /// is fully unfocused.
    pub reach: f64,
    pub easing: Easing,
}

impl Default for CardFocus {
    fn default() -> Self {
        Self {
            focused: StyleState::IDENTITY,
            unfocused: StyleState::IDENTITY.opacity(0.45).blur(6.0).scale(0.88),
            reach: 0.6,
            easing: Easing::POWER2_OUT,
        }
    }
}

impl CardFocus {
    /// Focus amount in [0, 1] for a card centred at `screen_x`.
    pub fn amount(&self, screen_x: f64, viewport: &Viewport) -> f64 {
        let reach = viewport.width * self.reach;
        if reach <= 0.0 {
            return 1.0;
        }
        let distance = (screen_x - viewport.width / 2.0).abs();
        1.0 - (distance / reach).clamp(0.0, 1.0)
    }

    pub fn style(&self, screen_x: f64, viewport: &Viewport) -> StyleState {
        let amount = self.amount(screen_x, viewport);
        self.unfocused.lerp(&self.focused, self.easing.apply(amount))
    }
}

/// Selectors for a pinned section.
#[derive(Debug, Clone, PartialEq)]
pub struct PinSpec {
    /// Tall outer section; its height is managed to match the excursion.
    pub section: &'static str,
    /// The strip that moves sideways.
    pub track: &'static str,
    pub cards: &'static str,
    pub focus: CardFocus,
}

/// Everything a pinned track renders for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PinFrame {
    pub phase: PinPhase,
    pub progress: f64,
    pub track_style: StyleState,
    pub card_styles: Vec<(TargetId, StyleState)>,
    pub spacer_height: f64,
}

#[derive(Debug, Clone)]
pub struct PinnedTrack {
    section: TargetId,
    track: TargetId,
    cards: Vec<TargetId>,
    focus: CardFocus,
    phase: PinPhase,
}

impl PinnedTrack {
    pub fn new(spec: &PinSpec, section: TargetId, track: TargetId, cards: Vec<TargetId>) -> Self {
        Self {
            section,
            track,
            cards,
            focus: spec.focus,
            phase: PinPhase::Before,
        }
    }

    pub fn section(&self) -> TargetId {
        self.section
    }

    pub fn track(&self) -> TargetId {
        self.track
    }

    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// Pure evaluation at a scroll offset. Same offset and layout, same frame.
    pub fn evaluate(&self, scroll_y: f64, layout: &PinLayout) -> PinFrame {
        let progress = layout.progress(scroll_y);
        let translate_x = layout.translate_x(progress);
        let card_styles = self
            .cards
            .iter()
            .zip(layout.track.cards.iter())
            .map(|(id, span)| {
                let screen_x = layout.origin_x + span.center() + translate_x;
                (*id, self.focus.style(screen_x, &layout.viewport))
            })
            .collect();

        PinFrame {
            phase: layout.phase(scroll_y),
            progress,
            track_style: StyleState::IDENTITY.x(translate_x),
            card_styles,
            spacer_height: layout.spacer_height(),
        }
    }

    /// Evaluate and remember the phase so transitions can be reported.
    /// Returns the previous phase when it changed.
    pub fn update(&mut self, scroll_y: f64, layout: &PinLayout) -> (PinFrame, Option<PinPhase>) {
        let frame = self.evaluate(scroll_y, layout);
        let previous = self.phase;
        self.phase = frame.phase;
        let changed = (previous != frame.phase).then_some(previous);
        (frame, changed)
    }
}
