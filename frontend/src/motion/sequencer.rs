//! Drives every registered reveal rule and pinned track from per-frame
//! measurements and reports the styles that changed.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::pin::{PinFrame, PinLayout, PinPhase, PinSpec, PinnedTrack, TrackMetrics};
use super::rule::{RevealEvent, RevealRule, RevealSpec, RuleFrame, TriggerElement};
use super::style::StyleState;
use super::timeline::smooth_delta;
use super::trigger::{Point, Rect, Viewport};
use super::TargetId;

/// Measurements taken at the start of one animation frame.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub now_ms: f64,
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub pointer: Option<Point>,
    rects: HashMap<TargetId, Rect>,
    tracks: HashMap<TargetId, TrackMetrics>,
}

impl Snapshot {
    pub fn new(now_ms: f64, scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            now_ms,
            scroll_y,
            viewport,
            ..Self::default()
        }
    }

    pub fn with_pointer(mut self, pointer: Option<Point>) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn set_rect(&mut self, target: TargetId, rect: Rect) {
        self.rects.insert(target, rect);
    }

    pub fn rect(&self, target: TargetId) -> Option<Rect> {
        self.rects.get(&target).copied()
    }

    pub fn set_track(&mut self, track: TargetId, metrics: TrackMetrics) {
        self.tracks.insert(track, metrics);
    }

    pub fn track(&self, track: TargetId) -> Option<&TrackMetrics> {
        self.tracks.get(&track)
    }

    fn pin_layout(&self, pin: &PinnedTrack) -> Option<PinLayout> {
        let section = self.rect(pin.section())?;
        let track = self.track(pin.track())?.clone();
        Some(PinLayout {
            start: section.top + self.scroll_y,
            origin_x: section.left,
            viewport: self.viewport,
            track,
        })
    }
}

/// Result of one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    /// Targets whose composed style differs from the previous frame.
    pub styles: Vec<(TargetId, StyleState)>,
    /// Pinned sections whose spacer height changed.
    pub spacers: Vec<(TargetId, f64)>,
    pub events: Vec<RevealEvent>,
    /// Pinned sections that changed phase this frame, with the new phase.
    pub pin_phases: Vec<(TargetId, PinPhase)>,
    /// A timeline is still moving and wants another frame.
    pub needs_frame: bool,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    rules: Vec<RevealRule>,
    pins: Vec<PinnedTrack>,
    last_frame_ms: Option<f64>,
    rendered: HashMap<TargetId, StyleState>,
    spacers: HashMap<TargetId, f64>,
    skipped: usize,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one reveal for each target, in document order. Targets
    /// missing from the page are not an error: the rule is skipped and 0 is
    /// returned.
    pub fn register(&mut self, spec: &RevealSpec, targets: &[TargetId], shared_trigger: Option<TargetId>) -> usize {
        if targets.is_empty() {
            debug!("skipping reveal for `{}`: no matching elements", spec.targets);
            self.skipped += 1;
            return 0;
        }
        let shared = match spec.trigger_element {
            TriggerElement::Each => None,
            TriggerElement::Shared(selector) => match shared_trigger {
                Some(trigger) => Some(trigger),
                None => {
                    debug!("skipping reveal for `{}`: trigger `{}` not found", spec.targets, selector);
                    self.skipped += 1;
                    return 0;
                }
            },
        };

        for (index, target) in targets.iter().enumerate() {
            let trigger = shared.unwrap_or(*target);
            self.rules
                .push(RevealRule::new(spec, *target, trigger, spec.delay_for(index)));
        }
        targets.len()
    }

    /// Register a pinned track. Skipped, returning `false`, when the section
    /// or strip is missing.
    pub fn register_pin(
        &mut self,
        spec: &PinSpec,
        section: Option<TargetId>,
        track: Option<TargetId>,
        cards: Vec<TargetId>,
    ) -> bool {
        match (section, track) {
            (Some(section), Some(track)) => {
                self.pins.push(PinnedTrack::new(spec, section, track, cards));
                true
            }
            _ => {
                debug!("skipping pinned track `{}`: section or strip not found", spec.section);
                self.skipped += 1;
                false
            }
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_running(&self) -> bool {
        self.rules.iter().any(RevealRule::is_running)
    }

    /// Evaluate the pinned track at `index` without touching any state.
    pub fn preview_pin(&self, index: usize, snapshot: &Snapshot) -> Option<PinFrame> {
        let pin = self.pins.get(index)?;
        let layout = snapshot.pin_layout(pin)?;
        Some(pin.evaluate(snapshot.scroll_y, &layout))
    }

    pub fn frame(&mut self, snapshot: &Snapshot) -> FrameOutput {
        let delta_ms = match self.last_frame_ms {
            Some(last) => smooth_delta(snapshot.now_ms - last),
            None => 0.0,
        };
        self.last_frame_ms = Some(snapshot.now_ms);

        let mut output = FrameOutput::default();
        let mut composed: BTreeMap<TargetId, StyleState> = BTreeMap::new();

        for rule in &mut self.rules {
            // a target removed from the page keeps its last state
            let Some(measured) = snapshot.rect(rule.trigger_target()) else {
                continue;
            };
            // bounding rects include the transform written last frame; a rule
            // must not trigger off its own output
            let trigger_rect = match self.rendered.get(&rule.trigger_target()) {
                Some(style) => style.layout_rect(&measured),
                None => measured,
            };
            let frame = RuleFrame {
                trigger_rect,
                viewport: snapshot.viewport,
                pointer: snapshot.pointer,
                delta_ms,
            };
            let style = rule.update(&frame, &mut output.events);
            let entry = composed.entry(rule.target()).or_insert(StyleState::IDENTITY);
            *entry = entry.compose(&style);
        }

        for pin in &mut self.pins {
            let Some(layout) = snapshot.pin_layout(pin) else {
                continue;
            };
            let (frame, changed) = pin.update(snapshot.scroll_y, &layout);
            if changed.is_some() {
                debug!("pinned track {:?} -> {:?} at progress {:.3}", pin.section(), frame.phase, frame.progress);
                output.pin_phases.push((pin.section(), frame.phase));
            }

            let track = composed.entry(pin.track()).or_insert(StyleState::IDENTITY);
            *track = track.compose(&frame.track_style);
            for (card, style) in &frame.card_styles {
                let entry = composed.entry(*card).or_insert(StyleState::IDENTITY);
                *entry = entry.compose(style);
            }

            let stale = self
                .spacers
                .get(&pin.section())
                .map_or(true, |height| (height - frame.spacer_height).abs() > 0.5);
            if stale {
                self.spacers.insert(pin.section(), frame.spacer_height);
                output.spacers.push((pin.section(), frame.spacer_height));
            }
        }

        for (target, style) in composed {
            if self.rendered.get(&target) != Some(&style) {
                self.rendered.insert(target, style);
                output.styles.push((target, style));
            }
        }

        output.needs_frame = self.is_running();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::Easing;
    use crate::motion::pin::{CardFocus, Span};
    use crate::motion::rule::{Playback, RevealEventKind, Trigger};
    use crate::motion::trigger::ScrollRegion;

    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };
    const CARD_DELAY_MS: f64 = 80.0;

    fn service_reveal() -> RevealSpec {
        RevealSpec::new(
            ".service-card",
            StyleState::IDENTITY.y(26.0).opacity(0.3),
            StyleState::IDENTITY,
        )
        .trigger(Trigger::Scroll(ScrollRegion::starting_at("top 88%").unwrap()))
        .easing(Easing::POWER2_OUT)
        .duration_ms(900.0)
        .stagger_ms(CARD_DELAY_MS)
    }

    fn cards() -> Vec<TargetId> {
        (0..5).map(TargetId).collect()
    }

    /// Scroll down from the top in 40px steps, one frame per 16ms, and record
    /// the order in which reveals start.
    fn started_order(document_top: impl Fn(usize) -> f64) -> Vec<TargetId> {
        let mut sequencer = Sequencer::new();
        assert_eq!(sequencer.register(&service_reveal(), &cards(), None), 5);

        let mut started = Vec::new();
        for step in 0..200 {
            let scroll_y = step as f64 * 40.0;
            let mut snapshot = Snapshot::new(step as f64 * 16.0, scroll_y, VIEWPORT);
            for (index, card) in cards().into_iter().enumerate() {
                snapshot.set_rect(card, Rect::new(0.0, document_top(index) - scroll_y, 300.0, 240.0));
            }
            let output = sequencer.frame(&snapshot);
            started.extend(
                output
                    .events
                    .iter()
                    .filter(|e| e.kind == RevealEventKind::Started)
                    .map(|e| e.target),
            );
        }
        started
    }

    #[test]
    fn stacked_cards_start_in_index_order() {
        let order = started_order(|index| 1200.0 + index as f64 * 300.0);
        assert_eq!(order, cards());
    }

    #[test]
    fn cards_in_one_row_cascade_by_stagger() {
        let order = started_order(|_| 1200.0);
        assert_eq!(order, cards());
    }

    #[test]
    fn stagger_offsets_follow_index() {
        let spec = service_reveal().delay_ms(100.0);
        assert_eq!(spec.delay_for(0), 100.0);
        assert_eq!(spec.delay_for(4), 100.0 + 4.0 * CARD_DELAY_MS);
    }

    #[test]
    fn missing_targets_are_skipped_silently() {
        let mut sequencer = Sequencer::new();
        assert_eq!(sequencer.register(&service_reveal(), &[], None), 0);

        let shared = service_reveal().triggered_by(".about-trigger");
        assert_eq!(sequencer.register(&shared, &cards(), None), 0);

        let pin = PinSpec {
            section: ".hardware-pin",
            track: ".hardware-track",
            cards: ".hardware-card",
            focus: CardFocus::default(),
        };
        assert!(!sequencer.register_pin(&pin, Some(TargetId(9)), None, Vec::new()));

        assert_eq!(sequencer.rule_count(), 0);
        assert_eq!(sequencer.pin_count(), 0);
        assert_eq!(sequencer.skipped(), 3);

        let output = sequencer.frame(&Snapshot::new(0.0, 0.0, VIEWPORT));
        assert!(output.styles.is_empty());
        assert!(!output.needs_frame);
    }

    #[test]
    fn shared_trigger_drives_the_whole_group() {
        let spec = RevealSpec::new(
            ".reveal-blur",
            StyleState::IDENTITY.opacity(0.0).blur(12.0).y(30.0),
            StyleState::IDENTITY,
        )
        .triggered_by(".about-trigger")
        .trigger(Trigger::Scroll(ScrollRegion::starting_at("top 82%").unwrap()))
        .duration_ms(1100.0)
        .stagger_ms(150.0);

        let mut sequencer = Sequencer::new();
        let about = TargetId(20);
        assert_eq!(sequencer.register(&spec, &[TargetId(21), TargetId(22)], Some(about)), 2);

        let mut snapshot = Snapshot::new(0.0, 0.0, VIEWPORT);
        snapshot.set_rect(about, Rect::new(0.0, 500.0, 1200.0, 600.0));
        // the targets themselves are never measured for triggering
        let output = sequencer.frame(&snapshot);
        let entered: Vec<_> = output
            .events
            .iter()
            .filter(|e| e.kind == RevealEventKind::Entered)
            .map(|e| e.target)
            .collect();
        assert_eq!(entered, vec![TargetId(21), TargetId(22)]);
        assert!(output.needs_frame);
    }

    #[test]
    fn unchanged_styles_are_not_reported_twice() {
        let mut sequencer = Sequencer::new();
        sequencer.register(&service_reveal(), &[TargetId(0)], None);
        let mut snapshot = Snapshot::new(0.0, 0.0, VIEWPORT);
        snapshot.set_rect(TargetId(0), Rect::new(0.0, 2000.0, 300.0, 240.0));

        assert_eq!(sequencer.frame(&snapshot).styles.len(), 1);
        snapshot.now_ms = 16.0;
        assert!(sequencer.frame(&snapshot).styles.is_empty());
    }

    #[test]
    fn lag_spike_advances_a_single_step() {
        let mut sequencer = Sequencer::new();
        sequencer.register(&service_reveal(), &[TargetId(0)], None);
        let mut snapshot = Snapshot::new(0.0, 0.0, VIEWPORT);
        snapshot.set_rect(TargetId(0), Rect::new(0.0, 100.0, 300.0, 240.0));
        sequencer.frame(&snapshot);

        // tab was hidden for ten seconds
        snapshot.now_ms = 10_000.0;
        let output = sequencer.frame(&snapshot);
        assert!(output.needs_frame);
        assert!(!output.events.iter().any(|e| e.kind == RevealEventKind::Completed));
    }

    #[test]
    fn hover_composes_with_reveal_on_the_same_card() {
        let hover = RevealSpec::new(".service-card", StyleState::IDENTITY, StyleState::IDENTITY.y(-6.0))
            .trigger(Trigger::Hover)
            .playback(Playback::Toggle)
            .duration_ms(0.0);
        let mut sequencer = Sequencer::new();
        sequencer.register(&service_reveal(), &[TargetId(0)], None);
        sequencer.register(&hover, &[TargetId(0)], None);

        let mut snapshot = Snapshot::new(0.0, 0.0, VIEWPORT).with_pointer(Some(Point { x: 10.0, y: 10.0 }));
        snapshot.set_rect(TargetId(0), Rect::new(0.0, 0.0, 300.0, 240.0));
        let mut last = StyleState::IDENTITY;
        for step in 0..5 {
            snapshot.now_ms = step as f64 * 400.0;
            if let Some((_, style)) = sequencer.frame(&snapshot).styles.last() {
                last = *style;
            }
        }
        // reveal finished at y 0, hover adds -6
        assert!((last.translate_y + 6.0).abs() < 1e-6);
    }

    /// Measured rect of an element whose layout top is `layout_top`, with
    /// the style the sequencer last reported for it applied.
    fn measured(layout_top: f64, height: f64, applied: &StyleState) -> Rect {
        let layout = Rect::new(100.0, layout_top, 300.0, height);
        let width = layout.width * applied.scale;
        let scaled_height = layout.height * applied.scale;
        Rect::new(
            layout.left + (layout.width - width) / 2.0 + applied.translate_x,
            layout.top + (layout.height - scaled_height) / 2.0 + applied.translate_y,
            width,
            scaled_height,
        )
    }

    fn heading_at(sequencer: &mut Sequencer, path: &[f64]) -> StyleState {
        let heading = TargetId(0);
        let mut applied = StyleState::IDENTITY;
        for (step, scroll_y) in path.iter().enumerate() {
            let mut snapshot = Snapshot::new(step as f64 * 16.0, *scroll_y, VIEWPORT);
            snapshot.set_rect(heading, measured(2000.0 - scroll_y, 60.0, &applied));
            for (target, style) in sequencer.frame(&snapshot).styles {
                if target == heading {
                    applied = style;
                }
            }
        }
        applied
    }

    #[test]
    fn scrubbed_heading_ignores_scroll_direction() {
        let heading = RevealSpec::new(".section-heading", StyleState::IDENTITY.opacity(0.35).y(18.0), StyleState::IDENTITY)
            .trigger(Trigger::Scroll(ScrollRegion::between("top bottom", "top 60%").unwrap()))
            .playback(Playback::Scrubbed)
            .easing(Easing::Linear);

        let downward: Vec<f64> = (0..=7).map(|i| 1000.0 + i as f64 * 50.0).collect();
        let upward: Vec<f64> = (0..=7).map(|i| 1700.0 - i as f64 * 50.0).collect();
        assert_eq!(downward.last(), upward.last());

        let mut down = Sequencer::new();
        down.register(&heading, &[TargetId(0)], None);
        let mut up = Sequencer::new();
        up.register(&heading, &[TargetId(0)], None);

        let from_above = heading_at(&mut down, &downward);
        let from_below = heading_at(&mut up, &upward);
        assert!(from_above.approx_eq(&from_below, 1e-9), "{:?} vs {:?}", from_above, from_below);

        // 1350 is 150 of the 320px region
        let expected = heading.from.lerp(&heading.to, 150.0 / 320.0);
        assert!(from_above.approx_eq(&expected, 1e-9));
    }

    #[test]
    fn hover_lift_is_stable_under_a_still_pointer() {
        let hover = RevealSpec::new(".service-card", StyleState::IDENTITY, StyleState::IDENTITY.y(-6.0))
            .trigger(Trigger::Hover)
            .playback(Playback::Toggle)
            .easing(Easing::POWER2_OUT)
            .duration_ms(250.0);
        let card = TargetId(0);
        let mut sequencer = Sequencer::new();
        sequencer.register(&hover, &[card], None);

        // pointer rests 2px above the card's layout bottom edge
        let pointer = Some(Point { x: 200.0, y: 438.0 });
        let mut applied = StyleState::IDENTITY;
        let mut entered = 0;
        for step in 0..120 {
            let mut snapshot = Snapshot::new(step as f64 * 16.0, 0.0, VIEWPORT).with_pointer(pointer);
            snapshot.set_rect(card, measured(200.0, 240.0, &applied));
            let output = sequencer.frame(&snapshot);
            entered += output.events.iter().filter(|e| e.kind == RevealEventKind::Entered).count();
            for (target, style) in output.styles {
                if target == card {
                    applied = style;
                }
            }
        }
        assert_eq!(entered, 1);
        assert!((applied.translate_y + 6.0).abs() < 1e-9);
        assert!(!sequencer.is_running());
    }

    #[test]
    fn pinned_track_output_follows_scroll_and_resize() {
        let pin = PinSpec {
            section: ".hardware-pin",
            track: ".hardware-track",
            cards: ".hardware-card",
            focus: CardFocus::default(),
        };
        let section = TargetId(1);
        let track = TargetId(2);
        let card_ids: Vec<TargetId> = (10..16).map(TargetId).collect();
        let mut sequencer = Sequencer::new();
        assert!(sequencer.register_pin(&pin, Some(section), Some(track), card_ids.clone()));

        let metrics = TrackMetrics {
            scroll_width: 2448.0,
            padding_end: 64.0,
            cards: (0..6)
                .map(|i| Span { left: 64.0 + i as f64 * 392.0, width: 360.0 })
                .collect(),
        };
        let snapshot_at = |scroll_y: f64, width: f64| {
            let mut snapshot = Snapshot::new(scroll_y, scroll_y, Viewport { width, height: 800.0 });
            snapshot.set_rect(section, Rect::new(0.0, 3000.0 - scroll_y, width, 800.0));
            snapshot.set_track(track, metrics.clone());
            snapshot
        };

        let first = sequencer.frame(&snapshot_at(0.0, 1280.0));
        assert_eq!(first.spacers, vec![(section, 800.0 + 1104.0)]);

        let midway = sequencer.frame(&snapshot_at(3552.0, 1280.0));
        assert_eq!(midway.pin_phases, vec![(section, PinPhase::Active)]);
        let (_, track_style) = midway.styles.iter().find(|(id, _)| *id == track).copied().unwrap();
        assert!((track_style.translate_x + 552.0).abs() < 1e-9);
        assert!(midway.spacers.is_empty());

        // narrower window: the excursion grows and the spacer follows
        let resized = sequencer.frame(&snapshot_at(3552.0, 1024.0));
        assert_eq!(resized.spacers, vec![(section, 800.0 + 1360.0)]);
        let end = sequencer.preview_pin(0, &snapshot_at(3000.0 + 1360.0, 1024.0)).unwrap();
        assert_eq!(end.progress, 1.0);
        assert_eq!(end.phase, PinPhase::After);
        assert!((end.track_style.translate_x + 1360.0).abs() < 1e-9);
    }
}
