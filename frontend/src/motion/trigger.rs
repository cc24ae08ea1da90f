//! Trigger geometry: where a region starts and ends relative to the viewport,
//! and how far the current scroll has advanced through it.

use std::fmt;
use std::str::FromStr;

use super::MotionError;

/// Element rect in viewport coordinates, as returned by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right() && point.y >= self.top && point.y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// A point along a length: a keyword, a percentage or a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Pixels(f64),
}

impl Anchor {
    pub fn resolve(self, length: f64) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => length / 2.0,
            Anchor::Bottom => length,
            Anchor::Percent(percent) => length * percent / 100.0,
            Anchor::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidPosition(s.to_string());
        match s {
            "top" => Ok(Anchor::Top),
            "center" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::Bottom),
            _ => {
                if let Some(number) = s.strip_suffix('%') {
                    number.parse().map(Anchor::Percent).map_err(|_| invalid())
                } else if let Some(number) = s.strip_suffix("px") {
                    number.parse().map(Anchor::Pixels).map_err(|_| invalid())
                } else {
                    Err(invalid())
                }
            }
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Top => write!(f, "top"),
            Anchor::Center => write!(f, "center"),
            Anchor::Bottom => write!(f, "bottom"),
            Anchor::Percent(percent) => write!(f, "{percent}%"),
            Anchor::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// `"<element anchor> <viewport anchor>"`, e.g. `"top 85%"`: the moment the
/// element's top meets 85% of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPosition {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll distance still needed before this position is reached.
    /// Zero or negative once scrolled past.
    pub fn remaining(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        rect.top + self.element.resolve(rect.height) - self.viewport.resolve(viewport.height)
    }
}

impl FromStr for TriggerPosition {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(TriggerPosition {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(MotionError::InvalidPosition(s.to_string())),
        }
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// A scroll-bound region between two trigger positions. Without an end the
/// region is open and runs for the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub start: TriggerPosition,
    pub end: Option<TriggerPosition>,
}

impl ScrollRegion {
    pub const DEFAULT_START: TriggerPosition = TriggerPosition::new(Anchor::Top, Anchor::Bottom);
    pub const DEFAULT_END: TriggerPosition = TriggerPosition::new(Anchor::Bottom, Anchor::Top);

    pub fn starting_at(start: &str) -> Result<Self, MotionError> {
        Ok(Self { start: start.parse()?, end: None })
    }

    pub fn between(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self { start: start.parse()?, end: Some(end.parse()?) })
    }

    pub fn has_started(&self, rect: &Rect, viewport: &Viewport) -> bool {
        self.start.remaining(rect, viewport) <= 0.0
    }

    pub fn has_ended(&self, rect: &Rect, viewport: &Viewport) -> bool {
        self.end
            .is_some_and(|end| end.remaining(rect, viewport) <= 0.0)
    }

    /// Progress through the region in [0, 1]. Uses `DEFAULT_END` when the
    /// region is open. A zero-length or inverted region reports 1.
    pub fn progress(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        let end = self.end.unwrap_or(Self::DEFAULT_END);
        let to_start = self.start.remaining(rect, viewport);
        let to_end = end.remaining(rect, viewport);
        let length = to_end - to_start;
        if length.is_nan() || length <= 0.0 {
            return 1.0;
        }
        (-to_start / length).clamp(0.0, 1.0)
    }
}

/// Fraction of the element's height currently inside the viewport.
pub fn visible_fraction(rect: &Rect, viewport: &Viewport) -> f64 {
    if rect.height <= 0.0 {
        let inside = rect.top >= 0.0 && rect.top <= viewport.height;
        return if inside { 1.0 } else { 0.0 };
    }
    let top = rect.top.max(0.0);
    let bottom = rect.bottom().min(viewport.height);
    ((bottom - top) / rect.height).clamp(0.0, 1.0)
}
