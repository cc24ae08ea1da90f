//! Animatable style state and its CSS rendering.

use super::trigger::Rect;

/// The visual properties a reveal rule can move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub opacity: f64,
    pub blur_px: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StyleState {
    /// Fully visible, untransformed.
    pub const IDENTITY: StyleState = StyleState {
        opacity: 1.0,
        blur_px: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur_px = px;
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.translate_x = px;
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.translate_y = px;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    /// Linear interpolation between `self` and `to`. `t` is clamped so the
    /// result never leaves the segment between the two states.
    pub fn lerp(&self, to: &StyleState, t: f64) -> StyleState {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleState {
            opacity: mix(self.opacity, to.opacity),
            blur_px: mix(self.blur_px, to.blur_px),
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            rotate_deg: mix(self.rotate_deg, to.rotate_deg),
        }
    }

    /// Stack another rule's contribution on top of this one. Opacity and
    /// scale multiply, everything else adds, so `IDENTITY` is neutral.
    pub fn compose(&self, other: &StyleState) -> StyleState {
        StyleState {
            opacity: self.opacity * other.opacity,
            blur_px: self.blur_px + other.blur_px,
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            scale: self.scale * other.scale,
            rotate_deg: self.rotate_deg + other.rotate_deg,
        }
    }

    /// Recover the layout box from a bounding rect measured while this style
    /// was applied. Scale is undone about the centre, matching the default
    /// `transform-origin`. Rotation is not undone.
    pub fn layout_rect(&self, rendered: &Rect) -> Rect {
        let scale = if self.scale.abs() > f64::EPSILON { self.scale } else { 1.0 };
        let width = rendered.width / scale;
        let height = rendered.height / scale;
        let center_x = rendered.left + rendered.width / 2.0 - self.translate_x;
        let center_y = rendered.top + rendered.height / 2.0 - self.translate_y;
        Rect::new(center_x - width / 2.0, center_y - height / 2.0, width, height)
    }

    pub fn approx_eq(&self, other: &StyleState, epsilon: f64) -> bool {
        (self.opacity - other.opacity).abs() <= epsilon
            && (self.blur_px - other.blur_px).abs() <= epsilon
            && (self.translate_x - other.translate_x).abs() <= epsilon
            && (self.translate_y - other.translate_y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
            && (self.rotate_deg - other.rotate_deg).abs() <= epsilon
    }

    pub fn css(&self) -> CssStyle {
        CssStyle {
            opacity: format_number(self.opacity.clamp(0.0, 1.0)),
            filter: format!("blur({}px)", format_number(self.blur_px.max(0.0))),
            transform: format!(
                "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
                format_number(self.translate_x),
                format_number(self.translate_y),
                format_number(self.scale),
                format_number(self.rotate_deg),
            ),
        }
    }
}

/// Inline style values ready to be written to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStyle {
    pub opacity: String,
    pub filter: String,
    pub transform: String,
}

// Three decimals is below a device pixel and keeps repeated frames
// producing identical strings.
fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        let text = format!("{rounded:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rect_undoes_translate_and_scale() {
        let style = StyleState::IDENTITY.x(10.0).y(-6.0).scale(0.5);
        // a 200x100 box at (100, 300), scaled about its centre then moved
        let rendered = Rect::new(160.0, 319.0, 100.0, 50.0);
        let layout = style.layout_rect(&rendered);
        assert!((layout.left - 100.0).abs() < 1e-9);
        assert!((layout.top - 300.0).abs() < 1e-9);
        assert!((layout.width - 200.0).abs() < 1e-9);
        assert!((layout.height - 100.0).abs() < 1e-9);
        assert_eq!(StyleState::IDENTITY.layout_rect(&rendered), rendered);
    }

    #[test]
    fn lerp_clamps_progress() {
        let from = StyleState::IDENTITY.opacity(0.0).y(30.0).blur(12.0);
        let to = StyleState::IDENTITY;
        assert_eq!(from.lerp(&to, -1.0), from);
        assert_eq!(from.lerp(&to, 3.0), to);

        let mid = from.lerp(&to, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 15.0).abs() < 1e-9);
        assert!((mid.blur_px - 6.0).abs() < 1e-9);
    }

    #[test]
    fn identity_is_neutral_for_compose() {
        let style = StyleState::IDENTITY.opacity(0.3).x(-40.0).scale(0.9).rotate(4.0);
        assert_eq!(style.compose(&StyleState::IDENTITY), style);
        assert_eq!(StyleState::IDENTITY.compose(&style), style);
    }

    #[test]
    fn compose_stacks_hover_lift_on_reveal() {
        let revealed = StyleState::IDENTITY.y(10.0).opacity(0.5);
        let hover = StyleState::IDENTITY.y(-6.0);
        let combined = revealed.compose(&hover);
        assert!((combined.translate_y - 4.0).abs() < 1e-9);
        assert!((combined.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn css_output_is_compact_and_stable() {
        let css = StyleState::IDENTITY.opacity(0.25).blur(12.0).y(30.0).css();
        assert_eq!(css.opacity, "0.25");
        assert_eq!(css.filter, "blur(12px)");
        assert_eq!(css.transform, "translate3d(0px, 30px, 0) scale(1) rotate(0deg)");

        let negative = StyleState::IDENTITY.x(-1234.56789).css();
        assert_eq!(negative.transform, "translate3d(-1234.568px, 0px, 0) scale(1) rotate(0deg)");
    }

    #[test]
    fn css_clamps_out_of_range_values() {
        let css = StyleState::IDENTITY.opacity(1.4).blur(-3.0).css();
        assert_eq!(css.opacity, "1");
        assert_eq!(css.filter, "blur(0px)");
    }
}
