use web_sys::{Element, HtmlElement, Window};

use crate::motion::pin::{Span, TrackMetrics};
use crate::motion::style::CssStyle;
use crate::motion::trigger::{Rect, Viewport};

pub fn viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport { width, height }
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn rect(element: &Element) -> Rect {
    let bounds = element.get_bounding_client_rect();
    Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
}

/// Cards are measured with offsetLeft, so the track has to be their offset
/// parent (`position: relative`). Transforms do not affect these numbers.
pub fn track_metrics(window: &Window, track: &HtmlElement, cards: &[HtmlElement]) -> TrackMetrics {
    TrackMetrics {
        scroll_width: f64::from(track.scroll_width()),
        padding_end: padding_right(window, track),
        cards: cards
            .iter()
            .map(|card| Span {
                left: f64::from(card.offset_left()),
                width: f64::from(card.offset_width()),
            })
            .collect(),
    }
}

fn padding_right(window: &Window, element: &Element) -> f64 {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("padding-right").ok())
        .map(|value| parse_px(&value))
        .unwrap_or(0.0)
}

pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

pub fn apply_style(element: &HtmlElement, css: &CssStyle) {
    set_property(element, "opacity", &css.opacity);
    set_property(element, "filter", &css.filter);
    set_property(element, "transform", &css.transform);
}

pub fn set_height(element: &HtmlElement, px: f64) {
    set_property(element, "height", &height_value(px));
}

pub fn height_value(px: f64) -> String {
    let rounded = px.round();
    // NaN and -0 both land here
    if rounded.is_finite() && rounded > 0.0 {
        format!("{}px", rounded)
    } else {
        "0px".to_string()
    }
}

fn set_property(element: &HtmlElement, name: &str, value: &str) {
    if element.style().set_property(name, value).is_err() {
        log::warn!("failed to set `{}` to `{}`", name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::{height_value, parse_px};

    #[test]
    fn parses_computed_pixel_values() {
        assert_eq!(parse_px("64px"), 64.0);
        assert_eq!(parse_px(" 12.5px "), 12.5);
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
    }

    #[test]
    fn heights_are_whole_non_negative_pixels() {
        assert_eq!(height_value(1234.4), "1234px");
        assert_eq!(height_value(0.6), "1px");
        assert_eq!(height_value(-20.0), "0px");
        assert_eq!(height_value(-0.3), "0px");
        assert_eq!(height_value(f64::NAN), "0px");
        assert_eq!(height_value(f64::INFINITY), "0px");
    }
}
