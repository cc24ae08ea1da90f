//! Easing curves for reveal timelines and scrubbed regions.
//!
//! Every curve maps [0, 1] onto [0, 1] monotonically and never overshoots,
//! so a style interpolated through an easing stays between its endpoints.

/// Which end of the curve is slowed down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Polynomial ease. `Power(1, Out)` is a quadratic ease-out, `Power(3, Out)`
    /// a quartic one, matching the `power1`..`power4` naming.
    Power(u8, EaseDirection),
    /// CSS `ease`.
    Ease,
    /// CSS `ease-out`.
    EaseOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power(1, EaseDirection::Out)
    }
}

impl Easing {
    pub const POWER2_OUT: Easing = Easing::Power(2, EaseDirection::Out);
    pub const POWER3_OUT: Easing = Easing::Power(3, EaseDirection::Out);

    /// Map linear progress to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let eased = match self {
            Easing::Linear => t,
            Easing::Power(power, direction) => power_curve(t, f64::from(power) + 1.0, direction),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        };
        eased.clamp(0.0, 1.0)
    }
}

fn power_curve(t: f64, exponent: f64, direction: EaseDirection) -> f64 {
    match direction {
        EaseDirection::In => t.powf(exponent),
        EaseDirection::Out => 1.0 - (1.0 - t).powf(exponent),
        EaseDirection::InOut => {
            if t < 0.5 {
                (2.0 * t).powf(exponent) / 2.0
            } else {
                1.0 - (2.0 * (1.0 - t)).powf(exponent) / 2.0
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let t = solve_bezier_x(x1, x2, progress);
    bezier_component(y1, y2, t)
}

// Newton-Raphson first, bisection if the derivative flattens out.
fn solve_bezier_x(x1: f64, x2: f64, target: f64) -> f64 {
    let mut t = target;
    for _ in 0..8 {
        let error = bezier_component(x1, x2, t) - target;
        if error.abs() < 1e-7 {
            return t;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0, 1.0);
    t = target;
    for _ in 0..32 {
        let x = bezier_component(x1, x2, t);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    t
}

#[inline]
fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::Power(1, EaseDirection::In),
        Easing::Power(2, EaseDirection::Out),
        Easing::Power(3, EaseDirection::Out),
        Easing::Power(4, EaseDirection::InOut),
        Easing::Power(1, EaseDirection::InOut),
        Easing::Ease,
        Easing::EaseOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=200 {
                let value = easing.apply(f64::from(step) / 200.0);
                assert!(value + 1e-9 >= previous, "{easing:?} dipped at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Easing::POWER3_OUT.apply(-2.0), 0.0);
        assert_eq!(Easing::POWER3_OUT.apply(7.5), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn power_out_front_loads_progress() {
        // power2.out is cubic: 1 - (1 - 0.5)^3
        assert!((Easing::POWER2_OUT.apply(0.5) - 0.875).abs() < 1e-9);
        assert!(Easing::POWER3_OUT.apply(0.5) > Easing::POWER2_OUT.apply(0.5));
    }

    #[test]
    fn css_ease_midpoint() {
        let mid = Easing::Ease.apply(0.5);
        assert!(mid > 0.7 && mid < 0.9, "got {mid}");
    }
}
