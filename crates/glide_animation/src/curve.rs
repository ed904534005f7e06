//! Easing curves and the curved progress view

use serde::{Deserialize, Serialize};

/// Monotonic reshaping of raw clock progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    /// CSS `ease`
    Ease,
    /// CSS `ease-in`
    EaseIn,
    /// CSS `ease-out`
    EaseOut,
    /// CSS `ease-in-out`
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    /// Quadratic slow-down toward the end
    Decelerate,
    /// Material standard curve
    FastOutSlowIn,
    /// Control points `(x1, y1, x2, y2)` of a unit cubic bezier
    CubicBezier(f32, f32, f32, f32),
}

impl Curve {
    /// Control points for the curves defined as cubic beziers
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Curve::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Curve::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Curve::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Curve::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Curve::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Curve::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
            _ => None,
        }
    }

    /// Apply the curve to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        if let Some((x1, y1, x2, y2)) = self.control_points() {
            return UnitBezier::new(x1, y1, x2, y2).solve(t);
        }
        match self {
            Curve::EaseInQuad => power_in(t, 2),
            Curve::EaseOutQuad => power_out(t, 2),
            Curve::EaseInOutQuad => power_in_out(t, 2),
            Curve::EaseInCubic => power_in(t, 3),
            Curve::EaseOutCubic => power_out(t, 3),
            Curve::EaseInOutCubic => power_in_out(t, 3),
            Curve::EaseInQuart => power_in(t, 4),
            Curve::EaseOutQuart => power_out(t, 4),
            Curve::EaseInOutQuart => power_in_out(t, 4),
            Curve::Decelerate => power_out(t, 2),
            _ => t,
        }
    }
}

fn power_in(t: f32, n: i32) -> f32 {
    t.powi(n)
}

fn power_out(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

fn power_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(n) / 2.0
    } else {
        1.0 - (2.0 - 2.0 * t).powi(n) / 2.0
    }
}

/// Cubic bezier from (0, 0) to (1, 1) in polynomial form, solved for x.
///
/// Runs in f64; f32 solving jitters visibly at high frame rates.
#[derive(Clone, Copy, Debug)]
struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (cx, bx, ax) = Self::coefficients(x1 as f64, x2 as f64);
        let (cy, by, ay) = Self::coefficients(y1 as f64, y2 as f64);
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        (c, b, 1.0 - c - b)
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn slope_x(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Parameter whose x equals `x`: Newton first, bisection if it stalls
    fn solve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let value = self.sample_x(t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_x(x as f64)) as f32
    }
}

/// A curve applied on top of a clock's raw value.
///
/// Holds only the curve; the raw progress stays with the clock, so swapping
/// the view never moves it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurvedAnimation {
    curve: Curve,
}

impl CurvedAnimation {
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Curved value for raw clock progress `raw`
    pub fn transform(&self, raw: f32) -> f32 {
        if raw <= 0.0 {
            return 0.0;
        }
        if raw >= 1.0 {
            return 1.0;
        }
        self.curve.apply(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Curve; 17] = [
        Curve::Linear,
        Curve::Ease,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::Decelerate,
        Curve::FastOutSlowIn,
        Curve::CubicBezier(0.3, 0.0, 0.7, 1.0),
    ];

    #[test]
    fn curves_pin_endpoints() {
        for curve in ALL {
            let view = CurvedAnimation::new(curve);
            assert_eq!(view.transform(0.0), 0.0, "{curve:?}");
            assert_eq!(view.transform(1.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = curve.apply(i as f32 / 100.0);
                assert!(v + 1e-5 >= prev, "{curve:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Curve::EaseOut.apply(0.5) > 0.5);
        assert!(Curve::EaseIn.apply(0.5) < 0.5);
        assert_eq!(Curve::Decelerate.apply(0.5), 0.75);
    }

    #[test]
    fn css_keywords_are_beziers_not_polynomials() {
        assert!((Curve::EaseIn.apply(0.5) - Curve::EaseInCubic.apply(0.5)).abs() > 0.1);
        assert!((Curve::EaseOut.apply(0.5) - Curve::EaseOutCubic.apply(0.5)).abs() > 0.1);
        // ease-in-out is point symmetric about the midpoint
        assert!((Curve::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        assert!((Curve::EaseInOut.apply(0.2) + Curve::EaseInOut.apply(0.8) - 1.0).abs() < 1e-4);
        assert_eq!(
            Curve::EaseIn.control_points(),
            Some((0.42, 0.0, 1.0, 1.0))
        );
        assert_eq!(Curve::EaseInQuad.control_points(), None);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = Curve::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn curve_names_are_snake_case() {
        let curve: Curve = serde_json::from_str("\"fast_out_slow_in\"").unwrap();
        assert_eq!(curve, Curve::FastOutSlowIn);
    }
}
