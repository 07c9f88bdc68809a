// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for tweens.

/// Easing curve applied to the linear progress of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-in, `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Cubic ease-out, `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Cubic ease-in-out, `(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Standard curve that starts quickly and settles slowly, `(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
    /// Decelerating curve, `(0, 0, 0.2, 1)`.
    LinearOutSlowIn,
    /// Accelerating curve, `(0.4, 0, 1, 1)`.
    FastOutLinearIn,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` to an eased fraction.
    ///
    /// Inputs outside `[0, 1]` are clamped. The endpoints are exact for all curves.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let derivative = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the curve parameter whose x matches `fraction`.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            solved = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        // Bisection fallback; x(t) is monotonic for all supported curves.
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..32 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?} at 1");
            assert_eq!(easing.transform(-3.0), 0.0, "{easing:?} below range");
            assert_eq!(easing.transform(4.0), 1.0, "{easing:?} above range");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for step in 0..=50 {
                let value = easing.transform(f64::from(step) / 50.0);
                assert!(value + 1e-6 >= prev, "{easing:?} decreased at step {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn symmetric_curve_passes_through_midpoint() {
        let mid = Easing::EaseInOut.transform(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "got {mid}");
        assert!(Easing::FastOutSlowIn.transform(0.5) > 0.5);
    }
}
