//! Time-based tweening for the wheel spin
//!
//! Values are sampled with an explicit `Instant` so the event loop (and
//! tests) decide what "now" is.

use std::time::{Duration, Instant};

/// Cubic-bezier easing curve through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Easing {
    /// Accelerates quickly, settles slowly
    pub const FAST_OUT_SLOW_IN: Easing = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);

    pub const LINEAR: Easing = Easing::cubic_bezier(0.0, 0.0, 1.0, 1.0);

    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a: f32, b: f32, s: f32) -> f32 {
        // Bernstein form with endpoints 0 and 1
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    }

    fn sample_derivative(a: f32, b: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    }

    /// Eased progress for linear progress `t` in [0, 1]
    pub fn transform(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Solve x(s) = t: a few Newton steps, bisection if the slope flattens
        let mut s = t;
        for _ in 0..8 {
            let x = Self::sample(self.x1, self.x2, s) - t;
            if x.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, s);
            }
            let d = Self::sample_derivative(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= x / d;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        s = s.clamp(lo, hi);
        for _ in 0..32 {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, s)
    }
}

/// A running animation from one value to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.transform(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
