//! Time-based scalar interpolation used for the carousel rotation.
//!
//! The tween is sampled, never stepped: any reader can ask for the value at an
//! instant, so a late or dropped frame just samples further along the curve.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Accelerate over the first half, decelerate over the second.
    #[default]
    QuadraticInOut,
}

impl Easing {
    /// Map normalized time `t` in \[0, 1\] to normalized progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticInOut => {
                let k = t * 2.0;
                if k < 1.0 {
                    0.5 * k * k
                } else {
                    let k = k - 1.0;
                    -0.5 * (k * (k - 2.0) - 1.0)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RotationTween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl RotationTween {
    /// A tween that is already at rest on `value`.
    pub fn at_rest(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn start(from: f64, to: f64, duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
            easing,
        }
    }

    #[inline]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized elapsed time in \[0, 1\].
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = if now > self.started {
            now - self.started
        } else {
            Duration::ZERO
        };
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    /// Whether the interpolated value has reached its end.
    ///
    /// This is the animation's own notion of completion and is independent of
    /// the controller's transition timer.
    #[inline]
    pub fn reached(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_in_out_is_symmetric() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let a = Easing::QuadraticInOut.apply(t);
            let b = 1.0 - Easing::QuadraticInOut.apply(1.0 - t);
            assert!((a - b).abs() < 1e-12, "asymmetric at t={t}: {a} vs {b}");
        }
        assert_eq!(Easing::QuadraticInOut.apply(0.5), 0.5);
    }
}
