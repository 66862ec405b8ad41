//! Frame-driven animation parameters.
//!
//! Everything here is a pure function of a (possibly negative) frame number, so slides can be
//! evaluated for any frame independently.

use crate::animation::ease::Ease;
use crate::foundation::core::Fps;
use crate::foundation::math::lerp;

/// Behavior outside the input range of [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the linear mapping past the range.
    #[default]
    Extend,
    /// Hold the boundary output value.
    Clamp,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InterpolateOpts {
    /// Behavior below `input.0`.
    pub left: Extrapolate,
    /// Behavior above `input.1`.
    pub right: Extrapolate,
    /// Easing applied to in-range progress.
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on the right side only, the most common setting for entrance animations.
    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp on both sides.
    pub fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }
}

/// Map `value` from `input` range to `output` range.
///
/// Degenerate input ranges return `output.0` below the point and `output.1` at or above it.
pub fn interpolate(
    value: f64,
    input: (f64, f64),
    output: (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    let span = in1 - in0;
    if span.abs() <= f64::EPSILON {
        return if value < in0 { out0 } else { out1 };
    }

    let t = (value - in0) / span;
    if t < 0.0 {
        return match opts.left {
            Extrapolate::Clamp => out0,
            Extrapolate::Extend => lerp(out0, out1, t),
        };
    }
    if t > 1.0 {
        return match opts.right {
            Extrapolate::Clamp => out1,
            Extrapolate::Extend => lerp(out0, out1, t),
        };
    }
    lerp(out0, out1, opts.ease.apply(t))
}

/// Physical parameters of a [`spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the moving body.
    pub mass: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
        }
    }
}

impl SpringConfig {
    /// Unit mass spring with the given damping and stiffness.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }
}

/// Spring progress from 0 to 1 released at frame 0 with zero velocity.
///
/// Negative frames return 0. Under-damped configurations overshoot 1 before settling.
pub fn spring(frame: f64, fps: Fps, cfg: SpringConfig) -> f64 {
    if frame <= 0.0 || cfg.mass <= 0.0 || cfg.stiffness <= 0.0 {
        return 0.0;
    }
    let t = frame * fps.frame_duration_secs();
    let omega0 = (cfg.stiffness / cfg.mass).sqrt();
    let zeta = cfg.damping / (2.0 * (cfg.stiffness * cfg.mass).sqrt());

    if (zeta - 1.0).abs() < 1e-9 {
        return 1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t);
    }
    if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        return 1.0
            - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin());
    }

    let root = (zeta * zeta - 1.0).sqrt();
    let r1 = -omega0 * (zeta - root);
    let r2 = -omega0 * (zeta + root);
    let a = r2 / (r1 - r2);
    let b = -1.0 - a;
    1.0 + a * (r1 * t).exp() + b * (r2 * t).exp()
}

/// Blinking terminal cursor visibility.
pub fn blink(frame: f64) -> bool {
    (frame * 0.3).sin() > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
