//! Named animation presets and their pure sampling functions.
//!
//! Every preset is evaluated as `(progress or frame, fps) -> visuals` with
//! no retained state. Enter/exit presets run on clamped linear window
//! progress; during presets are periodic over `frame mod cycle`, never
//! elapsed-since-start, so they stay correct when frames are rendered out of
//! order.

use crate::animation::ease::Ease;
use crate::foundation::core::{Affine, Fps, FrameIndex};

const SLIDE_DIST: f64 = 60.0;
const RISE_DIST: f64 = 40.0;
const FLOAT_AMP: f64 = 10.0;
const PULSE_AMP: f64 = 0.05;
const BREATHE_AMP: f64 = 0.02;
const NOD_DEG: f64 = 4.0;
const WAVE_DEG: f64 = 10.0;

/// Entrance preset. Each variant carries its own default duration so a
/// mistyped name can never silently pick up some other preset's timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterPreset {
    /// Opacity ramp from 0.
    FadeIn,
    /// Fade while rising into place.
    FadeInUp,
    /// Slide into place from screen-left.
    SlideLeft,
    /// Slide into place from screen-right.
    SlideRight,
    /// Scale up with a small overshoot.
    PopIn,
    /// Character-by-character text reveal, driven by `draw_progress`.
    Typewriter,
    /// Stroke reveal along a path, driven by `draw_progress`.
    DrawLine,
    /// Figure pose ease-in; visually a passthrough, the figure resolver
    /// consumes the window.
    PoseTransition,
    /// No entrance.
    None,
}

impl EnterPreset {
    /// Default duration when scene data omits `durationMs`.
    pub fn default_duration_ms(self) -> f64 {
        match self {
            Self::FadeIn => 500.0,
            Self::FadeInUp => 400.0,
            Self::SlideLeft | Self::SlideRight => 400.0,
            Self::PopIn => 400.0,
            Self::Typewriter => 800.0,
            Self::DrawLine => 500.0,
            Self::PoseTransition => 400.0,
            Self::None => 0.0,
        }
    }

    /// Parse the camelCase name scene data uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fadeIn" => Some(Self::FadeIn),
            "fadeInUp" => Some(Self::FadeInUp),
            "slideLeft" => Some(Self::SlideLeft),
            "slideRight" => Some(Self::SlideRight),
            "popIn" => Some(Self::PopIn),
            "typewriter" => Some(Self::Typewriter),
            "drawLine" => Some(Self::DrawLine),
            "poseTransition" => Some(Self::PoseTransition),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Periodic hold preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuringPreset {
    /// Vertical bob.
    Floating,
    /// Uniform scale oscillation.
    Pulse,
    /// Subtle vertical-only scale oscillation.
    Breathing,
    /// Small rotation oscillation.
    Nodding,
    /// Larger rotation oscillation.
    Waving,
}

impl DuringPreset {
    /// Default cycle length when scene data omits `durationMs`.
    pub fn default_cycle_ms(self) -> f64 {
        match self {
            Self::Floating => 2400.0,
            Self::Pulse => 1200.0,
            Self::Breathing => 3000.0,
            Self::Nodding => 1200.0,
            Self::Waving => 800.0,
        }
    }

    /// Parse the camelCase name scene data uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "floating" => Some(Self::Floating),
            "pulse" => Some(Self::Pulse),
            "breathing" => Some(Self::Breathing),
            "nodding" => Some(Self::Nodding),
            "waving" => Some(Self::Waving),
            _ => None,
        }
    }
}

/// Exit preset. Same duration discipline as [`EnterPreset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitPreset {
    /// Opacity ramp to 0.
    FadeOut,
    /// Slide off toward screen-left.
    SlideOutLeft,
    /// Slide off toward screen-right.
    SlideOutRight,
    /// Scale down to nothing.
    PopOut,
    /// Figure pose ease-out; visually a passthrough.
    PoseTransition,
    /// No exit.
    None,
}

impl ExitPreset {
    /// Default duration when scene data omits `durationMs`.
    pub fn default_duration_ms(self) -> f64 {
        match self {
            Self::FadeOut => 300.0,
            Self::SlideOutLeft | Self::SlideOutRight => 300.0,
            Self::PopOut => 250.0,
            Self::PoseTransition => 300.0,
            Self::None => 0.0,
        }
    }

    /// Parse the camelCase name scene data uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fadeOut" => Some(Self::FadeOut),
            "slideOutLeft" => Some(Self::SlideOutLeft),
            "slideOutRight" => Some(Self::SlideOutRight),
            "popOut" => Some(Self::PopOut),
            "poseTransition" => Some(Self::PoseTransition),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Output of one preset evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetVisuals {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Local transform contribution.
    pub transform: Affine,
    /// Reveal fraction in `[0, 1]` for typewriter/drawLine-style presets.
    pub draw_progress: f64,
}

impl PresetVisuals {
    /// Fully visible, untransformed, fully revealed.
    pub fn rest() -> Self {
        Self {
            opacity: 1.0,
            transform: Affine::IDENTITY,
            draw_progress: 1.0,
        }
    }
}

/// Evaluate an entrance preset at clamped window progress.
pub fn sample_enter(preset: EnterPreset, progress: f64) -> PresetVisuals {
    let p = progress.clamp(0.0, 1.0);
    match preset {
        EnterPreset::FadeIn => PresetVisuals {
            opacity: p,
            ..PresetVisuals::rest()
        },
        EnterPreset::FadeInUp => PresetVisuals {
            opacity: p,
            transform: Affine::translate((0.0, (1.0 - Ease::OutCubic.apply(p)) * RISE_DIST)),
            draw_progress: 1.0,
        },
        EnterPreset::SlideLeft => PresetVisuals {
            opacity: 1.0,
            transform: Affine::translate(((Ease::OutCubic.apply(p) - 1.0) * SLIDE_DIST, 0.0)),
            draw_progress: 1.0,
        },
        EnterPreset::SlideRight => PresetVisuals {
            opacity: 1.0,
            transform: Affine::translate(((1.0 - Ease::OutCubic.apply(p)) * SLIDE_DIST, 0.0)),
            draw_progress: 1.0,
        },
        EnterPreset::PopIn => PresetVisuals {
            opacity: (p * 2.0).clamp(0.0, 1.0),
            transform: Affine::scale(Ease::OutBack.apply(p)),
            draw_progress: 1.0,
        },
        EnterPreset::Typewriter => PresetVisuals {
            opacity: 1.0,
            transform: Affine::IDENTITY,
            draw_progress: p,
        },
        EnterPreset::DrawLine => PresetVisuals {
            opacity: 1.0,
            transform: Affine::IDENTITY,
            draw_progress: Ease::InOutQuad.apply(p),
        },
        EnterPreset::PoseTransition | EnterPreset::None => PresetVisuals::rest(),
    }
}

/// Evaluate a periodic hold preset at an absolute frame.
pub fn sample_during(preset: DuringPreset, frame: FrameIndex, fps: Fps, cycle_ms: f64) -> Affine {
    let cycle_frames = fps.millis_to_frames(cycle_ms).max(1);
    let t = (frame.0 % cycle_frames) as f64 / cycle_frames as f64;
    let wave = (std::f64::consts::TAU * t).sin();
    match preset {
        DuringPreset::Floating => Affine::translate((0.0, FLOAT_AMP * wave)),
        DuringPreset::Pulse => Affine::scale(1.0 + PULSE_AMP * wave),
        DuringPreset::Breathing => Affine::scale_non_uniform(1.0, 1.0 + BREATHE_AMP * wave),
        DuringPreset::Nodding => Affine::rotate((NOD_DEG * wave).to_radians()),
        DuringPreset::Waving => Affine::rotate((WAVE_DEG * wave).to_radians()),
    }
}

/// Evaluate an exit preset at clamped window progress.
pub fn sample_exit(preset: ExitPreset, progress: f64) -> PresetVisuals {
    let p = progress.clamp(0.0, 1.0);
    match preset {
        ExitPreset::FadeOut => PresetVisuals {
            opacity: 1.0 - p,
            ..PresetVisuals::rest()
        },
        ExitPreset::SlideOutLeft => PresetVisuals {
            opacity: 1.0,
            transform: Affine::translate((-Ease::InCubic.apply(p) * SLIDE_DIST, 0.0)),
            draw_progress: 1.0,
        },
        ExitPreset::SlideOutRight => PresetVisuals {
            opacity: 1.0,
            transform: Affine::translate((Ease::InCubic.apply(p) * SLIDE_DIST, 0.0)),
            draw_progress: 1.0,
        },
        ExitPreset::PopOut => PresetVisuals {
            opacity: 1.0,
            transform: Affine::scale(1.0 - Ease::InCubic.apply(p)),
            draw_progress: 1.0,
        },
        ExitPreset::PoseTransition | ExitPreset::None => PresetVisuals::rest(),
    }
}

/// Eased numeric reveal for counter elements, driven by enter progress.
pub fn counter_value(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * Ease::OutCubic.apply(progress.clamp(0.0, 1.0))
}
