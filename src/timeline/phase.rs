//! The enter/during/exit evaluator shared by every animated element.
//!
//! Phase is re-derived from the frame number on every query; nothing is
//! cached between calls. That redundancy is the point: it is what lets a
//! host evaluate frames out of order, in parallel, or repeatedly and always
//! observe the same state.

use crate::foundation::core::{Affine, Fps, FrameIndex, FrameRange};
use crate::timeline::presets::{
    DuringPreset, EnterPreset, ExitPreset, sample_during, sample_enter, sample_exit,
};

/// Which part of its visible lifetime an element is in at a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Inside the (possibly delayed) entrance window.
    Enter,
    /// Between entrance and exit.
    During,
    /// Inside the exit window, anchored to the element's end.
    Exit,
}

/// Entrance configuration for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnterSpec {
    /// Preset to run.
    pub preset: EnterPreset,
    /// Window length in milliseconds.
    pub duration_ms: f64,
    /// Delay after the element start before the window opens.
    pub delay_ms: f64,
}

impl EnterSpec {
    /// Spec for `preset` with its default duration and no delay.
    pub fn preset(preset: EnterPreset) -> Self {
        Self {
            preset,
            duration_ms: preset.default_duration_ms(),
            delay_ms: 0.0,
        }
    }
}

/// Hold configuration for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DuringSpec {
    /// Preset to run.
    pub preset: DuringPreset,
    /// Cycle length in milliseconds.
    pub cycle_ms: f64,
}

impl DuringSpec {
    /// Spec for `preset` with its default cycle.
    pub fn preset(preset: DuringPreset) -> Self {
        Self {
            preset,
            cycle_ms: preset.default_cycle_ms(),
        }
    }
}

/// Exit configuration for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitSpec {
    /// Preset to run.
    pub preset: ExitPreset,
    /// Window length in milliseconds.
    pub duration_ms: f64,
}

impl ExitSpec {
    /// Spec for `preset` with its default duration.
    pub fn preset(preset: ExitPreset) -> Self {
        Self {
            preset,
            duration_ms: preset.default_duration_ms(),
        }
    }
}

/// The optional enter/during/exit triple for one element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementAnimation {
    /// Entrance, or none.
    pub enter: Option<EnterSpec>,
    /// Hold behavior, or none.
    pub during: Option<DuringSpec>,
    /// Exit, or none.
    pub exit: Option<ExitSpec>,
}

/// Phase classification plus the progress scalars derived from one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseState {
    /// Current phase.
    pub phase: Phase,
    /// Entrance window progress, clamped to `[0, 1]`; 1 once the window has
    /// passed (or when there is no entrance).
    pub enter_progress: f64,
    /// Exit window progress, clamped to `[0, 1]`; 0 outside the window.
    pub exit_progress: f64,
    /// Absolute frame time in milliseconds.
    pub time_ms: f64,
    /// Frame time relative to the element start, in milliseconds. Negative
    /// before the element starts.
    pub local_ms: f64,
}

/// The pure per-frame output for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementVisuals {
    /// Final opacity; the exit preset overrides the entrance when both
    /// windows would overlap.
    pub opacity: f64,
    /// Entrance (or exit) transform concatenated with the hold transform.
    pub transform: Affine,
    /// Entrance window progress, for reveal effects that pick a visible
    /// fraction (typewriter characters, path length, counter values).
    pub enter_progress: f64,
    /// Reveal fraction from the active preset.
    pub draw_progress: f64,
}

/// An element's animation resolved against its frame range: all windows in
/// concrete frames, ready for stateless per-frame queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTimeline {
    range: FrameRange,
    fps: Fps,
    anim: ElementAnimation,
    enter_start: u64,
    enter_end: u64,
    exit_start: u64,
    has_exit: bool,
    enter_frames: u64,
    exit_frames: u64,
}

impl ElementTimeline {
    /// Resolve `anim` against an element's frame range.
    ///
    /// The entrance window is anchored to the element start (plus delay),
    /// the exit window to the element end. Durations longer than the element
    /// simply clamp; they are legitimate, not errors.
    pub fn resolve(anim: ElementAnimation, range: FrameRange, fps: Fps) -> Self {
        let (enter_delay, enter_frames) = match &anim.enter {
            Some(e) => (
                fps.millis_to_frames(e.delay_ms),
                fps.millis_to_frames(e.duration_ms),
            ),
            None => (0, 0),
        };
        let enter_start = range.start.0.saturating_add(enter_delay);
        let enter_end = enter_start.saturating_add(enter_frames);

        let has_exit = anim
            .exit
            .is_some_and(|e| e.preset != ExitPreset::None);
        let exit_frames = match &anim.exit {
            Some(e) if has_exit => fps.millis_to_frames(e.duration_ms),
            _ => 0,
        };
        let exit_start = range.end.0.saturating_sub(exit_frames).max(range.start.0);

        Self {
            range,
            fps,
            anim,
            enter_start,
            enter_end,
            exit_start,
            has_exit,
            enter_frames,
            exit_frames,
        }
    }

    /// The element's frame range.
    pub fn range(&self) -> FrameRange {
        self.range
    }

    /// The resolved animation configuration.
    pub fn animation(&self) -> &ElementAnimation {
        &self.anim
    }

    /// First frame of the exit window.
    pub fn exit_start(&self) -> FrameIndex {
        FrameIndex(self.exit_start)
    }

    /// Return `true` when `frame` falls in the exit window.
    pub fn is_in_exit_phase(&self, frame: FrameIndex) -> bool {
        self.has_exit && frame.0 >= self.exit_start
    }

    /// Return `true` when `frame` falls in the entrance window and not in
    /// the exit window. For very short elements the two windows can overlap;
    /// exit always wins.
    pub fn is_in_enter_phase(&self, frame: FrameIndex) -> bool {
        !self.is_in_exit_phase(frame) && frame.0 < self.enter_end
    }

    /// Classify a frame and derive its progress scalars. Total over all
    /// frames: queries outside the element's lifetime clamp, they never
    /// fail.
    pub fn state_at(&self, frame: FrameIndex) -> PhaseState {
        let phase = if self.is_in_exit_phase(frame) {
            Phase::Exit
        } else if self.is_in_enter_phase(frame) {
            Phase::Enter
        } else {
            Phase::During
        };

        let exit_progress = if self.has_exit {
            window_progress(frame.0, self.exit_start, self.exit_frames)
        } else {
            0.0
        };

        PhaseState {
            phase,
            enter_progress: window_progress(frame.0, self.enter_start, self.enter_frames),
            exit_progress,
            time_ms: self.fps.frames_to_millis(frame.0),
            local_ms: (frame.0 as f64 - self.range.start.0 as f64)
                * self.fps.frame_duration_secs()
                * 1000.0,
        }
    }

    /// Evaluate opacity, transform, and reveal progress for one frame.
    pub fn sample(&self, frame: FrameIndex) -> ElementVisuals {
        let st = self.state_at(frame);

        let during_tf = match &self.anim.during {
            Some(d) => sample_during(d.preset, frame, self.fps, d.cycle_ms),
            None => Affine::IDENTITY,
        };

        let v = match st.phase {
            Phase::Enter => match &self.anim.enter {
                Some(e) => sample_enter(e.preset, st.enter_progress),
                None => crate::timeline::presets::PresetVisuals::rest(),
            },
            Phase::During => crate::timeline::presets::PresetVisuals::rest(),
            Phase::Exit => match &self.anim.exit {
                Some(e) => sample_exit(e.preset, st.exit_progress),
                None => crate::timeline::presets::PresetVisuals::rest(),
            },
        };

        ElementVisuals {
            opacity: v.opacity,
            transform: v.transform * during_tf,
            enter_progress: st.enter_progress,
            draw_progress: match st.phase {
                Phase::Enter => v.draw_progress,
                // Revealed content stays revealed through hold and exit.
                Phase::During | Phase::Exit => 1.0,
            },
        }
    }
}

/// Clamped linear progress through a `[start, start + dur)` frame window.
/// A zero-length window is an "instant" animation: progress jumps straight
/// to 1 at `start` instead of dividing by zero.
fn window_progress(frame: u64, start: u64, dur: u64) -> f64 {
    if dur == 0 {
        return if frame >= start { 1.0 } else { 0.0 };
    }
    ((frame as f64 - start as f64) / dur as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
