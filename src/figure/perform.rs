//! Per-frame figure resolution: pose transitions, pose keyframe tracks, and
//! motion blending, composed into one resolved pose and its geometry.

use crate::animation::ease::Ease;
use crate::figure::expression::Expression;
use crate::figure::fk::{self, FigureGeometry};
use crate::figure::motion::Motion;
use crate::figure::pose::Pose;
use crate::figure::skeleton::Skeleton;
use crate::foundation::error::{ManikinError, ManikinResult};
use crate::timeline::phase::{Phase, PhaseState};

/// One key of a scripted pose sequence, in element-local milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseTrackKey {
    /// Element-local time of this key.
    pub at_ms: f64,
    /// Full pose held at this key.
    pub pose: Pose,
}

/// A scripted sequence of full poses, eased in-out between keys.
///
/// Tracks come from scene data (`keyframes: [{atMs, pose}]`) with pose names
/// already resolved against the library.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseTrack {
    /// Keys sorted by `at_ms`.
    pub keys: Vec<PoseTrackKey>,
    /// Wrap element-local time over the last key's time instead of holding.
    pub looped: bool,
}

impl PoseTrack {
    /// Validate static invariants: at least one key, non-negative times,
    /// sorted order.
    pub fn validate(&self) -> ManikinResult<()> {
        if self.keys.is_empty() {
            return Err(ManikinError::animation(
                "PoseTrack must have at least one keyframe",
            ));
        }
        if self.keys.iter().any(|k| !(k.at_ms.is_finite() && k.at_ms >= 0.0)) {
            return Err(ManikinError::animation(
                "PoseTrack keyframe times must be finite and >= 0",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(ManikinError::animation(
                "PoseTrack keyframes must be sorted by atMs",
            ));
        }
        Ok(())
    }

    /// Sample the track at element-local milliseconds. Total: times before
    /// the first key hold it, times past the last key hold (or wrap, when
    /// looped).
    pub fn sample(&self, local_ms: f64) -> Pose {
        let first = match self.keys.first() {
            Some(k) => k,
            None => return Pose::NEUTRAL,
        };
        let last = &self.keys[self.keys.len() - 1];

        let span = last.at_ms;
        let t = if self.looped && span > 0.0 {
            local_ms.rem_euclid(span)
        } else {
            local_ms.clamp(first.at_ms.min(0.0), last.at_ms)
        };
        if t <= first.at_ms {
            return first.pose;
        }

        let idx = self
            .keys
            .partition_point(|k| k.at_ms <= t)
            .clamp(1, self.keys.len() - 1);
        let prev = &self.keys[idx - 1];
        let next = &self.keys[idx];
        let width = next.at_ms - prev.at_ms;
        if width <= 0.0 {
            return prev.pose;
        }
        let local = (t - prev.at_ms) / width;
        Pose::interpolate(&prev.pose, &next.pose, Ease::InOutCubic.apply(local))
    }
}

/// Everything needed to resolve the character at any frame: base pose,
/// optional transition target, optional scripted track, optional loop
/// motion, and the face.
#[derive(Clone, Debug)]
pub struct FigurePerformance {
    /// Segment dimensions for this character instance.
    pub skeleton: Skeleton,
    /// Base pose held outside transitions.
    pub base: Pose,
    /// Pose eased into over the enter window and back out over the exit
    /// window (`poseTransition` animations).
    pub target: Option<Pose>,
    /// Scripted pose sequence; takes precedence over base/target.
    pub track: Option<PoseTrack>,
    /// Loop motion layered on top of the held pose.
    pub motion: Option<Motion>,
    /// Face parameters for the paint layer.
    pub expression: Expression,
}

impl FigurePerformance {
    /// A standing figure with default dimensions and no motion.
    pub fn standing() -> Self {
        Self {
            skeleton: Skeleton::default(),
            base: Pose::NEUTRAL,
            target: None,
            track: None,
            motion: None,
            expression: Expression::Neutral,
        }
    }

    /// Resolve the pose for one phase state.
    ///
    /// The held pose comes from the scripted track when present, otherwise
    /// from the base pose eased toward the target over the enter window and
    /// back over the exit window. The loop motion is then blended in with a
    /// weight that ramps with enter progress, so a motion never pops in at
    /// full amplitude on the element's first frame.
    pub fn pose_at(&self, state: &PhaseState) -> Pose {
        let held = if let Some(track) = &self.track {
            track.sample(state.local_ms)
        } else {
            match (&self.target, state.phase) {
                (Some(t), Phase::Enter) => Pose::interpolate(
                    &self.base,
                    t,
                    Ease::InOutCubic.apply(state.enter_progress),
                ),
                (Some(t), Phase::During) => *t,
                (Some(t), Phase::Exit) => Pose::interpolate(
                    t,
                    &self.base,
                    Ease::InOutCubic.apply(state.exit_progress),
                ),
                (None, _) => self.base,
            }
        };

        match &self.motion {
            Some(m) => {
                let weight = Ease::InOutCubic.apply(state.enter_progress);
                m.blend(&held, state.time_ms, weight)
            }
            None => held,
        }
    }

    /// Resolve pose and walk the skeleton in one call.
    pub fn geometry_at(&self, state: &PhaseState) -> FigureGeometry {
        fk::evaluate(&self.skeleton, &self.pose_at(state))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/perform.rs"]
mod tests;
