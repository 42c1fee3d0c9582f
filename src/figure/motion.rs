//! Cyclic keyframe tracks of sparse joint overrides, sampled by wall-clock
//! position inside the cycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::animation::interp::Lerp;
use crate::figure::pose::{Pose, PoseOverride};
use crate::figure::skeleton::Joint;
use crate::foundation::error::{ManikinError, ManikinResult};

/// One keyframe of a motion: a position inside the unit cycle plus the
/// joints it pins there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionKey {
    /// Position in the cycle, `[0, 1]`. Progress 0 and 1 are the same
    /// instant of a looping motion.
    pub progress: f64,
    /// Sparse joint targets at this keyframe.
    pub pose: PoseOverride,
}

/// A cyclic track of partial joint overrides.
///
/// Static configuration: loaded once, validated once, read-only during
/// evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    /// Cycle duration in milliseconds.
    pub cycle_ms: f64,
    /// Keyframes sorted by progress.
    pub keys: Vec<MotionKey>,
}

impl Motion {
    /// Validate static invariants: a positive finite cycle, at least one
    /// keyframe, progress values inside `[0, 1]` and non-decreasing.
    pub fn validate(&self) -> ManikinResult<()> {
        if !(self.cycle_ms.is_finite() && self.cycle_ms > 0.0) {
            return Err(ManikinError::animation("Motion cycle_ms must be > 0"));
        }
        if self.keys.is_empty() {
            return Err(ManikinError::animation(
                "Motion must have at least one keyframe",
            ));
        }
        if self
            .keys
            .iter()
            .any(|k| !(0.0..=1.0).contains(&k.progress))
        {
            return Err(ManikinError::animation(
                "Motion keyframe progress must be in [0, 1]",
            ));
        }
        if !self
            .keys
            .windows(2)
            .all(|w| w[0].progress <= w[1].progress)
        {
            return Err(ManikinError::animation(
                "Motion keyframes must be sorted by progress",
            ));
        }
        Ok(())
    }

    /// Sample the track at an absolute time in milliseconds.
    ///
    /// The result contains exactly the joints referenced by the bracketing
    /// keyframes; everything else is left for the caller's merge to pass
    /// through. Periodic by construction: `sample(t) == sample(t + cycle_ms)`
    /// for any `t`, negative inputs included.
    pub fn sample(&self, time_ms: f64) -> PoseOverride {
        let first = match self.keys.first() {
            Some(k) => k,
            None => return PoseOverride::empty(),
        };
        if self.keys.len() == 1 {
            return first.pose;
        }
        let last = &self.keys[self.keys.len() - 1];

        let mut p = (time_ms % self.cycle_ms) / self.cycle_ms;
        if p < 0.0 {
            p += 1.0;
        }

        // Outside the authored span the bracket wraps across the seam,
        // last -> first, so a two-key motion loops without a duplicate
        // keyframe at progress 1.
        let (prev, next, local) = if p < first.progress || p > last.progress {
            let width = first.progress + 1.0 - last.progress;
            let offset = if p >= last.progress {
                p - last.progress
            } else {
                p + 1.0 - last.progress
            };
            (last, first, local_progress(offset, width))
        } else {
            let idx = self
                .keys
                .partition_point(|k| k.progress <= p)
                .clamp(1, self.keys.len() - 1);
            let prev = &self.keys[idx - 1];
            let next = &self.keys[idx];
            let width = next.progress - prev.progress;
            (prev, next, local_progress(p - prev.progress, width))
        };

        let mut out = PoseOverride::empty();
        for j in Joint::ALL {
            let a = prev.pose.get(j);
            let b = next.pose.get(j);
            if a.is_some() || b.is_some() {
                out.set(
                    j,
                    f64::lerp(&a.unwrap_or(0.0), &b.unwrap_or(0.0), local),
                );
            }
        }
        out
    }

    /// Merge the sampled override into `base`.
    pub fn apply(&self, base: &Pose, time_ms: f64) -> Pose {
        base.apply(&self.sample(time_ms))
    }

    /// Interpolate `base` toward the fully applied motion by `weight`,
    /// letting a motion fade in or out independently of its own cycle.
    pub fn blend(&self, base: &Pose, time_ms: f64, weight: f64) -> Pose {
        Pose::interpolate(base, &self.apply(base, time_ms), weight)
    }
}

/// Zero-width brackets are legitimate "instant" keys; they resolve to local
/// progress 0 instead of dividing by zero.
fn local_progress(offset: f64, width: f64) -> f64 {
    if width <= 0.0 { 0.0 } else { offset / width }
}

fn key(progress: f64, joints: &[(Joint, f64)]) -> MotionKey {
    MotionKey {
        progress,
        pose: joints
            .iter()
            .fold(PoseOverride::empty(), |ov, &(j, deg)| ov.with(j, deg)),
    }
}

/// Named loop motions, loaded once and read-only during evaluation.
#[derive(Clone, Debug)]
pub struct MotionLibrary {
    motions: BTreeMap<String, Motion>,
}

impl MotionLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self {
            motions: BTreeMap::new(),
        }
    }

    /// The built-in loop motion catalog used by scene templates.
    pub fn builtin() -> Self {
        use Joint::*;

        let mut lib = Self::new();
        lib.insert(
            "breathing",
            Motion {
                cycle_ms: 3000.0,
                keys: vec![
                    key(0.0, &[(Torso, 0.0), (Head, 0.0)]),
                    key(0.5, &[(Torso, 1.2), (Head, -1.5)]),
                ],
            },
        );
        lib.insert(
            "nodding",
            Motion {
                cycle_ms: 1200.0,
                keys: vec![key(0.0, &[(Head, 0.0)]), key(0.5, &[(Head, 12.0)])],
            },
        );
        lib.insert(
            "headShake",
            Motion {
                cycle_ms: 1000.0,
                keys: vec![key(0.0, &[(Head, -9.0)]), key(0.5, &[(Head, 9.0)])],
            },
        );
        lib.insert(
            "waving",
            Motion {
                cycle_ms: 800.0,
                keys: vec![
                    key(0.0, &[(LowerArmR, -5.0)]),
                    key(0.5, &[(LowerArmR, 40.0)]),
                ],
            },
        );
        lib.insert(
            "clapping",
            Motion {
                cycle_ms: 600.0,
                keys: vec![
                    key(
                        0.0,
                        &[
                            (UpperArmL, -55.0),
                            (LowerArmL, -35.0),
                            (UpperArmR, 55.0),
                            (LowerArmR, 35.0),
                        ],
                    ),
                    key(
                        0.5,
                        &[
                            (UpperArmL, -70.0),
                            (LowerArmL, -10.0),
                            (UpperArmR, 70.0),
                            (LowerArmR, 10.0),
                        ],
                    ),
                ],
            },
        );
        lib.insert(
            "typing",
            Motion {
                cycle_ms: 400.0,
                keys: vec![
                    key(0.0, &[(LowerArmL, 95.0), (LowerArmR, 85.0)]),
                    key(0.5, &[(LowerArmL, 85.0), (LowerArmR, 95.0)]),
                ],
            },
        );
        lib.insert(
            "walkCycle",
            Motion {
                cycle_ms: 1000.0,
                keys: vec![
                    key(
                        0.0,
                        &[
                            (UpperLegL, 24.0),
                            (LowerLegL, -14.0),
                            (UpperLegR, -20.0),
                            (LowerLegR, 28.0),
                            (UpperArmL, -18.0),
                            (UpperArmR, 18.0),
                        ],
                    ),
                    key(
                        0.5,
                        &[
                            (UpperLegL, -20.0),
                            (LowerLegL, 28.0),
                            (UpperLegR, 24.0),
                            (LowerLegR, -14.0),
                            (UpperArmL, 18.0),
                            (UpperArmR, -18.0),
                        ],
                    ),
                ],
            },
        );
        lib.insert(
            "jumping",
            Motion {
                cycle_ms: 900.0,
                keys: vec![
                    key(
                        0.0,
                        &[
                            (UpperLegL, 30.0),
                            (LowerLegL, -45.0),
                            (UpperLegR, 30.0),
                            (LowerLegR, -45.0),
                            (Torso, 6.0),
                        ],
                    ),
                    key(
                        0.45,
                        &[
                            (UpperLegL, -5.0),
                            (LowerLegL, 0.0),
                            (UpperLegR, -5.0),
                            (LowerLegR, 0.0),
                            (Torso, -2.0),
                        ],
                    ),
                ],
            },
        );
        lib.insert(
            "nervous",
            Motion {
                cycle_ms: 700.0,
                keys: vec![
                    key(0.0, &[(Head, -2.0), (Torso, -1.0)]),
                    key(0.5, &[(Head, 2.0), (Torso, 1.0)]),
                ],
            },
        );
        lib.insert(
            "laughing",
            Motion {
                cycle_ms: 900.0,
                keys: vec![
                    key(0.0, &[(Head, -10.0), (Torso, -3.0)]),
                    key(0.5, &[(Head, 2.0), (Torso, 2.0)]),
                ],
            },
        );
        lib.insert(
            "crying",
            Motion {
                cycle_ms: 1600.0,
                keys: vec![
                    key(0.0, &[(Head, 14.0), (Torso, 4.0)]),
                    key(0.5, &[(Head, 18.0), (Torso, 5.0)]),
                ],
            },
        );
        lib
    }

    /// Register or replace a motion. The motion is validated first.
    pub fn insert(&mut self, name: impl Into<String>, motion: Motion) {
        debug_assert!(motion.validate().is_ok());
        self.motions.insert(name.into(), motion);
    }

    /// Look up a motion by the name scene data uses.
    ///
    /// A miss is a fatal configuration error, not a recoverable condition.
    pub fn get(&self, name: &str) -> ManikinResult<&Motion> {
        self.motions
            .get(name)
            .ok_or_else(|| ManikinError::UnknownMotion(name.to_owned()))
    }

    /// Return `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.motions.contains_key(name)
    }

    /// Iterate registered motion names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.motions.keys().map(String::as_str)
    }
}

impl Default for MotionLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/motion.rs"]
mod tests;
