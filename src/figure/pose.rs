//! Full-body pose values, sparse overrides, and the named preset library.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::animation::interp::Lerp;
use crate::figure::skeleton::Joint;
use crate::foundation::error::{ManikinError, ManikinResult};

/// A complete assignment of rotation angles (degrees) to all ten joints.
///
/// A `Pose` always defines every joint; sparse data lives in
/// [`PoseOverride`]. Values are plain unbounded degrees — presets are
/// authored past ±180° where a gesture needs it (see `reachingBack`), so no
/// normalization is applied anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pose {
    /// Torso lean from vertical.
    pub torso: f64,
    /// Head tilt relative to the torso.
    pub head: f64,
    /// Left shoulder swing from hanging straight down.
    pub upper_arm_l: f64,
    /// Left elbow bend relative to the upper arm.
    pub lower_arm_l: f64,
    /// Right shoulder swing from hanging straight down.
    pub upper_arm_r: f64,
    /// Right elbow bend relative to the upper arm.
    pub lower_arm_r: f64,
    /// Left hip swing from straight down.
    pub upper_leg_l: f64,
    /// Left knee bend relative to the upper leg.
    pub lower_leg_l: f64,
    /// Right hip swing from straight down.
    pub upper_leg_r: f64,
    /// Right knee bend relative to the upper leg.
    pub lower_leg_r: f64,
}

impl Pose {
    /// The neutral standing pose: every joint at zero.
    pub const NEUTRAL: Pose = Pose {
        torso: 0.0,
        head: 0.0,
        upper_arm_l: 0.0,
        lower_arm_l: 0.0,
        upper_arm_r: 0.0,
        lower_arm_r: 0.0,
        upper_leg_l: 0.0,
        lower_leg_l: 0.0,
        upper_leg_r: 0.0,
        lower_leg_r: 0.0,
    };

    /// Angle of one joint.
    pub fn joint(&self, j: Joint) -> f64 {
        match j {
            Joint::Torso => self.torso,
            Joint::Head => self.head,
            Joint::UpperArmL => self.upper_arm_l,
            Joint::LowerArmL => self.lower_arm_l,
            Joint::UpperArmR => self.upper_arm_r,
            Joint::LowerArmR => self.lower_arm_r,
            Joint::UpperLegL => self.upper_leg_l,
            Joint::LowerLegL => self.lower_leg_l,
            Joint::UpperLegR => self.upper_leg_r,
            Joint::LowerLegR => self.lower_leg_r,
        }
    }

    /// Copy of this pose with one joint replaced.
    pub fn with_joint(mut self, j: Joint, deg: f64) -> Pose {
        match j {
            Joint::Torso => self.torso = deg,
            Joint::Head => self.head = deg,
            Joint::UpperArmL => self.upper_arm_l = deg,
            Joint::LowerArmL => self.lower_arm_l = deg,
            Joint::UpperArmR => self.upper_arm_r = deg,
            Joint::LowerArmR => self.lower_arm_r = deg,
            Joint::UpperLegL => self.upper_leg_l = deg,
            Joint::LowerLegL => self.lower_leg_l = deg,
            Joint::UpperLegR => self.upper_leg_r = deg,
            Joint::LowerLegR => self.lower_leg_r = deg,
        }
        self
    }

    /// Per-joint linear interpolation from `a` to `b`, with `t` clamped to
    /// `[0, 1]`.
    ///
    /// Deliberately a plain scalar lerp with no shortest-angular-path
    /// wraparound: angles are unbounded degrees and hand-authored presets
    /// rely on lerping straight through values beyond ±180°.
    pub fn interpolate(a: &Pose, b: &Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let mut out = Pose::NEUTRAL;
        for j in Joint::ALL {
            out = out.with_joint(j, f64::lerp(&a.joint(j), &b.joint(j), t));
        }
        out
    }

    /// Fresh pose with every joint present in `overrides` replaced and all
    /// other joints passed through unchanged.
    pub fn apply(&self, overrides: &PoseOverride) -> Pose {
        let mut out = *self;
        for j in Joint::ALL {
            if let Some(deg) = overrides.get(j) {
                out = out.with_joint(j, deg);
            }
        }
        out
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Pose::interpolate(a, b, t)
    }
}

/// A sparse update over a dense [`Pose`]: per joint, either a replacement
/// angle or absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseOverride {
    angles: [Option<f64>; 10],
}

impl PoseOverride {
    /// The empty override. Applying it is the identity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, j: Joint, deg: f64) -> Self {
        self.angles[j.index()] = Some(deg);
        self
    }

    /// Override angle for one joint, if present.
    pub fn get(&self, j: Joint) -> Option<f64> {
        self.angles[j.index()]
    }

    /// Set one joint's override angle.
    pub fn set(&mut self, j: Joint, deg: f64) {
        self.angles[j.index()] = Some(deg);
    }

    /// Return `true` when no joint is overridden.
    pub fn is_empty(&self) -> bool {
        self.angles.iter().all(Option::is_none)
    }

    /// Iterate the overridden joints in canonical order.
    pub fn joints(&self) -> impl Iterator<Item = (Joint, f64)> + '_ {
        Joint::ALL
            .into_iter()
            .filter_map(|j| self.get(j).map(|deg| (j, deg)))
    }
}

impl Serialize for PoseOverride {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let map: BTreeMap<&str, f64> = self.joints().map(|(j, deg)| (j.name(), deg)).collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PoseOverride {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = BTreeMap::<String, f64>::deserialize(deserializer)?;
        let mut out = PoseOverride::empty();
        for (name, deg) in map {
            let joint = Joint::from_name(&name)
                .ok_or_else(|| D::Error::custom(format!("unknown joint \"{name}\"")))?;
            out.set(joint, deg);
        }
        Ok(out)
    }
}

/// Named pose presets, loaded once and read-only during evaluation.
#[derive(Clone, Debug)]
pub struct PoseLibrary {
    poses: BTreeMap<String, Pose>,
}

fn preset(joints: &[(Joint, f64)]) -> Pose {
    joints
        .iter()
        .fold(Pose::NEUTRAL, |p, &(j, deg)| p.with_joint(j, deg))
}

impl PoseLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self {
            poses: BTreeMap::new(),
        }
    }

    /// The built-in preset catalog used by scene templates.
    pub fn builtin() -> Self {
        use Joint::*;

        let mut lib = Self::new();
        lib.insert("standing", Pose::NEUTRAL);
        lib.insert("waving", preset(&[(UpperArmR, 165.0), (LowerArmR, 20.0)]));
        lib.insert("pointingRight", preset(&[(UpperArmR, 90.0)]));
        lib.insert("pointingLeft", preset(&[(UpperArmL, -90.0)]));
        lib.insert("pointingUp", preset(&[(UpperArmR, 170.0)]));
        lib.insert(
            "pointingDown",
            preset(&[(UpperArmR, 35.0), (LowerArmR, -15.0)]),
        );
        lib.insert(
            "celebrating",
            preset(&[
                (UpperArmL, -155.0),
                (LowerArmL, -15.0),
                (UpperArmR, 155.0),
                (LowerArmR, 15.0),
                (Head, -4.0),
            ]),
        );
        lib.insert(
            "thumbsUp",
            preset(&[(UpperArmR, 70.0), (LowerArmR, 55.0)]),
        );
        lib.insert(
            "beckoning",
            preset(&[(UpperArmR, 75.0), (LowerArmR, 40.0)]),
        );
        lib.insert(
            "presenting",
            preset(&[(UpperArmR, 55.0), (LowerArmR, 20.0), (Torso, 3.0)]),
        );
        lib.insert(
            "armsCrossed",
            preset(&[
                (UpperArmL, -30.0),
                (LowerArmL, 100.0),
                (UpperArmR, 30.0),
                (LowerArmR, -100.0),
            ]),
        );
        lib.insert(
            "shrugging",
            preset(&[
                (UpperArmL, -40.0),
                (LowerArmL, -65.0),
                (UpperArmR, 40.0),
                (LowerArmR, 65.0),
                (Head, 7.0),
            ]),
        );
        lib.insert(
            "handsOnHips",
            preset(&[
                (UpperArmL, -45.0),
                (LowerArmL, -80.0),
                (UpperArmR, 45.0),
                (LowerArmR, 80.0),
            ]),
        );
        lib.insert(
            "handOnChin",
            preset(&[
                (UpperArmR, 25.0),
                (LowerArmR, 125.0),
                (Head, -6.0),
                (Torso, 2.0),
            ]),
        );
        lib.insert(
            "bothHandsUp",
            preset(&[
                (UpperArmL, -145.0),
                (UpperArmR, 145.0),
            ]),
        );
        lib.insert(
            "sitting",
            preset(&[
                (UpperLegL, 85.0),
                (LowerLegL, -85.0),
                (UpperLegR, 85.0),
                (LowerLegR, -85.0),
            ]),
        );
        lib.insert(
            "walking",
            preset(&[
                (UpperLegL, 22.0),
                (LowerLegL, -12.0),
                (UpperLegR, -18.0),
                (LowerLegR, 25.0),
                (UpperArmL, -18.0),
                (UpperArmR, 18.0),
                (Torso, 2.0),
            ]),
        );
        // Authored past 180 on purpose; keeps the arm sweeping behind the
        // torso instead of snapping across the front when interpolated.
        lib.insert(
            "reachingBack",
            preset(&[(UpperArmR, 205.0), (LowerArmR, 10.0)]),
        );
        lib
    }

    /// Register or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, pose: Pose) {
        self.poses.insert(name.into(), pose);
    }

    /// Look up a preset by the name scene data uses.
    ///
    /// A miss is a fatal configuration error, not a recoverable condition.
    pub fn get(&self, name: &str) -> ManikinResult<&Pose> {
        self.poses
            .get(name)
            .ok_or_else(|| ManikinError::UnknownPose(name.to_owned()))
    }

    /// Iterate registered preset names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.poses.keys().map(String::as_str)
    }
}

impl Default for PoseLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/pose.rs"]
mod tests;
