//! Static bone table and joint enumeration for the stickman character.
//!
//! The bone graph is a forest rooted at the hip: the torso chain (with both
//! arms hanging off the torso end) and two independent leg chains. Parents
//! are declared before children in [`BONES`], so a single linear walk visits
//! every bone after its parent and always terminates.

use serde::{Deserialize, Serialize};

/// The ten rotational joints of the character, in canonical order.
///
/// `L`/`R` suffixes are the character's screen-left and screen-right sides;
/// the two sides are independently parameterized, nothing assumes bilateral
/// symmetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Torso lean, relative to vertical.
    Torso,
    /// Head tilt, relative to the torso.
    Head,
    /// Left shoulder.
    UpperArmL,
    /// Left elbow.
    LowerArmL,
    /// Right shoulder.
    UpperArmR,
    /// Right elbow.
    LowerArmR,
    /// Left hip.
    UpperLegL,
    /// Left knee.
    LowerLegL,
    /// Right hip.
    UpperLegR,
    /// Right knee.
    LowerLegR,
}

impl Joint {
    /// All joints in canonical order.
    pub const ALL: [Joint; 10] = [
        Joint::Torso,
        Joint::Head,
        Joint::UpperArmL,
        Joint::LowerArmL,
        Joint::UpperArmR,
        Joint::LowerArmR,
        Joint::UpperLegL,
        Joint::LowerLegL,
        Joint::UpperLegR,
        Joint::LowerLegR,
    ];

    /// Canonical index of this joint in [`Joint::ALL`].
    pub fn index(self) -> usize {
        match self {
            Joint::Torso => 0,
            Joint::Head => 1,
            Joint::UpperArmL => 2,
            Joint::LowerArmL => 3,
            Joint::UpperArmR => 4,
            Joint::LowerArmR => 5,
            Joint::UpperLegL => 6,
            Joint::LowerLegL => 7,
            Joint::UpperLegR => 8,
            Joint::LowerLegR => 9,
        }
    }

    /// The camelCase name this joint carries in scene data.
    pub fn name(self) -> &'static str {
        match self {
            Joint::Torso => "torso",
            Joint::Head => "head",
            Joint::UpperArmL => "upperArmL",
            Joint::LowerArmL => "lowerArmL",
            Joint::UpperArmR => "upperArmR",
            Joint::LowerArmR => "lowerArmR",
            Joint::UpperLegL => "upperLegL",
            Joint::LowerLegL => "lowerLegL",
            Joint::UpperLegR => "upperLegR",
            Joint::LowerLegR => "lowerLegR",
        }
    }

    /// Parse a scene-data joint name.
    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::ALL.into_iter().find(|j| j.name() == name)
    }
}

/// The nine line-segment bones. The head is a circle anchored off the torso
/// end and is not part of this enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoneId {
    /// Hip to neck.
    Torso,
    /// Left shoulder to elbow.
    UpperArmL,
    /// Left elbow to wrist.
    LowerArmL,
    /// Right shoulder to elbow.
    UpperArmR,
    /// Right elbow to wrist.
    LowerArmR,
    /// Left hip to knee.
    UpperLegL,
    /// Left knee to ankle.
    LowerLegL,
    /// Right hip to knee.
    UpperLegR,
    /// Right knee to ankle.
    LowerLegR,
}

impl BoneId {
    /// Number of segment bones.
    pub const COUNT: usize = 9;

    /// Index of this bone in [`BONES`] (and in evaluated geometry).
    pub fn index(self) -> usize {
        match self {
            BoneId::Torso => 0,
            BoneId::UpperArmL => 1,
            BoneId::LowerArmL => 2,
            BoneId::UpperArmR => 3,
            BoneId::LowerArmR => 4,
            BoneId::UpperLegL => 5,
            BoneId::LowerLegL => 6,
            BoneId::UpperLegR => 7,
            BoneId::LowerLegR => 8,
        }
    }
}

/// Where a child bone's origin attaches on its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// The parent's origin point.
    Start,
    /// The parent's end point.
    End,
}

/// One entry of the static bone table.
#[derive(Clone, Copy, Debug)]
pub struct Bone {
    /// Segment identity.
    pub id: BoneId,
    /// The joint whose angle drives this bone.
    pub joint: Joint,
    /// Parent bone, or `None` for a chain root at the hip.
    pub parent: Option<BoneId>,
    /// Attach point on the parent. Ignored for roots.
    pub anchor: Anchor,
}

/// The bone forest, parents before children.
pub const BONES: [Bone; BoneId::COUNT] = [
    Bone {
        id: BoneId::Torso,
        joint: Joint::Torso,
        parent: None,
        anchor: Anchor::Start,
    },
    Bone {
        id: BoneId::UpperArmL,
        joint: Joint::UpperArmL,
        parent: Some(BoneId::Torso),
        anchor: Anchor::End,
    },
    Bone {
        id: BoneId::LowerArmL,
        joint: Joint::LowerArmL,
        parent: Some(BoneId::UpperArmL),
        anchor: Anchor::End,
    },
    Bone {
        id: BoneId::UpperArmR,
        joint: Joint::UpperArmR,
        parent: Some(BoneId::Torso),
        anchor: Anchor::End,
    },
    Bone {
        id: BoneId::LowerArmR,
        joint: Joint::LowerArmR,
        parent: Some(BoneId::UpperArmR),
        anchor: Anchor::End,
    },
    Bone {
        id: BoneId::UpperLegL,
        joint: Joint::UpperLegL,
        parent: None,
        anchor: Anchor::Start,
    },
    Bone {
        id: BoneId::LowerLegL,
        joint: Joint::LowerLegL,
        parent: Some(BoneId::UpperLegL),
        anchor: Anchor::End,
    },
    Bone {
        id: BoneId::UpperLegR,
        joint: Joint::UpperLegR,
        parent: None,
        anchor: Anchor::Start,
    },
    Bone {
        id: BoneId::LowerLegR,
        joint: Joint::LowerLegR,
        parent: Some(BoneId::UpperLegR),
        anchor: Anchor::End,
    },
];

/// Segment dimensions for one character instance.
///
/// Lengths are independently settable; nothing couples left to right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skeleton {
    /// Hip-to-neck length.
    pub torso_len: f64,
    /// Head circle radius.
    pub head_radius: f64,
    /// Shoulder-to-elbow length, left side.
    pub upper_arm_l_len: f64,
    /// Elbow-to-wrist length, left side.
    pub lower_arm_l_len: f64,
    /// Shoulder-to-elbow length, right side.
    pub upper_arm_r_len: f64,
    /// Elbow-to-wrist length, right side.
    pub lower_arm_r_len: f64,
    /// Hip-to-knee length, left side.
    pub upper_leg_l_len: f64,
    /// Knee-to-ankle length, left side.
    pub lower_leg_l_len: f64,
    /// Hip-to-knee length, right side.
    pub upper_leg_r_len: f64,
    /// Knee-to-ankle length, right side.
    pub lower_leg_r_len: f64,
    /// Lateral distance from the torso centerline to each shoulder.
    pub shoulder_offset: f64,
    /// Lateral distance from the hip origin to each leg root.
    pub hip_half_width: f64,
    /// How far below the torso end the shoulders sit.
    pub neck_gap: f64,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            torso_len: 70.0,
            head_radius: 30.0,
            upper_arm_l_len: 34.0,
            lower_arm_l_len: 30.0,
            upper_arm_r_len: 34.0,
            lower_arm_r_len: 30.0,
            upper_leg_l_len: 40.0,
            lower_leg_l_len: 36.0,
            upper_leg_r_len: 40.0,
            lower_leg_r_len: 36.0,
            shoulder_offset: 14.0,
            hip_half_width: 9.0,
            neck_gap: 10.0,
        }
    }
}

impl Skeleton {
    /// Length of one segment bone.
    pub fn bone_len(&self, id: BoneId) -> f64 {
        match id {
            BoneId::Torso => self.torso_len,
            BoneId::UpperArmL => self.upper_arm_l_len,
            BoneId::LowerArmL => self.lower_arm_l_len,
            BoneId::UpperArmR => self.upper_arm_r_len,
            BoneId::LowerArmR => self.lower_arm_r_len,
            BoneId::UpperLegL => self.upper_leg_l_len,
            BoneId::LowerLegL => self.lower_leg_l_len,
            BoneId::UpperLegR => self.upper_leg_r_len,
            BoneId::LowerLegR => self.lower_leg_r_len,
        }
    }
}
