//! Forward kinematics: one ordered walk of the bone forest from a resolved
//! pose to screen-space segment placements.
//!
//! Coordinate frame: origin at the hip, +x right, +y down (screen space).
//! A bone's world angle is measured from straight down, increasing toward
//! +x; rest orientation is up for the torso (180) and down for every limb
//! (0), so the all-zero pose is the upright standing figure.

use smallvec::SmallVec;

use crate::figure::pose::Pose;
use crate::figure::skeleton::{Anchor, BONES, Bone, BoneId, Skeleton};
use crate::foundation::core::{Point, Vec2};

/// Evaluated placement of one segment bone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BonePlacement {
    /// Segment identity.
    pub bone: BoneId,
    /// World-space origin (the joint the bone pivots on).
    pub start: Point,
    /// World-space end point.
    pub end: Point,
    /// World angle in degrees, measured from straight down.
    pub world_deg: f64,
}

/// Evaluated placement of the head circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadAnchor {
    /// World-space circle center.
    pub center: Point,
    /// Head orientation: torso deviation composed with the head joint,
    /// relative to upright. The face rotates with the torso, not the world.
    pub rotation_deg: f64,
    /// Circle radius, copied from the skeleton.
    pub radius: f64,
}

/// The complete screen geometry of the figure at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureGeometry {
    /// Segment placements, indexed by [`BoneId::index`].
    pub bones: SmallVec<[BonePlacement; BoneId::COUNT]>,
    /// Head circle placement.
    pub head: HeadAnchor,
}

impl FigureGeometry {
    /// Placement of one segment bone.
    pub fn bone(&self, id: BoneId) -> &BonePlacement {
        &self.bones[id.index()]
    }
}

/// Unit vector at `deg` from straight down, swinging toward +x.
fn dir(deg: f64) -> Vec2 {
    let r = deg.to_radians();
    Vec2::new(r.sin(), r.cos())
}

/// `v` rotated a quarter turn clockwise on screen.
fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rest orientation for a bone: the world angle it points at when its whole
/// chain is at zero.
fn rest_deg(id: BoneId) -> f64 {
    match id {
        BoneId::Torso => 180.0,
        _ => 0.0,
    }
}

/// Lateral root/mount offset applied before a bone's own rotation, expressed
/// in its parent's (or the hip's) deviation frame.
fn mount_offset(skeleton: &Skeleton, id: BoneId) -> Vec2 {
    match id {
        // Shoulders sit below the torso end by the neck gap, out from the
        // centerline by the shoulder offset.
        BoneId::UpperArmL => Vec2::new(-skeleton.shoulder_offset, skeleton.neck_gap),
        BoneId::UpperArmR => Vec2::new(skeleton.shoulder_offset, skeleton.neck_gap),
        // Leg chains root at the hip, spread by the half-width. They do not
        // inherit torso rotation.
        BoneId::UpperLegL => Vec2::new(-skeleton.hip_half_width, 0.0),
        BoneId::UpperLegR => Vec2::new(skeleton.hip_half_width, 0.0),
        _ => Vec2::ZERO,
    }
}

/// Rotate a parent-frame offset into world space given the parent's
/// accumulated deviation.
fn rotate_offset(offset: Vec2, parent_dev_deg: f64) -> Vec2 {
    if offset == Vec2::ZERO {
        return offset;
    }
    // The parent's rest axis is "up" for the torso; offsets are authored in
    // that frame (x lateral, y down along the torso).
    let up = dir(180.0 + parent_dev_deg);
    let right = perp(up);
    right * offset.x + up * (-offset.y)
}

/// Walk the bone forest once and place every segment plus the head.
///
/// Each bone's world rotation composes its joint angle onto its parent
/// chain's accumulated deviation; its origin is the parent's anchor point
/// plus the mount offset rotated into the parent frame. The table orders
/// parents before children, so this is a single linear pass.
pub fn evaluate(skeleton: &Skeleton, pose: &Pose) -> FigureGeometry {
    let hip = Point::ORIGIN;
    let mut placements: SmallVec<[BonePlacement; BoneId::COUNT]> = SmallVec::new();
    let mut deviation = [0.0f64; BoneId::COUNT];

    for bone in BONES {
        let Bone {
            id,
            joint,
            parent,
            anchor,
        } = bone;

        let (origin, parent_dev) = match parent {
            None => {
                // Chain roots mount on the hip; the hip frame never rotates.
                (hip + rotate_offset(mount_offset(skeleton, id), 0.0), 0.0)
            }
            Some(pid) => {
                let p = &placements[pid.index()];
                let at = match anchor {
                    Anchor::Start => p.start,
                    Anchor::End => p.end,
                };
                let dev = deviation[pid.index()];
                (at + rotate_offset(mount_offset(skeleton, id), dev), dev)
            }
        };

        let dev = parent_dev + pose.joint(joint);
        let world = rest_deg(id) + dev;
        let end = origin + dir(world) * skeleton.bone_len(id);

        deviation[id.index()] = dev;
        placements.push(BonePlacement {
            bone: id,
            start: origin,
            end,
            world_deg: world,
        });
    }

    // Head: the torso end projected on along the torso direction by the
    // radius. Its position ignores the head joint; only the rotation
    // composes torso + head.
    let torso = &placements[BoneId::Torso.index()];
    let torso_dev = deviation[BoneId::Torso.index()];
    let head = HeadAnchor {
        center: torso.end + dir(180.0 + torso_dev) * skeleton.head_radius,
        rotation_deg: torso_dev + pose.head,
        radius: skeleton.head_radius,
    };

    FigureGeometry {
        bones: placements,
        head,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/fk.rs"]
mod tests;
