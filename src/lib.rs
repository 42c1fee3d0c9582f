//! Manikin is the deterministic animation core of a programmatic
//! explainer-video generator: a stickman character, overlay elements, and
//! camera moves, all evaluated as pure functions of an absolute frame
//! number.
//!
//! The hosting renderer may evaluate frames out of order, in parallel, or
//! repeatedly (scrubbing, partial re-renders, multi-worker export), so
//! nothing in this crate keeps animation state between queries: no timers,
//! no elapsed-time accumulators, no mutable counters. Given the same frame
//! and the same compiled scene, every query returns the same output.
//!
//! The pipeline per frame:
//!
//! - [`scene::compile`] resolves a JSON scene description once, at load
//!   time, against the pose/motion/camera libraries.
//! - [`timeline::phase`] classifies each element's enter/during/exit phase
//!   at the queried frame and samples the named presets into opacity,
//!   transform, and reveal progress.
//! - For the character, [`figure::perform`] turns the phase state into a
//!   resolved [`Pose`] (pose transitions plus motion blending) and
//!   [`figure::fk`] walks the skeleton into screen geometry.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod animation;
pub mod figure;
pub mod scene;
pub mod timeline;

pub use crate::foundation::core::{Affine, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{ManikinError, ManikinResult};

pub use crate::figure::fk::{BonePlacement, FigureGeometry, HeadAnchor};
pub use crate::figure::pose::{Pose, PoseLibrary, PoseOverride};
pub use crate::figure::skeleton::{BoneId, Joint, Skeleton};
pub use crate::scene::compile::{Element, Libraries, Scene};
pub use crate::timeline::camera::CameraState;
pub use crate::timeline::phase::{ElementTimeline, ElementVisuals, Phase, PhaseState};
