//! The shared enter/during/exit timeline evaluator and the camera direction
//! presets. Everything here is a pure function of an absolute frame number.

pub mod camera;
pub mod phase;
pub mod presets;
