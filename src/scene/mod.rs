//! The boundary to the scene-schema layer: serde definitions mirroring the
//! JSON scene description, and the load-time pass that resolves them into
//! evaluation-ready elements.

pub mod compile;
pub mod model;
