//! Camera direction presets: named keyframes over unit progress, the same
//! bracket-and-lerp pattern as motion tracks at lower complexity. Camera
//! paths are one-shot progressions, clamped at both ends rather than cyclic.

use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::interp::Lerp;
use crate::foundation::core::Point;
use crate::foundation::error::{ManikinError, ManikinResult};

/// Camera framing at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    /// Zoom factor; 1.0 frames the full canvas.
    pub zoom: f64,
    /// Look-at point in canvas coordinates.
    pub center: Point,
}

impl CameraState {
    /// The resting full-canvas framing for a 1920x1080 canvas.
    pub fn full() -> Self {
        Self {
            zoom: 1.0,
            center: Point::new(960.0, 540.0),
        }
    }
}

impl Lerp for CameraState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            zoom: f64::lerp(&a.zoom, &b.zoom, t),
            center: <Point as Lerp>::lerp(&a.center, &b.center, t),
        }
    }
}

/// One keyframe of a camera path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraKey {
    /// Position in the path, `[0, 1]`.
    pub at: f64,
    /// Framing at this key.
    pub state: CameraState,
    /// Easing applied toward the next key.
    pub ease: Ease,
}

/// A camera move described as keyframes over unit progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraPath {
    /// Keys sorted by `at`.
    pub keys: Vec<CameraKey>,
}

impl CameraPath {
    /// Validate static invariants: at least one key, positions inside
    /// `[0, 1]` and non-decreasing.
    pub fn validate(&self) -> ManikinResult<()> {
        if self.keys.is_empty() {
            return Err(ManikinError::animation(
                "CameraPath must have at least one keyframe",
            ));
        }
        if self.keys.iter().any(|k| !(0.0..=1.0).contains(&k.at)) {
            return Err(ManikinError::animation(
                "CameraPath keyframe positions must be in [0, 1]",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ManikinError::animation(
                "CameraPath keyframes must be sorted by position",
            ));
        }
        Ok(())
    }

    /// Sample the framing at clamped progress.
    pub fn sample(&self, progress: f64) -> CameraState {
        let first = match self.keys.first() {
            Some(k) => k,
            None => return CameraState::full(),
        };
        let last = &self.keys[self.keys.len() - 1];

        let p = progress.clamp(0.0, 1.0);
        if p <= first.at {
            return first.state;
        }
        if p >= last.at {
            return last.state;
        }

        let idx = self
            .keys
            .partition_point(|k| k.at <= p)
            .clamp(1, self.keys.len() - 1);
        let prev = &self.keys[idx - 1];
        let next = &self.keys[idx];
        let width = next.at - prev.at;
        if width <= 0.0 {
            return prev.state;
        }
        let local = prev.ease.apply((p - prev.at) / width);
        CameraState::lerp(&prev.state, &next.state, local)
    }
}

fn keys(entries: &[(f64, f64, (f64, f64))]) -> Vec<CameraKey> {
    entries
        .iter()
        .map(|&(at, zoom, (cx, cy))| CameraKey {
            at,
            state: CameraState {
                zoom,
                center: Point::new(cx, cy),
            },
            ease: Ease::InOutQuad,
        })
        .collect()
}

/// Named camera moves, loaded once and read-only during evaluation.
#[derive(Clone, Debug)]
pub struct CameraLibrary {
    paths: BTreeMap<String, CameraPath>,
}

impl CameraLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self {
            paths: BTreeMap::new(),
        }
    }

    /// The built-in camera moves scene templates select from.
    pub fn builtin() -> Self {
        let mut lib = Self::new();
        lib.insert(
            "static_full",
            CameraPath {
                keys: keys(&[(0.0, 1.0, (960.0, 540.0))]),
            },
        );
        lib.insert(
            "zoom_in_slow",
            CameraPath {
                keys: keys(&[(0.0, 1.0, (960.0, 540.0)), (1.0, 1.15, (960.0, 540.0))]),
            },
        );
        lib.insert(
            "zoom_in_fast",
            CameraPath {
                keys: keys(&[
                    (0.0, 1.0, (960.0, 540.0)),
                    (0.35, 1.3, (960.0, 540.0)),
                    (1.0, 1.3, (960.0, 540.0)),
                ]),
            },
        );
        lib.insert(
            "zoom_breathe",
            CameraPath {
                keys: keys(&[
                    (0.0, 1.0, (960.0, 540.0)),
                    (0.5, 1.08, (960.0, 540.0)),
                    (1.0, 1.0, (960.0, 540.0)),
                ]),
            },
        );
        lib.insert(
            "zoom_out_reveal",
            CameraPath {
                keys: keys(&[(0.0, 1.25, (960.0, 540.0)), (1.0, 1.0, (960.0, 540.0))]),
            },
        );
        lib.insert(
            "pan_left_to_right",
            CameraPath {
                keys: keys(&[(0.0, 1.1, (860.0, 540.0)), (1.0, 1.1, (1060.0, 540.0))]),
            },
        );
        lib
    }

    /// Register or replace a camera move.
    pub fn insert(&mut self, name: impl Into<String>, path: CameraPath) {
        debug_assert!(path.validate().is_ok());
        self.paths.insert(name.into(), path);
    }

    /// Look up a camera move by the name scene data uses.
    ///
    /// A miss is a fatal configuration error, not a recoverable condition.
    pub fn get(&self, name: &str) -> ManikinResult<&CameraPath> {
        self.paths
            .get(name)
            .ok_or_else(|| ManikinError::UnknownCamera(name.to_owned()))
    }

    /// Iterate registered camera move names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }
}

impl Default for CameraLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/camera.rs"]
mod tests;
