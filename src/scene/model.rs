//! Serde structures for the scene description.
//!
//! These mirror the camelCase JSON the scene builder emits. They stay dumb:
//! names are plain strings here and are resolved against the libraries by
//! [`crate::scene::compile`], where failures can cite the element id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One enter/during/exit animation request.
///
/// JSON shorthand: a bare string is the preset name with every default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDef {
    /// Preset or motion name (`"fadeIn"`, `"breathing"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Window or cycle length override in milliseconds.
    pub duration_ms: Option<f64>,
    /// Delay after the element start, enter only.
    pub delay_ms: Option<f64>,
    /// Wrap scripted keyframes instead of holding the last one.
    #[serde(rename = "loop", default)]
    pub looped: bool,
    /// Scripted pose sequence (stickman only).
    #[serde(default)]
    pub keyframes: Option<Vec<PoseKeyframeDef>>,
}

impl AnimationDef {
    /// Def for a bare preset name.
    pub fn named(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            duration_ms: None,
            delay_ms: None,
            looped: false,
            keyframes: None,
        }
    }

    /// Def for a preset name with an explicit duration.
    pub fn with_duration(kind: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            duration_ms: Some(duration_ms),
            ..Self::named(kind)
        }
    }
}

impl<'de> Deserialize<'de> for AnimationDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Obj {
            #[serde(rename = "type")]
            kind: String,
            duration_ms: Option<f64>,
            delay_ms: Option<f64>,
            #[serde(rename = "loop", default)]
            looped: bool,
            #[serde(default)]
            keyframes: Option<Vec<PoseKeyframeDef>>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Obj(Obj),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(kind) => Ok(Self::named(kind)),
            Repr::Obj(o) => Ok(Self {
                kind: o.kind,
                duration_ms: o.duration_ms,
                delay_ms: o.delay_ms,
                looped: o.looped,
                keyframes: o.keyframes,
            }),
        }
    }
}

/// One scripted pose keyframe: a time offset and a pose preset name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseKeyframeDef {
    /// Element-local time in milliseconds.
    pub at_ms: f64,
    /// Pose preset name.
    pub pose: String,
}

/// The optional enter/during/exit triple as it appears in scene JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementAnimationsDef {
    /// Entrance request.
    #[serde(default)]
    pub enter: Option<AnimationDef>,
    /// Hold request.
    #[serde(default)]
    pub during: Option<AnimationDef>,
    /// Exit request.
    #[serde(default)]
    pub exit: Option<AnimationDef>,
}

impl ElementAnimationsDef {
    /// Return `true` when no phase is requested.
    pub fn is_empty(&self) -> bool {
        self.enter.is_none() && self.during.is_none() && self.exit.is_none()
    }
}

/// Scene element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// The articulated character.
    Stickman,
    /// A text block.
    Text,
    /// An animated number.
    Counter,
    /// An icon asset.
    Icon,
    /// A vector shape.
    Shape,
    /// The scene camera.
    Camera,
}

/// Per-element properties. Only the fields the engine consumes are typed;
/// paint-layer properties (colors, fonts, asset ids) pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsDef {
    /// Stickman base pose preset name.
    pub pose: Option<String>,
    /// Stickman pose-transition target preset name.
    pub target_pose: Option<String>,
    /// Stickman loop motion name.
    pub motion: Option<String>,
    /// Stickman facial expression name.
    pub expression: Option<String>,
    /// Camera move preset name.
    pub preset: Option<String>,
    /// Counter start value.
    pub from: Option<f64>,
    /// Counter end value.
    pub to: Option<f64>,
    /// Paint-layer properties, passed through verbatim.
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

/// One scene element as described by scene JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDef {
    /// Unique element id, cited by every load-time error.
    pub id: String,
    /// Element category.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Visible-from time in scene milliseconds.
    pub start_ms: f64,
    /// Visible-until time in scene milliseconds.
    pub end_ms: f64,
    /// Animation requests; empty picks the per-kind defaults.
    #[serde(default)]
    pub animation: ElementAnimationsDef,
    /// Element properties.
    #[serde(default)]
    pub props: PropsDef,
}

/// A whole scene as described by scene JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDef {
    /// Scene id, used in error messages and logs.
    #[serde(default)]
    pub id: Option<String>,
    /// Frames per second; the original pipeline renders at 30.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Scene length in milliseconds.
    pub duration_ms: f64,
    /// Scene elements in paint order.
    pub elements: Vec<ElementDef>,
}

fn default_fps() -> u32 {
    30
}
