//! Facial expression presets: static parameter lookups for the paint layer.

use serde::{Deserialize, Serialize};

/// Named facial expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Relaxed face.
    #[default]
    Neutral,
    /// Smile, open eyes.
    Happy,
    /// Downturned mouth.
    Sad,
    /// Wide eyes, raised brows.
    Surprised,
    /// Narrowed eyes, flat mouth.
    Thinking,
    /// Lowered brows.
    Angry,
    /// One eye closed, smile.
    Wink,
}

/// Face parameters handed to the paint layer. All values are static per
/// expression; blinking and the like belong to motion tracks, not here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceParams {
    /// Eye openness in `[0, 1]` (left eye for [`Expression::Wink`]).
    pub eye_openness: f64,
    /// Brow raise in `[-1, 1]`; negative is furrowed.
    pub brow_raise: f64,
    /// Mouth curvature in `[-1, 1]`; positive is a smile.
    pub mouth_curve: f64,
}

impl Expression {
    /// Parse the name scene data uses.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "neutral" => Some(Self::Neutral),
            "happy" => Some(Self::Happy),
            "sad" => Some(Self::Sad),
            "surprised" => Some(Self::Surprised),
            "thinking" => Some(Self::Thinking),
            "angry" => Some(Self::Angry),
            "wink" => Some(Self::Wink),
            _ => None,
        }
    }

    /// Static face parameters for this expression.
    pub fn params(self) -> FaceParams {
        match self {
            Self::Neutral => FaceParams {
                eye_openness: 1.0,
                brow_raise: 0.0,
                mouth_curve: 0.1,
            },
            Self::Happy => FaceParams {
                eye_openness: 0.9,
                brow_raise: 0.2,
                mouth_curve: 0.8,
            },
            Self::Sad => FaceParams {
                eye_openness: 0.7,
                brow_raise: -0.1,
                mouth_curve: -0.6,
            },
            Self::Surprised => FaceParams {
                eye_openness: 1.0,
                brow_raise: 0.9,
                mouth_curve: -0.1,
            },
            Self::Thinking => FaceParams {
                eye_openness: 0.5,
                brow_raise: 0.3,
                mouth_curve: 0.0,
            },
            Self::Angry => FaceParams {
                eye_openness: 0.8,
                brow_raise: -0.8,
                mouth_curve: -0.4,
            },
            Self::Wink => FaceParams {
                eye_openness: 0.0,
                brow_raise: 0.1,
                mouth_curve: 0.7,
            },
        }
    }
}
