/// Convenience result type used across Manikin.
pub type ManikinResult<T> = Result<T, ManikinError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Unknown-name variants are configuration errors: the name came out of a
/// scene description, so a failed lookup means the scene is corrupt and video
/// generation should abort, not recover.
#[derive(thiserror::Error, Debug)]
pub enum ManikinError {
    /// Invalid user-provided or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pose preset name not present in the pose library.
    #[error("unknown pose preset '{0}'")]
    UnknownPose(String),

    /// A motion name not present in the motion library.
    #[error("unknown motion '{0}'")]
    UnknownMotion(String),

    /// A camera direction name not present in the camera library.
    #[error("unknown camera direction '{0}'")]
    UnknownCamera(String),

    /// Errors while validating or sampling animation tracks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ManikinError {
    /// Build a [`ManikinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ManikinError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ManikinError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ManikinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
