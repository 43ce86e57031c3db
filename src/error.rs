//! Error type shared by every fallible operation in the crate

/// Everything that can go wrong when calling into the library.
///
/// The set is closed so callers can match on the variant instead of
/// inspecting messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClibError {
    /// Fewer or more values than an operation accepts
    #[error("expected between {min} and {max} arguments, got {got}")]
    ArgumentCount { min: usize, max: usize, got: usize },

    /// A value of the wrong runtime type crossed a dynamic (JSON) boundary
    #[error("argument {index} must be of type {expected}")]
    ArgumentType { index: usize, expected: &'static str },

    /// Shape input that cannot describe anything drawable
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// No drawing surface could be acquired
    #[error("no canvas was found with the id: {0}")]
    SurfaceNotFound(String),

    /// Angle unit string that is not one of d, deg, degrees, r, rad, radians
    #[error("unsupported angle unit {0:?}, expected d, deg, degrees, r, rad or radians")]
    UnsupportedUnit(String),

    /// A host (browser) API call failed
    #[error("platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, ClibError>;
