#![forbid(unsafe_code)]

use thiserror::Error;

/// Rejected [`BoxOptions`](crate::options::BoxOptions) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

impl OptionsError {
    pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { field, value })
        }
    }

    pub(crate) fn check_finite(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NotFinite { field, value })
        }
    }
}

/// Failure of a directional text box render.
///
/// Host errors are carried unchanged; font lifecycle and drawing failures
/// belong to the host.
#[derive(Debug, Error)]
pub enum RenderError<E>
where
    E: std::error::Error + 'static,
{
    #[error("invalid box options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("host surface failed: {0}")]
    Surface(#[source] E),
}

impl<E> RenderError<E>
where
    E: std::error::Error + 'static,
{
    /// The host error, if this came from the surface.
    #[must_use]
    pub fn surface_error(&self) -> Option<&E> {
        match self {
            Self::Surface(err) => Some(err),
            Self::InvalidOptions(_) => None,
        }
    }
}
