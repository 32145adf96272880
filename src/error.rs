//! Error types.
//!
//! Only configuration problems are errors. Out-of-range battery levels are
//! clamped where they enter ([`BatteryState::new`](crate::state::BatteryState::new))
//! and cancelling a timer that is not pending does nothing.

use thiserror::Error;

/// The ring cannot size itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The reference status icon could not be loaded.
    #[error("reference icon could not be loaded")]
    MissingReferenceIcon,
    /// The reference status icon loaded but has no height.
    #[error("reference icon has zero height")]
    EmptyReferenceIcon,
}

/// Failure while drawing a frame.
#[derive(Debug, Error)]
pub enum DrawError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The draw target rejected a primitive.
    #[error("draw target error: {0:?}")]
    Target(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(ConfigError::MissingReferenceIcon.to_string(), "reference icon could not be loaded");
        assert_eq!(ConfigError::EmptyReferenceIcon.to_string(), "reference icon has zero height");
    }

    #[test]
    fn test_draw_error_from_config() {
        let err: DrawError<()> = ConfigError::MissingReferenceIcon.into();
        assert!(matches!(err, DrawError::Config(ConfigError::MissingReferenceIcon)));
        assert_eq!(err.to_string(), "reference icon could not be loaded");
    }

    #[test]
    fn test_draw_error_target() {
        let err: DrawError<&str> = DrawError::Target("bus fault");
        assert_eq!(err.to_string(), "draw target error: \"bus fault\"");
    }
}
