//! Error types for loading model descriptors and card themes.

use thiserror::Error;

/// Errors raised while loading model descriptors or live model info.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed JSON or a shape mismatch.
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A descriptor without a display name.
    #[error("model descriptor has an empty name")]
    EmptyName,

    /// Two descriptors in one catalog share a name.
    #[error("duplicate model in catalog: {0}")]
    DuplicateModel(String),

    /// Malformed theme JSON or an invalid color string.
    #[error("invalid theme JSON: {0}")]
    Theme(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("invalid model JSON"));
    }

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::EmptyName.to_string(),
            "model descriptor has an empty name"
        );
        assert_eq!(
            CatalogError::DuplicateModel("gpt-4".to_string()).to_string(),
            "duplicate model in catalog: gpt-4"
        );
    }

    #[test]
    fn test_theme_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = CatalogError::Theme(json_err);
        assert!(err.to_string().starts_with("invalid theme JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
