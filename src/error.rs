//! Error taxonomy.
//!
//! `LoadError` is the only failure surfaced to the user, as a full-page
//! error panel. Section-level conditions (missing container, empty
//! collection, card render failure) are contained inside `pages` and never
//! escape their grid.

use thiserror::Error;

/// Catalog fetch or parse failure. Fatal to the whole page view.
///
/// The `Display` text is the generic user-facing message embedded in the
/// error panel; diagnostic detail (status code, underlying error) is logged
/// at the failure site instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource responded with a non-success status.
    #[error("Error al cargar el archivo JSON")]
    BadStatus { status: u16 },

    /// Transport-level failure: DNS, connect, timeout, body read.
    #[error("Error de red al cargar el catálogo")]
    Network(#[source] reqwest::Error),

    /// The body was not a valid catalog document.
    #[error("Error al interpretar el archivo JSON")]
    Parse(#[source] serde_json::Error),
}

/// Per-card rendering failure. Contained to its grid, shown as a generic
/// section placeholder.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Price violates the non-negative/finite catalog invariant.
    #[error("invalid price for \"{title}\": {value}")]
    InvalidPrice { title: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages_are_generic() {
        // The panel shows this text verbatim; status detail stays in the logs
        let err = LoadError::BadStatus { status: 404 };
        assert_eq!(err.to_string(), "Error al cargar el archivo JSON");
    }

    #[test]
    fn test_render_error_names_the_item() {
        let err = RenderError::InvalidPrice { title: "Netflix".to_string(), value: -1.0 };
        assert!(err.to_string().contains("Netflix"));
    }
}
