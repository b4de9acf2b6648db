//! Catalog Loader
//!
//! Fetches the catalog document over HTTP and parses it into a [`Catalog`].
//! One fetch per page view; the caller owns the result and passes it down
//! explicitly, so there is no process-wide catalog state.

use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::LoadError;

/// A hung fetch would stall the initial render indefinitely, so every
/// request carries an explicit timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP loader for the catalog document. The resource location is fixed at
/// construction.
pub struct CatalogLoader {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl CatalogLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the catalog document.
    ///
    /// Non-success statuses, transport failures and parse failures all map
    /// to [`LoadError`] with diagnostic detail logged here; no retry.
    pub async fn fetch(&self) -> Result<Catalog, LoadError> {
        tracing::debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch catalog from {}: {}", self.url, err);
                LoadError::Network(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog fetch returned HTTP {} for {}", status.as_u16(), self.url);
            return Err(LoadError::BadStatus { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|err| {
            tracing::error!("Failed to read catalog body from {}: {}", self.url, err);
            LoadError::Network(err)
        })?;

        let catalog = parse_catalog(&body)?;
        tracing::info!(
            "Catalog loaded: {} courses, {} products",
            catalog.courses.as_ref().map_or(0, Vec::len),
            catalog.products.as_ref().map_or(0, Vec::len)
        );
        Ok(catalog)
    }
}

/// Parse a catalog document from raw bytes.
///
/// Split out of [`CatalogLoader::fetch`] so tests can drive the pipeline
/// without a network.
pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog, LoadError> {
    serde_json::from_slice(bytes).map_err(|err| {
        tracing::error!("Failed to parse catalog document: {}", err);
        LoadError::Parse(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_minimal_document() {
        let catalog = parse_catalog(b"{}").unwrap();
        assert!(catalog.configuration.is_none());
        assert!(catalog.courses.is_none());
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        let err = parse_catalog(b"{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.to_string(), "Error al interpretar el archivo JSON");
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_shape() {
        // Valid JSON, wrong document shape
        assert!(parse_catalog(b"[1, 2, 3]").is_err());
        assert!(parse_catalog(br#"{"cursos": [{"id": "not-an-int"}]}"#).is_err());
    }

    #[test]
    fn test_loader_keeps_fixed_url() {
        let loader = CatalogLoader::new("http://localhost:8000/data.json");
        assert_eq!(loader.url(), "http://localhost:8000/data.json");
    }
}
