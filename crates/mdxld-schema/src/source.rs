//! # Definition Sources
//!
//! [`SchemaDefinitionSource`] is the capability the validator depends on:
//! "give me the definition of type `X`". Two HTTP implementations exist,
//! [`StructuredSource`](crate::StructuredSource) and
//! [`ScrapedSource`](crate::ScrapedSource); tests substitute fakes that
//! return fixed definitions.
//!
//! ## Request Model
//!
//! Each lookup is exactly one GET to `<base_url>/<TypeName>`. A non-2xx
//! status or a transport error fails the lookup. No retries and no
//! caching happen here; callers own timeout and retry policy beyond the
//! configured per-request timeout.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{LookupStrategy, SchemaOrgConfig};
use crate::definition::SchemaDefinition;
use crate::error::SchemaError;
use crate::scraped::ScrapedSource;
use crate::structured::StructuredSource;

/// Resolves a local type name to its definition.
///
/// Implementations must be `Send + Sync` so a validator can be shared
/// across tasks behind an `Arc`. The trait is object-safe.
#[async_trait]
pub trait SchemaDefinitionSource: Send + Sync + std::fmt::Debug {
    /// Short name of the implementation, for logs.
    fn name(&self) -> &str;

    /// Fetch and build the definition of `type_name` (e.g. `Article`).
    async fn fetch_definition(&self, type_name: &str) -> Result<SchemaDefinition, SchemaError>;
}

/// Build the source selected by `config.strategy`.
pub fn build_source(config: &SchemaOrgConfig) -> Result<Arc<dyn SchemaDefinitionSource>, SchemaError> {
    config.validate()?;
    let fetcher = HttpFetcher::new(config)?;
    Ok(match config.strategy {
        LookupStrategy::Structured => Arc::new(StructuredSource::from_fetcher(fetcher)),
        LookupStrategy::Scraped => Arc::new(ScrapedSource::from_fetcher(fetcher)),
    })
}

/// Shared single-GET transport used by both HTTP sources.
#[derive(Debug, Clone)]
pub(crate) struct HttpFetcher {
    http: reqwest::Client,
    config: SchemaOrgConfig,
}

impl HttpFetcher {
    pub(crate) fn new(config: &SchemaOrgConfig) -> Result<Self, SchemaError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(SchemaError::Client)?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// GET the definition resource for `type_name` and return `(url, body)`.
    pub(crate) async fn get_text(
        &self,
        type_name: &str,
        accept: &'static str,
    ) -> Result<(String, String), SchemaError> {
        let url = self.config.definition_url(type_name)?;
        let url_str = url.to_string();
        tracing::debug!(url = %url_str, accept, "fetching type definition");

        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| SchemaError::Http {
                url: url_str.clone(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url_str, status = status.as_u16(), "definition fetch failed");
            return Err(SchemaError::Status {
                url: url_str,
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            });
        }

        let body = resp.text().await.map_err(|e| SchemaError::Http {
            url: url_str.clone(),
            source: e,
        })?;
        tracing::debug!(url = %url_str, bytes = body.len(), "fetched type definition");
        Ok((url_str, body))
    }
}
