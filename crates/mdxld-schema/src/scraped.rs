//! # Scraped Lookup
//!
//! Fetches the human-readable type page (e.g. `https://schema.org/Article`)
//! and extracts property ranges from its definition tables.
//!
//! ## Extraction Rules
//!
//! - Every `<table class="definition-table">` on the page is scanned (type
//!   pages carry one table per ancestor type).
//! - In each `<tr>`, the property name is the text of the `<code>` element
//!   inside the `prop-nam` cell; its kinds come from the following
//!   `<td class="prop-ect">` cell.
//! - Only the whole-word tokens `Text`, `Number`, `Boolean`, `Date` and
//!   `URL` are recognized, in order of first appearance. `DateTime` or
//!   `Person` are not tokens.
//! - A row with no recognized token is omitted, which leaves the property
//!   unconstrained.
//! - Pages never declare required properties.
//!
//! Markup drift on the remote site degrades this source to an empty or
//! partial table, never to an error.

use async_trait::async_trait;
use mdxld_core::ValueKind;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SchemaOrgConfig;
use crate::definition::SchemaDefinition;
use crate::error::SchemaError;
use crate::source::{HttpFetcher, SchemaDefinitionSource};

const ACCEPT_HTML: &str = "text/html";

static TABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<table\s+class="definition-table"[^>]*>.*?</table>"#)
        .expect("table pattern is valid")
});

static ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<tr[^>]*>.*?</tr>").expect("row pattern is valid"));

static PROPERTY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<t[dh]\s+class="prop-nam"[^>]*>.*?<code[^>]*>(?:\s*<a[^>]*>)?\s*([^<]+?)\s*(?:</a>\s*)?</code>.*?<td\s+class="prop-ect"[^>]*>(.*?)</td>"#,
    )
    .expect("property pattern is valid")
});

static KIND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Text|Number|Boolean|Date|URL)\b").expect("kind pattern is valid")
});

/// Definition source reading the type's HTML page.
#[derive(Debug, Clone)]
pub struct ScrapedSource {
    fetcher: HttpFetcher,
}

impl ScrapedSource {
    /// Create a scraping source from configuration.
    pub fn new(config: &SchemaOrgConfig) -> Result<Self, SchemaError> {
        Ok(Self::from_fetcher(HttpFetcher::new(config)?))
    }

    pub(crate) fn from_fetcher(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SchemaDefinitionSource for ScrapedSource {
    fn name(&self) -> &str {
        "scraped"
    }

    async fn fetch_definition(&self, type_name: &str) -> Result<SchemaDefinition, SchemaError> {
        let (url, html) = self.fetcher.get_text(type_name, ACCEPT_HTML).await?;
        let definition = extract_definition(type_name, &html);
        tracing::debug!(
            url = %url,
            properties = definition.properties.len(),
            "extracted property table"
        );
        Ok(definition)
    }
}

/// Extract a definition from a type page.
pub fn extract_definition(type_name: &str, html: &str) -> SchemaDefinition {
    let mut definition = SchemaDefinition::new(type_name);
    for table in TABLE_REGEX.find_iter(html) {
        for row in ROW_REGEX.find_iter(table.as_str()) {
            let Some(caps) = PROPERTY_REGEX.captures(row.as_str()) else {
                continue;
            };
            let name = caps[1].trim();
            let kinds: Vec<ValueKind> = KIND_REGEX
                .find_iter(&caps[2])
                .map(|m| ValueKind::parse(m.as_str()))
                .collect();
            if name.is_empty() || kinds.is_empty() {
                continue;
            }
            definition.declare(name, kinds);
        }
    }
    definition
}
