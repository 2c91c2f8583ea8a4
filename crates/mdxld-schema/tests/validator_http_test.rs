//! End-to-end tests for SchemaTypeValidator against a mocked schema.org.
//!
//! A wiremock server stands in for `https://schema.org`, serving both the
//! JSON definition documents read by the structured strategy and the HTML
//! type pages read by the scraped strategy.
//!
//! ## Endpoints Mocked
//!
//! | Method | Path | Served as |
//! |--------|------|-----------|
//! | GET    | `/Article` | JSON definition or HTML type page |
//! | GET    | `/InvalidType` | 404 |
//! | GET    | `/Broken` | 200 with a body that is not a definition |

use mdxld_core::{LinkedDocument, PropertyValue};
use mdxld_schema::{LookupStrategy, SchemaError, SchemaOrgConfig, SchemaTypeValidator};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<h1>Article</h1>
<table class="definition-table">
  <thead><tr><th>Property</th><th>Expected Type</th><th>Description</th></tr></thead>
  <tbody>
  <tr typeof="rdfs:Property" resource="https://schema.org/articleBody">
    <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/articleBody">articleBody</a></code></th>
    <td class="prop-ect"><a href="/Text">Text</a>&nbsp;</td>
    <td class="prop-desc">The actual body of the article.</td>
  </tr>
  </tbody>
  <tbody class="supertype">
  <tr typeof="rdfs:Property" resource="https://schema.org/headline">
    <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/headline">headline</a></code></th>
    <td class="prop-ect"><a href="/Text">Text</a>&nbsp;</td>
    <td class="prop-desc">Headline of the article.</td>
  </tr>
  <tr typeof="rdfs:Property" resource="https://schema.org/author">
    <th class="prop-nam" scope="row"><code property="rdfs:label"><a href="/author">author</a></code></th>
    <td class="prop-ect"><a href="/Organization">Organization</a>&nbsp; or <br/><a href="/Person">Person</a></td>
    <td class="prop-desc">The author of this content.</td>
  </tr>
  </tbody>
</table>
</body></html>"#;

fn article_json() -> serde_json::Value {
    serde_json::json!({
        "typeName": "Article",
        "properties": {
            "headline": ["Text"],
            "articleBody": ["Text"],
            "datePublished": ["Date"]
        }
    })
}

fn validator(server: &MockServer, strategy: LookupStrategy) -> SchemaTypeValidator {
    let config = SchemaOrgConfig {
        timeout_secs: 5,
        ..SchemaOrgConfig::new(&server.uri(), strategy).unwrap()
    };
    SchemaTypeValidator::from_config(&config).unwrap()
}

fn article(headline: impl Into<PropertyValue>) -> LinkedDocument {
    LinkedDocument::new("# Body")
        .with_type("https://schema.org/Article")
        .with_context("https://schema.org")
        .with_property("headline", headline)
}

async fn mount_article_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/Article"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(ARTICLE_PAGE),
        )
        .mount(server)
        .await;
}

async fn mount_article_json(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/Article"))
        .and(header_exists("accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json()))
        .mount(server)
        .await;
}

// ── Scraped strategy ─────────────────────────────────────────────────

#[tokio::test]
async fn scraped_article_with_text_headline_is_valid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let result = validator(&server, LookupStrategy::Scraped)
        .validate_type("https://schema.org/Article", &article("Test Article"))
        .await;
    assert!(result.is_valid, "{:?}", result.errors);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn scraped_article_reports_every_mismatch() {
    let server = MockServer::start().await;
    mount_article_page(&server).await;

    let doc = article(123i64).with_property("articleBody", true);
    let result = validator(&server, LookupStrategy::Scraped)
        .validate_type("https://schema.org/Article", &doc)
        .await;
    assert!(!result.is_valid);
    assert!(result.has_error("Invalid type for headline: expected one of [Text]"));
    assert!(result.has_error("Invalid type for articleBody: expected one of [Text]"));
    assert_eq!(result.errors.len(), 2);
}

#[tokio::test]
async fn scraped_properties_without_primitive_range_are_unconstrained() {
    let server = MockServer::start().await;
    mount_article_page(&server).await;

    let doc = article("ok").with_property("author", 42i64).with_property("extra", true);
    let result = validator(&server, LookupStrategy::Scraped)
        .validate_type("https://schema.org/Article", &doc)
        .await;
    assert!(result.is_valid, "{:?}", result.errors);
}

// ── Structured strategy ──────────────────────────────────────────────

#[tokio::test]
async fn structured_article_is_valid() {
    let server = MockServer::start().await;
    mount_article_json(&server).await;

    let doc = article("Test Article").with_property("datePublished", "2024-03-01");
    let result = validator(&server, LookupStrategy::Structured)
        .validate_type("https://schema.org/Article", &doc)
        .await;
    assert!(result.is_valid, "{:?}", result.errors);
}

#[tokio::test]
async fn structured_required_properties_are_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Article"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "typeName": "Article",
            "requiredProperties": ["headline"],
            "properties": { "headline": ["Text"] }
        })))
        .mount(&server)
        .await;

    let doc = LinkedDocument::new("").with_property("articleBody", "x");
    let result = validator(&server, LookupStrategy::Structured)
        .validate_type("https://schema.org/Article", &doc)
        .await;
    assert_eq!(result.errors, ["Missing required field: headline"]);
}

#[tokio::test]
async fn structured_malformed_body_is_single_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = validator(&server, LookupStrategy::Structured)
        .validate_type("https://schema.org/Broken", &article("x"))
        .await;
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("failed to parse definition"));
}

// ── Fetch failures ───────────────────────────────────────────────────

#[tokio::test]
async fn not_found_type_reports_fetch_failure_only() {
    for strategy in [LookupStrategy::Scraped, LookupStrategy::Structured] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/InvalidType"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let result = validator(&server, strategy)
            .validate_type("https://schema.org/InvalidType", &article(123i64))
            .await;
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            ["Failed to fetch schema.org definition: Not Found"],
            "strategy {strategy}"
        );
    }
}

#[tokio::test]
async fn unreachable_server_reports_fetch_failure() {
    let config = SchemaOrgConfig {
        timeout_secs: 2,
        ..SchemaOrgConfig::new("http://127.0.0.1:9", LookupStrategy::Scraped).unwrap()
    };
    let v = SchemaTypeValidator::from_config(&config).unwrap();
    let result = v.validate_type("https://schema.org/Article", &article("x")).await;
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Failed to fetch schema.org definition: "));
}

// ── Vocabulary gating ────────────────────────────────────────────────

#[tokio::test]
async fn stub_vocabularies_never_touch_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARTICLE_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let v = validator(&server, LookupStrategy::Scraped);
    for doc in [LinkedDocument::default(), article("x"), article(1i64)] {
        let result = v.validate_type("https://gs1.org/Product", &doc).await;
        assert_eq!(result.errors, ["GS1 validation not implemented"]);
        let result = v.validate_type("https://mdx.org.ai/Thing", &doc).await;
        assert_eq!(result.errors, ["MDX.org.ai validation not implemented"]);
    }
    let result = v.validate_type("https://example.com/Thing", &article("x")).await;
    assert_eq!(result.errors, ["Unsupported schema type: https://example.com/Thing"]);
}

// ── Enrichment ───────────────────────────────────────────────────────

#[tokio::test]
async fn enrich_adds_json_ld_keys() {
    let server = MockServer::start().await;
    mount_article_page(&server).await;

    let doc = LinkedDocument::new("# Body")
        .with_type("https://schema.org/Article")
        .with_property("headline", "Hello");
    let out = validator(&server, LookupStrategy::Scraped)
        .enrich(&doc, "https://schema.org")
        .await;
    assert_eq!(out.property("@context").and_then(PropertyValue::as_str), Some("https://schema.org"));
    assert_eq!(out.property("@type").and_then(PropertyValue::as_str), Some("Article"));
    assert_eq!(
        out.property("@id").and_then(PropertyValue::as_str),
        Some("https://schema.org/Article")
    );
    assert_eq!(out.property("headline"), doc.property("headline"));
    assert_eq!(out.body, "# Body");
}

#[tokio::test]
async fn enrich_on_fetch_failure_returns_original() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let doc = article("Hello");
    let out = validator(&server, LookupStrategy::Structured)
        .enrich(&doc, "https://schema.org")
        .await;
    assert_eq!(out, doc);
}

// ── Definition lookup ────────────────────────────────────────────────

#[tokio::test]
async fn definition_lookup_returns_property_table() {
    let server = MockServer::start().await;
    mount_article_json(&server).await;

    let def = validator(&server, LookupStrategy::Structured)
        .definition("https://schema.org/Article")
        .await
        .unwrap();
    assert_eq!(def.type_name, "Article");
    assert_eq!(def.properties.len(), 3);
}

#[tokio::test]
async fn definition_lookup_propagates_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/InvalidType"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = validator(&server, LookupStrategy::Scraped)
        .definition("https://schema.org/InvalidType")
        .await
        .unwrap_err();
    match err {
        SchemaError::Status { status, reason, .. } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected Status, got: {other:?}"),
    }
}
