//! VariantValidatorClient tests against a local stand-in server

#![cfg(feature = "web-service")]

use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use vvnorm::config::ValidatorConfig;
use vvnorm::report::ValidationResult;
use vvnorm::{validate_variant, VariantLookup, VariantValidatorClient};

/// Echoes the request back as a VariantValidator-shaped record
async fn echo(
    Path((assembly, key, transcript_set)): Path<(String, String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    Json(json!({
        "flag": "gene_variant",
        "input": {"variant": key},
        "metadata": {
            "assembly": assembly,
            "transcript_set": transcript_set,
            "content_type": query.get("content-type"),
            "accept": header("accept"),
            "user_agent": header("user-agent")
        }
    }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no such variant")
}

async fn not_json() -> impl IntoResponse {
    (StatusCode::OK, "<html>maintenance</html>")
}

async fn loosely_typed() -> impl IntoResponse {
    Json(json!({
        "flag": "gene_variant",
        "primary_assembly_loci": {
            "grch38": {"hgvs_genomic_description": "NC_000017.11:g.50198002C>A"},
            "hg19": null
        },
        "ENST00000225964.10:c.589G>T": {
            "hgvs_protein": "ENSP00000225964.5:p.(Gly197Cys)",
            "mane_select": 1
        }
    }))
}

async fn json_array() -> impl IntoResponse {
    Json(json!(["not", "an", "object"]))
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/vv/:assembly/:key/:transcript_set", get(echo))
        .route("/missing/:assembly/:key/:transcript_set", get(not_found))
        .route("/html/:assembly/:key/:transcript_set", get(not_json))
        .route("/array/:assembly/:key/:transcript_set", get(json_array))
        .route("/loose/:assembly/:key/:transcript_set", get(loosely_typed));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(base_url: String) -> VariantValidatorClient {
    VariantValidatorClient::new(&ValidatorConfig {
        base_url,
        timeout_seconds: 5,
        ..ValidatorConfig::default()
    })
    .unwrap()
}

fn metadata(result: &ValidationResult) -> &Value {
    match result {
        ValidationResult::Success(record) => &record.entries["metadata"],
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_successful_lookup() {
    let addr = spawn_server().await;
    let client = client(format!("http://{}/vv/", addr));

    let result = client
        .lookup("GRCh38", "ENST00000225964.10:c.589G>T", "mane")
        .await
        .unwrap();

    let ValidationResult::Success(record) = &result else {
        panic!("expected success, got {:?}", result);
    };
    assert_eq!(record.submitted_variant(), "ENST00000225964.10:c.589G>T");

    let metadata = metadata(&result);
    assert_eq!(metadata["assembly"], "GRCh38");
    assert_eq!(metadata["transcript_set"], "mane");
    assert_eq!(metadata["content_type"], "application/json");
    assert_eq!(metadata["accept"], "application/json");
    assert_eq!(metadata["user_agent"], "EnsemblVariantValidator/1.0");
}

#[tokio::test]
async fn test_validate_variant_sends_canonical_key() {
    let addr = spawn_server().await;
    let client = client(format!("http://{}/vv", addr));

    let result = validate_variant(&client, "chr17:50198002C>A", "GRCh38", "all")
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap()["input"]["variant"],
        "GRCh38-17-50198002-C-A"
    );
    assert_eq!(metadata(&result)["transcript_set"], "all");
}

#[tokio::test]
async fn test_http_error_becomes_failure_record() {
    let addr = spawn_server().await;
    let client = client(format!("http://{}/missing", addr));

    let result = client
        .lookup("GRCh38", "GRCh38-17-50198002-C-A", "mane")
        .await
        .unwrap();
    match result {
        ValidationResult::Failure(failure) => {
            assert_eq!(failure.status_code, Some(404));
            assert!(failure.error.contains("404"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_body_becomes_failure_record() {
    let addr = spawn_server().await;

    for prefix in ["html", "array"] {
        let client = client(format!("http://{}/{}", addr, prefix));
        let result = client
            .lookup("GRCh38", "GRCh38-17-50198002-C-A", "mane")
            .await
            .unwrap();
        match result {
            ValidationResult::Failure(failure) => {
                assert_eq!(failure.status_code, Some(200));
                assert!(failure
                    .error
                    .starts_with("Invalid response from validation service"));
            }
            other => panic!("expected failure for {}, got {:?}", prefix, other),
        }
    }
}

#[tokio::test]
async fn test_unreachable_host_becomes_failure_record() {
    let client = client("http://127.0.0.1:1".to_string());

    let result = client
        .lookup("GRCh38", "GRCh38-17-50198002-C-A", "mane")
        .await
        .unwrap();
    match result {
        ValidationResult::Failure(failure) => {
            assert_eq!(failure.status_code, None);
            assert!(!failure.error.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_loosely_typed_record_still_renders() {
    let addr = spawn_server().await;
    let client = client(format!("http://{}/loose", addr));

    let report = vvnorm::validate_and_format(&client, "17-50198002-C-A", "GRCh38", "mane")
        .await
        .unwrap();
    assert!(!report.raw.is_failure());
    assert!(report.formatted.contains("Gly197Cys"));
    assert!(report.formatted.contains("MANE Select"));
    assert!(report.formatted.contains("GRCH38"));
    assert!(!report.formatted.contains("HG19"));
}
