//! Integration tests for the REST API client functionality.
//!
//! These tests verify client construction, the default credential,
//! authentication headers, path normalization and raw verb behavior.

use std::sync::Arc;

use serde_json::json;
use stark_infra::auth::{settings, Organization, Project, RequestSigner, SignError};
use stark_infra::{
    ConfigError, Environment, HostUrl, OrganizationId, ProjectId, RestClient, RestError,
    StarkConfig, WorkspaceId,
};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug)]
struct FixedSigner;

impl RequestSigner for FixedSigner {
    fn sign(&self, _message: &str) -> Result<String, SignError> {
        Ok("c2lnbmF0dXJl".to_string())
    }
}

fn create_test_project() -> Project {
    Project::new(
        Environment::Sandbox,
        ProjectId::new("5656565656565656").unwrap(),
    )
}

fn mock_config(server: &MockServer) -> StarkConfig {
    StarkConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_uses_environment_base_url() {
    let client = RestClient::new(&StarkConfig::default(), create_test_project()).unwrap();
    assert_eq!(client.base_url(), "https://sandbox.api.starkinfra.com/v2/");

    let production = Project::new(Environment::Production, ProjectId::new("1").unwrap());
    let client = RestClient::new(&StarkConfig::default(), production).unwrap();
    assert_eq!(client.base_url(), "https://api.starkinfra.com/v2/");
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

#[test]
fn test_from_settings_requires_default_user() {
    settings::clear_user();
    let result = RestClient::from_settings(&StarkConfig::default());
    assert!(matches!(result, Err(ConfigError::MissingUser)));

    settings::set_user(create_test_project());
    let client = RestClient::from_settings(&StarkConfig::default()).unwrap();
    assert_eq!(client.user().access_id(), "project/5656565656565656");

    settings::clear_user();
}

// ============================================================================
// Authentication Header Tests
// ============================================================================

#[tokio::test]
async fn test_project_requests_carry_access_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder"))
        .and(header("Access-Id", "project/5656565656565656"))
        .and(header_exists("Access-Time"))
        .and(header_exists("User-Agent"))
        .and(header("Accept-Language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issuingHolders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&mock_config(&server), create_test_project()).unwrap();
    let response = client.get("issuing-holder", None).await.unwrap();

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_signer_produces_access_signature_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder"))
        .and(header("Access-Signature", "c2lnbmF0dXJl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issuingHolders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let project = create_test_project().with_signer(Arc::new(FixedSigner));
    let client = RestClient::new(&mock_config(&server), project).unwrap();

    client.get("/issuing-holder", None).await.unwrap();
}

#[tokio::test]
async fn test_organization_workspace_access_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder"))
        .and(header(
            "Access-Id",
            "organization/4545454545454545/workspace/5078376503050240",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issuingHolders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let organization = Organization::new(
        Environment::Sandbox,
        OrganizationId::new("4545454545454545").unwrap(),
    )
    .with_workspace(WorkspaceId::new("5078376503050240").unwrap());
    let client = RestClient::new(&mock_config(&server), organization).unwrap();

    client.get("issuing-holder", None).await.unwrap();
}

// ============================================================================
// Raw Verb Tests
// ============================================================================

#[tokio::test]
async fn test_empty_path_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = RestClient::new(&mock_config(&server), create_test_project()).unwrap();

    let result = client.get("/", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_returned_as_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder/1"))
        .and(query_param("expand", "rules"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"code": "invalidExpand", "message": "Unknown expand"}]
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(&mock_config(&server), create_test_project()).unwrap();
    let query = [("expand".to_string(), "rules".to_string())]
        .into_iter()
        .collect();
    let response = client.get("issuing-holder/1", Some(query)).await.unwrap();

    assert_eq!(response.code, 400);
    assert_eq!(response.body["errors"][0]["code"], "invalidExpand");
}
