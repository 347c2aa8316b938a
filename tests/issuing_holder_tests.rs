//! Integration tests for the IssuingHolder resource.
//!
//! These tests run every holder operation against a wiremock server and
//! verify the request shape (path, query, body) and the decoded result.

use serde_json::json;
use stark_infra::auth::Project;
use stark_infra::{
    Environment, HostUrl, HttpError, IssuingHolder, IssuingHolderListParams, IssuingHolderStatus,
    IssuingHolderUpdateParams, IssuingRule, IssuingRuleInterval, ProjectId, ResourceError,
    RestClient, StarkConfig,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> RestClient {
    let config = StarkConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let project = Project::new(
        Environment::Sandbox,
        ProjectId::new("5656565656565656").unwrap(),
    );
    RestClient::new(&config, project).unwrap()
}

fn holder_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Tony Stark",
        "taxId": "012.345.678-90",
        "externalId": "my-entity/123",
        "tags": ["iron", "suit"],
        "status": status,
        "created": "2022-05-02T17:13:32.162948+00:00",
        "updated": "2022-05-02T17:13:32.162948+00:00"
    })
}

fn new_holder() -> IssuingHolder {
    IssuingHolder {
        name: "Tony Stark".to_string(),
        tax_id: "012.345.678-90".to_string(),
        external_id: "my-entity/123".to_string(),
        tags: Some(vec!["iron".to_string(), "suit".to_string()]),
        ..Default::default()
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_holder_returns_server_fields_and_keeps_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/issuing-holder"))
        .and(body_json(json!({
            "issuingHolders": [{
                "name": "Tony Stark",
                "taxId": "012.345.678-90",
                "externalId": "my-entity/123",
                "tags": ["iron", "suit"]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Holder(s) successfully created",
            "issuingHolders": [holder_json("5155165527080960", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let created = IssuingHolder::create(&client, &[new_holder()], &[])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    let holder = &created[0];
    assert!(holder.id.is_some());
    assert_eq!(holder.status, Some(IssuingHolderStatus::Active));
    assert!(holder.created.is_some());
    assert_eq!(holder.name, "Tony Stark");
    assert_eq!(holder.tax_id, "012.345.678-90");
    assert_eq!(holder.external_id, "my-entity/123");
}

#[tokio::test]
async fn test_create_holder_with_expand_sends_query_and_rules() {
    let server = MockServer::start().await;

    let mut response_holder = holder_json("5155165527080960", "active");
    response_holder["rules"] = json!([{
        "id": "6155165527080960",
        "name": "General",
        "amount": 100000,
        "interval": "day",
        "currencyCode": "BRL",
        "counterAmount": 0,
        "currencyName": "Brazilian Real",
        "currencySymbol": "R$"
    }]);

    Mock::given(method("POST"))
        .and(path("/issuing-holder"))
        .and(query_param("expand", "rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuingHolders": [response_holder]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut holder = new_holder();
    holder.rules = Some(vec![IssuingRule {
        name: "General".to_string(),
        amount: 100_000,
        interval: Some(IssuingRuleInterval::Day),
        currency_code: Some("BRL".to_string()),
        ..Default::default()
    }]);

    let client = create_test_client(&server);
    let created = IssuingHolder::create(&client, &[holder], &["rules"])
        .await
        .unwrap();

    let rules = created[0].rules.as_ref().unwrap();
    assert_eq!(rules[0].currency_symbol.as_deref(), Some("R$"));
}

#[tokio::test]
async fn test_create_holder_rejection_preserves_api_error_codes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/issuing-holder"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [
                {"code": "invalidTaxId", "message": "Element 0: Tax ID is invalid"}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = IssuingHolder::create(&client, &[new_holder()], &[])
        .await
        .unwrap_err();

    match error {
        ResourceError::Api { status, errors, .. } => {
            assert_eq!(status, 400);
            assert_eq!(errors[0].code, "invalidTaxId");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_holder_without_entity_key_is_a_missing_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder/5155165527080960"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "holder": holder_json("5155165527080960", "active")
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = IssuingHolder::get(&client, "5155165527080960", &[]).await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingField { field, .. }) if field == "issuingHolder"
    ));
}

#[tokio::test]
async fn test_get_holder_decodes_issuing_holder_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder/5155165527080960"))
        .and(query_param("expand", "rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuingHolder": holder_json("5155165527080960", "blocked")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let holder = IssuingHolder::get(&client, "5155165527080960", &["rules"])
        .await
        .unwrap();

    assert_eq!(holder.id.as_deref(), Some("5155165527080960"));
    assert_eq!(holder.status, Some(IssuingHolderStatus::Blocked));
}

#[tokio::test]
async fn test_get_missing_holder_returns_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "invalidHolderId", "message": "Holder not found"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = IssuingHolder::get(&client, "0", &[]).await.unwrap_err();

    assert_eq!(error.error_codes(), vec!["invalidHolderId"]);
    match error {
        ResourceError::NotFound {
            resource, id, errors, ..
        } => {
            assert_eq!(resource, "IssuingHolder");
            assert_eq!(id, "0");
            assert_eq!(errors[0].message, "Holder not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    let config = StarkConfig::builder()
        .host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let project = Project::new(
        Environment::Sandbox,
        ProjectId::new("5656565656565656").unwrap(),
    );
    let client = RestClient::new(&config, project).unwrap();

    let result = IssuingHolder::get(&client, "5155165527080960", &[]).await;

    assert!(matches!(
        result,
        Err(ResourceError::Http(HttpError::Network(_)))
    ));
}

// ============================================================================
// Update and Delete
// ============================================================================

#[tokio::test]
async fn test_update_holder_sends_partial_payload() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/issuing-holder/5155165527080960"))
        .and(body_json(json!({"status": "blocked", "name": "Anthony Stark"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuingHolder": holder_json("5155165527080960", "blocked")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let holder = IssuingHolder::update(
        &client,
        "5155165527080960",
        IssuingHolderUpdateParams {
            status: Some(IssuingHolderStatus::Blocked),
            name: Some("Anthony Stark".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(holder.status, Some(IssuingHolderStatus::Blocked));
}

#[tokio::test]
async fn test_update_holder_rules_sends_existing_rule_ids() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/issuing-holder/5155165527080960"))
        .and(body_json(json!({
            "rules": [
                {"id": "777", "name": "General", "amount": 10},
                {"name": "Travel", "amount": 5000, "interval": "week", "currencyCode": "BRL"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuingHolder": holder_json("5155165527080960", "active")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let rules = vec![
        IssuingRule {
            id: Some("777".to_string()),
            name: "General".to_string(),
            amount: 10,
            ..Default::default()
        },
        IssuingRule {
            name: "Travel".to_string(),
            amount: 5000,
            interval: Some(IssuingRuleInterval::Week),
            currency_code: Some("BRL".to_string()),
            ..Default::default()
        },
    ];

    IssuingHolder::update(
        &client,
        "5155165527080960",
        IssuingHolderUpdateParams {
            rules: Some(rules),
            ..Default::default()
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_delete_holder_returns_pre_deletion_entity() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/issuing-holder/5155165527080960"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuingHolder": holder_json("5155165527080960", "active")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let holder = IssuingHolder::delete(&client, "5155165527080960")
        .await
        .unwrap();

    assert_eq!(holder.status, Some(IssuingHolderStatus::Active));
}

// ============================================================================
// Page and Query
// ============================================================================

#[tokio::test]
async fn test_page_sends_filters_and_returns_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/issuing-holder"))
        .and(query_param("limit", "2"))
        .and(query_param("status", "active"))
        .and(query_param("tags", "iron,suit"))
        .and(query_param("after", "2022-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cursor": "page-2",
            "issuingHolders": [holder_json("1", "active"), holder_json("2", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = IssuingHolderListParams {
        limit: Some(2),
        after: Some("2022-01-01".into()),
        status: Some(IssuingHolderStatus::Active),
        tags: Some(vec!["iron".to_string(), "suit".to_string()]),
        ..Default::default()
    };
    let page = IssuingHolder::page(&client, params, None).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.cursor(), Some("page-2"));
}

#[tokio::test]
async fn test_query_rejects_invalid_dates_before_any_request() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let result = IssuingHolder::query(
        &client,
        IssuingHolderListParams {
            before: Some("not-a-date".into()),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(ResourceError::InvalidFormat { .. })));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
