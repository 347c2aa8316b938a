//! Integration tests for the CreditNote resource.

use chrono::{TimeZone, Utc};
use serde_json::json;
use stark_infra::auth::Project;
use stark_infra::{
    CreditNote, CreditNoteListParams, CreditNoteSigner, CreditNoteStatus, Environment, HostUrl,
    ProjectId, ResourceError, RestClient, StarkConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

fn note_json(status: &str) -> serde_json::Value {
    json!({
        "id": "5730360003756032",
        "templateId": "5707012469162869",
        "name": "Jamie Lannister",
        "taxId": "20.018.183/0001-80",
        "nominalAmount": 100000,
        "scheduled": "2022-05-02T00:00:00+00:00",
        "invoices": [{"amount": 120000, "due": "2023-05-02"}],
        "payment": {"bankCode": "00000000", "branchCode": "1234", "accountNumber": "129340-1", "name": "Jamie Lannister"},
        "paymentType": "transfer",
        "signers": [{"id": "1", "name": "Jamie Lannister", "contact": "jamie.lannister@gmail.com", "method": "link"}],
        "externalId": "my-note/1",
        "streetLine1": "Av. Paulista, 200",
        "streetLine2": "10 andar",
        "district": "Bela Vista",
        "city": "Sao Paulo",
        "stateCode": "SP",
        "zipCode": "01310-000",
        "amount": 120000,
        "status": status,
        "created": "2022-05-01T12:00:00.000000+00:00",
        "updated": "2022-05-01T12:00:00.000000+00:00"
    })
}

fn new_note() -> CreditNote {
    CreditNote {
        template_id: "5707012469162869".to_string(),
        name: "Jamie Lannister".to_string(),
        tax_id: "20.018.183/0001-80".to_string(),
        nominal_amount: 100_000,
        scheduled: Utc.with_ymd_and_hms(2022, 5, 2, 0, 0, 0).unwrap(),
        invoices: vec![json!({"amount": 120000, "due": "2023-05-02"})],
        payment: json!({"bankCode": "00000000", "branchCode": "1234", "accountNumber": "129340-1", "name": "Jamie Lannister"}),
        payment_type: "transfer".to_string(),
        signers: vec![CreditNoteSigner {
            name: "Jamie Lannister".to_string(),
            contact: "jamie.lannister@gmail.com".to_string(),
            method: "link".to_string(),
            ..Default::default()
        }],
        external_id: "my-note/1".to_string(),
        street_line_1: "Av. Paulista, 200".to_string(),
        street_line_2: "10 andar".to_string(),
        district: "Bela Vista".to_string(),
        city: "Sao Paulo".to_string(),
        state_code: "SP".to_string(),
        zip_code: "01310-000".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_note_posts_plural_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/credit-note"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Credit Note(s) successfully created",
            "creditNotes": [note_json("created")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let created = CreditNote::create(&client, &[new_note()]).await.unwrap();

    assert_eq!(created[0].status, Some(CreditNoteStatus::Created));
    assert_eq!(created[0].signers[0].id.as_deref(), Some("1"));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent = &body["creditNotes"][0];
    assert_eq!(sent["streetLine1"], "Av. Paulista, 200");
    assert_eq!(sent["nominalAmount"], 100_000);
    assert!(sent.get("id").is_none());
    assert!(sent.get("rebateAmount").is_none());
}

#[tokio::test]
async fn test_delete_note_returns_canceled_note() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/credit-note/5730360003756032"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "creditNote": note_json("canceled")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let note = CreditNote::delete(&client, "5730360003756032").await.unwrap();

    assert_eq!(note.status, Some(CreditNoteStatus::Canceled));
}

#[tokio::test]
async fn test_query_notes_by_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credit-note"))
        .and(query_param("status", "success"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cursor": null,
            "creditNotes": [note_json("success")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let notes = CreditNote::query(
        &client,
        CreditNoteListParams {
            status: Some(CreditNoteStatus::Success),
            ..Default::default()
        },
    )
    .unwrap()
    .try_collect()
    .await
    .unwrap();

    assert_eq!(notes.len(), 1);
}

#[tokio::test]
async fn test_unknown_status_in_response_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credit-note/5730360003756032"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "creditNote": note_json("teleported")
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = CreditNote::get(&client, "5730360003756032").await;

    assert!(matches!(
        result,
        Err(ResourceError::InvalidField { field, .. }) if field == "status"
    ));
}
