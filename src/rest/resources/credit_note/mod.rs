//! CreditNote resource implementation.
//!
//! A [`CreditNote`] is a credit operation issued to a borrower and paid out
//! once every signer has signed it. Each change to a note produces a
//! [`Log`] entry.
//!
//! # Field Constraints
//!
//! - `invoices` and `payment` are carried as raw JSON objects
//! - `rebate_amount`, `tags` and `expiration` are optional
//! - Only creation, retrieval and cancellation (`delete`) are supported
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::{CreditNote, CreditNoteListParams, CreditNoteStatus};
//!
//! let page = CreditNote::page(
//!     &client,
//!     CreditNoteListParams {
//!         status: Some(CreditNoteStatus::Success),
//!         ..Default::default()
//!     },
//!     None,
//! )
//! .await?;
//! ```

mod log;

pub use log::{CreditNoteLogType, Log, LogListParams};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::api::check_entities;
use crate::rest::checks::{check_datetime_param, check_param, check_required, DateInput, Params};
use crate::rest::{operations, Page, Query, Resource, ResourceError};

/// The lifecycle status of a [`CreditNote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditNoteStatus {
    /// Canceled before payment.
    Canceled,
    /// Registered and waiting for signatures.
    Created,
    /// Not signed before expiration.
    Expired,
    /// Payment failed.
    Failed,
    /// Payment in progress.
    Processing,
    /// Signed by every signer.
    Signed,
    /// Paid out.
    Success,
}

/// A person who must sign a [`CreditNote`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteSigner {
    /// Unique id returned when the signer is registered.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// Signer name. ex: "Tony Stark"
    pub name: String,

    /// Signer contact: an email address or phone number.
    pub contact: String,

    /// Delivery method for the signature request. ex: "link"
    pub method: String,
}

impl Resource for CreditNoteSigner {
    const NAME: &'static str = "CreditSigner";

    fn make(params: &mut Params) -> Result<Self, ResourceError> {
        Ok(Self {
            id: check_param(params, "id")?,
            name: check_required(params, "name")?,
            contact: check_required(params, "contact")?,
            method: check_required(params, "method")?,
        })
    }
}

impl TryFrom<Value> for CreditNoteSigner {
    type Error = ResourceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        crate::rest::api::from_api_json(value)
    }
}

/// A credit note.
///
/// # Read-Only Fields
///
/// The following fields are read-only and will not be sent in create requests:
/// - `id`, `amount`, `document_id`, `status`, `transaction_ids`, `workspace_id`
/// - `tax_amount`, `nominal_interest`, `interest`, `created`, `updated`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditNote {
    /// Unique id returned when the note is created.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// Id of the contract template. ex: "01234567890"
    pub template_id: String,

    /// Borrower name. ex: "Jamie Lannister"
    pub name: String,

    /// Borrower CPF or CNPJ. ex: "20.018.183/0001-80"
    pub tax_id: String,

    /// Amount in cents transferred to the borrower.
    pub nominal_amount: i64,

    /// Date of the transfer.
    pub scheduled: DateTime<Utc>,

    /// Invoices the borrower pays the credit back with.
    pub invoices: Vec<Value>,

    /// Payment details, according to `payment_type`.
    pub payment: Value,

    /// Payment type. ex: "transfer"
    pub payment_type: String,

    /// People who must sign the note.
    pub signers: Vec<CreditNoteSigner>,

    /// Caller-generated unique id, used to avoid duplicate notes.
    pub external_id: String,

    /// Borrower address, main line.
    pub street_line_1: String,

    /// Borrower address, complement.
    pub street_line_2: String,

    /// Borrower district.
    pub district: String,

    /// Borrower city.
    pub city: String,

    /// Borrower state code. ex: "SP"
    pub state_code: String,

    /// Borrower zip code. ex: "01311-200"
    pub zip_code: String,

    /// Amount in cents retained as rebate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebate_amount: Option<i64>,

    /// Tags for filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Seconds until the note expires if not signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    /// Total amount in cents owed by the borrower.
    #[serde(skip_serializing)]
    pub amount: Option<i64>,

    /// Id of the signed document.
    #[serde(skip_serializing)]
    pub document_id: Option<String>,

    /// Current status.
    #[serde(skip_serializing)]
    pub status: Option<CreditNoteStatus>,

    /// Ids of the transactions that paid the note out.
    #[serde(skip_serializing)]
    pub transaction_ids: Option<Vec<String>>,

    /// Id of the workspace the note belongs to.
    #[serde(skip_serializing)]
    pub workspace_id: Option<String>,

    /// IOF tax amount in cents.
    #[serde(skip_serializing)]
    pub tax_amount: Option<i64>,

    /// Yearly nominal interest rate, in percent.
    #[serde(skip_serializing)]
    pub nominal_interest: Option<f64>,

    /// Yearly effective interest rate, in percent.
    #[serde(skip_serializing)]
    pub interest: Option<f64>,

    /// Creation datetime.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// Latest update datetime.
    #[serde(skip_serializing)]
    pub updated: Option<DateTime<Utc>>,
}

impl Resource for CreditNote {
    const NAME: &'static str = "CreditNote";

    fn make(params: &mut Params) -> Result<Self, ResourceError> {
        Ok(Self {
            id: check_param(params, "id")?,
            template_id: check_required(params, "templateId")?,
            name: check_required(params, "name")?,
            tax_id: check_required(params, "taxId")?,
            nominal_amount: check_required(params, "nominalAmount")?,
            scheduled: check_datetime_param(params, "scheduled")?.ok_or_else(|| {
                ResourceError::MissingField {
                    resource: Self::NAME,
                    field: "scheduled".to_string(),
                }
            })?,
            invoices: check_required(params, "invoices")?,
            payment: check_required(params, "payment")?,
            payment_type: check_required(params, "paymentType")?,
            signers: check_entities(params, "signers")?.ok_or_else(|| {
                ResourceError::MissingField {
                    resource: Self::NAME,
                    field: "signers".to_string(),
                }
            })?,
            external_id: check_required(params, "externalId")?,
            street_line_1: check_required(params, "streetLine1")?,
            street_line_2: check_required(params, "streetLine2")?,
            district: check_required(params, "district")?,
            city: check_required(params, "city")?,
            state_code: check_required(params, "stateCode")?,
            zip_code: check_required(params, "zipCode")?,
            rebate_amount: check_param(params, "rebateAmount")?,
            tags: check_param(params, "tags")?,
            expiration: check_param(params, "expiration")?,
            amount: check_param(params, "amount")?,
            document_id: check_param(params, "documentId")?,
            status: check_param(params, "status")?,
            transaction_ids: check_param(params, "transactionIds")?,
            workspace_id: check_param(params, "workspaceId")?,
            tax_amount: check_param(params, "taxAmount")?,
            nominal_interest: check_param(params, "nominalInterest")?,
            interest: check_param(params, "interest")?,
            created: check_datetime_param(params, "created")?,
            updated: check_datetime_param(params, "updated")?,
        })
    }
}

impl TryFrom<Value> for CreditNote {
    type Error = ResourceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        crate::rest::api::from_api_json(value)
    }
}

impl CreditNote {
    /// Creates credit notes in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects any note.
    pub async fn create(client: &RestClient, notes: &[Self]) -> Result<Vec<Self>, ResourceError> {
        operations::post(client, &Self::descriptor(), notes, None).await
    }

    /// Retrieves a credit note by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no note has this id.
    pub async fn get(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, &Self::descriptor(), id, None).await
    }

    /// Lazily lists credit notes matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] if `after` or `before` is not
    /// a valid date.
    pub fn query(
        client: &RestClient,
        params: CreditNoteListParams,
    ) -> Result<Query<Self>, ResourceError> {
        let query = params.to_query()?;
        Ok(operations::get_list(
            client,
            Self::descriptor(),
            query,
            params.limit,
        ))
    }

    /// Retrieves one page of credit notes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] for invalid dates, or
    /// [`ResourceError::Api`] if the API rejects the filters.
    pub async fn page(
        client: &RestClient,
        params: CreditNoteListParams,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        let query = operations::page_query(params.to_query()?, params.limit, cursor);
        operations::get_page(client, &Self::descriptor(), query).await
    }

    /// Cancels a credit note, returning it as it was before cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no note has this id.
    pub async fn delete(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, &Self::descriptor(), id).await
    }
}

/// Filters for listing credit notes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditNoteListParams {
    /// Maximum number of notes to retrieve.
    #[serde(skip)]
    pub limit: Option<usize>,

    /// Only notes created after this date.
    #[serde(skip)]
    pub after: Option<DateInput>,

    /// Only notes created before this date.
    #[serde(skip)]
    pub before: Option<DateInput>,

    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CreditNoteStatus>,

    /// Filter by tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Filter by ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

impl CreditNoteListParams {
    fn to_query(&self) -> Result<BTreeMap<String, String>, ResourceError> {
        operations::query_with_dates(self, self.after.as_ref(), self.before.as_ref())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::rest::api::api_json;
    use serde_json::json;

    pub(crate) fn note_json() -> Value {
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
            "tags": ["loan"],
            "amount": 120000,
            "status": "created",
            "transactionIds": [],
            "workspaceId": "5078376503050240",
            "taxAmount": 1000,
            "nominalInterest": 2.5,
            "interest": 2.71,
            "created": "2022-05-01T12:00:00.000000+00:00",
            "updated": "2022-05-01T12:00:00.000000+00:00"
        })
    }

    #[test]
    fn test_note_decodes_nested_signers() {
        let note = CreditNote::try_from(note_json()).unwrap();

        assert_eq!(note.status, Some(CreditNoteStatus::Created));
        assert_eq!(note.signers.len(), 1);
        assert_eq!(note.signers[0].method, "link");
        assert_eq!(note.nominal_interest, Some(2.5));
    }

    #[test]
    fn test_note_requires_scheduled() {
        let mut raw = note_json();
        raw.as_object_mut().unwrap().remove("scheduled");

        let result = CreditNote::try_from(raw);
        assert!(matches!(
            result,
            Err(ResourceError::MissingField { resource: "CreditNote", field }) if field == "scheduled"
        ));
    }

    #[test]
    fn test_note_api_json_omits_return_only_fields() {
        let note = CreditNote::try_from(note_json()).unwrap();
        let body = api_json(&note).unwrap();

        assert_eq!(body["taxId"], "20.018.183/0001-80");
        assert_eq!(body["signers"][0], json!({"name": "Jamie Lannister", "contact": "jamie.lannister@gmail.com", "method": "link"}));
        assert!(body.get("id").is_none());
        assert!(body.get("status").is_none());
        assert!(body.get("expiration").is_none());
    }

    #[test]
    fn test_list_params_to_query() {
        let params = CreditNoteListParams {
            before: Some("2022-06-01".into()),
            status: Some(CreditNoteStatus::Success),
            ids: Some(vec!["1".to_string(), "2".to_string()]),
            ..Default::default()
        };

        let query = params.to_query().unwrap();
        assert_eq!(query.get("before"), Some(&"2022-06-01".to_string()));
        assert_eq!(query.get("status"), Some(&"success".to_string()));
        assert_eq!(query.get("ids"), Some(&"1,2".to_string()));
    }
}
