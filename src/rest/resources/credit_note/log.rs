//! CreditNote log resource.
//!
//! Every change to a [`CreditNote`] produces a [`Log`]. Logs are created by
//! the API only; they can be retrieved, listed and paged.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::api::check_entity;
use crate::rest::checks::{check_datetime_param, check_param, check_required, DateInput, Params};
use crate::rest::{operations, Page, Query, Resource, ResourceError};

use super::CreditNote;

/// The event that produced a [`Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditNoteLogType {
    Canceled,
    Created,
    Expired,
    Failed,
    Refunded,
    Registered,
    Sending,
    Sent,
    Signed,
    Success,
}

/// A credit note event.
///
/// All fields are read-only.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Unique id of the log.
    pub id: String,

    /// The credit note as it was when the event happened.
    pub note: CreditNote,

    /// The event type.
    #[serde(rename = "type")]
    pub log_type: CreditNoteLogType,

    /// Errors linked to this event.
    pub errors: Vec<String>,

    /// Creation datetime.
    pub created: Option<DateTime<Utc>>,
}

impl Resource for Log {
    const NAME: &'static str = "CreditNoteLog";

    fn make(params: &mut Params) -> Result<Self, ResourceError> {
        Ok(Self {
            id: check_required(params, "id")?,
            note: check_entity(params, "note")?.ok_or_else(|| ResourceError::MissingField {
                resource: Self::NAME,
                field: "note".to_string(),
            })?,
            log_type: check_required(params, "type")?,
            errors: check_param(params, "errors")?.unwrap_or_default(),
            created: check_datetime_param(params, "created")?,
        })
    }
}

impl TryFrom<serde_json::Value> for Log {
    type Error = ResourceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        crate::rest::api::from_api_json(value)
    }
}

impl Log {
    /// Retrieves a log by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no log has this id.
    pub async fn get(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, &Self::descriptor(), id, None).await
    }

    /// Lazily lists logs matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] if `after` or `before` is not
    /// a valid date.
    pub fn query(client: &RestClient, params: LogListParams) -> Result<Query<Self>, ResourceError> {
        let query = params.to_query()?;
        Ok(operations::get_list(
            client,
            Self::descriptor(),
            query,
            params.limit,
        ))
    }

    /// Retrieves one page of logs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] for invalid dates, or
    /// [`ResourceError::Api`] if the API rejects the filters.
    pub async fn page(
        client: &RestClient,
        params: LogListParams,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        let query = operations::page_query(params.to_query()?, params.limit, cursor);
        operations::get_page(client, &Self::descriptor(), query).await
    }
}

/// Filters for listing credit note logs.
///
/// # Example
///
/// ```rust
/// use stark_infra::credit_note::{CreditNoteLogType, LogListParams};
///
/// let params = LogListParams {
///     limit: Some(10),
///     after: Some("2022-01-01".into()),
///     types: Some(vec![CreditNoteLogType::Created]),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogListParams {
    /// Maximum number of logs to retrieve.
    #[serde(skip)]
    pub limit: Option<usize>,

    /// Only logs created after this date.
    #[serde(skip)]
    pub after: Option<DateInput>,

    /// Only logs created before this date.
    #[serde(skip)]
    pub before: Option<DateInput>,

    /// Filter by event type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<CreditNoteLogType>>,

    /// Filter by credit note ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_ids: Option<Vec<String>>,
}

impl LogListParams {
    fn to_query(&self) -> Result<BTreeMap<String, String>, ResourceError> {
        operations::query_with_dates(self, self.after.as_ref(), self.before.as_ref())
    }
}
