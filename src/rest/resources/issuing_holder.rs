//! IssuingHolder resource implementation.
//!
//! This module provides the [`IssuingHolder`] resource: the people or
//! companies cards are issued to in a workspace.
//!
//! # Operations
//!
//! - [`IssuingHolder::create`] - Create holders in a single request
//! - [`IssuingHolder::get`] - Retrieve a holder by id
//! - [`IssuingHolder::query`] - Lazily list holders, following cursors
//! - [`IssuingHolder::page`] - Retrieve one page of holders
//! - [`IssuingHolder::update`] - Change status, name, tags or rules
//! - [`IssuingHolder::delete`] - Cancel a holder
//!
//! # Example
//!
//! ```rust,ignore
//! use stark_infra::{IssuingHolder, IssuingHolderUpdateParams, IssuingHolderStatus};
//!
//! let holders = IssuingHolder::create(
//!     &client,
//!     &[IssuingHolder {
//!         name: "Tony Stark".to_string(),
//!         tax_id: "012.345.678-90".to_string(),
//!         external_id: "my-entity/123".to_string(),
//!         ..Default::default()
//!     }],
//!     &[],
//! )
//! .await?;
//!
//! let blocked = IssuingHolder::update(
//!     &client,
//!     holders[0].id.as_deref().unwrap(),
//!     IssuingHolderUpdateParams {
//!         status: Some(IssuingHolderStatus::Blocked),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::api::{api_json, check_entities};
use crate::rest::checks::{check_datetime_param, check_param, check_required, DateInput, Params};
use crate::rest::{operations, Page, Query, Resource, ResourceError};

use super::IssuingRule;

/// The lifecycle status of an [`IssuingHolder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuingHolderStatus {
    /// Cards can be issued and used.
    Active,
    /// Temporarily blocked; may be reactivated.
    Blocked,
    /// Permanently canceled.
    Canceled,
}

impl IssuingHolderStatus {
    /// Returns the status as sent to the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for IssuingHolderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card holder registered in the workspace.
///
/// # Read-Only Fields
///
/// The following fields are read-only and will not be sent in create requests:
/// - `id`, `status`, `created`, `updated`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolder {
    /// Unique id returned when the holder is created.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// Holder name. ex: "Tony Stark"
    pub name: String,

    /// Holder tax ID. ex: "012.345.678-90"
    pub tax_id: String,

    /// Caller-generated unique id, used to avoid duplicate holders.
    pub external_id: String,

    /// Spending rules. Only returned when `rules` is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IssuingRule>>,

    /// Tags for filtering. ex: ["travel", "food"]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Current status.
    #[serde(skip_serializing)]
    pub status: Option<IssuingHolderStatus>,

    /// Creation datetime.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// Latest update datetime.
    #[serde(skip_serializing)]
    pub updated: Option<DateTime<Utc>>,
}

impl Resource for IssuingHolder {
    const NAME: &'static str = "IssuingHolder";

    fn make(params: &mut Params) -> Result<Self, ResourceError> {
        Ok(Self {
            id: check_param(params, "id")?,
            name: check_required(params, "name")?,
            tax_id: check_required(params, "taxId")?,
            external_id: check_required(params, "externalId")?,
            rules: check_entities(params, "rules")?,
            tags: check_param(params, "tags")?,
            status: check_param(params, "status")?,
            created: check_datetime_param(params, "created")?,
            updated: check_datetime_param(params, "updated")?,
        })
    }
}

impl TryFrom<serde_json::Value> for IssuingHolder {
    type Error = ResourceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        crate::rest::api::from_api_json(value)
    }
}

impl IssuingHolder {
    /// Creates holders in a single request.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `holders` - The holders to create
    /// * `expand` - Fields to expand in the response (e.g., `&["rules"]`)
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the API rejects any holder.
    pub async fn create(
        client: &RestClient,
        holders: &[Self],
        expand: &[&str],
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post(client, &Self::descriptor(), holders, expand_query(expand)).await
    }

    /// Retrieves a holder by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no holder has this id.
    pub async fn get(client: &RestClient, id: &str, expand: &[&str]) -> Result<Self, ResourceError> {
        operations::get_id(client, &Self::descriptor(), id, expand_query(expand)).await
    }

    /// Lazily lists holders matching `params`.
    ///
    /// `params.limit` caps the total number of holders yielded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] if `after` or `before` is not
    /// a valid date. Request errors surface while iterating.
    pub fn query(
        client: &RestClient,
        params: IssuingHolderListParams,
    ) -> Result<Query<Self>, ResourceError> {
        let query = params.to_query()?;
        Ok(operations::get_list(
            client,
            Self::descriptor(),
            query,
            params.limit,
        ))
    }

    /// Retrieves one page of holders.
    ///
    /// Pass the cursor of the previous page to continue the listing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] for invalid dates, or
    /// [`ResourceError::Api`] if the API rejects the filters.
    pub async fn page(
        client: &RestClient,
        params: IssuingHolderListParams,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        let query = operations::page_query(params.to_query()?, params.limit, cursor);
        operations::get_page(client, &Self::descriptor(), query).await
    }

    /// Updates a holder.
    ///
    /// Only the fields set in `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no holder has this id.
    pub async fn update(
        client: &RestClient,
        id: &str,
        params: IssuingHolderUpdateParams,
    ) -> Result<Self, ResourceError> {
        let payload = api_json(&params)?;
        operations::patch_id(client, &Self::descriptor(), id, payload).await
    }

    /// Cancels a holder, returning it as it was before cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no holder has this id.
    pub async fn delete(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, &Self::descriptor(), id).await
    }
}

fn expand_query(expand: &[&str]) -> Option<BTreeMap<String, String>> {
    (!expand.is_empty()).then(|| BTreeMap::from([("expand".to_string(), expand.join(","))]))
}

/// Filters for listing holders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolderListParams {
    /// Maximum number of holders to retrieve.
    #[serde(skip)]
    pub limit: Option<usize>,

    /// Only holders created after this date.
    #[serde(skip)]
    pub after: Option<DateInput>,

    /// Only holders created before this date.
    #[serde(skip)]
    pub before: Option<DateInput>,

    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssuingHolderStatus>,

    /// Filter by tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Filter by ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Fields to expand. ex: ["rules"]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,
}

impl IssuingHolderListParams {
    fn to_query(&self) -> Result<BTreeMap<String, String>, ResourceError> {
        operations::query_with_dates(self, self.after.as_ref(), self.before.as_ref())
    }
}

/// Changes applied by [`IssuingHolder::update`].
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolderUpdateParams {
    /// New status. Pass `Blocked` to block the holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IssuingHolderStatus>,

    /// New holder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Replacement tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Replacement spending rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IssuingRule>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::IssuingRuleInterval;
    use chrono::NaiveDate;
    use serde_json::json;

    fn holder_json() -> serde_json::Value {
        json!({
            "id": "5155165527080960",
            "name": "Tony Stark",
            "taxId": "012.345.678-90",
            "externalId": "my-entity/123",
            "tags": ["iron", "suit"],
            "status": "active",
            "rules": [{
                "id": "6155165527080960",
                "name": "General",
                "amount": 100000,
                "interval": "day",
                "currencyCode": "BRL"
            }],
            "created": "2022-05-02T17:13:32.162948+00:00",
            "updated": "2022-05-02T17:13:32.162948+00:00"
        })
    }

    #[test]
    fn test_holder_decodes_all_fields() {
        let holder = IssuingHolder::try_from(holder_json()).unwrap();

        assert_eq!(holder.id.as_deref(), Some("5155165527080960"));
        assert_eq!(holder.tax_id, "012.345.678-90");
        assert_eq!(holder.status, Some(IssuingHolderStatus::Active));
        let rules = holder.rules.unwrap();
        assert_eq!(rules[0].interval, Some(IssuingRuleInterval::Day));
        assert_eq!(
            holder.created.unwrap().date_naive(),
            NaiveDate::from_ymd_opt(2022, 5, 2).unwrap()
        );
    }

    #[test]
    fn test_holder_decode_is_idempotent() {
        assert_eq!(
            IssuingHolder::try_from(holder_json()).unwrap(),
            IssuingHolder::try_from(holder_json()).unwrap()
        );
    }

    #[test]
    fn test_holder_requires_tax_id() {
        let result = IssuingHolder::try_from(json!({
            "name": "Tony Stark",
            "externalId": "my-entity/123"
        }));
        assert!(matches!(
            result,
            Err(ResourceError::MissingField { resource: "IssuingHolder", field }) if field == "taxId"
        ));
    }

    #[test]
    fn test_holder_rejects_unknown_keys() {
        let mut raw = holder_json();
        raw["armor"] = json!("mark-42");

        let result = IssuingHolder::try_from(raw);
        assert!(matches!(
            result,
            Err(ResourceError::UnknownParameters { keys, .. }) if keys == vec!["armor"]
        ));
    }

    #[test]
    fn test_holder_api_json_sends_inputs_only() {
        let holder = IssuingHolder::try_from(holder_json()).unwrap();

        let body = api_json(&holder).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Tony Stark",
                "taxId": "012.345.678-90",
                "externalId": "my-entity/123",
                "tags": ["iron", "suit"],
                "rules": [{"id": "6155165527080960", "name": "General", "amount": 100000, "interval": "day", "currencyCode": "BRL"}]
            })
        );
    }

    #[test]
    fn test_list_params_to_query() {
        let params = IssuingHolderListParams {
            limit: Some(10),
            after: Some("2022-01-01".into()),
            status: Some(IssuingHolderStatus::Blocked),
            tags: Some(vec!["iron".to_string(), "suit".to_string()]),
            expand: Some(vec!["rules".to_string()]),
            ..Default::default()
        };

        let query = params.to_query().unwrap();

        assert_eq!(query.get("after"), Some(&"2022-01-01".to_string()));
        assert_eq!(query.get("status"), Some(&"blocked".to_string()));
        assert_eq!(query.get("tags"), Some(&"iron,suit".to_string()));
        assert_eq!(query.get("expand"), Some(&"rules".to_string()));
        assert!(!query.contains_key("limit"));
        assert!(!query.contains_key("before"));
    }

    #[test]
    fn test_update_params_serialize_only_set_fields() {
        let params = IssuingHolderUpdateParams {
            status: Some(IssuingHolderStatus::Blocked),
            ..Default::default()
        };
        assert_eq!(api_json(&params).unwrap(), json!({"status": "blocked"}));
    }

    #[test]
    fn test_expand_query() {
        assert!(expand_query(&[]).is_none());
        assert_eq!(
            expand_query(&["rules", "cards"]).unwrap().get("expand"),
            Some(&"rules,cards".to_string())
        );
    }
}
