//! IssuingRule resource implementation.
//!
//! Issuing rules are spending limits attached to an
//! [`IssuingHolder`](super::IssuingHolder). They have no endpoint of their
//! own: they are sent and returned nested inside their holder.

use serde::{Deserialize, Serialize};

use crate::rest::checks::{check_param, check_required, Params};
use crate::rest::{Resource, ResourceError};

/// The period over which an [`IssuingRule`] amount is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuingRuleInterval {
    /// Limit applies per calendar day.
    Day,
    /// Limit applies per week.
    Week,
    /// Limit applies per calendar month.
    Month,
    /// Limit applies to each purchase.
    Instant,
}

/// A spending rule for an issuing holder.
///
/// # Read-Only Fields
///
/// - `counter_amount`, `currency_name`, `currency_symbol`
///
/// `id` is sent when set, so a holder update can refer to existing rules.
///
/// # Example
///
/// ```rust
/// use stark_infra::{IssuingRule, IssuingRuleInterval};
///
/// let rule = IssuingRule {
///     name: "General USD".to_string(),
///     amount: 100_000,
///     interval: Some(IssuingRuleInterval::Day),
///     currency_code: Some("USD".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingRule {
    /// Unique id returned when the rule is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Rule name. ex: "Travel"
    pub name: String,

    /// Maximum amount that can be spent in the interval, in cents.
    pub amount: i64,

    /// Interval after which the rule amount counter is reset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<IssuingRuleInterval>,

    /// ISO 4217 currency code. ex: "BRL"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Amount already spent in the current interval.
    #[serde(skip_serializing)]
    pub counter_amount: Option<i64>,

    /// Currency name. ex: "Brazilian Real"
    #[serde(skip_serializing)]
    pub currency_name: Option<String>,

    /// Currency symbol. ex: "R$"
    #[serde(skip_serializing)]
    pub currency_symbol: Option<String>,
}

impl Resource for IssuingRule {
    const NAME: &'static str = "IssuingRule";

    fn make(params: &mut Params) -> Result<Self, ResourceError> {
        Ok(Self {
            id: check_param(params, "id")?,
            name: check_required(params, "name")?,
            amount: check_required(params, "amount")?,
            interval: check_param(params, "interval")?,
            currency_code: check_param(params, "currencyCode")?,
            counter_amount: check_param(params, "counterAmount")?,
            currency_name: check_param(params, "currencyName")?,
            currency_symbol: check_param(params, "currencySymbol")?,
        })
    }
}

impl TryFrom<serde_json::Value> for IssuingRule {
    type Error = ResourceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        crate::rest::api::from_api_json(value)
    }
}
