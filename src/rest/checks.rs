//! Parameter validation and extraction.
//!
//! Entity makers consume a decoded JSON record key by key through a
//! [`Params`] map. Every extracted key is removed; whatever remains once the
//! maker is done is reported by [`check_params`] as unknown.
//!
//! # Example
//!
//! ```rust
//! use stark_infra::rest::checks::{check_param, check_params, check_required, Params};
//! use serde_json::json;
//!
//! let mut params = Params::new("IssuingRule", json!({"name": "General", "amount": 100}))?;
//!
//! let name: String = check_required(&mut params, "name")?;
//! let amount: Option<i64> = check_param(&mut params, "amount")?;
//! check_params(params)?;
//!
//! assert_eq!(name, "General");
//! assert_eq!(amount, Some(100));
//! # Ok::<(), stark_infra::rest::ResourceError>(())
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::rest::ResourceError;

const DATETIME_EXPECTED: &str = "a date (YYYY-MM-DD) or datetime (ISO 8601)";

/// A mutable view over a JSON object being decoded into an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    resource: &'static str,
    map: Map<String, Value>,
}

impl Params {
    /// Wraps a raw record for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFormat`] if `value` is not a JSON object.
    pub fn new(resource: &'static str, value: Value) -> Result<Self, ResourceError> {
        match value {
            Value::Object(map) => Ok(Self { resource, map }),
            other => Err(ResourceError::InvalidFormat {
                value: other.to_string(),
                expected: "a JSON object",
            }),
        }
    }

    /// Returns the entity name these parameters are decoded for.
    #[must_use]
    pub const fn resource(&self) -> &'static str {
        self.resource
    }

    /// Returns `true` once every key has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the keys not yet consumed, sorted.
    #[must_use]
    pub fn remaining_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.map.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key).filter(|value| !value.is_null())
    }
}

/// Input accepted wherever the API expects a date or timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date.
    Date(NaiveDate),
    /// An instant in UTC.
    DateTime(DateTime<Utc>),
    /// An ISO 8601 string, parsed on use.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Removes `key` from `params` and decodes it as `T`.
///
/// Absent and `null` values yield `None`.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidField`] if the value cannot be decoded as `T`.
pub fn check_param<T: DeserializeOwned>(
    params: &mut Params,
    key: &str,
) -> Result<Option<T>, ResourceError> {
    params
        .take(key)
        .map(|value| {
            serde_json::from_value(value).map_err(|e| ResourceError::InvalidField {
                resource: params.resource,
                field: key.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

/// Like [`check_param`], but the key must be present.
///
/// # Errors
///
/// Returns [`ResourceError::MissingField`] if the key is absent or `null`.
pub fn check_required<T: DeserializeOwned>(
    params: &mut Params,
    key: &str,
) -> Result<T, ResourceError> {
    check_param(params, key)?.ok_or_else(|| ResourceError::MissingField {
        resource: params.resource,
        field: key.to_string(),
    })
}

/// Removes `key` from `params` and parses it as a timestamp.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidField`] if the value is not a string, or
/// [`ResourceError::InvalidFormat`] if it is not a recognizable timestamp.
pub fn check_datetime_param(
    params: &mut Params,
    key: &str,
) -> Result<Option<DateTime<Utc>>, ResourceError> {
    let text: Option<String> = check_param(params, key)?;
    check_datetime(text.map(DateInput::Text))
}

/// Normalizes a date-like value to a UTC timestamp.
///
/// Dates map to midnight UTC. Strings are accepted as `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM:SS[.fff]` or RFC 3339.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidFormat`] for unparseable strings.
///
/// # Example
///
/// ```rust
/// use stark_infra::rest::checks::{check_datetime, DateInput};
///
/// let parsed = check_datetime(Some(DateInput::from("2020-04-03T17:13:32.162948+00:00")))?;
/// assert_eq!(parsed.unwrap().to_rfc3339(), "2020-04-03T17:13:32.162948+00:00");
/// assert_eq!(check_datetime(None)?, None);
/// # Ok::<(), stark_infra::rest::ResourceError>(())
/// ```
pub fn check_datetime(value: Option<DateInput>) -> Result<Option<DateTime<Utc>>, ResourceError> {
    value
        .map(|input| match input {
            DateInput::DateTime(datetime) => Ok(datetime),
            DateInput::Date(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
            DateInput::Text(text) => parse_datetime(&text),
        })
        .transpose()
}

/// Normalizes a date-like value to a calendar date.
///
/// Strings with an offset keep the calendar date written in that offset;
/// native timestamps keep their UTC date. The result renders as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidFormat`] for unparseable strings.
pub fn check_date(value: Option<DateInput>) -> Result<Option<NaiveDate>, ResourceError> {
    value
        .map(|input| match input {
            DateInput::Date(date) => Ok(date),
            DateInput::DateTime(datetime) => Ok(datetime.date_naive()),
            DateInput::Text(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                .or_else(|_| DateTime::parse_from_rfc3339(&text).map(|dt| dt.date_naive()))
                .or_else(|_| parse_datetime(&text).map(|datetime| datetime.date_naive())),
        })
        .transpose()
}

/// Ensures every key of `params` was consumed.
///
/// # Errors
///
/// Returns [`ResourceError::UnknownParameters`] listing the leftover keys.
pub fn check_params(params: Params) -> Result<(), ResourceError> {
    if params.is_empty() {
        return Ok(());
    }
    Err(ResourceError::UnknownParameters {
        resource: params.resource,
        keys: params.remaining_keys(),
    })
}

fn parse_datetime(text: &str) -> Result<DateTime<Utc>, ResourceError> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(datetime.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ResourceError::InvalidFormat {
        value: text.to_string(),
        expected: DATETIME_EXPECTED,
    })
}
