//! Mapping between entity names, endpoints and API JSON.
//!
//! Every entity is addressed by its resource name (e.g. `"IssuingHolder"`).
//! The endpoint path and the JSON keys wrapping request and response bodies
//! are all derived from that name:
//!
//! | Name | [`endpoint`] | [`last_name`] | [`last_name_plural`] |
//! |------|--------------|---------------|----------------------|
//! | `IssuingHolder` | `issuing-holder` | `issuingHolder` | `issuingHolders` |
//! | `CreditNoteLog` | `credit-note/log` | `log` | `logs` |

use serde::Serialize;
use serde_json::Value;

use crate::rest::checks::{check_param, check_params, Params};
use crate::rest::{Resource, ResourceError};

/// Returns the endpoint path for a resource name.
///
/// # Example
///
/// ```rust
/// use stark_infra::rest::api::endpoint;
///
/// assert_eq!(endpoint("IssuingHolder"), "issuing-holder");
/// assert_eq!(endpoint("CreditNoteLog"), "credit-note/log");
/// ```
#[must_use]
pub fn endpoint(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for ch in name.chars() {
        match words.last_mut() {
            Some(word) if !ch.is_uppercase() => word.push(ch),
            _ => words.push(ch.to_lowercase().collect()),
        }
    }

    let mut path = String::with_capacity(name.len() + 4);
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            path.push(if matches!(word.as_str(), "log" | "attempt") { '/' } else { '-' });
        }
        path.push_str(word);
    }
    path
}

/// Returns the JSON key wrapping a single entity of this resource.
#[must_use]
pub fn last_name(name: &str) -> String {
    let endpoint = endpoint(name);
    let last_segment = endpoint.rsplit('/').next().unwrap_or_default();

    let mut camel = String::with_capacity(last_segment.len());
    let mut upper_next = false;
    for ch in last_segment.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            camel.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            camel.push(ch);
        }
    }
    camel
}

/// Returns the JSON key wrapping a list of entities of this resource.
#[must_use]
pub fn last_name_plural(name: &str) -> String {
    let base = last_name(name);
    if base.ends_with('s') {
        base
    } else if let Some(stem) = base.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{base}s")
    }
}

/// Decodes a raw record into an entity through its maker.
///
/// The record must be a JSON object; every key must be consumed by the maker.
///
/// # Errors
///
/// Returns the maker's error, or [`ResourceError::UnknownParameters`] if
/// the record carries keys the entity does not declare.
pub fn from_api_json<T: Resource>(raw: Value) -> Result<T, ResourceError> {
    let mut params = Params::new(T::NAME, raw)?;
    let entity = T::make(&mut params)?;
    check_params(params)?;
    Ok(entity)
}

/// Removes `key` from `params` and decodes it as a nested entity.
///
/// # Errors
///
/// Returns any error raised by the nested entity's maker.
pub fn check_entity<T: Resource>(
    params: &mut Params,
    key: &str,
) -> Result<Option<T>, ResourceError> {
    check_param::<Value>(params, key)?
        .map(from_api_json::<T>)
        .transpose()
}

/// Removes `key` from `params` and decodes it as a list of nested entities.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidField`] if the value is not an array, or
/// any error raised by the nested entity's maker.
pub fn check_entities<T: Resource>(
    params: &mut Params,
    key: &str,
) -> Result<Option<Vec<T>>, ResourceError> {
    check_param::<Vec<Value>>(params, key)?
        .map(|records| records.into_iter().map(from_api_json::<T>).collect())
        .transpose()
}

/// Serializes an entity to API JSON.
///
/// Keys follow the entity's serde renames (camelCase); `null` members are
/// dropped at every depth.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidFormat`] if serialization fails.
pub fn api_json<T: Serialize>(entity: &T) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(entity).map_err(|e| ResourceError::InvalidFormat {
        value: e.to_string(),
        expected: "a JSON-serializable value",
    })?;
    Ok(drop_nulls(value))
}

fn drop_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(key, member)| (key, drop_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(drop_nulls).collect()),
        other => other,
    }
}
