//! Generic REST operations shared by every entity.
//!
//! Each function issues exactly one request against the endpoint computed
//! from a [`ResourceDescriptor`] and decodes the response through its maker.
//! [`get_list`] is the exception: it returns a lazy [`Query`] that issues one
//! request per page as it is consumed.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::api::api_json;
use crate::rest::checks::{check_date, DateInput};
use crate::rest::{Page, Query, ResourceDescriptor, ResourceError};

/// Fetches a single entity by id.
///
/// Sends `GET {endpoint}/{id}` and decodes `body[last_name]`.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] on 404, [`ResourceError::Api`] on
/// other non-2xx statuses, or a decoding error from the maker.
pub async fn get_id<T>(
    client: &RestClient,
    descriptor: &ResourceDescriptor<T>,
    id: &str,
    query: Option<BTreeMap<String, String>>,
) -> Result<T, ResourceError> {
    let path = entity_path(descriptor, id);
    let response = client.get(&path, query.filter(|q| !q.is_empty())).await?;
    let body = ensure_ok(response, descriptor, Some(id))?;
    decode_single(descriptor, body)
}

/// Fetches exactly one page of entities.
///
/// `query` may carry `cursor` and `limit` alongside the entity's filters.
/// The returned cursor is `None` once the listing is exhausted.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] on non-2xx statuses, or a decoding error.
pub async fn get_page<T>(
    client: &RestClient,
    descriptor: &ResourceDescriptor<T>,
    query: BTreeMap<String, String>,
) -> Result<Page<T>, ResourceError> {
    let endpoint = descriptor.endpoint();
    let query = Some(query).filter(|q| !q.is_empty());
    let response = client.get(&endpoint, query).await?;
    let mut body = ensure_ok(response, descriptor, None)?;

    let cursor = body
        .get("cursor")
        .and_then(Value::as_str)
        .filter(|cursor| !cursor.is_empty())
        .map(ToString::to_string);
    let items = decode_list(descriptor, &mut body)?;

    tracing::debug!(
        "Fetched {} {} entities (more: {})",
        items.len(),
        descriptor.name(),
        cursor.is_some()
    );

    Ok(Page::new(items, cursor))
}

/// Returns a lazy listing over every entity matching `query`.
///
/// Nothing is sent until the returned [`Query`] is polled. `limit` caps the
/// total number of entities yielded; `None` lists everything.
#[must_use]
pub fn get_list<T>(
    client: &RestClient,
    descriptor: ResourceDescriptor<T>,
    query: BTreeMap<String, String>,
    limit: Option<usize>,
) -> Query<T> {
    Query::new(client.clone(), descriptor, query, limit)
}

/// Creates entities in a single request.
///
/// Sends `POST {endpoint}` with body `{last_name_plural: [api_json...]}` and
/// returns the created entities in server order.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the server rejects the entities, or a
/// decoding error.
pub async fn post<T: Serialize>(
    client: &RestClient,
    descriptor: &ResourceDescriptor<T>,
    entities: &[T],
    query: Option<BTreeMap<String, String>>,
) -> Result<Vec<T>, ResourceError> {
    let payload = entities
        .iter()
        .map(api_json)
        .collect::<Result<Vec<_>, _>>()?;

    let mut body = serde_json::Map::new();
    body.insert(descriptor.last_name_plural(), Value::Array(payload));

    let endpoint = descriptor.endpoint();
    let response = client
        .post(&endpoint, Value::Object(body), query.filter(|q| !q.is_empty()))
        .await?;
    let mut body = ensure_ok(response, descriptor, None)?;
    decode_list(descriptor, &mut body)
}

/// Partially updates an entity.
///
/// Sends `PATCH {endpoint}/{id}` with `payload` as the body and decodes the
/// updated entity.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] on 404, [`ResourceError::Api`] on
/// other non-2xx statuses, or a decoding error.
pub async fn patch_id<T>(
    client: &RestClient,
    descriptor: &ResourceDescriptor<T>,
    id: &str,
    payload: Value,
) -> Result<T, ResourceError> {
    let path = entity_path(descriptor, id);
    let response = client.patch(&path, payload, None).await?;
    let body = ensure_ok(response, descriptor, Some(id))?;
    decode_single(descriptor, body)
}

/// Deletes (cancels) an entity.
///
/// Returns the entity as it was immediately before deletion.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] on 404, [`ResourceError::Api`] on
/// other non-2xx statuses, or a decoding error.
pub async fn delete_id<T>(
    client: &RestClient,
    descriptor: &ResourceDescriptor<T>,
    id: &str,
) -> Result<T, ResourceError> {
    let path = entity_path(descriptor, id);
    let response = client.delete(&path, None).await?;
    let body = ensure_ok(response, descriptor, Some(id))?;
    decode_single(descriptor, body)
}

/// Serializes a params struct to a query parameter map.
///
/// `null` members are skipped and arrays are joined with `,`.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidFormat`] if `params` cannot be serialized.
pub fn serialize_to_query<P: Serialize>(
    params: &P,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidFormat {
        value: e.to_string(),
        expected: "serializable query parameters",
    })?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Builds a query map from filter params plus an `after`/`before` date range.
///
/// Dates are normalized to `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidFormat`] if a date cannot be parsed.
pub fn query_with_dates<P: Serialize>(
    params: &P,
    after: Option<&DateInput>,
    before: Option<&DateInput>,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let mut query = serialize_to_query(params)?;
    if let Some(after) = check_date(after.cloned())? {
        query.insert("after".to_string(), after.to_string());
    }
    if let Some(before) = check_date(before.cloned())? {
        query.insert("before".to_string(), before.to_string());
    }
    Ok(query)
}

/// Adds the single-page `limit` and `cursor` parameters to `query`.
#[must_use]
pub fn page_query(
    mut query: BTreeMap<String, String>,
    limit: Option<usize>,
    cursor: Option<&str>,
) -> BTreeMap<String, String> {
    if let Some(limit) = limit {
        query.insert("limit".to_string(), limit.to_string());
    }
    if let Some(cursor) = cursor {
        query.insert("cursor".to_string(), cursor.to_string());
    }
    query
}

fn entity_path<T>(descriptor: &ResourceDescriptor<T>, id: &str) -> String {
    format!("{}/{}", descriptor.endpoint(), urlencoding::encode(id))
}

fn ensure_ok<T>(
    response: HttpResponse,
    descriptor: &ResourceDescriptor<T>,
    id: Option<&str>,
) -> Result<Value, ResourceError> {
    if response.is_ok() {
        return Ok(response.body);
    }
    Err(ResourceError::from_http_response(
        response.code,
        &response.body,
        descriptor.name(),
        id,
        response.request_id(),
    ))
}

fn decode_single<T>(descriptor: &ResourceDescriptor<T>, mut body: Value) -> Result<T, ResourceError> {
    let key = descriptor.last_name();
    let record = body
        .get_mut(&key)
        .map(Value::take)
        .filter(|record| !record.is_null())
        .ok_or_else(|| ResourceError::MissingField {
            resource: descriptor.name(),
            field: key,
        })?;
    descriptor.make(record)
}

fn decode_list<T>(
    descriptor: &ResourceDescriptor<T>,
    body: &mut Value,
) -> Result<Vec<T>, ResourceError> {
    let key = descriptor.last_name_plural();
    match body.get_mut(&key).map(Value::take) {
        Some(Value::Array(records)) => records
            .into_iter()
            .map(|record| descriptor.make(record))
            .collect(),
        Some(Value::Null) | None => Err(ResourceError::MissingField {
            resource: descriptor.name(),
            field: key,
        }),
        Some(other) => Err(ResourceError::InvalidField {
            resource: descriptor.name(),
            field: key,
            message: format!("expected an array, found {other}"),
        }),
    }
}
