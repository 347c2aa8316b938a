//! Lazy, cursor-following listings.

use std::collections::{BTreeMap, VecDeque};

use futures::stream::{self, Stream};

use crate::clients::RestClient;
use crate::rest::{operations, ResourceDescriptor, ResourceError};

/// Largest page the API serves.
pub const MAX_PAGE_SIZE: usize = 100;

/// A lazy listing of entities.
///
/// Each call to [`Query::next`] yields one entity, fetching the next page
/// only when the buffered one is exhausted. The listing ends when the server
/// stops returning a cursor, when the optional total `limit` is reached, or
/// after the first error. Dropping a `Query` leaves no request in flight.
///
/// # Example
///
/// ```rust,ignore
/// use stark_infra::credit_note::{Log, LogListParams};
///
/// let mut logs = Log::query(&client, LogListParams { limit: Some(10), ..Default::default() })?;
/// while let Some(log) = logs.next().await {
///     println!("{}", log?.id);
/// }
/// ```
#[derive(Debug)]
pub struct Query<T> {
    client: RestClient,
    descriptor: ResourceDescriptor<T>,
    params: BTreeMap<String, String>,
    limit: Option<usize>,
    buffer: VecDeque<T>,
    cursor: Option<String>,
    yielded: usize,
    done: bool,
}

impl<T> Query<T> {
    pub(crate) fn new(
        client: RestClient,
        descriptor: ResourceDescriptor<T>,
        params: BTreeMap<String, String>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            client,
            descriptor,
            params,
            limit,
            buffer: VecDeque::new(),
            cursor: None,
            yielded: 0,
            done: false,
        }
    }

    /// Returns the next entity, fetching a page if needed.
    ///
    /// Returns `None` once the listing is exhausted. An error ends the
    /// listing; later calls return `None`.
    pub async fn next(&mut self) -> Option<Result<T, ResourceError>> {
        loop {
            if self.limit.is_some_and(|limit| self.yielded >= limit) {
                self.done = true;
                self.buffer.clear();
                return None;
            }
            if let Some(item) = self.buffer.pop_front() {
                self.yielded += 1;
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            if let Err(error) = self.fetch_page().await {
                self.done = true;
                return Some(Err(error));
            }
        }
    }

    /// Rewinds the listing to the first page.
    ///
    /// Buffered entities are discarded; the next pull re-issues the first
    /// request.
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.cursor = None;
        self.yielded = 0;
        self.done = false;
    }

    /// Drains the listing into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn try_collect(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Adapts the listing into a [`futures::Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<T, ResourceError>> {
        stream::unfold(self, |mut query| async move {
            query.next().await.map(|item| (item, query))
        })
    }

    async fn fetch_page(&mut self) -> Result<(), ResourceError> {
        let page_size = self.limit.map_or(MAX_PAGE_SIZE, |limit| {
            (limit - self.yielded).min(MAX_PAGE_SIZE)
        });

        let mut params = self.params.clone();
        params.insert("limit".to_string(), page_size.to_string());
        if let Some(cursor) = &self.cursor {
            params.insert("cursor".to_string(), cursor.clone());
        }

        let page = operations::get_page(&self.client, &self.descriptor, params).await?;
        let (items, cursor) = page.into_parts();

        self.done = cursor.is_none();
        self.cursor = cursor;
        self.buffer.extend(items);
        Ok(())
    }
}
