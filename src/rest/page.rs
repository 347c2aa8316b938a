//! A single page of listed entities.

use std::ops::{Deref, DerefMut};

/// One page of entities plus the cursor to the next page.
///
/// `Page<T>` derefs to `Vec<T>`, so the entities can be iterated and
/// indexed directly.
///
/// # Example
///
/// ```rust
/// use stark_infra::rest::Page;
///
/// let page = Page::new(vec!["a", "b"], Some("cursor-2".to_string()));
/// assert_eq!(page.len(), 2);
/// assert!(page.has_next_page());
///
/// let (items, cursor) = page.into_parts();
/// assert_eq!(items, vec!["a", "b"]);
/// assert_eq!(cursor.as_deref(), Some("cursor-2"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    cursor: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page from its entities and the next cursor.
    #[must_use]
    pub const fn new(items: Vec<T>, cursor: Option<String>) -> Self {
        Self { items, cursor }
    }

    /// Returns the cursor to pass to the next page request, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Returns `true` if the server reported more entities.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.cursor.is_some()
    }

    /// Consumes the page, returning the entities.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Consumes the page, returning the entities and the cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.cursor)
    }
}

impl<T> Deref for Page<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Page<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// Verify Page is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Page<String>>();
};
