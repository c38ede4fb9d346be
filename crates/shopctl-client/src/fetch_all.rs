//! Sequential `skip`/`limit` pagination over collection endpoints.
//!
//! Pages are awaited strictly one after another; there are no concurrent
//! page fetches and no retries. The loop stops when a page comes back short,
//! when the envelope reports `has_next: false`, when the item cap is
//! reached, or when a page request fails; what happens on failure is an
//! explicit policy rather than silent truncation.

use std::future::Future;

use crate::envelope::Page;
use crate::error::ApiError;

pub const DEFAULT_PAGE_SIZE: u32 = 500;

const DEFAULT_ITEM_CAP: usize = 5_000;

/// What to do when a page request fails mid-collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageErrorPolicy {
    /// End the loop and report the accumulated partial result, marking it
    /// as truncated. This matches the behavior admin views historically
    /// relied on and is the default.
    Truncate,
    /// Propagate the page error and discard the partial result.
    Fail,
}

#[derive(Debug, Clone)]
pub struct FetchAllOptions {
    pub page_size: u32,
    /// Safety cap on the total number of items fetched, bounding memory and
    /// request count against a misbehaving endpoint.
    pub max_items: usize,
    pub on_page_error: PageErrorPolicy,
}

impl Default for FetchAllOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_items: DEFAULT_ITEM_CAP,
            on_page_error: PageErrorPolicy::Truncate,
        }
    }
}

impl FetchAllOptions {
    /// Default options with a call-site-specific item cap.
    #[must_use]
    pub fn with_cap(max_items: usize) -> Self {
        Self {
            max_items,
            ..Self::default()
        }
    }
}

/// Why a collection came back incomplete.
#[derive(Debug)]
pub enum Truncation {
    ItemCap { max_items: usize },
    PageError(ApiError),
}

impl std::fmt::Display for Truncation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Truncation::ItemCap { max_items } => write!(f, "item cap of {max_items} reached"),
            Truncation::PageError(err) => write!(f, "page fetch failed: {err}"),
        }
    }
}

/// All pages of a collection, with an explicit marker when the result is
/// known to be partial.
#[derive(Debug)]
pub struct Collected<T> {
    pub items: Vec<T>,
    pub truncation: Option<Truncation>,
}

impl<T> Collected<T> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }
}

/// Drives `fetch_page(skip, limit)` until the collection is exhausted, the
/// item cap is hit, or a page fails.
///
/// # Errors
///
/// Returns the page error only under [`PageErrorPolicy::Fail`]; under
/// [`PageErrorPolicy::Truncate`] a failed page ends the loop and the error
/// is reported through [`Collected::truncation`].
pub(crate) async fn fetch_all_pages<T, F, Fut>(
    resource: &'static str,
    options: &FetchAllOptions,
    mut fetch_page: F,
) -> Result<Collected<T>, ApiError>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let page_size = options.page_size.max(1);
    let mut items: Vec<T> = Vec::new();

    loop {
        if items.len() >= options.max_items {
            tracing::warn!(
                resource,
                max_items = options.max_items,
                "item cap reached, result truncated"
            );
            return Ok(Collected {
                items,
                truncation: Some(Truncation::ItemCap {
                    max_items: options.max_items,
                }),
            });
        }

        let skip = u32::try_from(items.len()).unwrap_or(u32::MAX);
        let page = match fetch_page(skip, page_size).await {
            Ok(page) => page,
            Err(err) => match options.on_page_error {
                PageErrorPolicy::Fail => return Err(err),
                PageErrorPolicy::Truncate => {
                    tracing::warn!(
                        resource,
                        skip,
                        error = %err,
                        "page fetch failed, returning partial result"
                    );
                    return Ok(Collected {
                        items,
                        truncation: Some(Truncation::PageError(err)),
                    });
                }
            },
        };

        let count = page.items.len();
        items.extend(page.items);
        tracing::debug!(resource, skip, count, total = items.len(), "fetched page");

        let has_next = page.meta.as_ref().and_then(|meta| meta.has_next);
        if count < page_size as usize || has_next == Some(false) {
            return Ok(Collected {
                items,
                truncation: None,
            });
        }
    }
}
