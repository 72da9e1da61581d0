use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed-size pages over an ordered list. Shared as application data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Items `[(page - 1) * size, page * size)`. Pages below 1 or past the
    /// end are empty rather than an error.
    pub fn paginate<T: Clone>(&self, page: i64, items: &[T]) -> Vec<T> {
        if page < 1 {
            return Vec::new();
        }

        let start = match usize::try_from(page - 1)
            .ok()
            .and_then(|p| p.checked_mul(self.page_size))
        {
            Some(start) if start < items.len() => start,
            _ => return Vec::new(),
        };
        let end = start.saturating_add(self.page_size).min(items.len());

        items[start..end].to_vec()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// `?page=N`. Anything that does not parse as an integer means page 1.
///
/// The query string is read as raw pairs so a repeated or unexpected key
/// never fails extraction; the first `page` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct PageQuery {
    page: Option<String>,
}

impl From<Vec<(String, String)>> for PageQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        }
    }
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}
