//! Search and pagination over a record snapshot.
//!
//! Consumers always filter first and paginate the filtered result. Page
//! numbers are 1-based.

use crate::Employee;

/// Page size of the reference listing.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Records whose fields contain `term` case-insensitively, in input order.
/// A blank term matches everything.
pub fn filter<'a>(records: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = normalize_term(term);
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|employee| matches_term(employee, &needle))
        .collect()
}

/// Trimmed, lowercased search term.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

fn matches_term(employee: &Employee, needle: &str) -> bool {
    employee
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// The `page`-th slice of `page_size` items, clipped to the input. Pages
/// past the end, page `0`, and a zero page size all yield an empty slice.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// `ceil(len / page_size)`; zero when there is nothing to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Listing state that enforces the reset rules: the page returns to 1
/// whenever the search term or the collection size changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    term: String,
    page: usize,
    page_size: usize,
    last_len: Option<usize>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            term: String::new(),
            page: 1,
            page_size,
            last_len: None,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changing the term (after normalization) resets to page 1.
    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if normalize_term(&term) != normalize_term(&self.term) {
            self.page = 1;
        }
        self.term = term;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Call after a mutation; resets to page 1 if the size moved.
    pub fn collection_resized(&mut self, len: usize) {
        if self.last_len.is_some_and(|last| last != len) {
            self.page = 1;
        }
        self.last_len = Some(len);
    }

    /// Filter, then paginate.
    pub fn run<'a>(&mut self, records: &'a [Employee]) -> ListingPage<'a> {
        self.collection_resized(records.len());
        let matches = filter(records, &self.term);
        let items = paginate(&matches, self.page, self.page_size).to_vec();
        ListingPage {
            page: self.page,
            page_count: page_count(matches.len(), self.page_size),
            total_matches: matches.len(),
            items,
        }
    }
}

/// One rendered page of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingPage<'a> {
    pub page: usize,
    pub page_count: usize,
    pub total_matches: usize,
    pub items: Vec<&'a Employee>,
}

impl ListingPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}
