//! Filtering and pagination over a catalog snapshot.
//!
//! Everything here is pure: the same records and criteria always give
//! the same page, and results keep the order of the input.

use serde::Serialize;

use crate::game::{AgeRating, GameRecord};
use crate::normalization::{contains_folded, fold_case, normalize_term};

/// Number of games on a results page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Page windows with at most this many pages list every page.
const FULL_WINDOW_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RatingFilter {
    Any,
    Only(AgeRating),
}

impl RatingFilter {
    pub fn accepts(self, rating: AgeRating) -> bool {
        match self {
            RatingFilter::Any => true,
            RatingFilter::Only(wanted) => wanted == rating,
        }
    }
}

/// The user's current selection. Every filter change produces a new
/// value positioned on the first page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterCriteria {
    term: String,
    rating: RatingFilter,
    genres: Vec<String>,
    tags: Vec<String>,
    page: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            term: String::new(),
            rating: RatingFilter::Any,
            genres: vec![],
            tags: vec![],
            page: 1,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn rating(&self) -> RatingFilter {
        self.rating
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether no filter is set, regardless of page.
    pub fn is_unconstrained(&self) -> bool {
        self.term.is_empty()
            && self.rating == RatingFilter::Any
            && self.genres.is_empty()
            && self.tags.is_empty()
    }

    pub fn with_term(self, term: impl AsRef<str>) -> Self {
        FilterCriteria {
            term: normalize_term(term),
            ..self.first_page()
        }
    }

    pub fn with_rating(self, rating: RatingFilter) -> Self {
        FilterCriteria {
            rating,
            ..self.first_page()
        }
    }

    pub fn with_genre(self, genre: impl Into<String>) -> Self {
        let mut next = self.first_page();
        insert(&mut next.genres, &genre.into());
        next
    }

    pub fn without_genre(self, genre: &str) -> Self {
        let genre = genre.trim();
        let mut next = self.first_page();
        next.genres.retain(|g| g != genre);
        next
    }

    pub fn toggle_genre(self, genre: impl Into<String>) -> Self {
        let genre = genre.into();

        if self.genres.iter().any(|g| g == genre.trim()) {
            self.without_genre(&genre)
        } else {
            self.with_genre(genre)
        }
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        let mut next = self.first_page();
        insert(&mut next.tags, &tag.into());
        next
    }

    pub fn without_tag(self, tag: &str) -> Self {
        let tag = tag.trim();
        let mut next = self.first_page();
        next.tags.retain(|t| t != tag);
        next
    }

    pub fn toggle_tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();

        if self.tags.iter().any(|t| t == tag.trim()) {
            self.without_tag(&tag)
        } else {
            self.with_tag(tag)
        }
    }

    /// Moves to another page, keeping the filters.
    pub fn with_page(self, page: usize) -> Self {
        FilterCriteria { page, ..self }
    }

    fn first_page(self) -> Self {
        self.with_page(1)
    }

    /// Whether a single record passes every filter.
    pub fn matches(&self, record: &GameRecord) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Adds a trimmed facet value unless it's blank or already selected.
fn insert(set: &mut Vec<String>, value: &str) {
    let value = value.trim();

    if !value.is_empty() && !set.iter().any(|v| v == value) {
        set.push(value.to_owned());
    }
}

/// Criteria with the case-folded forms computed once per search.
struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    term: String,
    genres: Vec<String>,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Matcher {
            criteria,
            term: fold_case(&criteria.term),
            genres: criteria.genres.iter().map(fold_case).collect(),
        }
    }

    fn matches(&self, record: &GameRecord) -> bool {
        contains_folded(record.title(), &self.term)
            && self.criteria.rating.accepts(record.age_rating())
            && self.matches_genre(record)
            && self.matches_tags(record)
    }

    fn matches_genre(&self, record: &GameRecord) -> bool {
        if self.genres.is_empty() {
            return true;
        }

        match record.genre() {
            Some(genre) => {
                let genre = fold_case(genre);
                self.genres.iter().any(|g| *g == genre)
            }
            None => false,
        }
    }

    fn matches_tags(&self, record: &GameRecord) -> bool {
        self.criteria.tags.iter().all(|t| record.has_tag(t))
    }
}

/// Returns the records passing every filter, in input order. The page
/// number is ignored.
pub fn filter<'a>(records: &'a [GameRecord], criteria: &FilterCriteria) -> Vec<&'a GameRecord> {
    let matcher = Matcher::new(criteria);

    records.iter().filter(|r| matcher.matches(r)).collect()
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }

    count / page_size + usize::from(count % page_size != 0)
}

/// The 1-indexed `page` of `items`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// One entry in the pagination bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Builds the pagination bar: the first and last pages, the neighbours
/// of the current page, and an ellipsis for each gap.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    (1..=total)
        .filter_map(|number| {
            let distance = if number > current {
                number - current
            } else {
                current - number
            };

            if total <= FULL_WINDOW_LIMIT || number == 1 || number == total || distance <= 1 {
                Some(PageLink::Page {
                    number,
                    current: number == current,
                })
            } else if distance == 2 {
                Some(PageLink::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

/// One page of search results.
#[derive(Debug, Serialize)]
pub struct SearchPage<'a> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub games: Vec<&'a GameRecord>,
    pub pages: Vec<PageLink>,
}

impl<'a> SearchPage<'a> {
    pub fn previous_page(&self) -> Option<usize> {
        if self.page > 1 && self.page <= self.total_pages {
            Some(self.page - 1)
        } else {
            None
        }
    }

    pub fn next_page(&self) -> Option<usize> {
        if self.page >= 1 && self.page < self.total_pages {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

/// Filters `records` and cuts out the page the criteria point at.
pub fn search<'a>(
    records: &'a [GameRecord],
    criteria: &FilterCriteria,
    page_size: usize,
) -> SearchPage<'a> {
    let filtered = filter(records, criteria);
    let total = filtered.len();
    let total_pages = total_pages(total, page_size);
    let page = criteria.page();

    SearchPage {
        page,
        page_size,
        total,
        total_pages,
        games: paginate(&filtered, page, page_size).to_vec(),
        pages: page_window(page, total_pages),
    }
}
