//! Conversion between the search route's query string and
//! [`FilterCriteria`].
//!
//! Genres and tags are repeated parameters, so this reads the raw query
//! rather than going through `serde_urlencoded`.

use url::form_urlencoded;

use crate::errors::BackendError;
use crate::game::AgeRating;
use crate::search::{FilterCriteria, RatingFilter};

const TERM: &str = "q";
const RATING: &str = "rating";
const GENRE: &str = "genre";
const TAG: &str = "tag";
const PAGE: &str = "page";

/// Rating values meaning "no restriction".
const ANY_RATING: [&str; 2] = ["all", "any"];

/// Parses a raw query string (without the leading `?`).
///
/// Besides the canonical names, `category` is read as a genre and `tags`
/// as a tag. Unknown parameters are ignored. When a single-valued
/// parameter repeats, the last occurrence wins.
pub fn parse_criteria(raw: &str) -> Result<FilterCriteria, BackendError> {
    let mut criteria = FilterCriteria::new();
    let mut page = 1;

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match &*key {
            TERM => criteria = criteria.with_term(&*value),
            RATING => criteria = criteria.with_rating(parse_rating(&value)?),
            GENRE | "category" => criteria = criteria.with_genre(value.trim()),
            TAG | "tags" => criteria = criteria.with_tag(value.trim()),
            PAGE => page = parse_page(&value)?,
            _ => {}
        }
    }

    Ok(criteria.with_page(page))
}

fn parse_rating(value: &str) -> Result<RatingFilter, BackendError> {
    let trimmed = value.trim();

    if trimmed.is_empty() || ANY_RATING.iter().any(|a| a.eq_ignore_ascii_case(trimmed)) {
        return Ok(RatingFilter::Any);
    }

    trimmed
        .parse::<AgeRating>()
        .map(RatingFilter::Only)
        .map_err(|_| BackendError::InvalidQuery {
            parameter: RATING,
            value: value.to_owned(),
        })
}

fn parse_page(value: &str) -> Result<usize, BackendError> {
    value.trim().parse().map_err(|_| BackendError::InvalidQuery {
        parameter: PAGE,
        value: value.to_owned(),
    })
}

/// Writes `criteria` back as a query string. Defaults are left out, so
/// unconstrained criteria on the first page give an empty string.
pub fn to_query_string(criteria: &FilterCriteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !criteria.term().is_empty() {
        serializer.append_pair(TERM, criteria.term());
    }

    if let RatingFilter::Only(rating) = criteria.rating() {
        serializer.append_pair(RATING, rating.label());
    }

    for genre in criteria.genres() {
        serializer.append_pair(GENRE, genre);
    }

    for tag in criteria.tags() {
        serializer.append_pair(TAG, tag);
    }

    if criteria.page() != 1 {
        serializer.append_pair(PAGE, &criteria.page().to_string());
    }

    serializer.finish()
}
