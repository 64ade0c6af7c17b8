use std::env;

use crate::search::DEFAULT_PAGE_SIZE;

/// Returns the value of the named environment variable if it exists or panics.
pub fn get_variable(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("must define {} environment variable", name))
}

/// Returns the value of the named environment variable, if set and not blank.
pub fn get_optional_variable(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Reads a port number from the named variable or panics.
pub fn get_port(name: &str) -> u16 {
    get_variable(name)
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("parse {} as u16", name))
}

/// Interprets the configured page size, falling back to the default when
/// unset. Returns `None` for anything that isn't a positive integer.
pub fn parse_page_size(value: Option<String>) -> Option<usize> {
    match value {
        None => Some(DEFAULT_PAGE_SIZE),
        Some(v) => v.trim().parse().ok().filter(|&n: &usize| n > 0),
    }
}
