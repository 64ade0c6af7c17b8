use std::sync::Arc;

use log::Logger;

use crate::catalog::Catalog;
use crate::search::DEFAULT_PAGE_SIZE;

/// Everything a request handler needs, cheap to clone into each route.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub catalog: Arc<dyn Catalog + Send + Sync>,
    pub config: Config,
}

impl Environment {
    pub fn new(
        logger: Arc<Logger>,
        catalog: Arc<dyn Catalog + Send + Sync>,
        config: Config,
    ) -> Self {
        Self {
            logger,
            catalog,
            config,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) page_size: usize,
}

impl Config {
    /// Panics if `page_size` is zero.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");

        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_PAGE_SIZE)
    }
}
