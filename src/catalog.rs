use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::errors::BackendError;
use crate::game::{GameDetails, GameRecord};
use crate::guide::{Faq, Guide};

pub(crate) mod sample;

/// Number of games shown as "New & Noteworthy".
pub const FEATURED_COUNT: usize = 3;

/// Read-only access to the games, guides and FAQs the site shows.
pub trait Catalog: Send + Sync {
    /// Every game, in display order.
    fn games(&self) -> BoxFuture<'_, Result<Vec<GameRecord>, BackendError>>;

    /// The games highlighted on the homepage.
    fn featured(&self) -> BoxFuture<'_, Result<Vec<GameRecord>, BackendError>>;

    /// Full details of the game with the given slug, if known.
    fn game(&self, id: &str) -> BoxFuture<'_, Result<Option<GameDetails>, BackendError>>;

    fn guides(&self) -> BoxFuture<'_, Result<Vec<Guide>, BackendError>>;

    fn guide(&self, id: &str) -> BoxFuture<'_, Result<Option<Guide>, BackendError>>;

    fn faqs(&self) -> BoxFuture<'_, Result<Vec<Faq>, BackendError>>;
}

/// A catalog held entirely in memory.
#[derive(Clone)]
pub struct StaticCatalog {
    games: Arc<Vec<GameRecord>>,
    details: Arc<HashMap<String, GameDetails>>,
    guides: Arc<Vec<Guide>>,
    faqs: Arc<Vec<Faq>>,
}

impl StaticCatalog {
    pub fn new(
        games: Vec<GameRecord>,
        details: Vec<GameDetails>,
        guides: Vec<Guide>,
        faqs: Vec<Faq>,
    ) -> Self {
        let details = details
            .into_iter()
            .map(|d| (d.id().to_owned(), d))
            .collect();

        StaticCatalog {
            games: Arc::new(games),
            details: Arc::new(details),
            guides: Arc::new(guides),
            faqs: Arc::new(faqs),
        }
    }

    /// The catalog compiled into the binary.
    pub fn sample() -> Self {
        StaticCatalog::new(
            sample::games(),
            sample::details(),
            sample::guides(),
            sample::faqs(),
        )
    }
}

impl Catalog for StaticCatalog {
    fn games(&self) -> BoxFuture<'_, Result<Vec<GameRecord>, BackendError>> {
        let games = self.games.to_vec();

        async move { Ok(games) }.boxed()
    }

    fn featured(&self) -> BoxFuture<'_, Result<Vec<GameRecord>, BackendError>> {
        let featured = self.games.iter().take(FEATURED_COUNT).cloned().collect();

        async move { Ok(featured) }.boxed()
    }

    fn game(&self, id: &str) -> BoxFuture<'_, Result<Option<GameDetails>, BackendError>> {
        let game = self.details.get(id).cloned();

        async move { Ok(game) }.boxed()
    }

    fn guides(&self) -> BoxFuture<'_, Result<Vec<Guide>, BackendError>> {
        let guides = self.guides.to_vec();

        async move { Ok(guides) }.boxed()
    }

    fn guide(&self, id: &str) -> BoxFuture<'_, Result<Option<Guide>, BackendError>> {
        let guide = self.guides.iter().find(|g| g.id() == id).cloned();

        async move { Ok(guide) }.boxed()
    }

    fn faqs(&self) -> BoxFuture<'_, Result<Vec<Faq>, BackendError>> {
        let faqs = self.faqs.to_vec();

        async move { Ok(faqs) }.boxed()
    }
}
