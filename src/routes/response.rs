use serde::Serialize;

use crate::game::{GameDetails, GameRecord};
use crate::guide::{Faq, Guide, GuidePreview};
use crate::search::SearchPage;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Search {
        #[serde(flatten)]
        results: SearchPage<'a>,
        query: String,
        previous: Option<String>,
        next: Option<String>,
    },
    Games {
        games: Vec<GameRecord>,
    },
    Game {
        #[serde(flatten)]
        game: GameDetails,
        mature: bool,
        parental_guidance: Vec<String>,
    },
    Guides {
        guides: Vec<GuidePreview>,
        faqs: Vec<Faq>,
    },
    Guide(Guide),
    Faqs {
        faqs: Vec<Faq>,
    },
    Healthz {
        revision: Option<&'a str>,
        timestamp: Option<&'a str>,
        version: &'a str,
    },
}
