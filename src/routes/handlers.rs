use std::time::{Duration, Instant};

use log::debug;
use warp::filters::path::FullPath;
use warp::{
    reject,
    reply::{json, with_header, Reply},
};

use crate::environment::Environment;
use crate::errors::BackendError;
use crate::query::{parse_criteria, to_query_string};
use crate::routes::{
    rejection::{Context, Rejection},
    response::SuccessResponse,
};
use crate::search::{self, FilterCriteria};

const SERVER_TIMING_HEADER: &str = "server-timing";
type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

macro_rules! timed {
    ($($expression:stmt);+) => {
        let start = Instant::now();

        // TODO when `try` blocks are stabilized, we can wrap the body
        // and return the headers even on errors
        let result = { $($expression)+ };

        Ok(Box::new(with_header(
            result,
            SERVER_TIMING_HEADER,
            format_server_timing(start.elapsed()),
        )) as Box<dyn Reply>)
    };
}

pub async fn search(environment: Environment, raw_query: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::search(raw_query.clone()), e);

        let criteria = parse_criteria(&raw_query).map_err(error_handler)?;
        debug!(environment.logger, "Searching catalog..."; "query" => &raw_query, "page" => criteria.page());

        let games = environment.catalog.games().await.map_err(error_handler)?;
        let results = search::search(&games, &criteria, environment.config.page_size);
        debug!(environment.logger, "Filtered catalog"; "total" => results.total, "total_pages" => results.total_pages);

        let previous = results.previous_page().map(|p| search_link(&criteria, p));
        let next = results.next_page().map(|p| search_link(&criteria, p));

        json(&SuccessResponse::Search {
            query: to_query_string(&criteria),
            results,
            previous,
            next,
        })
    }
}

pub async fn featured(environment: Environment) -> RouteResult {
    timed! {
        let games = environment
            .catalog
            .featured()
            .await
            .map_err(|e: BackendError| Rejection::new(Context::featured(), e))?;

        json(&SuccessResponse::Games { games })
    }
}

pub async fn game(environment: Environment, id: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::game(id.clone()), e);
        debug!(environment.logger, "Retrieving game..."; "id" => &id);

        let game = environment
            .catalog
            .game(&id)
            .await
            .map_err(error_handler)?
            .ok_or_else(|| error_handler(BackendError::GameNotFound { id: id.clone() }))?;

        let mature = game.age_rating.is_mature();
        let parental_guidance = game.parental_guidance();

        json(&SuccessResponse::Game {
            game,
            mature,
            parental_guidance,
        })
    }
}

pub async fn guides(environment: Environment) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::guides(), e);

        let guides = environment.catalog.guides().await.map_err(error_handler)?;
        let faqs = environment.catalog.faqs().await.map_err(error_handler)?;

        json(&SuccessResponse::Guides {
            guides: guides.iter().map(|g| g.preview()).collect(),
            faqs,
        })
    }
}

pub async fn guide(environment: Environment, id: String) -> RouteResult {
    timed! {
        let error_handler = |e: BackendError| Rejection::new(Context::guide(id.clone()), e);
        debug!(environment.logger, "Retrieving guide..."; "id" => &id);

        let guide = environment
            .catalog
            .guide(&id)
            .await
            .map_err(error_handler)?
            .ok_or_else(|| error_handler(BackendError::GuideNotFound { id: id.clone() }))?;

        json(&SuccessResponse::Guide(guide))
    }
}

pub async fn faqs(environment: Environment) -> RouteResult {
    timed! {
        let faqs = environment
            .catalog
            .faqs()
            .await
            .map_err(|e: BackendError| Rejection::new(Context::faqs(), e))?;

        json(&SuccessResponse::Faqs { faqs })
    }
}

pub async fn not_found(environment: Environment, path: FullPath) -> RouteResult {
    let path = path.as_str().to_owned();
    debug!(environment.logger, "No route matched"; "path" => &path);

    Err(reject::custom(Rejection::new(
        Context::path(path.clone()),
        BackendError::RouteNotFound { path },
    )))
}

fn search_link(criteria: &FilterCriteria, page: usize) -> String {
    let query = to_query_string(&criteria.clone().with_page(page));

    if query.is_empty() {
        "/search".to_owned()
    } else {
        format!("/search?{}", query)
    }
}

fn format_server_timing(seconds: Duration) -> String {
    format!("handler;dur={}", seconds.as_secs_f64() * 1000.0)
}
