use std::sync::Arc;

use log::{error, info, Logger};
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, Reply, WithStatus};
use warp::Filter;

use crate::environment::Environment;
use crate::errors::BackendError;

pub mod admin;
mod handlers;
mod rejection;
mod response;

pub use internal::*;

/// Every public route of the site, including the catch-all and the
/// conversion of rejections into JSON error bodies.
///
/// Rejections from the named routes are formatted before the catch-all
/// is tried, so it only answers requests no named route claimed.
pub fn make_main_routes(environment: Environment) -> BoxedFilter<(Box<dyn Reply>,)> {
    let logger1 = environment.logger.clone();
    let logger2 = environment.logger.clone();

    make_search_route(environment.clone())
        .or(make_featured_route(environment.clone()))
        .or(make_game_route(environment.clone()))
        .or(make_guides_route(environment.clone()))
        .or(make_guide_route(environment.clone()))
        .or(make_faqs_route(environment.clone()))
        .recover(move |r| format_rejection(logger1.clone(), r))
        .or(make_fallback_route(environment))
        .recover(move |r| format_rejection(logger2.clone(), r))
        .map(|reply| Box::new(reply) as Box<dyn Reply>)
        .boxed()
}

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        let status = status_code_for(e);

        if status.is_server_error() {
            error!(logger, "Backend error"; "context" => ?r.context, "error" => ?r.error, "status" => %status, "message" => %r.error);
        } else {
            info!(logger, "Request rejected"; "context" => ?r.context, "error" => ?r.error, "status" => %status, "message" => %r.error);
        }

        let flattened = r.flatten();

        return Ok(with_status(json(&flattened), status));
    }

    Err(rej)
}

fn status_code_for(e: &BackendError) -> StatusCode {
    use BackendError::*;

    match e {
        InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        GameNotFound { .. } | GuideNotFound { .. } | RouteNotFound { .. } => StatusCode::NOT_FOUND,
    }
}

mod internal {
    use warp::filters::BoxedFilter;
    use warp::path::{end, full};
    use warp::Filter;
    use warp::Reply;
    use warp::{get as g, path as p, path::param as par};

    use super::handlers;
    use crate::environment::Environment;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    macro_rules! route_filter {
    ($route_variable:ident; $first:expr) => (let $route_variable = $route_variable.and($first););
    ($route_variable:ident; $first:expr, $($rest:expr),+) => (
        let $route_variable = $route_variable.and($first);
        route_filter!($route_variable; $($rest),+);
    )
}

    macro_rules! route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let $route_variable = warp::any()
                .map(move || environment.clone());

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    /// The raw query string, or an empty one when the request has none.
    fn raw_query() -> BoxedFilter<(String,)> {
        warp::query::raw()
            .or(warp::any().map(String::new))
            .unify()
            .boxed()
    }

    route!(make_search_route => search, rt; p("search"), end(), g(), raw_query());
    route!(make_featured_route => featured, rt; p("featured"), end(), g());
    route!(make_game_route => game, rt; p("games"), par::<String>(), end(), g());
    route!(make_guides_route => guides, rt; p("guides"), end(), g());
    route!(make_guide_route => guide, rt; p("guides"), par::<String>(), end(), g());
    route!(make_faqs_route => faqs, rt; p("faqs"), end(), g());
    route!(make_fallback_route => not_found, rt; full());
}
