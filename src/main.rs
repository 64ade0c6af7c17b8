use std::error::Error;
use std::sync::Arc;

use futures::future::FutureExt;
use log::{info, initialize_logger};
use tokio::sync::mpsc;
use warp::Filter;

use gameimpact::catalog::StaticCatalog;
use gameimpact::config::{get_optional_variable, get_port, parse_page_size};
use gameimpact::environment::{Config, Environment};
use gameimpact::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let main_port = get_port("GAMEIMPACT_PORT");
    let admin_port = get_port("GAMEIMPACT_ADMIN_PORT");

    let page_size = parse_page_size(get_optional_variable("GAMEIMPACT_PAGE_SIZE"))
        .expect("parse GAMEIMPACT_PAGE_SIZE as a positive integer");

    info!(logger, "Starting..."; "main_port" => main_port, "admin_port" => admin_port, "page_size" => page_size);
    let logger = Arc::new(logger);

    info!(logger, "Loading catalog...");
    let catalog = Arc::new(StaticCatalog::sample());

    let environment = Environment::new(logger.clone(), catalog, Config::new(page_size));

    let (termination_sender, mut termination_receiver) = mpsc::channel::<()>(1);

    let terminate = Arc::new(move || {
        let termination_sender = termination_sender.clone();

        async move {
            // a closed channel means shutdown is already under way
            let _ = termination_sender.send(()).await;
        }
        .boxed()
    });

    let should_terminate = async move {
        termination_receiver.recv().await;
    }
    .shared();

    let ctrlc = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let signal = tokio::signal::ctrl_c();

        async move {
            tokio::select! {
                _ = should_terminate => {},
                _ = signal => {
                    terminate().await;
                }
            }
        }
    };

    let main_server = {
        let should_terminate = should_terminate.clone();

        let routes = routes::make_main_routes(environment.clone());

        let (_, main_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], main_port), async {
                should_terminate.await;
            });

        main_server
    };

    let admin_server = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let routes = routes::admin::make_healthz_route(environment.clone()).or(
            routes::admin::make_termination_route(environment.clone(), terminate),
        );

        let (_, admin_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], admin_port), async {
                should_terminate.await;
            });

        admin_server
    };

    tokio::join!(ctrlc, main_server, admin_server);

    info!(logger, "Exiting gracefully...");

    Ok(())
}
