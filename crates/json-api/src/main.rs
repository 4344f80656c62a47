//! Shopping Cart JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use cart_app::context::{AppContext, AppInitError};

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod carts;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod items;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::load().unwrap_or_else(|error| error.exit());

    let telemetry = match Observability::init(&config) {
        Ok(telemetry) => telemetry,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "no subscriber is installed to report through"
            )]
            {
                eprintln!("cannot start telemetry: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let outcome = serve(&config).await;

    if let Err(error) = &outcome {
        error!(%error, "server could not start");
    }

    telemetry.shutdown();

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn serve(config: &ServerConfig) -> Result<(), AppInitError> {
    let app = AppContext::from_database_url(
        &config.database.database_url,
        config.database.run_migrations,
        &config.users.client_config(),
    )
    .await?;

    let address = config.socket_addr();
    let listener = TcpListener::new(address.clone()).bind().await;

    info!(%address, "listening");

    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!(%error, "shutdown signals unavailable");
        }
    });

    server.serve(service_router(app)).await;

    Ok(())
}

/// Every route plus the OpenAPI document and Swagger UI describing them.
fn service_router(app: AppContext) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::shared(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Shopping Cart API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
