use std::{error::Error as _, process, sync::Arc};

use postdesk::{
    application::error::AppError,
    config,
    infra::{
        error::InfraError,
        http::{self, AdminState},
        store::{InMemoryRepositories, load_seed},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, source = ?error.source(), "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, source = ?error.source(), "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = Arc::new(InMemoryRepositories::new());

    if let Some(path) = settings.store.seed_file.as_deref() {
        let count = load_seed(store.as_ref(), path).await?;
        info!(target = "postdesk::serve", count, "store seeded");
    }

    let router = http::build_admin_router(AdminState::new(store));

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "postdesk::serve",
        addr = %settings.server.addr,
        "admin listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::server(err.to_string()))?;

    info!(target = "postdesk::serve", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(
            target = "postdesk::serve",
            error = %err,
            "failed to listen for shutdown signal"
        );
    }
}
