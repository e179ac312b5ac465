use restaurant_backend_rs::{
    app::App,
    types::{Config, Context, ToContext},
};
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let ctx: Arc<Context> = match Config::from_env() {
        Ok(config) => match config.to_context().await {
            Ok(ctx) => Arc::new(ctx),
            Err(err) => {
                tracing::error!("Failed to build application context: {}", err);
                return ExitCode::FAILURE;
            }
        },
        Err(err) => {
            tracing::error!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("Starting in {:?} mode", ctx.app.environment);

    match App::new(ctx).serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
