mod cli;
mod commands;
mod demo;
mod infra;
mod routes;
mod server;

use living_legacy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
