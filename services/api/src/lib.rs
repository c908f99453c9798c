mod cli;
mod infra;
mod reports;
mod routes;
mod server;

use drive_ready::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
