use shiftly::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Shiftly");

    // Load configuration
    let config = startup::load_config().await?;

    // Run the scheduling demo
    startup::run(config).await
}
