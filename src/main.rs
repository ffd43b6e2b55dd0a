use anyhow::Context;

use pipeline_banner::configuration::get_configuration;
use pipeline_banner::startup::Application;
use pipeline_banner::telemetry::{get_subscriber, initialize_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("pipeline-banner".into(), "info".into(), std::io::stdout);
    initialize_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let application = Application::build(&configuration)
        .await
        .with_context(|| format!("Failed to bind {}", configuration.application.address()))?;

    tracing::info!(address = %application.address(), "Starting application");
    application
        .run_until_stopped()
        .await
        .context("The server stopped unexpectedly")
}
