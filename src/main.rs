use anyhow::Context;
use rapid_jobs_waitlist::configuration::get_configuration;
use rapid_jobs_waitlist::startup::Application;
use rapid_jobs_waitlist::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "rapid_jobs_waitlist".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .context("Failed to read configuration")?;
    let application = Application::build(config)?;
    application.run_until_stopped().await?;
    Ok(())
}
