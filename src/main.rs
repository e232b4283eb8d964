use tokio::net::TcpListener;
use tracing::info;

use pessoas_api::configuration::get_static_configuration;
use pessoas_api::telemetry::{get_subscriber, init_subscriber};
use pessoas_api::{run, PersonService, PersonStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("pessoas-api".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_static_configuration()?;
    let listener = TcpListener::bind(configuration.address()).await?;

    info!(address = %listener.local_addr()?, "Starting server...");

    run(listener, PersonService::new(PersonStore::new())).await?;
    Ok(())
}
