/*---------- Imports ----------*/
use lambda_http::{service_fn, Error};
use salesloft_relay::relay::relay_cadence_import;
use salesloft_relay::utils::config::RelayConfig;
use salesloft_relay::utils::logging::init_tracing;
use salesloft_relay::utils::salesloft::SalesloftClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = RelayConfig::from_env()?;
    let client = SalesloftClient::new(&config)?;
    info!(url = %client.url(), timeout = ?config.timeout, "Starting cadence import relay");

    let handler = service_fn(|request| relay_cadence_import(&client, request));

    lambda_http::run(handler).await?;

    Ok(())
}
