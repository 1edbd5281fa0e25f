//! Conditionally update the sample Patient by identifier on the beta endpoint.

use healthcare_fhir_client::{Config, HealthcareClient, logging, patient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let client = HealthcareClient::beta(&config)?;
    tracing::info!(base_url = client.base_url(), "Using beta endpoint");

    patient::conditional_update_resource(&client, &config.store).await?;
    Ok(())
}
