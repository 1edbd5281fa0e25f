//! Overwrite the Patient with the contents of `data/patient_to_update.json`.

use healthcare_fhir_client::{Config, HealthcareClient, UPDATE_FIXTURE, logging, patient};
use healthcare_fhir_core::load_fixture;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let body = load_fixture(UPDATE_FIXTURE)?;

    let client = HealthcareClient::stable(&config).await?;
    patient::update_resource(&client, &config.store, &body).await?;
    Ok(())
}
