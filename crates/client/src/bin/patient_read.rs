//! Read back the Patient named by `data/patient_to_update.json`.

use healthcare_fhir_client::{Config, HealthcareClient, UPDATE_FIXTURE, logging, patient};
use healthcare_fhir_core::{ResourceId, load_fixture};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let target = ResourceId::from_body(&load_fixture(UPDATE_FIXTURE)?)?;

    let client = HealthcareClient::stable(&config).await?;
    patient::get_resource(&client, &config.store, &target).await?;
    Ok(())
}
