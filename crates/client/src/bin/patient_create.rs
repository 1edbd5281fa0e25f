//! Create the Patient described by `data/patient_to_create.json`.

use healthcare_fhir_client::{CREATE_FIXTURE, Config, HealthcareClient, logging, patient};
use healthcare_fhir_core::load_fixture;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let body = load_fixture(CREATE_FIXTURE)?;

    let client = HealthcareClient::stable(&config).await?;
    patient::create_patient(&client, &config.store, &body).await?;
    Ok(())
}
