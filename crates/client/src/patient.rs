//! Patient operations as run by the binaries
//!
//! Each function issues one request and prints the result to stdout.

use healthcare_fhir_core::patient::{CONDITIONAL_IDENTIFIER_QUERY, conditional_update_example};
use healthcare_fhir_core::{HealthcareError, ResourceId, Result, StoreAddress, resource_type};
use serde_json::Value as JsonValue;

use crate::client::HealthcareClient;

/// Creates a new Patient resource in a FHIR store
pub async fn create_patient(
    client: &HealthcareClient,
    store: &StoreAddress,
    patient: &JsonValue,
) -> Result<JsonValue> {
    let ty = resource_type(patient)?;
    if ty != "Patient" {
        return Err(HealthcareError::InvalidResource(format!(
            "expected a Patient, got resourceType `{}`",
            ty
        )));
    }
    let response = client.create(store, patient).await?;
    let id = response.get("id").and_then(JsonValue::as_str).unwrap_or("<none>");
    println!("Created Patient resource with ID {}", id);
    Ok(response)
}

/// Gets the contents of a FHIR resource
pub async fn get_resource(
    client: &HealthcareClient,
    store: &StoreAddress,
    resource: &ResourceId,
) -> Result<JsonValue> {
    let response = client.read(store, resource).await?;
    println!(
        "Got contents of {} resource with ID {}:\n{}",
        resource.resource_type,
        resource.id,
        serde_json::to_string_pretty(&response)?
    );
    Ok(response)
}

/// Updates the entire contents of a FHIR resource
///
/// Creates a new current version if the resource already exists, or a new
/// resource with an initial version if none exists with the body's id.
pub async fn update_resource(
    client: &HealthcareClient,
    store: &StoreAddress,
    resource: &JsonValue,
) -> Result<JsonValue> {
    let target = ResourceId::from_body(resource)?;
    let response = client.update(store, resource).await?;
    println!(
        "Updated {} resource with ID {}:\n{}",
        target.resource_type,
        target.id,
        serde_json::to_string_pretty(&response)?
    );
    Ok(response)
}

/// Overwrites the Patient matching the sample identifier
pub async fn conditional_update_resource(
    client: &HealthcareClient,
    store: &StoreAddress,
) -> Result<JsonValue> {
    let body = conditional_update_example();
    let (key, value) = CONDITIONAL_IDENTIFIER_QUERY;
    let response = client
        .conditional_update(store, "Patient", &[(key, value)], &body)
        .await?;
    println!(
        "Conditionally updated the Patient with identifier '{}':\n{}",
        value,
        serde_json::to_string_pretty(&response)?
    );
    Ok(response)
}
