//! healthcare-fhir-client library crate
//!
//! Authenticated access to a Cloud Healthcare API FHIR store. The
//! `patient_*` binaries in `src/bin` each run one operation from
//! [`patient`].

pub mod auth;
pub mod client;
pub mod config;
pub mod logging;
pub mod patient;

pub use client::{FHIR_JSON, HealthcareClient};
pub use config::Config;

/// Fixture read by `patient_create`
pub const CREATE_FIXTURE: &str = "./data/patient_to_create.json";

/// Fixture read by `patient_read` and `patient_update`
pub const UPDATE_FIXTURE: &str = "./data/patient_to_update.json";
