//! healthcare-fhir-core: Types shared by the Healthcare API FHIR programs
//!
//! Store addressing, resource identifiers, fixture loading and the error
//! bodies the API sends back. Nothing in here performs I/O beyond reading
//! fixture files.

pub mod error;
pub mod outcome;
pub mod patient;
pub mod resource;
pub mod store;

pub use error::{HealthcareError, Result};
pub use outcome::{IssueSeverity, IssueType, OperationOutcome, OperationOutcomeIssue};
pub use resource::{ResourceId, load_fixture, resource_type};
pub use store::StoreAddress;
