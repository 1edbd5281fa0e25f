//! FHIR store addressing
//!
//! Every Healthcare API resource name hangs off the same hierarchy:
//! project, location, dataset, FHIR store.

use crate::resource::ResourceId;

/// Location of a FHIR store within a Cloud project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAddress {
    pub project_id: String,
    pub location: String,
    pub dataset_id: String,
    pub fhir_store_id: String,
}

impl StoreAddress {
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        dataset_id: impl Into<String>,
        fhir_store_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            dataset_id: dataset_id.into(),
            fhir_store_id: fhir_store_id.into(),
        }
    }

    /// `projects/{p}/locations/{l}/datasets/{d}`
    pub fn parent(&self) -> String {
        format!(
            "projects/{}/locations/{}/datasets/{}",
            self.project_id, self.location, self.dataset_id
        )
    }

    /// Full store name, `{parent}/fhirStores/{f}`
    pub fn name(&self) -> String {
        format!("{}/fhirStores/{}", self.parent(), self.fhir_store_id)
    }

    /// Base of the store's FHIR REST surface
    pub fn fhir_path(&self) -> String {
        format!("{}/fhir", self.name())
    }

    /// Collection path for a resource type (create, conditional update)
    pub fn type_path(&self, resource_type: &str) -> String {
        format!("{}/{}", self.fhir_path(), resource_type)
    }

    /// Instance path for a single resource (read, update)
    pub fn resource_path(&self, resource: &ResourceId) -> String {
        format!(
            "{}/{}",
            self.type_path(&resource.resource_type),
            resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreAddress {
        StoreAddress::new("my-project", "us-central1", "my-dataset", "my-store")
    }

    #[test]
    fn test_parent_and_name() {
        let store = store();
        assert_eq!(
            store.parent(),
            "projects/my-project/locations/us-central1/datasets/my-dataset"
        );
        assert_eq!(
            store.name(),
            "projects/my-project/locations/us-central1/datasets/my-dataset/fhirStores/my-store"
        );
    }

    #[test]
    fn test_resource_path_layout() {
        let cases = [
            ("p", "l", "d", "f", "Patient", "1"),
            ("proj-42", "europe-west4", "ds_a", "store.b", "Observation", "abc-def"),
        ];
        for (p, l, d, f, ty, id) in cases {
            let store = StoreAddress::new(p, l, d, f);
            let path = store.resource_path(&ResourceId::new(ty, id));
            assert_eq!(
                path,
                format!("projects/{p}/locations/{l}/datasets/{d}/fhirStores/{f}/fhir/{ty}/{id}")
            );
        }
    }

    #[test]
    fn test_type_path_has_no_id() {
        assert_eq!(
            store().type_path("Patient"),
            "projects/my-project/locations/us-central1/datasets/my-dataset/fhirStores/my-store/fhir/Patient"
        );
    }
}
