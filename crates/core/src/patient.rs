//! Sample Patient used by the conditional update program

use serde_json::{Value as JsonValue, json};

/// Search parameter selecting the patient by social security number
pub const CONDITIONAL_IDENTIFIER_QUERY: (&str, &str) = ("identifier", "ss|999-87-3391");

/// The patient written by the conditional update
pub fn conditional_update_example() -> JsonValue {
    json!({
        "identifier": [
            {
                "system": "http://terminology.hl7.org/CodeSystem/v2-0203",
                "code": "SS",
                "value": "999-87-3391"
            }
        ],
        "name": [{"use": "official", "family": "Pilar", "given": ["Melgar"]}],
        "gender": "male",
        "birthDate": "1900-01-10",
        "resourceType": "Patient",
        "active": true
    })
}
