//! Registration domain types.
//!
//! A registration links one user to a set of catalog services, with
//! free-form additional metadata per user/service pair.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Data required to register a new user for a set of services.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    /// Catalog ids to register for; ids absent from the catalog are ignored
    pub service_ids: Vec<i32>,
    /// Per-service metadata keyed by service id; missing entries become ""
    pub additional_info: HashMap<i32, String>,
}

/// Replacement data for an existing user's registration.
///
/// Profile fields are overwritten unconditionally. An empty `service_ids`
/// leaves the user's existing service associations untouched; a non-empty
/// one replaces them wholesale.
#[derive(Debug, Clone)]
pub struct RegistrationUpdate {
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub service_ids: Vec<i32>,
    pub additional_info: HashMap<i32, String>,
}

/// A service a user is registered for, joined with the pair metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredService {
    /// Catalog id of the service
    #[schema(example = 1)]
    pub service_id: i32,
    /// Service name
    #[schema(example = "Internet")]
    pub service_name: String,
    /// Service description
    #[schema(example = "Broadband internet access")]
    pub description: String,
    /// Metadata supplied when the user registered for this service
    #[schema(example = "apartment 4B, needs evening installation")]
    pub additional_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_service_serializes_camel_case() {
        let entry = RegisteredService {
            service_id: 3,
            service_name: "Internet".to_string(),
            description: "Broadband".to_string(),
            additional_info: "".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["serviceId"], 3);
        assert_eq!(json["serviceName"], "Internet");
        assert_eq!(json["description"], "Broadband");
        assert_eq!(json["additionalInfo"], "");
    }
}
