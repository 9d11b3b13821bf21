//! Welcome pack type definitions

use serde::{Deserialize, Serialize};

/// Mail domain appended to user principal names.
pub const UPN_DOMAIN: &str = "company.com";

/// How the new employee authenticates on first sign-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    #[default]
    TemporaryAccessPass,
    InitialPassword,
}

/// Which onboarding materials get produced and how they are delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOptions {
    /// Printed pack with company policies, contacts, and resources.
    pub print_welcome_pack: bool,
    /// One-time print with temporary access credentials.
    pub print_credential_slip: bool,
    /// Email with PDF attachments, never credentials.
    pub send_welcome_email: bool,
    /// Chat with the IT contact and the manager.
    pub create_teams_chat: bool,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            print_welcome_pack: true,
            print_credential_slip: true,
            send_welcome_email: true,
            create_teams_chat: false,
        }
    }
}

/// Everything the welcome pack dialog collects. Construction only; the
/// generated documents are a collaborator's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomePackRequest {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub start_date: Option<chrono::NaiveDate>,
    /// Local part of the user principal name, e.g. `john.doe`.
    pub upn: String,
    pub auth_method: AuthMethod,
    pub delivery: DeliveryOptions,
}

impl WelcomePackRequest {
    /// Create a request with the principal name derived as
    /// `<first>.<last>`, lowercased.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let upn = format!(
            "{}.{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        Self {
            first_name,
            last_name,
            department: department.into(),
            start_date: None,
            upn,
            auth_method: AuthMethod::default(),
            delivery: DeliveryOptions::default(),
        }
    }

    pub fn with_start_date(mut self, date: chrono::NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_upn(mut self, upn: impl Into<String>) -> Self {
        self.upn = upn.into();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Full principal address, e.g. `john.doe@company.com`.
    pub fn upn_address(&self) -> String {
        format!("{}@{}", self.upn, UPN_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upn_derived_from_name() {
        let request = WelcomePackRequest::new("John", "Doe", "Engineering");
        assert_eq!(request.upn, "john.doe");
        assert_eq!(request.upn_address(), "john.doe@company.com");
        assert_eq!(request.full_name(), "John Doe");
    }

    #[test]
    fn test_delivery_defaults() {
        let delivery = DeliveryOptions::default();
        assert!(delivery.print_welcome_pack);
        assert!(delivery.print_credential_slip);
        assert!(delivery.send_welcome_email);
        assert!(!delivery.create_teams_chat);
    }

    #[test]
    fn test_upn_override() {
        let request =
            WelcomePackRequest::new("Sarah", "Johnson", "Marketing").with_upn("sjohnson");
        assert_eq!(request.upn_address(), "sjohnson@company.com");
    }
}
