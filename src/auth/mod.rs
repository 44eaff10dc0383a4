//! Authentication support
//!
//! * SRP client seed generation
//! * Plugin negotiation checks

mod srp;

pub use srp::{prime, ClientSeed};

use crate::{Error, Result};

/// Verify that the plugin chosen by the server is one the client offered
pub fn check_plugin(offered: &[String], chosen: &str) -> Result<()> {
    if offered.iter().any(|p| p == chosen) {
        return Ok(());
    }
    Err(Error::Authentication(format!(
        "server selected plugin '{}' which was not offered. Offered: {}",
        chosen,
        offered.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offered() -> Vec<String> {
        vec!["Srp256".to_string(), "Srp".to_string()]
    }

    #[test]
    fn test_offered_plugin_is_accepted() {
        assert!(check_plugin(&offered(), "Srp").is_ok());
    }

    #[test]
    fn test_unknown_plugin_is_rejected() {
        let err = check_plugin(&offered(), "Legacy_Auth").unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
        assert!(err.to_string().contains("Legacy_Auth"));
    }

    #[test]
    fn test_plugin_match_is_case_sensitive() {
        assert!(check_plugin(&offered(), "srp256").is_err());
    }
}
