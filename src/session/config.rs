//! Session configuration

use crate::protocol::constants::DEFAULT_AUTH_PLUGINS;
use crate::transaction::IsolationLevel;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Option key: SQL role used for attach/create
pub const OPT_ROLE: &str = "role";
/// Option key: report column names in lower case
pub const OPT_COLUMN_NAME_TO_LOWER: &str = "column_name_to_lower";
/// Option key: comma-separated list of authentication plugins
pub const OPT_AUTH_PLUGIN_NAME: &str = "auth_plugin_name";
/// Option key: isolation level of the default transaction
pub const OPT_ISOLATION_LEVEL: &str = "isolation_level";
/// Option key: session autocommit mode
pub const OPT_AUTOCOMMIT: &str = "autocommit";

/// Session configuration
///
/// Stores the target, credentials and the options recognised by the session
/// layer. Every entry of `params` is also forwarded verbatim to the connect
/// negotiation. Use `SessionConfig::builder()` for a fluent setup or
/// `SessionConfig::from_params()` to apply a raw option map.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Server address (`host:port`)
    pub address: String,
    /// Database path or alias
    pub database: String,
    /// User name
    pub user: String,
    /// Password
    pub password: String,
    /// SQL role
    pub role: Option<String>,
    /// Report column names in lower case (default: false)
    pub column_name_to_lower: bool,
    /// Session autocommit mode (default: true)
    pub autocommit: bool,
    /// Isolation level of the default transaction (default: read committed)
    pub isolation_level: IsolationLevel,
    /// Authentication plugins offered, in preference order
    pub auth_plugins: Vec<String>,
    /// Raw connection options
    pub params: HashMap<String, String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            database: String::new(),
            user: String::new(),
            password: String::new(),
            role: None,
            column_name_to_lower: false,
            autocommit: true,
            isolation_level: IsolationLevel::default(),
            auth_plugins: DEFAULT_AUTH_PLUGINS.iter().map(|p| p.to_string()).collect(),
            params: HashMap::new(),
        }
    }
}

impl SessionConfig {
    /// Create new configuration with defaults
    ///
    /// # Arguments
    ///
    /// * `address` - Server address (`host:port`)
    /// * `database` - Database path or alias
    /// * `user` - Username
    pub fn new(
        address: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            database: database.into(),
            user: user.into(),
            ..Self::default()
        }
    }

    /// Create a builder
    ///
    /// # Examples
    ///
    /// ```
    /// use firebird_wire::{IsolationLevel, SessionConfig};
    ///
    /// let config = SessionConfig::builder("localhost:3050", "employee", "SYSDBA")
    ///     .password("masterkey")
    ///     .role("RDB$ADMIN")
    ///     .isolation_level(IsolationLevel::RepeatableRead)
    ///     .build();
    /// assert_eq!(config.role.as_deref(), Some("RDB$ADMIN"));
    /// ```
    pub fn builder(
        address: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> SessionConfigBuilder {
        SessionConfigBuilder {
            config: Self::new(address, database, user),
        }
    }

    /// Build a configuration from a raw option map
    ///
    /// Recognised keys (`role`, `column_name_to_lower`, `auth_plugin_name`,
    /// `isolation_level`, `autocommit`) are parsed into typed fields; all
    /// keys are kept in `params`.
    pub fn from_params(
        address: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        params: HashMap<String, String>,
    ) -> Result<Self> {
        let mut config = Self::new(address, database, user);
        config.password = password.into();

        for (key, value) in &params {
            apply_option(&mut config, key, value)?;
        }

        config.params = params;
        Ok(config)
    }

    /// Check required fields and the recognised keys in `params`
    pub fn validate(&self) -> Result<()> {
        if self.address.is_empty() {
            return Err(Error::Config("address is required".into()));
        }
        if self.database.is_empty() {
            return Err(Error::Config("database is required".into()));
        }
        if self.user.is_empty() {
            return Err(Error::Config("user is required".into()));
        }
        if self.auth_plugins.is_empty() {
            return Err(Error::Config(
                "at least one authentication plugin is required".into(),
            ));
        }
        let mut scratch = self.clone();
        for (key, value) in &self.params {
            apply_option(&mut scratch, key, value)?;
        }
        Ok(())
    }

    /// Options forwarded to the connect negotiation
    ///
    /// `params` plus the effective `auth_plugin_name` list.
    pub fn connect_options(&self) -> HashMap<String, String> {
        let mut options = self.params.clone();
        options.insert(OPT_AUTH_PLUGIN_NAME.to_string(), self.auth_plugins.join(","));
        options
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("address", &self.address)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("column_name_to_lower", &self.column_name_to_lower)
            .field("autocommit", &self.autocommit)
            .field("isolation_level", &self.isolation_level)
            .field("auth_plugins", &self.auth_plugins)
            .field("params", &self.params.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for `SessionConfig`
#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the SQL role
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.config.role = Some(role.into());
        self
    }

    /// Report column names in lower case
    pub fn column_name_to_lower(mut self, enabled: bool) -> Self {
        self.config.column_name_to_lower = enabled;
        self
    }

    /// Set session autocommit mode
    ///
    /// Default: true
    pub fn autocommit(mut self, enabled: bool) -> Self {
        self.config.autocommit = enabled;
        self
    }

    /// Set the isolation level of the default transaction
    pub fn isolation_level(mut self, level: IsolationLevel) -> Self {
        self.config.isolation_level = level;
        self
    }

    /// Replace the offered authentication plugins
    pub fn auth_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.auth_plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    /// Add a connection option
    ///
    /// Recognised keys update the matching typed field, as in
    /// `SessionConfig::from_params`. A value that does not parse leaves the
    /// field unchanged and is reported by `SessionConfig::validate`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        let _ = apply_option(&mut self.config, &key, &value);
        self.config.params.insert(key, value);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SessionConfig {
        self.config
    }
}

/// Parse a recognised option into its typed field; other keys are ignored
fn apply_option(config: &mut SessionConfig, key: &str, value: &str) -> Result<()> {
    match key {
        OPT_ROLE => config.role = Some(value.to_string()).filter(|r| !r.is_empty()),
        OPT_COLUMN_NAME_TO_LOWER => config.column_name_to_lower = parse_bool(key, value)?,
        OPT_AUTOCOMMIT => config.autocommit = parse_bool(key, value)?,
        OPT_ISOLATION_LEVEL => config.isolation_level = value.parse()?,
        OPT_AUTH_PLUGIN_NAME => config.auth_plugins = parse_plugin_list(value)?,
        _ => {}
    }
    Ok(())
}

/// Lenient boolean option parsing
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config(format!(
            "invalid boolean for {}: '{}'",
            key, other
        ))),
    }
}

fn parse_plugin_list(value: &str) -> Result<Vec<String>> {
    let plugins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if plugins.is_empty() {
        return Err(Error::Config(format!(
            "{} must name at least one plugin",
            OPT_AUTH_PLUGIN_NAME
        )));
    }
    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::new("localhost:3050", "employee", "SYSDBA");

        assert!(config.autocommit);
        assert!(!config.column_name_to_lower);
        assert!(config.role.is_none());
        assert_eq!(config.isolation_level, IsolationLevel::ReadCommitted);
        assert_eq!(config.auth_plugins, vec!["Srp256", "Srp"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_session_config_builder_fluent() {
        let config = SessionConfig::builder("db:3050", "/data/app.fdb", "app")
            .password("secret")
            .role("READER")
            .column_name_to_lower(true)
            .autocommit(false)
            .auth_plugins(["Srp"])
            .param("wire_crypt", "false")
            .build();

        assert_eq!(config.password, "secret");
        assert_eq!(config.role, Some("READER".to_string()));
        assert!(config.column_name_to_lower);
        assert!(!config.autocommit);
        assert_eq!(config.auth_plugins, vec!["Srp"]);
        assert_eq!(config.params.get("wire_crypt"), Some(&"false".to_string()));
    }

    #[test]
    fn test_from_params_recognised_options() {
        let config = SessionConfig::from_params(
            "localhost:3050",
            "employee",
            "SYSDBA",
            "masterkey",
            params(&[
                ("role", "ADMIN"),
                ("column_name_to_lower", "true"),
                ("isolation_level", "serializable"),
                ("autocommit", "no"),
                ("auth_plugin_name", "Srp256, Srp"),
                ("timezone", "Europe/Paris"),
            ]),
        )
        .unwrap();

        assert_eq!(config.role.as_deref(), Some("ADMIN"));
        assert!(config.column_name_to_lower);
        assert_eq!(config.isolation_level, IsolationLevel::Serializable);
        assert!(!config.autocommit);
        assert_eq!(config.auth_plugins, vec!["Srp256", "Srp"]);
        assert_eq!(config.params.get("timezone"), Some(&"Europe/Paris".to_string()));
    }

    #[test]
    fn test_from_params_rejects_bad_boolean() {
        let result = SessionConfig::from_params(
            "h:1",
            "db",
            "u",
            "p",
            params(&[("column_name_to_lower", "maybe")]),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_params_rejects_empty_plugin_list() {
        let result =
            SessionConfig::from_params("h:1", "db", "u", "p", params(&[("auth_plugin_name", " , ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_role_is_none() {
        let config =
            SessionConfig::from_params("h:1", "db", "u", "p", params(&[("role", "")])).unwrap();
        assert!(config.role.is_none());
    }

    #[test]
    fn test_validate_requires_fields() {
        assert!(SessionConfig::new("", "db", "u").validate().is_err());
        assert!(SessionConfig::new("h:1", "", "u").validate().is_err());
        assert!(SessionConfig::new("h:1", "db", "").validate().is_err());
        let config = SessionConfig::builder("h:1", "db", "u")
            .auth_plugins(Vec::<String>::new())
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connect_options_carry_plugin_list() {
        let config = SessionConfig::builder("h:1", "db", "u")
            .param("wire_crypt", "false")
            .build();
        let options = config.connect_options();
        assert_eq!(options.get("auth_plugin_name"), Some(&"Srp256,Srp".to_string()));
        assert_eq!(options.get("wire_crypt"), Some(&"false".to_string()));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SessionConfig = serde_json::from_str(
            r#"{
                "address": "db:3050",
                "database": "employee",
                "user": "SYSDBA",
                "password": "masterkey",
                "isolation_level": "repeatable_read",
                "params": {"wire_crypt": "false"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.address, "db:3050");
        assert_eq!(config.isolation_level, IsolationLevel::RepeatableRead);
        assert!(config.autocommit);
        assert_eq!(config.auth_plugins, vec!["Srp256", "Srp"]);
        assert_eq!(config.params.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_param_sets_recognised_options() {
        let config = SessionConfig::builder("h:1", "db", "u")
            .param("role", "AUDITOR")
            .param("autocommit", "off")
            .param("isolation_level", "serializable")
            .param("column_name_to_lower", "yes")
            .param("auth_plugin_name", "Srp")
            .param("wire_crypt", "false")
            .build();

        assert_eq!(config.role.as_deref(), Some("AUDITOR"));
        assert!(!config.autocommit);
        assert_eq!(config.isolation_level, IsolationLevel::Serializable);
        assert!(config.column_name_to_lower);
        assert_eq!(config.auth_plugins, vec!["Srp"]);
        assert_eq!(config.params.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_param_invalid_value_fails_validation() {
        let config = SessionConfig::builder("h:1", "db", "u")
            .param("autocommit", "sometimes")
            .build();

        assert!(config.autocommit);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("autocommit"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = SessionConfig::builder("h:1", "db", "u")
            .password("hunter2")
            .build();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
