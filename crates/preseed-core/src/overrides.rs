//! Identity overrides applied on top of an extracted record.

use crate::record::ConfigRecord;

/// Values that take precedence over the record when emitting.
///
/// `password` is expected to come from an out-of-band secret channel, never
/// from a command-line flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub hostname: Option<String>,
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub password: Option<String>,
}

/// The user-facing identity after overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    pub hostname: &'a str,
    pub username: &'a str,
    pub real_name: &'a str,
    pub password_hash: &'a str,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_real_name(mut self, real_name: impl Into<String>) -> Self {
        self.real_name = Some(real_name.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Pick each override if present, else the record's value.
    pub fn resolve<'a>(&'a self, record: &'a ConfigRecord) -> Identity<'a> {
        Identity {
            hostname: self.hostname.as_deref().unwrap_or(&record.hostname),
            username: self.username.as_deref().unwrap_or(&record.username),
            real_name: self.real_name.as_deref().unwrap_or(&record.real_name),
            password_hash: self.password.as_deref().unwrap_or(&record.password_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ConfigRecord {
        ConfigRecord {
            hostname: "from-yaml".into(),
            username: "yamluser".into(),
            real_name: "Yaml User".into(),
            password_hash: "$6$yaml".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_overrides_uses_record() {
        let record = record();
        let overrides = Overrides::new();
        let identity = overrides.resolve(&record);
        assert_eq!(identity.hostname, "from-yaml");
        assert_eq!(identity.username, "yamluser");
        assert_eq!(identity.real_name, "Yaml User");
        assert_eq!(identity.password_hash, "$6$yaml");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let record = record();
        let overrides = Overrides::new()
            .with_hostname("cli-host")
            .with_username("cliuser")
            .with_real_name("Cli User")
            .with_password("$6$env");
        let identity = overrides.resolve(&record);
        assert_eq!(identity.hostname, "cli-host");
        assert_eq!(identity.username, "cliuser");
        assert_eq!(identity.real_name, "Cli User");
        assert_eq!(identity.password_hash, "$6$env");
    }

    #[test]
    fn test_empty_password_override_still_wins() {
        let record = record();
        let overrides = Overrides::new().with_password("");
        assert_eq!(overrides.resolve(&record).password_hash, "");
    }
}
