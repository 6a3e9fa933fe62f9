use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::utils::env::parse_env;

/// Largest message history Discord lets a ban delete.
pub const MAX_DELETE_MESSAGE_SECONDS: u32 = 604_800;

/// Policy values consumed by the join tracker and the leave evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardConfig {
    /// Contact shown to banned members and in `/start`.
    pub admin_contact: String,
    /// Members leaving strictly before this much time has passed are banned.
    pub ban_threshold: Duration,
    /// Message history removed together with the ban.
    pub delete_message_seconds: u32,
    pub data_file: PathBuf,
    /// Upper bound for a single ban or direct-message request.
    pub request_timeout: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            admin_contact: String::new(),
            ban_threshold: Duration::from_secs(300),
            delete_message_seconds: MAX_DELETE_MESSAGE_SECONDS,
            data_file: PathBuf::from("data/members.json"),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl GuardConfig {
    pub fn from_env() -> Self {
        Self {
            admin_contact: parse_env("ADMIN_CONTACT", ""),
            ban_threshold: Duration::from_secs(parse_env("BAN_THRESHOLD_SECONDS", "300")),
            delete_message_seconds: parse_env::<u32>("BAN_DELETE_MESSAGE_SECONDS", "604800")
                .min(MAX_DELETE_MESSAGE_SECONDS),
            data_file: parse_env("DATA_FILE", "data/members.json"),
            request_timeout: Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECONDS", "10")),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.admin_contact.trim().is_empty() {
            anyhow::bail!("ADMIN_CONTACT is missing");
        }
        if self.ban_threshold.is_zero() {
            anyhow::bail!("BAN_THRESHOLD_SECONDS must be a positive number of seconds");
        }
        if self.request_timeout.is_zero() {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be a positive number of seconds");
        }
        if self.data_file.as_os_str().is_empty() {
            anyhow::bail!("DATA_FILE must not be empty");
        }
        Ok(())
    }
}

pub static GUARD_CONFIGS: LazyLock<GuardConfig> = LazyLock::new(GuardConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn valid() -> GuardConfig {
        GuardConfig { admin_contact: "@mod".into(), ..GuardConfig::default() }
    }

    #[test]
    fn test_default_threshold_is_five_minutes() {
        assert_eq!(GuardConfig::default().ban_threshold, Duration::from_secs(300));
    }

    #[test]
    fn test_validate_requires_admin_contact() {
        assert!(GuardConfig::default().validate().is_err());
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let cfg = GuardConfig { ban_threshold: Duration::ZERO, ..valid() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let cfg = GuardConfig { request_timeout: Duration::ZERO, ..valid() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    #[serial(env)]
    fn test_from_env_reads_overrides() {
        unsafe {
            env::set_var("ADMIN_CONTACT", "@owner");
            env::set_var("BAN_THRESHOLD_SECONDS", "120");
            env::set_var("BAN_DELETE_MESSAGE_SECONDS", "9999999");
            env::set_var("DATA_FILE", "/tmp/guard/members.json");
        }
        let cfg = GuardConfig::from_env();
        assert_eq!(cfg.admin_contact, "@owner");
        assert_eq!(cfg.ban_threshold, Duration::from_secs(120));
        assert_eq!(cfg.delete_message_seconds, MAX_DELETE_MESSAGE_SECONDS);
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/guard/members.json"));
        unsafe {
            env::remove_var("ADMIN_CONTACT");
            env::remove_var("BAN_THRESHOLD_SECONDS");
            env::remove_var("BAN_DELETE_MESSAGE_SECONDS");
            env::remove_var("DATA_FILE");
        }
    }

    #[test]
    #[serial(env)]
    fn test_from_env_falls_back_to_defaults() {
        unsafe {
            env::remove_var("BAN_THRESHOLD_SECONDS");
            env::remove_var("REQUEST_TIMEOUT_SECONDS");
            env::set_var("BAN_DELETE_MESSAGE_SECONDS", "soon");
        }
        let cfg = GuardConfig::from_env();
        assert_eq!(cfg.ban_threshold, Duration::from_secs(300));
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.delete_message_seconds, MAX_DELETE_MESSAGE_SECONDS);
        unsafe {
            env::remove_var("BAN_DELETE_MESSAGE_SECONDS");
        }
    }
}
