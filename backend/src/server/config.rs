//! Startup settings and the server configuration derived from them.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use ecosystem_shell::domain::{NotificationTtl, TtlError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings loaded from CLI flags, `SHELL_*` environment variables, and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHELL")]
pub struct ShellSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Lifetime of each toast in milliseconds.
    #[ortho_config(default = 3000)]
    pub notification_ttl_ms: u64,
}

impl ShellSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}

/// Settings that could not be turned into a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid notification lifetime: {0}")]
    InvalidTtl(#[from] TtlError),
}

/// Validated configuration for [`super::create_server`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) notification_ttl: NotificationTtl,
}

impl TryFrom<&ShellSettings> for ServerConfig {
    type Error = SettingsError;

    fn try_from(settings: &ShellSettings) -> Result<Self, Self::Error> {
        let raw = settings.bind_addr();
        let bind_addr = raw
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })?;
        let notification_ttl = NotificationTtl::from_millis(settings.notification_ttl_ms)?;
        Ok(Self {
            bind_addr,
            notification_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::time::Duration;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ShellSettings {
        ShellSettings::load_from_iter([OsString::from("ecosystem-shell")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("SHELL_BIND_ADDR", None::<String>),
            ("SHELL_NOTIFICATION_TTL_MS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert_eq!(settings.notification_ttl_ms, 3_000);

        let config = ServerConfig::try_from(&settings).expect("defaults are valid");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.notification_ttl.as_duration(),
            Duration::from_millis(3_000)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SHELL_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("SHELL_NOTIFICATION_TTL_MS", Some("1500".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::try_from(&settings).expect("overrides are valid");
        assert_eq!(config.bind_addr, "127.0.0.1:9090".parse().expect("addr"));
        assert_eq!(
            config.notification_ttl.as_duration(),
            Duration::from_millis(1_500)
        );
    }

    #[rstest]
    #[case(Some("not an address"), 3_000)]
    #[case(None, 0)]
    #[case(None, 9_000_000_000_000_000)]
    fn invalid_values_are_rejected(#[case] bind_addr: Option<&str>, #[case] ttl_ms: u64) {
        let settings = ShellSettings {
            bind_addr: bind_addr.map(str::to_owned),
            notification_ttl_ms: ttl_ms,
        };
        let err = ServerConfig::try_from(&settings).expect_err("invalid settings");
        match (bind_addr, err) {
            (Some(_), SettingsError::InvalidBindAddr { .. }) => {}
            (None, SettingsError::InvalidTtl(TtlError::Zero)) if ttl_ms == 0 => {}
            (None, SettingsError::InvalidTtl(TtlError::OutOfRange { .. })) if ttl_ms > 0 => {}
            (_, other) => panic!("unexpected error: {other}"),
        }
    }
}
