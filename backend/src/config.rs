//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TEA_API_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Errors raised when settings cannot form a bind address.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Network settings for the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TEA_API")]
pub struct ServerSettings {
    /// Interface address to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve the socket address the server should bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address literal.
    ///
    /// # Examples
    /// ```
    /// use tea_api::config::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     host: "127.0.0.1".to_owned(),
    ///     port: 8080,
    /// };
    /// let addr = settings.bind_addr().expect("valid address");
    /// assert_eq!(addr.to_string(), "127.0.0.1:8080");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| SettingsError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3000;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("tea-api")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TEA_API_HOST", None::<String>),
            ("TEA_API_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address").to_string(),
            "0.0.0.0:3000"
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TEA_API_HOST", Some("127.0.0.1".to_owned())),
            ("TEA_API_PORT", Some("8081".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8081);
    }

    #[rstest]
    #[case("localhost")]
    #[case("not an address")]
    fn non_ip_hosts_are_rejected(#[case] host: &str) {
        let settings = ServerSettings {
            host: host.to_owned(),
            port: DEFAULT_PORT,
        };
        let err = settings.bind_addr().expect_err("host must be an IP literal");
        assert!(matches!(err, SettingsError::InvalidHost { .. }));
    }
}
