//! Configuration loading and constants.
//!
//! Defines the workshop session presets (greeting plus literal default port),
//! the `PORT` override, Cache-Control header values, and logging defaults.
//! `AppConfig` is built once at startup and never mutated afterwards.

use std::fmt;
use std::net::SocketAddr;

use clap::ValueEnum;
use const_format::formatcp;
use serde::Serialize;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting page - static for the lifetime of the process
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Health probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Error responses - short TTL
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

// =============================================================================
// Server Defaults
// =============================================================================

/// Bind on all interfaces so CI runners and containers can reach the service
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable holding the optional port override
pub const PORT_ENV_VAR: &str = "PORT";

/// Seconds to wait for in-flight requests during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Response header carrying the per-request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeter=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// =============================================================================
// Session Presets
// =============================================================================

/// A workshop session: which greeting to serve and which port to fall back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Session {
    #[value(name = "session-2")]
    #[serde(rename = "session-2")]
    Session2,
    #[value(name = "session-3")]
    #[serde(rename = "session-3")]
    Session3,
    #[value(name = "session-3-2")]
    #[serde(rename = "session-3-2")]
    Session3Ongoing,
    #[value(name = "session-4")]
    #[serde(rename = "session-4")]
    Session4,
    #[value(name = "session-4-ongoing")]
    #[serde(rename = "session-4-ongoing")]
    Session4Ongoing,
    #[default]
    #[value(name = "session-5")]
    #[serde(rename = "session-5")]
    Session5,
}

impl Session {
    pub const ALL: [Session; 6] = [
        Session::Session2,
        Session::Session3,
        Session::Session3Ongoing,
        Session::Session4,
        Session::Session4Ongoing,
        Session::Session5,
    ];

    /// Body served on `GET /`.
    pub fn greeting(self) -> &'static str {
        match self {
            Session::Session2 => "Hello from Flask!",
            Session::Session3 => "Hello, DevOps Workshop with Flask!",
            Session::Session3Ongoing => {
                "<h1>Hello, DevOps Workshop Session 3</h1>\
                 <h3>Freestyle Project + Email Notify + WebHook + TestCases<h3>"
            }
            Session::Session4 => "Hello from Session 4 (Docker + Jenkins)!",
            Session::Session4Ongoing => {
                "<h1>Hello DevOps Session 4 !!!!</h1><h2>Nirmala College SYIT</h2>\
                 <h3>Name : Kshitij Sawant | Subject : Docker</h3>"
            }
            Session::Session5 => {
                "<h1>DevOps Session 5 !!!</h1><h2>Nirmala College | SYIT</h2>\
                 <h3>Kshitij K Sawant</h3>"
            }
        }
    }

    /// Port used when `PORT` is unset.
    ///
    /// These are the values the sessions actually bound, not the ones their
    /// comments advertised.
    pub fn default_port(self) -> u16 {
        match self {
            Session::Session2 => 5000,
            Session::Session3Ongoing => 5001,
            Session::Session3
            | Session::Session4
            | Session::Session4Ongoing
            | Session::Session5 => 5002,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Session::Session2 => "session-2",
            Session::Session3 => "session-3",
            Session::Session3Ongoing => "session-3-2",
            Session::Session4 => "session-4",
            Session::Session4Ongoing => "session-4-ongoing",
            Session::Session5 => "session-5",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Application Config
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Session preset this process serves
    pub session: Session,
    /// Body of the greeting page
    pub greeting: String,
    /// HTTP listener configuration
    pub http: HttpServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl HttpServerConfig {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

impl AppConfig {
    /// Build the configuration for `session`, honouring the `PORT` environment variable.
    pub fn load(session: Session) -> Result<Self, ConfigError> {
        let port_var = std::env::var(PORT_ENV_VAR).ok();
        Self::with_port_override(session, port_var.as_deref())
    }

    /// Build the configuration from an explicit `PORT` value (`None` = unset).
    pub fn with_port_override(session: Session, port_var: Option<&str>) -> Result<Self, ConfigError> {
        let port = resolve_port(port_var, session.default_port())?;

        Ok(Self {
            session,
            greeting: session.greeting().to_string(),
            http: HttpServerConfig {
                host: DEFAULT_HOST.to_string(),
                port,
            },
        })
    }
}

/// Resolve the listening port from an optional raw `PORT` value.
///
/// Unset or empty falls back to `default`. Anything else must parse as an
/// integer in 1..=65535.
pub fn resolve_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<u16>() {
        Ok(0) => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
            reason: "port must be between 1 and 65535".to_string(),
        }),
        Ok(port) => Ok(port),
        Err(e) => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("Invalid bind address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_resolve_port_unset_uses_default() {
        assert_eq!(resolve_port(None, 5002).unwrap(), 5002);
        assert_eq!(resolve_port(Some(""), 5001).unwrap(), 5001);
        assert_eq!(resolve_port(Some("  "), 5001).unwrap(), 5001);
    }

    #[test]
    fn test_resolve_port_override() {
        assert_eq!(resolve_port(Some("5050"), 5002).unwrap(), 5050);
        assert_eq!(resolve_port(Some(" 8080\n"), 5002).unwrap(), 8080);
        assert_eq!(resolve_port(Some("65535"), 5002).unwrap(), 65535);
        assert_eq!(resolve_port(Some("1"), 5002).unwrap(), 1);
    }

    #[test]
    fn test_resolve_port_rejects_invalid_values() {
        for raw in ["0", "65536", "-1", "abc", "50.5", "5002x"] {
            let err = resolve_port(Some(raw), 5002).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidPort { value, .. } if value == raw),
                "expected InvalidPort for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_literal_default_ports() {
        assert_eq!(Session::Session2.default_port(), 5000);
        assert_eq!(Session::Session3.default_port(), 5002);
        assert_eq!(Session::Session3Ongoing.default_port(), 5001);
        assert_eq!(Session::Session4.default_port(), 5002);
        assert_eq!(Session::Session4Ongoing.default_port(), 5002);
        assert_eq!(Session::Session5.default_port(), 5002);
    }

    #[test]
    fn test_greetings_identify_session() {
        assert!(Session::Session2.greeting().contains("Hello from Flask"));
        assert!(Session::Session3.greeting().contains("DevOps Workshop"));
        assert!(Session::Session3Ongoing.greeting().contains("Session 3"));
        assert!(Session::Session4.greeting().contains("Session 4"));
        assert!(Session::Session4Ongoing.greeting().contains("Docker"));
        assert!(Session::Session5.greeting().contains("DevOps Session 5"));
    }

    #[test]
    fn test_session_names_round_trip_through_cli_parser() {
        for session in Session::ALL {
            let parsed = Session::from_str(session.as_str(), false).unwrap();
            assert_eq!(parsed, session);
            assert_eq!(session.to_string(), session.as_str());
        }
        assert!(Session::from_str("session-9", false).is_err());
    }

    #[test]
    fn test_default_session_is_latest() {
        assert_eq!(Session::default(), Session::Session5);
    }

    #[test]
    fn test_config_with_port_override() {
        let config = AppConfig::with_port_override(Session::Session4, Some("5050")).unwrap();
        assert_eq!(config.session, Session::Session4);
        assert_eq!(config.greeting, Session::Session4.greeting());
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 5050);
        assert_eq!(
            config.http.bind_addr().unwrap(),
            "0.0.0.0:5050".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_config_without_port_override() {
        let config = AppConfig::with_port_override(Session::Session3Ongoing, None).unwrap();
        assert_eq!(config.http.port, 5001);
    }

    #[test]
    fn test_config_rejects_bad_port() {
        assert!(AppConfig::with_port_override(Session::Session5, Some("http")).is_err());
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let http = HttpServerConfig {
            host: "not a host".to_string(),
            port: 5002,
        };
        assert!(matches!(
            http.bind_addr(),
            Err(ConfigError::InvalidAddress { port: 5002, .. })
        ));
    }

    #[test]
    fn test_cache_control_values() {
        assert_eq!(CACHE_CONTROL_HOME, "public, max-age=60");
        assert_eq!(CACHE_CONTROL_ERROR, "public, max-age=5");
    }
}
