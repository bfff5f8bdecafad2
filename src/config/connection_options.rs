use crate::config::types::SslMode;
use serde::{Deserialize, Serialize};
use std::fmt;

// How to reach a PostgreSQL server. Every core field is optional here so the
// argument builder can report which ones are missing.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    // Server host name, or a socket directory when it starts with '/'
    pub host: Option<String>,
    // Server port
    pub port: Option<u16>,
    // Database name
    pub database: Option<String>,
    // Database user name
    pub username: Option<String>,
    // Database user password
    pub password: Option<String>,
    // SSL mode, passed to the tools via PGSSLMODE
    pub ssl_mode: Option<SslMode>,
}

impl ConnectionOptions {
    /// Creates connection options with all core fields set.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        ConnectionOptions {
            host: Some(host.into()),
            port: Some(port),
            database: Some(database.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            ssl_mode: None,
        }
    }

    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = Some(ssl_mode);
        self
    }

    /// True when the host names a Unix-domain socket directory.
    pub fn is_socket(&self) -> bool {
        self.host.as_deref().is_some_and(|h| h.starts_with('/'))
    }

    /// Names of the core fields that are not set.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host.is_none() {
            missing.push("host");
        }
        if self.port.is_none() {
            missing.push("port");
        }
        if self.database.is_none() {
            missing.push("database");
        }
        if self.username.is_none() {
            missing.push("username");
        }
        if self.password.is_none() {
            missing.push("password");
        }
        missing
    }

    /// Returns a connection string safe for logs: credentials are masked.
    pub fn get_masked_connection_string(&self) -> String {
        let host = self.host.as_deref().unwrap_or("?");
        let port = self.port.map(|p| p.to_string()).unwrap_or_else(|| "?".to_string());
        let database = self.database.as_deref().unwrap_or("?");
        let sslmode = self.ssl_mode.map(|m| m.as_str()).unwrap_or("default");
        if self.is_socket() {
            format!("postgresql:///{database}?user=*&password=*&host={host}&port={port} (sslmode={sslmode})")
        } else {
            format!("postgresql://*:*@{host}:{port}/{database} (sslmode={sslmode})")
        }
    }
}

// Password is masked so options can be logged with `?`.
impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}
