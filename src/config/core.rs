use crate::config::{
    connection_options::ConnectionOptions, dump_options::DumpOptions,
    restore_options::RestoreOptions,
};
use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Tool to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Dump,
    Restore,
}

// Configuration file representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Tool to run
    pub command: Command,
    // Server connection
    pub connection: ConnectionOptions,
    // pg_dump options, required for the dump command
    #[serde(default)]
    pub dump: Option<DumpOptions>,
    // pg_restore options, required for the restore command
    #[serde(default)]
    pub restore: Option<RestoreOptions>,
}

impl Config {
    /// Loads and checks a JSON configuration file.
    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(file.as_ref())?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        match self.command {
            Command::Dump if self.dump.is_none() => Err(Error::Config(
                "\"dump\" section is required for the dump command".to_string(),
            )),
            Command::Restore if self.restore.is_none() => Err(Error::Config(
                "\"restore\" section is required for the restore command".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{Format, SslMode};
    use std::io::Write;

    fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_dump_config() {
        let file = write_temp_config(
            r#"{
                "command": "dump",
                "connection": {
                    "host": "localhost",
                    "port": 5400,
                    "database": "test",
                    "username": "test",
                    "password": "test",
                    "ssl_mode": "require"
                },
                "dump": { "file_path": "test-dump.sql", "format": "plain", "no_owner": true }
            }"#,
        );

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.command, Command::Dump);
        assert_eq!(config.connection.port, Some(5400));
        assert_eq!(config.connection.ssl_mode, Some(SslMode::Require));
        let dump = config.dump.unwrap();
        assert_eq!(dump.file_path, "test-dump.sql");
        assert_eq!(dump.format, Some(Format::Plain));
        assert!(dump.no_owner);
        assert!(!dump.clean);
        assert!(config.restore.is_none());
    }

    #[test]
    fn test_restore_section_required() {
        let err = Config::from_json(
            r#"{ "command": "restore", "connection": { "host": "localhost" } }"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_command_rejected() {
        let err = Config::from_json(r#"{ "command": "vacuum", "connection": {} }"#).unwrap_err();

        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/tmp/non_existent_pgtools_config.json").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
