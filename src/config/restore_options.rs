use crate::config::flags::{push_switches, push_value};
use crate::config::types::{Format, Section};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PG_RESTORE: &str = "pg_restore";

// Options of a single pg_restore run. Unset values produce no flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreOptions {
    // Executable to run, pg_restore from PATH when unset
    pub program: Option<String>,
    // Archive to restore. Required.
    pub file_path: String,
    pub data_only: bool,
    pub clean: bool,
    pub create: bool,
    pub exit_on_error: bool,
    // Archive format, detected by pg_restore when unset. Plain is rejected:
    // plain dumps are SQL scripts for psql
    pub format: Option<Format>,
    // Output file name (--filename), for script output instead of a database
    pub file_name: Option<String>,
    pub index: Option<String>,
    pub jobs: Option<u32>,
    pub list: bool,
    pub use_list_file: Option<String>,
    pub schema_pattern: Option<String>,
    pub exclude_schema_pattern: Option<String>,
    pub no_owner: bool,
    pub no_reconnect: bool,
    pub schema_only: bool,
    pub verbose: bool,
    pub single_transaction: bool,
    pub version: bool,
    pub no_acl: bool,
    pub disable_triggers: bool,
    pub enable_row_security: bool,
    pub if_exists: bool,
    pub no_comments: bool,
    pub no_data_for_failed_tables: bool,
    pub no_security_labels: bool,
    pub no_publications: bool,
    pub no_subscriptions: bool,
    pub no_tablespaces: bool,
    pub strict_names: bool,
    pub use_set_session_authorization: bool,
    pub function: Option<String>,
    pub superuser: Option<String>,
    pub table: Option<String>,
    pub trigger: Option<String>,
    pub section: Option<Section>,
    pub no_password: bool,
    pub role: Option<String>,
}

impl RestoreOptions {
    /// Creates restore options for the given archive with every toggle off.
    pub fn new(file_path: impl Into<String>) -> Self {
        RestoreOptions {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_PG_RESTORE)
    }

    /// Returns the pg_restore flags for these options, connection excluded.
    /// The archive path is the last, positional, argument.
    pub fn get_args(&self) -> Result<Vec<String>> {
        if self.file_path.is_empty() {
            return Err(Error::MissingFilePath);
        }
        if self.format == Some(Format::Plain) {
            return Err(Error::UnsupportedRestoreFormat(Format::Plain));
        }

        let mut args = Vec::new();
        push_value(&mut args, "format", self.format);
        push_value(&mut args, "filename", self.file_name.as_deref());
        push_value(&mut args, "index", self.index.as_deref());
        push_value(&mut args, "jobs", self.jobs.filter(|j| *j != 0));
        push_value(&mut args, "use-list", self.use_list_file.as_deref());
        push_value(&mut args, "schema", self.schema_pattern.as_deref());
        push_value(&mut args, "exclude-schema", self.exclude_schema_pattern.as_deref());
        push_value(&mut args, "function", self.function.as_deref());
        push_value(&mut args, "superuser", self.superuser.as_deref());
        push_value(&mut args, "table", self.table.as_deref());
        push_value(&mut args, "trigger", self.trigger.as_deref());
        push_value(&mut args, "section", self.section);
        push_value(&mut args, "role", self.role.as_deref());

        let switches = [
            ("clean", self.clean),
            ("create", self.create),
            ("list", self.list),
            ("verbose", self.verbose),
            ("version", self.version),
            ("data-only", self.data_only),
            ("disable-triggers", self.disable_triggers),
            ("enable-row-security", self.enable_row_security),
            ("exit-on-error", self.exit_on_error),
            ("if-exists", self.if_exists),
            ("no-acl", self.no_acl),
            ("no-comments", self.no_comments),
            ("no-data-for-failed-tables", self.no_data_for_failed_tables),
            ("no-owner", self.no_owner),
            ("no-password", self.no_password),
            ("no-publications", self.no_publications),
            ("no-reconnect", self.no_reconnect),
            ("no-security-labels", self.no_security_labels),
            ("no-subscriptions", self.no_subscriptions),
            ("no-tablespaces", self.no_tablespaces),
            ("schema-only", self.schema_only),
            ("single-transaction", self.single_transaction),
            ("strict-names", self.strict_names),
            ("use-set-session-authorization", self.use_set_session_authorization),
        ];
        push_switches(&mut args, &switches);

        args.push(self.file_path.clone());
        Ok(args)
    }
}
