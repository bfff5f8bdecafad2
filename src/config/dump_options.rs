use crate::config::flags::{push_switches, push_value};
use crate::config::types::{Format, Section};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PG_DUMP: &str = "pg_dump";

// Options of a single pg_dump run. Unset values produce no flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    // Executable to run, pg_dump from PATH when unset
    pub program: Option<String>,
    // Output file or directory
    pub file_path: String,
    // Output format, custom when unset
    pub format: Option<Format>,
    pub data_only: bool,
    pub blobs: bool,
    pub no_blobs: bool,
    pub clean: bool,
    pub create: bool,
    pub extension_pattern: Option<String>,
    pub encoding: Option<String>,
    // Parallel jobs, only meaningful for the directory format
    pub jobs: Option<u32>,
    pub schema_pattern: Option<String>,
    pub exclude_schema_pattern: Option<String>,
    pub table_pattern: Option<String>,
    pub exclude_table_pattern: Option<String>,
    pub exclude_table_data_pattern: Option<String>,
    pub no_owner: bool,
    pub no_reconnect: bool,
    pub schema_only: bool,
    pub verbose: bool,
    pub version: bool,
    pub no_acl: bool,
    // Compression level (0 disables)
    pub compress: Option<u32>,
    pub binary_upgrade: bool,
    pub column_inserts: bool,
    pub disable_dollar_quoting: bool,
    pub disable_triggers: bool,
    pub enable_row_security: bool,
    pub extra_float_digits: Option<i32>,
    pub if_exists: bool,
    pub include_foreign_data: Option<String>,
    pub inserts: bool,
    pub load_via_partition_root: bool,
    // Milliseconds to wait for table locks
    pub lock_wait_timeout: Option<u64>,
    pub no_comments: bool,
    pub no_publications: bool,
    pub no_security_labels: bool,
    pub no_subscriptions: bool,
    pub no_sync: bool,
    pub no_synchronized_snapshots: bool,
    pub no_tablespaces: bool,
    pub no_toast_compression: bool,
    pub no_unlogged_table_data: bool,
    pub on_conflict_do_nothing: bool,
    pub quote_all_identifiers: bool,
    pub rows_per_insert: Option<u32>,
    pub section: Option<Section>,
    pub serializable_deferrable: bool,
    pub snapshot: Option<String>,
    pub strict_names: bool,
    pub use_set_session_authorization: bool,
    pub role: Option<String>,
}

impl DumpOptions {
    /// Creates dump options writing to the given file with every toggle off.
    pub fn new(file_path: impl Into<String>) -> Self {
        DumpOptions {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_PG_DUMP)
    }

    /// Returns the pg_dump flags for these options, connection excluded.
    pub fn get_args(&self) -> Vec<String> {
        let mut args = vec![format!("--format={}", self.format.unwrap_or_default())];

        if !self.file_path.is_empty() {
            args.push(format!("--file={}", self.file_path));
        }
        push_value(&mut args, "extension", self.extension_pattern.as_deref());
        push_value(&mut args, "encoding", self.encoding.as_deref());
        push_value(&mut args, "jobs", self.jobs.filter(|j| *j != 0));
        push_value(&mut args, "schema", self.schema_pattern.as_deref());
        push_value(&mut args, "exclude-schema", self.exclude_schema_pattern.as_deref());
        push_value(&mut args, "table", self.table_pattern.as_deref());
        push_value(&mut args, "exclude-table", self.exclude_table_pattern.as_deref());
        push_value(&mut args, "compress", self.compress);
        push_value(
            &mut args,
            "exclude-table-data",
            self.exclude_table_data_pattern.as_deref(),
        );
        push_value(&mut args, "extra-float-digits", self.extra_float_digits);
        push_value(
            &mut args,
            "include-foreign-data",
            self.include_foreign_data.as_deref(),
        );
        push_value(
            &mut args,
            "lock-wait-timeout",
            self.lock_wait_timeout.filter(|t| *t != 0),
        );
        push_value(&mut args, "rows-per-insert", self.rows_per_insert);
        push_value(&mut args, "section", self.section);
        push_value(&mut args, "snapshot", self.snapshot.as_deref());
        push_value(&mut args, "role", self.role.as_deref());

        let switches = [
            ("blobs", self.blobs),
            ("clean", self.clean),
            ("create", self.create),
            ("inserts", self.inserts),
            ("verbose", self.verbose),
            ("version", self.version),
            ("binary-upgrade", self.binary_upgrade),
            ("column-inserts", self.column_inserts),
            ("data-only", self.data_only),
            ("disable-dollar-quoting", self.disable_dollar_quoting),
            ("disable-triggers", self.disable_triggers),
            ("enable-row-security", self.enable_row_security),
            ("if-exists", self.if_exists),
            ("load-via-partition-root", self.load_via_partition_root),
            ("no-acl", self.no_acl),
            ("no-blobs", self.no_blobs),
            ("no-comments", self.no_comments),
            ("no-owner", self.no_owner),
            ("no-publications", self.no_publications),
            ("no-reconnect", self.no_reconnect),
            ("no-security-labels", self.no_security_labels),
            ("no-subscriptions", self.no_subscriptions),
            ("no-sync", self.no_sync),
            ("no-synchronized-snapshots", self.no_synchronized_snapshots),
            ("no-tablespaces", self.no_tablespaces),
            ("no-toast-compression", self.no_toast_compression),
            ("no-unlogged-table-data", self.no_unlogged_table_data),
            ("on-conflict-do-nothing", self.on_conflict_do_nothing),
            ("quote-all-identifiers", self.quote_all_identifiers),
            ("schema-only", self.schema_only),
            ("serializable-deferrable", self.serializable_deferrable),
            ("strict-names", self.strict_names),
            ("use-set-session-authorization", self.use_set_session_authorization),
        ];
        push_switches(&mut args, &switches);

        args
    }
}
