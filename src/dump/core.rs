use crate::config::{connection_options::ConnectionOptions, dump_options::DumpOptions};
use crate::connection::{ConnectionArgs, get_connection_args};
use crate::error::{Error, Result};
use tokio::process::{Child, Command};
use tracing::{debug, info};

// A pg_dump invocation: where to connect and what to dump.
#[derive(Debug, Clone)]
pub struct Dump {
    // Server connection
    pub connection: ConnectionOptions,
    // pg_dump options
    pub options: DumpOptions,
}

impl Dump {
    pub fn new(connection: ConnectionOptions, options: DumpOptions) -> Self {
        Dump {
            connection,
            options,
        }
    }

    // Connection arguments and environment, with the dump flags appended.
    fn invocation(&self) -> Result<ConnectionArgs> {
        let mut invocation = get_connection_args(&self.connection)?;
        invocation.args.extend(self.options.get_args());
        Ok(invocation)
    }

    /// Full pg_dump argument list: connection first, then the dump flags.
    pub fn get_args(&self) -> Result<Vec<String>> {
        Ok(self.invocation()?.args)
    }

    /// Builds the pg_dump command without starting it.
    pub fn command(&self) -> Result<Command> {
        let invocation = self.invocation()?;
        let mut command = Command::new(self.options.program());
        command.args(&invocation.args).envs(&invocation.envs);
        Ok(command)
    }

    /// Starts pg_dump and hands the child back. Waiting for it, and reading
    /// its exit status, is up to the caller.
    pub async fn spawn(&self) -> Result<Child> {
        let mut command = self.command()?;
        let program = self.options.program();
        debug!(
            program,
            connection = %self.connection.get_masked_connection_string(),
            file = %self.options.file_path,
            "starting dump"
        );
        let child = command.spawn().map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;
        info!(program, pid = ?child.id(), "dump started");
        Ok(child)
    }
}

/// Starts pg_dump for the given connection and options.
pub async fn pg_dump(connection: &ConnectionOptions, options: &DumpOptions) -> Result<Child> {
    Dump::new(connection.clone(), options.clone()).spawn().await
}
