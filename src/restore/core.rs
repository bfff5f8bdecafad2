use crate::config::{connection_options::ConnectionOptions, restore_options::RestoreOptions};
use crate::connection::{ConnectionArgs, get_connection_args};
use crate::error::{Error, Result};
use tokio::process::{Child, Command};
use tracing::{debug, info};

// A pg_restore invocation: where to connect and which archive to load.
#[derive(Debug, Clone)]
pub struct Restore {
    pub connection: ConnectionOptions,
    pub options: RestoreOptions,
}

impl Restore {
    pub fn new(connection: ConnectionOptions, options: RestoreOptions) -> Self {
        Restore {
            connection,
            options,
        }
    }

    // Connection arguments and environment, with the restore flags and
    // archive path appended. The archive path is checked first.
    fn invocation(&self) -> Result<ConnectionArgs> {
        let options = self.options.get_args()?;
        let mut invocation = get_connection_args(&self.connection)?;
        invocation.args.extend(options);
        Ok(invocation)
    }

    /// Full pg_restore argument list, ending with the archive path.
    pub fn get_args(&self) -> Result<Vec<String>> {
        Ok(self.invocation()?.args)
    }

    pub fn command(&self) -> Result<Command> {
        let invocation = self.invocation()?;
        let mut command = Command::new(self.options.program());
        command.args(&invocation.args).envs(&invocation.envs);
        Ok(command)
    }

    /// Starts pg_restore and returns the child for the caller to await.
    pub async fn spawn(&self) -> Result<Child> {
        let mut command = self.command()?;
        let program = self.options.program();
        debug!(
            program,
            connection = %self.connection.get_masked_connection_string(),
            file = %self.options.file_path,
            "starting restore"
        );
        let child = command.spawn().map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;
        info!(program, pid = ?child.id(), "restore started");
        Ok(child)
    }
}

/// Starts pg_restore for the given connection and options.
pub async fn pg_restore(
    connection: &ConnectionOptions,
    options: &RestoreOptions,
) -> Result<Child> {
    Restore::new(connection.clone(), options.clone()).spawn().await
}
