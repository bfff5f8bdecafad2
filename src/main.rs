use clap::{CommandFactory, Parser};
use pgtools::{
    config::core::{Command, Config},
    logging::init_tracing_from_env,
    ConnectionOptions, DumpOptions, Error, Format, RestoreOptions, SslMode, pg_dump, pg_restore,
};
use std::process::{ExitCode, ExitStatus};
use tracing::{error, info};

// Command line arguments. No Debug derive: the password is a plain field.
#[derive(Parser)]
#[command(
    name = "pgtools",
    version,
    about = "Runs pg_dump and pg_restore with typed options.",
    long_about = None,
)]
struct Args {
    /// Command to execute: dump or restore
    #[arg(long, value_enum)]
    command: Option<Command>,

    /// Server host name or socket directory
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(long, default_value_t = 5432)]
    port: u16,

    /// User name
    #[arg(long, default_value = "postgres")]
    user: String,

    /// Password. Empty means no password is passed (use .pgpass)
    #[arg(long, default_value = "")]
    password: String,

    /// Database name
    #[arg(long, default_value = "postgres")]
    database: String,

    /// SSL mode, exported as PGSSLMODE
    #[arg(long, value_enum)]
    ssl_mode: Option<SslMode>,

    /// Dump file to write or restore from
    #[arg(long)]
    file: Option<String>,

    /// Archive format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Schema pattern
    #[arg(long)]
    schema: Option<String>,

    /// Drop database objects before recreating them
    #[arg(long)]
    clean: bool,

    /// Create the database
    #[arg(long)]
    create: bool,

    /// Skip restoration of object ownership
    #[arg(long)]
    no_owner: bool,

    /// Verbose tool output
    #[arg(long)]
    verbose: bool,

    /// JSON configuration file, replaces all other arguments
    #[arg(long)]
    config: Option<String>,
}

// Main entry point for the program.
#[tokio::main]
async fn main() -> ExitCode {
    init_tracing_from_env();
    let args = Args::parse();
    if args.command.is_none() && args.config.is_none() {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        return ExitCode::SUCCESS;
    }

    let config = match args.config.clone() {
        Some(file) => {
            info!(%file, "using configuration file");
            Config::load(&file)
        }
        None => config_from_args(args),
    };

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            error!(%status, "tool finished with an error");
            ExitCode::from(status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1))
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn config_from_args(args: Args) -> Result<Config, Error> {
    let Some(command) = args.command else {
        return Err(Error::Config("no command given".to_string()));
    };
    let mut connection =
        ConnectionOptions::new(args.host, args.port, args.database, args.user, args.password);
    connection.ssl_mode = args.ssl_mode;
    let file_path = args.file.unwrap_or_default();

    let (dump, restore) = match command {
        Command::Dump => (
            Some(DumpOptions {
                file_path,
                format: args.format,
                schema_pattern: args.schema,
                clean: args.clean,
                create: args.create,
                no_owner: args.no_owner,
                verbose: args.verbose,
                ..Default::default()
            }),
            None,
        ),
        Command::Restore => (
            None,
            Some(RestoreOptions {
                file_path,
                format: args.format,
                schema_pattern: args.schema,
                clean: args.clean,
                create: args.create,
                no_owner: args.no_owner,
                verbose: args.verbose,
                ..Default::default()
            }),
        ),
    };
    Ok(Config {
        command,
        connection,
        dump,
        restore,
    })
}

async fn run(config: Config) -> Result<ExitStatus, Error> {
    let mut child = match (config.command, &config.dump, &config.restore) {
        (Command::Dump, Some(options), _) => pg_dump(&config.connection, options).await?,
        (Command::Restore, _, Some(options)) => pg_restore(&config.connection, options).await?,
        (command, _, _) => {
            return Err(Error::Config(format!("no options for the {command:?} command")));
        }
    };
    let status = child.wait().await?;
    info!(%status, "finished");
    Ok(status)
}
