use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, filtered by RUST_LOG (default `info`).
pub fn init_tracing_from_env() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .try_init();
}
