use tracing::Level;

/// Installs a stderr fmt subscriber at `level`. A subscriber that is
/// already installed is kept.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        tracing::debug!(error = %e, "Tracing subscriber already installed; keeping it");
    }
}
