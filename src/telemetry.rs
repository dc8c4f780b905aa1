use tracing::Level;

/// Installs a compact stderr subscriber at `level`; `None` keeps the crate silent.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init_tracing(level: Option<Level>) {
    if let Some(level) = level {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .try_init();
    }
}
