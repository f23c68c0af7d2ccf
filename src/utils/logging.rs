use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the hub process.
///
/// `RUST_LOG` wins when set, so an operator can turn up `fanhub=debug` for
/// the hub loop without touching configuration; otherwise `fallback` (e.g.
/// "info") applies. Repeated calls are harmless: tests and the binary can
/// both initialize without panicking.
pub fn init(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_can_be_called_repeatedly() {
        super::init("debug");
        super::init("info");
    }
}
