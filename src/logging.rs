use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v` repetitions to a default directive for this crate
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "shelfrank=warn",
        1 => "shelfrank=info",
        _ => "shelfrank=debug",
    }
}

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // stdout carries the report, so logs stay on stderr
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // Ignore the error if a subscriber is already installed (e.g. in tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "shelfrank=warn");
        assert_eq!(default_directive(1), "shelfrank=info");
        assert_eq!(default_directive(4), "shelfrank=debug");
    }
}
