use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const APP_TARGET: &str = "finboard";

/// What `--verbose` lets through: this crate at debug, the HTTP client at info.
fn app_targets(verbose: bool) -> Targets {
    if !verbose {
        return Targets::new().with_default(LevelFilter::OFF);
    }
    Targets::new()
        .with_target(APP_TARGET, Level::DEBUG)
        .with_target("reqwest", Level::INFO)
}

/// Installs the global subscriber on stderr. Silent unless `verbose`;
/// `RUST_LOG` can then narrow the output further.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "off" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_target(verbose)
                .with_writer(std::io::stderr),
        )
        .with(app_targets(verbose))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_without_verbose() {
        let targets = app_targets(false);
        assert!(!targets.would_enable("finboard::api::client", &Level::ERROR));
        assert!(!targets.would_enable("reqwest::connect", &Level::ERROR));
    }

    #[test]
    fn test_verbose_targets() {
        let targets = app_targets(true);
        assert!(targets.would_enable("finboard::views::budgets", &Level::DEBUG));
        assert!(!targets.would_enable("finboard::views::budgets", &Level::TRACE));
        assert!(targets.would_enable("reqwest::connect", &Level::INFO));
        assert!(!targets.would_enable("reqwest::connect", &Level::DEBUG));
        assert!(!targets.would_enable("hyper_util::client", &Level::WARN));
    }
}
