use parkway_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PARKWAY_TARGETS: [&str; 6] = [
    "parkway",
    "parkway_domain",
    "parkway_application",
    "parkway_infrastructure",
    "parkway_api",
    "tower_http",
];

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the
/// level from `[logging]`.
pub fn init_logging(config: &Config) {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(default_directives(&config.logging.level)), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    if from_env {
        info!("Logging filter taken from RUST_LOG");
    } else {
        info!(level = %config.logging.level, "Logging initialized");
    }
}

/// Our crates (and request traces) log at `level`; dependencies only warn.
fn default_directives(level: &str) -> String {
    let level = level.to_lowercase();
    PARKWAY_TARGETS
        .iter()
        .fold("warn".to_string(), |acc, target| format!("{acc},{target}={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_level_to_parkway_crates() {
        let directives = default_directives("DEBUG");

        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("parkway_application=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_every_configurable_level_builds_a_filter() {
        for level in parkway_domain::config::logging::LOG_LEVELS {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok());
        }
    }
}
