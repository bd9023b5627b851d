use tracing_subscriber::EnvFilter;
use crate::core::domain::{Configuration, LogFormat};

// Diagnostics go to stderr; stdout is reserved for the catalog transcript.
pub fn setup_tracing(config: &Configuration) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    // a second call keeps the subscriber that is already installed
    let _ = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, LogFormat};
    use crate::utils::logging::setup_tracing;

    #[test]
    fn test_should_setup_tracing_twice() {
        let mut config = Configuration::new("test");
        setup_tracing(&config);
        config.log_format = LogFormat::Json;
        setup_tracing(&config);
        tracing::info!(branch = config.branch_id.as_str(), "tracing ready");
    }
}
