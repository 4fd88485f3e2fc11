use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::ServerConfig;

/// Directives applied before any user-supplied filter.
const BUILTIN_LOG_DIRECTIVES: &str = "api_rest=info";

/// Builds the log filter from the built-in defaults, then `RUST_LOG`, then `SHORTUID_LOG`.
///
/// Later directives replace earlier ones for the same target, so user settings always win over
/// the built-in defaults.
fn env_filter(rust_log: Option<&str>, log_directive: &str) -> anyhow::Result<EnvFilter> {
    let directives = [BUILTIN_LOG_DIRECTIVES, rust_log.unwrap_or(""), log_directive]
        .into_iter()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    Ok(EnvFilter::builder().parse(directives)?)
}

/// Main entry point for the ShortUID REST server.
///
/// Configuration is resolved once here and never read again while serving.
///
/// # Environment Variables
/// - `SHORTUID_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SHORTUID_LOG`: `tracing` filter directives (default: "shortuid=info")
/// - `RUST_LOG`: base `tracing` filter, overridden by `SHORTUID_LOG` for the same target
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cfg = ServerConfig::from_env()?;
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(rust_log.as_deref(), cfg.log_directive())?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("++ Starting ShortUID REST on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, api_rest::router()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_keeps_configured_directive() {
        let filter = env_filter(None, "api_rest=debug").unwrap().to_string();

        assert!(filter.contains("api_rest=debug"), "{filter}");
        assert!(!filter.contains("api_rest=info"), "{filter}");
    }

    #[test]
    fn test_env_filter_keeps_rust_log_directive() {
        let filter = env_filter(Some("api_rest=debug"), "shortuid=info")
            .unwrap()
            .to_string();

        assert!(filter.contains("api_rest=debug"), "{filter}");
        assert!(filter.contains("shortuid=info"), "{filter}");
    }

    #[test]
    fn test_env_filter_configured_directive_wins_over_rust_log() {
        let filter = env_filter(Some("shortuid=warn"), "shortuid=trace")
            .unwrap()
            .to_string();

        assert!(filter.contains("shortuid=trace"), "{filter}");
        assert!(!filter.contains("shortuid=warn"), "{filter}");
    }

    #[test]
    fn test_env_filter_defaults() {
        let filter = env_filter(None, "shortuid=info").unwrap().to_string();

        assert!(filter.contains("api_rest=info"), "{filter}");
        assert!(filter.contains("shortuid=info"), "{filter}");
    }

    #[test]
    fn test_env_filter_rejects_bad_directive() {
        assert!(env_filter(None, "shortuid=notalevel").is_err());
    }
}
