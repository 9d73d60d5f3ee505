use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Bearer secret required by the reminder trigger endpoints. When unset
    /// the trigger endpoints are open, which is fine for local setups.
    pub cron_secret: Option<String>,
    /// Upper bound in millis for one push delivery; a hung device resolves
    /// to a failed delivery instead of stalling the pass.
    pub push_timeout_millis: u64,
    /// Whether the in-process minutely reminder job runs. Tests switch this
    /// off and trigger passes over HTTP instead.
    pub enable_reminder_job: bool,
}

const DEFAULT_PORT: &str = "5000";
const DEFAULT_PUSH_TIMEOUT_MILLIS: u64 = 10_000;

impl Config {
    pub fn new() -> Self {
        let port = std::env::var("PORT").unwrap_or(DEFAULT_PORT.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, DEFAULT_PORT
                );
                DEFAULT_PORT.parse::<usize>().unwrap()
            }
        };

        let cron_secret = match std::env::var("CRON_SECRET") {
            Ok(secret) => Some(secret),
            Err(_) => {
                info!(
                    "Did not find CRON_SECRET environment variable. The reminder trigger endpoints will accept unauthenticated requests."
                );
                None
            }
        };

        let push_timeout_millis = match std::env::var("PUSH_TIMEOUT_MILLIS") {
            Ok(timeout) => match timeout.parse::<u64>() {
                Ok(timeout) => timeout,
                Err(_) => {
                    warn!(
                        "The given PUSH_TIMEOUT_MILLIS: {} is not valid, falling back to the default: {}.",
                        timeout, DEFAULT_PUSH_TIMEOUT_MILLIS
                    );
                    DEFAULT_PUSH_TIMEOUT_MILLIS
                }
            },
            Err(_) => DEFAULT_PUSH_TIMEOUT_MILLIS,
        };

        Self {
            port,
            cron_secret,
            push_timeout_millis,
            enable_reminder_job: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn it_falls_back_to_defaults() {
        std::env::remove_var("PORT");
        std::env::remove_var("CRON_SECRET");
        std::env::remove_var("PUSH_TIMEOUT_MILLIS");

        let config = Config::new();
        assert_eq!(config.port, 5000);
        assert_eq!(config.cron_secret, None);
        assert_eq!(config.push_timeout_millis, DEFAULT_PUSH_TIMEOUT_MILLIS);
        assert!(config.enable_reminder_job);
    }

    #[test]
    #[serial_test::serial]
    fn it_reads_the_environment() {
        std::env::set_var("PORT", "6432");
        std::env::set_var("CRON_SECRET", "topsecret");
        std::env::set_var("PUSH_TIMEOUT_MILLIS", "2500");

        let config = Config::new();
        assert_eq!(config.port, 6432);
        assert_eq!(config.cron_secret, Some("topsecret".into()));
        assert_eq!(config.push_timeout_millis, 2500);

        std::env::remove_var("PORT");
        std::env::remove_var("CRON_SECRET");
        std::env::remove_var("PUSH_TIMEOUT_MILLIS");
    }

    #[test]
    #[serial_test::serial]
    fn it_rejects_malformed_values() {
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("PUSH_TIMEOUT_MILLIS", "soon");

        let config = Config::new();
        assert_eq!(config.port, 5000);
        assert_eq!(config.push_timeout_millis, DEFAULT_PUSH_TIMEOUT_MILLIS);

        std::env::remove_var("PORT");
        std::env::remove_var("PUSH_TIMEOUT_MILLIS");
    }
}
