use std::time::Duration;

/// Runtime tuning, read from the environment.
///
/// | Variable | Default |
/// |---|---|
/// | `TABLESIDE_ACTOR_BUFFER` | 64 |
/// | `TABLESIDE_SUBSCRIBER_QUEUE` | 64 |
/// | `TABLESIDE_NOTIFY_TIMEOUT_MS` | 3000 |
///
/// Unset or unparsable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Request channel capacity of every store actor.
    pub actor_buffer: usize,
    /// Pending events per realtime connection before it is dropped.
    pub subscriber_queue: usize,
    pub notify_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            actor_buffer: std::env::var("TABLESIDE_ACTOR_BUFFER")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(64),
            subscriber_queue: std::env::var("TABLESIDE_SUBSCRIBER_QUEUE")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(64),
            notify_timeout: Duration::from_millis(
                std::env::var("TABLESIDE_NOTIFY_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
