// src/error.rs

use std::time::Duration;

/// The host could not schedule the next animation tick.
/// A dropped tick stalls the glyph, so these are surfaced to the caller.
#[derive(thiserror::Error, Debug)]
pub enum TickSchedulingError {
    #[error("tick deadline {0:?} from now overflows the frame clock")]
    DeadlineOverflow(Duration),

    #[error("frame host unavailable: {0}")]
    HostUnavailable(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
