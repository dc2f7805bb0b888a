use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Parse a log filter: a level (trace|debug|info|warn|error|off) or any
/// EnvFilter directive list such as `face_shape=debug,warn`.
///
/// A bare word must be a level.
pub fn parse_filter(filter: &str) -> Result<EnvFilter> {
    let filter = filter.trim();
    let bare = !filter.contains(|c: char| matches!(c, '=' | ',' | '[' | ':'));
    if bare && filter.parse::<LevelFilter>().is_err() {
        return Err(Error::Logging(format!("unknown log level '{}'", filter)));
    }

    EnvFilter::try_new(filter)
        .map_err(|e| Error::Logging(format!("invalid log filter '{}': {}", filter, e)))
}

// RUST_LOG takes precedence when set and valid.
fn env_filter(filter: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(env) => Ok(env),
        Err(_) => parse_filter(filter),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// reports.
pub fn init(filter: &str, json: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_and_directives_parse() {
        for filter in ["warn", "DEBUG", "off", "face_shape=debug,warn", "face_shape=trace"] {
            assert!(parse_filter(filter).is_ok(), "{}", filter);
        }
    }

    #[test]
    fn misspelled_level_is_rejected() {
        let err = parse_filter("wran").unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
        assert!(err.to_string().contains("wran"));
    }
}
