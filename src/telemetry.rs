//! Tracing setup for hosts that embed the provider.
//!
//! The provider usually runs inside a framework that already owns the global
//! dispatcher, so installing ours is best effort.

use std::fmt;

use tracing::dispatcher;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Who ended up owning the global tracing dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberInstall {
    /// This crate installed its fmt subscriber.
    Installed,
    /// A global dispatcher was already set, by the host or an earlier call.
    AlreadySet,
}

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directives: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directives, .. } => {
                write!(f, "APP_LOG_LEVEL '{directives}' is not a valid tracing filter")
            }
            TelemetryError::Install(err) => write!(f, "unable to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Install the fmt subscriber unless the host already set a global dispatcher.
///
/// `RUST_LOG` takes precedence over the configured level. The filter is validated
/// even when the host owns the dispatcher so a bad `APP_LOG_LEVEL` is never silent.
pub fn init(config: &TelemetryConfig) -> Result<SubscriberInstall, TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    if dispatcher::has_been_set() {
        return Ok(SubscriberInstall::AlreadySet);
    }

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => Ok(SubscriberInstall::Installed),
        // Either the host set its dispatcher first or only the `log` bridge failed.
        Err(_) if dispatcher::has_been_set() => Ok(SubscriberInstall::AlreadySet),
        Err(err) => Err(TelemetryError::Install(err)),
    }
}

fn configured_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::InvalidFilter {
        directives: log_level.to_string(),
        source,
    })
}
