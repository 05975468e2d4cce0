use tracing::{Subscriber, level_filters::LevelFilter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Environment variable holding extra filter directives, e.g. `postdesk::http=debug`.
pub const LOG_FILTER_ENV: &str = "POSTDESK_LOG";

/// Dependencies whose debug output drowns the admin's own events.
const QUIET_TARGETS: [&str; 2] = ["hyper=warn", "hyper_util=warn"];

/// Install the global subscriber: env filter, span-trace capture and a compact or JSON formatter.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    tracing_subscriber::registry()
        .with(build_filter(logging.level)?)
        .with(ErrorLayer::default())
        .with(format_layer(logging.format))
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn build_filter(level: LevelFilter) -> Result<EnvFilter, InfraError> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_FILTER_ENV)
        .from_env_lossy();

    for directive in QUIET_TARGETS {
        let directive = directive.parse().map_err(|err| {
            InfraError::telemetry(format!("invalid log directive `{directive}`: {err}"))
        })?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

fn format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    }
}
