//! ---
//! ems_section: "03-persistence-logging"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Structured logging adapters for release tooling."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

/// Environment variable holding the preferred filter directive.
pub const LOG_ENV: &str = "HORIZON_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize a stderr tracing subscriber.
///
/// `HORIZON_LOG` wins over `RUST_LOG`; when neither is set only warnings and
/// errors are shown so that a successful run prints nothing.
pub fn init() {
    let _ = Registry::default()
        .with(resolve_filter())
        .with(
            subscriber_fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn resolve_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to {} logging",
                LOG_ENV, err, DEFAULT_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        Err(_) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Short label of the manifest being processed (`client`, `server`, ...).
    pub manifest: Option<&'a str>,
    /// Filesystem path of the manifest.
    pub path: Option<&'a str>,
    /// Version string being propagated.
    pub version: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a manifest label.
    pub fn with_manifest(mut self, manifest: &'a str) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Attach a manifest path.
    pub fn with_path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    /// Attach the version being written.
    pub fn with_version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    // `tracing::event!` needs a constant level, so dispatch per outcome.
    match outcome {
        SystemEventOutcome::Fault => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            manifest = ctx.manifest.unwrap_or(""),
            path = ctx.path.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Success => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            manifest = ctx.manifest.unwrap_or(""),
            path = ctx.path.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_emit_without_panic() {
        init();
        let ctx = LogContext::new()
            .with_manifest("server")
            .with_version("2.0.0");
        hz_info!(context = ctx.clone(), "manifest rewritten");
        hz_debug!("debug message");
        hz_info!(context = ctx, "{} manifests synchronised", 3);
    }

    #[test]
    fn init_does_not_panic() {
        init();
        init();
    }

    #[test]
    fn system_event_helper_emits() {
        init();
        let ctx = LogContext::new().with_manifest("client");
        log_system_event(
            Some(&ctx),
            "test.event",
            "system event helper executed",
            SystemEventOutcome::Success,
        );
        log_system_event(
            None,
            "test.event",
            "system event helper fault",
            SystemEventOutcome::Fault,
        );
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(SystemEventOutcome::Success.as_str(), "success");
        assert_eq!(SystemEventOutcome::Fault.as_str(), "fault");
    }
}
