//! ---
//! ems_section: "03-persistence-logging"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Structured logging adapters for release tooling."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
/// Emit an informational log enriched with manifest context.
#[macro_export]
macro_rules! hz_info {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::INFO,
            manifest = ctx.manifest.unwrap_or(""),
            path = ctx.path.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        tracing::event!(
            tracing::Level::INFO,
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a debug log enriched with manifest context.
#[macro_export]
macro_rules! hz_debug {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            tracing::Level::DEBUG,
            manifest = ctx.manifest.unwrap_or(""),
            path = ctx.path.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        tracing::event!(
            tracing::Level::DEBUG,
            message = %format_args!($($arg)+)
        );
    }};
}
