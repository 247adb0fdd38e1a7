//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus, when a log directory is given:
//! - Daily rotating application logs (`app/`, pruned after 14 days)
//! - Daily rotating security logs (`security/`, kept): sign-in, refresh,
//!   sign-out and forced sign-out events logged under the `security` target

use std::fs;
use std::path::Path;

use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter::filter_fn, fmt, prelude::*};

/// Days application logs are kept
const APP_LOG_RETENTION_DAYS: i64 = 14;

const SECURITY_TARGET: &str = "security";

/// Delete `app-YYYY-MM-DD.log` files older than `keep_days`
pub fn cleanup_old_logs(log_dir: &Path, keep_days: i64) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(keep_days);
    let mut removed = 0;

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(date) = name
            .strip_prefix("app.")
            .or_else(|| name.strip_prefix("app-"))
            .map(|d| d.trim_end_matches(".log"))
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

fn console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    }
}

fn file_layer<S>(
    json: bool,
    appender: RollingFileAppender,
    security: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = filter_fn(move |meta| (meta.target() == SECURITY_TARGET) == security);
    let writer = std::sync::Mutex::new(appender);
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` overrides `level` when set.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// hr_client::logger::init_logger("debug", false, None)?;
///
/// // Console + files
/// hr_client::logger::init_logger("info", true, Some(std::path::Path::new("./logs")))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers = vec![console_layer(json)];

    if let Some(log_dir) = log_dir {
        let app_log_dir = log_dir.join("app");
        let security_log_dir = log_dir.join("security");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&security_log_dir)?;

        match cleanup_old_logs(log_dir, APP_LOG_RETENTION_DAYS) {
            Ok(0) => {}
            Ok(n) => eprintln!("removed {n} expired log files"),
            Err(e) => eprintln!("log cleanup failed: {e}"),
        }

        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
        let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
        layers.push(file_layer(json, app_log, false));
        layers.push(file_layer(json, security_log, true));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}
