//! Harness runner: selector in, path trace and exit status out.
//!
//! # Pipeline
//!
//! ```text
//! argv count check → clap parse → HarnessConfig::from_env()
//!   → reference_registry() → Selector::decode()
//!   → Dispatcher::dispatch() → PathTraceV1
//! ```
//!
//! Every failure is terminal: one diagnostic line on stdout, status 255.
//! A completed path exits with status 1.

use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use branchtrace_kernel::dataset::reference::reference_registry;

use crate::arms::{ArmContext, ArmError};
use crate::config::{ConfigError, HarnessConfig, DEFAULT_LOG_FILTER, ENV_LOG};
use crate::contract::LayoutV1;
use crate::dispatcher::Dispatcher;
use crate::process::SpawnError;
use crate::selector::{Selector, SelectorError};
use crate::transcript::PathTraceV1;

/// Exit status of a completed path.
pub const SUCCESS_EXIT: u8 = 1;

/// Exit status of every fatal error (`exit(-1)` truncated to a byte).
pub const FAILURE_EXIT: u8 = 255;

/// Diagnostic printed for argument and selector errors.
pub const USAGE_DIAGNOSTIC: &str = "Wrong usage!";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Not exactly one positional argument.
    #[error("expected exactly one selector argument")]
    Usage,
    /// Selector shorter than the decision count.
    #[error("selector too short: need {required} characters, got {actual}")]
    SelectorTooShort { required: usize, actual: usize },
    /// Selector length inconsistent with the decision count.
    #[error("selector length {actual} does not match decision count {required}")]
    SelectorDecode { required: usize, actual: usize },
    /// Environment configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Child creation or reaping failed.
    #[error(transparent)]
    Spawn(SpawnError),
    /// Buffer acquisition failed.
    #[error("Unable to allocate memory.")]
    Allocation { requested: usize },
    /// Dataset, output, or dispatch fault.
    #[error("internal harness error: {detail}")]
    Internal { detail: String },
}

impl RunError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        FAILURE_EXIT
    }

    /// The single line printed to stdout before exiting.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Usage | Self::SelectorTooShort { .. } | Self::SelectorDecode { .. } => {
                USAGE_DIAGNOSTIC.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<SelectorError> for RunError {
    fn from(err: SelectorError) -> Self {
        match err {
            SelectorError::TooShort { required, actual } => {
                Self::SelectorTooShort { required, actual }
            }
            SelectorError::LengthMismatch { required, actual } => {
                Self::SelectorDecode { required, actual }
            }
        }
    }
}

impl From<ArmError> for RunError {
    fn from(err: ArmError) -> Self {
        match err {
            ArmError::Spawn(e) => Self::Spawn(e),
            ArmError::Allocation { requested } => Self::Allocation { requested },
            other => Self::Internal {
                detail: other.to_string(),
            },
        }
    }
}

/// Run one path of `layout` for `raw_selector`, writing arm output to `out`.
///
/// # Errors
///
/// Returns [`RunError`] on a selector problem or the first arm failure.
/// Output written before the failure stays written.
pub fn run(
    layout: &dyn LayoutV1,
    raw_selector: &[u8],
    config: &HarnessConfig,
    out: &mut dyn Write,
) -> Result<PathTraceV1, RunError> {
    let mut datasets = reference_registry().map_err(|e| RunError::Internal {
        detail: e.to_string(),
    })?;
    let selector = Selector::decode(raw_selector, layout.decision_count(), config.selector_mode)?;
    info!(
        layout = layout.layout_id(),
        selector = %String::from_utf8_lossy(raw_selector),
        "running path"
    );

    let (steps, scratch_counter) = {
        let mut ctx = ArmContext::new(&mut datasets, config, out);
        let steps = Dispatcher::new(layout).dispatch(&selector, &mut ctx)?;
        (steps, ctx.scratch_counter)
    };

    Ok(PathTraceV1 {
        layout_id: layout.layout_id().to_string(),
        selector: selector.raw().to_vec(),
        steps,
        datasets: datasets.snapshot(),
        scratch_counter,
    })
}

/// Command line: one positional selector, nothing else.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Selector string, one character per decision.
    #[arg(allow_hyphen_values = true)]
    selector: OsString,
}

/// Take the selector from `args`, which must hold the program name and
/// exactly one more argument.
///
/// The count is checked on the raw argv, so `--` is an ordinary selector
/// and never an option terminator.
fn parse_selector<I, T>(args: I) -> Result<OsString, RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let [program, selector] = <[OsString; 2]>::try_from(args).map_err(|args| {
        debug!(count = args.len().saturating_sub(1), "wrong argument count");
        RunError::Usage
    })?;
    let cli = Cli::try_parse_from([program, OsString::from("--"), selector]).map_err(|e| {
        debug!(error = %e, "argument parsing failed");
        RunError::Usage
    })?;
    Ok(cli.selector)
}

/// Parse `args`, run `layout`, and return the exit status byte.
///
/// `args` includes the program name. Diagnostics go to `out`.
pub fn run_cli_status<I, T>(layout: &dyn LayoutV1, args: I, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = parse_selector(args).and_then(|selector| {
        let config = HarnessConfig::from_env()?;
        run(layout, selector.as_bytes(), &config, &mut *out)
    });

    match result {
        Ok(trace) => {
            match trace.digest() {
                Ok(digest) => info!(%digest, steps = trace.steps.len(), "path complete"),
                Err(e) => warn!(error = %e, "path trace not hashable"),
            }
            if let Err(e) = out.flush() {
                warn!(error = %e, "flushing stdout failed");
            }
            SUCCESS_EXIT
        }
        Err(err) => {
            warn!(error = %err, "run failed");
            if let Err(e) = writeln!(out, "{}", err.diagnostic()).and_then(|()| out.flush()) {
                warn!(error = %e, "writing diagnostic failed");
            }
            err.exit_code()
        }
    }
}

/// [`run_cli_status`] as a process exit code.
pub fn run_cli<I, T>(layout: &dyn LayoutV1, args: I, out: &mut dyn Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ExitCode::from(run_cli_status(layout, args, out))
}

/// Install the stderr subscriber. Filter from `BRANCHTRACE_LOG`, falling back
/// to `warn`. A second call is a no-op.
pub fn init_logging() {
    let directive = std::env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
