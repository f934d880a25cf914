//! Harness configuration: fixed defaults plus a narrow env overlay.
//!
//! Every field defaults to the value the harness binaries run with. The
//! only environment input that can change behavior is the selector mode;
//! the log filter is read separately by the CLI entry point and only affects
//! stderr.

use std::path::PathBuf;
use std::time::Duration;

use crate::selector::SelectorMode;

/// Environment variable overriding [`HarnessConfig::selector_mode`].
pub const ENV_SELECTOR_MODE: &str = "BRANCHTRACE_SELECTOR_MODE";

/// Environment variable holding the `tracing` filter directive.
pub const ENV_LOG: &str = "BRANCHTRACE_LOG";

/// Default log filter when [`ENV_LOG`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `argv[0]` handed to every spawned child.
pub const REFERENCE_ARGV0: &str = "--version";

/// An external executable the process-control arms launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTarget {
    /// Line printed to stdout before the spawn.
    pub label: String,
    /// Absolute path of the executable.
    pub program: PathBuf,
    /// The child's `argv[0]`. No further arguments are passed.
    pub argv0: String,
}

impl SpawnTarget {
    /// A target whose `argv[0]` is `--version`.
    #[must_use]
    pub fn new(label: &str, program: impl Into<PathBuf>) -> Self {
        Self {
            label: label.to_string(),
            program: program.into(),
            argv0: REFERENCE_ARGV0.to_string(),
        }
    }
}

/// Operands for the single-shot indirect arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleShotConfig {
    /// Sign predicate input: `> 0` selects add.
    pub operator: i64,
    /// Left operand.
    pub lhs: i64,
    /// Right operand.
    pub rhs: i64,
}

/// Window for the substring arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringConfig {
    /// 1-based start position.
    pub position: usize,
    /// Bytes to copy.
    pub length: usize,
}

/// Everything an arm may read besides the dataset registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Selector length check.
    pub selector_mode: SelectorMode,
    /// Executables launched by the process-control arms, in order.
    pub spawn_targets: Vec<SpawnTarget>,
    /// Sleep between reap sweeps in batch mode. Not a timeout.
    pub batch_poll_interval: Duration,
    /// Single-shot indirect arm operands.
    pub single_shot: SingleShotConfig,
    /// Accumulator loop sentinel.
    pub loop_sentinel: u32,
    /// Primes requested from the prime arm.
    pub prime_count: u32,
    /// Terms requested from the Fibonacci arm.
    pub fibonacci_count: usize,
    /// Target of the binary-search arm.
    pub search_target: i32,
    /// Substring arm window.
    pub substring: SubstringConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            selector_mode: SelectorMode::Exact,
            spawn_targets: vec![
                SpawnTarget::new("ls", "/bin/ls"),
                SpawnTarget::new("grep", "/bin/grep"),
                SpawnTarget::new("find", "/usr/bin/find"),
            ],
            batch_poll_interval: Duration::from_millis(1),
            single_shot: SingleShotConfig {
                operator: 1,
                lhs: 2,
                rhs: 1,
            },
            loop_sentinel: branchtrace_kernel::indirect::accumulator::REFERENCE_SENTINEL,
            prime_count: 10,
            fibonacci_count: 10,
            search_target: 2,
            substring: SubstringConfig {
                position: 3,
                length: 10,
            },
        }
    }
}

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// [`ENV_SELECTOR_MODE`] held an unknown value.
    #[error("BRANCHTRACE_SELECTOR_MODE={value} is not one of: exact, prefix")]
    InvalidSelectorMode { value: String },
}

impl HarnessConfig {
    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override has an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override has an unknown value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_SELECTOR_MODE) {
            config.selector_mode = parse_selector_mode(&value)?;
        }
        Ok(config)
    }
}

fn parse_selector_mode(value: &str) -> Result<SelectorMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "exact" => Ok(SelectorMode::Exact),
        "prefix" => Ok(SelectorMode::Prefix),
        _ => Err(ConfigError::InvalidSelectorMode {
            value: value.to_string(),
        }),
    }
}
