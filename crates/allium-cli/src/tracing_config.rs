//! Tracing for the allium binary.
//!
//! The filter comes from `--log`, then `ALLIUM_LOG`, then `RUST_LOG`; the
//! format from `--log-format`, then `ALLIUM_LOG_FORMAT`. With no filter from
//! any source no subscriber is installed. Events always go to stderr so they
//! never mix with command output.
//!
//! ```bash
//! allium perms.json --log debug list
//! ALLIUM_LOG=allium_core=trace ALLIUM_LOG_FORMAT=tree allium perms.json compose "r, w"
//! ```

use clap::ValueEnum;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::args::CliArgs;

pub const LOG_VAR: &str = "ALLIUM_LOG";
pub const FORMAT_VAR: &str = "ALLIUM_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Flat `tracing-subscriber` lines.
    #[default]
    Text,
    /// Indented spans via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Case-insensitive; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_str(name.trim(), true).ok()
    }
}

/// Resolved tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_args(args: &CliArgs) -> Self {
        Self::resolve(args.log.clone(), args.log_format, |var| {
            std::env::var(var).ok()
        })
    }

    /// Flags win over `env`. An unknown `ALLIUM_LOG_FORMAT` falls back to
    /// text.
    pub fn resolve(
        log: Option<String>,
        format: Option<LogFormat>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let filter = log.or_else(|| env(LOG_VAR)).or_else(|| env("RUST_LOG"));
        let format = format
            .or_else(|| env(FORMAT_VAR).as_deref().and_then(LogFormat::parse))
            .unwrap_or_default();
        Self { filter, format }
    }

    pub fn env_filter(&self) -> Option<EnvFilter> {
        self.filter
            .as_deref()
            .map(|directives| EnvFilter::builder().parse_lossy(directives))
    }
}

/// Install the global subscriber described by `settings`.
///
/// Returns `false` when tracing is off or a subscriber was already set.
pub fn init_tracing(settings: &LogSettings) -> bool {
    let Some(filter) = settings.env_filter() else {
        return false;
    };

    let text = (settings.format == LogFormat::Text)
        .then(|| fmt::layer().with_writer(std::io::stderr));
    let json = (settings.format == LogFormat::Json)
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let tree = (settings.format == LogFormat::Tree).then(|| {
        tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_indent_lines(true)
            .with_targets(true)
    });

    Registry::default()
        .with(filter)
        .with(text)
        .with(json)
        .with(tree)
        .try_init()
        .is_ok()
}
