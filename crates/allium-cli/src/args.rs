use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::tracing_config::LogFormat;

/// CLI arguments for the allium binary.
#[derive(Parser, Debug)]
#[command(
    name = "allium",
    version,
    about = "Inspect aliased enumeration and flag sets declared in a definition table"
)]
pub struct CliArgs {
    /// Path to the JSON definition table.
    pub table: PathBuf,

    /// Set to inspect. Required when the table declares more than one.
    #[arg(short = 's', long = "set")]
    pub set: Option<String>,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Tracing filter, e.g. `debug` or `allium_core=trace`. Overrides
    /// `ALLIUM_LOG` and `RUST_LOG`.
    #[arg(long = "log", value_name = "FILTER")]
    pub log: Option<String>,

    /// Tracing output format. Overrides `ALLIUM_LOG_FORMAT`.
    #[arg(long = "log-format", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List members in declaration order with their values and aliases.
    List,

    /// Resolve names or aliases. Exits non-zero if any key is unknown.
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Split an integer into the flag members whose bits it sets.
    Decompose {
        /// Decimal, or hexadecimal/binary with a `0x`/`0b` prefix.
        #[arg(value_parser = parse_flag_value)]
        value: u64,
    },

    /// Parse separator-joined names or aliases into one flag value.
    Compose {
        text: String,

        /// Separator between names.
        #[arg(long, default_value = ", ")]
        sep: String,
    },
}

/// Parse a flag value given as decimal, `0x` hex or `0b` binary.
pub fn parse_flag_value(text: &str) -> Result<u64, String> {
    let text = text.trim().replace('_', "");
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = text
        .strip_prefix("0b")
        .or_else(|| text.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (text.as_str(), 10)
    };
    u64::from_str_radix(digits, radix).map_err(|err| format!("invalid flag value '{text}': {err}"))
}
