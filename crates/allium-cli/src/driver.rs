use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

use allium::table::{LoadedSet, MemberView, TableDocument};

use crate::args::{CliArgs, Command};
use crate::reporter::Reporter;

pub const EXIT_SUCCESS: i32 = 0;
/// At least one `lookup` key resolved to nothing.
pub const EXIT_NOT_FOUND: i32 = 1;

/// Load the set named by `args` and run its command, writing to `out`.
///
/// Returns the process exit status.
pub fn run(args: &CliArgs, reporter: &Reporter, out: &mut dyn Write) -> Result<i32> {
    let set = load(args)?;
    debug!(set = set.name(), command = ?args.command, "running command");

    match &args.command {
        Command::List => list(&set, reporter, out),
        Command::Lookup { keys } => lookup(&set, keys, reporter, out),
        Command::Decompose { value } => decompose(&set, *value, reporter, out),
        Command::Compose { text, sep } => compose(&set, text, sep, reporter, out),
    }
}

pub fn load(args: &CliArgs) -> Result<LoadedSet> {
    let document = TableDocument::from_path(&args.table)
        .with_context(|| format!("failed to load {}", args.table.display()))?;
    let table = document.select(args.set.as_deref())?;
    table
        .load()
        .with_context(|| format!("failed to build set `{}`", table.name))
}

fn list(set: &LoadedSet, reporter: &Reporter, out: &mut dyn Write) -> Result<i32> {
    writeln!(out, "{}", reporter.header(set))?;
    for view in set.members() {
        writeln!(out, "  {}", reporter.member(&view))?;
    }
    Ok(EXIT_SUCCESS)
}

fn lookup(
    set: &LoadedSet,
    keys: &[String],
    reporter: &Reporter,
    out: &mut dyn Write,
) -> Result<i32> {
    let mut status = EXIT_SUCCESS;
    for key in keys {
        match set.lookup(key) {
            Some(view) => writeln!(out, "{}", reporter.resolved(key, &view))?,
            None => {
                writeln!(out, "{}", reporter.missing(key))?;
                status = EXIT_NOT_FOUND;
            }
        }
    }
    Ok(status)
}

fn decompose(set: &LoadedSet, value: u64, reporter: &Reporter, out: &mut dyn Write) -> Result<i32> {
    let flags = set
        .as_flags()
        .with_context(|| format!("cannot decompose values of `{}`", set.name()))?;

    for member in flags.decompose(value) {
        writeln!(out, "  {}", reporter.member(&MemberView::from_member(&member)))?;
    }
    let composite = flags.composite(value);
    writeln!(
        out,
        "{}",
        reporter.composition(value, &flags.render(&composite), flags.uncovered(value))
    )?;
    Ok(EXIT_SUCCESS)
}

fn compose(
    set: &LoadedSet,
    text: &str,
    sep: &str,
    reporter: &Reporter,
    out: &mut dyn Write,
) -> Result<i32> {
    let flags = set
        .as_flags()
        .with_context(|| format!("cannot compose values of `{}`", set.name()))?;
    let member = flags.parse(text, sep)?;
    let value = *member.value();
    writeln!(
        out,
        "{}",
        reporter.composition(value, &flags.render(&member), flags.uncovered(value))
    )?;
    Ok(EXIT_SUCCESS)
}
