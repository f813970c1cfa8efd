use allium::table::{LoadedSet, MemberView};
use colored::Colorize;

/// Formats command output, optionally with ANSI colors.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `Permission (flag, 3 members)`
    pub fn header(&self, set: &LoadedSet) -> String {
        let summary = format!("({}, {} members)", set.kind(), set.len());
        if self.color {
            format!("{} {}", set.name().bold(), summary.dimmed())
        } else {
            format!("{} {summary}", set.name())
        }
    }

    /// `write = 2 [w]`
    pub fn member(&self, view: &MemberView) -> String {
        let name = view.name.as_deref().unwrap_or("<composite>");
        let mut line = if self.color {
            format!("{} = {}", name.bold(), view.value.cyan())
        } else {
            format!("{name} = {}", view.value)
        };
        if !view.aliases.is_empty() {
            let aliases = format!("[{}]", view.aliases.join(", "));
            line.push(' ');
            if self.color {
                line.push_str(&aliases.dimmed().to_string());
            } else {
                line.push_str(&aliases);
            }
        }
        line
    }

    /// `w -> write = 2 [w]`
    pub fn resolved(&self, key: &str, view: &MemberView) -> String {
        format!("{key} -> {}", self.member(view))
    }

    pub fn missing(&self, key: &str) -> String {
        let message = format!("{key}: no member or alias with this name");
        if self.color {
            message.red().to_string()
        } else {
            message
        }
    }

    /// `5 = read|exec`, with any bits outside the set reported after.
    pub fn composition(&self, value: u64, rendered: &str, uncovered: u64) -> String {
        let mut line = if self.color {
            format!("{} = {}", value.to_string().cyan(), rendered.bold())
        } else {
            format!("{value} = {rendered}")
        };
        if uncovered != 0 {
            let note = format!(" (uncovered bits: {uncovered:#b})");
            if self.color {
                line.push_str(&note.yellow().to_string());
            } else {
                line.push_str(&note);
            }
        }
        line
    }
}
