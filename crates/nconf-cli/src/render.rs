use std::fmt::{self, Write};

use colored::Colorize;
use nconf_diff::{ConfigDiff, LinePair};
use nconf_tree::{Config, LineNode};

pub fn render_lines(out: &mut impl Write, config: &Config, lines: &[&LineNode]) -> fmt::Result {
    for line in lines {
        write!(
            out,
            "{:>5}  {}{}",
            line.line_num,
            "  ".repeat(line.level),
            line.text()
        )?;
        if line.has_children() {
            write!(
                out,
                "  {}",
                format!(
                    "[{} children, {} total]",
                    line.direct_children_count(),
                    line.all_children_count()
                )
                .dimmed()
            )?;
        }
        out.write_char('\n')?;
    }
    for anomaly in config.anomalies() {
        writeln!(out, "{} {}", "warning:".yellow(), anomaly)?;
    }
    Ok(())
}

pub fn render_matches(out: &mut impl Write, config: &Config, lines: &[&LineNode]) -> fmt::Result {
    for line in lines {
        writeln!(out, "{:>5}  {}", line.line_num, config.path(line))?;
    }
    Ok(())
}

pub fn render_diff(out: &mut impl Write, diff: &ConfigDiff<'_>) -> fmt::Result {
    if diff.is_empty() {
        return writeln!(out, "No differences.");
    }

    for line in &diff.deleted {
        writeln!(out, "{}{}", indent(line), format!("- {}", line.text()).red())?;
    }
    for line in &diff.added {
        writeln!(out, "{}{}", indent(line), format!("+ {}", line.text()).green())?;
    }
    for pair in &diff.modified_root {
        render_pair(out, pair)?;
    }
    for group in &diff.modified_children {
        let parent = group.parent;
        let title = if parent.is_modified() {
            format!("{} => {}", parent.reference.text(), parent.compared.text())
        } else {
            parent.reference.text()
        };
        writeln!(
            out,
            "{}{} {}",
            indent(parent.reference),
            "@".cyan(),
            title.bold()
        )?;
        for pair in &group.modified {
            render_pair(out, pair)?;
        }
    }
    Ok(())
}

fn render_pair(out: &mut impl Write, pair: &LinePair<'_>) -> fmt::Result {
    let pad = indent(pair.reference);
    writeln!(out, "{pad}{}", format!("~ {}", pair.reference.text()).yellow())?;
    writeln!(out, "{pad}{}", format!("  {}", pair.compared.text()).yellow())
}

fn indent(line: &LineNode) -> String {
    "  ".repeat(line.level)
}
