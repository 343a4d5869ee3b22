//! Terminal rendering for command results.
//!
//! List lines are laid out to a fixed width: a left marker, the id, the
//! record's headline and detail, then a right-aligned date column. Widths are
//! measured with `unicode-width` so names with wide characters line up.

use chrono::{DateTime, Utc};
use colored::Colorize;
use rosterapp::commands::{CmdMessage, CmdResult, MessageLevel, Section};
use rosterapp::domains::Domain;
use rosterapp::error::FilterWarning;
use rosterapp::index::FieldOptions;
use rosterapp::model::Record;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 5;
const PIN_MARKER: &str = "⚲";
const UNREAD_MARKER: &str = "•";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_warnings(warnings: &[FilterWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

pub(super) fn print_json(result: &CmdResult) -> rosterapp::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub(super) fn print_list(domain: Domain, listed: &[Record], sections: &[Section]) {
    if sections.is_empty() {
        for record in listed {
            println!("{}", render_line(domain, record));
        }
        return;
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            section.name.to_uppercase().bold(),
            format!("({})", section.records.len()).dimmed()
        );
        for record in &section.records {
            println!("{}", render_line(domain, record));
        }
    }
}

pub(super) fn print_detail(domain: Domain, record: &Record) {
    println!("{}", render_detail(domain, record));
}

pub(super) fn print_options(options: &[FieldOptions]) {
    for field in options {
        let values: Vec<String> = field.values.iter().map(|v| v.to_string()).collect();
        println!("{}", field.label.bold());
        println!("  {} {}", "all".dimmed(), values.join(" | "));
    }
}

fn headline(domain: Domain, record: &Record) -> (String, String) {
    let join = |parts: &[String]| -> String {
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" · ")
    };
    match domain {
        Domain::Members => (
            record.text("name"),
            join(&[record.text("role"), record.text("club")]),
        ),
        Domain::Events => (
            record.text("title"),
            join(&[record.text("category"), record.text("venue")]),
        ),
        Domain::Announcements => (
            record.text("title"),
            join(&[record.text("priority"), record.text("author")]),
        ),
        Domain::Gallery => (
            record.text("title"),
            join(&[
                record.text("type"),
                record.text("year"),
                format!("{} views", record.text("views")),
            ]),
        ),
    }
}

/// Right-hand column: event dates are shown as is, everything else as "time ago".
fn date_column(domain: Domain, record: &Record) -> String {
    let raw = match domain {
        Domain::Members => record.text("join_date"),
        Domain::Events => return format!("{:>width$}", record.text("date"), width = TIME_WIDTH),
        Domain::Announcements => record.text("publish_date"),
        Domain::Gallery => record.text("upload_date"),
    };
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(ts) => format_time_ago(ts.with_timezone(&Utc), Utc::now()),
        Err(_) => format!("{:>width$}", raw, width = TIME_WIDTH),
    }
}

fn is_flag(record: &Record, field: &str) -> bool {
    record
        .get_attr(field)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

pub(super) fn render_line(domain: Domain, record: &Record) -> String {
    let left_prefix = match domain {
        Domain::Announcements if is_flag(record, "is_pinned") => format!("  {} ", PIN_MARKER),
        Domain::Announcements if !is_flag(record, "is_read") => {
            format!("  {} ", UNREAD_MARKER)
        }
        _ => "    ".to_string(),
    };
    let id = format!("{:<width$}", format!("{}.", record.id), width = ID_WIDTH);

    let (title, detail) = headline(domain, record);
    let text = if detail.is_empty() {
        title.clone()
    } else {
        format!("{}  {}", title, detail)
    };

    let fixed_width = left_prefix.width() + id.width() + TIME_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let shown = truncate_to_width(&text, available);
    let padding = available.saturating_sub(shown.width());

    // Color the headline only; the detail is dimmed.
    let shown_colored = match shown.strip_prefix(title.as_str()) {
        Some(rest) => format!("{}{}", title.bold(), rest.dimmed()),
        None => shown.bold().to_string(),
    };

    format!(
        "{}{}{}{}  {}",
        left_prefix,
        id.yellow(),
        shown_colored,
        " ".repeat(padding),
        date_column(domain, record).dimmed()
    )
}

pub(super) fn render_detail(domain: Domain, record: &Record) -> String {
    let schema = domain.schema();
    let label_width = schema.fields.iter().map(|f| f.label.width()).max().unwrap_or(0);

    let mut lines = vec![format!("{} {}", "id".dimmed(), record.id)];
    for spec in schema.fields {
        let value = record.text(spec.name);
        if value.is_empty() {
            continue;
        }
        lines.push(format!(
            "{}  {}",
            format!("{:<width$}", spec.label, width = label_width).bold(),
            value
        ));
    }
    lines.join("\n")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
