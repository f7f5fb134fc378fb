//! Colorful console output for optimization runs.
//!
//! Provides a custom `tracing` layer that formats optimizer events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle (optimize start/end, commit start/end)
//! - **WARN**: Runs stopped by a termination condition
//! - **DEBUG**: Per-shift decisions, printed by other subscribers only

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `carerota_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = match "carerota_solver=info".parse::<Directive>() {
            Ok(directive) => EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
            Err(_) => EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RotaConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats optimizer events with colors.
pub struct RotaConsoleLayer;

impl<S: Subscriber> Layer<S> for RotaConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("carerota_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    organization: Option<String>,
    staff_count: Option<u64>,
    shift_count: Option<u64>,
    open_count: Option<u64>,
    time_off_count: Option<u64>,
    score: Option<f64>,
    assigned: Option<u64>,
    unassigned: Option<u64>,
    conflicts: Option<u64>,
    duration_ms: Option<u64>,
    processed: Option<u64>,
    skipped: Option<u64>,
    assignments: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "organization" => self.organization = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "staff_count" => self.staff_count = Some(value),
            "shift_count" => self.shift_count = Some(value),
            "open_count" => self.open_count = Some(value),
            "time_off_count" => self.time_off_count = Some(value),
            "assigned" => self.assigned = Some(value),
            "unassigned" => self.unassigned = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "processed" => self.processed = Some(value),
            "skipped" => self.skipped = Some(value),
            "assignments" => self.assignments = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.score = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "organization" => self.organization = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "optimize_start" => format_optimize_start(v),
        "optimize_end" => format_optimize_end(v),
        "terminated_early" => format_terminated_early(v),
        "commit_start" => format_commit_start(v),
        "commit_end" => format_commit_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_optimize_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} staff ({}), shifts ({}), open ({}), approved time off ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Optimizer]".bright_cyan(),
        count(v.staff_count).bright_yellow(),
        count(v.shift_count).bright_yellow(),
        count(v.open_count).bright_yellow(),
        count(v.time_off_count).bright_yellow(),
    )
}

fn format_optimize_end(v: &EventVisitor) -> String {
    let score = v.score.unwrap_or(0.0);
    let conflicts = v.conflicts.unwrap_or(0);
    let unassigned = v.unassigned.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Optimization ended: time spent ({}), assigned ({}), unassigned ({}), conflicts ({}), score ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Optimizer]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.assigned).white(),
        count(v.unassigned).white(),
        count(v.conflicts).white(),
        format_score(score),
    );

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');

    let status_text = if conflicts == 0 && unassigned == 0 {
        "ALL SHIFTS COVERED"
    } else if conflicts == 0 {
        "SHIFTS LEFT OPEN"
    } else {
        "CONFLICTS IN SCHEDULE"
    };
    let status_colored = if conflicts == 0 && unassigned == 0 {
        format!("  {}  ", status_text).bright_green().bold().to_string()
    } else if conflicts == 0 {
        format!("  {}  ", status_text).yellow().bold().to_string()
    } else {
        format!("  {}  ", status_text).bright_red().bold().to_string()
    };
    let status_padding = 56 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36.1}  {}",
        "║".bright_cyan(),
        "Final Score:",
        score,
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_terminated_early(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Terminated early: processed ({}), left open ({})",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Optimizer]".bright_cyan(),
        count(v.processed).white(),
        count(v.skipped).yellow(),
    )
}

fn format_commit_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Committing {} assignments for {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Service]".bright_cyan(),
        count(v.assignments).bright_yellow(),
        v.organization.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_commit_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Committed assignments for {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Service]".bright_cyan(),
        v.organization.as_deref().unwrap_or("?").white().bold(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: f64) -> String {
    let text = format!("{:.1}", score);
    if score >= 90.0 {
        text.bright_green().to_string()
    } else if score >= 60.0 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("shift_assigned".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_optimize_start_lists_counts() {
        let visitor = EventVisitor {
            event: Some("optimize_start".to_string()),
            staff_count: Some(12),
            shift_count: Some(1_250),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("12"));
        assert!(line.contains("1,250"));
    }
}
