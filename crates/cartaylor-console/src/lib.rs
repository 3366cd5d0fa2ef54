//! Colorful console output for configurator events.
//!
//! Provides a custom `tracing` layer that formats catalog, rule and
//! validation events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (catalog and rules loaded)
//! - **DEBUG**: Rule edits, selection changes, validation results
//! - **TRACE**: Individual conflicts and missing requirements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "cartaylor=info";

/// Initializes the configurator console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `info` level, e.g.
/// `RUST_LOG=cartaylor_engine=trace`.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::builder().from_env_lossy();
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            for directive in [DEFAULT_DIRECTIVE, "cartaylor_engine=info"] {
                if let Ok(directive) = directive.parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConfiguratorConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats configurator events with colors.
pub struct ConfiguratorConsoleLayer;

impl<S: Subscriber> Layer<S> for ConfiguratorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("cartaylor") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    part: Option<String>,
    target: Option<String>,
    with: Option<String>,
    required: Option<String>,
    category: Option<String>,
    path: Option<String>,
    part_count: Option<u64>,
    category_count: Option<u64>,
    incompatibility_rules: Option<u64>,
    requirement_rules: Option<u64>,
    selected: Option<u64>,
    violation_count: Option<u64>,
    valid: Option<bool>,
    complete: Option<bool>,
}

impl EventVisitor {
    fn set_str(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "part" => self.part = Some(value),
            "target" => self.target = Some(value),
            "with" => self.with = Some(value),
            "required" => self.required = Some(value),
            "category" => self.category = Some(value),
            "path" => self.path = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "part_count" => self.part_count = Some(value),
            "category_count" => self.category_count = Some(value),
            "incompatibility_rules" => self.incompatibility_rules = Some(value),
            "requirement_rules" => self.requirement_rules = Some(value),
            "selected" => self.selected = Some(value),
            "violation_count" => self.violation_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "valid" => self.valid = Some(value),
            "complete" => self.complete = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "catalog_source" => format!(
            "{} Reading catalog {}",
            "▶".bright_green().bold(),
            v.path.as_deref().unwrap_or("?").bright_cyan()
        ),
        "catalog_loaded" => format_catalog_loaded(v),
        "rules_loaded" => format_rules_loaded(v),
        "incompatibility_added" => format_rule_edit(v, "+", "↮"),
        "incompatibility_removed" => format_rule_edit(v, "-", "↮"),
        "requirement_added" => format_rule_edit(v, "+", "→"),
        "requirement_removed" => format_rule_edit(v, "-", "→"),
        "part_selected" => format_selection(v, "selected"),
        "part_unselected" => format_selection(v, "unselected"),
        "configuration_cleared" => format!("{} Configuration cleared", "○".bright_black()),
        "validation" => format_validation(v),
        "conflict" | "missing_requirement" => format_violation(v, event, level),
        "" => v.message.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

fn format_catalog_loaded(v: &EventVisitor) -> String {
    format!(
        "{} Catalog loaded │ {} part types │ {} categories",
        "▶".bright_green().bold(),
        v.part_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.category_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
    )
}

fn format_rules_loaded(v: &EventVisitor) -> String {
    format!(
        "{} Rules loaded │ {} incompatibility rules │ {} requirement rules",
        "▶".bright_green().bold(),
        v.incompatibility_rules.unwrap_or(0).bright_yellow(),
        v.requirement_rules.unwrap_or(0).bright_yellow(),
    )
}

fn format_rule_edit(v: &EventVisitor, sign: &str, arrow: &str) -> String {
    let sign = if sign == "+" {
        sign.bright_green().to_string()
    } else {
        sign.bright_red().to_string()
    };
    format!(
        "{} {} {} {}",
        sign,
        v.part.as_deref().unwrap_or("?").white().bold(),
        arrow.bright_cyan(),
        v.target.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_selection(v: &EventVisitor, verb: &str) -> String {
    let subject = v
        .part
        .as_deref()
        .or(v.category.as_deref())
        .unwrap_or("?");
    format!("{} {} {}", "●".bright_blue(), subject.white().bold(), verb)
}

fn format_validation(v: &EventVisitor) -> String {
    let valid = match v.valid {
        Some(true) => "VALID".bright_green().bold().to_string(),
        Some(false) => "INVALID".bright_red().bold().to_string(),
        None => "?".to_string(),
    };
    let mut output = format!("{} Validation │ {}", "■".bright_cyan().bold(), valid);

    if let Some(complete) = v.complete {
        let text = if complete {
            "COMPLETE".bright_green().to_string()
        } else {
            "INCOMPLETE".yellow().to_string()
        };
        output.push_str(&format!(" │ {}", text));
    }
    if let Some(count) = v.violation_count {
        output.push_str(&format!(" │ {} violations", count.bright_yellow()));
    }
    if let Some(selected) = v.selected {
        output.push_str(&format!(" │ {} selected", selected.white()));
    }
    output
}

fn format_violation(v: &EventVisitor, event: &str, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    let part = v.part.as_deref().unwrap_or("?");
    if event == "conflict" {
        format!(
            "  {} {} is incompatible with {}",
            "✗".bright_red(),
            part,
            v.with.as_deref().unwrap_or("?")
        )
    } else {
        format!(
            "  {} {} requires {}",
            "✗".bright_red(),
            part,
            v.required.as_deref().unwrap_or("?")
        )
    }
}
