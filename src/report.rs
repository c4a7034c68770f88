//! Report formatting and printing utilities.
//!
//! This module is separate from the verification logic so bundlelint can be
//! used as a library without printing side effects. All renderings sort the
//! discrepancy list first, making output stable across runs even though the
//! unexpected-key tail comes out of a hash set.

use colored::Colorize;
use serde_json::{Value, json};

use crate::discrepancy::Discrepancy;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn sorted(discrepancies: &[Discrepancy]) -> Vec<Discrepancy> {
    let mut sorted = discrepancies.to_vec();
    sorted.sort();
    sorted
}

/// Renders discrepancies to one diagnostic line each, in stable order.
pub fn render_lines(discrepancies: &[Discrepancy]) -> Vec<String> {
    sorted(discrepancies)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Serializes a discrepancy report to JSON for tool integration.
pub fn to_json(discrepancies: &[Discrepancy]) -> Value {
    let sorted = sorted(discrepancies);
    json!({
        "total": sorted.len(),
        "discrepancies": sorted
            .iter()
            .map(|d| {
                json!({
                    "kind": d.kind,
                    "keyType": d.key_type,
                    "locale": d.locale.as_ref().map(ToString::to_string),
                    "key": if d.key.is_empty() { Value::Null } else { Value::from(d.key.clone()) },
                    "rendered": d.to_string(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Print discrepancies in a cargo-style format, with a count summary.
pub fn print_report(discrepancies: &[Discrepancy]) {
    let sorted = sorted(discrepancies);

    for discrepancy in &sorted {
        println!(
            "{}: {} [{}]  {}",
            "error".bold().red(),
            discrepancy.description(),
            discrepancy.locale_label(),
            discrepancy.kind.to_string().dimmed().cyan()
        );
    }

    if !sorted.is_empty() {
        println!("\n{} {}", FAILURE_MARK.red(), summary(sorted.len()).red());
    }
}

fn summary(count: usize) -> String {
    format!(
        "{} {}",
        count,
        if count == 1 {
            "discrepancy"
        } else {
            "discrepancies"
        }
    )
}

/// Print a success message when a key type verified cleanly.
///
/// Displays the number of locales checked to give the user confidence that
/// the verification actually covered the expected scope.
pub fn print_success(key_type: &str, locale_count: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        success_message(key_type, locale_count).green()
    );
}

fn success_message(key_type: &str, locale_count: usize) -> String {
    format!(
        "Verified '{}' against {} locale {} - no discrepancies found",
        key_type,
        locale_count,
        if locale_count == 1 {
            "catalog"
        } else {
            "catalogs"
        }
    )
}
