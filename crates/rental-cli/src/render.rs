//! Invoice rendering for stdout.

use std::fmt::Write;

use rental_core::{InvoiceSummary, FAMILY_RENTAL_DISCOUNT_BPS};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Renders a summary in the requested format.
pub fn render(summary: &InvoiceSummary, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => render_json(summary),
    }
}

/// Pretty-printed JSON.
pub fn render_json(summary: &InvoiceSummary) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Plain text invoice.
///
/// ```text
/// Invoice 6f0c…  2026-10-14 09:30 UTC
///   1. daily    x1   @ $20.00      $20.00
///   2. hourly   x1   @ $5.00        $5.00
///   3. weekly   x1   @ $60.00      $60.00
/// Subtotal:                        $85.00
/// Family rental discount (30%):   -$25.50
/// Total:                           $59.50
/// ```
pub fn render_text(summary: &InvoiceSummary) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Invoice {}  {}",
        summary.id,
        summary.created_at.format("%Y-%m-%d %H:%M UTC")
    );

    for (index, line) in summary.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<8} x{:<4} @ {:<9} {:>10}",
            index + 1,
            line.kind.to_string(),
            line.units,
            line.unit_price.to_string(),
            line.total_price.to_string()
        );
    }

    let _ = writeln!(out, "{:<32}{:>10}", "Subtotal:", summary.sub_total_price.to_string());

    if summary.applies_for_family_rental_discount {
        let label = format!(
            "Family rental discount ({}%):",
            FAMILY_RENTAL_DISCOUNT_BPS / 100
        );
        let _ = writeln!(out, "{:<32}{:>10}", label, format!("-{}", summary.discount));
    }

    let _ = writeln!(out, "{:<32}{:>10}", "Total:", summary.total_price.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::{Invoice, Money, Rental};

    fn family_invoice() -> Invoice {
        let mut invoice = Invoice::new();
        invoice
            .add_items([Rental::by_day(1), Rental::by_hour(1), Rental::by_week(1)])
            .unwrap();
        invoice
    }

    #[test]
    fn test_text_lists_items_and_totals() {
        let text = render_text(&family_invoice().summary());

        assert!(text.contains("daily"));
        assert!(text.contains("hourly"));
        assert!(text.contains("weekly"));
        assert!(text.contains("$85.00"));
        assert!(text.contains("Family rental discount (30%):"));
        assert!(text.contains("-$25.50"));
        assert!(text.lines().last().unwrap().ends_with("$59.50"));
    }

    #[test]
    fn test_text_omits_discount_line_when_not_eligible() {
        let mut invoice = Invoice::new();
        invoice.add_item(Rental::by_hour(10)).unwrap();

        let text = render_text(&invoice.summary());
        assert!(!text.contains("discount"));
        assert!(text.lines().last().unwrap().ends_with("$50.00"));
    }

    #[test]
    fn test_json_round_trips_summary() {
        let summary = family_invoice().summary();
        let json = render(&summary, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["item_count"], 3);
        assert_eq!(value["items"][0]["kind"], "daily");

        let total: Money = serde_json::from_value(value["total_price"].clone()).unwrap();
        assert_eq!(total, Money::from_cents(5950));
        assert_eq!(value["applies_for_family_rental_discount"], true);
    }
}
