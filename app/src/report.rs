// In app/src/report.rs

use engine::{ChartReport, SignalReport};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Prints the chart view: heading, key figures and the most recent rows.
pub fn print_chart_report(report: &ChartReport, rows: usize) {
    let summary = &report.summary;

    println!("\n--- Chart · {} · {} / {} ---", report.display_name, report.period, report.interval);
    println!("Loaded {} bars.", report.series.len());
    println!("---------------------------------");
    println!(
        "  Close          : {} {}",
        format_price(summary.last_close),
        format_change(summary.change, summary.change_pct)
    );
    println!(
        "  {}-bar average : {}",
        summary.short_window,
        format_average(summary.ma_short)
    );
    println!(
        "  {}-bar average : {}",
        summary.long_window,
        format_average(summary.ma_long)
    );
    println!("---------------------------------");

    let recent = &report.recent[report.recent.len().saturating_sub(rows)..];
    if recent.is_empty() {
        return;
    }
    println!("{:<12} {:>12} {:>12} {:>12} {:>12} {:>14}", "Date", "Open", "High", "Low", "Close", "Volume");
    for bar in recent {
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>12} {:>14}",
            bar.timestamp.format("%Y-%m-%d"),
            format_price(bar.open),
            format_price(bar.high),
            format_price(bar.low),
            format_price(bar.close),
            bar.volume
        );
    }
}

/// Prints the momentum panel.
pub fn print_signal_report(report: &SignalReport) {
    println!("\n--- Momentum · {} ---", report.display_name);
    println!("  Signal  : {}", report.label);
    println!(
        "  MA{} / MA{} : {} / {} ({} bars)",
        report.short_window,
        report.long_window,
        format_price(report.short_avg),
        format_price(report.long_avg),
        report.observations
    );
}

/// Formats a price with thousands separators and two decimals (e.g. "1,234.50").
pub fn format_price(value: Decimal) -> String {
    let fixed = format!("{:.2}", value.round_dp(2));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Formats a change as "+1.23 (+0.45%)".
pub fn format_change(change: Decimal, change_pct: f64) -> String {
    format!("{:+.2} ({:+.2}%)", change.to_f64().unwrap_or(0.0), change_pct)
}

/// A trailing average, or a placeholder when the series is too short.
pub fn format_average(value: Option<Decimal>) -> String {
    match value {
        Some(avg) => format_price(avg),
        None => "insufficient data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(dec!(0)), "0.00");
        assert_eq!(format_price(dec!(187.456)), "187.46");
        assert_eq!(format_price(dec!(1234.5)), "1,234.50");
        assert_eq!(format_price(dec!(71500)), "71,500.00");
        assert_eq!(format_price(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_price(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn change_carries_explicit_sign() {
        assert_eq!(format_change(dec!(1.5), 0.75), "+1.50 (+0.75%)");
        assert_eq!(format_change(dec!(-2), -1.0), "-2.00 (-1.00%)");
        assert_eq!(format_change(dec!(0), 0.0), "+0.00 (+0.00%)");
    }

    #[test]
    fn missing_average_is_labelled() {
        assert_eq!(format_average(None), "insufficient data");
        assert_eq!(format_average(Some(dec!(101.666))), "101.67");
    }
}
