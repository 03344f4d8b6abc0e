//! Currency formatting for axis ticks and summary figures.
//!
//! Both formatters are pinned to USD with en-US conventions whatever language
//! the labels are in.

const COMPACT_UNITS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Compact USD, e.g. `$0.55`, `$1.5K`, `$135K`, `$1.3M`.
///
/// Amounts under a dollar keep two significant digits. Scaled values below ten
/// keep one fraction digit, larger ones are rounded to whole units, and a value
/// that rounds up to 1000 of a unit moves to the next. Zero never carries a sign.
pub fn format_compact_usd(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let abs = value.abs();
    let body = if abs.is_infinite() {
        "$∞".to_string()
    } else if abs < 1.0 {
        format_sub_dollar(abs)
    } else {
        format_scaled(abs)
    };
    let sign = if value < 0.0 && body != "$0" { "-" } else { "" };
    format!("{sign}{body}")
}

fn format_scaled(abs: f64) -> String {
    let mut idx = COMPACT_UNITS
        .iter()
        .rposition(|(scale, _)| abs >= *scale)
        .unwrap_or(0);
    let mut rounded = round_compact(abs / COMPACT_UNITS[idx].0);
    if rounded >= 1000.0 && idx + 1 < COMPACT_UNITS.len() {
        idx += 1;
        rounded = round_compact(abs / COMPACT_UNITS[idx].0);
    }

    let suffix = COMPACT_UNITS[idx].1;
    if rounded.fract() == 0.0 {
        format!("${rounded:.0}{suffix}")
    } else {
        format!("${rounded:.1}{suffix}")
    }
}

fn format_sub_dollar(abs: f64) -> String {
    if abs == 0.0 {
        return "$0".to_string();
    }
    let decimals = (1 - abs.log10().floor() as i32).max(0) as usize;
    let text = format!("{abs:.decimals$}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("${text}")
}

fn round_compact(scaled: f64) -> f64 {
    if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    }
}

/// Whole-dollar USD with thousands separators, e.g. `$135,030`.
pub fn format_currency_whole(value: f64) -> String {
    if !value.is_finite() {
        return format_compact_usd(value);
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}
