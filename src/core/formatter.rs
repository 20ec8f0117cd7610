//! Locale-aware currency formatting.
//!
//! The fixed target is Peruvian Sol in the es-PE locale: `"S/"` before the
//! value, `,` grouping, `.` decimals, two decimal places. `format_with`
//! takes an explicit `CurrencyFormat` so the table is pinned in one place.

/// Where the currency symbol goes relative to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// Formatting table for one locale/currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub group_separator: char,
    pub decimal_separator: char,
    pub decimal_places: u8,
}

/// es-PE / PEN, the locale pair this application is fixed to.
pub const PEN_ES_PE: CurrencyFormat = CurrencyFormat {
    symbol: "S/",
    position: SymbolPosition::Before,
    group_separator: ',',
    decimal_separator: '.',
    decimal_places: 2,
};

impl Default for CurrencyFormat {
    fn default() -> Self {
        PEN_ES_PE
    }
}

/// Formats an amount as Peruvian Sol, e.g. `format(1000.0)` -> `"S/ 1,000.00"`.
///
/// Total function: NaN and infinities render as placeholders (`"S/ NaN"`,
/// `"S/ ∞"`) instead of panicking.
pub fn format(amount: f64) -> String {
    format_with(amount, &PEN_ES_PE)
}

/// Formats an amount according to an explicit currency table.
pub fn format_with(amount: f64, spec: &CurrencyFormat) -> String {
    if amount.is_nan() {
        return place_symbol("NaN", false, spec);
    }
    if amount.is_infinite() {
        return place_symbol("∞", amount.is_sign_negative(), spec);
    }

    let digits = format!("{:.prec$}", amount.abs(), prec = spec.decimal_places as usize);
    let grouped = group_integer_part(&digits, spec);

    // -0.004 rounds to 0.00; don't render a sign on a zero result.
    let negative = amount < 0.0 && grouped.chars().any(|c| ('1'..='9').contains(&c));
    place_symbol(&grouped, negative, spec)
}

/// Legacy entry point mirroring the permissive coercion of the original
/// helper: unparseable input renders the NaN placeholder, empty input
/// renders zero. New code should go through `validation::parse_amount`.
pub fn format_lossy(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return format(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => format(value),
        Err(_) => format(f64::NAN),
    }
}

fn place_symbol(value: &str, negative: bool, spec: &CurrencyFormat) -> String {
    let with_symbol = match spec.position {
        SymbolPosition::Before => format!("{} {}", spec.symbol, value),
        SymbolPosition::After => format!("{} {}", value, spec.symbol),
    };

    if negative {
        format!("-{}", with_symbol)
    } else {
        with_symbol
    }
}

/// Inserts the grouping separator into the integer part of an unsigned
/// decimal string produced by `format!("{:.N}")`.
fn group_integer_part(s: &str, spec: &CurrencyFormat) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (s, None),
    };

    let mut result = String::new();
    let len = integer_part.len();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(spec.group_separator);
        }
        result.push(c);
    }

    if let Some(decimal) = decimal_part {
        result.push(spec.decimal_separator);
        result.push_str(decimal);
    }

    result
}
