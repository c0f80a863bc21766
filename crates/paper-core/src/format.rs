// File: crates/paper-core/src/format.rs
// Summary: Pluggable tick-label number formatting (decimal point, decimal comma, fixed places).

/// Turns a tick value into its label text.
pub trait TickFormat: Send + Sync {
    fn format(&self, value: f64) -> String;
}

impl<F> TickFormat for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, value: f64) -> String { self(value) }
}

/// Decimal rendering with at most `max_decimals` places and no trailing zeros.
///
/// Values within 1e-12 of zero print as `0`; values within 1e-9 of an integer
/// print as that integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalFormat {
    pub separator: char,
    pub max_decimals: usize,
}

impl DecimalFormat {
    pub const POINT: Self = Self::new('.', 12);
    pub const COMMA: Self = Self::new(',', 12);
    pub const TWO_PLACES: Self = Self::new('.', 2);

    pub const fn new(separator: char, max_decimals: usize) -> Self {
        Self { separator, max_decimals }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self { Self::POINT }
}

impl TickFormat for DecimalFormat {
    fn format(&self, value: f64) -> String {
        let v = if value.abs() < 1e-12 { 0.0 } else { value };
        let rounded = v.round();
        if (v - rounded).abs() < 1e-9 {
            // `as i64` drops the sign of -0.0
            return (rounded as i64).to_string();
        }
        let s = format!("{:.*}", self.max_decimals, v);
        let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
        match s {
            "" | "-" | "-0" => "0".to_string(),
            _ if self.separator == '.' => s.to_string(),
            _ => s.replace('.', &self.separator.to_string()),
        }
    }
}
