//! Parsing of prompted donation amounts.

/// Parse the raw answer to the amount prompt.
///
/// Returns `None` for a dismissed prompt, an empty or non-numeric answer,
/// and any value that is not a finite number greater than zero.
pub fn parse_amount(response: Option<&str>) -> Option<f64> {
    let amount: f64 = response?.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}
