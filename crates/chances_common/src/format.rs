//! Display formatting for raw probabilities.

/// Format a probability fraction as `"1 in N"` with comma grouping.
///
/// N is `1/p` rounded to the nearest integer, clamped to at least 1.
/// Non-finite or non-positive fractions, and fractions too small for their
/// reciprocal to fit an integer, render as `"1 in ∞"`.
pub fn one_in(p: f64) -> String {
    if !p.is_finite() || p <= 0.0 {
        return "1 in ∞".to_string();
    }

    let n = (1.0 / p).round();
    if n > u64::MAX as f64 {
        return "1 in ∞".to_string();
    }

    format!("1 in {}", group_thousands(n.max(1.0) as u64))
}

/// Locale-independent thousands grouping with commas.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(one_in(1.0 / 9_800_000.0), "1 in 9,800,000");
        assert_eq!(one_in(1.0 / 1_000.0), "1 in 1,000");
        assert_eq!(one_in(0.5), "1 in 2");
    }

    #[test]
    fn small_reciprocals_need_no_grouping() {
        assert_eq!(one_in(0.01), "1 in 100");
        assert_eq!(one_in(1.0 / 42.0), "1 in 42");
    }

    #[test]
    fn rounds_to_nearest_integer() {
        assert_eq!(one_in(1.0 / 2.4), "1 in 2");
        assert_eq!(one_in(1.0 / 2.5), "1 in 3"); // round half away from zero
    }

    #[test]
    fn clamps_degenerate_inputs() {
        assert_eq!(one_in(0.0), "1 in ∞");
        assert_eq!(one_in(-0.25), "1 in ∞");
        assert_eq!(one_in(f64::NAN), "1 in ∞");
        assert_eq!(one_in(f64::INFINITY), "1 in ∞");
        // p > 1 would round to "1 in 0" without the clamp
        assert_eq!(one_in(3.0), "1 in 1");
    }

    #[test]
    fn round_trips_within_rounding_tolerance() {
        for n in [7u64, 12_345, 9_800_000, 174_000_000] {
            let formatted = one_in(1.0 / n as f64);
            let parsed: u64 = formatted
                .trim_start_matches("1 in ")
                .replace(',', "")
                .parse()
                .unwrap();
            assert_eq!(parsed, n);
        }
    }
}
