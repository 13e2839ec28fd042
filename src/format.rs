use std::fmt::Display;

/// Significant digits kept when printing a value.
const PRECISION: i32 = 6;

/// Prints a float with at most six significant digits and no trailing zeros,
/// switching to exponent notation (`1e+21`, `1e-05`) for very large or small
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significant(pub f64);

impl Display for Significant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0. { "-inf" } else { "inf" });
        }

        // exponent after rounding to the kept digits, so 999999.5 counts as 1e+06
        let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or(std::fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| std::fmt::Error)?;

        if (-4..PRECISION).contains(&exponent) {
            let decimals = (PRECISION - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_zeros(&fixed))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_zeros(mantissa),
                exponent.unsigned_abs()
            )
        }
    }
}

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
