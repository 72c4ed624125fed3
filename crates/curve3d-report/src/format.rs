//! Plain-text number formatting for the report.

use curve3d_core::DVec3;

/// Significant digits printed for every number.
const PRECISION: usize = 6;

/// Format `v` with six significant digits, trailing zeros removed.
///
/// Switches to scientific notation when the decimal exponent is below -4
/// or at least six, like C's `%g`.
pub fn format_general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first gives the exponent after carry.
    let sci = format!("{:.*e}", PRECISION - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

/// Format a vector as `(x,y,z)`.
pub fn format_vec3(v: DVec3) -> String {
    format!(
        "({},{},{})",
        format_general(v.x),
        format_general(v.y),
        format_general(v.z)
    )
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
