//! Classification of atom text into integers, floats and symbols.

use std::num::IntErrorKind;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{NumericTarget, RangeError};
use crate::value::Value;


/// Integer if `text` is base-10 i64 syntax, else Float if it is float
/// syntax, else an upper-cased Symbol.
///
/// Numerically shaped text out of range is an error rather than a Symbol.
pub fn classify<S: AsRef<str>>(text: S) -> Result<Value, RangeError> {
    let text = text.as_ref();

    match text.parse::<i64>() {
        Ok(i) => return Ok(Value::Integer(i)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                return Err(range_error(text, NumericTarget::Integer));
            }
            _ => {}
        },
    }

    if let Ok(x) = text.parse::<f64>() {
        // Overflowing literals parse to infinity rather than failing.
        if x.is_infinite() && !is_infinity_literal(text) {
            return Err(range_error(text, NumericTarget::Float));
        }
        return Ok(Value::Float(x));
    }

    if let Some(x) = parse_hex_float(text) {
        if x.is_infinite() {
            return Err(range_error(text, NumericTarget::Float));
        }
        return Ok(Value::Float(x));
    }

    Ok(Value::symbol(text.to_uppercase()))
}

/// Hexadecimal float such as `0x1.8p3`. The binary exponent is required.
fn parse_hex_float(text: &str) -> Option<f64> {
    lazy_static! {
        static ref HEX_FLOAT: Regex =
            Regex::new(r"^([+-]?)0[xX]([[:xdigit:]]*)(?:\.([[:xdigit:]]*))?[pP]([+-]?[0-9]+)$")
                .unwrap();
    }
    let caps = HEX_FLOAT.captures(text)?;
    let int_digits = caps.get(2).map_or("", |m| m.as_str());
    let frac_digits = caps.get(3).map_or("", |m| m.as_str());
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let exp_text = &caps[4];
    let mut exp: i64 = exp_text.parse().unwrap_or(if exp_text.starts_with('-') {
        -MAX_BINARY_EXP
    } else {
        MAX_BINARY_EXP
    });

    // Keep at most 15 hex digits of mantissa; later digits only shift the
    // exponent, with any nonzero one folded into the lowest bit.
    let mut mantissa: u64 = 0;
    let mut sticky = false;
    let digits = int_digits
        .chars()
        .map(|c| (c, false))
        .chain(frac_digits.chars().map(|c| (c, true)));
    for (c, is_frac) in digits {
        let d = u64::from(c.to_digit(16)?);
        if mantissa < 1 << 56 {
            mantissa = mantissa * 16 + d;
            if is_frac {
                exp -= 4;
            }
        } else {
            sticky |= d != 0;
            if !is_frac {
                exp += 4;
            }
        }
    }
    if sticky {
        mantissa |= 1;
    }

    let x = scale_by_power_of_two(mantissa as f64, exp);
    Some(if &caps[1] == "-" { -x } else { x })
}

const MAX_BINARY_EXP: i64 = 1 << 20;

fn scale_by_power_of_two(mut x: f64, exp: i64) -> f64 {
    let mut exp = exp.max(-MAX_BINARY_EXP).min(MAX_BINARY_EXP);
    while exp > 1000 && x.is_finite() {
        x *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 && x != 0.0 {
        x *= 2f64.powi(-1000);
        exp += 1000;
    }
    x * 2f64.powi(exp as i32)
}

fn is_infinity_literal(text: &str) -> bool {
    lazy_static! {
        static ref INFINITY: Regex = Regex::new(r"^[+-]?(?i:inf|infinity)$").unwrap();
    }
    INFINITY.is_match(text)
}

fn range_error(text: &str, target: NumericTarget) -> RangeError {
    RangeError {
        text: text.to_string(),
        target,
    }
}


#[cfg(test)]
#[path = "./atom_test.rs"]
mod atom_test;
