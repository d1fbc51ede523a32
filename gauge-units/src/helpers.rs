//! Argument extraction for unit functions

use gauge_core::{GaugeError, Value};
use crate::{parse, Category, Unit};

/// Extract a number, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, GaugeError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a text argument
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, GaugeError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(GaugeError::arg_type(func, arg, "Text", other.type_name())),
    }
}

pub fn extract_category(value: &Value, func: &str, arg: &str) -> Result<Category, GaugeError> {
    let name = extract_text(value, func, arg)?;
    Ok(parse::parse_category(name)?)
}

pub fn extract_unit(value: &Value, func: &str, arg: &str) -> Result<Unit, GaugeError> {
    let name = extract_text(value, func, arg)?;
    Ok(parse::parse_unit(name)?)
}

/// Fail unless at least `expected` arguments were passed
pub fn require_args(args: &[Value], func: &str, expected: usize) -> Result<(), GaugeError> {
    if args.len() < expected {
        return Err(GaugeError::arg_count(func, expected, args.len()));
    }
    Ok(())
}
