//! Unit conversion functions for Gauge

use gauge_plugin::prelude::*;
use std::collections::HashMap;
use crate::helpers::{extract_category, extract_number, extract_text, extract_unit, require_args};
use crate::{parse, registry, ConversionRequest, Unit};

fn names(units: impl IntoIterator<Item = Unit>) -> Value {
    Value::List(units.into_iter().map(|u| Value::from(u.name())).collect())
}

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_EXAMPLES: [&str; 1] = [
    "list_categories() → [temperature, length, volume]",
];

static LIST_CATEGORIES_RELATED: [&str; 2] = ["list_units", "default_unit"];

impl FunctionPlugin for ListCategories {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_categories",
            description: "List the quantity categories in display order",
            usage: "list_categories()",
            args: &[],
            returns: "List<Text>",
            examples: &LIST_CATEGORIES_EXAMPLES,
            category: "units",
            related: &LIST_CATEGORIES_RELATED,
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(registry::list_categories()
            .into_iter()
            .map(|c| Value::from(c.name()))
            .collect())
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("category", "Text", "Category name: \"temperature\", \"length\" or \"volume\""),
];

static LIST_UNITS_EXAMPLES: [&str; 2] = [
    "list_units(\"temperature\") → [celsius, fahrenheit, kelvin]",
    "list_units(\"volume\") → [ml, pints, gallons]",
];

static LIST_UNITS_RELATED: [&str; 2] = ["list_categories", "default_unit"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List the units of a category in display order",
            usage: "list_units(category)",
            args: &LIST_UNITS_ARGS,
            returns: "List<Text>",
            examples: &LIST_UNITS_EXAMPLES,
            category: "units",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, "list_units", 1) {
            return Value::Error(e);
        }

        match extract_category(&args[0], "list_units", "category") {
            Ok(category) => names(registry::units_for(category)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ default_unit ============

pub struct DefaultUnit;

static DEFAULT_UNIT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("category", "Text", "Category name"),
];

static DEFAULT_UNIT_EXAMPLES: [&str; 2] = [
    "default_unit(\"length\") → meters",
    "default_unit(\"volume\") → ml",
];

static DEFAULT_UNIT_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for DefaultUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "default_unit",
            description: "Unit selected when switching to a category",
            usage: "default_unit(category)",
            args: &DEFAULT_UNIT_ARGS,
            returns: "Text",
            examples: &DEFAULT_UNIT_EXAMPLES,
            category: "units",
            related: &DEFAULT_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, "default_unit", 1) {
            return Value::Error(e);
        }

        match extract_category(&args[0], "default_unit", "category") {
            Ok(category) => Value::from(registry::default_unit(category).name()),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ is_valid_unit ============

pub struct IsValidUnit;

static IS_VALID_UNIT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("category", "Text", "Category name"),
    ArgMeta::required("unit", "Text", "Unit name or symbol"),
];

static IS_VALID_UNIT_EXAMPLES: [&str; 2] = [
    "is_valid_unit(\"length\", \"ft\") → true",
    "is_valid_unit(\"length\", \"kelvin\") → false",
];

static IS_VALID_UNIT_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for IsValidUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_valid_unit",
            description: "Check whether a unit belongs to a category",
            usage: "is_valid_unit(category, unit)",
            args: &IS_VALID_UNIT_ARGS,
            returns: "Bool",
            examples: &IS_VALID_UNIT_EXAMPLES,
            category: "units",
            related: &IS_VALID_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, "is_valid_unit", 2) {
            return Value::Error(e);
        }

        let category = match extract_category(&args[0], "is_valid_unit", "category") {
            Ok(c) => c,
            Err(e) => return Value::Error(e),
        };

        // Unknown names are simply not members
        match extract_text(&args[1], "is_valid_unit", "unit") {
            Ok(name) => Value::Bool(
                parse::parse_unit(name).is_ok_and(|unit| registry::is_valid(category, unit))
            ),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("category", "Text", "Category of both units"),
    ArgMeta::required("from", "Text", "Source unit (e.g., \"celsius\")"),
    ArgMeta::required("to", "Text", "Target unit (e.g., \"fahrenheit\")"),
    ArgMeta::required("value", "Number", "Value to convert"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(\"temperature\", \"celsius\", \"fahrenheit\", 0) → 32",
    "convert(\"length\", \"miles\", \"feet\", 1) → 5280",
    "convert(\"volume\", \"gallons\", \"pints\", 1) → 8",
];

static CONVERT_RELATED: [&str; 2] = ["list_units", "unit_info"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value between two units of the same category",
            usage: "convert(category, from, to, value)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, "convert", 4) {
            return Value::Error(e);
        }

        let category = match extract_category(&args[0], "convert", "category") {
            Ok(c) => c,
            Err(e) => return Value::Error(e),
        };

        let from = match extract_unit(&args[1], "convert", "from") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        let to = match extract_unit(&args[2], "convert", "to") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        let value = match extract_number(&args[3], "convert", "value") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        match ConversionRequest::new(category, from, to, value).evaluate_with(&ctx.config) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ unit_info ============

pub struct UnitInfo;

static UNIT_INFO_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "Unit name or symbol"),
];

static UNIT_INFO_EXAMPLES: [&str; 2] = [
    "unit_info(\"ml\") → {name: ml, symbol: mL, category: volume}",
    "unit_info(\"°F\") → {name: fahrenheit, symbol: °F, category: temperature}",
];

static UNIT_INFO_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for UnitInfo {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "unit_info",
            description: "Describe a unit: canonical name, symbol and category",
            usage: "unit_info(unit)",
            args: &UNIT_INFO_ARGS,
            returns: "Object {name: Text, symbol: Text, category: Text}",
            examples: &UNIT_INFO_EXAMPLES,
            category: "units",
            related: &UNIT_INFO_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if let Err(e) = require_args(args, "unit_info", 1) {
            return Value::Error(e);
        }

        let unit = match extract_unit(&args[0], "unit_info", "unit") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        let mut obj = HashMap::new();
        obj.insert("name".to_string(), Value::from(unit.name()));
        obj.insert("symbol".to_string(), Value::from(unit.symbol()));
        obj.insert("category".to_string(), Value::from(unit.category().name()));
        Value::Object(obj)
    }
}
