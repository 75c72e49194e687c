//! Conversion engine: categories, units, lookup tables, and `convert`.
//!
//! Length and weight are table-driven scalar multiplications. Temperature
//! is affine and cannot be expressed as a single factor, so each directed
//! pair maps to its own formula. Identity conversions short-circuit before
//! any lookup, so neither table carries self-to-self entries.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::shared::errors::{ConvertError, ConvertResult, ParseCategoryError, ParseUnitError};

/// Unit categories for type-safe conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
    ];
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for UnitCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(UnitCategory::Length),
            "weight" => Ok(UnitCategory::Weight),
            "temperature" => Ok(UnitCategory::Temperature),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// A unit name scoped to exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    // Length
    Meters,
    Kilometers,
    Feet,
    Miles,
    // Weight
    Kilograms,
    Grams,
    Pounds,
    Ounces,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Meters | Unit::Kilometers | Unit::Feet | Unit::Miles => UnitCategory::Length,
            Unit::Kilograms | Unit::Grams | Unit::Pounds | Unit::Ounces => UnitCategory::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => UnitCategory::Temperature,
        }
    }

    /// Short symbol for compact display (e.g. dropdown badges)
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Feet => "ft",
            Unit::Miles => "mi",
            Unit::Kilograms => "kg",
            Unit::Grams => "g",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
            Unit::Kelvin => "K",
        }
    }

    /// Canonical display name
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Feet => "Feet",
            Unit::Miles => "Miles",
            Unit::Kilograms => "Kilograms",
            Unit::Grams => "Grams",
            Unit::Pounds => "Pounds",
            Unit::Ounces => "Ounces",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    // Accepts canonical names, common singulars, and short symbols
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Unit::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Unit::Kilometers),
            "ft" | "foot" | "feet" => Ok(Unit::Feet),
            "mi" | "mile" | "miles" => Ok(Unit::Miles),
            "kg" | "kilogram" | "kilograms" => Ok(Unit::Kilograms),
            "g" | "gram" | "grams" => Ok(Unit::Grams),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pounds),
            "oz" | "ounce" | "ounces" => Ok(Unit::Ounces),
            "c" | "°c" | "celsius" => Ok(Unit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "k" | "kelvin" => Ok(Unit::Kelvin),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// Valid unit set for a category, in dropdown order
pub const fn units_for(category: UnitCategory) -> &'static [Unit] {
    match category {
        UnitCategory::Length => &[Unit::Meters, Unit::Kilometers, Unit::Feet, Unit::Miles],
        UnitCategory::Weight => &[Unit::Kilograms, Unit::Grams, Unit::Pounds, Unit::Ounces],
        UnitCategory::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
    }
}

/// All units across all categories
pub fn all_units() -> impl Iterator<Item = Unit> {
    UnitCategory::ALL
        .into_iter()
        .flat_map(|category| units_for(category).iter().copied())
}

type Formula = fn(f64) -> f64;

/// Per-category conversion strategy
///
/// Length and weight hold scalar factors, temperature holds affine
/// formulas. Keyed by directed (from, to) pair; identity pairs are
/// intentionally absent.
enum ConversionTable {
    Factors(HashMap<(Unit, Unit), f64>),
    Formulas(HashMap<(Unit, Unit), Formula>),
}

static CONVERSION_TABLES: Lazy<HashMap<UnitCategory, ConversionTable>> = Lazy::new(|| {
    let mut length: HashMap<(Unit, Unit), f64> = HashMap::new();
    length.insert((Unit::Meters, Unit::Kilometers), 0.001);
    length.insert((Unit::Meters, Unit::Feet), 3.28084);
    length.insert((Unit::Meters, Unit::Miles), 0.000621371);
    length.insert((Unit::Kilometers, Unit::Meters), 1000.0);
    length.insert((Unit::Kilometers, Unit::Feet), 3280.84);
    length.insert((Unit::Kilometers, Unit::Miles), 0.621371);
    length.insert((Unit::Feet, Unit::Meters), 0.3048);
    length.insert((Unit::Feet, Unit::Kilometers), 0.0003048);
    length.insert((Unit::Feet, Unit::Miles), 0.000189394);
    length.insert((Unit::Miles, Unit::Meters), 1609.34);
    length.insert((Unit::Miles, Unit::Kilometers), 1.60934);
    length.insert((Unit::Miles, Unit::Feet), 5280.0);

    let mut weight: HashMap<(Unit, Unit), f64> = HashMap::new();
    weight.insert((Unit::Kilograms, Unit::Grams), 1000.0);
    weight.insert((Unit::Kilograms, Unit::Pounds), 2.20462);
    weight.insert((Unit::Kilograms, Unit::Ounces), 35.274);
    weight.insert((Unit::Grams, Unit::Kilograms), 0.001);
    weight.insert((Unit::Grams, Unit::Pounds), 0.00220462);
    weight.insert((Unit::Grams, Unit::Ounces), 0.035274);
    weight.insert((Unit::Pounds, Unit::Kilograms), 0.453592);
    weight.insert((Unit::Pounds, Unit::Grams), 453.592);
    weight.insert((Unit::Pounds, Unit::Ounces), 16.0);
    weight.insert((Unit::Ounces, Unit::Kilograms), 0.0283495);
    weight.insert((Unit::Ounces, Unit::Grams), 28.3495);
    weight.insert((Unit::Ounces, Unit::Pounds), 0.0625);

    let mut temperature: HashMap<(Unit, Unit), Formula> = HashMap::new();
    temperature.insert((Unit::Celsius, Unit::Fahrenheit), |v| v * 9.0 / 5.0 + 32.0);
    temperature.insert((Unit::Celsius, Unit::Kelvin), |v| v + 273.15);
    temperature.insert((Unit::Fahrenheit, Unit::Celsius), |v| (v - 32.0) * 5.0 / 9.0);
    temperature.insert((Unit::Fahrenheit, Unit::Kelvin), |v| {
        (v - 32.0) * 5.0 / 9.0 + 273.15
    });
    temperature.insert((Unit::Kelvin, Unit::Celsius), |v| v - 273.15);
    temperature.insert((Unit::Kelvin, Unit::Fahrenheit), |v| {
        (v - 273.15) * 9.0 / 5.0 + 32.0
    });

    let mut tables = HashMap::new();
    tables.insert(UnitCategory::Length, ConversionTable::Factors(length));
    tables.insert(UnitCategory::Weight, ConversionTable::Factors(weight));
    tables.insert(
        UnitCategory::Temperature,
        ConversionTable::Formulas(temperature),
    );
    tables
});

/// Convert a value between two units of the given category.
///
/// Pure: no state, no side effects beyond a debug log line. Both units
/// must belong to `category`; a missing non-identity table entry is
/// rejected rather than silently returning a wrong value.
pub fn convert(category: UnitCategory, value: f64, from: Unit, to: Unit) -> ConvertResult<f64> {
    if from.category() != category {
        return Err(ConvertError::UnsupportedUnit {
            category,
            unit: from,
        });
    }
    if to.category() != category {
        return Err(ConvertError::UnsupportedUnit { category, unit: to });
    }

    // Same unit, no conversion needed
    if from == to {
        return Ok(value);
    }

    let result = match CONVERSION_TABLES.get(&category) {
        Some(ConversionTable::Factors(factors)) => {
            factors.get(&(from, to)).map(|factor| value * factor)
        }
        Some(ConversionTable::Formulas(formulas)) => {
            formulas.get(&(from, to)).map(|formula| formula(value))
        }
        None => None,
    }
    .ok_or(ConvertError::UnsupportedPair { category, from, to })?;

    debug!(%category, %from, %to, value, result, "converted value");

    Ok(result)
}
