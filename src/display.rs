//! Display helpers rendered verbatim by the frontend.
//!
//! The comparison notes divide the converted value by a fixed reference
//! person (1.7 m tall, 70 kg) and only fire for certain target units.
//! They are a presentation flourish, not part of the conversion
//! contract.

use crate::core::engine::{Unit, UnitCategory};
use crate::core::history::ConversionRecord;

/// Reference height used by the length comparison note
pub const PERSON_HEIGHT_METERS: f64 = 1.7;
/// Reference weight used by the weight comparison note
pub const PERSON_WEIGHT_KILOGRAMS: f64 = 70.0;

/// Fixed-decimal display string for a converted value
pub fn format_value(value: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, value)
}

/// One line of the recent-conversions list
pub fn history_line(record: &ConversionRecord, decimal_places: usize) -> String {
    format!(
        "{}: {} {} → {} {}",
        record.time_label(),
        record.from_value,
        record.from_unit,
        format_value(record.to_value, decimal_places),
        record.to_unit,
    )
}

/// Relative comparison against an average person, for the subset of
/// target units the note applies to
pub fn comparison_note(category: UnitCategory, to_value: f64, to_unit: Unit) -> Option<String> {
    match (category, to_unit) {
        (UnitCategory::Length, Unit::Meters | Unit::Kilometers) => Some(format!(
            "📏 This is approximately {:.1} times the height of an average person!",
            to_value / PERSON_HEIGHT_METERS
        )),
        (UnitCategory::Weight, Unit::Kilograms | Unit::Pounds) => Some(format!(
            "⚖️ This is approximately {:.1} times the weight of an average person!",
            to_value / PERSON_WEIGHT_KILOGRAMS
        )),
        _ => None,
    }
}
