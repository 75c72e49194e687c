//! Converter session facade.
//!
//! One session per widget instance. The session owns the ledger and the
//! user preferences and reproduces the convert-button flow in a single
//! call: validate, convert, record, respond. The engine itself stays
//! pure; only the session mutates state.

use crate::core::engine::{self, UnitCategory};
use crate::core::history::{ConversionRecord, HistoryLedger};
use crate::display;
use crate::export;
use crate::shared::errors::{ConverterError, ConverterResult};
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{ConvertRequest, ConvertResponse, GetUnitsResponse, TrendSeries, UnitDto};

const ERR_NON_FINITE_VALUE: &str = "Value must be a finite number";
const ERR_NEGATIVE_LENGTH: &str = "Length cannot be negative. Please provide a positive value.";
const ERR_NEGATIVE_WEIGHT: &str = "Weight cannot be negative. Please provide a positive value.";

pub struct ConverterSession {
    settings: ConverterSettings,
    ledger: HistoryLedger,
}

impl ConverterSession {
    pub fn new(settings: ConverterSettings) -> Self {
        Self {
            settings,
            ledger: HistoryLedger::new(),
        }
    }

    /// Validate the request, convert, and record the result.
    ///
    /// Negative values are rejected for length and weight; temperature
    /// accepts them. Exactly one ledger entry is appended per success,
    /// none on failure.
    pub fn convert(&mut self, request: &ConvertRequest) -> ConverterResult<ConvertResponse> {
        let ConvertRequest {
            category,
            value,
            from_unit,
            to_unit,
        } = *request;

        if !value.is_finite() {
            return Err(ConverterError::Validation(ERR_NON_FINITE_VALUE.to_string()));
        }
        if value < 0.0 {
            match category {
                UnitCategory::Length => {
                    return Err(ConverterError::Validation(ERR_NEGATIVE_LENGTH.to_string()))
                }
                UnitCategory::Weight => {
                    return Err(ConverterError::Validation(ERR_NEGATIVE_WEIGHT.to_string()))
                }
                UnitCategory::Temperature => {}
            }
        }

        let result = engine::convert(category, value, from_unit, to_unit)?;

        self.ledger
            .record(ConversionRecord::new(category, value, from_unit, result, to_unit));

        let prefs = &self.settings.preferences;
        let comparison = if prefs.show_comparisons {
            display::comparison_note(category, result, to_unit)
        } else {
            None
        };

        Ok(ConvertResponse {
            result,
            formatted_result: display::format_value(result, prefs.decimal_places),
            from_unit,
            to_unit,
            comparison,
        })
    }

    /// Recent-conversions list, newest first, pre-formatted for display
    pub fn recent_lines(&self) -> Vec<String> {
        let prefs = &self.settings.preferences;
        self.ledger
            .recent(prefs.recent_list_len)
            .into_iter()
            .map(|record| display::history_line(record, prefs.decimal_places))
            .collect()
    }

    /// Trend-chart series over the configured window, oldest first
    pub fn trend_series(&self) -> TrendSeries {
        let window = self
            .ledger
            .chart_window(self.settings.preferences.trend_window_len);
        TrendSeries {
            timestamps: window.iter().map(|record| record.time_label()).collect(),
            values: window.iter().map(|record| record.to_value).collect(),
        }
    }

    pub fn clear_history(&mut self) {
        self.ledger.clear();
    }

    /// Full history as CSV for the download button
    pub fn export_csv(&self) -> String {
        export::history_csv(&self.ledger)
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(ConverterSettings::default())
    }
}

/// All available units for dropdown population, sorted by category then
/// label
pub fn unit_catalog() -> GetUnitsResponse {
    let mut units: Vec<UnitDto> = engine::all_units()
        .map(|unit| UnitDto {
            id: unit.symbol().to_string(),
            label: unit.to_string(),
            category: unit.category().to_string(),
        })
        .collect();

    units.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.label.cmp(&b.label))
    });

    GetUnitsResponse { units }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Unit;
    use approx::assert_relative_eq;

    fn request(category: UnitCategory, value: f64, from_unit: Unit, to_unit: Unit) -> ConvertRequest {
        ConvertRequest {
            category,
            value,
            from_unit,
            to_unit,
        }
    }

    #[test]
    fn convert_records_exactly_one_entry() {
        let mut session = ConverterSession::default();
        let response = session
            .convert(&request(UnitCategory::Length, 10.0, Unit::Meters, Unit::Feet))
            .unwrap();

        assert_relative_eq!(response.result, 32.8084);
        assert_eq!(response.formatted_result, "32.8084");
        assert_eq!(session.ledger().len(), 1);

        let entry = session.ledger().recent(1)[0];
        assert_eq!(entry.from_value, 10.0);
        assert_eq!(entry.from_unit, Unit::Meters);
        assert_relative_eq!(entry.to_value, 32.8084);
        assert_eq!(entry.to_unit, Unit::Feet);
        assert_eq!(entry.unit_type, UnitCategory::Length);
    }

    #[test]
    fn failed_conversion_records_nothing() {
        let mut session = ConverterSession::default();
        let err = session
            .convert(&request(UnitCategory::Length, 1.0, Unit::Celsius, Unit::Meters))
            .unwrap_err();

        assert!(matches!(err, ConverterError::Conversion(_)));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn negative_length_and_weight_are_rejected() {
        let mut session = ConverterSession::default();

        let err = session
            .convert(&request(UnitCategory::Length, -1.0, Unit::Meters, Unit::Feet))
            .unwrap_err();
        assert!(matches!(err, ConverterError::Validation(msg) if msg.contains("Length")));

        let err = session
            .convert(&request(UnitCategory::Weight, -1.0, Unit::Kilograms, Unit::Pounds))
            .unwrap_err();
        assert!(matches!(err, ConverterError::Validation(msg) if msg.contains("Weight")));

        assert!(session.ledger().is_empty());
    }

    #[test]
    fn negative_temperature_is_allowed() {
        let mut session = ConverterSession::default();
        let response = session
            .convert(&request(
                UnitCategory::Temperature,
                -40.0,
                Unit::Celsius,
                Unit::Fahrenheit,
            ))
            .unwrap();

        assert_relative_eq!(response.result, -40.0);
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut session = ConverterSession::default();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = session
                .convert(&request(UnitCategory::Length, value, Unit::Meters, Unit::Feet))
                .unwrap_err();
            assert!(matches!(err, ConverterError::Validation(_)));
        }
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn comparison_follows_preferences() {
        let mut session = ConverterSession::default();
        let response = session
            .convert(&request(
                UnitCategory::Weight,
                100.0,
                Unit::Pounds,
                Unit::Kilograms,
            ))
            .unwrap();
        assert!(response.comparison.is_some());

        let mut settings = ConverterSettings::default();
        settings.preferences.show_comparisons = false;
        let mut quiet = ConverterSession::new(settings);
        let response = quiet
            .convert(&request(
                UnitCategory::Weight,
                100.0,
                Unit::Pounds,
                Unit::Kilograms,
            ))
            .unwrap();
        assert!(response.comparison.is_none());
    }

    #[test]
    fn recent_lines_respect_list_length_and_order() {
        let mut session = ConverterSession::default();
        for value in 1..=7 {
            session
                .convert(&request(
                    UnitCategory::Length,
                    value as f64,
                    Unit::Meters,
                    Unit::Feet,
                ))
                .unwrap();
        }

        let lines = session.recent_lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("7 Meters"));
        assert!(lines[4].contains("3 Meters"));
    }

    #[test]
    fn trend_series_is_chronological_and_windowed() {
        let mut session = ConverterSession::default();
        for value in 1..=12 {
            session
                .convert(&request(
                    UnitCategory::Length,
                    value as f64,
                    Unit::Kilometers,
                    Unit::Meters,
                ))
                .unwrap();
        }

        let series = session.trend_series();
        assert_eq!(series.values.len(), 10);
        assert_eq!(series.timestamps.len(), 10);
        assert_relative_eq!(series.values[0], 3000.0);
        assert_relative_eq!(series.values[9], 12000.0);
    }

    #[test]
    fn clear_then_convert_restarts_history() {
        let mut session = ConverterSession::default();
        session
            .convert(&request(UnitCategory::Length, 1.0, Unit::Meters, Unit::Feet))
            .unwrap();
        session
            .convert(&request(UnitCategory::Length, 2.0, Unit::Meters, Unit::Feet))
            .unwrap();

        session.clear_history();
        assert!(session.recent_lines().is_empty());
        assert!(session.trend_series().values.is_empty());

        session
            .convert(&request(UnitCategory::Length, 3.0, Unit::Meters, Unit::Feet))
            .unwrap();
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn export_includes_every_recorded_conversion() {
        let mut session = ConverterSession::default();
        session
            .convert(&request(UnitCategory::Length, 1.0, Unit::Meters, Unit::Feet))
            .unwrap();
        session
            .convert(&request(
                UnitCategory::Temperature,
                0.0,
                Unit::Celsius,
                Unit::Kelvin,
            ))
            .unwrap();

        let csv = session.export_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Meters"));
        assert!(lines[2].contains("Celsius"));
    }

    #[test]
    fn unit_catalog_lists_every_unit_sorted() {
        let catalog = unit_catalog();
        assert_eq!(catalog.units.len(), 11);

        let sorted = {
            let mut copy = catalog.units.clone();
            copy.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.label.cmp(&b.label)));
            copy.iter().map(|u| u.id.clone()).collect::<Vec<_>>()
        };
        let ids: Vec<String> = catalog.units.iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&"m".to_string()));
        assert!(ids.contains(&"K".to_string()));
    }
}
