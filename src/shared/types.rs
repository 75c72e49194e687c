use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::engine::{Unit, UnitCategory};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertRequest {
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: Unit,
    pub to_unit: Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: Unit,
    pub to_unit: Unit,
    /// Optional "times the height/weight of an average person" note
    pub comparison: Option<String>,
}

// Rich unit data transfer object for frontend dropdowns
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDto {
    pub id: String,       // Unit symbol (e.g. "m", "kg")
    pub label: String,    // Display name (e.g. "Meters", "Kilograms")
    pub category: String, // Category (e.g. "Length", "Weight")
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDto>,
}

/// Chart-ready view of the trend window: parallel x/y series,
/// oldest first
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}
