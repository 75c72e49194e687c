//! Per-session conversion history.
//!
//! The ledger is append-only apart from a full clear. Both frontend
//! views (recent list, trend chart) derive from the one underlying
//! sequence; the chart view is a borrowed slice, not a copy that
//! could drift.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::core::engine::{Unit, UnitCategory};

/// One completed conversion, created once and never mutated
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionRecord {
    #[ts(type = "string")]
    pub id: Uuid,
    #[ts(type = "string")]
    pub timestamp: DateTime<Local>,
    pub from_value: f64,
    pub from_unit: Unit,
    pub to_value: f64,
    pub to_unit: Unit,
    pub unit_type: UnitCategory,
}

impl ConversionRecord {
    /// Stamp a fresh record with the current wall-clock time
    pub fn new(
        unit_type: UnitCategory,
        from_value: f64,
        from_unit: Unit,
        to_value: f64,
        to_unit: Unit,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Local::now(),
            from_value,
            from_unit,
            to_value,
            to_unit,
            unit_type,
        }
    }

    /// Second-precision time label used by history lines, chart axes,
    /// and CSV rows
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Ordered (oldest first) log of one session's conversions
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<ConversionRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Always succeeds; there is no capacity limit
    /// within a session.
    pub fn record(&mut self, record: ConversionRecord) {
        debug!(
            id = %record.id,
            from = %record.from_unit,
            to = %record.to_unit,
            "recorded conversion"
        );
        self.records.push(record);
    }

    /// Last `n` records (or fewer), most recent first, for the
    /// recent-conversions list
    pub fn recent(&self, n: usize) -> Vec<&ConversionRecord> {
        self.records.iter().rev().take(n).collect()
    }

    /// Last `n` records (or fewer) in chronological order, for the
    /// trend chart
    pub fn chart_window(&self, n: usize) -> &[ConversionRecord] {
        &self.records[self.records.len().saturating_sub(n)..]
    }

    /// Drop all records
    pub fn clear(&mut self) {
        debug!(discarded = self.records.len(), "cleared history");
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Chronological iteration over the full ledger (export path)
    pub fn iter(&self) -> std::slice::Iter<'_, ConversionRecord> {
        self.records.iter()
    }
}
