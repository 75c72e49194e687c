//! CSV serialization of the full ledger.
//!
//! Column order matches the history record fields; rows are oldest
//! first. The crate only builds the string; download mechanics belong
//! to the frontend.

use std::fmt::Write;

use crate::core::history::HistoryLedger;

pub const CSV_HEADER: &str = "timestamp,from_value,from_unit,to_value,to_unit,unit_type";

/// Serialize every record in the ledger, oldest first.
///
/// No field can contain a comma (timestamps are HH:MM:SS, units and
/// categories are bare identifiers), so no quoting is needed.
pub fn history_csv(ledger: &HistoryLedger) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for record in ledger.iter() {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{}",
            record.time_label(),
            record.from_value,
            record.from_unit,
            record.to_value,
            record.to_unit,
            record.unit_type,
        );
    }

    csv
}
