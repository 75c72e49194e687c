//! Backend for the unit converter widget.
//!
//! The crate is split the same way the widget uses it: a stateless
//! conversion engine (factor tables for length and weight, affine
//! formulas for temperature), a per-session history ledger that backs
//! the recent-conversions list and the trend chart, and presentation
//! helpers (display formatting, CSV export) the frontend renders
//! verbatim. The frontend never does unit math itself.

pub mod core;
pub mod display;
pub mod export;
pub mod shared;

pub use crate::core::engine::{convert, units_for, Unit, UnitCategory};
pub use crate::core::history::{ConversionRecord, HistoryLedger};
pub use crate::core::session::{unit_catalog, ConverterSession};
pub use crate::shared::errors::{ConvertError, ConvertResult, ConverterError, ConverterResult};
pub use crate::shared::settings::{ConverterSettings, DisplayPreferences};
pub use crate::shared::types::{
    ConvertRequest, ConvertResponse, GetUnitsResponse, TrendSeries, UnitDto,
};
