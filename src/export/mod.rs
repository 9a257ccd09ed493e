//! Export data for printed time cards.
//!
//! This module produces the per-employee tables and totals that a document
//! renderer lays out. Page layout itself belongs to the renderer.

mod time_card;

pub use time_card::{
    EXPORT_DATE_FORMAT, ExportRow, ExportTotals, ExportWeek, TIME_CARD_HEADERS, TimeCardExport,
    build_time_card, build_time_cards,
};
