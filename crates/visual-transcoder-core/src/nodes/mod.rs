//! The typed visual object graph and its per-node transcoders.
//!
//! Each node type mirrors one object of the remote visual API. Its
//! [`Transcode`](crate::container::Transcode) impl lists the dynamic-side
//! keys it reads and writes and declares them for validation.

pub mod actions;
pub mod chart;
pub mod common;
pub mod conditional;
pub mod enums;
pub mod fields;
pub mod formatting;
pub mod hierarchy;
pub mod presentation;
pub mod table_style;
pub mod visuals;

pub use visuals::Visual;

pub const CUSTOM_ACTIONS_MAX_ITEMS: usize = 10;
pub const REFERENCE_LINES_MAX_ITEMS: usize = 20;
pub const DATA_PATH_VALUE_MAX_ITEMS: usize = 20;
pub const COLUMN_HIERARCHIES_MAX_ITEMS: usize = 2;
pub const DIMENSION_FIELDS_MAX_ITEMS: usize = 200;
pub const MEASURE_FIELDS_MAX_ITEMS: usize = 200;
pub const CONTRIBUTION_ANALYSIS_MAX_ITEMS: usize = 200;
pub const FIELD_SORT_OPTIONS_MAX_ITEMS: usize = 100;
pub const FORECASTS_MAX_ITEMS: usize = 10;
pub const SERIES_MAX_ITEMS: usize = 10;
pub const COLOR_MAP_MAX_ITEMS: usize = 5000;
pub const DATA_LABEL_TYPES_MAX_ITEMS: usize = 100;
pub const TOOLTIP_FIELDS_MAX_ITEMS: usize = 100;
pub const DRILL_DOWN_FILTERS_MAX_ITEMS: usize = 10;
/// Visuals on one sheet.
pub const VISUALS_MAX_ITEMS: usize = 50;
