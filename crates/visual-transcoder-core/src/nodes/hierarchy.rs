//! Column hierarchies for drill-down, and the filters applied while drilling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ColumnIdentifier;
use super::enums::TimeGranularity;
use super::DRILL_DOWN_FILTERS_MAX_ITEMS;
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, blocks, enumeration, float, identifier, string_list, timestamp, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnHierarchy {
    #[serde(rename = "DateTimeHierarchy")]
    DateTime(DateTimeHierarchy),
    #[serde(rename = "ExplicitHierarchy")]
    Explicit(ExplicitHierarchy),
    #[serde(rename = "PredefinedHierarchy")]
    Predefined(PredefinedHierarchy),
}

impl ColumnHierarchy {
    const ALTERNATIVES: &'static [&'static str] = &[
        "date_time_hierarchy",
        "explicit_hierarchy",
        "predefined_hierarchy",
    ];

    pub fn hierarchy_id(&self) -> Option<&str> {
        match self {
            Self::DateTime(h) => h.hierarchy_id.as_deref(),
            Self::Explicit(h) => h.hierarchy_id.as_deref(),
            Self::Predefined(h) => h.hierarchy_id.as_deref(),
        }
    }
}

impl Transcode for ColumnHierarchy {
    const NAME: &'static str = "ColumnHierarchy";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("date_time_hierarchy")
            .map(Self::DateTime)
            .or_else(|| record.block("explicit_hierarchy").map(Self::Explicit))
            .or_else(|| record.block("predefined_hierarchy").map(Self::Predefined))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::DateTime(h) => record.put_block("date_time_hierarchy", Some(h)),
            Self::Explicit(h) => record.put_block("explicit_hierarchy", Some(h)),
            Self::Predefined(h) => record.put_block("predefined_hierarchy", Some(h)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("date_time_hierarchy", block::<DateTimeHierarchy>())
            .field("explicit_hierarchy", block::<ExplicitHierarchy>())
            .field("predefined_hierarchy", block::<PredefinedHierarchy>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateTimeHierarchy {
    pub drill_down_filters: Vec<DrillDownFilter>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for DateTimeHierarchy {
    const NAME: &'static str = "DateTimeHierarchy";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            drill_down_filters: record.blocks("drill_down_filters"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("drill_down_filters", &self.drill_down_filters);
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "drill_down_filters",
            blocks::<DrillDownFilter>().max_items(DRILL_DOWN_FILTERS_MAX_ITEMS),
        )
        .field("hierarchy_id", identifier().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExplicitHierarchy {
    pub columns: Vec<ColumnIdentifier>,
    pub drill_down_filters: Vec<DrillDownFilter>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for ExplicitHierarchy {
    const NAME: &'static str = "ExplicitHierarchy";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            columns: record.blocks("columns"),
            drill_down_filters: record.blocks("drill_down_filters"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("columns", &self.columns);
        record.put_blocks("drill_down_filters", &self.drill_down_filters);
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "columns",
            blocks::<ColumnIdentifier>().items(2, 10).required(),
        )
        .field(
            "drill_down_filters",
            blocks::<DrillDownFilter>().max_items(DRILL_DOWN_FILTERS_MAX_ITEMS),
        )
        .field("hierarchy_id", identifier().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PredefinedHierarchy {
    pub columns: Vec<ColumnIdentifier>,
    pub drill_down_filters: Vec<DrillDownFilter>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for PredefinedHierarchy {
    const NAME: &'static str = "PredefinedHierarchy";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            columns: record.blocks("columns"),
            drill_down_filters: record.blocks("drill_down_filters"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("columns", &self.columns);
        record.put_blocks("drill_down_filters", &self.drill_down_filters);
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "columns",
            blocks::<ColumnIdentifier>().items(1, 10).required(),
        )
        .field(
            "drill_down_filters",
            blocks::<DrillDownFilter>().max_items(DRILL_DOWN_FILTERS_MAX_ITEMS),
        )
        .field("hierarchy_id", identifier().required())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrillDownFilter {
    #[serde(rename = "CategoryFilter")]
    Category(CategoryDrillDownFilter),
    #[serde(rename = "NumericEqualityFilter")]
    NumericEquality(NumericEqualityDrillDownFilter),
    #[serde(rename = "TimeRangeFilter")]
    TimeRange(TimeRangeDrillDownFilter),
}

impl DrillDownFilter {
    const ALTERNATIVES: &'static [&'static str] = &[
        "category_filter",
        "numeric_equality_filter",
        "time_range_filter",
    ];
}

impl Transcode for DrillDownFilter {
    const NAME: &'static str = "DrillDownFilter";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("category_filter")
            .map(Self::Category)
            .or_else(|| {
                record
                    .block("numeric_equality_filter")
                    .map(Self::NumericEquality)
            })
            .or_else(|| record.block("time_range_filter").map(Self::TimeRange))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Category(f) => record.put_block("category_filter", Some(f)),
            Self::NumericEquality(f) => record.put_block("numeric_equality_filter", Some(f)),
            Self::TimeRange(f) => record.put_block("time_range_filter", Some(f)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_filter", block::<CategoryDrillDownFilter>())
            .field(
                "numeric_equality_filter",
                block::<NumericEqualityDrillDownFilter>(),
            )
            .field("time_range_filter", block::<TimeRangeDrillDownFilter>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoryDrillDownFilter {
    pub category_values: Vec<String>,
    pub column: Option<ColumnIdentifier>,
}

impl Transcode for CategoryDrillDownFilter {
    const NAME: &'static str = "CategoryDrillDownFilter";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_values: record.strings("category_values"),
            column: record.block("column"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string_list("category_values", &self.category_values);
        record.put_block("column", self.column.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_values", string_list().max_items(100000).required())
            .field("column", block::<ColumnIdentifier>().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumericEqualityDrillDownFilter {
    pub column: Option<ColumnIdentifier>,
    /// Required; the typed form has no unset state.
    pub value: f64,
}

impl Transcode for NumericEqualityDrillDownFilter {
    const NAME: &'static str = "NumericEqualityDrillDownFilter";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            value: record.float64("value").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_required_float64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("value", float().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimeRangeDrillDownFilter {
    pub column: Option<ColumnIdentifier>,
    pub range_maximum: Option<DateTime<Utc>>,
    pub range_minimum: Option<DateTime<Utc>>,
    pub time_granularity: Option<TimeGranularity>,
}

impl Transcode for TimeRangeDrillDownFilter {
    const NAME: &'static str = "TimeRangeDrillDownFilter";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            range_maximum: record.timestamp("range_maximum"),
            range_minimum: record.timestamp("range_minimum"),
            time_granularity: record.enumeration("time_granularity"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_timestamp("range_maximum", self.range_maximum.as_ref());
        record.put_timestamp("range_minimum", self.range_minimum.as_ref());
        record.put_enum("time_granularity", self.time_granularity.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("range_maximum", timestamp().required())
            .field("range_minimum", timestamp().required())
            .field(
                "time_granularity",
                enumeration::<TimeGranularity>().required(),
            )
    }
}
