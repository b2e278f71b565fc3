//! Field-well entries (dimensions and measures) and sort options.

use serde::{Deserialize, Serialize};

use super::common::{AggregationFunction, ColumnIdentifier, NumericalAggregationFunction};
use super::enums::{
    CategoricalAggregationFunction, DateAggregationFunction, SortDirection, TimeGranularity,
};
use super::formatting::{
    DateTimeFormatConfiguration, NumberFormatConfiguration, StringFormatConfiguration,
};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, enumeration, identifier, string, NodeSchema};
use crate::value::Record;

/// A grouping field. The alternative follows the column's data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DimensionField {
    #[serde(rename = "CategoricalDimensionField")]
    Categorical(CategoricalDimensionField),
    #[serde(rename = "DateDimensionField")]
    Date(DateDimensionField),
    #[serde(rename = "NumericalDimensionField")]
    Numerical(NumericalDimensionField),
}

impl DimensionField {
    const ALTERNATIVES: &'static [&'static str] = &[
        "categorical_dimension_field",
        "date_dimension_field",
        "numerical_dimension_field",
    ];

    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::Categorical(f) => f.field_id.as_deref(),
            Self::Date(f) => f.field_id.as_deref(),
            Self::Numerical(f) => f.field_id.as_deref(),
        }
    }
}

impl Transcode for DimensionField {
    const NAME: &'static str = "DimensionField";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("categorical_dimension_field")
            .map(Self::Categorical)
            .or_else(|| record.block("date_dimension_field").map(Self::Date))
            .or_else(|| record.block("numerical_dimension_field").map(Self::Numerical))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Categorical(f) => record.put_block("categorical_dimension_field", Some(f)),
            Self::Date(f) => record.put_block("date_dimension_field", Some(f)),
            Self::Numerical(f) => record.put_block("numerical_dimension_field", Some(f)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "categorical_dimension_field",
            block::<CategoricalDimensionField>(),
        )
        .field("date_dimension_field", block::<DateDimensionField>())
        .field(
            "numerical_dimension_field",
            block::<NumericalDimensionField>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoricalDimensionField {
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<StringFormatConfiguration>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for CategoricalDimensionField {
    const NAME: &'static str = "CategoricalDimensionField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("field_id", identifier().required())
            .field(
                "format_configuration",
                block::<StringFormatConfiguration>(),
            )
            .field("hierarchy_id", identifier())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateDimensionField {
    pub column: Option<ColumnIdentifier>,
    pub date_granularity: Option<TimeGranularity>,
    pub field_id: Option<String>,
    pub format_configuration: Option<DateTimeFormatConfiguration>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for DateDimensionField {
    const NAME: &'static str = "DateDimensionField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            date_granularity: record.enumeration("date_granularity"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_enum("date_granularity", self.date_granularity.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("date_granularity", enumeration::<TimeGranularity>())
            .field("field_id", identifier().required())
            .field(
                "format_configuration",
                block::<DateTimeFormatConfiguration>(),
            )
            .field("hierarchy_id", identifier())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumericalDimensionField {
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<NumberFormatConfiguration>,
    pub hierarchy_id: Option<String>,
}

impl Transcode for NumericalDimensionField {
    const NAME: &'static str = "NumericalDimensionField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
            hierarchy_id: record.string("hierarchy_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record.put_string("hierarchy_id", self.hierarchy_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("field_id", identifier().required())
            .field(
                "format_configuration",
                block::<NumberFormatConfiguration>(),
            )
            .field("hierarchy_id", identifier())
    }
}

/// An aggregated value field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeasureField {
    #[serde(rename = "CalculatedMeasureField")]
    Calculated(CalculatedMeasureField),
    #[serde(rename = "CategoricalMeasureField")]
    Categorical(CategoricalMeasureField),
    #[serde(rename = "DateMeasureField")]
    Date(DateMeasureField),
    #[serde(rename = "NumericalMeasureField")]
    Numerical(NumericalMeasureField),
}

impl MeasureField {
    const ALTERNATIVES: &'static [&'static str] = &[
        "calculated_measure_field",
        "categorical_measure_field",
        "date_measure_field",
        "numerical_measure_field",
    ];

    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::Calculated(f) => f.field_id.as_deref(),
            Self::Categorical(f) => f.field_id.as_deref(),
            Self::Date(f) => f.field_id.as_deref(),
            Self::Numerical(f) => f.field_id.as_deref(),
        }
    }
}

impl Transcode for MeasureField {
    const NAME: &'static str = "MeasureField";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("calculated_measure_field")
            .map(Self::Calculated)
            .or_else(|| record.block("categorical_measure_field").map(Self::Categorical))
            .or_else(|| record.block("date_measure_field").map(Self::Date))
            .or_else(|| record.block("numerical_measure_field").map(Self::Numerical))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Calculated(f) => record.put_block("calculated_measure_field", Some(f)),
            Self::Categorical(f) => record.put_block("categorical_measure_field", Some(f)),
            Self::Date(f) => record.put_block("date_measure_field", Some(f)),
            Self::Numerical(f) => record.put_block("numerical_measure_field", Some(f)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("calculated_measure_field", block::<CalculatedMeasureField>())
            .field(
                "categorical_measure_field",
                block::<CategoricalMeasureField>(),
            )
            .field("date_measure_field", block::<DateMeasureField>())
            .field("numerical_measure_field", block::<NumericalMeasureField>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculatedMeasureField {
    pub expression: Option<String>,
    pub field_id: Option<String>,
}

impl Transcode for CalculatedMeasureField {
    const NAME: &'static str = "CalculatedMeasureField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            expression: record.string("expression"),
            field_id: record.string("field_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("expression", self.expression.as_deref());
        record.put_string("field_id", self.field_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("expression", string().length(1, 4096).required())
            .field("field_id", identifier().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoricalMeasureField {
    pub aggregation_function: Option<CategoricalAggregationFunction>,
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<StringFormatConfiguration>,
}

impl Transcode for CategoricalMeasureField {
    const NAME: &'static str = "CategoricalMeasureField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation_function: record.enumeration("aggregation_function"),
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("aggregation_function", self.aggregation_function.as_ref());
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "aggregation_function",
            enumeration::<CategoricalAggregationFunction>(),
        )
        .field("column", block::<ColumnIdentifier>().required())
        .field("field_id", identifier().required())
        .field(
            "format_configuration",
            block::<StringFormatConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateMeasureField {
    pub aggregation_function: Option<DateAggregationFunction>,
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<DateTimeFormatConfiguration>,
}

impl Transcode for DateMeasureField {
    const NAME: &'static str = "DateMeasureField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation_function: record.enumeration("aggregation_function"),
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("aggregation_function", self.aggregation_function.as_ref());
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "aggregation_function",
            enumeration::<DateAggregationFunction>(),
        )
        .field("column", block::<ColumnIdentifier>().required())
        .field("field_id", identifier().required())
        .field(
            "format_configuration",
            block::<DateTimeFormatConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumericalMeasureField {
    pub aggregation_function: Option<NumericalAggregationFunction>,
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<NumberFormatConfiguration>,
}

impl Transcode for NumericalMeasureField {
    const NAME: &'static str = "NumericalMeasureField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation_function: record.block("aggregation_function"),
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("aggregation_function", self.aggregation_function.as_ref());
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "aggregation_function",
            block::<NumericalAggregationFunction>(),
        )
        .field("column", block::<ColumnIdentifier>().required())
        .field("field_id", identifier().required())
        .field(
            "format_configuration",
            block::<NumberFormatConfiguration>(),
        )
    }
}

/// Sort by a field already in the visual, or by an arbitrary column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldSortOptions {
    #[serde(rename = "ColumnSort")]
    ColumnSort(ColumnSort),
    #[serde(rename = "FieldSort")]
    FieldSort(FieldSort),
}

impl FieldSortOptions {
    const ALTERNATIVES: &'static [&'static str] = &["column_sort", "field_sort"];
}

impl Transcode for FieldSortOptions {
    const NAME: &'static str = "FieldSortOptions";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("column_sort")
            .map(Self::ColumnSort)
            .or_else(|| record.block("field_sort").map(Self::FieldSort))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::ColumnSort(s) => record.put_block("column_sort", Some(s)),
            Self::FieldSort(s) => record.put_block("field_sort", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column_sort", block::<ColumnSort>())
            .field("field_sort", block::<FieldSort>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColumnSort {
    pub aggregation_function: Option<AggregationFunction>,
    pub direction: Option<SortDirection>,
    pub sort_by: Option<ColumnIdentifier>,
}

impl Transcode for ColumnSort {
    const NAME: &'static str = "ColumnSort";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation_function: record.block("aggregation_function"),
            direction: record.enumeration("direction"),
            sort_by: record.block("sort_by"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("aggregation_function", self.aggregation_function.as_ref());
        record.put_enum("direction", self.direction.as_ref());
        record.put_block("sort_by", self.sort_by.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("aggregation_function", block::<AggregationFunction>())
            .field("direction", enumeration::<SortDirection>().required())
            .field("sort_by", block::<ColumnIdentifier>().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldSort {
    pub direction: Option<SortDirection>,
    pub field_id: Option<String>,
}

impl Transcode for FieldSort {
    const NAME: &'static str = "FieldSort";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            direction: record.enumeration("direction"),
            field_id: record.string("field_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("direction", self.direction.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("direction", enumeration::<SortDirection>().required())
            .field("field_id", identifier().required())
    }
}
