//! Building blocks shared by every visual kind: column references,
//! aggregation functions, fonts, labels and titles.

use serde::{Deserialize, Serialize};

use super::enums::{
    CategoricalAggregationFunction, DateAggregationFunction, FontDecoration, FontStyle,
    FontWeightName, OtherCategories, RelativeFontSize, SimpleNumericalAggregationFunction,
    Visibility,
};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, color, enumeration, float, int, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColumnIdentifier {
    pub data_set_identifier: Option<String>,
    pub column_name: Option<String>,
}

impl Transcode for ColumnIdentifier {
    const NAME: &'static str = "ColumnIdentifier";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_set_identifier: record.string("data_set_identifier"),
            column_name: record.string("column_name"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("data_set_identifier", self.data_set_identifier.as_deref());
        record.put_string("column_name", self.column_name.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_set_identifier", string().length(1, 2048).required())
            .field("column_name", string().length(1, 128).required())
    }
}

/// How a measure is aggregated; the alternative depends on the column type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AggregationFunction {
    #[serde(rename = "CategoricalAggregationFunction")]
    Categorical(CategoricalAggregationFunction),
    #[serde(rename = "DateAggregationFunction")]
    Date(DateAggregationFunction),
    #[serde(rename = "NumericalAggregationFunction")]
    Numerical(NumericalAggregationFunction),
}

impl AggregationFunction {
    const ALTERNATIVES: &'static [&'static str] = &[
        "categorical_aggregation_function",
        "date_aggregation_function",
        "numerical_aggregation_function",
    ];
}

impl Transcode for AggregationFunction {
    const NAME: &'static str = "AggregationFunction";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .enumeration("categorical_aggregation_function")
            .map(Self::Categorical)
            .or_else(|| record.enumeration("date_aggregation_function").map(Self::Date))
            .or_else(|| {
                record
                    .block("numerical_aggregation_function")
                    .map(Self::Numerical)
            })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Categorical(f) => record.put_enum("categorical_aggregation_function", Some(f)),
            Self::Date(f) => record.put_enum("date_aggregation_function", Some(f)),
            Self::Numerical(f) => record.put_block("numerical_aggregation_function", Some(f)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "categorical_aggregation_function",
            enumeration::<CategoricalAggregationFunction>(),
        )
        .field(
            "date_aggregation_function",
            enumeration::<DateAggregationFunction>(),
        )
        .field(
            "numerical_aggregation_function",
            block::<NumericalAggregationFunction>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumericalAggregationFunction {
    #[serde(rename = "SimpleNumericalAggregation")]
    Simple(SimpleNumericalAggregationFunction),
    #[serde(rename = "PercentileAggregation")]
    Percentile(PercentileAggregation),
}

impl NumericalAggregationFunction {
    const ALTERNATIVES: &'static [&'static str] =
        &["simple_numerical_aggregation", "percentile_aggregation"];
}

impl Transcode for NumericalAggregationFunction {
    const NAME: &'static str = "NumericalAggregationFunction";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .enumeration("simple_numerical_aggregation")
            .map(Self::Simple)
            .or_else(|| record.block("percentile_aggregation").map(Self::Percentile))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Simple(f) => record.put_enum("simple_numerical_aggregation", Some(f)),
            Self::Percentile(p) => record.put_block("percentile_aggregation", Some(p)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "simple_numerical_aggregation",
            enumeration::<SimpleNumericalAggregationFunction>(),
        )
        .field("percentile_aggregation", block::<PercentileAggregation>())
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PercentileAggregation {
    pub percentile_value: Option<f64>,
}

impl Transcode for PercentileAggregation {
    const NAME: &'static str = "PercentileAggregation";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            percentile_value: record.float64("percentile_value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("percentile_value", self.percentile_value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("percentile_value", float().float_range(0.0, 100.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FontConfiguration {
    pub font_color: Option<String>,
    pub font_decoration: Option<FontDecoration>,
    pub font_size: Option<FontSize>,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
}

impl Transcode for FontConfiguration {
    const NAME: &'static str = "FontConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            font_color: record.string("font_color"),
            font_decoration: record.enumeration("font_decoration"),
            font_size: record.block("font_size"),
            font_style: record.enumeration("font_style"),
            font_weight: record.block("font_weight"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("font_color", self.font_color.as_deref());
        record.put_enum("font_decoration", self.font_decoration.as_ref());
        record.put_block("font_size", self.font_size.as_ref());
        record.put_enum("font_style", self.font_style.as_ref());
        record.put_block("font_weight", self.font_weight.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("font_color", color())
            .field("font_decoration", enumeration::<FontDecoration>())
            .field("font_size", block::<FontSize>())
            .field("font_style", enumeration::<FontStyle>())
            .field("font_weight", block::<FontWeight>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FontSize {
    pub absolute: Option<String>,
    pub relative: Option<RelativeFontSize>,
}

impl Transcode for FontSize {
    const NAME: &'static str = "FontSize";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            absolute: record.string("absolute"),
            relative: record.enumeration("relative"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("absolute", self.absolute.as_deref());
        record.put_enum("relative", self.relative.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("absolute", string().length(1, 16))
            .field("relative", enumeration::<RelativeFontSize>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FontWeight {
    pub name: Option<FontWeightName>,
}

impl Transcode for FontWeight {
    const NAME: &'static str = "FontWeight";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            name: record.enumeration("name"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("name", self.name.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("name", enumeration::<FontWeightName>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelOptions {
    pub custom_label: Option<String>,
    pub font_configuration: Option<FontConfiguration>,
    pub visibility: Option<Visibility>,
}

impl Transcode for LabelOptions {
    const NAME: &'static str = "LabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label: record.string("custom_label"),
            font_configuration: record.block("font_configuration"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_label", string())
            .field("font_configuration", block::<FontConfiguration>())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShortFormatText {
    pub plain_text: Option<String>,
    pub rich_text: Option<String>,
}

impl Transcode for ShortFormatText {
    const NAME: &'static str = "ShortFormatText";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            plain_text: record.string("plain_text"),
            rich_text: record.string("rich_text"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("plain_text", self.plain_text.as_deref());
        record.put_string("rich_text", self.rich_text.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("plain_text", string().length(1, 512))
            .field("rich_text", string().length(1, 1024))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LongFormatText {
    pub plain_text: Option<String>,
    pub rich_text: Option<String>,
}

impl Transcode for LongFormatText {
    const NAME: &'static str = "LongFormatText";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            plain_text: record.string("plain_text"),
            rich_text: record.string("rich_text"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("plain_text", self.plain_text.as_deref());
        record.put_string("rich_text", self.rich_text.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("plain_text", string().length(1, 1024))
            .field("rich_text", string().length(1, 2048))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisualTitleLabelOptions {
    pub format_text: Option<ShortFormatText>,
    pub visibility: Option<Visibility>,
}

impl Transcode for VisualTitleLabelOptions {
    const NAME: &'static str = "VisualTitleLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            format_text: record.block("format_text"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("format_text", self.format_text.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("format_text", block::<ShortFormatText>())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisualSubtitleLabelOptions {
    pub format_text: Option<LongFormatText>,
    pub visibility: Option<Visibility>,
}

impl Transcode for VisualSubtitleLabelOptions {
    const NAME: &'static str = "VisualSubtitleLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            format_text: record.block("format_text"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("format_text", self.format_text.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("format_text", block::<LongFormatText>())
            .field("visibility", enumeration::<Visibility>())
    }
}

/// One step of a data path: a field and, optionally, one of its values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataPathValue {
    pub field_id: Option<String>,
    pub field_value: Option<String>,
}

impl Transcode for DataPathValue {
    const NAME: &'static str = "DataPathValue";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            field_value: record.string("field_value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("field_value", self.field_value.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", string().length(1, 512).required())
            .field("field_value", string().length(1, 2048).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemsLimitConfiguration {
    pub items_limit: Option<i64>,
    pub other_categories: Option<OtherCategories>,
}

impl Transcode for ItemsLimitConfiguration {
    const NAME: &'static str = "ItemsLimitConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            items_limit: record.int64("items_limit"),
            other_categories: record.enumeration("other_categories"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("items_limit", self.items_limit);
        record.put_enum("other_categories", self.other_categories.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("items_limit", int())
            .field("other_categories", enumeration::<OtherCategories>())
    }
}
