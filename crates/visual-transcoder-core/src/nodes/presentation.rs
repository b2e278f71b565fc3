//! Data labels, legends, tooltips and palettes.

use serde::{Deserialize, Serialize};

use super::common::{AggregationFunction, ColumnIdentifier, DataPathValue, FontConfiguration, LabelOptions};
use super::enums::{
    ColorFillType, DataLabelContent, DataLabelOverlap, DataLabelPosition, LegendPosition,
    SelectedTooltipType, TimeGranularity, TooltipTitleType, Visibility,
};
use super::{COLOR_MAP_MAX_ITEMS, DATA_LABEL_TYPES_MAX_ITEMS, TOOLTIP_FIELDS_MAX_ITEMS};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, blocks, color, enumeration, float, identifier, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataLabelOptions {
    pub category_label_visibility: Option<Visibility>,
    pub data_label_types: Vec<DataLabelType>,
    pub label_color: Option<String>,
    pub label_content: Option<DataLabelContent>,
    pub label_font_configuration: Option<FontConfiguration>,
    pub measure_label_visibility: Option<Visibility>,
    pub overlap: Option<DataLabelOverlap>,
    pub position: Option<DataLabelPosition>,
    pub visibility: Option<Visibility>,
}

impl Transcode for DataLabelOptions {
    const NAME: &'static str = "DataLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_label_visibility: record.enumeration("category_label_visibility"),
            data_label_types: record.blocks("data_label_types"),
            label_color: record.string("label_color"),
            label_content: record.enumeration("label_content"),
            label_font_configuration: record.block("label_font_configuration"),
            measure_label_visibility: record.enumeration("measure_label_visibility"),
            overlap: record.enumeration("overlap"),
            position: record.enumeration("position"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "category_label_visibility",
            self.category_label_visibility.as_ref(),
        );
        record.put_blocks("data_label_types", &self.data_label_types);
        record.put_string("label_color", self.label_color.as_deref());
        record.put_enum("label_content", self.label_content.as_ref());
        record.put_block(
            "label_font_configuration",
            self.label_font_configuration.as_ref(),
        );
        record.put_enum(
            "measure_label_visibility",
            self.measure_label_visibility.as_ref(),
        );
        record.put_enum("overlap", self.overlap.as_ref());
        record.put_enum("position", self.position.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_label_visibility", enumeration::<Visibility>())
            .field(
                "data_label_types",
                blocks::<DataLabelType>().max_items(DATA_LABEL_TYPES_MAX_ITEMS),
            )
            .field("label_color", color())
            .field("label_content", enumeration::<DataLabelContent>())
            .field("label_font_configuration", block::<FontConfiguration>())
            .field("measure_label_visibility", enumeration::<Visibility>())
            .field("overlap", enumeration::<DataLabelOverlap>())
            .field("position", enumeration::<DataLabelPosition>())
            .field("visibility", enumeration::<Visibility>())
    }
}

/// Which data points carry a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataLabelType {
    #[serde(rename = "DataPathLabelType")]
    DataPath(DataPathLabelType),
    #[serde(rename = "FieldLabelType")]
    Field(FieldLabelType),
    #[serde(rename = "MaximumLabelType")]
    Maximum(VisibilityOnlyLabel),
    #[serde(rename = "MinimumLabelType")]
    Minimum(VisibilityOnlyLabel),
    #[serde(rename = "RangeEndsLabelType")]
    RangeEnds(VisibilityOnlyLabel),
}

impl DataLabelType {
    const ALTERNATIVES: &'static [&'static str] = &[
        "data_path_label_type",
        "field_label_type",
        "maximum_label_type",
        "minimum_label_type",
        "range_ends_label_type",
    ];
}

impl Transcode for DataLabelType {
    const NAME: &'static str = "DataLabelType";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("data_path_label_type")
            .map(Self::DataPath)
            .or_else(|| record.block("field_label_type").map(Self::Field))
            .or_else(|| record.block("maximum_label_type").map(Self::Maximum))
            .or_else(|| record.block("minimum_label_type").map(Self::Minimum))
            .or_else(|| record.block("range_ends_label_type").map(Self::RangeEnds))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::DataPath(l) => record.put_block("data_path_label_type", Some(l)),
            Self::Field(l) => record.put_block("field_label_type", Some(l)),
            Self::Maximum(l) => record.put_block("maximum_label_type", Some(l)),
            Self::Minimum(l) => record.put_block("minimum_label_type", Some(l)),
            Self::RangeEnds(l) => record.put_block("range_ends_label_type", Some(l)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_path_label_type", block::<DataPathLabelType>())
            .field("field_label_type", block::<FieldLabelType>())
            .field("maximum_label_type", block::<VisibilityOnlyLabel>())
            .field("minimum_label_type", block::<VisibilityOnlyLabel>())
            .field("range_ends_label_type", block::<VisibilityOnlyLabel>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataPathLabelType {
    pub field_id: Option<String>,
    pub field_value: Option<String>,
    pub visibility: Option<Visibility>,
}

impl Transcode for DataPathLabelType {
    const NAME: &'static str = "DataPathLabelType";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            field_value: record.string("field_value"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("field_value", self.field_value.as_deref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", string().length(1, 512))
            .field("field_value", string().length(1, 2048))
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldLabelType {
    pub field_id: Option<String>,
    pub visibility: Option<Visibility>,
}

impl Transcode for FieldLabelType {
    const NAME: &'static str = "FieldLabelType";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", string().length(1, 512))
            .field("visibility", enumeration::<Visibility>())
    }
}

/// Shared shape of the maximum, minimum and range-ends label types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisibilityOnlyLabel {
    pub visibility: Option<Visibility>,
}

impl Transcode for VisibilityOnlyLabel {
    const NAME: &'static str = "VisibilityOnlyLabel";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LegendOptions {
    pub height: Option<String>,
    pub position: Option<LegendPosition>,
    pub title: Option<LabelOptions>,
    pub visibility: Option<Visibility>,
    pub width: Option<String>,
}

impl Transcode for LegendOptions {
    const NAME: &'static str = "LegendOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            height: record.string("height"),
            position: record.enumeration("position"),
            title: record.block("title"),
            visibility: record.enumeration("visibility"),
            width: record.string("width"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("height", self.height.as_deref());
        record.put_enum("position", self.position.as_ref());
        record.put_block("title", self.title.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record.put_string("width", self.width.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("height", string())
            .field("position", enumeration::<LegendPosition>())
            .field("title", block::<LabelOptions>())
            .field("visibility", enumeration::<Visibility>())
            .field("width", string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TooltipOptions {
    pub field_based_tooltip: Option<FieldBasedTooltip>,
    pub selected_tooltip_type: Option<SelectedTooltipType>,
    pub tooltip_visibility: Option<Visibility>,
}

impl Transcode for TooltipOptions {
    const NAME: &'static str = "TooltipOptions";

    // The dynamic key is `field_base_tooltip`; the typed field follows the
    // service spelling.
    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_based_tooltip: record.block("field_base_tooltip"),
            selected_tooltip_type: record.enumeration("selected_tooltip_type"),
            tooltip_visibility: record.enumeration("tooltip_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("field_base_tooltip", self.field_based_tooltip.as_ref());
        record.put_enum("selected_tooltip_type", self.selected_tooltip_type.as_ref());
        record.put_enum("tooltip_visibility", self.tooltip_visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_base_tooltip", block::<FieldBasedTooltip>())
            .field("selected_tooltip_type", enumeration::<SelectedTooltipType>())
            .field("tooltip_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldBasedTooltip {
    pub aggregation_visibility: Option<Visibility>,
    pub tooltip_fields: Vec<TooltipItem>,
    pub tooltip_title_type: Option<TooltipTitleType>,
}

impl Transcode for FieldBasedTooltip {
    const NAME: &'static str = "FieldBasedTooltip";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation_visibility: record.enumeration("aggregation_visibility"),
            tooltip_fields: record.blocks("tooltip_fields"),
            tooltip_title_type: record.enumeration("tooltip_title_type"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "aggregation_visibility",
            self.aggregation_visibility.as_ref(),
        );
        record.put_blocks("tooltip_fields", &self.tooltip_fields);
        record.put_enum("tooltip_title_type", self.tooltip_title_type.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("aggregation_visibility", enumeration::<Visibility>())
            .field(
                "tooltip_fields",
                blocks::<TooltipItem>().items(1, TOOLTIP_FIELDS_MAX_ITEMS),
            )
            .field("tooltip_title_type", enumeration::<TooltipTitleType>())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipItem {
    #[serde(rename = "ColumnTooltipItem")]
    Column(ColumnTooltipItem),
    #[serde(rename = "FieldTooltipItem")]
    Field(FieldTooltipItem),
}

impl TooltipItem {
    const ALTERNATIVES: &'static [&'static str] = &["column_tooltip_item", "field_tooltip_item"];
}

impl Transcode for TooltipItem {
    const NAME: &'static str = "TooltipItem";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("column_tooltip_item")
            .map(Self::Column)
            .or_else(|| record.block("field_tooltip_item").map(Self::Field))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Column(item) => record.put_block("column_tooltip_item", Some(item)),
            Self::Field(item) => record.put_block("field_tooltip_item", Some(item)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column_tooltip_item", block::<ColumnTooltipItem>())
            .field("field_tooltip_item", block::<FieldTooltipItem>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColumnTooltipItem {
    pub aggregation: Option<AggregationFunction>,
    pub column: Option<ColumnIdentifier>,
    pub label: Option<String>,
    pub visibility: Option<Visibility>,
}

impl Transcode for ColumnTooltipItem {
    const NAME: &'static str = "ColumnTooltipItem";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            aggregation: record.block("aggregation"),
            column: record.block("column"),
            label: record.string("label"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("aggregation", self.aggregation.as_ref());
        record.put_block("column", self.column.as_ref());
        record.put_string("label", self.label.as_deref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("aggregation", block::<AggregationFunction>())
            .field("column", block::<ColumnIdentifier>().required())
            .field("label", string())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldTooltipItem {
    pub field_id: Option<String>,
    pub label: Option<String>,
    pub visibility: Option<Visibility>,
}

impl Transcode for FieldTooltipItem {
    const NAME: &'static str = "FieldTooltipItem";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            label: record.string("label"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("label", self.label.as_deref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("label", string())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisualPalette {
    pub chart_color: Option<String>,
    pub color_map: Vec<DataPathColor>,
}

impl Transcode for VisualPalette {
    const NAME: &'static str = "VisualPalette";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            chart_color: record.string("chart_color"),
            color_map: record.blocks("color_map"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("chart_color", self.chart_color.as_deref());
        record.put_blocks("color_map", &self.color_map);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("chart_color", color()).field(
            "color_map",
            blocks::<DataPathColor>().max_items(COLOR_MAP_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataPathColor {
    pub color: Option<String>,
    pub element: Option<DataPathValue>,
    pub time_granularity: Option<TimeGranularity>,
}

impl Transcode for DataPathColor {
    const NAME: &'static str = "DataPathColor";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            element: record.block("element"),
            time_granularity: record.enumeration("time_granularity"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_block("element", self.element.as_ref());
        record.put_enum("time_granularity", self.time_granularity.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color().required())
            .field("element", block::<DataPathValue>().required())
            .field("time_granularity", enumeration::<TimeGranularity>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColorScale {
    pub color_fill_type: Option<ColorFillType>,
    pub colors: Vec<DataColor>,
    pub null_value_color: Option<DataColor>,
}

impl Transcode for ColorScale {
    const NAME: &'static str = "ColorScale";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color_fill_type: record.enumeration("color_fill_type"),
            colors: record.blocks("colors"),
            null_value_color: record.block("null_value_color"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("color_fill_type", self.color_fill_type.as_ref());
        record.put_blocks("colors", &self.colors);
        record.put_block("null_value_color", self.null_value_color.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "color_fill_type",
            enumeration::<ColorFillType>().required(),
        )
        .field("colors", blocks::<DataColor>().items(2, 3).required())
        .field("null_value_color", block::<DataColor>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataColor {
    pub color: Option<String>,
    pub data_value: Option<f64>,
}

impl Transcode for DataColor {
    const NAME: &'static str = "DataColor";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            data_value: record.float64("data_value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_float64("data_value", self.data_value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color()).field("data_value", float())
    }
}
