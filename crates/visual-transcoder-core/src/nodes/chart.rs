//! Chart building blocks shared by the axis-based visuals: axes, reference
//! lines, contribution analysis and small multiples.

use serde::{Deserialize, Serialize};

use super::common::{
    AggregationFunction, ColumnIdentifier, FontConfiguration, LabelOptions,
    NumericalAggregationFunction,
};
use super::enums::{
    AxisBinding, HorizontalTextAlignment, PanelBorderStyle, ReferenceLineLabelHorizontalPosition,
    ReferenceLineLabelVerticalPosition, ReferenceLinePatternType,
    ReferenceLineValueLabelRelativePosition, Visibility, WidgetStatus,
};
use super::formatting::NumericFormatConfiguration;
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{
    block, blocks, color, enumeration, float, identifier, int, string, NodeSchema,
};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisDisplayOptions {
    pub axis_line_visibility: Option<Visibility>,
    pub axis_offset: Option<String>,
    pub data_options: Option<AxisDataOptions>,
    pub grid_line_visibility: Option<Visibility>,
    pub scrollbar_options: Option<ScrollBarOptions>,
    pub tick_label_options: Option<AxisTickLabelOptions>,
}

impl Transcode for AxisDisplayOptions {
    const NAME: &'static str = "AxisDisplayOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_line_visibility: record.enumeration("axis_line_visibility"),
            axis_offset: record.string("axis_offset"),
            data_options: record.block("data_options"),
            grid_line_visibility: record.enumeration("grid_line_visibility"),
            scrollbar_options: record.block("scrollbar_options"),
            tick_label_options: record.block("tick_label_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("axis_line_visibility", self.axis_line_visibility.as_ref());
        record.put_string("axis_offset", self.axis_offset.as_deref());
        record.put_block("data_options", self.data_options.as_ref());
        record.put_enum("grid_line_visibility", self.grid_line_visibility.as_ref());
        record.put_block("scrollbar_options", self.scrollbar_options.as_ref());
        record.put_block("tick_label_options", self.tick_label_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_line_visibility", enumeration::<Visibility>())
            .field("axis_offset", string())
            .field("data_options", block::<AxisDataOptions>())
            .field("grid_line_visibility", enumeration::<Visibility>())
            .field("scrollbar_options", block::<ScrollBarOptions>())
            .field("tick_label_options", block::<AxisTickLabelOptions>())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisDataOptions {
    #[serde(rename = "DateAxisOptions")]
    Date(DateAxisOptions),
    #[serde(rename = "NumericAxisOptions")]
    Numeric(NumericAxisOptions),
}

impl AxisDataOptions {
    const ALTERNATIVES: &'static [&'static str] = &["date_axis_options", "numeric_axis_options"];
}

impl Transcode for AxisDataOptions {
    const NAME: &'static str = "AxisDataOptions";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("date_axis_options")
            .map(Self::Date)
            .or_else(|| record.block("numeric_axis_options").map(Self::Numeric))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Date(o) => record.put_block("date_axis_options", Some(o)),
            Self::Numeric(o) => record.put_block("numeric_axis_options", Some(o)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("date_axis_options", block::<DateAxisOptions>())
            .field("numeric_axis_options", block::<NumericAxisOptions>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateAxisOptions {
    pub missing_date_visibility: Option<Visibility>,
}

impl Transcode for DateAxisOptions {
    const NAME: &'static str = "DateAxisOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            missing_date_visibility: record.enumeration("missing_date_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "missing_date_visibility",
            self.missing_date_visibility.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("missing_date_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumericAxisOptions {
    pub range: Option<AxisDisplayRange>,
    pub scale: Option<AxisScale>,
}

impl Transcode for NumericAxisOptions {
    const NAME: &'static str = "NumericAxisOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            range: record.block("range"),
            scale: record.block("scale"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("range", self.range.as_ref());
        record.put_block("scale", self.scale.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("range", block::<AxisDisplayRange>())
            .field("scale", block::<AxisScale>())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisDisplayRange {
    #[serde(rename = "DataDriven")]
    DataDriven(AxisDisplayDataDrivenRange),
    #[serde(rename = "MinMax")]
    MinMax(AxisDisplayMinMaxRange),
}

impl AxisDisplayRange {
    const ALTERNATIVES: &'static [&'static str] = &["data_driven", "min_max"];
}

impl Transcode for AxisDisplayRange {
    const NAME: &'static str = "AxisDisplayRange";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("data_driven")
            .map(Self::DataDriven)
            .or_else(|| record.block("min_max").map(Self::MinMax))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::DataDriven(r) => record.put_block("data_driven", Some(r)),
            Self::MinMax(r) => record.put_block("min_max", Some(r)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_driven", block::<AxisDisplayDataDrivenRange>())
            .field("min_max", block::<AxisDisplayMinMaxRange>())
            .one_of(Self::ALTERNATIVES)
    }
}

/// A marker block: selecting it is the whole configuration, so it carries
/// no fields and flattens to `[{}]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDisplayDataDrivenRange {}

impl Transcode for AxisDisplayDataDrivenRange {
    const NAME: &'static str = "AxisDisplayDataDrivenRange";

    fn expand(_record: &Record) -> Option<Self> {
        Some(Self {})
    }

    fn flatten(&self) -> Record {
        Record::new()
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisDisplayMinMaxRange {
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
}

impl Transcode for AxisDisplayMinMaxRange {
    const NAME: &'static str = "AxisDisplayMinMaxRange";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            maximum: record.float64("maximum"),
            minimum: record.float64("minimum"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("maximum", self.maximum);
        record.put_float64("minimum", self.minimum);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("maximum", float()).field("minimum", float())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    #[serde(rename = "Linear")]
    Linear(AxisLinearScale),
    #[serde(rename = "Logarithmic")]
    Logarithmic(AxisLogarithmicScale),
}

impl AxisScale {
    const ALTERNATIVES: &'static [&'static str] = &["linear", "logarithmic"];
}

impl Transcode for AxisScale {
    const NAME: &'static str = "AxisScale";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("linear")
            .map(Self::Linear)
            .or_else(|| record.block("logarithmic").map(Self::Logarithmic))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Linear(s) => record.put_block("linear", Some(s)),
            Self::Logarithmic(s) => record.put_block("logarithmic", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("linear", block::<AxisLinearScale>())
            .field("logarithmic", block::<AxisLogarithmicScale>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisLinearScale {
    pub step_count: Option<i64>,
    pub step_size: Option<f64>,
}

impl Transcode for AxisLinearScale {
    const NAME: &'static str = "AxisLinearScale";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            step_count: record.int64("step_count"),
            step_size: record.float64("step_size"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("step_count", self.step_count);
        record.put_float64("step_size", self.step_size);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("step_count", int()).field("step_size", float())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisLogarithmicScale {
    pub base: Option<f64>,
}

impl Transcode for AxisLogarithmicScale {
    const NAME: &'static str = "AxisLogarithmicScale";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            base: record.float64("base"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("base", self.base);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("base", float())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScrollBarOptions {
    pub visibility: Option<Visibility>,
    pub visible_range: Option<VisibleRangeOptions>,
}

impl Transcode for ScrollBarOptions {
    const NAME: &'static str = "ScrollBarOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visibility: record.enumeration("visibility"),
            visible_range: record.block("visible_range"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("visibility", self.visibility.as_ref());
        record.put_block("visible_range", self.visible_range.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("visibility", enumeration::<Visibility>())
            .field("visible_range", block::<VisibleRangeOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisibleRangeOptions {
    pub percent_range: Option<PercentVisibleRange>,
}

impl Transcode for VisibleRangeOptions {
    const NAME: &'static str = "VisibleRangeOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            percent_range: record.block("percent_range"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("percent_range", self.percent_range.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("percent_range", block::<PercentVisibleRange>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PercentVisibleRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl Transcode for PercentVisibleRange {
    const NAME: &'static str = "PercentVisibleRange";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            from: record.float64("from"),
            to: record.float64("to"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("from", self.from);
        record.put_float64("to", self.to);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("from", float().float_range(0.0, 100.0))
            .field("to", float().float_range(0.0, 100.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisTickLabelOptions {
    pub label_options: Option<LabelOptions>,
    pub rotation_angle: Option<f64>,
}

impl Transcode for AxisTickLabelOptions {
    const NAME: &'static str = "AxisTickLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            label_options: record.block("label_options"),
            rotation_angle: record.float64("rotation_angle"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("label_options", self.label_options.as_ref());
        record.put_float64("rotation_angle", self.rotation_angle);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("label_options", block::<LabelOptions>())
            .field("rotation_angle", float().float_range(-360.0, 360.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChartAxisLabelOptions {
    pub axis_label_options: Vec<AxisLabelOptions>,
    pub sort_icon_visibility: Option<Visibility>,
    pub visibility: Option<Visibility>,
}

impl Transcode for ChartAxisLabelOptions {
    const NAME: &'static str = "ChartAxisLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_label_options: record.blocks("axis_label_options"),
            sort_icon_visibility: record.enumeration("sort_icon_visibility"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("axis_label_options", &self.axis_label_options);
        record.put_enum("sort_icon_visibility", self.sort_icon_visibility.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_label_options", blocks::<AxisLabelOptions>().max_items(100))
            .field("sort_icon_visibility", enumeration::<Visibility>())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisLabelOptions {
    pub apply_to: Option<AxisLabelReferenceOptions>,
    pub custom_label: Option<String>,
    pub font_configuration: Option<FontConfiguration>,
}

impl Transcode for AxisLabelOptions {
    const NAME: &'static str = "AxisLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            apply_to: record.block("apply_to"),
            custom_label: record.string("custom_label"),
            font_configuration: record.block("font_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("apply_to", self.apply_to.as_ref());
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("apply_to", block::<AxisLabelReferenceOptions>())
            .field("custom_label", string())
            .field("font_configuration", block::<FontConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AxisLabelReferenceOptions {
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
}

impl Transcode for AxisLabelReferenceOptions {
    const NAME: &'static str = "AxisLabelReferenceOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            field_id: record.string("field_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("field_id", identifier().required())
    }
}

/// Default dimensions offered when a reader runs contribution analysis on
/// a measure.
///
/// The dimension list is read from `contributor_dimensions` but written to
/// `contribution_dimensions`. Neither side is renamed until the intended
/// spelling is settled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContributionAnalysisDefault {
    pub contributor_dimensions: Vec<ColumnIdentifier>,
    pub measure_field_id: Option<String>,
}

impl ContributionAnalysisDefault {
    pub const EXPAND_KEY: &'static str = "contributor_dimensions";
    pub const FLATTEN_KEY: &'static str = "contribution_dimensions";
}

impl Transcode for ContributionAnalysisDefault {
    const NAME: &'static str = "ContributionAnalysisDefault";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            contributor_dimensions: record.blocks(Self::EXPAND_KEY),
            measure_field_id: record.string("measure_field_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks(Self::FLATTEN_KEY, &self.contributor_dimensions);
        record.put_string("measure_field_id", self.measure_field_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        // Both spellings are legal on the dynamic side.
        node.field(
            Self::EXPAND_KEY,
            blocks::<ColumnIdentifier>().items(1, 4),
        )
        .field(
            Self::FLATTEN_KEY,
            blocks::<ColumnIdentifier>().items(1, 4),
        )
        .field("measure_field_id", identifier().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLine {
    pub data_configuration: Option<ReferenceLineDataConfiguration>,
    pub label_configuration: Option<ReferenceLineLabelConfiguration>,
    pub status: Option<WidgetStatus>,
    pub style_configuration: Option<ReferenceLineStyleConfiguration>,
}

impl Transcode for ReferenceLine {
    const NAME: &'static str = "ReferenceLine";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_configuration: record.block("data_configuration"),
            label_configuration: record.block("label_configuration"),
            status: record.enumeration("status"),
            style_configuration: record.block("style_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("data_configuration", self.data_configuration.as_ref());
        record.put_block("label_configuration", self.label_configuration.as_ref());
        record.put_enum("status", self.status.as_ref());
        record.put_block("style_configuration", self.style_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "data_configuration",
            block::<ReferenceLineDataConfiguration>().required(),
        )
        .field(
            "label_configuration",
            block::<ReferenceLineLabelConfiguration>(),
        )
        .field("status", enumeration::<WidgetStatus>())
        .field(
            "style_configuration",
            block::<ReferenceLineStyleConfiguration>(),
        )
    }
}

/// Where a reference line takes its value from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReferenceLineSource {
    #[serde(rename = "DynamicConfiguration")]
    Dynamic(ReferenceLineDynamicDataConfiguration),
    #[serde(rename = "StaticConfiguration")]
    Static(ReferenceLineStaticDataConfiguration),
}

impl ReferenceLineSource {
    const ALTERNATIVES: &'static [&'static str] =
        &["dynamic_configuration", "static_configuration"];

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(ReferenceLineDataConfiguration::NAME, record, Self::ALTERNATIVES);
        record
            .block("dynamic_configuration")
            .map(Self::Dynamic)
            .or_else(|| record.block("static_configuration").map(Self::Static))
    }

    fn flatten_into(&self, record: &mut Record) {
        match self {
            Self::Dynamic(c) => record.put_block("dynamic_configuration", Some(c)),
            Self::Static(c) => record.put_block("static_configuration", Some(c)),
        }
    }
}

/// A mixed node: `axis_binding` sits beside the static-or-dynamic source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineDataConfiguration {
    pub axis_binding: Option<AxisBinding>,
    pub source: Option<ReferenceLineSource>,
}

impl Transcode for ReferenceLineDataConfiguration {
    const NAME: &'static str = "ReferenceLineDataConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_binding: record.enumeration("axis_binding"),
            source: ReferenceLineSource::expand(record),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("axis_binding", self.axis_binding.as_ref());
        if let Some(source) = &self.source {
            source.flatten_into(&mut record);
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_binding", enumeration::<AxisBinding>())
            .field(
                "dynamic_configuration",
                block::<ReferenceLineDynamicDataConfiguration>(),
            )
            .field(
                "static_configuration",
                block::<ReferenceLineStaticDataConfiguration>(),
            )
            .one_of(ReferenceLineSource::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineDynamicDataConfiguration {
    pub calculation: Option<NumericalAggregationFunction>,
    pub column: Option<ColumnIdentifier>,
    pub measure_aggregation_function: Option<AggregationFunction>,
}

impl Transcode for ReferenceLineDynamicDataConfiguration {
    const NAME: &'static str = "ReferenceLineDynamicDataConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            calculation: record.block("calculation"),
            column: record.block("column"),
            measure_aggregation_function: record.block("measure_aggregation_function"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("calculation", self.calculation.as_ref());
        record.put_block("column", self.column.as_ref());
        record.put_block(
            "measure_aggregation_function",
            self.measure_aggregation_function.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "calculation",
            block::<NumericalAggregationFunction>().required(),
        )
        .field("column", block::<ColumnIdentifier>().required())
        .field(
            "measure_aggregation_function",
            block::<AggregationFunction>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineStaticDataConfiguration {
    /// Required; the typed form has no unset state.
    pub value: f64,
}

impl Transcode for ReferenceLineStaticDataConfiguration {
    const NAME: &'static str = "ReferenceLineStaticDataConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            value: record.float64("value").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_required_float64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("value", float().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineLabelConfiguration {
    pub custom_label_configuration: Option<ReferenceLineCustomLabelConfiguration>,
    pub font_color: Option<String>,
    pub font_configuration: Option<FontConfiguration>,
    pub horizontal_position: Option<ReferenceLineLabelHorizontalPosition>,
    pub value_label_configuration: Option<ReferenceLineValueLabelConfiguration>,
    pub vertical_position: Option<ReferenceLineLabelVerticalPosition>,
}

impl Transcode for ReferenceLineLabelConfiguration {
    const NAME: &'static str = "ReferenceLineLabelConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label_configuration: record.block("custom_label_configuration"),
            font_color: record.string("font_color"),
            font_configuration: record.block("font_configuration"),
            horizontal_position: record.enumeration("horizontal_position"),
            value_label_configuration: record.block("value_label_configuration"),
            vertical_position: record.enumeration("vertical_position"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "custom_label_configuration",
            self.custom_label_configuration.as_ref(),
        );
        record.put_string("font_color", self.font_color.as_deref());
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record.put_enum("horizontal_position", self.horizontal_position.as_ref());
        record.put_block(
            "value_label_configuration",
            self.value_label_configuration.as_ref(),
        );
        record.put_enum("vertical_position", self.vertical_position.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "custom_label_configuration",
            block::<ReferenceLineCustomLabelConfiguration>(),
        )
        .field("font_color", color())
        .field("font_configuration", block::<FontConfiguration>())
        .field(
            "horizontal_position",
            enumeration::<ReferenceLineLabelHorizontalPosition>(),
        )
        .field(
            "value_label_configuration",
            block::<ReferenceLineValueLabelConfiguration>(),
        )
        .field(
            "vertical_position",
            enumeration::<ReferenceLineLabelVerticalPosition>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineCustomLabelConfiguration {
    pub custom_label: Option<String>,
}

impl Transcode for ReferenceLineCustomLabelConfiguration {
    const NAME: &'static str = "ReferenceLineCustomLabelConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label: record.string("custom_label"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("custom_label", self.custom_label.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_label", string().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineValueLabelConfiguration {
    pub format_configuration: Option<NumericFormatConfiguration>,
    pub relative_position: Option<ReferenceLineValueLabelRelativePosition>,
}

impl Transcode for ReferenceLineValueLabelConfiguration {
    const NAME: &'static str = "ReferenceLineValueLabelConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            format_configuration: record.block("format_configuration"),
            relative_position: record.enumeration("relative_position"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record.put_enum("relative_position", self.relative_position.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "format_configuration",
            block::<NumericFormatConfiguration>(),
        )
        .field(
            "relative_position",
            enumeration::<ReferenceLineValueLabelRelativePosition>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceLineStyleConfiguration {
    pub color: Option<String>,
    pub pattern: Option<ReferenceLinePatternType>,
}

impl Transcode for ReferenceLineStyleConfiguration {
    const NAME: &'static str = "ReferenceLineStyleConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            pattern: record.enumeration("pattern"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_enum("pattern", self.pattern.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color())
            .field("pattern", enumeration::<ReferenceLinePatternType>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SmallMultiplesOptions {
    pub max_visible_columns: Option<i64>,
    pub max_visible_rows: Option<i64>,
    pub panel_configuration: Option<PanelConfiguration>,
}

impl Transcode for SmallMultiplesOptions {
    const NAME: &'static str = "SmallMultiplesOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            max_visible_columns: record.int64("max_visible_columns"),
            max_visible_rows: record.int64("max_visible_rows"),
            panel_configuration: record.block("panel_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("max_visible_columns", self.max_visible_columns);
        record.put_int64("max_visible_rows", self.max_visible_rows);
        record.put_block("panel_configuration", self.panel_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("max_visible_columns", int().range(1, 10))
            .field("max_visible_rows", int().range(1, 10))
            .field("panel_configuration", block::<PanelConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PanelConfiguration {
    pub background_color: Option<String>,
    pub background_visibility: Option<Visibility>,
    pub border_color: Option<String>,
    pub border_style: Option<PanelBorderStyle>,
    pub border_thickness: Option<String>,
    pub border_visibility: Option<Visibility>,
    pub gutter_spacing: Option<String>,
    pub gutter_visibility: Option<Visibility>,
    pub title: Option<PanelTitleOptions>,
}

impl Transcode for PanelConfiguration {
    const NAME: &'static str = "PanelConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            background_color: record.string("background_color"),
            background_visibility: record.enumeration("background_visibility"),
            border_color: record.string("border_color"),
            border_style: record.enumeration("border_style"),
            border_thickness: record.string("border_thickness"),
            border_visibility: record.enumeration("border_visibility"),
            gutter_spacing: record.string("gutter_spacing"),
            gutter_visibility: record.enumeration("gutter_visibility"),
            title: record.block("title"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("background_color", self.background_color.as_deref());
        record.put_enum("background_visibility", self.background_visibility.as_ref());
        record.put_string("border_color", self.border_color.as_deref());
        record.put_enum("border_style", self.border_style.as_ref());
        record.put_string("border_thickness", self.border_thickness.as_deref());
        record.put_enum("border_visibility", self.border_visibility.as_ref());
        record.put_string("gutter_spacing", self.gutter_spacing.as_deref());
        record.put_enum("gutter_visibility", self.gutter_visibility.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("background_color", color())
            .field("background_visibility", enumeration::<Visibility>())
            .field("border_color", color())
            .field("border_style", enumeration::<PanelBorderStyle>())
            .field("border_thickness", string())
            .field("border_visibility", enumeration::<Visibility>())
            .field("gutter_spacing", string())
            .field("gutter_visibility", enumeration::<Visibility>())
            .field("title", block::<PanelTitleOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PanelTitleOptions {
    pub font_configuration: Option<FontConfiguration>,
    pub horizontal_text_alignment: Option<HorizontalTextAlignment>,
    pub visibility: Option<Visibility>,
}

impl Transcode for PanelTitleOptions {
    const NAME: &'static str = "PanelTitleOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            font_configuration: record.block("font_configuration"),
            horizontal_text_alignment: record.enumeration("horizontal_text_alignment"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record.put_enum(
            "horizontal_text_alignment",
            self.horizontal_text_alignment.as_ref(),
        );
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("font_configuration", block::<FontConfiguration>())
            .field(
                "horizontal_text_alignment",
                enumeration::<HorizontalTextAlignment>(),
            )
            .field("visibility", enumeration::<Visibility>())
    }
}
