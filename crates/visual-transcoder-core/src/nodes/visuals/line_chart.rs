use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{
    AxisDisplayOptions, ChartAxisLabelOptions, ContributionAnalysisDefault, ReferenceLine,
    SmallMultiplesOptions,
};
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{
    AxisBinding, LineChartLineStyle, LineChartMarkerShape, LineChartType, LineInterpolation,
    MissingDataTreatmentOption, Visibility,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{
    CONTRIBUTION_ANALYSIS_MAX_ITEMS, DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS,
    FORECASTS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS, REFERENCE_LINES_MAX_ITEMS, SERIES_MAX_ITEMS,
};
use crate::oneof;
use crate::schema::{
    block, blocks, color, enumeration, float, identifier, int, string, timestamp, NodeSchema,
};
use crate::value::Record;

const MISSING_DATA_CONFIGURATIONS_MAX_ITEMS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<LineChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for LineChartVisual {
    const NAME: &'static str = "LineChartVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            chart_configuration: record.block("chart_configuration"),
            column_hierarchies: record.blocks("column_hierarchies"),
            subtitle: record.block("subtitle"),
            title: record.block("title"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("visual_id", self.visual_id.as_deref());
        record.put_blocks("actions", &self.actions);
        record.put_block("chart_configuration", self.chart_configuration.as_ref());
        record.put_blocks("column_hierarchies", &self.column_hierarchies);
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_column_hierarchies(describe_header(node))
            .field("chart_configuration", block::<LineChartConfiguration>())
    }
}

/// The widest configuration of any visual: series overrides, forecasts and
/// a pair of value axes on top of the usual chart options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartConfiguration {
    pub contribution_analysis_defaults: Vec<ContributionAnalysisDefault>,
    pub data_labels: Option<DataLabelOptions>,
    pub default_series_settings: Option<LineChartDefaultSeriesSettings>,
    pub field_wells: Option<LineChartFieldWells>,
    pub forecast_configurations: Vec<ForecastConfiguration>,
    pub legend: Option<LegendOptions>,
    pub primary_y_axis_display_options: Option<LineSeriesAxisDisplayOptions>,
    pub primary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub reference_lines: Vec<ReferenceLine>,
    pub secondary_y_axis_display_options: Option<LineSeriesAxisDisplayOptions>,
    pub secondary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub series: Vec<SeriesItem>,
    pub small_multiples_options: Option<SmallMultiplesOptions>,
    pub sort_configuration: Option<LineChartSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    #[serde(rename = "Type")]
    pub chart_type: Option<LineChartType>,
    pub visual_palette: Option<VisualPalette>,
    pub x_axis_display_options: Option<AxisDisplayOptions>,
    pub x_axis_label_options: Option<ChartAxisLabelOptions>,
}

impl Transcode for LineChartConfiguration {
    const NAME: &'static str = "LineChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            contribution_analysis_defaults: record.blocks("contribution_analysis_defaults"),
            data_labels: record.block("data_labels"),
            default_series_settings: record.block("default_series_settings"),
            field_wells: record.block("field_wells"),
            forecast_configurations: record.blocks("forecast_configurations"),
            legend: record.block("legend"),
            primary_y_axis_display_options: record.block("primary_y_axis_display_options"),
            primary_y_axis_label_options: record.block("primary_y_axis_label_options"),
            reference_lines: record.blocks("reference_lines"),
            secondary_y_axis_display_options: record.block("secondary_y_axis_display_options"),
            secondary_y_axis_label_options: record.block("secondary_y_axis_label_options"),
            series: record.blocks("series"),
            small_multiples_options: record.block("small_multiples_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            chart_type: record.enumeration("type"),
            visual_palette: record.block("visual_palette"),
            x_axis_display_options: record.block("x_axis_display_options"),
            x_axis_label_options: record.block("x_axis_label_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks(
            "contribution_analysis_defaults",
            &self.contribution_analysis_defaults,
        );
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block(
            "default_series_settings",
            self.default_series_settings.as_ref(),
        );
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_blocks("forecast_configurations", &self.forecast_configurations);
        record.put_block("legend", self.legend.as_ref());
        record.put_block(
            "primary_y_axis_display_options",
            self.primary_y_axis_display_options.as_ref(),
        );
        record.put_block(
            "primary_y_axis_label_options",
            self.primary_y_axis_label_options.as_ref(),
        );
        record.put_blocks("reference_lines", &self.reference_lines);
        record.put_block(
            "secondary_y_axis_display_options",
            self.secondary_y_axis_display_options.as_ref(),
        );
        record.put_block(
            "secondary_y_axis_label_options",
            self.secondary_y_axis_label_options.as_ref(),
        );
        record.put_blocks("series", &self.series);
        record.put_block("small_multiples_options", self.small_multiples_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_enum("type", self.chart_type.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record.put_block("x_axis_display_options", self.x_axis_display_options.as_ref());
        record.put_block("x_axis_label_options", self.x_axis_label_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "contribution_analysis_defaults",
            blocks::<ContributionAnalysisDefault>().items(1, CONTRIBUTION_ANALYSIS_MAX_ITEMS),
        )
        .field("data_labels", block::<DataLabelOptions>())
        .field(
            "default_series_settings",
            block::<LineChartDefaultSeriesSettings>(),
        )
        .field("field_wells", block::<LineChartFieldWells>())
        .field(
            "forecast_configurations",
            blocks::<ForecastConfiguration>().max_items(FORECASTS_MAX_ITEMS),
        )
        .field("legend", block::<LegendOptions>())
        .field(
            "primary_y_axis_display_options",
            block::<LineSeriesAxisDisplayOptions>(),
        )
        .field(
            "primary_y_axis_label_options",
            block::<ChartAxisLabelOptions>(),
        )
        .field(
            "reference_lines",
            blocks::<ReferenceLine>().max_items(REFERENCE_LINES_MAX_ITEMS),
        )
        .field(
            "secondary_y_axis_display_options",
            block::<LineSeriesAxisDisplayOptions>(),
        )
        .field(
            "secondary_y_axis_label_options",
            block::<ChartAxisLabelOptions>(),
        )
        .field("series", blocks::<SeriesItem>().max_items(SERIES_MAX_ITEMS))
        .field("small_multiples_options", block::<SmallMultiplesOptions>())
        .field("sort_configuration", block::<LineChartSortConfiguration>())
        .field("tooltip", block::<TooltipOptions>())
        .field("type", enumeration::<LineChartType>())
        .field("visual_palette", block::<VisualPalette>())
        .field("x_axis_display_options", block::<AxisDisplayOptions>())
        .field("x_axis_label_options", block::<ChartAxisLabelOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartDefaultSeriesSettings {
    pub axis_binding: Option<AxisBinding>,
    pub line_style_settings: Option<LineChartLineStyleSettings>,
    pub marker_style_settings: Option<LineChartMarkerStyleSettings>,
}

impl Transcode for LineChartDefaultSeriesSettings {
    const NAME: &'static str = "LineChartDefaultSeriesSettings";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_binding: record.enumeration("axis_binding"),
            line_style_settings: record.block("line_style_settings"),
            marker_style_settings: record.block("marker_style_settings"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("axis_binding", self.axis_binding.as_ref());
        record.put_block("line_style_settings", self.line_style_settings.as_ref());
        record.put_block("marker_style_settings", self.marker_style_settings.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_binding", enumeration::<AxisBinding>())
            .field("line_style_settings", block::<LineChartLineStyleSettings>())
            .field(
                "marker_style_settings",
                block::<LineChartMarkerStyleSettings>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartLineStyleSettings {
    pub line_interpolation: Option<LineInterpolation>,
    pub line_style: Option<LineChartLineStyle>,
    pub line_visibility: Option<Visibility>,
    pub line_width: Option<String>,
}

impl Transcode for LineChartLineStyleSettings {
    const NAME: &'static str = "LineChartLineStyleSettings";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            line_interpolation: record.enumeration("line_interpolation"),
            line_style: record.enumeration("line_style"),
            line_visibility: record.enumeration("line_visibility"),
            line_width: record.string("line_width"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("line_interpolation", self.line_interpolation.as_ref());
        record.put_enum("line_style", self.line_style.as_ref());
        record.put_enum("line_visibility", self.line_visibility.as_ref());
        record.put_string("line_width", self.line_width.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("line_interpolation", enumeration::<LineInterpolation>())
            .field("line_style", enumeration::<LineChartLineStyle>())
            .field("line_visibility", enumeration::<Visibility>())
            .field("line_width", string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartMarkerStyleSettings {
    pub marker_color: Option<String>,
    pub marker_shape: Option<LineChartMarkerShape>,
    pub marker_size: Option<String>,
    pub marker_visibility: Option<Visibility>,
}

impl Transcode for LineChartMarkerStyleSettings {
    const NAME: &'static str = "LineChartMarkerStyleSettings";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            marker_color: record.string("marker_color"),
            marker_shape: record.enumeration("marker_shape"),
            marker_size: record.string("marker_size"),
            marker_visibility: record.enumeration("marker_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("marker_color", self.marker_color.as_deref());
        record.put_enum("marker_shape", self.marker_shape.as_ref());
        record.put_string("marker_size", self.marker_size.as_deref());
        record.put_enum("marker_visibility", self.marker_visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("marker_color", color())
            .field("marker_shape", enumeration::<LineChartMarkerShape>())
            .field("marker_size", string())
            .field("marker_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartFieldWells {
    pub line_chart_aggregated_field_wells: Option<LineChartAggregatedFieldWells>,
}

impl Transcode for LineChartFieldWells {
    const NAME: &'static str = "LineChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            line_chart_aggregated_field_wells: record.block("line_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "line_chart_aggregated_field_wells",
            self.line_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "line_chart_aggregated_field_wells",
            block::<LineChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub colors: Vec<DimensionField>,
    pub small_multiples: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for LineChartAggregatedFieldWells {
    const NAME: &'static str = "LineChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category: record.blocks("category"),
            colors: record.blocks("colors"),
            small_multiples: record.blocks("small_multiples"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category", &self.category);
        record.put_blocks("colors", &self.colors);
        record.put_blocks("small_multiples", &self.small_multiples);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "colors",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field("small_multiples", blocks::<DimensionField>().max_items(1))
        .field(
            "values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ForecastConfiguration {
    pub forecast_properties: Option<TimeBasedForecastProperties>,
    pub scenario: Option<ForecastScenario>,
}

impl Transcode for ForecastConfiguration {
    const NAME: &'static str = "ForecastConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            forecast_properties: record.block("forecast_properties"),
            scenario: record.block("scenario"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("forecast_properties", self.forecast_properties.as_ref());
        record.put_block("scenario", self.scenario.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "forecast_properties",
            block::<TimeBasedForecastProperties>(),
        )
        .field("scenario", block::<ForecastScenario>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimeBasedForecastProperties {
    pub lower_boundary: Option<f64>,
    pub periods_backward: Option<i64>,
    pub periods_forward: Option<i64>,
    pub prediction_interval: Option<i64>,
    pub seasonality: Option<i64>,
    pub upper_boundary: Option<f64>,
}

impl Transcode for TimeBasedForecastProperties {
    const NAME: &'static str = "TimeBasedForecastProperties";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            lower_boundary: record.float64("lower_boundary"),
            periods_backward: record.int64("periods_backward"),
            periods_forward: record.int64("periods_forward"),
            prediction_interval: record.int64("prediction_interval"),
            seasonality: record.int64("seasonality"),
            upper_boundary: record.float64("upper_boundary"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("lower_boundary", self.lower_boundary);
        record.put_int64("periods_backward", self.periods_backward);
        record.put_int64("periods_forward", self.periods_forward);
        record.put_int64("prediction_interval", self.prediction_interval);
        record.put_int64("seasonality", self.seasonality);
        record.put_float64("upper_boundary", self.upper_boundary);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("lower_boundary", float())
            .field("periods_backward", int().range(0, 1000))
            .field("periods_forward", int().range(1, 1000))
            .field("prediction_interval", int().range(50, 95))
            .field("seasonality", int().range(0, 180))
            .field("upper_boundary", float())
    }
}

/// A what-if adjustment applied to the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForecastScenario {
    #[serde(rename = "WhatIfPointScenario")]
    Point(WhatIfPointScenario),
    #[serde(rename = "WhatIfRangeScenario")]
    Range(WhatIfRangeScenario),
}

impl ForecastScenario {
    const ALTERNATIVES: &'static [&'static str] =
        &["what_if_point_scenario", "what_if_range_scenario"];
}

impl Transcode for ForecastScenario {
    const NAME: &'static str = "ForecastScenario";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("what_if_point_scenario")
            .map(Self::Point)
            .or_else(|| record.block("what_if_range_scenario").map(Self::Range))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Point(s) => record.put_block("what_if_point_scenario", Some(s)),
            Self::Range(s) => record.put_block("what_if_range_scenario", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("what_if_point_scenario", block::<WhatIfPointScenario>())
            .field("what_if_range_scenario", block::<WhatIfRangeScenario>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WhatIfPointScenario {
    pub date: Option<DateTime<Utc>>,
    pub value: f64,
}

impl Transcode for WhatIfPointScenario {
    const NAME: &'static str = "WhatIfPointScenario";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            date: record.timestamp("date"),
            value: record.float64("value").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_timestamp("date", self.date.as_ref());
        record.put_required_float64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("date", timestamp().required())
            .field("value", float().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WhatIfRangeScenario {
    pub end_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub value: f64,
}

impl Transcode for WhatIfRangeScenario {
    const NAME: &'static str = "WhatIfRangeScenario";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            end_date: record.timestamp("end_date"),
            start_date: record.timestamp("start_date"),
            value: record.float64("value").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_timestamp("end_date", self.end_date.as_ref());
        record.put_timestamp("start_date", self.start_date.as_ref());
        record.put_required_float64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("end_date", timestamp().required())
            .field("start_date", timestamp().required())
            .field("value", float().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineSeriesAxisDisplayOptions {
    pub axis_options: Option<AxisDisplayOptions>,
    pub missing_data_configurations: Vec<MissingDataConfiguration>,
}

impl Transcode for LineSeriesAxisDisplayOptions {
    const NAME: &'static str = "LineSeriesAxisDisplayOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_options: record.block("axis_options"),
            missing_data_configurations: record.blocks("missing_data_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("axis_options", self.axis_options.as_ref());
        record.put_blocks(
            "missing_data_configuration",
            &self.missing_data_configurations,
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_options", block::<AxisDisplayOptions>())
            .field(
                "missing_data_configuration",
                blocks::<MissingDataConfiguration>()
                    .max_items(MISSING_DATA_CONFIGURATIONS_MAX_ITEMS),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MissingDataConfiguration {
    pub treatment_option: Option<MissingDataTreatmentOption>,
}

impl Transcode for MissingDataConfiguration {
    const NAME: &'static str = "MissingDataConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            treatment_option: record.enumeration("treatment_option"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("treatment_option", self.treatment_option.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "treatment_option",
            enumeration::<MissingDataTreatmentOption>(),
        )
    }
}

/// Per-series style override, addressed either by a whole field or by one
/// value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesItem {
    #[serde(rename = "DataFieldSeriesItem")]
    DataField(DataFieldSeriesItem),
    #[serde(rename = "FieldSeriesItem")]
    Field(FieldSeriesItem),
}

impl SeriesItem {
    const ALTERNATIVES: &'static [&'static str] = &["data_field_series_item", "field_series_item"];
}

impl Transcode for SeriesItem {
    const NAME: &'static str = "SeriesItem";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("data_field_series_item")
            .map(Self::DataField)
            .or_else(|| record.block("field_series_item").map(Self::Field))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::DataField(s) => record.put_block("data_field_series_item", Some(s)),
            Self::Field(s) => record.put_block("field_series_item", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_field_series_item", block::<DataFieldSeriesItem>())
            .field("field_series_item", block::<FieldSeriesItem>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataFieldSeriesItem {
    pub axis_binding: Option<AxisBinding>,
    pub field_id: Option<String>,
    pub field_value: Option<String>,
    pub settings: Option<LineChartSeriesSettings>,
}

impl Transcode for DataFieldSeriesItem {
    const NAME: &'static str = "DataFieldSeriesItem";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_binding: record.enumeration("axis_binding"),
            field_id: record.string("field_id"),
            field_value: record.string("field_value"),
            settings: record.block("settings"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("axis_binding", self.axis_binding.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("field_value", self.field_value.as_deref());
        record.put_block("settings", self.settings.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_binding", enumeration::<AxisBinding>().required())
            .field("field_id", identifier().required())
            .field("field_value", string())
            .field("settings", block::<LineChartSeriesSettings>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldSeriesItem {
    pub axis_binding: Option<AxisBinding>,
    pub field_id: Option<String>,
    pub settings: Option<LineChartSeriesSettings>,
}

impl Transcode for FieldSeriesItem {
    const NAME: &'static str = "FieldSeriesItem";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            axis_binding: record.enumeration("axis_binding"),
            field_id: record.string("field_id"),
            settings: record.block("settings"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("axis_binding", self.axis_binding.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("settings", self.settings.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("axis_binding", enumeration::<AxisBinding>().required())
            .field("field_id", identifier().required())
            .field("settings", block::<LineChartSeriesSettings>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartSeriesSettings {
    pub line_style_settings: Option<LineChartLineStyleSettings>,
    pub marker_style_settings: Option<LineChartMarkerStyleSettings>,
}

impl Transcode for LineChartSeriesSettings {
    const NAME: &'static str = "LineChartSeriesSettings";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            line_style_settings: record.block("line_style_settings"),
            marker_style_settings: record.block("marker_style_settings"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("line_style_settings", self.line_style_settings.as_ref());
        record.put_block("marker_style_settings", self.marker_style_settings.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("line_style_settings", block::<LineChartLineStyleSettings>())
            .field(
                "marker_style_settings",
                block::<LineChartMarkerStyleSettings>(),
            )
    }
}

/// Category and small-multiples limits are written back under the same key
/// they are read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LineChartSortConfiguration {
    pub category_items_limit_configuration: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
    pub color_items_limit_configuration: Option<ItemsLimitConfiguration>,
    pub small_multiples_limit_configuration: Option<ItemsLimitConfiguration>,
    pub small_multiples_sort: Vec<FieldSortOptions>,
}

impl Transcode for LineChartSortConfiguration {
    const NAME: &'static str = "LineChartSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_items_limit_configuration: record
                .block("category_items_limit_configuration"),
            category_sort: record.blocks("category_sort"),
            color_items_limit_configuration: record.block("color_items_limit_configuration"),
            small_multiples_limit_configuration: record
                .block("small_multiples_limit_configuration"),
            small_multiples_sort: record.blocks("small_multiples_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "category_items_limit_configuration",
            self.category_items_limit_configuration.as_ref(),
        );
        record.put_blocks("category_sort", &self.category_sort);
        record.put_block(
            "color_items_limit_configuration",
            self.color_items_limit_configuration.as_ref(),
        );
        record.put_block(
            "small_multiples_limit_configuration",
            self.small_multiples_limit_configuration.as_ref(),
        );
        record.put_blocks("small_multiples_sort", &self.small_multiples_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category_items_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "category_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
        .field(
            "color_items_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "small_multiples_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "small_multiples_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}
