use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions};
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{RadarChartShape, Visibility};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{LegendOptions, VisualPalette};
use crate::nodes::FIELD_SORT_OPTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, color, enumeration, float, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<RadarChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for RadarChartVisual {
    const NAME: &'static str = "RadarChartVisual";

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
            .field("chart_configuration", block::<RadarChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartConfiguration {
    pub alternate_band_colors_visibility: Option<Visibility>,
    pub alternate_band_even_color: Option<String>,
    pub alternate_band_odd_color: Option<String>,
    pub base_series_settings: Option<RadarChartSeriesSettings>,
    pub category_axis: Option<AxisDisplayOptions>,
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub color_axis: Option<AxisDisplayOptions>,
    pub color_label_options: Option<ChartAxisLabelOptions>,
    pub field_wells: Option<RadarChartFieldWells>,
    pub legend: Option<LegendOptions>,
    pub shape: Option<RadarChartShape>,
    pub sort_configuration: Option<RadarChartSortConfiguration>,
    /// Degrees; zero leaves the first axis at twelve o'clock.
    pub start_angle: Option<f64>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for RadarChartConfiguration {
    const NAME: &'static str = "RadarChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            alternate_band_colors_visibility: record
                .enumeration("alternate_band_colors_visibility"),
            alternate_band_even_color: record.string("alternate_band_even_color"),
            alternate_band_odd_color: record.string("alternate_band_odd_color"),
            base_series_settings: record.block("base_series_settings"),
            category_axis: record.block("category_axis"),
            category_label_options: record.block("category_label_options"),
            color_axis: record.block("color_axis"),
            color_label_options: record.block("color_label_options"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            shape: record.enumeration("shape"),
            sort_configuration: record.block("sort_configuration"),
            start_angle: record.float64("start_angle"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "alternate_band_colors_visibility",
            self.alternate_band_colors_visibility.as_ref(),
        );
        record.put_string(
            "alternate_band_even_color",
            self.alternate_band_even_color.as_deref(),
        );
        record.put_string(
            "alternate_band_odd_color",
            self.alternate_band_odd_color.as_deref(),
        );
        record.put_block("base_series_settings", self.base_series_settings.as_ref());
        record.put_block("category_axis", self.category_axis.as_ref());
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_block("color_axis", self.color_axis.as_ref());
        record.put_block("color_label_options", self.color_label_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_enum("shape", self.shape.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_float64("start_angle", self.start_angle);
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "alternate_band_colors_visibility",
            enumeration::<Visibility>(),
        )
        .field("alternate_band_even_color", color())
        .field("alternate_band_odd_color", color())
        .field("base_series_settings", block::<RadarChartSeriesSettings>())
        .field("category_axis", block::<AxisDisplayOptions>())
        .field("category_label_options", block::<ChartAxisLabelOptions>())
        .field("color_axis", block::<AxisDisplayOptions>())
        .field("color_label_options", block::<ChartAxisLabelOptions>())
        .field("field_wells", block::<RadarChartFieldWells>())
        .field("legend", block::<LegendOptions>())
        .field("shape", enumeration::<RadarChartShape>())
        .field("sort_configuration", block::<RadarChartSortConfiguration>())
        .field("start_angle", float().float_range(-360.0, 360.0))
        .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartSeriesSettings {
    pub area_style_settings: Option<RadarChartAreaStyleSettings>,
}

impl Transcode for RadarChartSeriesSettings {
    const NAME: &'static str = "RadarChartSeriesSettings";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            area_style_settings: record.block("area_style_settings"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("area_style_settings", self.area_style_settings.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "area_style_settings",
            block::<RadarChartAreaStyleSettings>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartAreaStyleSettings {
    pub visibility: Option<Visibility>,
}

impl Transcode for RadarChartAreaStyleSettings {
    const NAME: &'static str = "RadarChartAreaStyleSettings";

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
pub struct RadarChartFieldWells {
    pub radar_chart_aggregated_field_wells: Option<RadarChartAggregatedFieldWells>,
}

impl Transcode for RadarChartFieldWells {
    const NAME: &'static str = "RadarChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            radar_chart_aggregated_field_wells: record
                .block("radar_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "radar_chart_aggregated_field_wells",
            self.radar_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "radar_chart_aggregated_field_wells",
            block::<RadarChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub color: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for RadarChartAggregatedFieldWells {
    const NAME: &'static str = "RadarChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category: record.blocks("category"),
            color: record.blocks("color"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category", &self.category);
        record.put_blocks("color", &self.color);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category", blocks::<DimensionField>().max_items(1))
            .field("color", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(20))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RadarChartSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
    pub color_items_limit: Option<ItemsLimitConfiguration>,
    pub color_sort: Vec<FieldSortOptions>,
}

impl Transcode for RadarChartSortConfiguration {
    const NAME: &'static str = "RadarChartSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_items_limit: record.block("category_items_limit"),
            category_sort: record.blocks("category_sort"),
            color_items_limit: record.block("color_items_limit"),
            color_sort: record.blocks("color_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_items_limit", self.category_items_limit.as_ref());
        record.put_blocks("category_sort", &self.category_sort);
        record.put_block("color_items_limit", self.color_items_limit.as_ref());
        record.put_blocks("color_sort", &self.color_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_items_limit", block::<ItemsLimitConfiguration>())
            .field(
                "category_sort",
                blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
            )
            .field("color_items_limit", block::<ItemsLimitConfiguration>())
            .field(
                "color_sort",
                blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
            )
    }
}
