use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions};
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, VisualPalette};
use crate::nodes::{
    DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS,
};
use crate::schema::{block, blocks, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<WaterfallChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for WaterfallVisual {
    const NAME: &'static str = "WaterfallVisual";

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
            .field("chart_configuration", block::<WaterfallChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallChartConfiguration {
    pub category_axis_display_options: Option<AxisDisplayOptions>,
    pub category_axis_label_options: Option<ChartAxisLabelOptions>,
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<WaterfallChartFieldWells>,
    pub legend: Option<LegendOptions>,
    pub primary_y_axis_display_options: Option<AxisDisplayOptions>,
    pub primary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub sort_configuration: Option<WaterfallChartSortConfiguration>,
    pub visual_palette: Option<VisualPalette>,
    pub waterfall_chart_options: Option<WaterfallChartOptions>,
}

impl Transcode for WaterfallChartConfiguration {
    const NAME: &'static str = "WaterfallChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_axis_display_options: record.block("category_axis_display_options"),
            category_axis_label_options: record.block("category_axis_label_options"),
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            primary_y_axis_display_options: record.block("primary_y_axis_display_options"),
            primary_y_axis_label_options: record.block("primary_y_axis_label_options"),
            sort_configuration: record.block("sort_configuration"),
            visual_palette: record.block("visual_palette"),
            waterfall_chart_options: record.block("waterfall_chart_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "category_axis_display_options",
            self.category_axis_display_options.as_ref(),
        );
        record.put_block(
            "category_axis_label_options",
            self.category_axis_label_options.as_ref(),
        );
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block(
            "primary_y_axis_display_options",
            self.primary_y_axis_display_options.as_ref(),
        );
        record.put_block(
            "primary_y_axis_label_options",
            self.primary_y_axis_label_options.as_ref(),
        );
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record.put_block("waterfall_chart_options", self.waterfall_chart_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category_axis_display_options",
            block::<AxisDisplayOptions>(),
        )
        .field(
            "category_axis_label_options",
            block::<ChartAxisLabelOptions>(),
        )
        .field("data_labels", block::<DataLabelOptions>())
        .field("field_wells", block::<WaterfallChartFieldWells>())
        .field("legend", block::<LegendOptions>())
        .field(
            "primary_y_axis_display_options",
            block::<AxisDisplayOptions>(),
        )
        .field(
            "primary_y_axis_label_options",
            block::<ChartAxisLabelOptions>(),
        )
        .field(
            "sort_configuration",
            block::<WaterfallChartSortConfiguration>(),
        )
        .field("visual_palette", block::<VisualPalette>())
        .field("waterfall_chart_options", block::<WaterfallChartOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallChartFieldWells {
    pub waterfall_chart_aggregated_field_wells: Option<WaterfallChartAggregatedFieldWells>,
}

impl Transcode for WaterfallChartFieldWells {
    const NAME: &'static str = "WaterfallChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            waterfall_chart_aggregated_field_wells: record
                .block("waterfall_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "waterfall_chart_aggregated_field_wells",
            self.waterfall_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "waterfall_chart_aggregated_field_wells",
            block::<WaterfallChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallChartAggregatedFieldWells {
    pub breakdowns: Vec<DimensionField>,
    pub categories: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for WaterfallChartAggregatedFieldWells {
    const NAME: &'static str = "WaterfallChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            breakdowns: record.blocks("breakdowns"),
            categories: record.blocks("categories"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("breakdowns", &self.breakdowns);
        record.put_blocks("categories", &self.categories);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "breakdowns",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "categories",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallChartSortConfiguration {
    pub breakdown_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
}

impl Transcode for WaterfallChartSortConfiguration {
    const NAME: &'static str = "WaterfallChartSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            breakdown_items_limit: record.block("breakdown_items_limit"),
            category_sort: record.blocks("category_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("breakdown_items_limit", self.breakdown_items_limit.as_ref());
        record.put_blocks("category_sort", &self.category_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("breakdown_items_limit", block::<ItemsLimitConfiguration>())
            .field(
                "category_sort",
                blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterfallChartOptions {
    pub total_bar_label: Option<String>,
}

impl Transcode for WaterfallChartOptions {
    const NAME: &'static str = "WaterfallChartOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            total_bar_label: record.string("total_bar_label"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("total_bar_label", self.total_bar_label.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("total_bar_label", string())
    }
}
