use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions, ReferenceLine};
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::BarsArrangement;
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{
    DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS,
    REFERENCE_LINES_MAX_ITEMS,
};
use crate::schema::{block, blocks, enumeration, NodeSchema};
use crate::value::Record;

/// Bars and lines sharing one category axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComboChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<ComboChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for ComboChartVisual {
    const NAME: &'static str = "ComboChartVisual";

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
            .field("chart_configuration", block::<ComboChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComboChartConfiguration {
    pub bar_data_labels: Option<DataLabelOptions>,
    pub bars_arrangement: Option<BarsArrangement>,
    pub category_axis: Option<AxisDisplayOptions>,
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub color_label_options: Option<ChartAxisLabelOptions>,
    pub field_wells: Option<ComboChartFieldWells>,
    pub legend: Option<LegendOptions>,
    pub line_data_labels: Option<DataLabelOptions>,
    pub primary_y_axis_display_options: Option<AxisDisplayOptions>,
    pub primary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub reference_lines: Vec<ReferenceLine>,
    pub secondary_y_axis_display_options: Option<AxisDisplayOptions>,
    pub secondary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub sort_configuration: Option<ComboChartSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for ComboChartConfiguration {
    const NAME: &'static str = "ComboChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bar_data_labels: record.block("bar_data_labels"),
            bars_arrangement: record.enumeration("bars_arrangement"),
            category_axis: record.block("category_axis"),
            category_label_options: record.block("category_label_options"),
            color_label_options: record.block("color_label_options"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            line_data_labels: record.block("line_data_labels"),
            primary_y_axis_display_options: record.block("primary_y_axis_display_options"),
            primary_y_axis_label_options: record.block("primary_y_axis_label_options"),
            reference_lines: record.blocks("reference_lines"),
            secondary_y_axis_display_options: record.block("secondary_y_axis_display_options"),
            secondary_y_axis_label_options: record.block("secondary_y_axis_label_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("bar_data_labels", self.bar_data_labels.as_ref());
        record.put_enum("bars_arrangement", self.bars_arrangement.as_ref());
        record.put_block("category_axis", self.category_axis.as_ref());
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_block("color_label_options", self.color_label_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("line_data_labels", self.line_data_labels.as_ref());
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
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bar_data_labels", block::<DataLabelOptions>())
            .field("bars_arrangement", enumeration::<BarsArrangement>())
            .field("category_axis", block::<AxisDisplayOptions>())
            .field("category_label_options", block::<ChartAxisLabelOptions>())
            .field("color_label_options", block::<ChartAxisLabelOptions>())
            .field("field_wells", block::<ComboChartFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("line_data_labels", block::<DataLabelOptions>())
            .field(
                "primary_y_axis_display_options",
                block::<AxisDisplayOptions>(),
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
                block::<AxisDisplayOptions>(),
            )
            .field(
                "secondary_y_axis_label_options",
                block::<ChartAxisLabelOptions>(),
            )
            .field("sort_configuration", block::<ComboChartSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComboChartFieldWells {
    pub combo_chart_aggregated_field_wells: Option<ComboChartAggregatedFieldWells>,
}

impl Transcode for ComboChartFieldWells {
    const NAME: &'static str = "ComboChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            combo_chart_aggregated_field_wells: record
                .block("combo_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "combo_chart_aggregated_field_wells",
            self.combo_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "combo_chart_aggregated_field_wells",
            block::<ComboChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComboChartAggregatedFieldWells {
    pub bar_values: Vec<MeasureField>,
    pub category: Vec<DimensionField>,
    pub colors: Vec<DimensionField>,
    pub line_values: Vec<MeasureField>,
}

impl Transcode for ComboChartAggregatedFieldWells {
    const NAME: &'static str = "ComboChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bar_values: record.blocks("bar_values"),
            category: record.blocks("category"),
            colors: record.blocks("colors"),
            line_values: record.blocks("line_values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("bar_values", &self.bar_values);
        record.put_blocks("category", &self.category);
        record.put_blocks("colors", &self.colors);
        record.put_blocks("line_values", &self.line_values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "bar_values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "category",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "colors",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "line_values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComboChartSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
    pub color_items_limit: Option<ItemsLimitConfiguration>,
    pub color_sort: Vec<FieldSortOptions>,
}

impl Transcode for ComboChartSortConfiguration {
    const NAME: &'static str = "ComboChartSortConfiguration";

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
