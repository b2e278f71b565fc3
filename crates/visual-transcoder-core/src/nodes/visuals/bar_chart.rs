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
use crate::nodes::enums::{BarChartOrientation, BarsArrangement};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{
    CONTRIBUTION_ANALYSIS_MAX_ITEMS, DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS,
    MEASURE_FIELDS_MAX_ITEMS, REFERENCE_LINES_MAX_ITEMS,
};
use crate::schema::{block, blocks, enumeration, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BarChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<BarChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for BarChartVisual {
    const NAME: &'static str = "BarChartVisual";

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
            .field("chart_configuration", block::<BarChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BarChartConfiguration {
    pub bars_arrangement: Option<BarsArrangement>,
    pub category_axis: Option<AxisDisplayOptions>,
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub color_label_options: Option<ChartAxisLabelOptions>,
    pub contribution_analysis_defaults: Vec<ContributionAnalysisDefault>,
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<BarChartFieldWells>,
    pub legend: Option<LegendOptions>,
    pub orientation: Option<BarChartOrientation>,
    pub reference_lines: Vec<ReferenceLine>,
    pub small_multiples_options: Option<SmallMultiplesOptions>,
    pub sort_configuration: Option<BarChartSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub value_axis: Option<AxisDisplayOptions>,
    pub value_label_options: Option<ChartAxisLabelOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for BarChartConfiguration {
    const NAME: &'static str = "BarChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bars_arrangement: record.enumeration("bars_arrangement"),
            category_axis: record.block("category_axis"),
            category_label_options: record.block("category_label_options"),
            color_label_options: record.block("color_label_options"),
            contribution_analysis_defaults: record.blocks("contribution_analysis_defaults"),
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            orientation: record.enumeration("orientation"),
            reference_lines: record.blocks("reference_lines"),
            small_multiples_options: record.block("small_multiples_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            value_axis: record.block("value_axis"),
            value_label_options: record.block("value_label_options"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("bars_arrangement", self.bars_arrangement.as_ref());
        record.put_block("category_axis", self.category_axis.as_ref());
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_block("color_label_options", self.color_label_options.as_ref());
        record.put_blocks(
            "contribution_analysis_defaults",
            &self.contribution_analysis_defaults,
        );
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_enum("orientation", self.orientation.as_ref());
        record.put_blocks("reference_lines", &self.reference_lines);
        record.put_block("small_multiples_options", self.small_multiples_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("value_axis", self.value_axis.as_ref());
        record.put_block("value_label_options", self.value_label_options.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bars_arrangement", enumeration::<BarsArrangement>())
            .field("category_axis", block::<AxisDisplayOptions>())
            .field("category_label_options", block::<ChartAxisLabelOptions>())
            .field("color_label_options", block::<ChartAxisLabelOptions>())
            .field(
                "contribution_analysis_defaults",
                blocks::<ContributionAnalysisDefault>()
                    .items(1, CONTRIBUTION_ANALYSIS_MAX_ITEMS),
            )
            .field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<BarChartFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("orientation", enumeration::<BarChartOrientation>())
            .field(
                "reference_lines",
                blocks::<ReferenceLine>().max_items(REFERENCE_LINES_MAX_ITEMS),
            )
            .field("small_multiples_options", block::<SmallMultiplesOptions>())
            .field("sort_configuration", block::<BarChartSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("value_axis", block::<AxisDisplayOptions>())
            .field("value_label_options", block::<ChartAxisLabelOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BarChartFieldWells {
    pub bar_chart_aggregated_field_wells: Option<BarChartAggregatedFieldWells>,
}

impl Transcode for BarChartFieldWells {
    const NAME: &'static str = "BarChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bar_chart_aggregated_field_wells: record.block("bar_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "bar_chart_aggregated_field_wells",
            self.bar_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "bar_chart_aggregated_field_wells",
            block::<BarChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BarChartAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub colors: Vec<DimensionField>,
    pub small_multiples: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for BarChartAggregatedFieldWells {
    const NAME: &'static str = "BarChartAggregatedFieldWells";

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
pub struct BarChartSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
    pub color_items_limit: Option<ItemsLimitConfiguration>,
    pub color_sort: Vec<FieldSortOptions>,
    pub small_multiples_limit_configuration: Option<ItemsLimitConfiguration>,
    pub small_multiples_sort: Vec<FieldSortOptions>,
}

impl Transcode for BarChartSortConfiguration {
    const NAME: &'static str = "BarChartSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_items_limit: record.block("category_items_limit"),
            category_sort: record.blocks("category_sort"),
            color_items_limit: record.block("color_items_limit"),
            color_sort: record.blocks("color_sort"),
            small_multiples_limit_configuration: record
                .block("small_multiples_limit_configuration"),
            small_multiples_sort: record.blocks("small_multiples_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_items_limit", self.category_items_limit.as_ref());
        record.put_blocks("category_sort", &self.category_sort);
        record.put_block("color_items_limit", self.color_items_limit.as_ref());
        record.put_blocks("color_sort", &self.color_sort);
        record.put_block(
            "small_multiples_limit_configuration",
            self.small_multiples_limit_configuration.as_ref(),
        );
        record.put_blocks("small_multiples_sort", &self.small_multiples_sort);
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
