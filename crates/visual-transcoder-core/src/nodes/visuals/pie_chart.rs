use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{ChartAxisLabelOptions, ContributionAnalysisDefault, SmallMultiplesOptions};
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{ArcThickness, Visibility};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{
    CONTRIBUTION_ANALYSIS_MAX_ITEMS, DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS,
    MEASURE_FIELDS_MAX_ITEMS,
};
use crate::schema::{block, blocks, enumeration, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PieChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<PieChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for PieChartVisual {
    const NAME: &'static str = "PieChartVisual";

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
            .field("chart_configuration", block::<PieChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PieChartConfiguration {
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub contribution_analysis_defaults: Vec<ContributionAnalysisDefault>,
    pub data_labels: Option<DataLabelOptions>,
    pub donut_options: Option<DonutOptions>,
    pub field_wells: Option<PieChartFieldWells>,
    pub legend: Option<LegendOptions>,
    pub small_multiples_options: Option<SmallMultiplesOptions>,
    pub sort_configuration: Option<PieChartSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub value_label_options: Option<ChartAxisLabelOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for PieChartConfiguration {
    const NAME: &'static str = "PieChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_label_options: record.block("category_label_options"),
            contribution_analysis_defaults: record.blocks("contribution_analysis_defaults"),
            data_labels: record.block("data_labels"),
            donut_options: record.block("donut_options"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            small_multiples_options: record.block("small_multiples_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            value_label_options: record.block("value_label_options"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_blocks(
            "contribution_analysis_defaults",
            &self.contribution_analysis_defaults,
        );
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("donut_options", self.donut_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("small_multiples_options", self.small_multiples_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("value_label_options", self.value_label_options.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_label_options", block::<ChartAxisLabelOptions>())
            .field(
                "contribution_analysis_defaults",
                blocks::<ContributionAnalysisDefault>().items(1, CONTRIBUTION_ANALYSIS_MAX_ITEMS),
            )
            .field("data_labels", block::<DataLabelOptions>())
            .field("donut_options", block::<DonutOptions>())
            .field("field_wells", block::<PieChartFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("small_multiples_options", block::<SmallMultiplesOptions>())
            .field("sort_configuration", block::<PieChartSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("value_label_options", block::<ChartAxisLabelOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DonutOptions {
    pub arc_options: Option<ArcOptions>,
    pub donut_center_options: Option<DonutCenterOptions>,
}

impl Transcode for DonutOptions {
    const NAME: &'static str = "DonutOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            arc_options: record.block("arc_options"),
            donut_center_options: record.block("donut_center_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("arc_options", self.arc_options.as_ref());
        record.put_block("donut_center_options", self.donut_center_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("arc_options", block::<ArcOptions>())
            .field("donut_center_options", block::<DonutCenterOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArcOptions {
    pub arc_thickness: Option<ArcThickness>,
}

impl Transcode for ArcOptions {
    const NAME: &'static str = "ArcOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            arc_thickness: record.enumeration("arc_thickness"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("arc_thickness", self.arc_thickness.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("arc_thickness", enumeration::<ArcThickness>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DonutCenterOptions {
    pub label_visibility: Option<Visibility>,
}

impl Transcode for DonutCenterOptions {
    const NAME: &'static str = "DonutCenterOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            label_visibility: record.enumeration("label_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("label_visibility", self.label_visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("label_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PieChartFieldWells {
    pub pie_chart_aggregated_field_wells: Option<PieChartAggregatedFieldWells>,
}

impl Transcode for PieChartFieldWells {
    const NAME: &'static str = "PieChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            pie_chart_aggregated_field_wells: record.block("pie_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "pie_chart_aggregated_field_wells",
            self.pie_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "pie_chart_aggregated_field_wells",
            block::<PieChartAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PieChartAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub small_multiples: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for PieChartAggregatedFieldWells {
    const NAME: &'static str = "PieChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category: record.blocks("category"),
            small_multiples: record.blocks("small_multiples"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category", &self.category);
        record.put_blocks("small_multiples", &self.small_multiples);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category",
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
pub struct PieChartSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
    pub small_multiples_limit_configuration: Option<ItemsLimitConfiguration>,
    pub small_multiples_sort: Vec<FieldSortOptions>,
}

impl Transcode for PieChartSortConfiguration {
    const NAME: &'static str = "PieChartSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_items_limit: record.block("category_items_limit"),
            category_sort: record.blocks("category_sort"),
            small_multiples_limit_configuration: record
                .block("small_multiples_limit_configuration"),
            small_multiples_sort: record.blocks("small_multiples_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_items_limit", self.category_items_limit.as_ref());
        record.put_blocks("category_sort", &self.category_sort);
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
