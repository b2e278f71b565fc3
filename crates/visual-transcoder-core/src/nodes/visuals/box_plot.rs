use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header, PaginationConfiguration};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions, ReferenceLine};
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::enums::{BoxPlotFillStyle, Visibility};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{FIELD_SORT_OPTIONS_MAX_ITEMS, REFERENCE_LINES_MAX_ITEMS};
use crate::schema::{block, blocks, enumeration, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<BoxPlotChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for BoxPlotVisual {
    const NAME: &'static str = "BoxPlotVisual";

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
            .field("chart_configuration", block::<BoxPlotChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotChartConfiguration {
    pub box_plot_options: Option<BoxPlotOptions>,
    pub category_axis: Option<AxisDisplayOptions>,
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub field_wells: Option<BoxPlotFieldWells>,
    pub legend: Option<LegendOptions>,
    pub primary_y_axis_display_options: Option<AxisDisplayOptions>,
    pub primary_y_axis_label_options: Option<ChartAxisLabelOptions>,
    pub reference_lines: Vec<ReferenceLine>,
    pub sort_configuration: Option<BoxPlotSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for BoxPlotChartConfiguration {
    const NAME: &'static str = "BoxPlotChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            box_plot_options: record.block("box_plot_options"),
            category_axis: record.block("category_axis"),
            category_label_options: record.block("category_label_options"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            primary_y_axis_display_options: record.block("primary_y_axis_display_options"),
            primary_y_axis_label_options: record.block("primary_y_axis_label_options"),
            reference_lines: record.blocks("reference_lines"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("box_plot_options", self.box_plot_options.as_ref());
        record.put_block("category_axis", self.category_axis.as_ref());
        record.put_block("category_label_options", self.category_label_options.as_ref());
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
        record.put_blocks("reference_lines", &self.reference_lines);
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("box_plot_options", block::<BoxPlotOptions>())
            .field("category_axis", block::<AxisDisplayOptions>())
            .field("category_label_options", block::<ChartAxisLabelOptions>())
            .field("field_wells", block::<BoxPlotFieldWells>())
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
                "reference_lines",
                blocks::<ReferenceLine>().max_items(REFERENCE_LINES_MAX_ITEMS),
            )
            .field("sort_configuration", block::<BoxPlotSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotOptions {
    pub all_data_points_visibility: Option<Visibility>,
    pub outlier_visibility: Option<Visibility>,
    pub style_options: Option<BoxPlotStyleOptions>,
}

impl Transcode for BoxPlotOptions {
    const NAME: &'static str = "BoxPlotOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            all_data_points_visibility: record.enumeration("all_data_points_visibility"),
            outlier_visibility: record.enumeration("outlier_visibility"),
            style_options: record.block("style_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "all_data_points_visibility",
            self.all_data_points_visibility.as_ref(),
        );
        record.put_enum("outlier_visibility", self.outlier_visibility.as_ref());
        record.put_block("style_options", self.style_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("all_data_points_visibility", enumeration::<Visibility>())
            .field("outlier_visibility", enumeration::<Visibility>())
            .field("style_options", block::<BoxPlotStyleOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotStyleOptions {
    pub fill_style: Option<BoxPlotFillStyle>,
}

impl Transcode for BoxPlotStyleOptions {
    const NAME: &'static str = "BoxPlotStyleOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            fill_style: record.enumeration("fill_style"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("fill_style", self.fill_style.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("fill_style", enumeration::<BoxPlotFillStyle>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotFieldWells {
    pub box_plot_aggregated_field_wells: Option<BoxPlotAggregatedFieldWells>,
}

impl Transcode for BoxPlotFieldWells {
    const NAME: &'static str = "BoxPlotFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            box_plot_aggregated_field_wells: record.block("box_plot_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "box_plot_aggregated_field_wells",
            self.box_plot_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "box_plot_aggregated_field_wells",
            block::<BoxPlotAggregatedFieldWells>(),
        )
    }
}

/// One grouping dimension and up to five measures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotAggregatedFieldWells {
    pub group_by: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for BoxPlotAggregatedFieldWells {
    const NAME: &'static str = "BoxPlotAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            group_by: record.blocks("group_by"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("group_by", &self.group_by);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("group_by", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(5))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxPlotSortConfiguration {
    pub category_sort: Vec<FieldSortOptions>,
    pub pagination_configuration: Option<PaginationConfiguration>,
}

impl Transcode for BoxPlotSortConfiguration {
    const NAME: &'static str = "BoxPlotSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_sort: record.blocks("category_sort"),
            pagination_configuration: record.block("pagination_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category_sort", &self.category_sort);
        record.put_block(
            "pagination_configuration",
            self.pagination_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
        .field(
            "pagination_configuration",
            block::<PaginationConfiguration>(),
        )
    }
}
