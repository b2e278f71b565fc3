use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions};
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::fields::{DimensionField, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{DataLabelOptions, LegendOptions, TooltipOptions, VisualPalette};
use crate::nodes::{DIMENSION_FIELDS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS};
use crate::oneof;
use crate::schema::{block, blocks, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScatterPlotVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<ScatterPlotConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for ScatterPlotVisual {
    const NAME: &'static str = "ScatterPlotVisual";

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
            .field("chart_configuration", block::<ScatterPlotConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScatterPlotConfiguration {
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<ScatterPlotFieldWells>,
    pub legend: Option<LegendOptions>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
    pub x_axis_display_options: Option<AxisDisplayOptions>,
    pub x_axis_label_options: Option<ChartAxisLabelOptions>,
    pub y_axis_display_options: Option<AxisDisplayOptions>,
    pub y_axis_label_options: Option<ChartAxisLabelOptions>,
}

impl Transcode for ScatterPlotConfiguration {
    const NAME: &'static str = "ScatterPlotConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
            x_axis_display_options: record.block("x_axis_display_options"),
            x_axis_label_options: record.block("x_axis_label_options"),
            y_axis_display_options: record.block("y_axis_display_options"),
            y_axis_label_options: record.block("y_axis_label_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record.put_block("x_axis_display_options", self.x_axis_display_options.as_ref());
        record.put_block("x_axis_label_options", self.x_axis_label_options.as_ref());
        record.put_block("y_axis_display_options", self.y_axis_display_options.as_ref());
        record.put_block("y_axis_label_options", self.y_axis_label_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<ScatterPlotFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
            .field("x_axis_display_options", block::<AxisDisplayOptions>())
            .field("x_axis_label_options", block::<ChartAxisLabelOptions>())
            .field("y_axis_display_options", block::<AxisDisplayOptions>())
            .field("y_axis_label_options", block::<ChartAxisLabelOptions>())
    }
}

/// Points are either aggregated per category or plotted row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScatterPlotFieldWells {
    #[serde(rename = "ScatterPlotCategoricallyAggregatedFieldWells")]
    CategoricallyAggregated(ScatterPlotCategoricallyAggregatedFieldWells),
    #[serde(rename = "ScatterPlotUnaggregatedFieldWells")]
    Unaggregated(ScatterPlotUnaggregatedFieldWells),
}

impl ScatterPlotFieldWells {
    const ALTERNATIVES: &'static [&'static str] = &[
        "scatter_plot_categorically_aggregated_field_wells",
        "scatter_plot_unaggregated_field_wells",
    ];
}

impl Transcode for ScatterPlotFieldWells {
    const NAME: &'static str = "ScatterPlotFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("scatter_plot_categorically_aggregated_field_wells")
            .map(Self::CategoricallyAggregated)
            .or_else(|| {
                record
                    .block("scatter_plot_unaggregated_field_wells")
                    .map(Self::Unaggregated)
            })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::CategoricallyAggregated(w) => {
                record.put_block("scatter_plot_categorically_aggregated_field_wells", Some(w))
            }
            Self::Unaggregated(w) => {
                record.put_block("scatter_plot_unaggregated_field_wells", Some(w))
            }
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "scatter_plot_categorically_aggregated_field_wells",
            block::<ScatterPlotCategoricallyAggregatedFieldWells>(),
        )
        .field(
            "scatter_plot_unaggregated_field_wells",
            block::<ScatterPlotUnaggregatedFieldWells>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScatterPlotCategoricallyAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub size: Vec<MeasureField>,
    pub x_axis: Vec<MeasureField>,
    pub y_axis: Vec<MeasureField>,
}

impl Transcode for ScatterPlotCategoricallyAggregatedFieldWells {
    const NAME: &'static str = "ScatterPlotCategoricallyAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category: record.blocks("category"),
            size: record.blocks("size"),
            x_axis: record.blocks("x_axis"),
            y_axis: record.blocks("y_axis"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category", &self.category);
        record.put_blocks("size", &self.size);
        record.put_blocks("x_axis", &self.x_axis);
        record.put_blocks("y_axis", &self.y_axis);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "size",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "x_axis",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "y_axis",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

/// Row-level points: the axes take dimensions rather than aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScatterPlotUnaggregatedFieldWells {
    pub size: Vec<MeasureField>,
    pub x_axis: Vec<DimensionField>,
    pub y_axis: Vec<DimensionField>,
}

impl Transcode for ScatterPlotUnaggregatedFieldWells {
    const NAME: &'static str = "ScatterPlotUnaggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            size: record.blocks("size"),
            x_axis: record.blocks("x_axis"),
            y_axis: record.blocks("y_axis"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("size", &self.size);
        record.put_blocks("x_axis", &self.x_axis);
        record.put_blocks("y_axis", &self.y_axis);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "size",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "x_axis",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "y_axis",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
    }
}
