use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::{AxisDisplayOptions, ChartAxisLabelOptions};
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::enums::HistogramBinType;
use crate::nodes::fields::MeasureField;
use crate::nodes::presentation::{DataLabelOptions, TooltipOptions, VisualPalette};
use crate::schema::{block, blocks, enumeration, float, int, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<HistogramConfiguration>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for HistogramVisual {
    const NAME: &'static str = "HistogramVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            chart_configuration: record.block("chart_configuration"),
            subtitle: record.block("subtitle"),
            title: record.block("title"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("visual_id", self.visual_id.as_deref());
        record.put_blocks("actions", &self.actions);
        record.put_block("chart_configuration", self.chart_configuration.as_ref());
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_header(node).field("chart_configuration", block::<HistogramConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramConfiguration {
    pub bin_options: Option<HistogramBinOptions>,
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<HistogramFieldWells>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
    pub x_axis_display_options: Option<AxisDisplayOptions>,
    pub x_axis_label_options: Option<ChartAxisLabelOptions>,
    pub y_axis_display_options: Option<AxisDisplayOptions>,
}

impl Transcode for HistogramConfiguration {
    const NAME: &'static str = "HistogramConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bin_options: record.block("bin_options"),
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
            x_axis_display_options: record.block("x_axis_display_options"),
            x_axis_label_options: record.block("x_axis_label_options"),
            y_axis_display_options: record.block("y_axis_display_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("bin_options", self.bin_options.as_ref());
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record.put_block("x_axis_display_options", self.x_axis_display_options.as_ref());
        record.put_block("x_axis_label_options", self.x_axis_label_options.as_ref());
        record.put_block("y_axis_display_options", self.y_axis_display_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bin_options", block::<HistogramBinOptions>())
            .field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<HistogramFieldWells>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
            .field("x_axis_display_options", block::<AxisDisplayOptions>())
            .field("x_axis_label_options", block::<ChartAxisLabelOptions>())
            .field("y_axis_display_options", block::<AxisDisplayOptions>())
    }
}

/// Binning is configured by count, by width, or both; `selected_bin_type`
/// picks the one in effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramBinOptions {
    pub bin_count: Option<BinCountOptions>,
    pub bin_width: Option<BinWidthOptions>,
    pub selected_bin_type: Option<HistogramBinType>,
    pub start_value: Option<f64>,
}

impl Transcode for HistogramBinOptions {
    const NAME: &'static str = "HistogramBinOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bin_count: record.block("bin_count"),
            bin_width: record.block("bin_width"),
            selected_bin_type: record.enumeration("selected_bin_type"),
            start_value: record.float64("start_value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("bin_count", self.bin_count.as_ref());
        record.put_block("bin_width", self.bin_width.as_ref());
        record.put_enum("selected_bin_type", self.selected_bin_type.as_ref());
        record.put_float64("start_value", self.start_value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bin_count", block::<BinCountOptions>())
            .field("bin_width", block::<BinWidthOptions>())
            .field("selected_bin_type", enumeration::<HistogramBinType>())
            .field("start_value", float())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BinCountOptions {
    pub value: Option<i64>,
}

impl Transcode for BinCountOptions {
    const NAME: &'static str = "BinCountOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            value: record.int64("value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("value", int().range(0, i64::MAX))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BinWidthOptions {
    pub bin_count_limit: Option<i64>,
    pub value: Option<f64>,
}

impl Transcode for BinWidthOptions {
    const NAME: &'static str = "BinWidthOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bin_count_limit: record.int64("bin_count_limit"),
            value: record.float64("value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("bin_count_limit", self.bin_count_limit);
        record.put_float64("value", self.value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bin_count_limit", int().range(0, 1000))
            .field("value", float().float_range(0.0, f64::MAX))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramFieldWells {
    pub histogram_aggregated_field_wells: Option<HistogramAggregatedFieldWells>,
}

impl Transcode for HistogramFieldWells {
    const NAME: &'static str = "HistogramFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            histogram_aggregated_field_wells: record.block("histogram_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "histogram_aggregated_field_wells",
            self.histogram_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "histogram_aggregated_field_wells",
            block::<HistogramAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramAggregatedFieldWells {
    pub values: Vec<MeasureField>,
}

impl Transcode for HistogramAggregatedFieldWells {
    const NAME: &'static str = "HistogramAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("values", blocks::<MeasureField>().max_items(1))
    }
}
