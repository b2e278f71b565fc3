use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{
    FontConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{ArcThicknessOptions, PrimaryValueDisplayType};
use crate::nodes::fields::MeasureField;
use crate::nodes::formatting::ComparisonConfiguration;
use crate::nodes::presentation::{DataLabelOptions, TooltipOptions, VisualPalette};
use crate::nodes::MEASURE_FIELDS_MAX_ITEMS;
use crate::schema::{block, blocks, enumeration, float, int, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GaugeChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<GaugeChartConfiguration>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for GaugeChartVisual {
    const NAME: &'static str = "GaugeChartVisual";

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
        describe_header(node).field("chart_configuration", block::<GaugeChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GaugeChartConfiguration {
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<GaugeChartFieldWells>,
    pub gauge_chart_options: Option<GaugeChartOptions>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for GaugeChartConfiguration {
    const NAME: &'static str = "GaugeChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            gauge_chart_options: record.block("gauge_chart_options"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("gauge_chart_options", self.gauge_chart_options.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<GaugeChartFieldWells>())
            .field("gauge_chart_options", block::<GaugeChartOptions>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GaugeChartFieldWells {
    pub target_values: Vec<MeasureField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for GaugeChartFieldWells {
    const NAME: &'static str = "GaugeChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            target_values: record.blocks("target_values"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("target_values", &self.target_values);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "target_values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GaugeChartOptions {
    pub arc: Option<ArcConfiguration>,
    pub arc_axis: Option<ArcAxisConfiguration>,
    pub comparison: Option<ComparisonConfiguration>,
    pub primary_value_display_type: Option<PrimaryValueDisplayType>,
    pub primary_value_font_configuration: Option<FontConfiguration>,
}

impl Transcode for GaugeChartOptions {
    const NAME: &'static str = "GaugeChartOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            arc: record.block("arc"),
            arc_axis: record.block("arc_axis"),
            comparison: record.block("comparison"),
            primary_value_display_type: record.enumeration("primary_value_display_type"),
            primary_value_font_configuration: record.block("primary_value_font_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("arc", self.arc.as_ref());
        record.put_block("arc_axis", self.arc_axis.as_ref());
        record.put_block("comparison", self.comparison.as_ref());
        record.put_enum(
            "primary_value_display_type",
            self.primary_value_display_type.as_ref(),
        );
        record.put_block(
            "primary_value_font_configuration",
            self.primary_value_font_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("arc", block::<ArcConfiguration>())
            .field("arc_axis", block::<ArcAxisConfiguration>())
            .field("comparison", block::<ComparisonConfiguration>())
            .field(
                "primary_value_display_type",
                enumeration::<PrimaryValueDisplayType>(),
            )
            .field(
                "primary_value_font_configuration",
                block::<FontConfiguration>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArcConfiguration {
    pub arc_angle: Option<f64>,
    pub arc_thickness: Option<ArcThicknessOptions>,
}

impl Transcode for ArcConfiguration {
    const NAME: &'static str = "ArcConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            arc_angle: record.float64("arc_angle"),
            arc_thickness: record.enumeration("arc_thickness"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("arc_angle", self.arc_angle);
        record.put_enum("arc_thickness", self.arc_thickness.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("arc_angle", float().float_range(180.0, 360.0))
            .field("arc_thickness", enumeration::<ArcThicknessOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArcAxisConfiguration {
    pub range: Option<ArcAxisDisplayRange>,
    pub reserve_range: Option<i64>,
}

impl Transcode for ArcAxisConfiguration {
    const NAME: &'static str = "ArcAxisConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            range: record.block("range"),
            reserve_range: record.int64("reserve_range"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("range", self.range.as_ref());
        record.put_int64("reserve_range", self.reserve_range);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("range", block::<ArcAxisDisplayRange>())
            .field("reserve_range", int())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArcAxisDisplayRange {
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl Transcode for ArcAxisDisplayRange {
    const NAME: &'static str = "ArcAxisDisplayRange";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            max: record.float64("max"),
            min: record.float64("min"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_float64("max", self.max);
        record.put_float64("min", self.min);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("max", float()).field("min", float())
    }
}
