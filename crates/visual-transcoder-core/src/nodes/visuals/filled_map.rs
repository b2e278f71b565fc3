use serde::{Deserialize, Serialize};

use super::{
    describe_column_hierarchies, describe_header, GeospatialMapStyleOptions,
    GeospatialWindowOptions,
};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::conditional::ConditionalFormattingColor;
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{LegendOptions, TooltipOptions};
use crate::nodes::FIELD_SORT_OPTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, identifier, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<FilledMapConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub conditional_formatting: Option<FilledMapConditionalFormatting>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for FilledMapVisual {
    const NAME: &'static str = "FilledMapVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            chart_configuration: record.block("chart_configuration"),
            column_hierarchies: record.blocks("column_hierarchies"),
            conditional_formatting: record.block("conditional_formatting"),
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
        record.put_block("conditional_formatting", self.conditional_formatting.as_ref());
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_column_hierarchies(describe_header(node))
            .field("chart_configuration", block::<FilledMapConfiguration>())
            .field(
                "conditional_formatting",
                block::<FilledMapConditionalFormatting>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapConfiguration {
    pub field_wells: Option<FilledMapFieldWells>,
    pub legend: Option<LegendOptions>,
    pub map_style_options: Option<GeospatialMapStyleOptions>,
    pub sort_configuration: Option<FilledMapSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub window_options: Option<GeospatialWindowOptions>,
}

impl Transcode for FilledMapConfiguration {
    const NAME: &'static str = "FilledMapConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            map_style_options: record.block("map_style_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            window_options: record.block("window_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("map_style_options", self.map_style_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("window_options", self.window_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_wells", block::<FilledMapFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("map_style_options", block::<GeospatialMapStyleOptions>())
            .field("sort_configuration", block::<FilledMapSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("window_options", block::<GeospatialWindowOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapFieldWells {
    pub filled_map_aggregated_field_wells: Option<FilledMapAggregatedFieldWells>,
}

impl Transcode for FilledMapFieldWells {
    const NAME: &'static str = "FilledMapFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            filled_map_aggregated_field_wells: record.block("filled_map_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "filled_map_aggregated_field_wells",
            self.filled_map_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "filled_map_aggregated_field_wells",
            block::<FilledMapAggregatedFieldWells>(),
        )
    }
}

/// One region dimension shaded by one measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapAggregatedFieldWells {
    pub geospatial: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for FilledMapAggregatedFieldWells {
    const NAME: &'static str = "FilledMapAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            geospatial: record.blocks("geospatial"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("geospatial", &self.geospatial);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("geospatial", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapSortConfiguration {
    pub category_sort: Vec<FieldSortOptions>,
}

impl Transcode for FilledMapSortConfiguration {
    const NAME: &'static str = "FilledMapSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_sort: record.blocks("category_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category_sort", &self.category_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "category_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapConditionalFormatting {
    pub conditional_formatting_options: Vec<FilledMapConditionalFormattingOption>,
}

impl Transcode for FilledMapConditionalFormatting {
    const NAME: &'static str = "FilledMapConditionalFormatting";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            conditional_formatting_options: record.blocks("conditional_formatting_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks(
            "conditional_formatting_options",
            &self.conditional_formatting_options,
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "conditional_formatting_options",
            blocks::<FilledMapConditionalFormattingOption>()
                .items(1, 200)
                .required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapConditionalFormattingOption {
    pub shape: Option<FilledMapShapeConditionalFormatting>,
}

impl Transcode for FilledMapConditionalFormattingOption {
    const NAME: &'static str = "FilledMapConditionalFormattingOption";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            shape: record.block("shape"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("shape", self.shape.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "shape",
            block::<FilledMapShapeConditionalFormatting>().required(),
        )
    }
}

/// Shades the regions of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilledMapShapeConditionalFormatting {
    pub field_id: Option<String>,
    pub format: Option<ShapeConditionalFormat>,
}

impl Transcode for FilledMapShapeConditionalFormatting {
    const NAME: &'static str = "FilledMapShapeConditionalFormatting";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            format: record.block("format"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format", self.format.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("format", block::<ShapeConditionalFormat>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShapeConditionalFormat {
    pub background_color: Option<ConditionalFormattingColor>,
}

impl Transcode for ShapeConditionalFormat {
    const NAME: &'static str = "ShapeConditionalFormat";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            background_color: record.block("background_color"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("background_color", self.background_color.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "background_color",
            block::<ConditionalFormattingColor>().required(),
        )
    }
}
