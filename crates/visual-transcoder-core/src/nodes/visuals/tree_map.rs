use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::ChartAxisLabelOptions;
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{ColorScale, DataLabelOptions, LegendOptions, TooltipOptions};
use crate::nodes::FIELD_SORT_OPTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TreeMapVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<TreeMapConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for TreeMapVisual {
    const NAME: &'static str = "TreeMapVisual";

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
            .field("chart_configuration", block::<TreeMapConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TreeMapConfiguration {
    pub color_label_options: Option<ChartAxisLabelOptions>,
    pub color_scale: Option<ColorScale>,
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<TreeMapFieldWells>,
    pub group_label_options: Option<ChartAxisLabelOptions>,
    pub legend: Option<LegendOptions>,
    pub size_label_options: Option<ChartAxisLabelOptions>,
    pub sort_configuration: Option<TreeMapSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
}

impl Transcode for TreeMapConfiguration {
    const NAME: &'static str = "TreeMapConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color_label_options: record.block("color_label_options"),
            color_scale: record.block("color_scale"),
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            group_label_options: record.block("group_label_options"),
            legend: record.block("legend"),
            size_label_options: record.block("size_label_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("color_label_options", self.color_label_options.as_ref());
        record.put_block("color_scale", self.color_scale.as_ref());
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("group_label_options", self.group_label_options.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("size_label_options", self.size_label_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color_label_options", block::<ChartAxisLabelOptions>())
            .field("color_scale", block::<ColorScale>())
            .field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<TreeMapFieldWells>())
            .field("group_label_options", block::<ChartAxisLabelOptions>())
            .field("legend", block::<LegendOptions>())
            .field("size_label_options", block::<ChartAxisLabelOptions>())
            .field("sort_configuration", block::<TreeMapSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TreeMapFieldWells {
    pub tree_map_aggregated_field_wells: Option<TreeMapAggregatedFieldWells>,
}

impl Transcode for TreeMapFieldWells {
    const NAME: &'static str = "TreeMapFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            tree_map_aggregated_field_wells: record.block("tree_map_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "tree_map_aggregated_field_wells",
            self.tree_map_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "tree_map_aggregated_field_wells",
            block::<TreeMapAggregatedFieldWells>(),
        )
    }
}

/// Rectangles are grouped by one dimension, sized by one measure and
/// optionally colored by another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TreeMapAggregatedFieldWells {
    pub colors: Vec<MeasureField>,
    pub groups: Vec<DimensionField>,
    pub sizes: Vec<MeasureField>,
}

impl Transcode for TreeMapAggregatedFieldWells {
    const NAME: &'static str = "TreeMapAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            colors: record.blocks("colors"),
            groups: record.blocks("groups"),
            sizes: record.blocks("sizes"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("colors", &self.colors);
        record.put_blocks("groups", &self.groups);
        record.put_blocks("sizes", &self.sizes);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("colors", blocks::<MeasureField>().max_items(1))
            .field("groups", blocks::<DimensionField>().max_items(1))
            .field("sizes", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TreeMapSortConfiguration {
    pub tree_map_group_items_limit_configuration: Option<ItemsLimitConfiguration>,
    pub tree_map_sort: Vec<FieldSortOptions>,
}

impl Transcode for TreeMapSortConfiguration {
    const NAME: &'static str = "TreeMapSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            tree_map_group_items_limit_configuration: record
                .block("tree_map_group_items_limit_configuration"),
            tree_map_sort: record.blocks("tree_map_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "tree_map_group_items_limit_configuration",
            self.tree_map_group_items_limit_configuration.as_ref(),
        );
        record.put_blocks("tree_map_sort", &self.tree_map_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "tree_map_group_items_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "tree_map_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}
