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
pub struct HeatMapVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<HeatMapConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for HeatMapVisual {
    const NAME: &'static str = "HeatMapVisual";

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
            .field("chart_configuration", block::<HeatMapConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HeatMapConfiguration {
    pub color_scale: Option<ColorScale>,
    pub column_label_options: Option<ChartAxisLabelOptions>,
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<HeatMapFieldWells>,
    pub legend: Option<LegendOptions>,
    pub row_label_options: Option<ChartAxisLabelOptions>,
    pub sort_configuration: Option<HeatMapSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
}

impl Transcode for HeatMapConfiguration {
    const NAME: &'static str = "HeatMapConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color_scale: record.block("color_scale"),
            column_label_options: record.block("column_label_options"),
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            row_label_options: record.block("row_label_options"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("color_scale", self.color_scale.as_ref());
        record.put_block("column_label_options", self.column_label_options.as_ref());
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("row_label_options", self.row_label_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color_scale", block::<ColorScale>())
            .field("column_label_options", block::<ChartAxisLabelOptions>())
            .field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<HeatMapFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("row_label_options", block::<ChartAxisLabelOptions>())
            .field("sort_configuration", block::<HeatMapSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HeatMapFieldWells {
    pub heat_map_aggregated_field_wells: Option<HeatMapAggregatedFieldWells>,
}

impl Transcode for HeatMapFieldWells {
    const NAME: &'static str = "HeatMapFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            heat_map_aggregated_field_wells: record.block("heat_map_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "heat_map_aggregated_field_wells",
            self.heat_map_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "heat_map_aggregated_field_wells",
            block::<HeatMapAggregatedFieldWells>(),
        )
    }
}

/// A heat map takes at most one field in each well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HeatMapAggregatedFieldWells {
    pub columns: Vec<DimensionField>,
    pub rows: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for HeatMapAggregatedFieldWells {
    const NAME: &'static str = "HeatMapAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            columns: record.blocks("columns"),
            rows: record.blocks("rows"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("columns", &self.columns);
        record.put_blocks("rows", &self.rows);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("columns", blocks::<DimensionField>().max_items(1))
            .field("rows", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HeatMapSortConfiguration {
    pub heat_map_column_items_limit_configuration: Option<ItemsLimitConfiguration>,
    pub heat_map_column_sort: Vec<FieldSortOptions>,
    pub heat_map_row_items_limit_configuration: Option<ItemsLimitConfiguration>,
    pub heat_map_row_sort: Vec<FieldSortOptions>,
}

impl Transcode for HeatMapSortConfiguration {
    const NAME: &'static str = "HeatMapSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            heat_map_column_items_limit_configuration: record
                .block("heat_map_column_items_limit_configuration"),
            heat_map_column_sort: record.blocks("heat_map_column_sort"),
            heat_map_row_items_limit_configuration: record
                .block("heat_map_row_items_limit_configuration"),
            heat_map_row_sort: record.blocks("heat_map_row_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "heat_map_column_items_limit_configuration",
            self.heat_map_column_items_limit_configuration.as_ref(),
        );
        record.put_blocks("heat_map_column_sort", &self.heat_map_column_sort);
        record.put_block(
            "heat_map_row_items_limit_configuration",
            self.heat_map_row_items_limit_configuration.as_ref(),
        );
        record.put_blocks("heat_map_row_sort", &self.heat_map_row_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "heat_map_column_items_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "heat_map_column_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
        .field(
            "heat_map_row_items_limit_configuration",
            block::<ItemsLimitConfiguration>(),
        )
        .field(
            "heat_map_row_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}
