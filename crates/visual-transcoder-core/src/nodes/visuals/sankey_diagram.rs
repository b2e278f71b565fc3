use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::presentation::DataLabelOptions;
use crate::nodes::{
    DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS,
};
use crate::schema::{block, blocks, NodeSchema};
use crate::value::Record;

/// Flow between source and destination categories. Sankey diagrams carry no
/// column hierarchies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SankeyDiagramVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<SankeyDiagramChartConfiguration>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for SankeyDiagramVisual {
    const NAME: &'static str = "SankeyDiagramVisual";

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
        describe_header(node).field(
            "chart_configuration",
            block::<SankeyDiagramChartConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SankeyDiagramChartConfiguration {
    pub data_labels: Option<DataLabelOptions>,
    pub field_wells: Option<SankeyDiagramFieldWells>,
    pub sort_configuration: Option<SankeyDiagramSortConfiguration>,
}

impl Transcode for SankeyDiagramChartConfiguration {
    const NAME: &'static str = "SankeyDiagramChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_labels: record.block("data_labels"),
            field_wells: record.block("field_wells"),
            sort_configuration: record.block("sort_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("data_labels", self.data_labels.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_labels", block::<DataLabelOptions>())
            .field("field_wells", block::<SankeyDiagramFieldWells>())
            .field(
                "sort_configuration",
                block::<SankeyDiagramSortConfiguration>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SankeyDiagramFieldWells {
    pub sankey_diagram_aggregated_field_wells: Option<SankeyDiagramAggregatedFieldWells>,
}

impl Transcode for SankeyDiagramFieldWells {
    const NAME: &'static str = "SankeyDiagramFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            sankey_diagram_aggregated_field_wells: record
                .block("sankey_diagram_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "sankey_diagram_aggregated_field_wells",
            self.sankey_diagram_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "sankey_diagram_aggregated_field_wells",
            block::<SankeyDiagramAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SankeyDiagramAggregatedFieldWells {
    pub destination: Vec<DimensionField>,
    pub source: Vec<DimensionField>,
    pub weight: Vec<MeasureField>,
}

impl Transcode for SankeyDiagramAggregatedFieldWells {
    const NAME: &'static str = "SankeyDiagramAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            destination: record.blocks("destination"),
            source: record.blocks("source"),
            weight: record.blocks("weight"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("destination", &self.destination);
        record.put_blocks("source", &self.source);
        record.put_blocks("weight", &self.weight);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "destination",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "source",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "weight",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SankeyDiagramSortConfiguration {
    pub destination_items_limit: Option<ItemsLimitConfiguration>,
    pub source_items_limit: Option<ItemsLimitConfiguration>,
    pub weight_sort: Vec<FieldSortOptions>,
}

impl Transcode for SankeyDiagramSortConfiguration {
    const NAME: &'static str = "SankeyDiagramSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            destination_items_limit: record.block("destination_items_limit"),
            source_items_limit: record.block("source_items_limit"),
            weight_sort: record.blocks("weight_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "destination_items_limit",
            self.destination_items_limit.as_ref(),
        );
        record.put_block("source_items_limit", self.source_items_limit.as_ref());
        record.put_blocks("weight_sort", &self.weight_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "destination_items_limit",
            block::<ItemsLimitConfiguration>(),
        )
        .field("source_items_limit", block::<ItemsLimitConfiguration>())
        .field(
            "weight_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}
