use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::ChartAxisLabelOptions;
use crate::nodes::common::{
    ItemsLimitConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{
    WordCloudCloudLayout, WordCloudWordCasing, WordCloudWordOrientation, WordCloudWordPadding,
    WordCloudWordScaling,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::FIELD_SORT_OPTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, enumeration, int, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<WordCloudChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for WordCloudVisual {
    const NAME: &'static str = "WordCloudVisual";

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
            .field("chart_configuration", block::<WordCloudChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudChartConfiguration {
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub field_wells: Option<WordCloudFieldWells>,
    pub sort_configuration: Option<WordCloudSortConfiguration>,
    pub word_cloud_options: Option<WordCloudOptions>,
}

impl Transcode for WordCloudChartConfiguration {
    const NAME: &'static str = "WordCloudChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_label_options: record.block("category_label_options"),
            field_wells: record.block("field_wells"),
            sort_configuration: record.block("sort_configuration"),
            word_cloud_options: record.block("word_cloud_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("word_cloud_options", self.word_cloud_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_label_options", block::<ChartAxisLabelOptions>())
            .field("field_wells", block::<WordCloudFieldWells>())
            .field("sort_configuration", block::<WordCloudSortConfiguration>())
            .field("word_cloud_options", block::<WordCloudOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudFieldWells {
    pub word_cloud_aggregated_field_wells: Option<WordCloudAggregatedFieldWells>,
}

impl Transcode for WordCloudFieldWells {
    const NAME: &'static str = "WordCloudFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            word_cloud_aggregated_field_wells: record.block("word_cloud_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "word_cloud_aggregated_field_wells",
            self.word_cloud_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "word_cloud_aggregated_field_wells",
            block::<WordCloudAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudAggregatedFieldWells {
    pub group_by: Vec<DimensionField>,
    pub size: Vec<MeasureField>,
}

impl Transcode for WordCloudAggregatedFieldWells {
    const NAME: &'static str = "WordCloudAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            group_by: record.blocks("group_by"),
            size: record.blocks("size"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("group_by", &self.group_by);
        record.put_blocks("size", &self.size);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("group_by", blocks::<DimensionField>().max_items(10))
            .field("size", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
}

impl Transcode for WordCloudSortConfiguration {
    const NAME: &'static str = "WordCloudSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_items_limit: record.block("category_items_limit"),
            category_sort: record.blocks("category_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_items_limit", self.category_items_limit.as_ref());
        record.put_blocks("category_sort", &self.category_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_items_limit", block::<ItemsLimitConfiguration>())
            .field(
                "category_sort",
                blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WordCloudOptions {
    pub cloud_layout: Option<WordCloudCloudLayout>,
    pub maximum_string_length: Option<i64>,
    pub word_casing: Option<WordCloudWordCasing>,
    pub word_orientation: Option<WordCloudWordOrientation>,
    pub word_padding: Option<WordCloudWordPadding>,
    pub word_scaling: Option<WordCloudWordScaling>,
}

impl Transcode for WordCloudOptions {
    const NAME: &'static str = "WordCloudOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cloud_layout: record.enumeration("cloud_layout"),
            maximum_string_length: record.int64("maximum_string_length"),
            word_casing: record.enumeration("word_casing"),
            word_orientation: record.enumeration("word_orientation"),
            word_padding: record.enumeration("word_padding"),
            word_scaling: record.enumeration("word_scaling"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("cloud_layout", self.cloud_layout.as_ref());
        record.put_int64("maximum_string_length", self.maximum_string_length);
        record.put_enum("word_casing", self.word_casing.as_ref());
        record.put_enum("word_orientation", self.word_orientation.as_ref());
        record.put_enum("word_padding", self.word_padding.as_ref());
        record.put_enum("word_scaling", self.word_scaling.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cloud_layout", enumeration::<WordCloudCloudLayout>())
            .field("maximum_string_length", int().range(1, 100))
            .field("word_casing", enumeration::<WordCloudWordCasing>())
            .field("word_orientation", enumeration::<WordCloudWordOrientation>())
            .field("word_padding", enumeration::<WordCloudWordPadding>())
            .field("word_scaling", enumeration::<WordCloudWordScaling>())
    }
}
