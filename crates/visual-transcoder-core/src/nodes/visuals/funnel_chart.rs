use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::chart::ChartAxisLabelOptions;
use crate::nodes::common::{
    FontConfiguration, ItemsLimitConfiguration, VisualSubtitleLabelOptions,
    VisualTitleLabelOptions,
};
use crate::nodes::enums::{DataLabelPosition, FunnelChartMeasureDataLabelStyle, Visibility};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{TooltipOptions, VisualPalette};
use crate::nodes::FIELD_SORT_OPTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, color, enumeration, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<FunnelChartConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for FunnelChartVisual {
    const NAME: &'static str = "FunnelChartVisual";

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
            .field("chart_configuration", block::<FunnelChartConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartConfiguration {
    pub category_label_options: Option<ChartAxisLabelOptions>,
    pub data_label_options: Option<FunnelChartDataLabelOptions>,
    pub field_wells: Option<FunnelChartFieldWells>,
    pub sort_configuration: Option<FunnelChartSortConfiguration>,
    pub tooltip: Option<TooltipOptions>,
    pub value_label_options: Option<ChartAxisLabelOptions>,
    pub visual_palette: Option<VisualPalette>,
}

impl Transcode for FunnelChartConfiguration {
    const NAME: &'static str = "FunnelChartConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_label_options: record.block("category_label_options"),
            data_label_options: record.block("data_label_options"),
            field_wells: record.block("field_wells"),
            sort_configuration: record.block("sort_configuration"),
            tooltip: record.block("tooltip"),
            value_label_options: record.block("value_label_options"),
            visual_palette: record.block("visual_palette"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("category_label_options", self.category_label_options.as_ref());
        record.put_block("data_label_options", self.data_label_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("value_label_options", self.value_label_options.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_label_options", block::<ChartAxisLabelOptions>())
            .field("data_label_options", block::<FunnelChartDataLabelOptions>())
            .field("field_wells", block::<FunnelChartFieldWells>())
            .field("sort_configuration", block::<FunnelChartSortConfiguration>())
            .field("tooltip", block::<TooltipOptions>())
            .field("value_label_options", block::<ChartAxisLabelOptions>())
            .field("visual_palette", block::<VisualPalette>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartDataLabelOptions {
    pub category_label_visibility: Option<Visibility>,
    pub label_color: Option<String>,
    pub label_font_configuration: Option<FontConfiguration>,
    pub measure_data_label_style: Option<FunnelChartMeasureDataLabelStyle>,
    pub measure_label_visibility: Option<Visibility>,
    pub position: Option<DataLabelPosition>,
    pub visibility: Option<Visibility>,
}

impl Transcode for FunnelChartDataLabelOptions {
    const NAME: &'static str = "FunnelChartDataLabelOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category_label_visibility: record.enumeration("category_label_visibility"),
            label_color: record.string("label_color"),
            label_font_configuration: record.block("label_font_configuration"),
            measure_data_label_style: record.enumeration("measure_data_label_style"),
            measure_label_visibility: record.enumeration("measure_label_visibility"),
            position: record.enumeration("position"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "category_label_visibility",
            self.category_label_visibility.as_ref(),
        );
        record.put_string("label_color", self.label_color.as_deref());
        record.put_block(
            "label_font_configuration",
            self.label_font_configuration.as_ref(),
        );
        record.put_enum(
            "measure_data_label_style",
            self.measure_data_label_style.as_ref(),
        );
        record.put_enum(
            "measure_label_visibility",
            self.measure_label_visibility.as_ref(),
        );
        record.put_enum("position", self.position.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category_label_visibility", enumeration::<Visibility>())
            .field("label_color", color())
            .field("label_font_configuration", block::<FontConfiguration>())
            .field(
                "measure_data_label_style",
                enumeration::<FunnelChartMeasureDataLabelStyle>(),
            )
            .field("measure_label_visibility", enumeration::<Visibility>())
            .field("position", enumeration::<DataLabelPosition>())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartFieldWells {
    pub funnel_chart_aggregated_field_wells: Option<FunnelChartAggregatedFieldWells>,
}

impl Transcode for FunnelChartFieldWells {
    const NAME: &'static str = "FunnelChartFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            funnel_chart_aggregated_field_wells: record
                .block("funnel_chart_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "funnel_chart_aggregated_field_wells",
            self.funnel_chart_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "funnel_chart_aggregated_field_wells",
            block::<FunnelChartAggregatedFieldWells>(),
        )
    }
}

/// One stage dimension and one measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartAggregatedFieldWells {
    pub category: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for FunnelChartAggregatedFieldWells {
    const NAME: &'static str = "FunnelChartAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            category: record.blocks("category"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("category", &self.category);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("category", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FunnelChartSortConfiguration {
    pub category_items_limit: Option<ItemsLimitConfiguration>,
    pub category_sort: Vec<FieldSortOptions>,
}

impl Transcode for FunnelChartSortConfiguration {
    const NAME: &'static str = "FunnelChartSortConfiguration";

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
