use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{
    FontConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::enums::{PrimaryValueDisplayType, Visibility};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::formatting::ComparisonConfiguration;
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::{
    DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS,
};
use crate::schema::{block, blocks, enumeration, NodeSchema};
use crate::value::Record;

/// Key performance indicator: a headline value with optional target and
/// trend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KpiVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<KpiConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for KpiVisual {
    const NAME: &'static str = "KPIVisual";

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
            .field("chart_configuration", block::<KpiConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KpiConfiguration {
    pub field_wells: Option<KpiFieldWells>,
    pub kpi_options: Option<KpiOptions>,
    pub sort_configuration: Option<KpiSortConfiguration>,
}

impl Transcode for KpiConfiguration {
    const NAME: &'static str = "KPIConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_wells: record.block("field_wells"),
            kpi_options: record.block("kpi_options"),
            sort_configuration: record.block("sort_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("kpi_options", self.kpi_options.as_ref());
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_wells", block::<KpiFieldWells>())
            .field("kpi_options", block::<KpiOptions>())
            .field("sort_configuration", block::<KpiSortConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KpiFieldWells {
    pub target_values: Vec<MeasureField>,
    pub trend_groups: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for KpiFieldWells {
    const NAME: &'static str = "KPIFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            target_values: record.blocks("target_values"),
            trend_groups: record.blocks("trend_groups"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("target_values", &self.target_values);
        record.put_blocks("trend_groups", &self.trend_groups);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "target_values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
        .field(
            "trend_groups",
            blocks::<DimensionField>().max_items(DIMENSION_FIELDS_MAX_ITEMS),
        )
        .field(
            "values",
            blocks::<MeasureField>().max_items(MEASURE_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KpiOptions {
    pub comparison: Option<ComparisonConfiguration>,
    pub primary_value_display_type: Option<PrimaryValueDisplayType>,
    pub primary_value_font_configuration: Option<FontConfiguration>,
    pub progress_bar: Option<ProgressBarOptions>,
    pub secondary_value: Option<SecondaryValueOptions>,
    pub secondary_value_font_configuration: Option<FontConfiguration>,
    pub trend_arrows: Option<TrendArrowOptions>,
}

impl Transcode for KpiOptions {
    const NAME: &'static str = "KPIOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            comparison: record.block("comparison"),
            primary_value_display_type: record.enumeration("primary_value_display_type"),
            primary_value_font_configuration: record.block("primary_value_font_configuration"),
            progress_bar: record.block("progress_bar"),
            secondary_value: record.block("secondary_value"),
            secondary_value_font_configuration: record
                .block("secondary_value_font_configuration"),
            trend_arrows: record.block("trend_arrows"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("comparison", self.comparison.as_ref());
        record.put_enum(
            "primary_value_display_type",
            self.primary_value_display_type.as_ref(),
        );
        record.put_block(
            "primary_value_font_configuration",
            self.primary_value_font_configuration.as_ref(),
        );
        record.put_block("progress_bar", self.progress_bar.as_ref());
        record.put_block("secondary_value", self.secondary_value.as_ref());
        record.put_block(
            "secondary_value_font_configuration",
            self.secondary_value_font_configuration.as_ref(),
        );
        record.put_block("trend_arrows", self.trend_arrows.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("comparison", block::<ComparisonConfiguration>())
            .field(
                "primary_value_display_type",
                enumeration::<PrimaryValueDisplayType>(),
            )
            .field(
                "primary_value_font_configuration",
                block::<FontConfiguration>(),
            )
            .field("progress_bar", block::<ProgressBarOptions>())
            .field("secondary_value", block::<SecondaryValueOptions>())
            .field(
                "secondary_value_font_configuration",
                block::<FontConfiguration>(),
            )
            .field("trend_arrows", block::<TrendArrowOptions>())
    }
}

macro_rules! visibility_block {
    ($name:ident, $wire:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase", default)]
        pub struct $name {
            pub visibility: Option<Visibility>,
        }

        impl Transcode for $name {
            const NAME: &'static str = $wire;

            fn expand(record: &Record) -> Option<Self> {
                Some(Self {
                    visibility: record.enumeration("visibility"),
                })
            }

            fn flatten(&self) -> Record {
                let mut record = Record::new();
                record.put_enum("visibility", self.visibility.as_ref());
                record
            }

            fn describe(node: NodeSchema) -> NodeSchema {
                node.field("visibility", enumeration::<Visibility>())
            }
        }
    };
}

visibility_block!(ProgressBarOptions, "ProgressBarOptions");
visibility_block!(SecondaryValueOptions, "SecondaryValueOptions");
visibility_block!(TrendArrowOptions, "TrendArrowOptions");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KpiSortConfiguration {
    pub trend_group_sort: Vec<FieldSortOptions>,
}

impl Transcode for KpiSortConfiguration {
    const NAME: &'static str = "KPISortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            trend_group_sort: record.blocks("trend_group_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("trend_group_sort", &self.trend_group_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "trend_group_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}
