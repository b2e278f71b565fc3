//! Flat tables. Field wells, URL styling, link content and conditional
//! formatting options are all one-of choices here.

use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{
    ColumnIdentifier, FontConfiguration, VisualSubtitleLabelOptions, VisualTitleLabelOptions,
};
use crate::nodes::conditional::{ConditionalFormattingColor, TextConditionalFormat};
use crate::nodes::enums::{
    TableCellImageScalingConfiguration, TableFieldIconSetType, TableOrientation,
    TableTotalsPlacement, TableTotalsScrollStatus, UrlTargetConfiguration, Visibility,
};
use crate::nodes::fields::{DimensionField, FieldSortOptions, MeasureField};
use crate::nodes::formatting::FormatConfiguration;
use crate::nodes::table_style::{RowAlternateColorOptions, TableCellStyle};
use crate::nodes::{
    DIMENSION_FIELDS_MAX_ITEMS, FIELD_SORT_OPTIONS_MAX_ITEMS, MEASURE_FIELDS_MAX_ITEMS,
};
use crate::oneof;
use crate::schema::{
    block, blocks, color, enumeration, identifier, int, string, string_list, NodeSchema,
};
use crate::value::Record;

const TABLE_FIELD_OPTIONS_MAX_ITEMS: usize = 100;
const UNAGGREGATED_FIELDS_MAX_ITEMS: usize = 200;
const INLINE_VISUALIZATIONS_MAX_ITEMS: usize = 200;
const CONDITIONAL_FORMATTING_OPTIONS_MAX_ITEMS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<TableConfiguration>,
    pub conditional_formatting: Option<TableConditionalFormatting>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for TableVisual {
    const NAME: &'static str = "TableVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            chart_configuration: record.block("chart_configuration"),
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
        record.put_block("conditional_formatting", self.conditional_formatting.as_ref());
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_header(node)
            .field("chart_configuration", block::<TableConfiguration>())
            .field(
                "conditional_formatting",
                block::<TableConditionalFormatting>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableConfiguration {
    pub field_options: Option<TableFieldOptions>,
    pub field_wells: Option<TableFieldWells>,
    pub paginated_report_options: Option<TablePaginatedReportOptions>,
    pub sort_configuration: Option<TableSortConfiguration>,
    pub table_inline_visualizations: Vec<TableInlineVisualization>,
    pub table_options: Option<TableOptions>,
    pub total_options: Option<TotalOptions>,
}

impl Transcode for TableConfiguration {
    const NAME: &'static str = "TableConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_options: record.block("field_options"),
            field_wells: record.block("field_wells"),
            paginated_report_options: record.block("paginated_report_options"),
            sort_configuration: record.block("sort_configuration"),
            table_inline_visualizations: record.blocks("table_inline_visualizations"),
            table_options: record.block("table_options"),
            total_options: record.block("total_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("field_options", self.field_options.as_ref());
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block(
            "paginated_report_options",
            self.paginated_report_options.as_ref(),
        );
        record.put_block("sort_configuration", self.sort_configuration.as_ref());
        record.put_blocks(
            "table_inline_visualizations",
            &self.table_inline_visualizations,
        );
        record.put_block("table_options", self.table_options.as_ref());
        record.put_block("total_options", self.total_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_options", block::<TableFieldOptions>())
            .field("field_wells", block::<TableFieldWells>())
            .field(
                "paginated_report_options",
                block::<TablePaginatedReportOptions>(),
            )
            .field("sort_configuration", block::<TableSortConfiguration>())
            .field(
                "table_inline_visualizations",
                blocks::<TableInlineVisualization>().items(1, INLINE_VISUALIZATIONS_MAX_ITEMS),
            )
            .field("table_options", block::<TableOptions>())
            .field("total_options", block::<TotalOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldOptions {
    pub order: Vec<String>,
    pub selected_field_options: Vec<TableFieldOption>,
}

impl Transcode for TableFieldOptions {
    const NAME: &'static str = "TableFieldOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            order: record.strings("order"),
            selected_field_options: record.blocks("selected_field_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string_list("order", &self.order);
        record.put_blocks("selected_field_options", &self.selected_field_options);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "order",
            string_list().max_items(TABLE_FIELD_OPTIONS_MAX_ITEMS),
        )
        .field(
            "selected_field_options",
            blocks::<TableFieldOption>().max_items(TABLE_FIELD_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldOption {
    pub field_id: Option<String>,
    pub custom_label: Option<String>,
    #[serde(rename = "URLStyling")]
    pub url_styling: Option<TableFieldUrlConfiguration>,
    pub visibility: Option<Visibility>,
    pub width: Option<String>,
}

impl Transcode for TableFieldOption {
    const NAME: &'static str = "TableFieldOption";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            custom_label: record.string("custom_label"),
            url_styling: record.block("url_styling"),
            visibility: record.enumeration("visibility"),
            width: record.string("width"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_block("url_styling", self.url_styling.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record.put_string("width", self.width.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("custom_label", string().length(1, 2048))
            .field("url_styling", block::<TableFieldUrlConfiguration>())
            .field("visibility", enumeration::<Visibility>())
            .field("width", string())
    }
}

/// A URL-valued column renders either as an image or as a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableFieldUrlConfiguration {
    #[serde(rename = "ImageConfiguration")]
    Image(TableFieldImageConfiguration),
    #[serde(rename = "LinkConfiguration")]
    Link(TableFieldLinkConfiguration),
}

impl TableFieldUrlConfiguration {
    const ALTERNATIVES: &'static [&'static str] = &["image_configuration", "link_configuration"];
}

impl Transcode for TableFieldUrlConfiguration {
    const NAME: &'static str = "TableFieldURLConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("image_configuration")
            .map(Self::Image)
            .or_else(|| record.block("link_configuration").map(Self::Link))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Image(c) => record.put_block("image_configuration", Some(c)),
            Self::Link(c) => record.put_block("link_configuration", Some(c)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("image_configuration", block::<TableFieldImageConfiguration>())
            .field("link_configuration", block::<TableFieldLinkConfiguration>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldImageConfiguration {
    pub sizing_options: Option<TableCellImageSizingConfiguration>,
}

impl Transcode for TableFieldImageConfiguration {
    const NAME: &'static str = "TableFieldImageConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            sizing_options: record.block("sizing_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("sizing_options", self.sizing_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "sizing_options",
            block::<TableCellImageSizingConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableCellImageSizingConfiguration {
    pub table_cell_image_scaling_configuration: Option<TableCellImageScalingConfiguration>,
}

impl Transcode for TableCellImageSizingConfiguration {
    const NAME: &'static str = "TableCellImageSizingConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            table_cell_image_scaling_configuration: record
                .enumeration("table_cell_image_scaling_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "table_cell_image_scaling_configuration",
            self.table_cell_image_scaling_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "table_cell_image_scaling_configuration",
            enumeration::<TableCellImageScalingConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldLinkConfiguration {
    pub content: Option<TableFieldLinkContentConfiguration>,
    pub target: Option<UrlTargetConfiguration>,
}

impl Transcode for TableFieldLinkConfiguration {
    const NAME: &'static str = "TableFieldLinkConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            content: record.block("content"),
            target: record.enumeration("target"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("content", self.content.as_ref());
        record.put_enum("target", self.target.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "content",
            block::<TableFieldLinkContentConfiguration>().required(),
        )
        .field(
            "target",
            enumeration::<UrlTargetConfiguration>().required(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableFieldLinkContentConfiguration {
    #[serde(rename = "CustomIconContent")]
    CustomIcon(TableFieldCustomIconContent),
    #[serde(rename = "CustomTextContent")]
    CustomText(TableFieldCustomTextContent),
}

impl TableFieldLinkContentConfiguration {
    const ALTERNATIVES: &'static [&'static str] = &["custom_icon_content", "custom_text_content"];
}

impl Transcode for TableFieldLinkContentConfiguration {
    const NAME: &'static str = "TableFieldLinkContentConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("custom_icon_content")
            .map(Self::CustomIcon)
            .or_else(|| record.block("custom_text_content").map(Self::CustomText))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::CustomIcon(c) => record.put_block("custom_icon_content", Some(c)),
            Self::CustomText(c) => record.put_block("custom_text_content", Some(c)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_icon_content", block::<TableFieldCustomIconContent>())
            .field("custom_text_content", block::<TableFieldCustomTextContent>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldCustomIconContent {
    pub icon: Option<TableFieldIconSetType>,
}

impl Transcode for TableFieldCustomIconContent {
    const NAME: &'static str = "TableFieldCustomIconContent";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            icon: record.enumeration("icon"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("icon", self.icon.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("icon", enumeration::<TableFieldIconSetType>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableFieldCustomTextContent {
    pub font_configuration: Option<FontConfiguration>,
    pub value: Option<String>,
}

impl Transcode for TableFieldCustomTextContent {
    const NAME: &'static str = "TableFieldCustomTextContent";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            font_configuration: record.block("font_configuration"),
            value: record.string("value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record.put_string("value", self.value.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "font_configuration",
            block::<FontConfiguration>().required(),
        )
        .field("value", string())
    }
}

/// Aggregated rows grouped by dimensions, or raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableFieldWells {
    #[serde(rename = "TableAggregatedFieldWells")]
    Aggregated(TableAggregatedFieldWells),
    #[serde(rename = "TableUnaggregatedFieldWells")]
    Unaggregated(TableUnaggregatedFieldWells),
}

impl TableFieldWells {
    const ALTERNATIVES: &'static [&'static str] = &[
        "table_aggregated_field_wells",
        "table_unaggregated_field_wells",
    ];
}

impl Transcode for TableFieldWells {
    const NAME: &'static str = "TableFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("table_aggregated_field_wells")
            .map(Self::Aggregated)
            .or_else(|| {
                record
                    .block("table_unaggregated_field_wells")
                    .map(Self::Unaggregated)
            })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Aggregated(w) => record.put_block("table_aggregated_field_wells", Some(w)),
            Self::Unaggregated(w) => record.put_block("table_unaggregated_field_wells", Some(w)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "table_aggregated_field_wells",
            block::<TableAggregatedFieldWells>(),
        )
        .field(
            "table_unaggregated_field_wells",
            block::<TableUnaggregatedFieldWells>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableAggregatedFieldWells {
    pub group_by: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for TableAggregatedFieldWells {
    const NAME: &'static str = "TableAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            group_by: record.blocks("group_by"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("group_by", &self.group_by);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "group_by",
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
pub struct TableUnaggregatedFieldWells {
    pub values: Vec<UnaggregatedField>,
}

impl Transcode for TableUnaggregatedFieldWells {
    const NAME: &'static str = "TableUnaggregatedFieldWells";

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
        node.field(
            "values",
            blocks::<UnaggregatedField>().max_items(UNAGGREGATED_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnaggregatedField {
    pub column: Option<ColumnIdentifier>,
    pub field_id: Option<String>,
    pub format_configuration: Option<FormatConfiguration>,
}

impl Transcode for UnaggregatedField {
    const NAME: &'static str = "UnaggregatedField";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column: record.block("column"),
            field_id: record.string("field_id"),
            format_configuration: record.block("format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("column", self.column.as_ref());
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnIdentifier>().required())
            .field("field_id", identifier().required())
            .field("format_configuration", block::<FormatConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TablePaginatedReportOptions {
    pub overflow_column_header_visibility: Option<Visibility>,
    pub vertical_overflow_visibility: Option<Visibility>,
}

impl Transcode for TablePaginatedReportOptions {
    const NAME: &'static str = "TablePaginatedReportOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            overflow_column_header_visibility: record
                .enumeration("overflow_column_header_visibility"),
            vertical_overflow_visibility: record.enumeration("vertical_overflow_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "overflow_column_header_visibility",
            self.overflow_column_header_visibility.as_ref(),
        );
        record.put_enum(
            "vertical_overflow_visibility",
            self.vertical_overflow_visibility.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "overflow_column_header_visibility",
            enumeration::<Visibility>(),
        )
        .field("vertical_overflow_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableSortConfiguration {
    pub pagination_configuration: Option<PaginationConfiguration>,
    pub row_sort: Vec<FieldSortOptions>,
}

impl Transcode for TableSortConfiguration {
    const NAME: &'static str = "TableSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            pagination_configuration: record.block("pagination_configuration"),
            row_sort: record.blocks("row_sort"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "pagination_configuration",
            self.pagination_configuration.as_ref(),
        );
        record.put_blocks("row_sort", &self.row_sort);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "pagination_configuration",
            block::<PaginationConfiguration>(),
        )
        .field(
            "row_sort",
            blocks::<FieldSortOptions>().max_items(FIELD_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaginationConfiguration {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl Transcode for PaginationConfiguration {
    const NAME: &'static str = "PaginationConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            page_number: record.int64("page_number"),
            page_size: record.int64("page_size"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("page_number", self.page_number);
        record.put_int64("page_size", self.page_size);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("page_number", int().range(1, i64::MAX).required())
            .field("page_size", int().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableInlineVisualization {
    pub data_bars: Option<DataBarsOptions>,
}

impl Transcode for TableInlineVisualization {
    const NAME: &'static str = "TableInlineVisualization";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_bars: record.block("data_bars"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("data_bars", self.data_bars.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("data_bars", block::<DataBarsOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataBarsOptions {
    pub field_id: Option<String>,
    pub negative_color: Option<String>,
    pub positive_color: Option<String>,
}

impl Transcode for DataBarsOptions {
    const NAME: &'static str = "DataBarsOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            negative_color: record.string("negative_color"),
            positive_color: record.string("positive_color"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("negative_color", self.negative_color.as_deref());
        record.put_string("positive_color", self.positive_color.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("negative_color", color())
            .field("positive_color", color())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableOptions {
    pub cell_style: Option<TableCellStyle>,
    pub header_style: Option<TableCellStyle>,
    pub orientation: Option<TableOrientation>,
    pub row_alternate_color_options: Option<RowAlternateColorOptions>,
}

impl Transcode for TableOptions {
    const NAME: &'static str = "TableOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cell_style: record.block("cell_style"),
            header_style: record.block("header_style"),
            orientation: record.enumeration("orientation"),
            row_alternate_color_options: record.block("row_alternate_color_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("cell_style", self.cell_style.as_ref());
        record.put_block("header_style", self.header_style.as_ref());
        record.put_enum("orientation", self.orientation.as_ref());
        record.put_block(
            "row_alternate_color_options",
            self.row_alternate_color_options.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cell_style", block::<TableCellStyle>())
            .field("header_style", block::<TableCellStyle>())
            .field("orientation", enumeration::<TableOrientation>())
            .field(
                "row_alternate_color_options",
                block::<RowAlternateColorOptions>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TotalOptions {
    pub custom_label: Option<String>,
    pub placement: Option<TableTotalsPlacement>,
    pub scroll_status: Option<TableTotalsScrollStatus>,
    pub total_cell_style: Option<TableCellStyle>,
    pub totals_visibility: Option<Visibility>,
}

impl Transcode for TotalOptions {
    const NAME: &'static str = "TotalOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label: record.string("custom_label"),
            placement: record.enumeration("placement"),
            scroll_status: record.enumeration("scroll_status"),
            total_cell_style: record.block("total_cell_style"),
            totals_visibility: record.enumeration("totals_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_enum("placement", self.placement.as_ref());
        record.put_enum("scroll_status", self.scroll_status.as_ref());
        record.put_block("total_cell_style", self.total_cell_style.as_ref());
        record.put_enum("totals_visibility", self.totals_visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_label", string())
            .field("placement", enumeration::<TableTotalsPlacement>())
            .field("scroll_status", enumeration::<TableTotalsScrollStatus>())
            .field("total_cell_style", block::<TableCellStyle>())
            .field("totals_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableConditionalFormatting {
    pub conditional_formatting_options: Vec<TableConditionalFormattingOption>,
}

impl Transcode for TableConditionalFormatting {
    const NAME: &'static str = "TableConditionalFormatting";

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
            blocks::<TableConditionalFormattingOption>()
                .items(1, CONDITIONAL_FORMATTING_OPTIONS_MAX_ITEMS),
        )
    }
}

/// Format one cell's text, or color a whole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableConditionalFormattingOption {
    #[serde(rename = "Cell")]
    Cell(TableCellConditionalFormatting),
    #[serde(rename = "Row")]
    Row(TableRowConditionalFormatting),
}

impl TableConditionalFormattingOption {
    const ALTERNATIVES: &'static [&'static str] = &["cell", "row"];
}

impl Transcode for TableConditionalFormattingOption {
    const NAME: &'static str = "TableConditionalFormattingOption";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("cell")
            .map(Self::Cell)
            .or_else(|| record.block("row").map(Self::Row))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Cell(c) => record.put_block("cell", Some(c)),
            Self::Row(r) => record.put_block("row", Some(r)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cell", block::<TableCellConditionalFormatting>())
            .field("row", block::<TableRowConditionalFormatting>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableCellConditionalFormatting {
    pub field_id: Option<String>,
    pub text_format: Option<TextConditionalFormat>,
}

impl Transcode for TableCellConditionalFormatting {
    const NAME: &'static str = "TableCellConditionalFormatting";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            text_format: record.block("text_format"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("text_format", self.text_format.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("text_format", block::<TextConditionalFormat>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableRowConditionalFormatting {
    pub background_color: Option<ConditionalFormattingColor>,
    pub text_color: Option<ConditionalFormattingColor>,
}

impl Transcode for TableRowConditionalFormatting {
    const NAME: &'static str = "TableRowConditionalFormatting";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            background_color: record.block("background_color"),
            text_color: record.block("text_color"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("background_color", self.background_color.as_ref());
        record.put_block("text_color", self.text_color.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("background_color", block::<ConditionalFormattingColor>())
            .field("text_color", block::<ConditionalFormattingColor>())
    }
}
