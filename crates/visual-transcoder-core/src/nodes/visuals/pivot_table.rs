//! Pivot tables: field placement, per-path sorting, subtotals and cell
//! conditional formatting.

use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{DataPathValue, VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::conditional::TextConditionalFormat;
use crate::nodes::enums::{
    PivotTableConditionalFormattingScopeRole, PivotTableMetricPlacement, PivotTableSubtotalLevel,
    SortDirection, TableTotalsPlacement, TableTotalsScrollStatus, Visibility,
};
use crate::nodes::fields::{ColumnSort, DimensionField, FieldSort, MeasureField};
use crate::nodes::table_style::{RowAlternateColorOptions, TableCellStyle};
use crate::nodes::DATA_PATH_VALUE_MAX_ITEMS;
use crate::oneof;
use crate::schema::{block, blocks, enumeration, identifier, string, NodeSchema};
use crate::value::Record;

const PIVOT_FIELDS_MAX_ITEMS: usize = 40;
const PIVOT_FIELD_OPTIONS_MAX_ITEMS: usize = 100;
const PIVOT_SORT_OPTIONS_MAX_ITEMS: usize = 200;
const CONDITIONAL_FORMATTING_OPTIONS_MAX_ITEMS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<PivotTableConfiguration>,
    pub conditional_formatting: Option<PivotTableConditionalFormatting>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for PivotTableVisual {
    const NAME: &'static str = "PivotTableVisual";

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
            .field("chart_configuration", block::<PivotTableConfiguration>())
            .field(
                "conditional_formatting",
                block::<PivotTableConditionalFormatting>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableConfiguration {
    pub field_options: Option<PivotTableFieldOptions>,
    pub field_wells: Option<PivotTableFieldWells>,
    pub paginated_report_options: Option<PivotTablePaginatedReportOptions>,
    pub sort_configuration: Option<PivotTableSortConfiguration>,
    pub table_options: Option<PivotTableOptions>,
    pub total_options: Option<PivotTableTotalOptions>,
}

impl Transcode for PivotTableConfiguration {
    const NAME: &'static str = "PivotTableConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_options: record.block("field_options"),
            field_wells: record.block("field_wells"),
            paginated_report_options: record.block("paginated_report_options"),
            sort_configuration: record.block("sort_configuration"),
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
        record.put_block("table_options", self.table_options.as_ref());
        record.put_block("total_options", self.total_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_options", block::<PivotTableFieldOptions>())
            .field("field_wells", block::<PivotTableFieldWells>())
            .field(
                "paginated_report_options",
                block::<PivotTablePaginatedReportOptions>(),
            )
            .field("sort_configuration", block::<PivotTableSortConfiguration>())
            .field("table_options", block::<PivotTableOptions>())
            .field("total_options", block::<PivotTableTotalOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableFieldOptions {
    pub data_path_options: Vec<PivotTableDataPathOption>,
    pub selected_field_options: Vec<PivotTableFieldOption>,
}

impl Transcode for PivotTableFieldOptions {
    const NAME: &'static str = "PivotTableFieldOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_path_options: record.blocks("data_path_options"),
            selected_field_options: record.blocks("selected_field_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("data_path_options", &self.data_path_options);
        record.put_blocks("selected_field_options", &self.selected_field_options);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "data_path_options",
            blocks::<PivotTableDataPathOption>().items(1, PIVOT_FIELD_OPTIONS_MAX_ITEMS),
        )
        .field(
            "selected_field_options",
            blocks::<PivotTableFieldOption>().items(1, PIVOT_FIELD_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableDataPathOption {
    pub data_path_list: Vec<DataPathValue>,
    pub width: Option<String>,
}

impl Transcode for PivotTableDataPathOption {
    const NAME: &'static str = "PivotTableDataPathOption";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            data_path_list: record.blocks("data_path_list"),
            width: record.string("width"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("data_path_list", &self.data_path_list);
        record.put_string("width", self.width.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "data_path_list",
            blocks::<DataPathValue>()
                .items(1, DATA_PATH_VALUE_MAX_ITEMS)
                .required(),
        )
        .field("width", string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableFieldOption {
    pub field_id: Option<String>,
    pub custom_label: Option<String>,
    pub visibility: Option<Visibility>,
}

impl Transcode for PivotTableFieldOption {
    const NAME: &'static str = "PivotTableFieldOption";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            custom_label: record.string("custom_label"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("custom_label", string().length(1, 2048))
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableFieldWells {
    pub pivot_table_aggregated_field_wells: Option<PivotTableAggregatedFieldWells>,
}

impl Transcode for PivotTableFieldWells {
    const NAME: &'static str = "PivotTableFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            pivot_table_aggregated_field_wells: record
                .block("pivot_table_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "pivot_table_aggregated_field_wells",
            self.pivot_table_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "pivot_table_aggregated_field_wells",
            block::<PivotTableAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableAggregatedFieldWells {
    pub columns: Vec<DimensionField>,
    pub rows: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for PivotTableAggregatedFieldWells {
    const NAME: &'static str = "PivotTableAggregatedFieldWells";

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
        node.field(
            "columns",
            blocks::<DimensionField>().max_items(PIVOT_FIELDS_MAX_ITEMS),
        )
        .field(
            "rows",
            blocks::<DimensionField>().max_items(PIVOT_FIELDS_MAX_ITEMS),
        )
        .field(
            "values",
            blocks::<MeasureField>().max_items(PIVOT_FIELDS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTablePaginatedReportOptions {
    pub overflow_column_header_visibility: Option<Visibility>,
    pub vertical_overflow_visibility: Option<Visibility>,
}

impl Transcode for PivotTablePaginatedReportOptions {
    const NAME: &'static str = "PivotTablePaginatedReportOptions";

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
pub struct PivotTableSortConfiguration {
    pub field_sort_options: Vec<PivotFieldSortOptions>,
}

impl Transcode for PivotTableSortConfiguration {
    const NAME: &'static str = "PivotTableSortConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_sort_options: record.blocks("field_sort_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("field_sort_options", &self.field_sort_options);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "field_sort_options",
            blocks::<PivotFieldSortOptions>().items(1, PIVOT_SORT_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotFieldSortOptions {
    pub field_id: Option<String>,
    pub sort_by: Option<PivotTableSortBy>,
}

impl Transcode for PivotFieldSortOptions {
    const NAME: &'static str = "PivotFieldSortOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            sort_by: record.block("sort_by"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("sort_by", self.sort_by.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("sort_by", block::<PivotTableSortBy>().required())
    }
}

/// Sort a pivot field by a column, by a data path, or by another field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PivotTableSortBy {
    #[serde(rename = "Column")]
    Column(ColumnSort),
    #[serde(rename = "DataPath")]
    DataPath(DataPathSort),
    #[serde(rename = "Field")]
    Field(FieldSort),
}

impl PivotTableSortBy {
    const ALTERNATIVES: &'static [&'static str] = &["column", "data_path", "field"];
}

impl Transcode for PivotTableSortBy {
    const NAME: &'static str = "PivotTableSortBy";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("column")
            .map(Self::Column)
            .or_else(|| record.block("data_path").map(Self::DataPath))
            .or_else(|| record.block("field").map(Self::Field))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Column(s) => record.put_block("column", Some(s)),
            Self::DataPath(s) => record.put_block("data_path", Some(s)),
            Self::Field(s) => record.put_block("field", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column", block::<ColumnSort>())
            .field("data_path", block::<DataPathSort>())
            .field("field", block::<FieldSort>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataPathSort {
    pub direction: Option<SortDirection>,
    pub sort_paths: Vec<DataPathValue>,
}

impl Transcode for DataPathSort {
    const NAME: &'static str = "DataPathSort";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            direction: record.enumeration("direction"),
            sort_paths: record.blocks("sort_paths"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("direction", self.direction.as_ref());
        record.put_blocks("sort_paths", &self.sort_paths);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("direction", enumeration::<SortDirection>().required())
            .field(
                "sort_paths",
                blocks::<DataPathValue>()
                    .items(1, DATA_PATH_VALUE_MAX_ITEMS)
                    .required(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableOptions {
    pub cell_style: Option<TableCellStyle>,
    pub collapsed_row_dimensions_visibility: Option<Visibility>,
    pub column_header_style: Option<TableCellStyle>,
    pub column_names_visibility: Option<Visibility>,
    pub metric_placement: Option<PivotTableMetricPlacement>,
    pub row_alternate_color_options: Option<RowAlternateColorOptions>,
    pub row_field_names_style: Option<TableCellStyle>,
    pub row_header_style: Option<TableCellStyle>,
    pub single_metric_visibility: Option<Visibility>,
    pub toggle_buttons_visibility: Option<Visibility>,
}

impl Transcode for PivotTableOptions {
    const NAME: &'static str = "PivotTableOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cell_style: record.block("cell_style"),
            collapsed_row_dimensions_visibility: record
                .enumeration("collapsed_row_dimensions_visibility"),
            column_header_style: record.block("column_header_style"),
            column_names_visibility: record.enumeration("column_names_visibility"),
            metric_placement: record.enumeration("metric_placement"),
            row_alternate_color_options: record.block("row_alternate_color_options"),
            row_field_names_style: record.block("row_field_names_style"),
            row_header_style: record.block("row_header_style"),
            single_metric_visibility: record.enumeration("single_metric_visibility"),
            toggle_buttons_visibility: record.enumeration("toggle_buttons_visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("cell_style", self.cell_style.as_ref());
        record.put_enum(
            "collapsed_row_dimensions_visibility",
            self.collapsed_row_dimensions_visibility.as_ref(),
        );
        record.put_block("column_header_style", self.column_header_style.as_ref());
        record.put_enum(
            "column_names_visibility",
            self.column_names_visibility.as_ref(),
        );
        record.put_enum("metric_placement", self.metric_placement.as_ref());
        record.put_block(
            "row_alternate_color_options",
            self.row_alternate_color_options.as_ref(),
        );
        record.put_block("row_field_names_style", self.row_field_names_style.as_ref());
        record.put_block("row_header_style", self.row_header_style.as_ref());
        record.put_enum(
            "single_metric_visibility",
            self.single_metric_visibility.as_ref(),
        );
        record.put_enum(
            "toggle_buttons_visibility",
            self.toggle_buttons_visibility.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cell_style", block::<TableCellStyle>())
            .field(
                "collapsed_row_dimensions_visibility",
                enumeration::<Visibility>(),
            )
            .field("column_header_style", block::<TableCellStyle>())
            .field("column_names_visibility", enumeration::<Visibility>())
            .field(
                "metric_placement",
                enumeration::<PivotTableMetricPlacement>(),
            )
            .field(
                "row_alternate_color_options",
                block::<RowAlternateColorOptions>(),
            )
            .field("row_field_names_style", block::<TableCellStyle>())
            .field("row_header_style", block::<TableCellStyle>())
            .field("single_metric_visibility", enumeration::<Visibility>())
            .field("toggle_buttons_visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableTotalOptions {
    pub column_subtotal_options: Option<SubtotalOptions>,
    pub column_total_options: Option<PivotTotalOptions>,
    pub row_subtotal_options: Option<SubtotalOptions>,
    pub row_total_options: Option<PivotTotalOptions>,
}

impl Transcode for PivotTableTotalOptions {
    const NAME: &'static str = "PivotTableTotalOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            column_subtotal_options: record.block("column_subtotal_options"),
            column_total_options: record.block("column_total_options"),
            row_subtotal_options: record.block("row_subtotal_options"),
            row_total_options: record.block("row_total_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "column_subtotal_options",
            self.column_subtotal_options.as_ref(),
        );
        record.put_block("column_total_options", self.column_total_options.as_ref());
        record.put_block("row_subtotal_options", self.row_subtotal_options.as_ref());
        record.put_block("row_total_options", self.row_total_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("column_subtotal_options", block::<SubtotalOptions>())
            .field("column_total_options", block::<PivotTotalOptions>())
            .field("row_subtotal_options", block::<SubtotalOptions>())
            .field("row_total_options", block::<PivotTotalOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SubtotalOptions {
    pub custom_label: Option<String>,
    pub field_level: Option<PivotTableSubtotalLevel>,
    pub field_level_options: Vec<PivotTableFieldSubtotalOptions>,
    pub metric_header_cell_style: Option<TableCellStyle>,
    pub total_cell_style: Option<TableCellStyle>,
    pub totals_visibility: Option<Visibility>,
    pub value_cell_style: Option<TableCellStyle>,
}

impl Transcode for SubtotalOptions {
    const NAME: &'static str = "SubtotalOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label: record.string("custom_label"),
            field_level: record.enumeration("field_level"),
            field_level_options: record.blocks("field_level_options"),
            metric_header_cell_style: record.block("metric_header_cell_style"),
            total_cell_style: record.block("total_cell_style"),
            totals_visibility: record.enumeration("totals_visibility"),
            value_cell_style: record.block("value_cell_style"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_enum("field_level", self.field_level.as_ref());
        record.put_blocks("field_level_options", &self.field_level_options);
        record.put_block(
            "metric_header_cell_style",
            self.metric_header_cell_style.as_ref(),
        );
        record.put_block("total_cell_style", self.total_cell_style.as_ref());
        record.put_enum("totals_visibility", self.totals_visibility.as_ref());
        record.put_block("value_cell_style", self.value_cell_style.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_label", string())
            .field("field_level", enumeration::<PivotTableSubtotalLevel>())
            .field(
                "field_level_options",
                blocks::<PivotTableFieldSubtotalOptions>()
                    .items(1, PIVOT_FIELD_OPTIONS_MAX_ITEMS),
            )
            .field("metric_header_cell_style", block::<TableCellStyle>())
            .field("total_cell_style", block::<TableCellStyle>())
            .field("totals_visibility", enumeration::<Visibility>())
            .field("value_cell_style", block::<TableCellStyle>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableFieldSubtotalOptions {
    pub field_id: Option<String>,
}

impl Transcode for PivotTableFieldSubtotalOptions {
    const NAME: &'static str = "PivotTableFieldSubtotalOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTotalOptions {
    pub custom_label: Option<String>,
    pub metric_header_cell_style: Option<TableCellStyle>,
    pub placement: Option<TableTotalsPlacement>,
    pub scroll_status: Option<TableTotalsScrollStatus>,
    pub total_cell_style: Option<TableCellStyle>,
    pub totals_visibility: Option<Visibility>,
    pub value_cell_style: Option<TableCellStyle>,
}

impl Transcode for PivotTotalOptions {
    const NAME: &'static str = "PivotTotalOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_label: record.string("custom_label"),
            metric_header_cell_style: record.block("metric_header_cell_style"),
            placement: record.enumeration("placement"),
            scroll_status: record.enumeration("scroll_status"),
            total_cell_style: record.block("total_cell_style"),
            totals_visibility: record.enumeration("totals_visibility"),
            value_cell_style: record.block("value_cell_style"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("custom_label", self.custom_label.as_deref());
        record.put_block(
            "metric_header_cell_style",
            self.metric_header_cell_style.as_ref(),
        );
        record.put_enum("placement", self.placement.as_ref());
        record.put_enum("scroll_status", self.scroll_status.as_ref());
        record.put_block("total_cell_style", self.total_cell_style.as_ref());
        record.put_enum("totals_visibility", self.totals_visibility.as_ref());
        record.put_block("value_cell_style", self.value_cell_style.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_label", string())
            .field("metric_header_cell_style", block::<TableCellStyle>())
            .field("placement", enumeration::<TableTotalsPlacement>())
            .field("scroll_status", enumeration::<TableTotalsScrollStatus>())
            .field("total_cell_style", block::<TableCellStyle>())
            .field("totals_visibility", enumeration::<Visibility>())
            .field("value_cell_style", block::<TableCellStyle>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableConditionalFormatting {
    pub conditional_formatting_options: Vec<PivotTableConditionalFormattingOption>,
}

impl Transcode for PivotTableConditionalFormatting {
    const NAME: &'static str = "PivotTableConditionalFormatting";

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
            blocks::<PivotTableConditionalFormattingOption>()
                .items(1, CONDITIONAL_FORMATTING_OPTIONS_MAX_ITEMS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableConditionalFormattingOption {
    pub cell: Option<PivotTableCellConditionalFormatting>,
}

impl Transcode for PivotTableConditionalFormattingOption {
    const NAME: &'static str = "PivotTableConditionalFormattingOption";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cell: record.block("cell"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("cell", self.cell.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cell", block::<PivotTableCellConditionalFormatting>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableCellConditionalFormatting {
    pub field_id: Option<String>,
    pub scope: Option<PivotTableConditionalFormattingScope>,
    pub text_format: Option<TextConditionalFormat>,
}

impl Transcode for PivotTableCellConditionalFormatting {
    const NAME: &'static str = "PivotTableCellConditionalFormatting";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_id: record.string("field_id"),
            scope: record.block("scope"),
            text_format: record.block("text_format"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("field_id", self.field_id.as_deref());
        record.put_block("scope", self.scope.as_ref());
        record.put_block("text_format", self.text_format.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_id", identifier().required())
            .field("scope", block::<PivotTableConditionalFormattingScope>())
            .field("text_format", block::<TextConditionalFormat>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PivotTableConditionalFormattingScope {
    pub role: Option<PivotTableConditionalFormattingScopeRole>,
}

impl Transcode for PivotTableConditionalFormattingScope {
    const NAME: &'static str = "PivotTableConditionalFormattingScope";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            role: record.enumeration("role"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("role", self.role.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "role",
            enumeration::<PivotTableConditionalFormattingScopeRole>(),
        )
    }
}
