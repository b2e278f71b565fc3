//! The visual kinds and the dispatch root over them.

mod bar_chart;
mod box_plot;
mod combo_chart;
mod custom_content;
mod filled_map;
mod funnel_chart;
mod gauge_chart;
mod geospatial_map;
mod heat_map;
mod histogram;
mod insight;
mod kpi;
mod line_chart;
mod pie_chart;
mod pivot_table;
mod radar_chart;
mod sankey_diagram;
mod scatter_plot;
mod table;
mod tree_map;
mod waterfall;
mod word_cloud;

pub use bar_chart::*;
pub use box_plot::*;
pub use combo_chart::*;
pub use custom_content::*;
pub use filled_map::*;
pub use funnel_chart::*;
pub use gauge_chart::*;
pub use geospatial_map::*;
pub use heat_map::*;
pub use histogram::*;
pub use insight::*;
pub use kpi::*;
pub use line_chart::*;
pub use pie_chart::*;
pub use pivot_table::*;
pub use radar_chart::*;
pub use sankey_diagram::*;
pub use scatter_plot::*;
pub use table::*;
pub use tree_map::*;
pub use waterfall::*;
pub use word_cloud::*;

use serde::{Deserialize, Serialize};

use super::actions::VisualCustomAction;
use super::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use super::hierarchy::ColumnHierarchy;
use super::{COLUMN_HIERARCHIES_MAX_ITEMS, CUSTOM_ACTIONS_MAX_ITEMS};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, blocks, identifier, NodeSchema};
use crate::value::Record;

/// One visual on a sheet. Exactly one kind is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Visual {
    #[serde(rename = "BarChartVisual")]
    BarChart(BarChartVisual),
    #[serde(rename = "BoxPlotVisual")]
    BoxPlot(BoxPlotVisual),
    #[serde(rename = "ComboChartVisual")]
    ComboChart(ComboChartVisual),
    #[serde(rename = "CustomContentVisual")]
    CustomContent(CustomContentVisual),
    #[serde(rename = "EmptyVisual")]
    Empty(EmptyVisual),
    #[serde(rename = "FilledMapVisual")]
    FilledMap(FilledMapVisual),
    #[serde(rename = "FunnelChartVisual")]
    FunnelChart(FunnelChartVisual),
    #[serde(rename = "GaugeChartVisual")]
    GaugeChart(GaugeChartVisual),
    #[serde(rename = "GeospatialMapVisual")]
    GeospatialMap(GeospatialMapVisual),
    #[serde(rename = "HeatMapVisual")]
    HeatMap(HeatMapVisual),
    #[serde(rename = "HistogramVisual")]
    Histogram(HistogramVisual),
    #[serde(rename = "InsightVisual")]
    Insight(InsightVisual),
    #[serde(rename = "KPIVisual")]
    Kpi(KpiVisual),
    #[serde(rename = "LineChartVisual")]
    LineChart(LineChartVisual),
    #[serde(rename = "PieChartVisual")]
    PieChart(PieChartVisual),
    #[serde(rename = "PivotTableVisual")]
    PivotTable(PivotTableVisual),
    #[serde(rename = "RadarChartVisual")]
    RadarChart(RadarChartVisual),
    #[serde(rename = "SankeyDiagramVisual")]
    SankeyDiagram(SankeyDiagramVisual),
    #[serde(rename = "ScatterPlotVisual")]
    ScatterPlot(ScatterPlotVisual),
    #[serde(rename = "TableVisual")]
    Table(TableVisual),
    #[serde(rename = "TreeMapVisual")]
    TreeMap(TreeMapVisual),
    #[serde(rename = "WaterfallVisual")]
    Waterfall(WaterfallVisual),
    #[serde(rename = "WordCloudVisual")]
    WordCloud(WordCloudVisual),
}

impl Visual {
    pub const ALTERNATIVES: &'static [&'static str] = &[
        "bar_chart_visual",
        "box_plot_visual",
        "combo_chart_visual",
        "custom_content_visual",
        "empty_visual",
        "filled_map_visual",
        "funnel_chart_visual",
        "gauge_chart_visual",
        "geospatial_map_visual",
        "heat_map_visual",
        "histogram_visual",
        "insight_visual",
        "kpi_visual",
        "line_chart_visual",
        "pie_chart_visual",
        "pivot_table_visual",
        "radar_chart_visual",
        "sankey_diagram_visual",
        "scatter_plot_visual",
        "table_visual",
        "tree_map_visual",
        "waterfall_visual",
        "word_cloud_visual",
    ];

    /// Dynamic-side key of the held kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BarChart(_) => "bar_chart_visual",
            Self::BoxPlot(_) => "box_plot_visual",
            Self::ComboChart(_) => "combo_chart_visual",
            Self::CustomContent(_) => "custom_content_visual",
            Self::Empty(_) => "empty_visual",
            Self::FilledMap(_) => "filled_map_visual",
            Self::FunnelChart(_) => "funnel_chart_visual",
            Self::GaugeChart(_) => "gauge_chart_visual",
            Self::GeospatialMap(_) => "geospatial_map_visual",
            Self::HeatMap(_) => "heat_map_visual",
            Self::Histogram(_) => "histogram_visual",
            Self::Insight(_) => "insight_visual",
            Self::Kpi(_) => "kpi_visual",
            Self::LineChart(_) => "line_chart_visual",
            Self::PieChart(_) => "pie_chart_visual",
            Self::PivotTable(_) => "pivot_table_visual",
            Self::RadarChart(_) => "radar_chart_visual",
            Self::SankeyDiagram(_) => "sankey_diagram_visual",
            Self::ScatterPlot(_) => "scatter_plot_visual",
            Self::Table(_) => "table_visual",
            Self::TreeMap(_) => "tree_map_visual",
            Self::Waterfall(_) => "waterfall_visual",
            Self::WordCloud(_) => "word_cloud_visual",
        }
    }

    pub fn visual_id(&self) -> Option<&str> {
        match self {
            Self::BarChart(v) => v.visual_id.as_deref(),
            Self::BoxPlot(v) => v.visual_id.as_deref(),
            Self::ComboChart(v) => v.visual_id.as_deref(),
            Self::CustomContent(v) => v.visual_id.as_deref(),
            Self::Empty(v) => v.visual_id.as_deref(),
            Self::FilledMap(v) => v.visual_id.as_deref(),
            Self::FunnelChart(v) => v.visual_id.as_deref(),
            Self::GaugeChart(v) => v.visual_id.as_deref(),
            Self::GeospatialMap(v) => v.visual_id.as_deref(),
            Self::HeatMap(v) => v.visual_id.as_deref(),
            Self::Histogram(v) => v.visual_id.as_deref(),
            Self::Insight(v) => v.visual_id.as_deref(),
            Self::Kpi(v) => v.visual_id.as_deref(),
            Self::LineChart(v) => v.visual_id.as_deref(),
            Self::PieChart(v) => v.visual_id.as_deref(),
            Self::PivotTable(v) => v.visual_id.as_deref(),
            Self::RadarChart(v) => v.visual_id.as_deref(),
            Self::SankeyDiagram(v) => v.visual_id.as_deref(),
            Self::ScatterPlot(v) => v.visual_id.as_deref(),
            Self::Table(v) => v.visual_id.as_deref(),
            Self::TreeMap(v) => v.visual_id.as_deref(),
            Self::Waterfall(v) => v.visual_id.as_deref(),
            Self::WordCloud(v) => v.visual_id.as_deref(),
        }
    }
}

impl Transcode for Visual {
    const NAME: &'static str = "Visual";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        let visual = record
            .block("bar_chart_visual")
            .map(Self::BarChart)
            .or_else(|| record.block("box_plot_visual").map(Self::BoxPlot))
            .or_else(|| record.block("combo_chart_visual").map(Self::ComboChart))
            .or_else(|| record.block("custom_content_visual").map(Self::CustomContent))
            .or_else(|| record.block("empty_visual").map(Self::Empty))
            .or_else(|| record.block("filled_map_visual").map(Self::FilledMap))
            .or_else(|| record.block("funnel_chart_visual").map(Self::FunnelChart))
            .or_else(|| record.block("gauge_chart_visual").map(Self::GaugeChart))
            .or_else(|| record.block("geospatial_map_visual").map(Self::GeospatialMap))
            .or_else(|| record.block("heat_map_visual").map(Self::HeatMap))
            .or_else(|| record.block("histogram_visual").map(Self::Histogram))
            .or_else(|| record.block("insight_visual").map(Self::Insight))
            .or_else(|| record.block("kpi_visual").map(Self::Kpi))
            .or_else(|| record.block("line_chart_visual").map(Self::LineChart))
            .or_else(|| record.block("pie_chart_visual").map(Self::PieChart))
            .or_else(|| record.block("pivot_table_visual").map(Self::PivotTable))
            .or_else(|| record.block("radar_chart_visual").map(Self::RadarChart))
            .or_else(|| record.block("sankey_diagram_visual").map(Self::SankeyDiagram))
            .or_else(|| record.block("scatter_plot_visual").map(Self::ScatterPlot))
            .or_else(|| record.block("table_visual").map(Self::Table))
            .or_else(|| record.block("tree_map_visual").map(Self::TreeMap))
            .or_else(|| record.block("waterfall_visual").map(Self::Waterfall))
            .or_else(|| record.block("word_cloud_visual").map(Self::WordCloud));
        match &visual {
            Some(v) => tracing::debug!(kind = v.kind(), visual_id = ?v.visual_id(), "expanded visual"),
            None => tracing::debug!("record holds no visual kind"),
        }
        visual
    }

    fn flatten(&self) -> Record {
        tracing::debug!(kind = self.kind(), visual_id = ?self.visual_id(), "flattening visual");
        let mut record = Record::new();
        match self {
            Self::BarChart(v) => record.put_block("bar_chart_visual", Some(v)),
            Self::BoxPlot(v) => record.put_block("box_plot_visual", Some(v)),
            Self::ComboChart(v) => record.put_block("combo_chart_visual", Some(v)),
            Self::CustomContent(v) => record.put_block("custom_content_visual", Some(v)),
            Self::Empty(v) => record.put_block("empty_visual", Some(v)),
            Self::FilledMap(v) => record.put_block("filled_map_visual", Some(v)),
            Self::FunnelChart(v) => record.put_block("funnel_chart_visual", Some(v)),
            Self::GaugeChart(v) => record.put_block("gauge_chart_visual", Some(v)),
            Self::GeospatialMap(v) => record.put_block("geospatial_map_visual", Some(v)),
            Self::HeatMap(v) => record.put_block("heat_map_visual", Some(v)),
            Self::Histogram(v) => record.put_block("histogram_visual", Some(v)),
            Self::Insight(v) => record.put_block("insight_visual", Some(v)),
            Self::Kpi(v) => record.put_block("kpi_visual", Some(v)),
            Self::LineChart(v) => record.put_block("line_chart_visual", Some(v)),
            Self::PieChart(v) => record.put_block("pie_chart_visual", Some(v)),
            Self::PivotTable(v) => record.put_block("pivot_table_visual", Some(v)),
            Self::RadarChart(v) => record.put_block("radar_chart_visual", Some(v)),
            Self::SankeyDiagram(v) => record.put_block("sankey_diagram_visual", Some(v)),
            Self::ScatterPlot(v) => record.put_block("scatter_plot_visual", Some(v)),
            Self::Table(v) => record.put_block("table_visual", Some(v)),
            Self::TreeMap(v) => record.put_block("tree_map_visual", Some(v)),
            Self::Waterfall(v) => record.put_block("waterfall_visual", Some(v)),
            Self::WordCloud(v) => record.put_block("word_cloud_visual", Some(v)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bar_chart_visual", block::<BarChartVisual>())
            .field("box_plot_visual", block::<BoxPlotVisual>())
            .field("combo_chart_visual", block::<ComboChartVisual>())
            .field("custom_content_visual", block::<CustomContentVisual>())
            .field("empty_visual", block::<EmptyVisual>())
            .field("filled_map_visual", block::<FilledMapVisual>())
            .field("funnel_chart_visual", block::<FunnelChartVisual>())
            .field("gauge_chart_visual", block::<GaugeChartVisual>())
            .field("geospatial_map_visual", block::<GeospatialMapVisual>())
            .field("heat_map_visual", block::<HeatMapVisual>())
            .field("histogram_visual", block::<HistogramVisual>())
            .field("insight_visual", block::<InsightVisual>())
            .field("kpi_visual", block::<KpiVisual>())
            .field("line_chart_visual", block::<LineChartVisual>())
            .field("pie_chart_visual", block::<PieChartVisual>())
            .field("pivot_table_visual", block::<PivotTableVisual>())
            .field("radar_chart_visual", block::<RadarChartVisual>())
            .field("sankey_diagram_visual", block::<SankeyDiagramVisual>())
            .field("scatter_plot_visual", block::<ScatterPlotVisual>())
            .field("table_visual", block::<TableVisual>())
            .field("tree_map_visual", block::<TreeMapVisual>())
            .field("waterfall_visual", block::<WaterfallVisual>())
            .field("word_cloud_visual", block::<WordCloudVisual>())
            .one_of(Self::ALTERNATIVES)
    }
}

/// Declare the fields every visual kind carries: id, custom actions,
/// title and subtitle.
fn describe_header(node: NodeSchema) -> NodeSchema {
    node.field("visual_id", identifier().required())
        .field(
            "actions",
            blocks::<VisualCustomAction>().max_items(CUSTOM_ACTIONS_MAX_ITEMS),
        )
        .field("subtitle", block::<VisualSubtitleLabelOptions>())
        .field("title", block::<VisualTitleLabelOptions>())
}

fn describe_column_hierarchies(node: NodeSchema) -> NodeSchema {
    node.field(
        "column_hierarchies",
        blocks::<ColumnHierarchy>().max_items(COLUMN_HIERARCHIES_MAX_ITEMS),
    )
}
