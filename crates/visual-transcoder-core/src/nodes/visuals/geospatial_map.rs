//! Point maps, plus the map style and window blocks shared with filled maps.

use serde::{Deserialize, Serialize};

use super::{describe_column_hierarchies, describe_header};
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::enums::{BaseMapStyleType, GeospatialSelectedPointStyle, MapZoomMode};
use crate::nodes::fields::{DimensionField, MeasureField};
use crate::nodes::hierarchy::ColumnHierarchy;
use crate::nodes::presentation::{LegendOptions, TooltipOptions, VisualPalette};
use crate::schema::{block, blocks, color, enumeration, float, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialMapVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<GeospatialMapConfiguration>,
    pub column_hierarchies: Vec<ColumnHierarchy>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for GeospatialMapVisual {
    const NAME: &'static str = "GeospatialMapVisual";

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
            .field("chart_configuration", block::<GeospatialMapConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialMapConfiguration {
    pub field_wells: Option<GeospatialMapFieldWells>,
    pub legend: Option<LegendOptions>,
    pub map_style_options: Option<GeospatialMapStyleOptions>,
    pub point_style_options: Option<GeospatialPointStyleOptions>,
    pub tooltip: Option<TooltipOptions>,
    pub visual_palette: Option<VisualPalette>,
    pub window_options: Option<GeospatialWindowOptions>,
}

impl Transcode for GeospatialMapConfiguration {
    const NAME: &'static str = "GeospatialMapConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            field_wells: record.block("field_wells"),
            legend: record.block("legend"),
            map_style_options: record.block("map_style_options"),
            point_style_options: record.block("point_style_options"),
            tooltip: record.block("tooltip"),
            visual_palette: record.block("visual_palette"),
            window_options: record.block("window_options"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("field_wells", self.field_wells.as_ref());
        record.put_block("legend", self.legend.as_ref());
        record.put_block("map_style_options", self.map_style_options.as_ref());
        record.put_block("point_style_options", self.point_style_options.as_ref());
        record.put_block("tooltip", self.tooltip.as_ref());
        record.put_block("visual_palette", self.visual_palette.as_ref());
        record.put_block("window_options", self.window_options.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("field_wells", block::<GeospatialMapFieldWells>())
            .field("legend", block::<LegendOptions>())
            .field("map_style_options", block::<GeospatialMapStyleOptions>())
            .field("point_style_options", block::<GeospatialPointStyleOptions>())
            .field("tooltip", block::<TooltipOptions>())
            .field("visual_palette", block::<VisualPalette>())
            .field("window_options", block::<GeospatialWindowOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialMapFieldWells {
    pub geospatial_map_aggregated_field_wells: Option<GeospatialMapAggregatedFieldWells>,
}

impl Transcode for GeospatialMapFieldWells {
    const NAME: &'static str = "GeospatialMapFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            geospatial_map_aggregated_field_wells: record
                .block("geospatial_map_aggregated_field_wells"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "geospatial_map_aggregated_field_wells",
            self.geospatial_map_aggregated_field_wells.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "geospatial_map_aggregated_field_wells",
            block::<GeospatialMapAggregatedFieldWells>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialMapAggregatedFieldWells {
    pub colors: Vec<DimensionField>,
    pub geospatial: Vec<DimensionField>,
    pub values: Vec<MeasureField>,
}

impl Transcode for GeospatialMapAggregatedFieldWells {
    const NAME: &'static str = "GeospatialMapAggregatedFieldWells";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            colors: record.blocks("colors"),
            geospatial: record.blocks("geospatial"),
            values: record.blocks("values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("colors", &self.colors);
        record.put_blocks("geospatial", &self.geospatial);
        record.put_blocks("values", &self.values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("colors", blocks::<DimensionField>().max_items(1))
            .field("geospatial", blocks::<DimensionField>().max_items(1))
            .field("values", blocks::<MeasureField>().max_items(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialPointStyleOptions {
    pub cluster_marker_configuration: Option<ClusterMarkerConfiguration>,
    pub selected_point_style: Option<GeospatialSelectedPointStyle>,
}

impl Transcode for GeospatialPointStyleOptions {
    const NAME: &'static str = "GeospatialPointStyleOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cluster_marker_configuration: record.block("cluster_marker_configuration"),
            selected_point_style: record.enumeration("selected_point_style"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "cluster_marker_configuration",
            self.cluster_marker_configuration.as_ref(),
        );
        record.put_enum("selected_point_style", self.selected_point_style.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "cluster_marker_configuration",
            block::<ClusterMarkerConfiguration>(),
        )
        .field(
            "selected_point_style",
            enumeration::<GeospatialSelectedPointStyle>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterMarkerConfiguration {
    pub cluster_marker: Option<ClusterMarker>,
}

impl Transcode for ClusterMarkerConfiguration {
    const NAME: &'static str = "ClusterMarkerConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            cluster_marker: record.block("cluster_marker"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("cluster_marker", self.cluster_marker.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("cluster_marker", block::<ClusterMarker>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterMarker {
    pub simple_cluster_marker: Option<SimpleClusterMarker>,
}

impl Transcode for ClusterMarker {
    const NAME: &'static str = "ClusterMarker";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            simple_cluster_marker: record.block("simple_cluster_marker"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("simple_cluster_marker", self.simple_cluster_marker.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("simple_cluster_marker", block::<SimpleClusterMarker>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SimpleClusterMarker {
    pub color: Option<String>,
}

impl Transcode for SimpleClusterMarker {
    const NAME: &'static str = "SimpleClusterMarker";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color())
    }
}

/// Base map tiles under a map visual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialMapStyleOptions {
    pub base_map_style: Option<BaseMapStyleType>,
}

impl Transcode for GeospatialMapStyleOptions {
    const NAME: &'static str = "GeospatialMapStyleOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            base_map_style: record.enumeration("base_map_style"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("base_map_style", self.base_map_style.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("base_map_style", enumeration::<BaseMapStyleType>())
    }
}

/// Initial viewport of a map visual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialWindowOptions {
    pub bounds: Option<GeospatialCoordinateBounds>,
    pub map_zoom_mode: Option<MapZoomMode>,
}

impl Transcode for GeospatialWindowOptions {
    const NAME: &'static str = "GeospatialWindowOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bounds: record.block("bounds"),
            map_zoom_mode: record.enumeration("map_zoom_mode"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("bounds", self.bounds.as_ref());
        record.put_enum("map_zoom_mode", self.map_zoom_mode.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("bounds", block::<GeospatialCoordinateBounds>())
            .field("map_zoom_mode", enumeration::<MapZoomMode>())
    }
}

/// All four edges are required; zero is a real coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeospatialCoordinateBounds {
    pub east: f64,
    pub north: f64,
    pub south: f64,
    pub west: f64,
}

impl Transcode for GeospatialCoordinateBounds {
    const NAME: &'static str = "GeospatialCoordinateBounds";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            east: record.float64("east").unwrap_or_default(),
            north: record.float64("north").unwrap_or_default(),
            south: record.float64("south").unwrap_or_default(),
            west: record.float64("west").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_required_float64("east", self.east);
        record.put_required_float64("north", self.north);
        record.put_required_float64("south", self.south);
        record.put_required_float64("west", self.west);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("east", float().float_range(-1800.0, 1800.0).required())
            .field("north", float().float_range(-90.0, 90.0).required())
            .field("south", float().float_range(-90.0, 90.0).required())
            .field("west", float().float_range(-1800.0, 1800.0).required())
    }
}
