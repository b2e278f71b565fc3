//! Visuals without field wells: embedded custom content and the empty
//! placeholder.

use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::nodes::enums::{CustomContentImageScalingConfiguration, CustomContentType};
use crate::nodes::CUSTOM_ACTIONS_MAX_ITEMS;
use crate::schema::{block, blocks, enumeration, identifier, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomContentVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub chart_configuration: Option<CustomContentConfiguration>,
    pub data_set_identifier: Option<String>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for CustomContentVisual {
    const NAME: &'static str = "CustomContentVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            chart_configuration: record.block("chart_configuration"),
            data_set_identifier: record.string("data_set_identifier"),
            subtitle: record.block("subtitle"),
            title: record.block("title"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("visual_id", self.visual_id.as_deref());
        record.put_blocks("actions", &self.actions);
        record.put_block("chart_configuration", self.chart_configuration.as_ref());
        record.put_string("data_set_identifier", self.data_set_identifier.as_deref());
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_header(node)
            .field("chart_configuration", block::<CustomContentConfiguration>())
            .field("data_set_identifier", string().length(1, 2048).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomContentConfiguration {
    pub content_type: Option<CustomContentType>,
    pub content_url: Option<String>,
    pub image_scaling: Option<CustomContentImageScalingConfiguration>,
}

impl Transcode for CustomContentConfiguration {
    const NAME: &'static str = "CustomContentConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            content_type: record.enumeration("content_type"),
            content_url: record.string("content_url"),
            image_scaling: record.enumeration("image_scaling"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("content_type", self.content_type.as_ref());
        record.put_string("content_url", self.content_url.as_deref());
        record.put_enum("image_scaling", self.image_scaling.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("content_type", enumeration::<CustomContentType>())
            .field("content_url", string().length(1, 2048))
            .field(
                "image_scaling",
                enumeration::<CustomContentImageScalingConfiguration>(),
            )
    }
}

/// A placeholder visual bound to a data set but showing nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmptyVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub data_set_identifier: Option<String>,
}

impl Transcode for EmptyVisual {
    const NAME: &'static str = "EmptyVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            data_set_identifier: record.string("data_set_identifier"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("visual_id", self.visual_id.as_deref());
        record.put_blocks("actions", &self.actions);
        record.put_string("data_set_identifier", self.data_set_identifier.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("visual_id", identifier().required())
            .field(
                "actions",
                blocks::<VisualCustomAction>().max_items(CUSTOM_ACTIONS_MAX_ITEMS),
            )
            .field("data_set_identifier", string().length(1, 2048).required())
    }
}
