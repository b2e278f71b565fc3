use serde::{Deserialize, Serialize};

use super::describe_header;
use crate::container::Transcode;
use crate::nodes::actions::VisualCustomAction;
use crate::nodes::common::{VisualSubtitleLabelOptions, VisualTitleLabelOptions};
use crate::schema::{block, string, NodeSchema};
use crate::value::Record;

/// A narrative visual. It binds a data set directly instead of carrying
/// field wells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InsightVisual {
    pub visual_id: Option<String>,
    pub actions: Vec<VisualCustomAction>,
    pub data_set_identifier: Option<String>,
    pub insight_configuration: Option<InsightConfiguration>,
    pub subtitle: Option<VisualSubtitleLabelOptions>,
    pub title: Option<VisualTitleLabelOptions>,
}

impl Transcode for InsightVisual {
    const NAME: &'static str = "InsightVisual";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            visual_id: record.string("visual_id"),
            actions: record.blocks("actions"),
            data_set_identifier: record.string("data_set_identifier"),
            insight_configuration: record.block("insight_configuration"),
            subtitle: record.block("subtitle"),
            title: record.block("title"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("visual_id", self.visual_id.as_deref());
        record.put_blocks("actions", &self.actions);
        record.put_string("data_set_identifier", self.data_set_identifier.as_deref());
        record.put_block("insight_configuration", self.insight_configuration.as_ref());
        record.put_block("subtitle", self.subtitle.as_ref());
        record.put_block("title", self.title.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        describe_header(node)
            .field("data_set_identifier", string().length(1, 2048).required())
            .field("insight_configuration", block::<InsightConfiguration>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InsightConfiguration {
    pub custom_narrative: Option<CustomNarrativeOptions>,
}

impl Transcode for InsightConfiguration {
    const NAME: &'static str = "InsightConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_narrative: record.block("custom_narrative"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("custom_narrative", self.custom_narrative.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_narrative", block::<CustomNarrativeOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomNarrativeOptions {
    pub narrative: Option<String>,
}

impl Transcode for CustomNarrativeOptions {
    const NAME: &'static str = "CustomNarrativeOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            narrative: record.string("narrative"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("narrative", self.narrative.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("narrative", string().length(1, 150_000).required())
    }
}
