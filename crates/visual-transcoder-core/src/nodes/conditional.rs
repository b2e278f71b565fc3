//! Conditional formatting colors and the text formats built from them.

use serde::{Deserialize, Serialize};

use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, blocks, color, float, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionalFormattingColor {
    #[serde(rename = "Gradient")]
    Gradient(ConditionalFormattingGradientColor),
    #[serde(rename = "Solid")]
    Solid(ConditionalFormattingSolidColor),
}

impl ConditionalFormattingColor {
    const ALTERNATIVES: &'static [&'static str] = &["gradient", "solid"];
}

impl Transcode for ConditionalFormattingColor {
    const NAME: &'static str = "ConditionalFormattingColor";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("gradient")
            .map(Self::Gradient)
            .or_else(|| record.block("solid").map(Self::Solid))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Gradient(c) => record.put_block("gradient", Some(c)),
            Self::Solid(c) => record.put_block("solid", Some(c)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("gradient", block::<ConditionalFormattingGradientColor>())
            .field("solid", block::<ConditionalFormattingSolidColor>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConditionalFormattingSolidColor {
    pub color: Option<String>,
    pub expression: Option<String>,
}

impl Transcode for ConditionalFormattingSolidColor {
    const NAME: &'static str = "ConditionalFormattingSolidColor";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            expression: record.string("expression"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_string("expression", self.expression.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color())
            .field("expression", string().length(1, 4096).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConditionalFormattingGradientColor {
    pub color: Option<GradientColor>,
    pub expression: Option<String>,
}

impl Transcode for ConditionalFormattingGradientColor {
    const NAME: &'static str = "ConditionalFormattingGradientColor";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.block("color"),
            expression: record.string("expression"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("color", self.color.as_ref());
        record.put_string("expression", self.expression.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", block::<GradientColor>().required())
            .field("expression", string().length(1, 4096).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GradientColor {
    pub stops: Vec<GradientStop>,
}

impl Transcode for GradientColor {
    const NAME: &'static str = "GradientColor";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            stops: record.blocks("stops"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("stops", &self.stops);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("stops", blocks::<GradientStop>().items(1, 100))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GradientStop {
    pub color: Option<String>,
    pub data_value: Option<f64>,
    /// Required; the typed form has no unset state.
    pub gradient_offset: f64,
}

impl Transcode for GradientStop {
    const NAME: &'static str = "GradientStop";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            data_value: record.float64("data_value"),
            gradient_offset: record.float64("gradient_offset").unwrap_or_default(),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_float64("data_value", self.data_value);
        record.put_required_float64("gradient_offset", self.gradient_offset);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color())
            .field("data_value", float())
            .field("gradient_offset", float().required())
    }
}

/// Background and text colors applied to a cell when its expression holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextConditionalFormat {
    pub background_color: Option<ConditionalFormattingColor>,
    pub text_color: Option<ConditionalFormattingColor>,
}

impl Transcode for TextConditionalFormat {
    const NAME: &'static str = "TextConditionalFormat";

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
