//! Cell styling shared by the table and pivot-table visuals.

use serde::{Deserialize, Serialize};

use super::common::FontConfiguration;
use super::enums::{
    HorizontalTextAlignment, TableBorderStyle, TextWrap, VerticalTextAlignment, Visibility,
    WidgetStatus,
};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, color, enumeration, int, string_list, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableCellStyle {
    pub background_color: Option<String>,
    pub border: Option<GlobalTableBorderOptions>,
    pub font_configuration: Option<FontConfiguration>,
    pub height: Option<i64>,
    pub horizontal_text_alignment: Option<HorizontalTextAlignment>,
    pub text_wrap: Option<TextWrap>,
    pub vertical_text_alignment: Option<VerticalTextAlignment>,
    pub visibility: Option<Visibility>,
}

impl Transcode for TableCellStyle {
    const NAME: &'static str = "TableCellStyle";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            background_color: record.string("background_color"),
            border: record.block("border"),
            font_configuration: record.block("font_configuration"),
            height: record.int64("height"),
            horizontal_text_alignment: record.enumeration("horizontal_text_alignment"),
            text_wrap: record.enumeration("text_wrap"),
            vertical_text_alignment: record.enumeration("vertical_text_alignment"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("background_color", self.background_color.as_deref());
        record.put_block("border", self.border.as_ref());
        record.put_block("font_configuration", self.font_configuration.as_ref());
        record.put_int64("height", self.height);
        record.put_enum(
            "horizontal_text_alignment",
            self.horizontal_text_alignment.as_ref(),
        );
        record.put_enum("text_wrap", self.text_wrap.as_ref());
        record.put_enum(
            "vertical_text_alignment",
            self.vertical_text_alignment.as_ref(),
        );
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("background_color", color())
            .field("border", block::<GlobalTableBorderOptions>())
            .field("font_configuration", block::<FontConfiguration>())
            .field("height", int().range(8, 500))
            .field(
                "horizontal_text_alignment",
                enumeration::<HorizontalTextAlignment>(),
            )
            .field("text_wrap", enumeration::<TextWrap>())
            .field(
                "vertical_text_alignment",
                enumeration::<VerticalTextAlignment>(),
            )
            .field("visibility", enumeration::<Visibility>())
    }
}

/// Either one border for every side, or a border per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GlobalTableBorderOptions {
    #[serde(rename = "SideSpecificBorder")]
    SideSpecific(TableSideBorderOptions),
    #[serde(rename = "UniformBorder")]
    Uniform(TableBorderOptions),
}

impl GlobalTableBorderOptions {
    const ALTERNATIVES: &'static [&'static str] = &["side_specific_border", "uniform_border"];
}

impl Transcode for GlobalTableBorderOptions {
    const NAME: &'static str = "GlobalTableBorderOptions";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("side_specific_border")
            .map(Self::SideSpecific)
            .or_else(|| record.block("uniform_border").map(Self::Uniform))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::SideSpecific(b) => record.put_block("side_specific_border", Some(b)),
            Self::Uniform(b) => record.put_block("uniform_border", Some(b)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("side_specific_border", block::<TableSideBorderOptions>())
            .field("uniform_border", block::<TableBorderOptions>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableSideBorderOptions {
    pub bottom: Option<TableBorderOptions>,
    pub inner_horizontal: Option<TableBorderOptions>,
    pub inner_vertical: Option<TableBorderOptions>,
    pub left: Option<TableBorderOptions>,
    pub right: Option<TableBorderOptions>,
    pub top: Option<TableBorderOptions>,
}

impl TableSideBorderOptions {
    const SIDES: [&'static str; 6] = [
        "bottom",
        "inner_horizontal",
        "inner_vertical",
        "left",
        "right",
        "top",
    ];

    fn sides(&self) -> [Option<&TableBorderOptions>; 6] {
        [
            self.bottom.as_ref(),
            self.inner_horizontal.as_ref(),
            self.inner_vertical.as_ref(),
            self.left.as_ref(),
            self.right.as_ref(),
            self.top.as_ref(),
        ]
    }
}

impl Transcode for TableSideBorderOptions {
    const NAME: &'static str = "TableSideBorderOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            bottom: record.block("bottom"),
            inner_horizontal: record.block("inner_horizontal"),
            inner_vertical: record.block("inner_vertical"),
            left: record.block("left"),
            right: record.block("right"),
            top: record.block("top"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        for (key, side) in Self::SIDES.into_iter().zip(self.sides()) {
            record.put_block(key, side);
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        Self::SIDES.into_iter().fold(node, |node, key| {
            node.field(key, block::<TableBorderOptions>())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TableBorderOptions {
    pub color: Option<String>,
    pub style: Option<TableBorderStyle>,
    pub thickness: Option<i64>,
}

impl Transcode for TableBorderOptions {
    const NAME: &'static str = "TableBorderOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            color: record.string("color"),
            style: record.enumeration("style"),
            thickness: record.int64("thickness"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("color", self.color.as_deref());
        record.put_enum("style", self.style.as_ref());
        record.put_int64("thickness", self.thickness);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("color", color())
            .field("style", enumeration::<TableBorderStyle>())
            .field("thickness", int().range(1, 4))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RowAlternateColorOptions {
    pub row_alternate_colors: Vec<String>,
    pub status: Option<WidgetStatus>,
}

impl Transcode for RowAlternateColorOptions {
    const NAME: &'static str = "RowAlternateColorOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            row_alternate_colors: record.strings("row_alternate_colors"),
            status: record.enumeration("status"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string_list("row_alternate_colors", &self.row_alternate_colors);
        record.put_enum("status", self.status.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "row_alternate_colors",
            string_list().items(1, 1).pattern(crate::schema::COLOR_PATTERN),
        )
        .field("status", enumeration::<WidgetStatus>())
    }
}
