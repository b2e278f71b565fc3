//! Number, currency, percentage and date-time display formats.

use serde::{Deserialize, Serialize};

use super::enums::{ComparisonMethod, NegativeValueDisplayMode, NumberScale, NumericSeparatorSymbol, Visibility};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{block, enumeration, int, string, NodeSchema};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DecimalPlacesConfiguration {
    pub decimal_places: Option<i64>,
}

impl Transcode for DecimalPlacesConfiguration {
    const NAME: &'static str = "DecimalPlacesConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            decimal_places: record.int64("decimal_places"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_int64("decimal_places", self.decimal_places);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("decimal_places", int().range(0, 20).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NegativeValueConfiguration {
    pub display_mode: Option<NegativeValueDisplayMode>,
}

impl Transcode for NegativeValueConfiguration {
    const NAME: &'static str = "NegativeValueConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            display_mode: record.enumeration("display_mode"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("display_mode", self.display_mode.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "display_mode",
            enumeration::<NegativeValueDisplayMode>().required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NullValueFormatConfiguration {
    pub null_string: Option<String>,
}

impl Transcode for NullValueFormatConfiguration {
    const NAME: &'static str = "NullValueFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            null_string: record.string("null_string"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("null_string", self.null_string.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("null_string", string().length(1, 128).required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumericSeparatorConfiguration {
    pub decimal_separator: Option<NumericSeparatorSymbol>,
    pub thousands_separator: Option<ThousandSeparatorOptions>,
}

impl Transcode for NumericSeparatorConfiguration {
    const NAME: &'static str = "NumericSeparatorConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            decimal_separator: record.enumeration("decimal_separator"),
            thousands_separator: record.block("thousands_separator"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("decimal_separator", self.decimal_separator.as_ref());
        record.put_block("thousands_separator", self.thousands_separator.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("decimal_separator", enumeration::<NumericSeparatorSymbol>())
            .field("thousands_separator", block::<ThousandSeparatorOptions>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThousandSeparatorOptions {
    pub symbol: Option<NumericSeparatorSymbol>,
    pub visibility: Option<Visibility>,
}

impl Transcode for ThousandSeparatorOptions {
    const NAME: &'static str = "ThousandSeparatorOptions";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            symbol: record.enumeration("symbol"),
            visibility: record.enumeration("visibility"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("symbol", self.symbol.as_ref());
        record.put_enum("visibility", self.visibility.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("symbol", enumeration::<NumericSeparatorSymbol>())
            .field("visibility", enumeration::<Visibility>())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumberDisplayFormatConfiguration {
    pub decimal_places_configuration: Option<DecimalPlacesConfiguration>,
    pub negative_value_configuration: Option<NegativeValueConfiguration>,
    pub null_value_format_configuration: Option<NullValueFormatConfiguration>,
    pub number_scale: Option<NumberScale>,
    pub prefix: Option<String>,
    pub separator_configuration: Option<NumericSeparatorConfiguration>,
    pub suffix: Option<String>,
}

impl Transcode for NumberDisplayFormatConfiguration {
    const NAME: &'static str = "NumberDisplayFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            decimal_places_configuration: record.block("decimal_places_configuration"),
            negative_value_configuration: record.block("negative_value_configuration"),
            null_value_format_configuration: record.block("null_value_format_configuration"),
            number_scale: record.enumeration("number_scale"),
            prefix: record.string("prefix"),
            separator_configuration: record.block("separator_configuration"),
            suffix: record.string("suffix"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "decimal_places_configuration",
            self.decimal_places_configuration.as_ref(),
        );
        record.put_block(
            "negative_value_configuration",
            self.negative_value_configuration.as_ref(),
        );
        record.put_block(
            "null_value_format_configuration",
            self.null_value_format_configuration.as_ref(),
        );
        record.put_enum("number_scale", self.number_scale.as_ref());
        record.put_string("prefix", self.prefix.as_deref());
        record.put_block("separator_configuration", self.separator_configuration.as_ref());
        record.put_string("suffix", self.suffix.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "decimal_places_configuration",
            block::<DecimalPlacesConfiguration>(),
        )
        .field(
            "negative_value_configuration",
            block::<NegativeValueConfiguration>(),
        )
        .field(
            "null_value_format_configuration",
            block::<NullValueFormatConfiguration>(),
        )
        .field("number_scale", enumeration::<NumberScale>())
        .field("prefix", string().length(1, 128))
        .field(
            "separator_configuration",
            block::<NumericSeparatorConfiguration>(),
        )
        .field("suffix", string().length(1, 128))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CurrencyDisplayFormatConfiguration {
    pub decimal_places_configuration: Option<DecimalPlacesConfiguration>,
    pub negative_value_configuration: Option<NegativeValueConfiguration>,
    pub null_value_format_configuration: Option<NullValueFormatConfiguration>,
    pub number_scale: Option<NumberScale>,
    pub prefix: Option<String>,
    pub separator_configuration: Option<NumericSeparatorConfiguration>,
    pub suffix: Option<String>,
    pub symbol: Option<String>,
}

impl Transcode for CurrencyDisplayFormatConfiguration {
    const NAME: &'static str = "CurrencyDisplayFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            decimal_places_configuration: record.block("decimal_places_configuration"),
            negative_value_configuration: record.block("negative_value_configuration"),
            null_value_format_configuration: record.block("null_value_format_configuration"),
            number_scale: record.enumeration("number_scale"),
            prefix: record.string("prefix"),
            separator_configuration: record.block("separator_configuration"),
            suffix: record.string("suffix"),
            symbol: record.string("symbol"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "decimal_places_configuration",
            self.decimal_places_configuration.as_ref(),
        );
        record.put_block(
            "negative_value_configuration",
            self.negative_value_configuration.as_ref(),
        );
        record.put_block(
            "null_value_format_configuration",
            self.null_value_format_configuration.as_ref(),
        );
        record.put_enum("number_scale", self.number_scale.as_ref());
        record.put_string("prefix", self.prefix.as_deref());
        record.put_block("separator_configuration", self.separator_configuration.as_ref());
        record.put_string("suffix", self.suffix.as_deref());
        record.put_string("symbol", self.symbol.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "decimal_places_configuration",
            block::<DecimalPlacesConfiguration>(),
        )
        .field(
            "negative_value_configuration",
            block::<NegativeValueConfiguration>(),
        )
        .field(
            "null_value_format_configuration",
            block::<NullValueFormatConfiguration>(),
        )
        .field("number_scale", enumeration::<NumberScale>())
        .field("prefix", string().length(1, 128))
        .field(
            "separator_configuration",
            block::<NumericSeparatorConfiguration>(),
        )
        .field("suffix", string().length(1, 128))
        .field("symbol", string().pattern("^[A-Z]{3}$"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PercentageDisplayFormatConfiguration {
    pub decimal_places_configuration: Option<DecimalPlacesConfiguration>,
    pub negative_value_configuration: Option<NegativeValueConfiguration>,
    pub null_value_format_configuration: Option<NullValueFormatConfiguration>,
    pub prefix: Option<String>,
    pub separator_configuration: Option<NumericSeparatorConfiguration>,
    pub suffix: Option<String>,
}

impl Transcode for PercentageDisplayFormatConfiguration {
    const NAME: &'static str = "PercentageDisplayFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            decimal_places_configuration: record.block("decimal_places_configuration"),
            negative_value_configuration: record.block("negative_value_configuration"),
            null_value_format_configuration: record.block("null_value_format_configuration"),
            prefix: record.string("prefix"),
            separator_configuration: record.block("separator_configuration"),
            suffix: record.string("suffix"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "decimal_places_configuration",
            self.decimal_places_configuration.as_ref(),
        );
        record.put_block(
            "negative_value_configuration",
            self.negative_value_configuration.as_ref(),
        );
        record.put_block(
            "null_value_format_configuration",
            self.null_value_format_configuration.as_ref(),
        );
        record.put_string("prefix", self.prefix.as_deref());
        record.put_block("separator_configuration", self.separator_configuration.as_ref());
        record.put_string("suffix", self.suffix.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "decimal_places_configuration",
            block::<DecimalPlacesConfiguration>(),
        )
        .field(
            "negative_value_configuration",
            block::<NegativeValueConfiguration>(),
        )
        .field(
            "null_value_format_configuration",
            block::<NullValueFormatConfiguration>(),
        )
        .field("prefix", string().length(1, 128))
        .field(
            "separator_configuration",
            block::<NumericSeparatorConfiguration>(),
        )
        .field("suffix", string().length(1, 128))
    }
}

/// Display format for a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NumericFormatConfiguration {
    #[serde(rename = "CurrencyDisplayFormatConfiguration")]
    Currency(CurrencyDisplayFormatConfiguration),
    #[serde(rename = "NumberDisplayFormatConfiguration")]
    Number(NumberDisplayFormatConfiguration),
    #[serde(rename = "PercentageDisplayFormatConfiguration")]
    Percentage(PercentageDisplayFormatConfiguration),
}

impl NumericFormatConfiguration {
    const ALTERNATIVES: &'static [&'static str] = &[
        "currency_display_format_configuration",
        "number_display_format_configuration",
        "percentage_display_format_configuration",
    ];
}

impl Transcode for NumericFormatConfiguration {
    const NAME: &'static str = "NumericFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("currency_display_format_configuration")
            .map(Self::Currency)
            .or_else(|| {
                record
                    .block("number_display_format_configuration")
                    .map(Self::Number)
            })
            .or_else(|| {
                record
                    .block("percentage_display_format_configuration")
                    .map(Self::Percentage)
            })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Currency(c) => record.put_block("currency_display_format_configuration", Some(c)),
            Self::Number(n) => record.put_block("number_display_format_configuration", Some(n)),
            Self::Percentage(p) => {
                record.put_block("percentage_display_format_configuration", Some(p))
            }
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "currency_display_format_configuration",
            block::<CurrencyDisplayFormatConfiguration>(),
        )
        .field(
            "number_display_format_configuration",
            block::<NumberDisplayFormatConfiguration>(),
        )
        .field(
            "percentage_display_format_configuration",
            block::<PercentageDisplayFormatConfiguration>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateTimeFormatConfiguration {
    pub date_time_format: Option<String>,
    pub null_value_format_configuration: Option<NullValueFormatConfiguration>,
    pub numeric_format_configuration: Option<NumericFormatConfiguration>,
}

impl Transcode for DateTimeFormatConfiguration {
    const NAME: &'static str = "DateTimeFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            date_time_format: record.string("date_time_format"),
            null_value_format_configuration: record.block("null_value_format_configuration"),
            numeric_format_configuration: record.block("numeric_format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("date_time_format", self.date_time_format.as_deref());
        record.put_block(
            "null_value_format_configuration",
            self.null_value_format_configuration.as_ref(),
        );
        record.put_block(
            "numeric_format_configuration",
            self.numeric_format_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("date_time_format", string().length(1, 128))
            .field(
                "null_value_format_configuration",
                block::<NullValueFormatConfiguration>(),
            )
            .field(
                "numeric_format_configuration",
                block::<NumericFormatConfiguration>(),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumberFormatConfiguration {
    pub format_configuration: Option<NumericFormatConfiguration>,
}

impl Transcode for NumberFormatConfiguration {
    const NAME: &'static str = "NumberFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            format_configuration: record.block("format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("format_configuration", self.format_configuration.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "format_configuration",
            block::<NumericFormatConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StringFormatConfiguration {
    pub null_value_format_configuration: Option<NullValueFormatConfiguration>,
    pub numeric_format_configuration: Option<NumericFormatConfiguration>,
}

impl Transcode for StringFormatConfiguration {
    const NAME: &'static str = "StringFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            null_value_format_configuration: record.block("null_value_format_configuration"),
            numeric_format_configuration: record.block("numeric_format_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "null_value_format_configuration",
            self.null_value_format_configuration.as_ref(),
        );
        record.put_block(
            "numeric_format_configuration",
            self.numeric_format_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "null_value_format_configuration",
            block::<NullValueFormatConfiguration>(),
        )
        .field(
            "numeric_format_configuration",
            block::<NumericFormatConfiguration>(),
        )
    }
}

/// Format of a field value, chosen by the column's data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatConfiguration {
    #[serde(rename = "DateTimeFormatConfiguration")]
    DateTime(DateTimeFormatConfiguration),
    #[serde(rename = "NumberFormatConfiguration")]
    Number(NumberFormatConfiguration),
    #[serde(rename = "StringFormatConfiguration")]
    String(StringFormatConfiguration),
}

impl FormatConfiguration {
    const ALTERNATIVES: &'static [&'static str] = &[
        "date_time_format_configuration",
        "number_format_configuration",
        "string_format_configuration",
    ];
}

impl Transcode for FormatConfiguration {
    const NAME: &'static str = "FormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("date_time_format_configuration")
            .map(Self::DateTime)
            .or_else(|| record.block("number_format_configuration").map(Self::Number))
            .or_else(|| record.block("string_format_configuration").map(Self::String))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::DateTime(d) => record.put_block("date_time_format_configuration", Some(d)),
            Self::Number(n) => record.put_block("number_format_configuration", Some(n)),
            Self::String(s) => record.put_block("string_format_configuration", Some(s)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "date_time_format_configuration",
            block::<DateTimeFormatConfiguration>(),
        )
        .field(
            "number_format_configuration",
            block::<NumberFormatConfiguration>(),
        )
        .field(
            "string_format_configuration",
            block::<StringFormatConfiguration>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ComparisonConfiguration {
    pub comparison_format: Option<ComparisonFormatConfiguration>,
    pub comparison_method: Option<ComparisonMethod>,
}

impl Transcode for ComparisonConfiguration {
    const NAME: &'static str = "ComparisonConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            comparison_format: record.block("comparison_format"),
            comparison_method: record.enumeration("comparison_method"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("comparison_format", self.comparison_format.as_ref());
        record.put_enum("comparison_method", self.comparison_method.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "comparison_format",
            block::<ComparisonFormatConfiguration>(),
        )
        .field("comparison_method", enumeration::<ComparisonMethod>())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonFormatConfiguration {
    #[serde(rename = "NumberDisplayFormatConfiguration")]
    Number(NumberDisplayFormatConfiguration),
    #[serde(rename = "PercentageDisplayFormatConfiguration")]
    Percentage(PercentageDisplayFormatConfiguration),
}

impl ComparisonFormatConfiguration {
    const ALTERNATIVES: &'static [&'static str] = &[
        "number_display_format_configuration",
        "percentage_display_format_configuration",
    ];
}

impl Transcode for ComparisonFormatConfiguration {
    const NAME: &'static str = "ComparisonFormatConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("number_display_format_configuration")
            .map(Self::Number)
            .or_else(|| {
                record
                    .block("percentage_display_format_configuration")
                    .map(Self::Percentage)
            })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Number(n) => record.put_block("number_display_format_configuration", Some(n)),
            Self::Percentage(p) => {
                record.put_block("percentage_display_format_configuration", Some(p))
            }
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "number_display_format_configuration",
            block::<NumberDisplayFormatConfiguration>(),
        )
        .field(
            "percentage_display_format_configuration",
            block::<PercentageDisplayFormatConfiguration>(),
        )
        .one_of(Self::ALTERNATIVES)
    }
}
