//! String-backed enumerations of the visual object model.
//!
//! Every enum keeps unrecognised spellings in an `Unknown` variant so that a
//! value newer than this crate survives a round trip unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coercion::StringEnum;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A spelling outside the known set, carried verbatim.
            Unknown(String),
        }

        impl StringEnum for $name {
            const VALUES: &'static [&'static str] = &[$($wire),+];

            fn from_wire(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }

            fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(other) => other,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&value))
            }
        }
    };
}

string_enum!(Visibility { Hidden => "HIDDEN", Visible => "VISIBLE" });

string_enum!(WidgetStatus { Enabled => "ENABLED", Disabled => "DISABLED" });

string_enum!(SortDirection { Asc => "ASC", Desc => "DESC" });

string_enum!(OtherCategories { Include => "INCLUDE", Exclude => "EXCLUDE" });

string_enum!(AxisBinding {
    PrimaryYAxis => "PRIMARY_YAXIS",
    SecondaryYAxis => "SECONDARY_YAXIS",
});

string_enum!(TimeGranularity {
    Year => "YEAR",
    Quarter => "QUARTER",
    Month => "MONTH",
    Week => "WEEK",
    Day => "DAY",
    Hour => "HOUR",
    Minute => "MINUTE",
    Second => "SECOND",
    Millisecond => "MILLISECOND",
});

// Aggregation.

string_enum!(CategoricalAggregationFunction {
    Count => "COUNT",
    DistinctCount => "DISTINCT_COUNT",
});

string_enum!(DateAggregationFunction {
    Count => "COUNT",
    DistinctCount => "DISTINCT_COUNT",
    Min => "MIN",
    Max => "MAX",
});

string_enum!(SimpleNumericalAggregationFunction {
    Sum => "SUM",
    Average => "AVERAGE",
    Min => "MIN",
    Max => "MAX",
    Count => "COUNT",
    DistinctCount => "DISTINCT_COUNT",
    Var => "VAR",
    Varp => "VARP",
    Stdev => "STDEV",
    Stdevp => "STDEVP",
    Median => "MEDIAN",
});

// Fonts and text.

string_enum!(FontDecoration { Underline => "UNDERLINE", None => "NONE" });

string_enum!(FontStyle { Normal => "NORMAL", Italic => "ITALIC" });

string_enum!(FontWeightName { Normal => "NORMAL", Bold => "BOLD" });

string_enum!(RelativeFontSize {
    ExtraSmall => "EXTRA_SMALL",
    Small => "SMALL",
    Medium => "MEDIUM",
    Large => "LARGE",
    ExtraLarge => "EXTRA_LARGE",
});

string_enum!(HorizontalTextAlignment {
    Left => "LEFT",
    Center => "CENTER",
    Right => "RIGHT",
    Auto => "AUTO",
});

string_enum!(VerticalTextAlignment {
    Top => "TOP",
    Middle => "MIDDLE",
    Bottom => "BOTTOM",
    Auto => "AUTO",
});

string_enum!(TextWrap { None => "NONE", Wrap => "WRAP" });

// Number formatting.

string_enum!(NegativeValueDisplayMode { Positive => "POSITIVE", Negative => "NEGATIVE" });

string_enum!(NumberScale {
    None => "NONE",
    Auto => "AUTO",
    Thousands => "THOUSANDS",
    Millions => "MILLIONS",
    Billions => "BILLIONS",
    Trillions => "TRILLIONS",
});

string_enum!(NumericSeparatorSymbol { Comma => "COMMA", Dot => "DOT", Space => "SPACE" });

string_enum!(ComparisonMethod {
    Difference => "DIFFERENCE",
    PercentDifference => "PERCENT_DIFFERENCE",
    Percent => "PERCENT",
});

// Labels, legends and tooltips.

string_enum!(DataLabelPosition {
    Inside => "INSIDE",
    Outside => "OUTSIDE",
    Left => "LEFT",
    Top => "TOP",
    Bottom => "BOTTOM",
    Right => "RIGHT",
});

string_enum!(DataLabelContent {
    Value => "VALUE",
    Percent => "PERCENT",
    ValueAndPercent => "VALUE_AND_PERCENT",
});

string_enum!(DataLabelOverlap {
    DisableOverlap => "DISABLE_OVERLAP",
    EnableOverlap => "ENABLE_OVERLAP",
});

string_enum!(LegendPosition {
    Auto => "AUTO",
    Right => "RIGHT",
    Bottom => "BOTTOM",
    Top => "TOP",
});

string_enum!(SelectedTooltipType { Basic => "BASIC", Detailed => "DETAILED" });

string_enum!(TooltipTitleType { None => "NONE", PrimaryValue => "PRIMARY_VALUE" });

string_enum!(ColorFillType { Discrete => "DISCRETE", Gradient => "GRADIENT" });

// Reference lines and panels.

string_enum!(ReferenceLinePatternType { Solid => "SOLID", Dashed => "DASHED", Dotted => "DOTTED" });

string_enum!(ReferenceLineLabelHorizontalPosition {
    Left => "LEFT",
    Center => "CENTER",
    Right => "RIGHT",
});

string_enum!(ReferenceLineLabelVerticalPosition { Above => "ABOVE", Below => "BELOW" });

string_enum!(ReferenceLineValueLabelRelativePosition {
    BeforeCustomLabel => "BEFORE_CUSTOM_LABEL",
    AfterCustomLabel => "AFTER_CUSTOM_LABEL",
});

string_enum!(PanelBorderStyle { Solid => "SOLID", Dashed => "DASHED", Dotted => "DOTTED" });

// Custom actions.

string_enum!(VisualCustomActionTrigger {
    DataPointClick => "DATA_POINT_CLICK",
    DataPointMenu => "DATA_POINT_MENU",
});

string_enum!(TargetVisualOptions { AllVisuals => "ALL_VISUALS" });

string_enum!(SelectAllValueOptions { AllValues => "ALL_VALUES" });

string_enum!(SelectedFieldOptions { AllFields => "ALL_FIELDS" });

string_enum!(UrlTargetConfiguration {
    NewTab => "NEW_TAB",
    NewWindow => "NEW_WINDOW",
    SameTab => "SAME_TAB",
});

// Line and combo charts.

string_enum!(LineInterpolation { Linear => "LINEAR", Smooth => "SMOOTH", Stepped => "STEPPED" });

string_enum!(LineChartLineStyle { Solid => "SOLID", Dotted => "DOTTED", Dashed => "DASHED" });

string_enum!(LineChartMarkerShape {
    Circle => "CIRCLE",
    Triangle => "TRIANGLE",
    Square => "SQUARE",
    Diamond => "DIAMOND",
    RoundedSquare => "ROUNDED_SQUARE",
});

string_enum!(LineChartType { Line => "LINE", Area => "AREA", StackedArea => "STACKED_AREA" });

string_enum!(MissingDataTreatmentOption {
    Interpolate => "INTERPOLATE",
    ShowAsZero => "SHOW_AS_ZERO",
    ShowAsBlank => "SHOW_AS_BLANK",
});

string_enum!(BarsArrangement {
    Clustered => "CLUSTERED",
    Stacked => "STACKED",
    StackedPercent => "STACKED_PERCENT",
});

string_enum!(BarChartOrientation { Horizontal => "HORIZONTAL", Vertical => "VERTICAL" });

// Tables.

string_enum!(TableBorderStyle { None => "NONE", Solid => "SOLID" });

string_enum!(TableOrientation { Vertical => "VERTICAL", Horizontal => "HORIZONTAL" });

string_enum!(TableTotalsPlacement { Start => "START", End => "END", Auto => "AUTO" });

string_enum!(TableTotalsScrollStatus { Pinned => "PINNED", Scrolled => "SCROLLED" });

string_enum!(TableCellImageScalingConfiguration {
    FitToCellHeight => "FIT_TO_CELL_HEIGHT",
    FitToCellWidth => "FIT_TO_CELL_WIDTH",
    DoNotScale => "DO_NOT_SCALE",
});

string_enum!(TableFieldIconSetType { Link => "LINK" });

string_enum!(PivotTableMetricPlacement { Row => "ROW", Column => "COLUMN" });

string_enum!(PivotTableSubtotalLevel { All => "ALL", Custom => "CUSTOM", Last => "LAST" });

string_enum!(PivotTableConditionalFormattingScopeRole {
    Field => "FIELD",
    FieldTotal => "FIELD_TOTAL",
    GrandTotal => "GRAND_TOTAL",
});

// Remaining visual kinds.

string_enum!(HistogramBinType { BinCount => "BIN_COUNT", BinWidth => "BIN_WIDTH" });

string_enum!(PrimaryValueDisplayType {
    Hidden => "HIDDEN",
    Comparison => "COMPARISON",
    Actual => "ACTUAL",
});

string_enum!(ArcThickness {
    Small => "SMALL",
    Medium => "MEDIUM",
    Large => "LARGE",
    Whole => "WHOLE",
});

string_enum!(ArcThicknessOptions { Small => "SMALL", Medium => "MEDIUM", Large => "LARGE" });

string_enum!(FunnelChartMeasureDataLabelStyle {
    ValueOnly => "VALUE_ONLY",
    PercentageByFirstStage => "PERCENTAGE_BY_FIRST_STAGE",
    PercentageByPreviousStage => "PERCENTAGE_BY_PREVIOUS_STAGE",
    ValueAndPercentageByFirstStage => "VALUE_AND_PERCENTAGE_BY_FIRST_STAGE",
    ValueAndPercentageByPreviousStage => "VALUE_AND_PERCENTAGE_BY_PREVIOUS_STAGE",
});

string_enum!(WordCloudCloudLayout { Fluid => "FLUID", Normal => "NORMAL" });

string_enum!(WordCloudWordCasing { LowerCase => "LOWER_CASE", ExistingCase => "EXISTING_CASE" });

string_enum!(WordCloudWordOrientation {
    Horizontal => "HORIZONTAL",
    HorizontalAndVertical => "HORIZONTAL_AND_VERTICAL",
});

string_enum!(WordCloudWordPadding {
    None => "NONE",
    Small => "SMALL",
    Medium => "MEDIUM",
    Large => "LARGE",
});

string_enum!(WordCloudWordScaling { Emphasize => "EMPHASIZE", Normal => "NORMAL" });

string_enum!(CustomContentType {
    Image => "IMAGE",
    OtherEmbeddedContent => "OTHER_EMBEDDED_CONTENT",
});

string_enum!(CustomContentImageScalingConfiguration {
    FitToHeight => "FIT_TO_HEIGHT",
    FitToWidth => "FIT_TO_WIDTH",
    DoNotScale => "DO_NOT_SCALE",
    ScaleToVisual => "SCALE_TO_VISUAL",
});

string_enum!(BoxPlotFillStyle { Solid => "SOLID", Transparent => "TRANSPARENT" });

string_enum!(BaseMapStyleType {
    LightGray => "LIGHT_GRAY",
    DarkGray => "DARK_GRAY",
    Street => "STREET",
    Imagery => "IMAGERY",
});

string_enum!(MapZoomMode { Auto => "AUTO", Manual => "MANUAL" });

string_enum!(GeospatialSelectedPointStyle {
    Point => "POINT",
    Cluster => "CLUSTER",
    Heatmap => "HEATMAP",
});

string_enum!(RadarChartShape { Circle => "CIRCLE", Polygon => "POLYGON" });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_spelling_maps_to_variant() {
        assert_eq!(Visibility::from_wire("HIDDEN"), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.as_str(), "HIDDEN");
    }

    #[test]
    fn unknown_spelling_is_kept_verbatim() {
        let value = SortDirection::from_wire("SIDEWAYS");
        assert_eq!(value, SortDirection::Unknown("SIDEWAYS".to_string()));
        assert_eq!(value.as_str(), "SIDEWAYS");
        assert_eq!(value.to_string(), "SIDEWAYS");
    }

    #[test]
    fn serde_uses_the_wire_spelling() {
        let json = serde_json::to_string(&AxisBinding::SecondaryYAxis).unwrap();
        assert_eq!(json, "\"SECONDARY_YAXIS\"");
        let back: AxisBinding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AxisBinding::SecondaryYAxis);
    }

    #[test]
    fn values_lists_every_known_spelling() {
        assert_eq!(
            TimeGranularity::VALUES.first().copied(),
            Some("YEAR")
        );
        assert_eq!(TimeGranularity::VALUES.len(), 9);
    }
}
