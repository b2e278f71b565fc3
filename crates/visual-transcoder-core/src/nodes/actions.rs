//! Custom actions triggered from a visual's data points.

use serde::{Deserialize, Serialize};

use super::enums::{
    SelectAllValueOptions, SelectedFieldOptions, TargetVisualOptions, UrlTargetConfiguration,
    VisualCustomActionTrigger, WidgetStatus,
};
use crate::container::Transcode;
use crate::oneof;
use crate::schema::{
    block, blocks, boolean, enumeration, identifier, string, string_list, string_set, NodeSchema,
};
use crate::value::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VisualCustomAction {
    pub action_operations: Vec<VisualCustomActionOperation>,
    pub custom_action_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<WidgetStatus>,
    pub trigger: Option<VisualCustomActionTrigger>,
}

impl Transcode for VisualCustomAction {
    const NAME: &'static str = "VisualCustomAction";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            action_operations: record.blocks("action_operations"),
            custom_action_id: record.string("custom_action_id"),
            name: record.string("name"),
            status: record.enumeration("status"),
            trigger: record.enumeration("trigger"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks("action_operations", &self.action_operations);
        record.put_string("custom_action_id", self.custom_action_id.as_deref());
        record.put_string("name", self.name.as_deref());
        record.put_enum("status", self.status.as_ref());
        record.put_enum("trigger", self.trigger.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "action_operations",
            blocks::<VisualCustomActionOperation>().items(1, 2).required(),
        )
        .field("custom_action_id", identifier().required())
        .field("name", string().length(1, 256).required())
        .field("status", enumeration::<WidgetStatus>())
        .field(
            "trigger",
            enumeration::<VisualCustomActionTrigger>().required(),
        )
    }
}

/// What a custom action does when triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisualCustomActionOperation {
    #[serde(rename = "FilterOperation")]
    Filter(CustomActionFilterOperation),
    #[serde(rename = "NavigationOperation")]
    Navigation(CustomActionNavigationOperation),
    #[serde(rename = "SetParametersOperation")]
    SetParameters(CustomActionSetParametersOperation),
    #[serde(rename = "URLOperation")]
    Url(CustomActionUrlOperation),
}

impl VisualCustomActionOperation {
    const ALTERNATIVES: &'static [&'static str] = &[
        "filter_operation",
        "navigation_operation",
        "set_parameters_operation",
        "url_operation",
    ];
}

impl Transcode for VisualCustomActionOperation {
    const NAME: &'static str = "VisualCustomActionOperation";

    fn expand(record: &Record) -> Option<Self> {
        oneof::note_extra_alternatives(Self::NAME, record, Self::ALTERNATIVES);
        record
            .block("filter_operation")
            .map(Self::Filter)
            .or_else(|| record.block("navigation_operation").map(Self::Navigation))
            .or_else(|| {
                record
                    .block("set_parameters_operation")
                    .map(Self::SetParameters)
            })
            .or_else(|| record.block("url_operation").map(Self::Url))
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        match self {
            Self::Filter(op) => record.put_block("filter_operation", Some(op)),
            Self::Navigation(op) => record.put_block("navigation_operation", Some(op)),
            Self::SetParameters(op) => record.put_block("set_parameters_operation", Some(op)),
            Self::Url(op) => record.put_block("url_operation", Some(op)),
        }
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("filter_operation", block::<CustomActionFilterOperation>())
            .field(
                "navigation_operation",
                block::<CustomActionNavigationOperation>(),
            )
            .field(
                "set_parameters_operation",
                block::<CustomActionSetParametersOperation>(),
            )
            .field("url_operation", block::<CustomActionUrlOperation>())
            .one_of(Self::ALTERNATIVES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomActionFilterOperation {
    pub selected_fields_configuration: Option<FilterOperationSelectedFieldsConfiguration>,
    pub target_visuals_configuration: Option<FilterOperationTargetVisualsConfiguration>,
}

impl Transcode for CustomActionFilterOperation {
    const NAME: &'static str = "CustomActionFilterOperation";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            selected_fields_configuration: record.block("selected_fields_configuration"),
            target_visuals_configuration: record.block("target_visuals_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "selected_fields_configuration",
            self.selected_fields_configuration.as_ref(),
        );
        record.put_block(
            "target_visuals_configuration",
            self.target_visuals_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "selected_fields_configuration",
            block::<FilterOperationSelectedFieldsConfiguration>().required(),
        )
        .field(
            "target_visuals_configuration",
            block::<FilterOperationTargetVisualsConfiguration>().required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilterOperationSelectedFieldsConfiguration {
    pub selected_field_options: Option<SelectedFieldOptions>,
    pub selected_fields: Vec<String>,
}

impl Transcode for FilterOperationSelectedFieldsConfiguration {
    const NAME: &'static str = "FilterOperationSelectedFieldsConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            selected_field_options: record.enumeration("selected_field_options"),
            selected_fields: record.strings("selected_fields"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum(
            "selected_field_options",
            self.selected_field_options.as_ref(),
        );
        record.put_string_list("selected_fields", &self.selected_fields);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "selected_field_options",
            enumeration::<SelectedFieldOptions>(),
        )
        .field("selected_fields", string_list().items(1, 20))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilterOperationTargetVisualsConfiguration {
    pub same_sheet_target_visual_configuration: Option<SameSheetTargetVisualConfiguration>,
}

impl Transcode for FilterOperationTargetVisualsConfiguration {
    const NAME: &'static str = "FilterOperationTargetVisualsConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            same_sheet_target_visual_configuration: record
                .block("same_sheet_target_visual_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "same_sheet_target_visual_configuration",
            self.same_sheet_target_visual_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "same_sheet_target_visual_configuration",
            block::<SameSheetTargetVisualConfiguration>(),
        )
    }
}

/// Visuals on the same sheet that a filter action applies to. The target
/// ids are unordered and unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SameSheetTargetVisualConfiguration {
    pub target_visual_options: Option<TargetVisualOptions>,
    pub target_visuals: Vec<String>,
}

impl Transcode for SameSheetTargetVisualConfiguration {
    const NAME: &'static str = "SameSheetTargetVisualConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            target_visual_options: record.enumeration("target_visual_options"),
            target_visuals: record.strings("target_visuals"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("target_visual_options", self.target_visual_options.as_ref());
        record.put_string_set("target_visuals", &self.target_visuals);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "target_visual_options",
            enumeration::<TargetVisualOptions>(),
        )
        .field("target_visuals", string_set().items(1, 30))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomActionNavigationOperation {
    pub local_navigation_configuration: Option<LocalNavigationConfiguration>,
}

impl Transcode for CustomActionNavigationOperation {
    const NAME: &'static str = "CustomActionNavigationOperation";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            local_navigation_configuration: record.block("local_navigation_configuration"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "local_navigation_configuration",
            self.local_navigation_configuration.as_ref(),
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "local_navigation_configuration",
            block::<LocalNavigationConfiguration>(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalNavigationConfiguration {
    pub target_sheet_id: Option<String>,
}

impl Transcode for LocalNavigationConfiguration {
    const NAME: &'static str = "LocalNavigationConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            target_sheet_id: record.string("target_sheet_id"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string("target_sheet_id", self.target_sheet_id.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("target_sheet_id", identifier().required())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomActionSetParametersOperation {
    pub parameter_value_configurations: Vec<SetParameterValueConfiguration>,
}

impl Transcode for CustomActionSetParametersOperation {
    const NAME: &'static str = "CustomActionSetParametersOperation";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            parameter_value_configurations: record.blocks("parameter_value_configurations"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_blocks(
            "parameter_value_configurations",
            &self.parameter_value_configurations,
        );
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "parameter_value_configurations",
            blocks::<SetParameterValueConfiguration>()
                .items(1, 200)
                .required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SetParameterValueConfiguration {
    pub destination_parameter_name: Option<String>,
    pub value: Option<DestinationParameterValueConfiguration>,
}

impl Transcode for SetParameterValueConfiguration {
    const NAME: &'static str = "SetParameterValueConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            destination_parameter_name: record.string("destination_parameter_name"),
            value: record.block("value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string(
            "destination_parameter_name",
            self.destination_parameter_name.as_deref(),
        );
        record.put_block("value", self.value.as_ref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "destination_parameter_name",
            string().length(1, 2048).pattern("^[a-zA-Z0-9]+$").required(),
        )
        .field(
            "value",
            block::<DestinationParameterValueConfiguration>().required(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DestinationParameterValueConfiguration {
    pub custom_values_configuration: Option<CustomValuesConfiguration>,
    pub select_all_value_options: Option<SelectAllValueOptions>,
    pub source_field: Option<String>,
    pub source_parameter_name: Option<String>,
}

impl Transcode for DestinationParameterValueConfiguration {
    const NAME: &'static str = "DestinationParameterValueConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_values_configuration: record.block("custom_values_configuration"),
            select_all_value_options: record.enumeration("select_all_value_options"),
            source_field: record.string("source_field"),
            source_parameter_name: record.string("source_parameter_name"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block(
            "custom_values_configuration",
            self.custom_values_configuration.as_ref(),
        );
        record.put_enum(
            "select_all_value_options",
            self.select_all_value_options.as_ref(),
        );
        record.put_string("source_field", self.source_field.as_deref());
        record.put_string("source_parameter_name", self.source_parameter_name.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "custom_values_configuration",
            block::<CustomValuesConfiguration>(),
        )
        .field(
            "select_all_value_options",
            enumeration::<SelectAllValueOptions>(),
        )
        .field("source_field", string().length(1, 512))
        .field("source_parameter_name", string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomValuesConfiguration {
    pub custom_values: Option<CustomParameterValues>,
    pub include_null_value: Option<bool>,
}

impl Transcode for CustomValuesConfiguration {
    const NAME: &'static str = "CustomValuesConfiguration";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            custom_values: record.block("custom_values"),
            include_null_value: record.boolean("include_null_value"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_block("custom_values", self.custom_values.as_ref());
        record.put_bool("include_null_value", self.include_null_value);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("custom_values", block::<CustomParameterValues>().required())
            .field("include_null_value", boolean())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomParameterValues {
    pub date_time_values: Vec<String>,
    pub string_values: Vec<String>,
}

impl Transcode for CustomParameterValues {
    const NAME: &'static str = "CustomParameterValues";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            date_time_values: record.strings("date_time_values"),
            string_values: record.strings("string_values"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_string_list("date_time_values", &self.date_time_values);
        record.put_string_list("string_values", &self.string_values);
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field("date_time_values", string_list())
            .field("string_values", string_list())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomActionUrlOperation {
    pub url_target: Option<UrlTargetConfiguration>,
    pub url_template: Option<String>,
}

impl Transcode for CustomActionUrlOperation {
    const NAME: &'static str = "CustomActionUrlOperation";

    fn expand(record: &Record) -> Option<Self> {
        Some(Self {
            url_target: record.enumeration("url_target"),
            url_template: record.string("url_template"),
        })
    }

    fn flatten(&self) -> Record {
        let mut record = Record::new();
        record.put_enum("url_target", self.url_target.as_ref());
        record.put_string("url_template", self.url_template.as_deref());
        record
    }

    fn describe(node: NodeSchema) -> NodeSchema {
        node.field(
            "url_target",
            enumeration::<UrlTargetConfiguration>().required(),
        )
        .field("url_template", string().length(1, 2048).required())
    }
}
