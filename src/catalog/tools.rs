use serde::Serialize;
use serde_json::{json, Value};

/// A named operation the client can invoke through `tools/call`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    /// A tool that takes no arguments.
    pub fn without_arguments(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }
}

const BUILTIN_TOOLS: &[(&str, &str)] = &[
    (
        "get_field_structure_styling",
        "Get field structure styling and markup patterns for Adaptive Form Block. Returns HTML structure and CSS for form fields including labels, inputs, wrappers, and validation states.",
    ),
    (
        "get_dropdown_styling",
        "Get dropdown component styling for Adaptive Form Block. Returns CSS and HTML patterns for dropdown elements including select boxes, option styling, and custom dropdown implementations.",
    ),
    (
        "get_radio_checkbox_styling",
        "Get radio button and checkbox styling for Adaptive Form Block. Returns CSS and HTML patterns for radio buttons, checkboxes, groups, and custom styled form controls.",
    ),
    (
        "get_panel_container_styling",
        "Get panel and container styling for Adaptive Form Block. Returns CSS and HTML patterns for form panels, fieldsets, containers, and layout structures.",
    ),
    (
        "get_css_selectors_guide",
        "Get comprehensive CSS selectors guide for Adaptive Form Block. Returns a complete guide to CSS selectors for form styling and customization.",
    ),
    (
        "get_file_attachment_styling",
        "Get file attachment component styling for Adaptive Form Block. Returns CSS and HTML for file upload elements, drag-and-drop zones, and custom file input styling.",
    ),
    (
        "get_error_message_styling",
        "Get error message styling for Adaptive Form Block. Returns CSS and HTML for form validation errors, error states, and accessibility patterns.",
    ),
    (
        "get_repeatable_panel_styling",
        "Get repeatable panel styling for Adaptive Form Block. Returns CSS and HTML for dynamic repeatable form sections, including add/remove controls and layout.",
    ),
    (
        "get_custom_component_creation",
        "Get complete documentation for creating custom components (decorating fields) in Adaptive Form Block. Returns guide with decorator functions, custom styling, and behavior implementation.",
    ),
    (
        "get_layout_configuration",
        "Get complete documentation for panel layout configuration in Adaptive Form Block. Returns guide for implementing custom layouts like accordion, wizard, tabs, etc.",
    ),
    (
        "get_system_information",
        "Get system information and server details for Adaptive Form Block. Returns system details and environment info.",
    ),
];

pub fn builtin_tools() -> Vec<ToolDefinition> {
    BUILTIN_TOOLS
        .iter()
        .map(|(name, description)| ToolDefinition::without_arguments(*name, *description))
        .collect()
}
