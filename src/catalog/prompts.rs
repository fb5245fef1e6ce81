use serde::Serialize;

/// A named, static prompt returned verbatim through `prompts/get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptDefinition {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgument>,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

// (name, description, prompt text)
const BUILTIN_PROMPTS: &[(&str, &str, &str)] = &[
    (
        "get_css_selectors_guide",
        "Get the CSS selectors guide for AEM Adaptive Form Block development.",
        "I need to master CSS selectors for targeting specific form elements in AEM Adaptive Forms. Show me advanced selector techniques for different field types, name-based targeting, and type-based selectors to create precise styling rules.",
    ),
    (
        "get_dropdown_styling",
        "Get the dropdown styling guide for AEM Adaptive Form Block development.",
        "I need to style dropdown components with modern visual effects. I want custom arrow styling, hover states, focus indicators, and smooth transition effects that work well with AEM Adaptive Form Block structure.",
    ),
    (
        "get_radio_checkbox_styling",
        "Get the radio checkbox styling guide for AEM Adaptive Form Block development.",
        "I need to create custom-styled radio buttons and checkboxes that replace the default browser appearance. Show me CSS techniques for creating modern, accessible radio groups and checkbox styling with custom indicators.",
    ),
    (
        "error_state_visual_design",
        "Get the error state visual design guide for AEM Adaptive Form Block development.",
        "I need to design comprehensive error styling for form validation. I need CSS for error message appearance, field border changes, icon integration, and smooth animation transitions between valid and error states.",
    ),
    (
        "get_panel_container_styling",
        "Get the panel container styling guide for AEM Adaptive Form Block development.",
        "I need to style panel containers and fieldsets for better visual hierarchy. I need CSS approaches for grouping elements, creating visual separation, and styling container borders and backgrounds.",
    ),
    (
        "get_layout_configuration",
        "Get the layout configuration guide for AEM Adaptive Form Block development.",
        "I need to implement sophisticated layout styling for wizard, accordion, and tab layouts. Show me CSS techniques for creating smooth transitions, step indicators, and responsive layout patterns.",
    ),
    (
        "get_error_message_styling",
        "Get the error message styling guide for AEM Adaptive Form Block development.",
        "I need to design comprehensive error styling for form validation. I need CSS for error message appearance, field border changes, icon integration, and smooth animation transitions between valid and error states.",
    ),
    (
        "file_upload_styling_enhancement",
        "Get the Style of file upload components with drag-and-drop feedback.",
        "I want to style file upload components with drag-and-drop visual feedback. Show me CSS techniques for upload area styling, drag states, progress indicators, and file preview styling.",
    ),
    (
        "panel_organization_container_styling",
        "Get the panel organization and container styling guide for AEM Adaptive Form Block development.",
        "Help me style panel containers and fieldsets for better visual hierarchy. I need CSS approaches for grouping elements, creating visual separation, and styling container borders and backgrounds.",
    ),
    (
        "repeatable_dynamic_panel_animation_styling",
        "Get the repeatable dynamic panel animation styling guide for AEM Adaptive Form Block development.",
        "I need to style repeatable panels with smooth add/remove animations. Show me CSS techniques for animating panel appearance, styling control buttons, and creating seamless transitions for dynamic content.",
    ),
    (
        "custom_component_decorator_styling",
        "Get the custom component decorator styling guide for AEM Adaptive Form Block development.",
        "I need to create custom components decorators for form components with advanced styling. I want to understand CSS approaches for custom component styling, decorator implementation, and creating reusable styled components.",
    ),
    (
        "advanced_layout_styling_patterns",
        "Get the advanced layout styling patterns guide for AEM Adaptive Form Block development like wizard, accordion, tabs on top, tabs on left etc.",
        "I need to implement sophisticated layout patterns like wizard, accordion, tabs on top, tabs on left etc. Show me CSS techniques for creating smooth transitions, step indicators, and responsive layout patterns.",
    ),
    (
        "complete_form_theming_strategy",
        "Get the complete form theming strategy guide for AEM Adaptive Form Block development.",
        "I need to develop a comprehensive theming strategy for my entire form. I need CSS approaches that combine field styling, error states, interactive components, and layout patterns into a cohesive design system.",
    ),
];

pub fn builtin_prompts() -> Vec<PromptDefinition> {
    BUILTIN_PROMPTS
        .iter()
        .map(|(name, description, prompt)| PromptDefinition {
            name: name.to_string(),
            description: description.to_string(),
            arguments: Vec::new(),
            prompt: prompt.to_string(),
        })
        .collect()
}
