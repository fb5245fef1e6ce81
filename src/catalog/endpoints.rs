use std::collections::BTreeMap;

/// Tool identifier → upstream path for the built-in catalog.
const BUILTIN_ENDPOINTS: &[(&str, &str)] = &[
    ("get_field_structure_styling", "/field-structure"),
    ("get_dropdown_styling", "/dropdown-styling"),
    ("get_radio_checkbox_styling", "/radio-checkbox-styling"),
    ("get_panel_container_styling", "/panel-container-styling"),
    ("get_css_selectors_guide", "/css-selectors-guide"),
    ("get_file_attachment_styling", "/file-attachment-styling"),
    ("get_error_message_styling", "/error-message-styling"),
    ("get_repeatable_panel_styling", "/repeatable-panel-styling"),
    ("get_custom_component_creation", "/custom-component-creation"),
    ("get_layout_configuration", "/layout-configuration"),
    ("get_system_information", "/system-info"),
];

/// Fixed mapping from tool identifier to the upstream path it is forwarded to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    paths: BTreeMap<String, String>,
}

impl EndpointRegistry {
    pub fn builtin() -> Self {
        BUILTIN_ENDPOINTS.iter().copied().collect()
    }

    pub fn get(&self, tool: &str) -> Option<&str> {
        self.paths.get(tool).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<T: Into<String>, P: Into<String>> FromIterator<(T, P)> for EndpointRegistry {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(tool, path)| (tool.into(), path.into()))
                .collect(),
        }
    }
}
