use serde::Serialize;

/// MIME type of every resource body this server returns.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A read-only document the client can fetch through `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Resources the dispatch layer knows how to fetch from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownResource {
    ServerInfo,
    SystemInfo,
}

impl KnownResource {
    pub const ALL: [KnownResource; 2] = [KnownResource::ServerInfo, KnownResource::SystemInfo];

    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "server-info" => Some(Self::ServerInfo),
            "system-info" => Some(Self::SystemInfo),
            _ => None,
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            Self::ServerInfo => "server-info",
            Self::SystemInfo => "system-info",
        }
    }

    /// Upstream path serving this resource.
    pub fn upstream_path(self) -> &'static str {
        match self {
            Self::ServerInfo => "/resource/server-info",
            Self::SystemInfo => "/resource/system-info",
        }
    }

    /// Human label used in fetch error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::ServerInfo => "server info",
            Self::SystemInfo => "system info",
        }
    }
}

pub fn builtin_resources() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: KnownResource::ServerInfo.uri().to_string(),
            name: "Server Information".to_string(),
            description: "Information about the FORMS Edge Delivery MCP server itself".to_string(),
            mime_type: JSON_MIME_TYPE.to_string(),
        },
        ResourceDefinition {
            uri: KnownResource::SystemInfo.uri().to_string(),
            name: "System Information".to_string(),
            description: "System and environment information for the server".to_string(),
            mime_type: JSON_MIME_TYPE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_round_trips_through_enum() {
        for resource in KnownResource::ALL {
            assert_eq!(KnownResource::from_uri(resource.uri()), Some(resource));
        }
        assert_eq!(KnownResource::from_uri("bogus"), None);
        assert_eq!(KnownResource::from_uri("resource://server-info"), None);
    }

    #[test]
    fn serializes_with_mcp_field_names() {
        let value = serde_json::to_value(&builtin_resources()[0]).unwrap();
        assert_eq!(value["uri"], "server-info");
        assert_eq!(value["mimeType"], "application/json");
        assert!(value.get("mime_type").is_none());
    }
}
