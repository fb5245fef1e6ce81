//! Static tool, resource and prompt catalogs.
//!
//! The catalog is built once at startup and validated as a whole: every tool
//! must have an upstream endpoint and a compilable input schema, and every
//! resource must be one the dispatch layer can fetch. A mismatch fails
//! construction instead of surfacing on first use.

pub mod endpoints;
pub mod prompts;
pub mod resources;
pub mod tools;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::error::ProxyError;
use crate::schema::check_input_schema;

pub use endpoints::EndpointRegistry;
pub use prompts::{PromptArgument, PromptDefinition};
pub use resources::{KnownResource, ResourceDefinition, JSON_MIME_TYPE};
pub use tools::ToolDefinition;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate {kind} identifier: {name}")]
    Duplicate { kind: &'static str, name: String },
    #[error("tool '{0}' has no upstream endpoint")]
    MissingEndpoint(String),
    #[error("tool '{tool}' has invalid endpoint path '{path}'")]
    InvalidEndpoint { tool: String, path: String },
    #[error("tool '{tool}' has an invalid input schema: {reason}")]
    InvalidInputSchema { tool: String, reason: String },
    #[error("resource '{0}' is not served by this proxy")]
    UnsupportedResource(String),
}

/// Immutable, validated catalog of everything the server advertises.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolDefinition>,
    resources: Vec<ResourceDefinition>,
    prompts: Vec<PromptDefinition>,
    endpoints: EndpointRegistry,
}

impl Catalog {
    pub fn new(
        tools: Vec<ToolDefinition>,
        resources: Vec<ResourceDefinition>,
        prompts: Vec<PromptDefinition>,
        endpoints: EndpointRegistry,
    ) -> Result<Self, CatalogError> {
        ensure_unique("tool", tools.iter().map(|t| t.name.as_str()))?;
        ensure_unique("resource", resources.iter().map(|r| r.uri.as_str()))?;
        ensure_unique("prompt", prompts.iter().map(|p| p.name.as_str()))?;

        for tool in &tools {
            let path = endpoints
                .get(&tool.name)
                .ok_or_else(|| CatalogError::MissingEndpoint(tool.name.clone()))?;
            if path.len() < 2 || !path.starts_with('/') {
                return Err(CatalogError::InvalidEndpoint {
                    tool: tool.name.clone(),
                    path: path.to_string(),
                });
            }

            check_input_schema(&tool.input_schema).map_err(|e| {
                CatalogError::InvalidInputSchema {
                    tool: tool.name.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(resource) = resources
            .iter()
            .find(|r| KnownResource::from_uri(&r.uri).is_none())
        {
            return Err(CatalogError::UnsupportedResource(resource.uri.clone()));
        }

        Ok(Self {
            tools,
            resources,
            prompts,
            endpoints,
        })
    }

    /// The catalog this proxy ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            tools::builtin_tools(),
            resources::builtin_resources(),
            prompts::builtin_prompts(),
            EndpointRegistry::builtin(),
        )
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    pub fn prompts(&self) -> &[PromptDefinition] {
        &self.prompts
    }

    /// Resolve a tool identifier to the upstream path it forwards to.
    pub fn resolve_endpoint(&self, tool: &str) -> Result<&str, ProxyError> {
        self.endpoints
            .get(tool)
            .ok_or_else(|| ProxyError::UnknownTool {
                name: tool.to_string(),
            })
    }

    pub fn find_prompt(&self, name: &str) -> Result<&PromptDefinition, ProxyError> {
        self.prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProxyError::UnknownPrompt {
                name: name.to_string(),
            })
    }

    /// Resolve a resource uri; only uris present in the catalog are accepted.
    pub fn resolve_resource(&self, uri: &str) -> Result<KnownResource, ProxyError> {
        self.resources
            .iter()
            .find(|r| r.uri == uri)
            .and_then(|r| KnownResource::from_uri(&r.uri))
            .ok_or_else(|| ProxyError::UnknownResource {
                uri: uri.to_string(),
            })
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
