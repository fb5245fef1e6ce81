//! Catalog listings checked against frozen wire shapes.

mod common;

use std::time::Duration;

use forms_mcp_proxy::catalog::{Catalog, EndpointRegistry, KnownResource};
use forms_mcp_proxy::handlers;
use forms_mcp_proxy::schema::validate_instance;
use serde_json::{json, Value};

use common::{request, test_context, UNREACHABLE_URL};

fn tools_list_schema() -> Value {
    json!({
        "type": "object",
        "required": ["tools"],
        "additionalProperties": false,
        "properties": {
            "tools": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["name", "description", "inputSchema"],
                    "additionalProperties": false,
                    "properties": {
                        "name": { "type": "string", "pattern": "^[a-z_]+$" },
                        "description": { "type": "string", "minLength": 1 },
                        "inputSchema": {
                            "type": "object",
                            "required": ["type"],
                            "properties": { "type": { "const": "object" } }
                        }
                    }
                }
            }
        }
    })
}

fn prompts_list_schema() -> Value {
    json!({
        "type": "object",
        "required": ["prompts"],
        "properties": {
            "prompts": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "description", "arguments", "prompt"],
                    "additionalProperties": false,
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "arguments": { "type": "array" },
                        "prompt": { "type": "string", "minLength": 1 }
                    }
                }
            }
        }
    })
}

async fn list(method: &str) -> Value {
    let ctx = test_context(UNREACHABLE_URL, Duration::from_secs(5));
    handlers::dispatch(&request(1, method, None), &ctx)
        .await
        .expect("list requests are answered")
        .result
        .expect("list requests succeed")
}

#[tokio::test]
async fn tools_list_matches_frozen_schema() {
    let result = list("tools/list").await;
    assert!(validate_instance(&tools_list_schema(), &result).unwrap());
}

#[tokio::test]
async fn prompts_list_matches_frozen_schema() {
    let result = list("prompts/list").await;
    assert!(validate_instance(&prompts_list_schema(), &result).unwrap());
}

#[test]
fn frozen_schema_rejects_drift() {
    let drifted = json!({ "tools": [{ "name": "x", "description": "d", "input_schema": {} }] });
    assert!(!validate_instance(&tools_list_schema(), &drifted).unwrap());
}

#[tokio::test]
async fn resources_list_golden() {
    let result = list("resources/list").await;
    let expected = json!({
        "resources": [
            {
                "uri": "server-info",
                "name": "Server Information",
                "description": "Information about the FORMS Edge Delivery MCP server itself",
                "mimeType": "application/json"
            },
            {
                "uri": "system-info",
                "name": "System Information",
                "description": "System and environment information for the server",
                "mimeType": "application/json"
            }
        ]
    });
    assert_eq!(result, expected);
}

#[test]
fn every_tool_has_an_endpoint_and_nothing_else_does() {
    let catalog = Catalog::builtin().unwrap();
    let registry = EndpointRegistry::builtin();

    assert_eq!(catalog.tools().len(), registry.len());
    for tool in catalog.tools() {
        let path = catalog.resolve_endpoint(&tool.name).unwrap();
        assert!(path.starts_with('/'), "{}: {path}", tool.name);
        assert_eq!(registry.get(&tool.name), Some(path));
    }
}

#[test]
fn every_listed_resource_is_readable() {
    let catalog = Catalog::builtin().unwrap();
    let uris: Vec<&str> = catalog.resources().iter().map(|r| r.uri.as_str()).collect();
    let known: Vec<&str> = KnownResource::ALL.iter().map(|r| r.uri()).collect();
    assert_eq!(uris, known);
}

#[test]
fn identifiers_are_unique_per_kind() {
    let catalog = Catalog::builtin().unwrap();

    let mut tools: Vec<&str> = catalog.tools().iter().map(|t| t.name.as_str()).collect();
    tools.sort_unstable();
    tools.dedup();
    assert_eq!(tools.len(), catalog.tools().len());

    let mut prompts: Vec<&str> = catalog.prompts().iter().map(|p| p.name.as_str()).collect();
    prompts.sort_unstable();
    prompts.dedup();
    assert_eq!(prompts.len(), catalog.prompts().len());
}
