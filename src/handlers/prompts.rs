use serde::Serialize;
use tracing::debug;

use crate::catalog::PromptDefinition;
use crate::error::ProxyError;
use crate::protocol::{GetPromptParams, GetPromptResult, PromptMessage};
use crate::ProxyContext;

#[derive(Debug, Serialize)]
pub struct ListPromptsResult<'a> {
    pub prompts: &'a [PromptDefinition],
}

/// Handle `prompts/list`.
pub fn list(ctx: &ProxyContext) -> ListPromptsResult<'_> {
    ListPromptsResult {
        prompts: ctx.catalog.prompts(),
    }
}

/// Handle `prompts/get`.
///
/// Returns the stored prompt text as a single user message. Arguments are
/// accepted but not interpolated.
pub fn get(params: GetPromptParams, ctx: &ProxyContext) -> Result<GetPromptResult, ProxyError> {
    let prompt = ctx.catalog.find_prompt(&params.name)?;

    debug!(
        prompt = %params.name,
        argument_count = params.arguments.as_ref().map_or(0, |a| a.len()),
        "prompt requested"
    );

    Ok(GetPromptResult {
        description: prompt.description.clone(),
        messages: vec![PromptMessage::user(prompt.prompt.clone())],
    })
}
