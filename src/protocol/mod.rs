pub mod request;
pub mod response;

pub use request::{
    ClientInfo, GetPromptParams, InitializeParams, JsonRpcRequest, ReadResourceParams, RpcId,
    ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, PromptMessage, ReadResourceResult,
    ResourceContents, TextContent, ToolResult,
};
