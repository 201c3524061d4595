//! JSON-RPC envelopes and the closed set of LSP methods this frontend
//! understands. Anything outside that set produces a "not implemented"
//! diagnostic rather than a panic or a silently dropped message.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_HOVER: &str = "textDocument/hover";
pub const METHOD_COMPLETION: &str = "textDocument/completion";
pub const METHOD_INITIALIZED: &str = "initialized";
pub const METHOD_DID_OPEN: &str = "textDocument/didOpen";
pub const METHOD_DID_CHANGE: &str = "textDocument/didChange";
pub const METHOD_DID_SAVE: &str = "textDocument/didSave";
pub const METHOD_DID_CLOSE: &str = "textDocument/didClose";

/// The subset of an incoming JSON-RPC envelope this frontend needs: enough
/// to route by `method` and, for requests, echo back `id`.
#[derive(Deserialize)]
pub struct Incoming {
    pub id: Option<Json>,
    pub method: String,
    #[serde(default)]
    pub params: Json,
}

#[derive(Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Json,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

#[derive(Serialize)]
pub struct ResponseError {
    pub code: i64,
    pub message: String,
}

impl Response {
    pub fn result(id: Json, result: Json) -> Self {
        Response { jsonrpc: "2.0", id, result: Some(result), error: None }
    }

    pub fn method_not_found(id: Json, method: &str) -> Self {
        Response {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(ResponseError { code: -32601, message: format!("not implemented: {method}") }),
        }
    }
}

#[derive(Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: String,
}

#[derive(Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Deserialize)]
pub struct TextDocumentPositionParams {
    #[serde(rename = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

#[derive(Deserialize)]
pub struct DidOpenParams {
    #[serde(rename = "textDocument")]
    pub text_document: DidOpenTextDocument,
}

#[derive(Deserialize)]
pub struct DidOpenTextDocument {
    pub uri: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct DidChangeParams {
    #[serde(rename = "textDocument")]
    pub text_document: TextDocumentIdentifier,
    #[serde(rename = "contentChanges")]
    pub content_changes: Vec<ContentChange>,
}

#[derive(Deserialize)]
pub struct ContentChange {
    pub text: String,
}

#[derive(Deserialize)]
pub struct DidCloseParams {
    #[serde(rename = "textDocument")]
    pub text_document: TextDocumentIdentifier,
}
