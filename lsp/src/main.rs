mod hover;
mod msg;
mod protocol;

use anyhow::Result;
use protocol::{
    DidChangeParams, DidCloseParams, DidOpenParams, Incoming, Response, TextDocumentPositionParams,
    METHOD_COMPLETION, METHOD_DID_CHANGE, METHOD_DID_CLOSE, METHOD_DID_OPEN, METHOD_DID_SAVE, METHOD_HOVER,
    METHOD_INITIALIZE, METHOD_INITIALIZED,
};
use serde_json::{json, Value as Json};
use std::collections::HashMap;
use std::io::{self, BufReader};

#[derive(Default)]
struct Server {
    documents: HashMap<String, String>,
}

impl Server {
    fn handle_request(&mut self, method: &str, params: &Json, id: Json) -> Response {
        match method {
            METHOD_INITIALIZE => Response::result(
                id,
                json!({
                    "capabilities": {
                        "hoverProvider": true,
                        "completionProvider": { "resolveProvider": false },
                        "textDocumentSync": 1,
                    }
                }),
            ),
            METHOD_HOVER => Response::result(id, self.hover(params).unwrap_or(Json::Null)),
            METHOD_COMPLETION => Response::result(id, json!({ "isIncomplete": false, "items": [] })),
            other => Response::method_not_found(id, other),
        }
    }

    fn handle_notification(&mut self, method: &str, params: &Json) {
        match method {
            METHOD_INITIALIZED => {}
            METHOD_DID_OPEN => {
                if let Ok(params) = serde_json::from_value::<DidOpenParams>(params.clone()) {
                    self.documents.insert(params.text_document.uri, params.text_document.text);
                }
            }
            METHOD_DID_CHANGE => {
                if let Ok(mut params) = serde_json::from_value::<DidChangeParams>(params.clone()) {
                    if let Some(change) = params.content_changes.pop() {
                        self.documents.insert(params.text_document.uri, change.text);
                    }
                }
            }
            METHOD_DID_SAVE => {}
            METHOD_DID_CLOSE => {
                if let Ok(params) = serde_json::from_value::<DidCloseParams>(params.clone()) {
                    self.documents.remove(&params.text_document.uri);
                }
            }
            other => tracing::debug!(method = other, "notification not implemented"),
        }
    }

    fn hover(&self, params: &Json) -> Option<Json> {
        let params: TextDocumentPositionParams = serde_json::from_value(params.clone()).ok()?;
        let text = self.documents.get(&params.text_document.uri)?;
        let offset = hover::offset_of(text, params.position.line, params.position.character)?;
        let (program, _) = ember_parser::parse(text);
        let contents = hover::innermost_at(&program, offset)?;
        Some(json!({ "contents": { "kind": "plaintext", "value": contents } }))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut server = Server::default();

    while let Some(body) = msg::read_message(&mut reader)? {
        let incoming: Incoming = match msg::parse_body(&body) {
            Ok(incoming) => incoming,
            Err(error) => {
                tracing::warn!(%error, "dropping malformed message");
                continue;
            }
        };

        match incoming.id {
            Some(id) => {
                let response = server.handle_request(&incoming.method, &incoming.params, id);
                let body = serde_json::to_vec(&response)?;
                msg::write_message(&mut writer, &body)?;
            }
            None => server.handle_notification(&incoming.method, &incoming.params),
        }
    }

    Ok(())
}
