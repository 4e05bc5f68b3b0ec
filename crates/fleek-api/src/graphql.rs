//! GraphQL request/response envelope.
//!
//! Every query is a `POST` of `{operationName, query, variables}`; every
//! response is `{data, errors}`. The client treats any entry in `errors`
//! as a failure of the whole operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named GraphQL query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Operation name, matching the `query <Name>` in the document.
    pub operation_name: &'static str,
    /// Full query document text.
    pub document: &'static str,
}

/// Request body sent to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Request<'a> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: &'a Value,
}

/// Response envelope returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Response<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    /// Path can mix field names and list indices.
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl GraphQlError {
    /// Message prefixed with the dotted path, when the server sent one.
    pub fn describe(&self) -> String {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => {
                let dotted = path
                    .iter()
                    .map(|seg| match seg {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                format!("{dotted}: {}", self.message)
            }
            _ => self.message.clone(),
        }
    }
}
