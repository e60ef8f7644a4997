use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub tag: Option<Value>,
}
