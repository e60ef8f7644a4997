use serde_json::{Map, Value};
use crate::rpc::structs::rpc_response::RpcResponse;

pub const RESULT_SUCCESS: &str = "success";

impl RpcResponse {
    pub fn success(arguments: Map<String, Value>, tag: Option<Value>) -> RpcResponse {
        RpcResponse {
            result: String::from(RESULT_SUCCESS),
            arguments,
            tag,
        }
    }

    /// Failures always carry an empty arguments object.
    pub fn failure(result: String, tag: Option<Value>) -> RpcResponse {
        RpcResponse {
            result,
            arguments: Map::new(),
            tag,
        }
    }
}
