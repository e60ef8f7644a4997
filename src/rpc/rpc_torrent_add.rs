use serde_json::{Map, Value};
use crate::rpc::enums::add_outcome::AddOutcome;
use crate::rpc::enums::add_source::AddSource;
use crate::rpc::enums::flag_argument::FlagArgument;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::add_reconciler::AddReconciler;
use crate::rpc::structs::added_torrent::AddedTorrent;
use crate::rpc::structs::rpc_service_data::RpcServiceData;

#[tracing::instrument(level = "debug", skip(data, arguments))]
pub async fn rpc_torrent_add(data: &RpcServiceData, arguments: &Map<String, Value>) -> Result<Map<String, Value>, RpcError>
{
    let source = AddSource::from_arguments(arguments)?;
    let download_dir = optional_string("download-dir", arguments.get("download-dir"))?;
    let cookies = optional_string("cookies", arguments.get("cookies"))?;
    let paused = FlagArgument::decode("paused", arguments.get("paused"))?.is_set();

    let reconciler = AddReconciler::new(data.backend.as_ref(), &data.registry, data.torrent_add);
    match reconciler.add(source, download_dir, cookies, paused).await? {
        AddOutcome::Added(torrent) => Ok(reply("torrent-added", torrent)),
        AddOutcome::Duplicate(torrent) => Ok(reply("torrent-duplicate", torrent)),
        AddOutcome::TimedOut => Err(RpcError::AddTimeout),
    }
}

fn reply(key: &str, torrent: AddedTorrent) -> Map<String, Value> {
    let mut arguments = Map::new();
    let mut object = Map::new();
    object.insert(String::from("id"), Value::from(torrent.id));
    object.insert(String::from("name"), Value::from(torrent.name));
    object.insert(String::from("hashString"), Value::from(torrent.hash_string));
    arguments.insert(key.to_string(), Value::Object(object));
    arguments
}

fn optional_string<'a>(name: &str, value: Option<&'a Value>) -> Result<Option<&'a str>, RpcError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(RpcError::invalid_argument(name, "expected a string")),
    }
}
