use std::collections::BTreeMap;
use log::{debug, info, warn};
use serde_json::{Map, Value};
use crate::rpc::enums::flag_argument::FlagArgument;
use crate::rpc::enums::ids_argument::IdsArgument;
use crate::rpc::enums::torrent_action::TorrentAction;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::rpc_service_data::RpcServiceData;
use crate::translator::structs::torrent_view::TorrentView;
use crate::translator::structs::translation_request::TranslationRequest;

/// Priority the backend uses for files that should be downloaded.
const PRIORITY_NORMAL: i64 = 1;
/// Priority the backend uses for files that are skipped.
const PRIORITY_SKIP: i64 = 0;

/// Without a `fields` argument every translated field is returned, not an empty object.
#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_torrent_get(data: &RpcServiceData, arguments: &Map<String, Value>) -> Result<Map<String, Value>, RpcError>
{
    let list = data.backend.torrent_list().await?;
    let newly_assigned = data.registry.reconcile(list.iter().map(|item| item.hash.as_str()));
    if !newly_assigned.is_empty() {
        debug!("[RPC] Registry grew by {} hashes, {} slots now", newly_assigned.len(), data.registry.len());
    }

    let ids = IdsArgument::decode(arguments.get("ids"))?.resolve(&data.registry);
    let request = TranslationRequest::new(decode_fields(arguments.get("fields"))?, ids);

    let unsupported = request.unsupported_fields();
    if !unsupported.is_empty() {
        warn!("[RPC] Unsupported fields requested: {}", unsupported.join(", "));
    }

    let mut torrents = Vec::with_capacity(request.ids.len());
    for id in &request.ids {
        let Some(hash) = data.registry.resolve(*id) else {
            continue;
        };
        let Some(item) = list.iter().find(|item| item.hash.eq_ignore_ascii_case(&hash)) else {
            debug!("[RPC] ID {id} ({hash}) is missing from the backend listing");
            continue;
        };

        // The torrent may be removed between the listing and these calls.
        let properties = tokio::try_join!(
            data.backend.properties_general(&hash),
            data.backend.properties_trackers(&hash),
            data.backend.properties_files(&hash),
        );
        let (general, trackers, files) = match properties {
            Ok(properties) => properties,
            Err(error) => {
                warn!("[RPC] Skipping ID {id} ({hash}): {error}");
                continue;
            }
        };

        let view = TorrentView {
            id: *id,
            list: item.clone(),
            general,
            trackers,
            files,
        };
        torrents.push(Value::Object(request.project(view.translate())));
    }

    let mut reply = Map::new();
    reply.insert(String::from("torrents"), Value::Array(torrents));
    Ok(reply)
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_torrent_action(data: &RpcServiceData, arguments: &Map<String, Value>, action: TorrentAction) -> Result<Map<String, Value>, RpcError>
{
    let targets = IdsArgument::decode(arguments.get("ids"))?.resolve_hashes(&data.registry);
    for (id, hash) in targets {
        debug!("[RPC] {action:?} torrent {id} ({hash})");
        match action {
            TorrentAction::Stop => data.backend.pause(&hash).await?,
            TorrentAction::Start => data.backend.resume(&hash).await?,
            TorrentAction::Verify => data.backend.recheck(&hash).await?,
        }
    }
    Ok(Map::new())
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_torrent_remove(data: &RpcServiceData, arguments: &Map<String, Value>) -> Result<Map<String, Value>, RpcError>
{
    let targets = IdsArgument::decode(arguments.get("ids"))?.resolve_hashes(&data.registry);
    let delete_files = FlagArgument::decode("delete-local-data", arguments.get("delete-local-data"))?.is_set();
    if targets.is_empty() {
        return Ok(Map::new());
    }

    let hashes: Vec<String> = targets.iter().map(|(_, hash)| hash.clone()).collect();
    data.backend.delete(&hashes, delete_files).await?;
    info!("[RPC] Removed {} torrents{}", hashes.len(), if delete_files { " with their data" } else { "" });

    for (id, _) in targets {
        data.registry.forget(id);
    }
    Ok(Map::new())
}

/// Only `files-wanted` and `files-unwanted` are applied; other settings are ignored.
#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_torrent_set(data: &RpcServiceData, arguments: &Map<String, Value>) -> Result<Map<String, Value>, RpcError>
{
    let wanted = decode_file_indices("files-wanted", arguments.get("files-wanted"))?;
    let unwanted = decode_file_indices("files-unwanted", arguments.get("files-unwanted"))?;
    if wanted.is_none() && unwanted.is_none() {
        debug!("[RPC] torrent-set without file selection, nothing to do");
        return Ok(Map::new());
    }

    let targets = IdsArgument::decode(arguments.get("ids"))?.resolve_hashes(&data.registry);
    let [(id, hash)] = targets.as_slice() else {
        warn!("[RPC] torrent-set addressed {} torrents", targets.len());
        return Err(RpcError::UnsupportedRequest(String::from("Unsupported torrent-set request")));
    };

    let mut priorities: BTreeMap<i64, i64> = BTreeMap::new();
    for file_id in wanted.unwrap_or_default() {
        priorities.insert(file_id, PRIORITY_NORMAL);
    }
    for file_id in unwanted.unwrap_or_default() {
        priorities.insert(file_id, PRIORITY_SKIP);
    }
    debug!("[RPC] New file priorities for torrent {id}: {priorities:?}");

    for (file_id, priority) in priorities {
        data.backend.set_file_priority(hash, file_id, priority).await?;
    }
    Ok(Map::new())
}

fn decode_fields(value: Option<&Value>) -> Result<Option<Vec<String>>, RpcError>
{
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(fields)) => fields.iter()
            .map(|field| field.as_str()
                .map(str::to_string)
                .ok_or_else(|| RpcError::invalid_argument("fields", "field names must be strings")))
            .collect::<Result<Vec<String>, RpcError>>()
            .map(Some),
        Some(_) => Err(RpcError::invalid_argument("fields", "expected an array of field names")),
    }
}

fn decode_file_indices(name: &str, value: Option<&Value>) -> Result<Option<Vec<i64>>, RpcError>
{
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(indices)) => indices.iter()
            .map(|index| index.as_i64().ok_or_else(|| RpcError::invalid_argument(name, "file indices must be integers")))
            .collect::<Result<Vec<i64>, RpcError>>()
            .map(Some),
        Some(_) => Err(RpcError::invalid_argument(name, "expected an array of file indices")),
    }
}
