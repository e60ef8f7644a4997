use serde_json::{json, Map, Value};
use crate::rpc::errors::RpcError;
use crate::rpc::structs::rpc_service_data::RpcServiceData;
use crate::translator::structs::status_mapping::StatusMapping;
use crate::translator::templates::{session_get_base, session_stats_template, FREE_SPACE_BYTES, TRANSMISSION_VERSION};

#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_session_get(data: &RpcServiceData) -> Result<Map<String, Value>, RpcError>
{
    let mut session = session_get_base();

    let preferences = data.backend.preferences().await?;
    session.insert(String::from("download-dir"), json!(preferences.save_path));

    let version = data.backend.version().await?;
    session.insert(String::from("version"), json!(format!("{TRANSMISSION_VERSION} (really qBittorrent {version})")));

    Ok(session)
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn rpc_session_stats(data: &RpcServiceData) -> Result<Map<String, Value>, RpcError>
{
    let mut session = session_stats_template();

    let info = data.backend.transfer_info().await?;
    session.insert(String::from("downloadSpeed"), json!(info.dl_info_speed));
    session.insert(String::from("uploadSpeed"), json!(info.up_info_speed));

    // The backend only counts the current session.
    let mut current_stats = match session.get("current-stats") {
        Some(Value::Object(stats)) => stats.clone(),
        _ => Map::new(),
    };
    current_stats.insert(String::from("downloadedBytes"), json!(info.dl_info_data));
    current_stats.insert(String::from("uploadedBytes"), json!(info.up_info_data));
    session.insert(String::from("current-stats"), Value::Object(current_stats.clone()));
    session.insert(String::from("cumulative-stats"), Value::Object(current_stats));

    let list = data.backend.torrent_list().await?;
    let mappings: Vec<StatusMapping> = list.iter().map(|item| StatusMapping::from_state(&item.state)).collect();
    session.insert(String::from("torrentCount"), json!(mappings.len()));
    session.insert(String::from("activeTorrentCount"), json!(mappings.iter().filter(|mapping| mapping.is_active()).count()));
    session.insert(String::from("pausedTorrentCount"), json!(mappings.iter().filter(|mapping| mapping.is_paused()).count()));

    Ok(session)
}

#[tracing::instrument(level = "debug")]
pub async fn rpc_free_space(arguments: &Map<String, Value>) -> Result<Map<String, Value>, RpcError>
{
    let path = arguments.get("path").cloned().unwrap_or(Value::Null);
    let mut reply = Map::new();
    reply.insert(String::from("path"), path);
    reply.insert(String::from("size-bytes"), json!(FREE_SPACE_BYTES));
    Ok(reply)
}
