use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use crate::config::structs::rpc_server_config::RpcServerConfig;
use crate::rpc::enums::torrent_action::TorrentAction;
use crate::rpc::errors::RpcError;
use crate::rpc::rpc_session::{rpc_free_space, rpc_session_get, rpc_session_stats};
use crate::rpc::rpc_torrent_add::rpc_torrent_add;
use crate::rpc::rpc_torrents::{rpc_torrent_action, rpc_torrent_get, rpc_torrent_remove, rpc_torrent_set};
use crate::rpc::structs::rpc_request::RpcRequest;
use crate::rpc::structs::rpc_response::RpcResponse;
use crate::rpc::structs::rpc_service_data::RpcServiceData;

pub const RPC_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
pub const UNKNOWN_METHOD_RESULT: &str = "method name not recognized";

pub fn rpc_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["POST"])
        .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn rpc_service_routes(data: Arc<RpcServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/transmission/rpc").route(web::post().to(rpc_service_request)));
        cfg.service(web::resource("/rpc").route(web::post().to(rpc_service_request)));
    })
}

pub async fn rpc_service(
    addr: SocketAddr,
    data: Arc<RpcServiceData>,
    config: RpcServerConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    info!("[RPC] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(rpc_service_cors())
            .configure(rpc_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(skip(request, body, data), level = "debug")]
pub async fn rpc_service_request(request: HttpRequest, body: web::Bytes, data: Data<Arc<RpcServiceData>>) -> HttpResponse
{
    if data.auth.required {
        let header = request.headers()
            .get(http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if !data.auth.authenticate(data.backend.as_ref(), header).await {
            return HttpResponse::Unauthorized().finish();
        }
    }

    debug!("[RPC] Got request {}", String::from_utf8_lossy(&body));
    let response = match serde_json::from_slice::<RpcRequest>(&body) {
        Ok(rpc_request) => rpc_dispatch(&data, rpc_request).await,
        Err(error) => {
            warn!("[RPC] Malformed request: {error}");
            RpcResponse::failure(RpcError::MalformedRequest(error.to_string()).to_string(), None)
        }
    };

    HttpResponse::Ok().content_type(RPC_CONTENT_TYPE).json(response)
}

/// Runs one RPC call and wraps its outcome in the reply envelope.
pub async fn rpc_dispatch(data: &RpcServiceData, request: RpcRequest) -> RpcResponse
{
    let RpcRequest { method, arguments, tag } = request;
    let arguments = match arguments {
        Value::Null => Map::new(),
        Value::Object(arguments) => arguments,
        _ => {
            let error = RpcError::MalformedRequest(String::from("arguments must be an object"));
            warn!("[RPC] {method}: {error}");
            return RpcResponse::failure(error.to_string(), tag);
        }
    };

    let result = match method.as_str() {
        "session-get" => rpc_session_get(data).await,
        "session-stats" => rpc_session_stats(data).await,
        "free-space" => rpc_free_space(&arguments).await,
        "torrent-get" => rpc_torrent_get(data, &arguments).await,
        "torrent-stop" => rpc_torrent_action(data, &arguments, TorrentAction::Stop).await,
        "torrent-start" | "torrent-start-now" => rpc_torrent_action(data, &arguments, TorrentAction::Start).await,
        "torrent-verify" => rpc_torrent_action(data, &arguments, TorrentAction::Verify).await,
        "torrent-remove" => rpc_torrent_remove(data, &arguments).await,
        "torrent-add" => rpc_torrent_add(data, &arguments).await,
        "torrent-set" => rpc_torrent_set(data, &arguments).await,
        _ => {
            warn!("[RPC] Unknown method: {method}");
            return RpcResponse::failure(String::from(UNKNOWN_METHOD_RESULT), tag);
        }
    };

    match result {
        Ok(arguments) => RpcResponse::success(arguments, tag),
        Err(error) => {
            if let RpcError::Backend(backend_error) = &error {
                sentry::capture_error(backend_error);
            }
            error!("[RPC] {method} failed: {error}");
            RpcResponse::failure(error.to_string(), tag)
        }
    }
}
