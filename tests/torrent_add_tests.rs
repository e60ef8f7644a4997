mod common;

use serde_json::{json, Map, Value};
use transmission_qbt_gateway::metainfo::structs::metainfo::Metainfo;
use transmission_qbt_gateway::rpc::errors::RpcError;
use transmission_qbt_gateway::rpc::rpc::rpc_dispatch;
use transmission_qbt_gateway::rpc::rpc_torrent_add::rpc_torrent_add;
use transmission_qbt_gateway::rpc::structs::rpc_request::RpcRequest;

fn arguments(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("arguments must be an object")
}

#[tokio::test]
async fn test_add_duplicate_magnet_skips_submission() {
    let hash = common::random_info_hash();
    let backend = common::FakeBackend::with_torrents(vec![common::torrent(&hash, "known", "uploading")]);
    let data = common::create_service_data(backend.clone(), false);

    let reply = rpc_torrent_add(&data, &arguments(json!({
        "filename": common::magnet(&hash.to_uppercase(), "Other+Name")
    }))).await.unwrap();

    assert_eq!(reply["torrent-duplicate"]["id"], json!(1));
    assert_eq!(reply["torrent-duplicate"]["hashString"], json!(hash));
    assert_eq!(reply["torrent-duplicate"]["name"], json!("Other Name"));
    assert!(backend.calls().is_empty(), "nothing may be submitted for a duplicate");
}

#[tokio::test]
async fn test_add_magnet_resumes_new_torrent() {
    let backend = common::FakeBackend::with_torrents(vec![common::torrent(&common::random_info_hash(), "old", "uploading")]);
    let data = common::create_service_data(backend.clone(), false);
    let hash = common::random_info_hash();
    let link = common::magnet(&hash, "Example+File");

    let reply = rpc_torrent_add(&data, &arguments(json!({"filename": link, "download-dir": "/srv/media"}))).await.unwrap();

    assert_eq!(reply["torrent-added"], json!({"id": 2, "name": "Example File", "hashString": hash}));
    assert_eq!(backend.calls(), vec![format!("download:{link}:/srv/media"), format!("resume:{hash}")]);
}

#[tokio::test]
async fn test_add_paused_pauses_new_torrent() {
    let backend = common::FakeBackend::new();
    let data = common::create_service_data(backend.clone(), false);
    let hash = common::random_info_hash();

    let reply = rpc_torrent_add(&data, &arguments(json!({
        "filename": common::magnet(&hash, "paused"),
        "paused": 1
    }))).await.unwrap();

    assert_eq!(reply["torrent-added"]["id"], json!(1));
    assert_eq!(backend.calls().last(), Some(&format!("pause:{hash}")));
}

#[tokio::test]
async fn test_add_metainfo_uploads_bytes() {
    let backend = common::FakeBackend::new();
    let data = common::create_service_data(backend.clone(), false);
    let expected = Metainfo::from_bytes(&common::torrent_file("ubuntu.iso")).unwrap();

    let reply = rpc_torrent_add(&data, &arguments(json!({
        "metainfo": common::torrent_file_base64("ubuntu.iso"),
        "download-dir": ""
    }))).await.unwrap();

    assert_eq!(reply["torrent-added"]["name"], json!("ubuntu.iso"));
    assert_eq!(reply["torrent-added"]["hashString"], json!(expected.info_hash));
    assert_eq!(backend.calls(), vec![
        format!("upload:{}:", expected.info_hash),
        format!("resume:{}", expected.info_hash),
    ]);
}

#[tokio::test]
async fn test_add_url_fetches_with_cookies() {
    let backend = common::FakeBackend::new();
    backend.state.lock().fetch_payload = common::torrent_file("remote.bin");
    let data = common::create_service_data(backend.clone(), false);
    let expected = Metainfo::from_bytes(&common::torrent_file("remote.bin")).unwrap();

    let reply = rpc_torrent_add(&data, &arguments(json!({
        "filename": "https://tracker.example/get/42.torrent",
        "cookies": "uid=1; pass=abc"
    }))).await.unwrap();

    assert_eq!(reply["torrent-added"]["hashString"], json!(expected.info_hash));
    assert_eq!(backend.calls()[0], "fetch:https://tracker.example/get/42.torrent:uid=1; pass=abc");
    assert_eq!(backend.calls()[1], format!("upload:{}:", expected.info_hash));
}

#[tokio::test]
async fn test_add_times_out_when_never_indexed() {
    let backend = common::FakeBackend::new();
    backend.state.lock().index_submissions = false;
    let data = common::create_service_data(backend.clone(), false);
    let hash = common::random_info_hash();

    let result = rpc_torrent_add(&data, &arguments(json!({"filename": common::magnet(&hash, "ghost")}))).await;
    assert!(matches!(result, Err(RpcError::AddTimeout)));
    assert_eq!(backend.calls().len(), 1, "no pause or resume after a timeout");

    let response = rpc_dispatch(&data, RpcRequest {
        method: String::from("torrent-add"),
        arguments: json!({"filename": common::magnet(&hash, "ghost")}),
        tag: Some(json!(5)),
    }).await;
    let response = serde_json::to_value(response).unwrap();
    assert_eq!(response, json!({"result": "Torrent-add timeout", "arguments": {}, "tag": 5}));
}

#[tokio::test]
async fn test_add_rejects_bad_metainfo() {
    let backend = common::FakeBackend::new();
    let data = common::create_service_data(backend.clone(), false);

    let result = rpc_torrent_add(&data, &arguments(json!({"metainfo": "not base64 at all!"}))).await;
    assert!(matches!(result, Err(RpcError::Metainfo(_))));

    let result = rpc_torrent_add(&data, &arguments(json!({}))).await;
    assert!(matches!(result, Err(RpcError::MalformedRequest(_))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_add_is_visible_to_torrent_get() {
    let backend = common::FakeBackend::new();
    let data = common::create_service_data(backend.clone(), false);
    let hash = common::random_info_hash();
    rpc_torrent_add(&data, &arguments(json!({"filename": common::magnet(&hash, "fresh")}))).await.unwrap();

    let response = rpc_dispatch(&data, RpcRequest {
        method: String::from("torrent-get"),
        arguments: json!({"fields": ["id", "hashString", "name"]}),
        tag: None,
    }).await;
    let response = serde_json::to_value(response).unwrap();
    assert_eq!(response["arguments"]["torrents"], json!([{"id": 1, "hashString": hash, "name": "fresh"}]));
}

#[tokio::test]
async fn test_add_rejects_malformed_magnet_hash() {
    let backend = common::FakeBackend::new();
    let data = common::create_service_data(backend.clone(), false);

    let result = rpc_torrent_add(&data, &arguments(json!({"filename": "magnet:?xt=urn:btih:zz&dn=broken"}))).await;
    assert!(matches!(result, Err(RpcError::Metainfo(_))));
    assert!(backend.calls().is_empty(), "a malformed magnet must not reach the backend");
}
