use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use transmission_qbt_gateway::backend::structs::backend_client::BackendClient;
use transmission_qbt_gateway::backend::traits::torrent_backend::TorrentBackend;
use transmission_qbt_gateway::common::common::setup_logging;
use transmission_qbt_gateway::config::structs::configuration::Configuration;
use transmission_qbt_gateway::registry::structs::identity_registry::IdentityRegistry;
use transmission_qbt_gateway::rpc::rpc::rpc_service;
use transmission_qbt_gateway::rpc::structs::auth_state::AuthState;
use transmission_qbt_gateway::rpc::structs::rpc_service_data::RpcServiceData;
use transmission_qbt_gateway::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(args.create_config, &args.config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE] {error}");
        exit(101);
    }
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let backend = match BackendClient::new(&config.backend) {
                Ok(backend) => Arc::new(backend),
                Err(error) => {
                    error!("[BOOT] Unable to create the backend client: {error}");
                    exit(1);
                }
            };

            info!("[BOOT] Checking backend at {}", config.backend.address);
            let auth_required = match backend.auth_required().await {
                Ok(required) => required,
                Err(error) => {
                    sentry::capture_error(&error);
                    error!("[BOOT] Backend at {} is not reachable: {error}", config.backend.address);
                    exit(1);
                }
            };

            let data = Arc::new(RpcServiceData {
                backend,
                registry: Arc::new(IdentityRegistry::new()),
                auth: AuthState::new(auth_required),
                torrent_add: config.torrent_add,
            });

            let address: SocketAddr = match config.rpc_server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[BOOT] Invalid bind address {}: {error}", config.rpc_server.bind_address);
                    exit(1);
                }
            };
            let (handle, server) = rpc_service(address, data, config.rpc_server.clone()).await?;
            let server_task = tokio::spawn(server);

            let tokio_shutdown = Shutdown::new().map_err(|error| std::io::Error::other(error.to_string()))?;

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    info!("Server shutting down completed");
                    Ok(())
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(error)) => {
                            sentry::capture_error(&error);
                            error!("[RPC] Server stopped: {error}");
                            Err(error)
                        }
                        Err(error) => {
                            error!("[RPC] Server task failed: {error}");
                            Err(std::io::Error::other(error.to_string()))
                        }
                    }
                }
            }
        })
}
