use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::backend_config::BackendConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::rpc_server_config::RpcServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::torrent_add_config::TorrentAddConfig;
use crate::structs::Cli;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            rpc_server: RpcServerConfig {
                bind_address: String::from("0.0.0.0:9091"),
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
                keep_alive: 60,
                request_timeout: 30,
                disconnect_timeout: 30,
            },
            backend: BackendConfig {
                address: String::from("http://localhost:8080/"),
                request_timeout: 15,
            },
            torrent_add: TorrentAddConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize the default configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new("created the config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create the config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    /// Applies command line overrides on top of the loaded file.
    pub fn apply_cli(&mut self, args: &Cli) {
        if args.verbose {
            self.log_level = String::from("debug");
        }
        if let Some(api_addr) = &args.api_addr {
            self.backend.address = api_addr.clone();
        }
        if let Some(port) = args.port {
            let host = match self.rpc_server.bind_address.rsplit_once(':') {
                Some((host, _)) => host.to_string(),
                None => String::from("0.0.0.0"),
            };
            self.rpc_server.bind_address = format!("{host}:{port}");
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = vec![
            ("[LOG] Level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("[BACKEND] Address", self.backend.address.clone(), r"^https?://[^\s/]+(/.*)?$"),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if self.rpc_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[RPC] Bind address \"{}\" is not a socket address", self.rpc_server.bind_address
            )));
        }
        if self.rpc_server.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from(
                "[RPC] threads must be at least 1"
            )));
        }
        if self.torrent_add.poll_attempts == 0 {
            return Err(ConfigurationError::ValidationError(String::from(
                "[TORRENT ADD] poll_attempts must be at least 1"
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
