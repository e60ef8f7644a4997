use std::collections::BTreeMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Splits an `application/x-www-form-urlencoded` style query into its values.
///
/// Keys are lower-cased, `+` decodes to a space and repeated keys keep every
/// value in order of appearance. Keys without `=` are kept with no values.
pub fn parse_query(query: &str) -> Result<BTreeMap<String, Vec<String>>, CustomError> {
    let mut queries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for query_item in query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        match query_item.split_once('=') {
            Some((key_name_raw, value_data_raw)) => {
                let key_name = query_decode(key_name_raw).to_lowercase();
                if key_name.is_empty() {
                    return Err(CustomError::new("query contains an empty key"));
                }
                queries.entry(key_name).or_default().push(query_decode(value_data_raw));
            }
            None => {
                let key_name = query_decode(query_item).to_lowercase();
                if !key_name.is_empty() {
                    queries.entry(key_name).or_default();
                }
            }
        }
    }

    Ok(queries)
}

fn query_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
