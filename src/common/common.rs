use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::tracker::enums::tracker_error::TrackerError;

pub const MAX_QUERY_STRING_LENGTH: usize = 8192;

pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;

/// Splits a raw (still percent-encoded) query string into a map of lowercased keys to
/// their decoded byte values. Repeated keys keep every value in arrival order, which
/// scrape relies on for multiple `info_hash` parameters. A key without `=` is recorded
/// with an empty value so flags like `no_peer_id` can be detected by presence.
pub fn parse_query(query: Option<String>) -> Result<QueryMap, TrackerError> {
    let mut queries: QueryMap = HashMap::new();
    let Some(raw_query) = query else {
        return Ok(queries);
    };
    if raw_query.len() > MAX_QUERY_STRING_LENGTH {
        return Err(TrackerError::MalformedRequest(String::from("query string too long")));
    }

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = match value_data_raw {
            Some(value) => percent_encoding::percent_decode_str(value).collect::<Vec<u8>>(),
            None => vec![],
        };
        queries.entry(key_name).or_default().push(value_data);
    }

    Ok(queries)
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    for byte in data {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

pub(crate) fn hex_to_array(s: &str) -> Result<[u8; 20], binascii::ConvertError> {
    if s.len() != 40 {
        return Err(binascii::ConvertError::InvalidInputLength);
    }
    let mut result = [0u8; 20];
    for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
        let high = hex_to_nibble(chunk[0]);
        let low = hex_to_nibble(chunk[1]);
        if high == 0xFF || low == 0xFF {
            return Err(binascii::ConvertError::InvalidInput);
        }
        result[i] = (high << 4) | low;
    }
    Ok(result)
}

/// Current unix time in seconds. Clocks set before the epoch read as zero.
pub fn current_time() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = parse_log_level(config.log_level.as_str()).unwrap_or(log::LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
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
        .chain(std::io::stdout())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}
