//! Conversion of raw command-line text into typed setting values.
//!
//! The sentinels `NONE` and `DEFAULT` are recognised for every type before any
//! type-specific parsing happens. After that, a handful of composite types have
//! dedicated parsers; everything else goes through [`parse_generic`].

use std::sync::LazyLock;

use regex::Regex;

use super::{
    SettingState, SettingValue, ValueError, ValueShape, ValueType,
    types::{LocalIpAddress, MsrpRelayAddress, PortRange, Resolution, SipProxyAddress, Transport},
};

/// Token that clears a setting.
pub const UNSET_TOKEN: &str = "NONE";

/// Token that reverts a setting to its default.
pub const DEFAULT_TOKEN: &str = "DEFAULT";

/// Token accepted by local address settings for autodetection.
pub const AUTO_TOKEN: &str = "auto";

#[allow(clippy::expect_used)]
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("list separator pattern is valid"));

type ValueParser = fn(ValueType, &str) -> Result<SettingValue, ValueError>;

/// Parses `raw` as a value of `value_type`.
///
/// # Errors
/// Returns the `ValueError` of the selected parser; errors always carry the
/// offending raw text.
pub fn parse(value_type: ValueType, raw: &str) -> Result<SettingState, ValueError> {
    match raw {
        UNSET_TOKEN => Ok(SettingState::Unset),
        DEFAULT_TOKEN => Ok(SettingState::UseDefault),
        _ => parser_for(value_type)(value_type, raw).map(SettingState::Value),
    }
}

fn parser_for(value_type: ValueType) -> ValueParser {
    match value_type {
        ValueType::LocalIpAddress => parse_local_ip_address,
        ValueType::MsrpRelayAddress | ValueType::SipProxyAddress => parse_relay_address,
        ValueType::PortRange => parse_port_range,
        ValueType::Resolution => parse_resolution,
        ValueType::String
        | ValueType::Boolean
        | ValueType::StringList
        | ValueType::Integer
        | ValueType::Port
        | ValueType::TransportList => parse_generic,
    }
}

/// Fallback parser driven by the type's [`ValueShape`].
///
/// # Errors
/// Returns `ValueError` when the constructor rejects the text.
pub fn parse_generic(value_type: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    match value_type.shape() {
        ValueShape::Sequence => construct_sequence(value_type, split_list(raw)),
        ValueShape::Flag => Ok(SettingValue::Boolean(raw.eq_ignore_ascii_case("true"))),
        ValueShape::Scalar => construct_scalar(value_type, raw),
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    LIST_SEPARATOR.split(trimmed).collect()
}

fn construct_sequence(value_type: ValueType, items: Vec<&str>) -> Result<SettingValue, ValueError> {
    match value_type {
        ValueType::TransportList => items
            .into_iter()
            .map(str::parse::<Transport>)
            .collect::<Result<Vec<_>, _>>()
            .map(SettingValue::TransportList),
        _ => Ok(SettingValue::StringList(
            items.into_iter().map(str::to_string).collect(),
        )),
    }
}

fn construct_scalar(value_type: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    match value_type {
        ValueType::Integer => raw
            .parse::<u32>()
            .map(SettingValue::Integer)
            .map_err(|e| ValueError::invalid("integer", raw, e.to_string())),
        ValueType::Port => raw
            .parse::<u16>()
            .map(SettingValue::Port)
            .map_err(|e| ValueError::invalid("port", raw, e.to_string())),
        _ => Ok(SettingValue::String(raw.to_string())),
    }
}

fn parse_local_ip_address(_: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    let address = if raw == AUTO_TOKEN {
        LocalIpAddress::Auto
    } else {
        LocalIpAddress::new(raw)?
    };
    Ok(SettingValue::LocalIpAddress(address))
}

/// `host`, `host:port` or `transport:host:port`.
fn parse_relay_address(value_type: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    let components: Vec<&str> = raw.split(':').collect();
    let (host, port, transport) = match components.as_slice() {
        [host] => (*host, None, None),
        [host, port] => (*host, Some(*port), None),
        [transport, host, port] => (*host, Some(*port), Some(*transport)),
        _ => return Err(ValueError::illegal("address", raw)),
    };

    match value_type {
        ValueType::MsrpRelayAddress => {
            MsrpRelayAddress::new(host, port, transport).map(SettingValue::MsrpRelayAddress)
        }
        _ => SipProxyAddress::new(host, port, transport).map(SettingValue::SipProxyAddress),
    }
}

fn parse_port_range(_: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    let (low, high) = raw
        .split_once(':')
        .ok_or_else(|| ValueError::illegal("port range", raw))?;
    PortRange::new(low, high).map(SettingValue::PortRange)
}

fn parse_resolution(_: ValueType, raw: &str) -> Result<SettingValue, ValueError> {
    let (width, height) = raw
        .split_once('x')
        .ok_or_else(|| ValueError::illegal("resolution", raw))?;
    Resolution::new(width, height).map(SettingValue::Resolution)
}
