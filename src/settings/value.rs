use std::fmt;

use super::{
    ValueError,
    types::{LocalIpAddress, MsrpRelayAddress, PortRange, Resolution, SipProxyAddress, Transport},
};

/// Declared type of a leaf setting.
///
/// This is the closed set of value kinds the settings tree understands. Every
/// leaf declares exactly one of these in its node's schema, and the parser
/// registry dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Free-form text.
    String,
    /// `true`/`false` flag.
    Boolean,
    /// Ordered list of free-form strings.
    StringList,
    /// Non-negative integer.
    Integer,
    /// Network port number.
    Port,
    /// Ordered list of SIP transports.
    TransportList,
    /// Local address to bind to, or autodetection.
    LocalIpAddress,
    /// MSRP relay endpoint.
    MsrpRelayAddress,
    /// Outbound SIP proxy endpoint.
    SipProxyAddress,
    /// Inclusive range of ports.
    PortRange,
    /// Video resolution.
    Resolution,
}

/// How the generic parser treats the raw text of a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Comma separated sequence.
    Sequence,
    /// Case-insensitive `true`, anything else is false.
    Flag,
    /// Raw text handed to the constructor as is.
    Scalar,
}

impl ValueType {
    /// Name shown in error messages and listings.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::StringList => "string list",
            ValueType::Integer => "integer",
            ValueType::Port => "port",
            ValueType::TransportList => "transport list",
            ValueType::LocalIpAddress => "local IP address",
            ValueType::MsrpRelayAddress => "MSRP relay address",
            ValueType::SipProxyAddress => "SIP proxy address",
            ValueType::PortRange => "port range",
            ValueType::Resolution => "resolution",
        }
    }

    /// Shape of the type as seen by the generic parser.
    pub fn shape(self) -> ValueShape {
        match self {
            ValueType::StringList | ValueType::TransportList => ValueShape::Sequence,
            ValueType::Boolean => ValueShape::Flag,
            _ => ValueShape::Scalar,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete, validated value of one of the [`ValueType`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// See [`ValueType::String`].
    String(String),
    /// See [`ValueType::Boolean`].
    Boolean(bool),
    /// See [`ValueType::StringList`].
    StringList(Vec<String>),
    /// See [`ValueType::Integer`].
    Integer(u32),
    /// See [`ValueType::Port`].
    Port(u16),
    /// See [`ValueType::TransportList`].
    TransportList(Vec<Transport>),
    /// See [`ValueType::LocalIpAddress`].
    LocalIpAddress(LocalIpAddress),
    /// See [`ValueType::MsrpRelayAddress`].
    MsrpRelayAddress(MsrpRelayAddress),
    /// See [`ValueType::SipProxyAddress`].
    SipProxyAddress(SipProxyAddress),
    /// See [`ValueType::PortRange`].
    PortRange(PortRange),
    /// See [`ValueType::Resolution`].
    Resolution(Resolution),
}

impl SettingValue {
    /// The type this value belongs to.
    pub fn value_type(&self) -> ValueType {
        match self {
            SettingValue::String(_) => ValueType::String,
            SettingValue::Boolean(_) => ValueType::Boolean,
            SettingValue::StringList(_) => ValueType::StringList,
            SettingValue::Integer(_) => ValueType::Integer,
            SettingValue::Port(_) => ValueType::Port,
            SettingValue::TransportList(_) => ValueType::TransportList,
            SettingValue::LocalIpAddress(_) => ValueType::LocalIpAddress,
            SettingValue::MsrpRelayAddress(_) => ValueType::MsrpRelayAddress,
            SettingValue::SipProxyAddress(_) => ValueType::SipProxyAddress,
            SettingValue::PortRange(_) => ValueType::PortRange,
            SettingValue::Resolution(_) => ValueType::Resolution,
        }
    }

    /// Shorthand for a [`SettingValue::String`].
    pub fn text(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }

    /// Shorthand for a [`SettingValue::StringList`].
    pub fn list(values: &[&str]) -> Self {
        SettingValue::StringList(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Canonical text form, which the parser registry accepts back.
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::String(s) => f.write_str(s),
            SettingValue::Boolean(b) => write!(f, "{b}"),
            SettingValue::StringList(items) => f.write_str(&items.join(", ")),
            SettingValue::Integer(i) => write!(f, "{i}"),
            SettingValue::Port(p) => write!(f, "{p}"),
            SettingValue::TransportList(items) => {
                let names: Vec<&str> = items.iter().map(|t| t.as_str()).collect();
                f.write_str(&names.join(", "))
            }
            SettingValue::LocalIpAddress(addr) => write!(f, "{addr}"),
            SettingValue::MsrpRelayAddress(addr) => write!(f, "{addr}"),
            SettingValue::SipProxyAddress(addr) => write!(f, "{addr}"),
            SettingValue::PortRange(range) => write!(f, "{range}"),
            SettingValue::Resolution(res) => write!(f, "{res}"),
        }
    }
}

/// Result of parsing a raw command-line value.
///
/// `NONE` and `DEFAULT` are accepted for every type and map to the two
/// sentinel variants; anything else must parse into a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingState {
    /// Explicitly cleared.
    Unset,
    /// Revert to the leaf's own default.
    UseDefault,
    /// An explicit value.
    Value(SettingValue),
}

/// A single typed leaf in a settings node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    value_type: ValueType,
    default: Option<SettingValue>,
    state: SettingState,
}

impl Setting {
    /// Creates a leaf that currently follows its default.
    pub fn new(value_type: ValueType, default: Option<SettingValue>) -> Self {
        Self {
            value_type,
            default,
            state: SettingState::UseDefault,
        }
    }

    /// Declared type of this leaf.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Raw state, including the sentinels.
    pub fn state(&self) -> &SettingState {
        &self.state
    }

    /// Default this leaf reverts to on `DEFAULT`.
    pub fn default_value(&self) -> Option<&SettingValue> {
        self.default.as_ref()
    }

    /// The value in effect after resolving `UseDefault`.
    pub fn value(&self) -> Option<&SettingValue> {
        match &self.state {
            SettingState::Unset => None,
            SettingState::UseDefault => self.default.as_ref(),
            SettingState::Value(value) => Some(value),
        }
    }

    /// Effective value as a flag; unset or non-boolean leaves read as false.
    pub fn as_bool(&self) -> bool {
        matches!(self.value(), Some(SettingValue::Boolean(true)))
    }

    /// Effective value as text, if it is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self.value() {
            Some(SettingValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Replaces the state.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` if the value belongs to another type.
    pub fn assign(&mut self, state: SettingState) -> Result<(), ValueError> {
        if let SettingState::Value(value) = &state {
            let actual = value.value_type();
            if actual != self.value_type {
                return Err(ValueError::TypeMismatch {
                    expected: self.value_type,
                    actual,
                });
            }
        }

        self.state = state;
        Ok(())
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("None"),
        }
    }
}
