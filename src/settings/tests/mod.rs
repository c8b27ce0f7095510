//! Unit tests for the settings engine.
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic)]

use std::{cell::Cell, fmt};

use crate::{
    settings::{
        AssignError, KeyOutcome, SettingState, SettingValue, SettingsNode, SettingsRoot,
        ValueError, ValueType, assign, parser,
        path::{self, PathLookup},
        types::{LocalIpAddress, PortRange, Resolution, Transport},
    },
    settings_group,
};

settings_group! {
    struct Inner {
        leaves: {
            c: Integer = Some(SettingValue::Integer(1)),
            label: String = None,
        },
        groups: {},
    }
}

settings_group! {
    struct Middle {
        leaves: {
            flag: Boolean = Some(SettingValue::Boolean(false)),
        },
        groups: {
            b: Inner,
        },
    }
}

settings_group! {
    struct Fixture {
        leaves: {
            name: String = Some(SettingValue::text("fixture")),
            transports: TransportList = Some(SettingValue::TransportList(vec![Transport::Udp])),
        },
        groups: {
            a: Middle,
        },
    }
}

struct CountingRoot {
    tree: Fixture,
    saves: Cell<usize>,
    fail_save: bool,
}

impl CountingRoot {
    fn new() -> Self {
        Self {
            tree: Fixture::default(),
            saves: Cell::new(0),
            fail_save: false,
        }
    }
}

struct SaveFailed;

impl fmt::Display for SaveFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl SettingsRoot for CountingRoot {
    type Error = SaveFailed;

    fn node_mut(&mut self) -> &mut dyn SettingsNode {
        &mut self.tree
    }

    fn save(&self) -> Result<(), SaveFailed> {
        self.saves.set(self.saves.get() + 1);
        if self.fail_save { Err(SaveFailed) } else { Ok(()) }
    }
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn parsed(value_type: ValueType, raw: &str) -> SettingValue {
    match parser::parse(value_type, raw) {
        Ok(SettingState::Value(value)) => value,
        other => panic!("expected a value for {raw:?}, got {other:?}"),
    }
}

const ALL_TYPES: [ValueType; 11] = [
    ValueType::String,
    ValueType::Boolean,
    ValueType::StringList,
    ValueType::Integer,
    ValueType::Port,
    ValueType::TransportList,
    ValueType::LocalIpAddress,
    ValueType::MsrpRelayAddress,
    ValueType::SipProxyAddress,
    ValueType::PortRange,
    ValueType::Resolution,
];

#[test]
fn sentinels_are_recognised_for_every_type() {
    for value_type in ALL_TYPES {
        assert_eq!(parser::parse(value_type, "NONE"), Ok(SettingState::Unset));
        assert_eq!(parser::parse(value_type, "DEFAULT"), Ok(SettingState::UseDefault));
    }
}

#[test]
fn sentinels_are_case_sensitive() {
    assert_eq!(
        parsed(ValueType::String, "none"),
        SettingValue::text("none")
    );
}

#[test]
fn boolean_accepts_true_in_any_case() {
    assert_eq!(parsed(ValueType::Boolean, "TrUe"), SettingValue::Boolean(true));
    assert_eq!(parsed(ValueType::Boolean, "true"), SettingValue::Boolean(true));
}

#[test]
fn boolean_treats_anything_else_as_false() {
    for raw in ["false", "yes", "1", ""] {
        assert_eq!(parsed(ValueType::Boolean, raw), SettingValue::Boolean(false));
    }
}

#[test]
fn list_splits_on_commas_and_trims_whitespace() {
    assert_eq!(
        parsed(ValueType::StringList, "a, b ,c"),
        SettingValue::list(&["a", "b", "c"])
    );
}

#[test]
fn empty_list_text_is_an_empty_list() {
    assert_eq!(parsed(ValueType::StringList, ""), SettingValue::list(&[]));
    assert_eq!(parsed(ValueType::StringList, "   "), SettingValue::list(&[]));
}

#[test]
fn transport_list_is_case_insensitive_and_ordered() {
    assert_eq!(
        parsed(ValueType::TransportList, "TLS, tcp,udp"),
        SettingValue::TransportList(vec![Transport::Tls, Transport::Tcp, Transport::Udp])
    );
}

#[test]
fn transport_list_rejects_unknown_transport() {
    assert!(parser::parse(ValueType::TransportList, "udp, sctp").is_err());
}

#[test]
fn integer_rejects_non_numeric_text() {
    let result = parser::parse(ValueType::Integer, "abc");
    assert!(matches!(result, Err(ValueError::Invalid { kind: "integer", .. })));
}

#[test]
fn port_rejects_out_of_range_number() {
    assert_eq!(parsed(ValueType::Port, "5061"), SettingValue::Port(5061));
    assert!(parser::parse(ValueType::Port, "70000").is_err());
}

#[test]
fn local_ip_address_accepts_auto_and_literals() {
    assert_eq!(
        parsed(ValueType::LocalIpAddress, "auto"),
        SettingValue::LocalIpAddress(LocalIpAddress::Auto)
    );
    assert_eq!(
        parsed(ValueType::LocalIpAddress, "10.0.0.1").to_string(),
        "10.0.0.1"
    );
    assert!(parser::parse(ValueType::LocalIpAddress, "ten.zero").is_err());
}

#[test]
fn relay_address_host_only_uses_defaults() {
    let SettingValue::SipProxyAddress(proxy) = parsed(ValueType::SipProxyAddress, "proxy.example.com")
    else {
        panic!("expected a proxy address");
    };
    assert_eq!(proxy.host, "proxy.example.com");
    assert_eq!(proxy.port, 5060);
    assert_eq!(proxy.transport, Transport::Udp);
}

#[test]
fn relay_address_host_and_port() {
    let SettingValue::MsrpRelayAddress(relay) = parsed(ValueType::MsrpRelayAddress, "relay.example.com:2856")
    else {
        panic!("expected a relay address");
    };
    assert_eq!(relay.host, "relay.example.com");
    assert_eq!(relay.port, 2856);
    assert_eq!(relay.transport, Transport::Tls);
}

#[test]
fn relay_address_with_transport() {
    assert_eq!(
        parsed(ValueType::SipProxyAddress, "tcp:proxy.example.com:5080").to_string(),
        "tcp:proxy.example.com:5080"
    );
}

#[test]
fn relay_address_with_four_components_is_illegal() {
    let result = parser::parse(ValueType::SipProxyAddress, "tcp:a:b:5060");
    assert_eq!(
        result,
        Err(ValueError::Illegal {
            kind: "address",
            value: "tcp:a:b:5060".to_string()
        })
    );
}

#[test]
fn msrp_relay_rejects_udp() {
    assert!(parser::parse(ValueType::MsrpRelayAddress, "udp:relay.example.com:2855").is_err());
}

#[test]
fn port_range_needs_separator_and_ordering() {
    assert_eq!(
        parsed(ValueType::PortRange, "40000:40100"),
        SettingValue::PortRange(PortRange { low: 40000, high: 40100 })
    );
    assert!(matches!(
        parser::parse(ValueType::PortRange, "40000"),
        Err(ValueError::Illegal { kind: "port range", .. })
    ));
    assert!(parser::parse(ValueType::PortRange, "40100:40000").is_err());
}

#[test]
fn port_range_ordering_error_keeps_raw_text() {
    match parser::parse(ValueType::PortRange, "09:01") {
        Err(ValueError::Invalid { value, .. }) => assert_eq!(value, "09:01"),
        other => panic!("expected an ordering error, got {other:?}"),
    }
}

#[test]
fn resolution_parses_width_and_height() {
    assert_eq!(
        parsed(ValueType::Resolution, "640x480"),
        SettingValue::Resolution(Resolution { width: 640, height: 480 })
    );
    assert!(parser::parse(ValueType::Resolution, "640*480").is_err());
    assert!(parser::parse(ValueType::Resolution, "0x480").is_err());
}

#[test]
fn canonical_text_parses_back_to_the_same_value() {
    let samples = [
        (ValueType::TransportList, "tls, udp"),
        (ValueType::SipProxyAddress, "tls:sip.example.com:5061"),
        (ValueType::PortRange, "1000:2000"),
        (ValueType::Resolution, "1920x1080"),
    ];

    for (value_type, raw) in samples {
        let value = parsed(value_type, raw);
        assert_eq!(parsed(value_type, &value.to_string()), value);
    }
}

#[test]
fn setting_resolves_default_and_unset() {
    let mut tree = Fixture::default();
    assert_eq!(tree.name.to_string(), "fixture");
    assert_eq!(tree.name.state(), &SettingState::UseDefault);

    tree.name.assign(SettingState::Unset).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tree.name.value(), None);
    assert_eq!(tree.name.to_string(), "None");

    tree.name
        .assign(SettingState::UseDefault)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tree.name.as_str(), Some("fixture"));
}

#[test]
fn setting_rejects_value_of_another_type() {
    let mut tree = Fixture::default();
    let result = tree.name.assign(SettingState::Value(SettingValue::Integer(3)));
    assert!(matches!(result, Err(ValueError::TypeMismatch { .. })));
    assert_eq!(tree.name.as_str(), Some("fixture"));
}

#[test]
fn schema_lists_leaves_and_groups_sorted() {
    let tree = Fixture::default();
    assert_eq!(tree.leaf_names(), vec!["name", "transports"]);
    assert_eq!(tree.group_names(), vec!["a"]);
    assert_eq!(tree.declared_type("transports"), Some(ValueType::TransportList));
    assert_eq!(tree.declared_type("a"), None);
}

#[test]
fn resolve_walks_nested_groups() {
    let mut tree = Fixture::default();
    match path::resolve(&mut tree, "a.b.c") {
        PathLookup::Found { node, leaf } => {
            assert_eq!(leaf, "c");
            assert_eq!(node.declared_type(leaf), Some(ValueType::Integer));
        }
        PathLookup::NotFound { path } => panic!("unexpected miss at {path}"),
    }
}

#[test]
fn resolve_reports_full_path_on_missing_group() {
    let mut tree = Fixture::default();
    match path::resolve(&mut tree, "a.x.c") {
        PathLookup::NotFound { path } => assert_eq!(path, "a.x.c"),
        PathLookup::Found { .. } => panic!("a.x should not resolve"),
    }
}

#[test]
fn apply_continues_past_failures() {
    let mut tree = Fixture::default();
    let report = assign::apply(
        &mut tree,
        &args(&["a.b.c=7", "a.x.c=1", "a.b.missing=1", "a.b.c.d=1", "a.flag=yes", "a.b.label=NONE"]),
    )
    .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(tree.a.b.c.value(), Some(&SettingValue::Integer(7)));
    assert_eq!(tree.a.flag.value(), Some(&SettingValue::Boolean(false)));
    assert_eq!(tree.a.b.label.state(), &SettingState::Unset);

    assert_eq!(report.applied(), 3);
    assert_eq!(report.outcome("a.x.c"), Some(&KeyOutcome::UnknownSetting));
    assert_eq!(report.outcome("a.b.missing"), Some(&KeyOutcome::UnknownSetting));
    assert_eq!(report.outcome("a.b.c.d"), Some(&KeyOutcome::UnknownSetting));
}

#[test]
fn apply_reports_invalid_values_with_path() {
    let mut tree = Fixture::default();
    let report = assign::apply(&mut tree, &args(&["a.b.c=abc", "name=ok"]))
        .unwrap_or_else(|e| panic!("{e}"));

    assert!(matches!(
        report.outcome("a.b.c"),
        Some(KeyOutcome::InvalidValue(_))
    ));
    assert_eq!(tree.a.b.c.value(), Some(&SettingValue::Integer(1)));
    assert_eq!(tree.name.as_str(), Some("ok"));

    let messages = report.failure_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("a.b.c: "));
}

#[test]
fn apply_splits_on_first_equals_sign() {
    let mut tree = Fixture::default();
    assign::apply(&mut tree, &args(&["name=a=b"])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tree.name.as_str(), Some("a=b"));
}

#[test]
fn duplicate_paths_keep_the_last_value() {
    let mut tree = Fixture::default();
    let report = assign::apply(&mut tree, &args(&["a.b.c=2", "a.b.c=3"]))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(report.outcomes().len(), 1);
    assert_eq!(tree.a.b.c.value(), Some(&SettingValue::Integer(3)));
}

#[test]
fn unknown_setting_message_names_the_path() {
    let mut tree = Fixture::default();
    let report = assign::apply(&mut tree, &args(&["nope=1"])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.to_string(), "Unknown setting: nope");
}

#[test]
fn update_saves_exactly_once_despite_failures() {
    let mut root = CountingRoot::new();
    let report = assign::update(&mut root, &args(&["a.b.c=5", "bogus=1", "a.b.c.x=abc"]))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(root.saves.get(), 1);
    assert_eq!(report.applied(), 1);
    assert_eq!(root.tree.a.b.c.value(), Some(&SettingValue::Integer(5)));
}

#[test]
fn update_rejects_malformed_batch_without_applying_or_saving() {
    let mut root = CountingRoot::new();
    match assign::update(&mut root, &args(&["a.b.c=5", "noequalsign"])) {
        Err(AssignError::IllegalArguments(joined)) => assert_eq!(joined, "a.b.c=5 noequalsign"),
        other => panic!("expected IllegalArguments, got {other:?}"),
    }
    assert_eq!(root.saves.get(), 0);
    assert_eq!(root.tree, Fixture::default());
}

#[test]
fn update_surfaces_save_failures() {
    let mut root = CountingRoot::new();
    root.fail_save = true;

    let result = assign::update(&mut root, &args(&["name=x"]));
    assert!(matches!(result, Err(AssignError::Persist(message)) if message == "disk full"));
    assert_eq!(root.saves.get(), 1);
}
