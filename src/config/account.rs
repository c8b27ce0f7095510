use crate::{
    settings::{SettingValue, types::Transport},
    settings_group,
};

settings_group! {
    /// Settings of a regular SIP account.
    pub struct AccountSettings {
        leaves: {
            display_name: String = None,
            enabled: Boolean = Some(SettingValue::Boolean(false)),
            password: String = Some(SettingValue::text("")),
        },
        groups: {
            message_summary: MessageSummarySettings,
            msrp: AccountMsrpSettings,
            presence: PresenceSettings,
            rtp: AccountRtpSettings,
            sip: AccountSipSettings,
            xcap: XcapSettings,
        },
    }
}

settings_group! {
    /// Settings of the local-network discovery account.
    ///
    /// It never registers anywhere, so it has no credentials or proxy.
    pub struct BonjourAccountSettings {
        leaves: {
            display_name: String = None,
            enabled: Boolean = Some(SettingValue::Boolean(true)),
        },
        groups: {
            msrp: BonjourMsrpSettings,
            rtp: AccountRtpSettings,
            sip: BonjourSipSettings,
        },
    }
}

settings_group! {
    /// Registration and outbound routing.
    pub struct AccountSipSettings {
        leaves: {
            outbound_proxy: SipProxyAddress = None,
            publish_interval: Integer = Some(SettingValue::Integer(3600)),
            register: Boolean = Some(SettingValue::Boolean(true)),
            register_interval: Integer = Some(SettingValue::Integer(3600)),
            subscribe_interval: Integer = Some(SettingValue::Integer(3600)),
            transport_list: TransportList = Some(SettingValue::TransportList(vec![
                Transport::Tls,
                Transport::Tcp,
                Transport::Udp,
            ])),
        },
        groups: {},
    }
}

settings_group! {
    pub struct BonjourSipSettings {
        leaves: {
            transport_list: TransportList = Some(SettingValue::TransportList(vec![Transport::Udp])),
        },
        groups: {},
    }
}

settings_group! {
    /// Per-account media overrides. An unset codec list falls back to the global one.
    pub struct AccountRtpSettings {
        leaves: {
            audio_codec_list: StringList = None,
            srtp_encryption: String = Some(SettingValue::text("optional")),
            use_srtp_without_tls: Boolean = Some(SettingValue::Boolean(false)),
        },
        groups: {},
    }
}

settings_group! {
    pub struct AccountMsrpSettings {
        leaves: {
            connection_model: String = Some(SettingValue::text("relay")),
            relay: MsrpRelayAddress = None,
        },
        groups: {},
    }
}

settings_group! {
    pub struct BonjourMsrpSettings {
        leaves: {
            transport: String = Some(SettingValue::text("tls")),
        },
        groups: {},
    }
}

settings_group! {
    pub struct PresenceSettings {
        leaves: {
            enabled: Boolean = Some(SettingValue::Boolean(true)),
            use_rls: Boolean = Some(SettingValue::Boolean(false)),
        },
        groups: {},
    }
}

settings_group! {
    pub struct XcapSettings {
        leaves: {
            enabled: Boolean = Some(SettingValue::Boolean(true)),
            xcap_root: String = None,
        },
        groups: {},
    }
}

settings_group! {
    /// Voicemail notifications.
    pub struct MessageSummarySettings {
        leaves: {
            enabled: Boolean = Some(SettingValue::Boolean(false)),
            voicemail_uri: String = None,
        },
        groups: {},
    }
}
