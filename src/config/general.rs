use crate::{
    settings::{
        SettingValue,
        types::{LocalIpAddress, Transport},
    },
    settings_group,
};

use super::media::{AudioSettings, RtpSettings, VideoSettings};

settings_group! {
    /// Global middleware settings.
    ///
    /// The root of the tree shown by `--general show`. Groups cover the
    /// signalling, media and logging subsystems.
    pub struct SipSimpleSettings {
        leaves: {
            /// Account used when none is selected explicitly.
            default_account: String = Some(SettingValue::text("bonjour")),
            /// Address sockets are bound to.
            local_ip: LocalIpAddress = Some(SettingValue::LocalIpAddress(LocalIpAddress::Auto)),
            /// `User-Agent` header sent with every request.
            user_agent: String = Some(SettingValue::text("sip-settings")),
        },
        groups: {
            audio: AudioSettings,
            chat: ChatSettings,
            logs: LogsSettings,
            rtp: RtpSettings,
            sip: SipSettings,
            tls: TlsSettings,
            video: VideoSettings,
        },
    }
}

settings_group! {
    /// SIP signalling transports and timers.
    pub struct SipSettings {
        leaves: {
            invite_timeout: Integer = Some(SettingValue::Integer(90)),
            tcp_port: Port = Some(SettingValue::Port(0)),
            tls_port: Port = Some(SettingValue::Port(0)),
            transport_list: TransportList = Some(SettingValue::TransportList(vec![
                Transport::Tls,
                Transport::Tcp,
                Transport::Udp,
            ])),
            udp_port: Port = Some(SettingValue::Port(0)),
        },
        groups: {},
    }
}

settings_group! {
    /// Certificate and protocol settings for TLS transports.
    pub struct TlsSettings {
        leaves: {
            ca_list: String = None,
            certificate: String = None,
            protocol: String = Some(SettingValue::text("TLSv1")),
            timeout: Integer = Some(SettingValue::Integer(3000)),
            verify_server: Boolean = Some(SettingValue::Boolean(false)),
        },
        groups: {},
    }
}

settings_group! {
    pub struct ChatSettings {
        leaves: {
            disabled: Boolean = Some(SettingValue::Boolean(false)),
            history_directory: String = Some(SettingValue::text("history")),
        },
        groups: {},
    }
}

settings_group! {
    /// Protocol trace switches.
    pub struct LogsSettings {
        leaves: {
            directory: String = Some(SettingValue::text("logs")),
            pjsip_level: Integer = Some(SettingValue::Integer(5)),
            trace_msrp: Boolean = Some(SettingValue::Boolean(false)),
            trace_pjsip: Boolean = Some(SettingValue::Boolean(false)),
            trace_sip: Boolean = Some(SettingValue::Boolean(false)),
            trace_xcap: Boolean = Some(SettingValue::Boolean(false)),
        },
        groups: {},
    }
}
