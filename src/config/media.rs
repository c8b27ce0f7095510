use crate::{
    settings::{
        SettingValue,
        types::{PortRange, Resolution},
    },
    settings_group,
};

settings_group! {
    /// Sound devices and processing.
    pub struct AudioSettings {
        leaves: {
            alert_device: String = Some(SettingValue::text("system_default")),
            echo_canceller: Boolean = Some(SettingValue::Boolean(true)),
            input_device: String = Some(SettingValue::text("system_default")),
            output_device: String = Some(SettingValue::text("system_default")),
            sample_rate: Integer = Some(SettingValue::Integer(44100)),
            tail_length: Integer = Some(SettingValue::Integer(200)),
        },
        groups: {},
    }
}

settings_group! {
    /// Media transport settings shared by all accounts.
    pub struct RtpSettings {
        leaves: {
            audio_codec_list: StringList = Some(SettingValue::list(&["opus", "G722", "speex", "PCMU", "PCMA"])),
            port_range: PortRange = Some(SettingValue::PortRange(PortRange { low: 50000, high: 50500 })),
            timeout: Integer = Some(SettingValue::Integer(30)),
        },
        groups: {},
    }
}

settings_group! {
    /// Capture device and encoding for video calls.
    pub struct VideoSettings {
        leaves: {
            device: String = Some(SettingValue::text("system_default")),
            framerate: Integer = Some(SettingValue::Integer(25)),
            resolution: Resolution = Some(SettingValue::Resolution(Resolution { width: 1280, height: 720 })),
        },
        groups: {},
    }
}
