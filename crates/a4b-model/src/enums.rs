//! Enumerated wire strings.
//!
//! The API documents each of these fields as a string restricted to a closed
//! set of literals. They are modeled as proper sum types: the typed value is
//! the only way to populate a field, and untyped wire data converts through
//! `FromStr`, which fails with [`ModelError::UnknownEnumValue`] for literals
//! outside the documented set. `as_str` returns the exact wire literal, and
//! serde uses the same literal in both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All known values, in documentation order.
            pub const VALUES: &'static [Self] = &[ $(Self::$variant),+ ];

            /// The documented wire literal for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $literal => Ok(Self::$variant), )+
                    _ => Err(ModelError::UnknownEnumValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Why generation of a business report failed.
    BusinessReportFailureCode {
        AccessDenied => "ACCESS_DENIED",
        NoSuchBucket => "NO_SUCH_BUCKET",
        InternalFailure => "INTERNAL_FAILURE",
    }
}

wire_enum! {
    /// Output format of a business report.
    BusinessReportFormat {
        Csv => "CSV",
        CsvZip => "CSV_ZIP",
    }
}

wire_enum! {
    /// Time window a business report covers.
    BusinessReportInterval {
        OneDay => "ONE_DAY",
        OneWeek => "ONE_WEEK",
        ThirtyDays => "THIRTY_DAYS",
    }
}

wire_enum! {
    /// Generation state of a business report.
    BusinessReportStatus {
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Signaling protocol for an IP dial-in endpoint.
    CommsProtocol {
        Sip => "SIP",
        Sips => "SIPS",
        H323 => "H323",
    }
}

wire_enum! {
    /// Conferencing service backing a conference provider.
    ConferenceProviderType {
        Chime => "CHIME",
        Bluejeans => "BLUEJEANS",
        Fuze => "FUZE",
        GoogleHangouts => "GOOGLE_HANGOUTS",
        Polycom => "POLYCOM",
        Ringcentral => "RINGCENTRAL",
        SkypeForBusiness => "SKYPE_FOR_BUSINESS",
        Webex => "WEBEX",
        Zoom => "ZOOM",
        Custom => "CUSTOM",
    }
}

wire_enum! {
    /// Whether a device is currently reachable.
    ConnectionStatus {
        Online => "ONLINE",
        Offline => "OFFLINE",
    }
}

wire_enum! {
    /// Kind of event recorded in a device's event history.
    DeviceEventType {
        ConnectionStatus => "CONNECTION_STATUS",
        DeviceStatus => "DEVICE_STATUS",
    }
}

wire_enum! {
    /// Provisioning state of a device.
    DeviceStatus {
        Ready => "READY",
        Pending => "PENDING",
        WasOffline => "WAS_OFFLINE",
        Deregistered => "DEREGISTERED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Detail code attached to a device status.
    DeviceStatusDetailCode {
        DeviceSoftwareUpdateNeeded => "DEVICE_SOFTWARE_UPDATE_NEEDED",
        DeviceWasOffline => "DEVICE_WAS_OFFLINE",
        CredentialsAccessFailure => "CREDENTIALS_ACCESS_FAILURE",
        TlsVersionMismatch => "TLS_VERSION_MISMATCH",
        AssociationRejection => "ASSOCIATION_REJECTION",
        AuthenticationFailure => "AUTHENTICATION_FAILURE",
        DhcpFailure => "DHCP_FAILURE",
        InternetUnavailable => "INTERNET_UNAVAILABLE",
        DnsFailure => "DNS_FAILURE",
        UnknownFailure => "UNKNOWN_FAILURE",
        CertificateIssuingLimitExceeded => "CERTIFICATE_ISSUING_LIMIT_EXCEEDED",
        InvalidCertificateAuthority => "INVALID_CERTIFICATE_AUTHORITY",
        NetworkProfileNotFound => "NETWORK_PROFILE_NOT_FOUND",
        InvalidPasswordState => "INVALID_PASSWORD_STATE",
        PasswordNotFound => "PASSWORD_NOT_FOUND",
        PasswordManagerAccessDenied => "PASSWORD_MANAGER_ACCESS_DENIED",
        CertificateAuthorityAccessDenied => "CERTIFICATE_AUTHORITY_ACCESS_DENIED",
    }
}

wire_enum! {
    /// Unit system used when answering distance questions.
    DistanceUnit {
        Metric => "METRIC",
        Imperial => "IMPERIAL",
    }
}

wire_enum! {
    /// Whether a skill is enabled for use or awaiting account linking.
    EnablementType {
        Enabled => "ENABLED",
        Pending => "PENDING",
    }
}

wire_enum! {
    /// How the end-of-meeting reminder announces itself.
    EndOfMeetingReminderType {
        AnnouncementTimeCheck => "ANNOUNCEMENT_TIME_CHECK",
        AnnouncementVariableTimeLeft => "ANNOUNCEMENT_VARIABLE_TIME_LEFT",
        Chime => "CHIME",
        Knock => "KNOCK",
    }
}

wire_enum! {
    /// Enrollment state of a user invitation.
    EnrollmentStatus {
        Initialized => "INITIALIZED",
        Pending => "PENDING",
        Registered => "REGISTERED",
        Disassociating => "DISASSOCIATING",
        Deregistering => "DEREGISTERING",
    }
}

wire_enum! {
    /// Device feature that a sync operation can target.
    Feature {
        Bluetooth => "BLUETOOTH",
        Volume => "VOLUME",
        Notifications => "NOTIFICATIONS",
        Lists => "LISTS",
        Skills => "SKILLS",
        NetworkProfile => "NETWORK_PROFILE",
        Settings => "SETTINGS",
        All => "ALL",
    }
}

wire_enum! {
    /// Locale of announcement content.
    Locale {
        EnUs => "en-US",
    }
}

wire_enum! {
    /// EAP method of an enterprise network profile.
    NetworkEapMethod {
        EapTls => "EAP_TLS",
    }
}

wire_enum! {
    /// Security protocol of a network profile.
    NetworkSecurityType {
        Open => "OPEN",
        Wep => "WEP",
        WpaPsk => "WPA_PSK",
        Wpa2Psk => "WPA2_PSK",
        Wpa2Enterprise => "WPA2_ENTERPRISE",
    }
}

wire_enum! {
    /// Kind of contact phone number.
    PhoneNumberType {
        Mobile => "MOBILE",
        Work => "WORK",
        Home => "HOME",
    }
}

wire_enum! {
    /// Whether a meeting PIN is required to join.
    RequirePin {
        Yes => "YES",
        No => "NO",
        Optional => "OPTIONAL",
    }
}

wire_enum! {
    /// Kind of contact SIP address.
    SipType {
        Work => "WORK",
    }
}

wire_enum! {
    /// Visibility of a skill.
    SkillType {
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

wire_enum! {
    /// Skill visibility filter for listing operations.
    SkillTypeFilter {
        Public => "PUBLIC",
        Private => "PRIVATE",
        All => "ALL",
    }
}

wire_enum! {
    /// Direction of a sort criterion.
    SortValue {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    /// Unit used when answering temperature questions.
    TemperatureUnit {
        Fahrenheit => "FAHRENHEIT",
        Celsius => "CELSIUS",
    }
}

wire_enum! {
    /// Wake word a device listens for.
    WakeWord {
        Alexa => "ALEXA",
        Amazon => "AMAZON",
        Echo => "ECHO",
        Computer => "COMPUTER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_wire_literals() {
        assert_eq!(BusinessReportFormat::CsvZip.as_str(), "CSV_ZIP");
        assert_eq!(DeviceStatus::WasOffline.as_str(), "WAS_OFFLINE");
        assert_eq!(DistanceUnit::Metric.as_str(), "METRIC");
        assert_eq!(WakeWord::Computer.as_str(), "COMPUTER");
        assert_eq!(Locale::EnUs.as_str(), "en-US");
        assert_eq!(ConferenceProviderType::SkypeForBusiness.as_str(), "SKYPE_FOR_BUSINESS");
    }

    #[test]
    fn test_display_matches_as_str() {
        for wake_word in WakeWord::VALUES {
            assert_eq!(wake_word.to_string(), wake_word.as_str());
        }
    }

    #[test]
    fn test_round_trip_all_values() {
        for status in DeviceStatus::VALUES {
            assert_eq!(status.as_str().parse::<DeviceStatus>().unwrap(), *status);
        }
        for code in DeviceStatusDetailCode::VALUES {
            assert_eq!(
                code.as_str().parse::<DeviceStatusDetailCode>().unwrap(),
                *code
            );
        }
    }

    #[test]
    fn test_unknown_literal_is_rejected() {
        let err = "SIRI".parse::<WakeWord>().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownEnumValue {
                kind: "WakeWord",
                value: "SIRI".to_string(),
            }
        );
        // Parsing is case-sensitive: the wire literal is the exact value.
        assert!("alexa".parse::<WakeWord>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_literals() {
        let json = serde_json::to_string(&RequirePin::Optional).unwrap();
        assert_eq!(json, "\"OPTIONAL\"");
        let parsed: RequirePin = serde_json::from_str("\"YES\"").unwrap();
        assert_eq!(parsed, RequirePin::Yes);
        assert!(serde_json::from_str::<RequirePin>("\"MAYBE\"").is_err());
    }
}
