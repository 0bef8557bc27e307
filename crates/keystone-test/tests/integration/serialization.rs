//! JSON shape of the value types.

use keystone_test::component::{Error, enumeration};
use serde::{Deserialize, Serialize};

enumeration! {
    pub struct Channel {
        EMAIL = (1, "Email"),
        SMS = (2, "Sms"),
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Notification {
    channel: Channel,
    error: Option<Error>,
}

#[test]
fn nested_values_round_trip() {
    let notification = Notification {
        channel: Channel::SMS,
        error: Some(
            Error::with_extensions("Throttled", 429, "Too many messages.", [("retry", "60")])
                .unwrap(),
        ),
    };

    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["channel"], "Sms");
    assert_eq!(json["error"]["extensions"]["retry"], "60");

    let back: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(back, notification);
}

#[test]
fn invalid_payloads_are_rejected() {
    let unknown_channel = r#"{"channel":"Fax","error":null}"#;
    assert!(serde_json::from_str::<Notification>(unknown_channel).is_err());

    let blank_error = r#"{"channel":"email","error":{"title":"","code":1,"message":"m"}}"#;
    assert!(serde_json::from_str::<Notification>(blank_error).is_err());

    let ok = r#"{"channel":"email","error":null}"#;
    let parsed: Notification = serde_json::from_str(ok).unwrap();
    assert_eq!(parsed.channel, Channel::EMAIL);
}
