use super::ResourceModel;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

fn seed_json<T: Serialize + Default>() -> JsonValue {
    serde_json::to_value(T::default()).expect("seed record serializes to JSON")
}

/// Seed record for the `notifications` collection (push notification drafts).
///
/// Numeric-looking fields are kept as strings on purpose: the collection is
/// schema-less and these values are example data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub uuid: String,
    pub alias: String,
    pub alert: String,
    pub badge: String,
    pub created: String,
    pub modified: String,
    pub schedule: String,
    pub application_id: String,
    pub user_id: String,
    pub account_id: String,
    pub sent: String,
    pub opened: String,
    pub radius: String,
    pub device_guids: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub html: String,
    pub tokens: String,
    pub appid: String,
    pub pem: String,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            uuid: String::new(),
            alias: String::new(),
            alert: String::new(),
            badge: "0".to_string(),
            created: String::new(),
            modified: String::new(),
            schedule: String::new(),
            application_id: String::new(),
            user_id: String::new(),
            account_id: String::new(),
            sent: "0".to_string(),
            opened: "0".to_string(),
            radius: "10".to_string(),
            device_guids: String::new(),
            kind: "push".to_string(),
            html: String::new(),
            tokens: String::new(),
            appid: String::new(),
            pem: String::new(),
        }
    }
}

pub struct NotificationModel;

impl ResourceModel for NotificationModel {
    fn collection(&self) -> &str {
        "notifications"
    }

    fn seed_document(&self) -> JsonValue {
        seed_json::<Notification>()
    }
}

/// Seed record for the `qrcoders` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCode {
    pub title: String,
    pub data: String,
    pub image: String,
    pub size: String,
    pub redirect: String,
    pub quality: String,
    pub account_id: String,
    pub created: String,
    pub modified: String,
    pub url: String,
    pub redeem_url: String,
    pub uuid: String,
    pub user_id: String,
    pub scans: String,
    pub application_id: String,
    pub appid: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for QrCode {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: String::new(),
            image: String::new(),
            size: "M".to_string(),
            redirect: String::new(),
            quality: "7".to_string(),
            account_id: String::new(),
            created: String::new(),
            modified: String::new(),
            url: String::new(),
            redeem_url: String::new(),
            uuid: String::new(),
            user_id: String::new(),
            scans: String::new(),
            application_id: String::new(),
            appid: String::new(),
            kind: "basic".to_string(),
        }
    }
}

pub struct QrCodeModel;

impl ResourceModel for QrCodeModel {
    // The backing collection keeps its historical name; the wire name is `qrcodes`.
    fn collection(&self) -> &str {
        "qrcoders"
    }

    fn seed_document(&self) -> JsonValue {
        seed_json::<QrCode>()
    }
}

/// Seed record for the `redemptions` collection (coupon redemption events).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redemption {
    pub created: String,
    pub modified: String,
    pub coupon_uuid: String,
    pub ip: String,
    pub referer: String,
    pub coupon_id: String,
    pub analytic_id: String,
    pub account_id: String,
    pub application_id: String,
}

impl Default for Redemption {
    fn default() -> Self {
        Self {
            created: String::new(),
            modified: String::new(),
            coupon_uuid: String::new(),
            ip: String::new(),
            referer: String::new(),
            coupon_id: "0".to_string(),
            analytic_id: "0".to_string(),
            account_id: "0".to_string(),
            application_id: String::new(),
        }
    }
}

pub struct RedemptionModel;

impl ResourceModel for RedemptionModel {
    fn collection(&self) -> &str {
        "redemptions"
    }

    fn seed_document(&self) -> JsonValue {
        seed_json::<Redemption>()
    }
}
