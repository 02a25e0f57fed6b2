// Raffle Entrance - Notifications
use serde::{Deserialize, Serialize};

/// Severity shown by the notification surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

/// Screen corner the notification slides in from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "topL")]
    TopLeft,
    #[serde(rename = "topR")]
    TopRight,
    #[serde(rename = "bottomL")]
    BottomLeft,
    #[serde(rename = "bottomR")]
    BottomRight,
}

/// Transient message handed to the notification surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub title: String,
    pub position: Position,
    pub icon: String,
}

impl Notification {
    /// Message fired once an entry transaction is confirmed
    pub fn transaction_complete() -> Self {
        Self {
            kind: NotificationKind::Info,
            message: "Transaction Complete".to_string(),
            title: "Transaction Notification".to_string(),
            position: Position::TopRight,
            icon: "bell".to_string(),
        }
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    fn dispatch(&self, notification: Notification);
}
