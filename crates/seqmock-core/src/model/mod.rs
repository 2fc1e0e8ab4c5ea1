pub mod commitment;
pub mod notification;

pub use commitment::{Commitment, ZERO_ROOT};
pub use notification::{Notification, NotificationPayload};
