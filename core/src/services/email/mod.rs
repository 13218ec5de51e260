//! Notification sender seam and message rendering

mod message;
mod mock;
mod sender;

pub use message::EmailMessage;
pub use mock::MockEmailSender;
pub use sender::EmailSender;
