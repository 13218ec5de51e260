//! Code-verified account flow endpoints

mod change_email;
mod delete_account;
mod password_reset;
mod registration;

pub use change_email::{send_change_email, verify_change_email};
pub use delete_account::{confirm_delete_user, send_delete_code};
pub use password_reset::{reset_password, send_password_reset};
pub use registration::{send_verification, verify_code};
