//! Email delivery via SMTP

mod smtp;

pub use smtp::SmtpEmailSender;
