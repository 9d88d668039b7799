pub mod configs;
pub mod email_message;
pub mod recipient;
pub mod recipient_queue;
