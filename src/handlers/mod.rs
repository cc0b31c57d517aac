pub mod get_message;
pub mod health;
pub mod welcome;

pub use get_message::get_message_handler;
pub use health::health_handler;
pub use welcome::welcome_handler;
