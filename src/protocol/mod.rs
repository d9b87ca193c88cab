//! Protocol implementation
//!
//! Handles command parsing, fixed-capacity message framing, response
//! tags, and dispatch of received commands to their transfers.

pub mod command;
pub mod framing;
pub mod handlers;
pub mod response;

pub use command::{Command, parse_command};
pub use framing::{MESSAGE_CAPACITY, recv_message, send_message};
pub use handlers::handle_command;
pub use response::{END_OF_LISTING, ResponseTag};
