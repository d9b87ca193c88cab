pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod session;
pub mod storage;
pub mod transfer;

pub use config::ServerConfig;
pub use server::Server;
