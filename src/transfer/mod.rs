//! Transfer module for the file transfer responder
//!
//! Streams either payload mode over an established data connection:
//! framed directory listing lines or raw file chunks.

pub mod file;
pub mod listing;

// Re-export key functions
pub use file::send_file;
pub use listing::send_listing;
