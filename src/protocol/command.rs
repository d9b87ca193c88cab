//! Module `command`
//!
//! Defines the command grammar for the control connection and the logic
//! that interprets one received command string.

/// Token requesting a directory listing
pub const LIST_TOKEN: &str = "-l";

/// Sentinel a peer sends when its user supplied no file name at all
pub const NO_FILENAME_SENTINEL: &str = "%none";

/// Represents a command received over the control connection.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Send the served directory's listing
    List,
    /// Send the named file
    Retrieve(String),
    /// No file name was supplied on the peer's side
    Missing,
}

/// Interprets the command text of one request.
///
/// The listing token is checked first. Any other text that is not the
/// no-filename sentinel is taken verbatim as a file name, so file names
/// never need escaping. Matches are exact and case-sensitive; the frame
/// padding has already been stripped by the framing layer.
pub fn parse_command(text: &str) -> Command {
    if text == LIST_TOKEN {
        Command::List
    } else if text != NO_FILENAME_SENTINEL {
        Command::Retrieve(text.to_string())
    } else {
        Command::Missing
    }
}
