//! Response tags
//!
//! The first framed message on every data connection is one of four
//! three-letter tags telling the peer what, if anything, follows.

/// Listing line that marks the end of a directory listing
pub const END_OF_LISTING: &str = "~done";

/// Outcome tag announced to the peer at the start of the data connection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseTag {
    /// A directory listing follows, one framed line per entry, then `~done`
    DirectoryFollows,
    /// Raw file bytes follow until the connection closes
    FileFollows,
    /// The requested name is not in the served directory; nothing follows
    FileNotFound,
    /// The command was not recognized; nothing follows
    UnknownCommand,
}

impl ResponseTag {
    /// The three-letter token for this tag
    pub fn token(self) -> &'static str {
        match self {
            ResponseTag::DirectoryFollows => "dir",
            ResponseTag::FileFollows => "fil",
            ResponseTag::FileNotFound => "nof",
            ResponseTag::UnknownCommand => "unk",
        }
    }

    /// The tag as it travels on the wire, newline-terminated
    pub fn wire_line(self) -> String {
        format!("{}\n", self.token())
    }
}
