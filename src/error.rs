//! Error types
//!
//! Defines domain-specific error types for each stage of a request, plus
//! the fatal errors that bring the whole server down.

use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Message framing errors on an established connection
#[derive(Debug)]
pub enum ProtocolError {
    ConnectionClosed,
    Io(io::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::ConnectionClosed => write!(f, "Connection closed mid-message"),
            ProtocolError::Io(e) => write!(f, "Message I/O error: {}", e),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<io::Error> for ProtocolError {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            ProtocolError::ConnectionClosed
        } else {
            ProtocolError::Io(error)
        }
    }
}

/// Directory enumeration errors
#[derive(Debug)]
pub enum StorageError {
    ReadDir { path: PathBuf, source: io::Error },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadDir { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Transfer engine errors, covering both listing and file payloads
#[derive(Debug)]
pub enum TransferError {
    Protocol(ProtocolError),
    Storage(StorageError),
    FileOpen { path: PathBuf, source: io::Error },
    FileRead { path: PathBuf, source: io::Error },
    Write(io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Protocol(e) => write!(f, "Protocol error: {}", e),
            TransferError::Storage(e) => write!(f, "Storage error: {}", e),
            TransferError::FileOpen { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            TransferError::FileRead { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            TransferError::Write(e) => write!(f, "Failed to write to data connection: {}", e),
        }
    }
}

impl std::error::Error for TransferError {}

impl From<ProtocolError> for TransferError {
    fn from(error: ProtocolError) -> Self {
        TransferError::Protocol(error)
    }
}

impl From<StorageError> for TransferError {
    fn from(error: StorageError) -> Self {
        TransferError::Storage(error)
    }
}

/// Per-request errors; these abort one request, never the server
#[derive(Debug)]
pub enum SessionError {
    Control(ProtocolError),
    InvalidDataPort(String),
    DataConnect { addr: SocketAddr, source: io::Error },
    Transfer(TransferError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Control(e) => write!(f, "Control connection error: {}", e),
            SessionError::InvalidDataPort(text) => write!(f, "Invalid data port: {:?}", text),
            SessionError::DataConnect { addr, source } => {
                write!(f, "Failed to connect to data port {}: {}", addr, source)
            }
            SessionError::Transfer(e) => write!(f, "Transfer error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ProtocolError> for SessionError {
    fn from(error: ProtocolError) -> Self {
        SessionError::Control(error)
    }
}

impl From<TransferError> for SessionError {
    fn from(error: TransferError) -> Self {
        SessionError::Transfer(error)
    }
}

/// Fatal server errors that terminate the process
#[derive(Debug)]
pub enum ServerError {
    Bind { addr: String, source: io::Error },
    Accept(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, source } => {
                write!(f, "Failed to bind to {}: {}", addr, source)
            }
            ServerError::Accept(e) => write!(f, "Error accepting connection: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}
