// src/constants.rs

pub const DEFAULT_LISTEN_PORT: u16 = 8888;

/// Chunk size for the data-connection copy loops.
pub const TRANSFER_BUF_SIZE: usize = 1024;
