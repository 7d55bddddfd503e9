use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::constants::TRANSFER_BUF_SIZE;
use crate::core_representation::{Representation, RepresentationReader, RepresentationWriter};

/// Chunked copy loops between a local file and a data socket, routed through
/// the active representation.
///
/// The abort flag is cooperative and reset at the start of each call. No
/// command in the reachable set triggers it yet; it is kept for a future
/// ABOR wiring.
pub struct StreamTransmission {
    aborted: Arc<AtomicBool>,
}

impl StreamTransmission {
    pub fn new() -> Self {
        Self {
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    /// Streams `file` to the data socket. Closes the socket's sending side
    /// on completion so the peer sees end-of-transfer.
    pub async fn send_file(
        &self,
        file: &mut File,
        socket: TcpStream,
        representation: Representation,
    ) -> std::io::Result<()> {
        self.aborted.store(false, Ordering::SeqCst);

        let mut out = RepresentationWriter::new(socket, representation);
        let mut buf = [0u8; TRANSFER_BUF_SIZE];
        loop {
            let n = file.read(&mut buf).await?;
            if n == 0 || self.aborted.load(Ordering::SeqCst) {
                break;
            }
            out.write_chunk(&buf[..n]).await?;
        }
        out.shutdown().await
    }

    /// Streams the data socket into `file` until the peer closes.
    pub async fn receive_file(
        &self,
        socket: TcpStream,
        file: &mut File,
        representation: Representation,
    ) -> std::io::Result<()> {
        self.aborted.store(false, Ordering::SeqCst);

        let mut input = RepresentationReader::new(socket, representation);
        let mut chunk = Vec::with_capacity(TRANSFER_BUF_SIZE);
        loop {
            let n = input.read_chunk(&mut chunk).await?;
            if n == 0 || self.aborted.load(Ordering::SeqCst) {
                break;
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await
    }
}

impl Default for StreamTransmission {
    fn default() -> Self {
        Self::new()
    }
}
