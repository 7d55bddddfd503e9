//! Representation strategies for data-connection traffic.
//!
//! A representation decides how raw file bytes are transformed on their way
//! to or from the data connection, and how SIZE is computed. Two exist:
//! `Ascii` (`A`, newline transcoding) and `Image` (`I`, pass-through).

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::constants::TRANSFER_BUF_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Ascii,
    Image,
}

impl Representation {
    /// Registry lookup by the one-character TYPE code. The table is fixed at
    /// compile time; unknown codes report "not found".
    pub fn from_code(code: char) -> Option<Representation> {
        match code.to_ascii_uppercase() {
            'A' => Some(Representation::Ascii),
            'I' => Some(Representation::Image),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Representation::Ascii => 'A',
            Representation::Image => 'I',
        }
    }

    /// Name used in the `150 Opening <name> mode data connection.` reply.
    pub fn name(&self) -> &'static str {
        match self {
            Representation::Ascii => "ascii",
            Representation::Image => "binary",
        }
    }

    /// Size of `path` as it would appear after the outbound transform.
    ///
    /// Image is the literal byte length. Ascii streams the file without
    /// materializing the transformed bytes: CR is skipped, LF counts twice
    /// (it goes out as CR LF), everything else counts once.
    pub async fn size_of(&self, path: &Path) -> std::io::Result<u64> {
        match self {
            Representation::Image => Ok(tokio::fs::metadata(path).await?.len()),
            Representation::Ascii => {
                let mut file = File::open(path).await?;
                let mut buf = [0u8; TRANSFER_BUF_SIZE];
                let mut count: u64 = 0;
                loop {
                    let n = file.read(&mut buf).await?;
                    if n == 0 {
                        break;
                    }
                    for &b in &buf[..n] {
                        match b {
                            b'\r' => {}
                            b'\n' => count += 2,
                            _ => count += 1,
                        }
                    }
                }
                Ok(count)
            }
        }
    }

    /// Outbound (file to network) transform of one chunk.
    ///
    /// Ascii drops CR and emits CR before LF, so the wire never carries a CR
    /// outside of CR LF. Image appends the chunk untouched.
    pub fn encode(&self, src: &[u8], dst: &mut Vec<u8>) {
        match self {
            Representation::Image => dst.extend_from_slice(src),
            Representation::Ascii => {
                for &b in src {
                    match b {
                        b'\r' => {}
                        b'\n' => {
                            dst.push(b'\r');
                            dst.push(b'\n');
                        }
                        _ => dst.push(b),
                    }
                }
            }
        }
    }
}

/// Inbound (network to file) decoder. Ascii elides a CR and passes the byte
/// after it through verbatim; the elision state survives chunk boundaries,
/// and a CR that ends the stream is dropped.
#[derive(Debug, Default)]
pub struct AsciiDecoder {
    cr_pending: bool,
}

impl AsciiDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, src: &[u8], dst: &mut Vec<u8>) {
        let mut i = 0;
        if self.cr_pending && !src.is_empty() {
            dst.push(src[0]);
            self.cr_pending = false;
            i = 1;
        }
        while i < src.len() {
            let b = src[i];
            if b == b'\r' {
                if i + 1 < src.len() {
                    dst.push(src[i + 1]);
                    i += 2;
                } else {
                    self.cr_pending = true;
                    i += 1;
                }
            } else {
                dst.push(b);
                i += 1;
            }
        }
    }
}

/// Data-socket writer applying the representation's outbound transform per
/// chunk. `shutdown` flushes and closes the sending side.
pub struct RepresentationWriter {
    socket: TcpStream,
    representation: Representation,
    scratch: Vec<u8>,
}

impl RepresentationWriter {
    pub fn new(socket: TcpStream, representation: Representation) -> Self {
        Self {
            socket,
            representation,
            scratch: Vec::with_capacity(TRANSFER_BUF_SIZE * 2),
        }
    }

    pub async fn write_chunk(&mut self, data: &[u8]) -> std::io::Result<()> {
        match self.representation {
            Representation::Image => self.socket.write_all(data).await,
            Representation::Ascii => {
                self.scratch.clear();
                self.representation.encode(data, &mut self.scratch);
                self.socket.write_all(&self.scratch).await
            }
        }
    }

    pub async fn shutdown(&mut self) -> std::io::Result<()> {
        self.socket.shutdown().await
    }
}

/// Data-socket reader applying the representation's inbound transform per
/// chunk.
pub struct RepresentationReader {
    socket: TcpStream,
    representation: Representation,
    decoder: AsciiDecoder,
    buf: Vec<u8>,
}

impl RepresentationReader {
    pub fn new(socket: TcpStream, representation: Representation) -> Self {
        Self {
            socket,
            representation,
            decoder: AsciiDecoder::new(),
            buf: vec![0u8; TRANSFER_BUF_SIZE],
        }
    }

    /// Reads one raw chunk from the socket and appends its decoded form to
    /// `out`. Returns the raw byte count, 0 on peer close. A non-zero return
    /// with an empty `out` is possible when a chunk is all elided CRs.
    pub async fn read_chunk(&mut self, out: &mut Vec<u8>) -> std::io::Result<usize> {
        out.clear();
        let n = self.socket.read(&mut self.buf).await?;
        if n == 0 {
            return Ok(0);
        }
        match self.representation {
            Representation::Image => out.extend_from_slice(&self.buf[..n]),
            Representation::Ascii => self.decoder.decode(&self.buf[..n], out),
        }
        Ok(n)
    }
}
