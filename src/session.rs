use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::core_ftpcommand::error::CommandError;
use crate::core_network::dtp::DataTransferProcess;

/// Writing side of the control connection.
///
/// Every reply is a single `<code> <text>` line; the code is handed back so
/// handlers can return it as their result.
pub struct ControlChannel {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl ControlChannel {
    pub fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    pub async fn reply(&mut self, code: u16, text: &str) -> std::io::Result<u16> {
        let line = format!("{} {}\r\n", code, text);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(code)
    }

    /// Reads one command line. Returns 0 on connection close.
    pub async fn read_line(&mut self, buffer: &mut String) -> std::io::Result<usize> {
        buffer.clear();
        self.reader.read_line(buffer).await
    }
}

/// Per-connection state. One session per control connection; sessions share
/// nothing with one another.
pub struct Session {
    pub username: Option<String>,
    pub is_authenticated: bool,
    /// Normalized virtual directory, always of the `/seg/seg/` shape.
    pub current_dir: String,
    /// Native directory the virtual root maps to.
    pub base_path: PathBuf,
    pub ctrl: ControlChannel,
    pub dtp: DataTransferProcess,
}

impl Session {
    pub fn new(stream: TcpStream, base_path: PathBuf) -> Self {
        Self {
            username: None,
            is_authenticated: false,
            current_dir: String::from("/"),
            base_path,
            ctrl: ControlChannel::new(stream),
            dtp: DataTransferProcess::new(),
        }
    }

    /// Authentication gate: everything except USER, PASS and QUIT goes
    /// through here before touching the filesystem or the data channel.
    pub fn check_login(&self) -> Result<(), CommandError> {
        if !self.is_authenticated {
            return Err(CommandError::reply(530, "Please login with USER and PASS."));
        }
        Ok(())
    }
}
