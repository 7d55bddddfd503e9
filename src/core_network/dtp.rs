//! Data-transfer process: owns the data-channel lifecycle for one session.
//!
//! The DTP remembers the endpoint announced by PORT, opens a fresh outbound
//! connection per transfer, and drives the transmission engine for file
//! sends/receives and directory listings. Every operation emits the 150
//! notification on the control channel before moving bytes and the 226 one
//! after, and maps every failure to a coded reply instead of tearing the
//! session down.

use std::path::Path;

use chrono::{DateTime, Local};
use log::{error, info};
use tokio::fs::File;
use tokio::net::TcpStream;

use crate::core_ftpcommand::error::CommandError;
use crate::core_network::transfer::StreamTransmission;
use crate::core_representation::{Representation, RepresentationWriter};
use crate::session::ControlChannel;

pub struct DataTransferProcess {
    data_endpoint: Option<(String, u16)>,
    representation: Representation,
    transmission: StreamTransmission,
}

impl DataTransferProcess {
    pub fn new() -> Self {
        Self {
            data_endpoint: None,
            // ASCII is the protocol default
            representation: Representation::Ascii,
            transmission: StreamTransmission::new(),
        }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn set_representation(&mut self, representation: Representation) {
        self.representation = representation;
    }

    /// Records the endpoint announced by PORT. The last value is kept after
    /// use; no single-shot guarantee.
    pub fn set_data_port(&mut self, host: String, port: u16) {
        self.data_endpoint = Some((host, port));
    }

    async fn open_data_connection(&self) -> Result<TcpStream, CommandError> {
        let (host, port) = self.data_endpoint.as_ref().ok_or_else(|| {
            CommandError::reply(500, "Can't establish data connection: no PORT specified.")
        })?;
        TcpStream::connect((host.as_str(), *port)).await.map_err(|e| {
            error!("Failed to connect to data endpoint {}:{}: {}", host, port, e);
            CommandError::reply(425, "Can't open data connection.")
        })
    }

    /// RETR: streams a local file to the client through the current
    /// representation.
    pub async fn send_file(
        &mut self,
        ctrl: &mut ControlChannel,
        path: &Path,
    ) -> Result<u16, CommandError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| CommandError::reply(550, "No such file."))?;
        if !metadata.is_file() {
            return Err(CommandError::reply(550, "Not a plain file."));
        }
        let mut file = File::open(path)
            .await
            .map_err(|_| CommandError::reply(550, "No such file."))?;

        let socket = self.open_data_connection().await?;

        ctrl.reply(
            150,
            &format!("Opening {} mode data connection.", self.representation.name()),
        )
        .await?;
        info!("Sending file: {:?}", path);

        self.transmission
            .send_file(&mut file, socket, self.representation)
            .await
            .map_err(|e| {
                error!("Error while sending {:?}: {}", path, e);
                CommandError::reply(553, "Not a regular file.")
            })?;

        Ok(ctrl.reply(226, "Transfer complete.").await?)
    }

    /// STOR: receives a file from the client. Never overwrites an existing
    /// destination.
    pub async fn receive_file(
        &mut self,
        ctrl: &mut ControlChannel,
        path: &Path,
    ) -> Result<u16, CommandError> {
        if tokio::fs::metadata(path).await.is_ok() {
            return Err(CommandError::reply(550, "File exists in that location."));
        }
        let mut file = File::create(path)
            .await
            .map_err(|e| {
                error!("Failed to create file {:?}: {}", path, e);
                CommandError::reply(550, "Can't write to file")
            })?;

        let socket = self.open_data_connection().await?;

        ctrl.reply(
            150,
            &format!("Opening {} mode data connection.", self.representation.name()),
        )
        .await?;
        info!("Receiving file: {:?}", path);

        self.transmission
            .receive_file(socket, &mut file, self.representation)
            .await
            .map_err(|e| {
                error!("Error while receiving {:?}: {}", path, e);
                CommandError::reply(550, "Can't write to file")
            })?;

        Ok(ctrl.reply(226, "Transfer complete.").await?)
    }

    /// NLST: one entry name per line. Listings always go out in ASCII
    /// representation, whatever the session TYPE is.
    pub async fn send_name_list(
        &mut self,
        ctrl: &mut ControlChannel,
        path: &Path,
    ) -> Result<u16, CommandError> {
        let entries = read_dir_names(path).await?;

        let mut listing = String::new();
        for name in &entries {
            listing.push_str(name);
            listing.push('\n');
        }

        self.send_listing(ctrl, listing).await
    }

    /// LIST: `total <n>` header plus one long-format line per entry.
    pub async fn send_list(
        &mut self,
        ctrl: &mut ControlChannel,
        path: &Path,
    ) -> Result<u16, CommandError> {
        let entries = read_dir_names(path).await?;

        let mut listing = format!("total {}\n", entries.len());
        for name in &entries {
            let entry_path = path.join(name);
            let metadata = tokio::fs::metadata(&entry_path)
                .await
                .map_err(|_| CommandError::reply(550, "No such directory."))?;
            let modified = metadata
                .modified()
                .map_err(|_| CommandError::reply(550, "No such directory."))?;
            listing.push_str(&format_list_entry(name, metadata.is_dir(), metadata.len(), modified));
        }

        self.send_listing(ctrl, listing).await
    }

    async fn send_listing(
        &mut self,
        ctrl: &mut ControlChannel,
        listing: String,
    ) -> Result<u16, CommandError> {
        let socket = self.open_data_connection().await?;
        let representation = Representation::Ascii;

        ctrl.reply(
            150,
            &format!("Opening {} mode data connection.", representation.name()),
        )
        .await?;

        let mut out = RepresentationWriter::new(socket, representation);
        let result = async {
            out.write_chunk(listing.as_bytes()).await?;
            out.shutdown().await
        }
        .await;
        result.map_err(|e| {
            error!("Error while sending listing: {}", e);
            CommandError::reply(550, "No such directory.")
        })?;

        Ok(ctrl.reply(226, "Transfer complete.").await?)
    }
}

impl Default for DataTransferProcess {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the entry names of a directory. Any failure, including `path`
/// not being a directory, surfaces as the listing error.
async fn read_dir_names(path: &Path) -> Result<Vec<String>, CommandError> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(path)
        .await
        .map_err(|_| CommandError::reply(550, "No such directory."))?;
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => entries.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(_) => return Err(CommandError::reply(550, "No such directory.")),
        }
    }
    Ok(entries)
}

/// One long-listing line: type flag, placeholder permissions and
/// link/owner/group fields, size right-justified to at least 8 columns,
/// `MMM dd hh:mm` timestamp, entry name.
fn format_list_entry(
    name: &str,
    is_dir: bool,
    size: u64,
    modified: std::time::SystemTime,
) -> String {
    let date: DateTime<Local> = modified.into();
    format!(
        "{}rwxrwxrwx   1 ftp      ftp      {:>8} {} {}\n",
        if is_dir { 'd' } else { '-' },
        size,
        date.format("%b %d %I:%M"),
        name
    )
}
