use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use tokio::net::{TcpListener, TcpStream};

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::handlers::dispatch;
use crate::session::Session;
use crate::Config;

/// Binds the control port and hands every accepted connection to its own
/// task. Sessions share nothing; a failed session only takes itself down.
pub async fn start_server(listen_port: u16, config: Arc<Config>) -> Result<()> {
    let listener = TcpListener::bind(format!("0.0.0.0:{}", listen_port)).await?;
    info!("Server listening on port {}", listen_port);

    let base_path = PathBuf::from(&config.server.base_dir);

    loop {
        let (socket, addr) = listener.accept().await?;
        info!("New connection from {:?}", addr);

        let base_path = base_path.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, base_path).await {
                error!("Connection error: {:?}", e);
            }
            info!("Connection closed for {:?}", addr);
        });
    }
}

/// Drives one control connection: greeting, then one command per line until
/// QUIT, disconnect, or a control-channel I/O failure.
pub async fn handle_connection(socket: TcpStream, base_path: PathBuf) -> std::io::Result<()> {
    let peer = socket.peer_addr()?;
    let mut session = Session::new(socket, base_path);

    session
        .ctrl
        .reply(220, &format!("{} FTP server is ready", peer.ip()))
        .await?;

    let mut buffer = String::new();
    loop {
        let n = session.ctrl.read_line(&mut buffer).await?;
        if n == 0 {
            info!("Client {} disconnected", peer);
            break;
        }

        let line = buffer.trim_end_matches(['\r', '\n']).to_string();
        info!("Received command: {}", line);

        let mut parts = line.splitn(2, ' ');
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default().trim_end();

        let command = match FtpCommand::from_str(verb) {
            Some(command) => command,
            None => {
                reply_not_understood(&mut session, &line).await?;
                continue;
            }
        };

        match dispatch(&mut session, command, arg).await {
            Ok(code) => {
                if code == 221 {
                    break;
                }
            }
            Err(CommandError::Reply { code, text }) => {
                session.ctrl.reply(code, &text).await?;
            }
            Err(CommandError::MissingArgument) => {
                reply_not_understood(&mut session, &line).await?;
            }
            Err(CommandError::Io(e)) => {
                // Control channel is gone; nothing left to reply to.
                error!("Control connection failure for {}: {}", peer, e);
                return Err(e);
            }
        }
    }
    Ok(())
}

async fn reply_not_understood(session: &mut Session, line: &str) -> std::io::Result<()> {
    session
        .ctrl
        .reply(500, &format!("'{}': command not understood.", line))
        .await?;
    Ok(())
}
