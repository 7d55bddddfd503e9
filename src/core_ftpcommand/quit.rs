use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

/// Handles the QUIT FTP command. The 221 return is the control loop's
/// signal to close the connection.
pub async fn handle_quit_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.username = None;
    session.is_authenticated = false;
    info!("Received QUIT command. Closing connection.");

    Ok(session.ctrl.reply(221, "Goodbye.").await?)
}
