use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

/// Handles the PASV FTP command. Passive mode is not offered by this
/// server; only active mode (PORT) data connections exist.
pub async fn handle_pasv_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    Err(CommandError::reply(500, "PASV: command not supported."))
}
