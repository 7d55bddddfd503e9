use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

/// Handles the PWD FTP command: reports the current virtual directory.
pub async fn handle_pwd_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let current_dir = session.current_dir.clone();
    Ok(session.ctrl.reply(257, &current_dir).await?)
}
