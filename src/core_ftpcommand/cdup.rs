use crate::core_ftpcommand::cwd::change_directory;
use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

/// Handles the CDUP FTP command: a CWD to the parent directory. At the
/// virtual root this is a no-op, not an error.
pub async fn handle_cdup_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    change_directory(session, "..", "..").await
}
