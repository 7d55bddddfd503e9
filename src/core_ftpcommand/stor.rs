use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::create_native_path;
use crate::session::Session;

/// Handles the STOR FTP command.
///
/// The whole remainder of the line is the destination path. An existing
/// destination is never overwritten; the DTP reports 550 and leaves the
/// file untouched.
pub async fn handle_stor_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    if arg.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    let native = create_native_path(&session.base_path, &session.current_dir, arg);

    let Session { ctrl, dtp, .. } = session;
    dtp.receive_file(ctrl, &native).await
}
