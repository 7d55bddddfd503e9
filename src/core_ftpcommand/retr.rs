use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::create_native_path;
use crate::session::Session;

/// Handles the RETR FTP command.
///
/// The whole remainder of the line is the path, so file names containing
/// spaces survive. The native path comes from the raw argument (see
/// DESIGN.md on the two path-construction helpers).
pub async fn handle_retr_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    if arg.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    let native = create_native_path(&session.base_path, &session.current_dir, arg);

    let Session { ctrl, dtp, .. } = session;
    dtp.send_file(ctrl, &native).await
}
