use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::create_native_path;
use crate::session::Session;

/// Handles the LIST FTP command.
///
/// Without an argument the current directory is listed. The native path is
/// built from the raw client argument, not the resolved virtual path; see
/// DESIGN.md for why the two code paths are kept apart.
pub async fn handle_list_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let target = match arg.split_whitespace().next() {
        Some(token) => token.to_string(),
        None => session.current_dir.clone(),
    };
    let native = create_native_path(&session.base_path, &session.current_dir, &target);

    let Session { ctrl, dtp, .. } = session;
    dtp.send_list(ctrl, &native).await
}
