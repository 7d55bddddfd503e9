use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::{create_native_path, resolve_path};
use crate::session::Session;

/// Handles the CWD FTP command.
///
/// The target is resolved against the current virtual directory (so `..`
/// can never climb above the virtual root) and must name an existing
/// directory.
pub async fn handle_cwd_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = arg.trim();
    let target = if arg.is_empty() { "/" } else { arg };

    change_directory(session, target, arg).await
}

pub(crate) async fn change_directory(
    session: &mut Session,
    target: &str,
    reported_arg: &str,
) -> Result<u16, CommandError> {
    let new_dir = resolve_path(&session.current_dir, target);
    let native = create_native_path(&session.base_path, &session.current_dir, &new_dir);

    let metadata = tokio::fs::metadata(&native).await.map_err(|_| {
        CommandError::reply(550, format!("{}: no such directory", reported_arg))
    })?;
    if !metadata.is_dir() {
        return Err(CommandError::reply(
            550,
            format!("{}: not a directory", reported_arg),
        ));
    }

    info!("Changing directory to {}", new_dir);
    session.current_dir = new_dir;
    Ok(session.ctrl.reply(250, "CWD command successful.").await?)
}
