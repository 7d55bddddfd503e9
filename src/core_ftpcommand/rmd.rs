use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::{create_native_path, next_token, resolve_path};
use crate::session::Session;

/// Handles the RMD (Remove Directory) FTP command.
pub async fn handle_rmd_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?;
    let dir_path = resolve_path(&session.current_dir, arg);
    let native = create_native_path(&session.base_path, &session.current_dir, &dir_path);

    let metadata = tokio::fs::metadata(&native).await.map_err(|_| {
        CommandError::reply(550, format!("{}: directory does not exist", arg))
    })?;
    if !metadata.is_dir() {
        return Err(CommandError::reply(550, format!("{}: not a directory", arg)));
    }
    tokio::fs::remove_dir(&native).await.map_err(|_| {
        CommandError::reply(550, format!("{}: could not remove directory", arg))
    })?;

    info!("Directory removed: {:?}", native);
    Ok(session.ctrl.reply(250, "RMD command successful.").await?)
}
