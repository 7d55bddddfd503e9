use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::{create_native_path, next_token, resolve_path};
use crate::session::Session;

/// Handles the DELE (Delete File) FTP command.
pub async fn handle_dele_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?;
    let file_path = resolve_path(&session.current_dir, arg);
    let native = create_native_path(&session.base_path, &session.current_dir, &file_path);

    if tokio::fs::metadata(&native).await.is_err() {
        return Err(CommandError::reply(
            550,
            format!("{}: file does not exist", arg),
        ));
    }
    tokio::fs::remove_file(&native).await.map_err(|_| {
        CommandError::reply(550, format!("{}: could not delete file", arg))
    })?;

    info!("File deleted: {:?}", native);
    Ok(session.ctrl.reply(250, "DELE command successful.").await?)
}
