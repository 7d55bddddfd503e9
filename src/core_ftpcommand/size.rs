use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::{create_native_path, next_token, resolve_path};
use crate::session::Session;

/// Handles the SIZE FTP command.
///
/// The size is computed by the session's current representation: literal
/// byte length under binary, post-transcoding length under ASCII.
pub async fn handle_size_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?;
    let file_path = resolve_path(&session.current_dir, arg);
    let native = create_native_path(&session.base_path, &session.current_dir, &file_path);

    let metadata = tokio::fs::metadata(&native)
        .await
        .map_err(|_| CommandError::reply(550, format!("{}: no such file", arg)))?;
    if !metadata.is_file() {
        return Err(CommandError::reply(550, format!("{}: not a plain file", arg)));
    }

    let size = session
        .dtp
        .representation()
        .size_of(&native)
        .await
        .map_err(|e| CommandError::reply(550, e.to_string()))?;

    Ok(session.ctrl.reply(213, &size.to_string()).await?)
}
