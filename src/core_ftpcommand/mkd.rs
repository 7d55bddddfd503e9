use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::{create_native_path, next_token, resolve_path};
use crate::session::Session;

/// Handles the MKD (Make Directory) FTP command.
///
/// The argument is resolved against the current virtual directory before
/// the native path is built, so `..` segments cannot climb above the
/// virtual root.
pub async fn handle_mkd_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?;
    let dir_path = resolve_path(&session.current_dir, arg);
    let native = create_native_path(&session.base_path, &session.current_dir, &dir_path);

    if tokio::fs::metadata(&native).await.is_ok() {
        return Err(CommandError::reply(550, format!("{}: file exists", arg)));
    }
    tokio::fs::create_dir(&native).await.map_err(|_| {
        CommandError::reply(550, format!("{}: directory could not be created", arg))
    })?;

    info!("Directory created: {:?}", native);

    // The reply shows the directory without the resolver's trailing slash.
    let shown = if dir_path.len() > 1 {
        dir_path.trim_end_matches('/')
    } else {
        dir_path.as_str()
    };
    Ok(session
        .ctrl
        .reply(257, &format!("\"{}\" directory created", shown))
        .await?)
}
