use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::next_token;
use crate::session::Session;

/// Handles the USER FTP command.
///
/// Records the username and asks for a password. Always replies 331,
/// whatever state the session is in; authentication only happens on PASS.
pub async fn handle_user_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    let username = next_token(arg)?.to_string();
    info!("Received USER command with username: {}", username);

    let reply_text = format!("Password required for {}.", username);
    session.username = Some(username);

    Ok(session.ctrl.reply(331, &reply_text).await?)
}
