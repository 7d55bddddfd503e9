use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

/// Handles the PASS FTP command.
///
/// Out of sequence without a prior USER. Any password is accepted; there is
/// no credential store behind this server.
pub async fn handle_pass_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    let username = match &session.username {
        Some(username) => username.clone(),
        None => return Err(CommandError::reply(503, "Login with USER first.")),
    };

    session.is_authenticated = true;
    info!("User {} logged in", username);

    Ok(session
        .ctrl
        .reply(230, &format!("User {} logged in.", username))
        .await?)
}
