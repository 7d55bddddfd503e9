use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_network::dtp::DataTransferProcess;
use crate::session::Session;

/// Handles the REIN (Reinitialize) FTP command.
///
/// Discards the authentication, the current directory and the whole DTP
/// state (representation back to ASCII, data endpoint forgotten), leaving
/// the control connection open for a fresh login.
pub async fn handle_rein_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    session.username = None;
    session.is_authenticated = false;
    session.current_dir = String::from("/");
    session.dtp = DataTransferProcess::new();
    info!("Session reinitialized");

    Ok(session
        .ctrl
        .reply(220, "Service ready for new user.")
        .await?)
}
