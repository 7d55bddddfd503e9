use crate::core_ftpcommand::error::CommandError;
use crate::session::Session;

pub async fn handle_noop_command(session: &mut Session, _arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    Ok(session.ctrl.reply(200, "NOOP command successful.").await?)
}
