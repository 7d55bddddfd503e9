use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::next_token;
use crate::core_representation::Representation;
use crate::session::Session;

/// Handles the TYPE FTP command.
///
/// The argument must be a single character known to the representation
/// registry (`A` or `I`). On an unknown code the session representation is
/// left untouched.
pub async fn handle_type_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?.to_ascii_uppercase();
    if arg.len() != 1 {
        return Err(CommandError::reply(
            500,
            format!("TYPE: invalid argument '{}'", arg),
        ));
    }

    let code = arg.chars().next().unwrap_or_default();
    let representation = Representation::from_code(code).ok_or_else(|| {
        CommandError::reply(500, format!("TYPE: invalid argument '{}'", arg))
    })?;

    session.dtp.set_representation(representation);
    info!("Type set to {}", arg);

    Ok(session
        .ctrl
        .reply(200, &format!("Type set to {}", arg))
        .await?)
}
