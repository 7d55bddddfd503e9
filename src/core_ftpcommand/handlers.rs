use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_network::{pasv, port};
use crate::session::Session;

/// Explicit verb-to-handler dispatch. Every handler has the same shape:
/// the session plus the remainder of the command line, producing the reply
/// code it sent (or a `CommandError` the control loop converts).
pub async fn dispatch(
    session: &mut Session,
    command: FtpCommand,
    arg: &str,
) -> Result<u16, CommandError> {
    match command {
        FtpCommand::USER => crate::core_ftpcommand::user::handle_user_command(session, arg).await,
        FtpCommand::PASS => crate::core_ftpcommand::pass::handle_pass_command(session, arg).await,
        FtpCommand::QUIT => crate::core_ftpcommand::quit::handle_quit_command(session, arg).await,
        FtpCommand::PWD => crate::core_ftpcommand::pwd::handle_pwd_command(session, arg).await,
        FtpCommand::LIST => crate::core_ftpcommand::list::handle_list_command(session, arg).await,
        FtpCommand::NLST => crate::core_ftpcommand::nlst::handle_nlst_command(session, arg).await,
        FtpCommand::CWD => crate::core_ftpcommand::cwd::handle_cwd_command(session, arg).await,
        FtpCommand::CDUP => crate::core_ftpcommand::cdup::handle_cdup_command(session, arg).await,
        FtpCommand::NOOP => crate::core_ftpcommand::noop::handle_noop_command(session, arg).await,
        FtpCommand::MKD => crate::core_ftpcommand::mkd::handle_mkd_command(session, arg).await,
        FtpCommand::RMD => crate::core_ftpcommand::rmd::handle_rmd_command(session, arg).await,
        FtpCommand::DELE => crate::core_ftpcommand::dele::handle_dele_command(session, arg).await,
        FtpCommand::RETR => crate::core_ftpcommand::retr::handle_retr_command(session, arg).await,
        FtpCommand::STOR => crate::core_ftpcommand::stor::handle_stor_command(session, arg).await,
        FtpCommand::PORT => port::handle_port_command(session, arg).await,
        FtpCommand::PASV => pasv::handle_pasv_command(session, arg).await,
        FtpCommand::TYPE => crate::core_ftpcommand::type_::handle_type_command(session, arg).await,
        FtpCommand::SIZE => crate::core_ftpcommand::size::handle_size_command(session, arg).await,
        FtpCommand::REIN => crate::core_ftpcommand::rein::handle_rein_command(session, arg).await,
    }
}
