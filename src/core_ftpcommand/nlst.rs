use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::create_native_path;
use crate::session::Session;

/// Handles the NLST FTP command: bare entry names, one per line.
pub async fn handle_nlst_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let target = match arg.split_whitespace().next() {
        Some(token) => token.to_string(),
        None => session.current_dir.clone(),
    };
    let native = create_native_path(&session.base_path, &session.current_dir, &target);

    let Session { ctrl, dtp, .. } = session;
    dtp.send_name_list(ctrl, &native).await
}
