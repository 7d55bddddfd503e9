use log::info;

use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::utils::next_token;
use crate::session::Session;

/// Parses the PORT argument `h1,h2,h3,h4,p1,p2` into a dotted-IPv4 host and
/// a 16-bit port (`p1` is the high byte).
pub fn parse_port_argument(arg: &str) -> Option<(String, u16)> {
    let parts: Vec<&str> = arg.split(',').collect();
    if parts.len() != 6 {
        return None;
    }

    let mut octets = [0u8; 6];
    for (i, part) in parts.iter().enumerate() {
        octets[i] = part.trim().parse::<u8>().ok()?;
    }

    let host = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
    let port = ((octets[4] as u16) << 8) | octets[5] as u16;
    Some((host, port))
}

/// Handles the PORT (Active Mode) FTP command.
///
/// Only records the announced endpoint; the outbound data connection is
/// opened per transfer by the DTP.
pub async fn handle_port_command(session: &mut Session, arg: &str) -> Result<u16, CommandError> {
    session.check_login()?;

    let arg = next_token(arg)?;
    let (host, port) = parse_port_argument(arg).ok_or(CommandError::MissingArgument)?;

    info!("Received PORT command with endpoint {}:{}", host, port);
    session.dtp.set_data_port(host, port);

    Ok(session.ctrl.reply(200, "PORT command successful.").await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_and_port() {
        let (host, port) = parse_port_argument("127,0,0,1,4,1").unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, (4 << 8) | 1);
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_port_argument("").is_none());
        assert!(parse_port_argument("127,0,0,1,4").is_none());
        assert!(parse_port_argument("127,0,0,1,4,1,9").is_none());
        assert!(parse_port_argument("127,0,0,1,400,1").is_none());
        assert!(parse_port_argument("a,b,c,d,e,f").is_none());
    }
}
