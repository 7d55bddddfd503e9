use thiserror::Error;

/// Failure of one command, mapped to a single coded reply by the control
/// loop. Only the `Io` variant (control-channel failure) ends the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{code} {text}")]
    Reply { code: u16, text: String },

    /// A required token was missing or unreadable; the loop turns this into
    /// the generic `500 '<line>': command not understood.` reply.
    #[error("missing or malformed argument")]
    MissingArgument,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CommandError {
    pub fn reply(code: u16, text: impl Into<String>) -> Self {
        CommandError::Reply {
            code,
            text: text.into(),
        }
    }
}
