use std::path::{Path, PathBuf};

use crate::core_ftpcommand::error::CommandError;

/// Normalizes a client-supplied path against the session's current virtual
/// directory. The result always starts at the virtual root and never
/// contains `.` or `..` segments; `..` at the root is a no-op. Each segment
/// is followed by `/`, so root resolves to `"/"` and `sub` from `/` to
/// `/sub/`.
pub fn resolve_path(current_dir: &str, path: &str) -> String {
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", current_dir, path)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/').filter(|s| !s.is_empty()) {
        match segment {
            ".." => {
                segments.pop();
            }
            "." => {}
            other => segments.push(other),
        }
    }

    let mut resolved = String::from("/");
    for segment in segments {
        resolved.push_str(segment);
        resolved.push('/');
    }
    resolved
}

/// Maps an FTP path to a native one by raw concatenation: `base + path` for
/// absolute-looking input, `base + current_dir + "/" + path` otherwise.
///
/// This performs no traversal collapsing of its own. Handlers that need the
/// `..`-safe form must call [`resolve_path`] first and feed the result in;
/// LIST/NLST/RETR/STOR deliberately pass the raw client argument (see
/// DESIGN.md). A trailing `/` left over from a resolved directory path is
/// trimmed so native file operations accept the result.
pub fn create_native_path(base_path: &Path, current_dir: &str, ftp_path: &str) -> PathBuf {
    let mut native = base_path.to_string_lossy().into_owned();
    if !ftp_path.starts_with('/') {
        native.push_str(current_dir);
        native.push('/');
    }
    native.push_str(ftp_path);
    while native.len() > 1 && native.ends_with('/') {
        native.pop();
    }
    PathBuf::from(native)
}

/// First whitespace-delimited token of a command argument, or the
/// missing-argument error the loop maps to the generic 500 reply.
pub fn next_token(arg: &str) -> Result<&str, CommandError> {
    arg.split_whitespace()
        .next()
        .ok_or(CommandError::MissingArgument)
}
