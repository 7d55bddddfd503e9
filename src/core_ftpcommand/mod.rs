// Here's the list of the FTP commands implemented
pub mod cdup;
pub mod cwd;
pub mod dele;
pub mod list;
pub mod mkd;
pub mod nlst;
pub mod noop;
pub mod pass;
pub mod pwd;
pub mod quit;
pub mod rein;
pub mod retr;
pub mod rmd;
pub mod size;
pub mod stor;
pub mod type_;
pub mod user;

// Dispatch, errors and the common helpers are here
pub mod error;
pub mod ftpcommand;
pub mod handlers;
pub mod utils;
