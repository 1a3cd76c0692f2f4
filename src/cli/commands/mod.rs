//! One module per subcommand, each exposing `execute`.

pub mod history;
pub mod init;
pub mod practice;
pub mod show;
