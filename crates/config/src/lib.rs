mod config;
mod integration;

pub use self::config::*;
pub use self::integration::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
