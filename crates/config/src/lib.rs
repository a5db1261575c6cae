mod config;
mod footer;
mod gutter;
mod plugin;
mod sidebar;
mod theme;

pub use self::config::*;
pub use self::footer::*;
pub use self::gutter::*;
pub use self::plugin::*;
pub use self::sidebar::*;
pub use self::theme::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;

fn is_false(value: &bool) -> bool {
    !*value
}
