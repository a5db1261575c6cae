mod check;
mod site;

pub use self::check::Issue;
pub use self::check::Severity;
pub use self::site::DEFAULT_BASE;
pub use self::site::Site;
pub use self::site::resolve_base;
