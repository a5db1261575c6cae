pub use crate::docsite_model::Issue;
pub use crate::docsite_model::Severity;
pub use crate::docsite_model::Site;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::new::create_new_project;

pub mod docsite_model;
pub mod error;

mod new;

pub use docsite_config::Format;
pub use docsite_config::SiteConfig;
