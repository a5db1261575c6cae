pub(crate) use docsite::Result;
pub(crate) use log::{debug, error, info, warn};
