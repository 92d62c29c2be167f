pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod fixed;
