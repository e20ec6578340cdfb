pub(crate) mod config;
pub(crate) mod organize;
pub(crate) mod rename;
