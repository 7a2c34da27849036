pub(crate) mod completion;
pub(crate) mod config;
pub(crate) mod help;
pub(crate) mod status;
pub(crate) mod version;
