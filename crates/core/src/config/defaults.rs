/// Profile used when neither the command line, the environment nor the file names one.
pub const DEFAULT_PROFILE: &str = "default";

/// File name of the config file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".fsoc";

/// File name of the per-invocation log under the temp directory.
pub const LOG_FILE_NAME: &str = "fsoc.log";
