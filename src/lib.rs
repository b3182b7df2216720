pub mod commands;
pub mod error;
pub mod fs_utils;
pub mod git_config;
pub mod logging;
pub mod paths;
pub mod state;
pub mod switch;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
