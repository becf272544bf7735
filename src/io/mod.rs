// io/mod.rs
// 视图参数、TOML配置与命令行
pub mod cli;
pub mod config_loader;
pub mod view_settings;
