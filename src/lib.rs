pub mod action;
pub mod action_handler;
pub mod app;
pub mod config;
pub mod dialog;
pub mod file_access;
pub mod file_ops;
pub mod input;
pub mod logging;
pub mod state;

mod paths;
mod ui;
