pub mod app;
pub mod logging;

pub mod action;
pub mod action_handler;
pub mod command;
pub mod file_ops;
pub mod state;

mod input;
mod ui;
