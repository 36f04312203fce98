//! Terminal front end for the NPF calculator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod session;
