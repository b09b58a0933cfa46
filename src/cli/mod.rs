pub mod command;
pub mod display;
pub mod menu;
pub mod run;

pub use run::{ControlLoop, Flow, run_app};
