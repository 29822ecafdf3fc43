pub mod common;
pub mod driver;
pub mod layout_engine;
pub mod sys;
