pub mod config;
pub mod grading;
pub mod output;
pub mod report;
pub mod reward;
pub mod role;
pub mod store;
pub mod team;
pub mod timeline;
