//! different utility modules used throughout the project
/// console and file logging on top of simplelog
pub mod logger;
/// tiny module to pretty-print a worked integral as a table
pub mod report;
