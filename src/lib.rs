pub mod error;
pub mod platform;
pub mod report;
pub mod results;
pub mod runner;
pub mod verifier;
