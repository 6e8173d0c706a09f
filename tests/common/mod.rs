#![allow(dead_code)]

pub mod command;
pub mod file;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
