#![forbid(unsafe_code)]

pub mod cli;
pub mod convert;
pub mod dataset;
pub mod flatten;
pub mod formats;
pub mod logging;
pub mod publish;
pub mod registry;
pub mod storage;
