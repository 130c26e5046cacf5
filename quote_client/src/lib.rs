//! Quote Client — polls the quote server once and appends the raw response to a
//! local log file, prefixed with `Dólar: `.
//!
//! Any transport or file error aborts the run; there is no retry.
#![warn(missing_docs)]
pub mod args;
pub mod poller;
