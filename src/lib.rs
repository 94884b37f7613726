//! Income Engine for UK take-home pay estimates
//!
//! This crate turns an hourly wage or annual salary into gross and net
//! monthly income, estimating income tax and employee National Insurance
//! for a configurable tax year, and serves the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
