//! Latency Breakdown
//!
//! Aggregation and charting of RocksDB snapshot-read latency, broken
//! down by pipeline stage (snapshot, memtable, per-level SST lookup,
//! post-processing).
//!
//! This crate provides the core implementation for the
//! `latency-breakdown` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! latency-breakdown run --workload uniform --rocksdb both
//! latency-breakdown graph breakdown.log --labels
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
