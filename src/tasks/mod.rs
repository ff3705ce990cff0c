//! Background Tasks Module
//!
//! # Tasks
//! - Reap: removes expired cache entries at a fixed cadence

mod reaper;

pub use reaper::spawn_reap_task;
