//! resfind — search the tools & resources catalog.
//!
//! The binary is a thin shell over [`resfind_core`] and [`resfind_delivery`];
//! argument parsing and command dispatch live in [`cli`] so integration tests
//! can drive them without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! cli ──► ResourceQuery ──► fetch_resources ──► DeliveryClient ──► JSON on stdout
//! ```

pub mod cli;
