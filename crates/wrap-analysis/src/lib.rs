//! # wrap-analysis
//!
//! Turns a chat export directory into a year-in-review summary.
//!
//! The run is a straight line: [`load_export`] reads the JSON files,
//! [`Pipeline::run`] filters conversations to the target local year, derives
//! per-conversation values and aggregates them, and [`write_outputs`] writes
//! `summary.json` (plus optional `conversations.jsonl`). Only the first and
//! last steps touch the filesystem.
//!
//! ```no_run
//! use wrap_analysis::{Pipeline, load_export, write_outputs};
//! use wrap_config::WrapConfig;
//!
//! let config = WrapConfig::load(None).expect("config");
//! let export = load_export(&config.paths).expect("export");
//! let analysis = Pipeline::new(&config, 2025).run(&export);
//! write_outputs(&config.paths, &analysis.summary, &analysis.conversations, false)
//!     .expect("write");
//! ```

pub mod derive;
pub mod distribution;
pub mod energy;
pub mod error;
pub mod filter;
pub mod highlights;
pub mod load;
pub mod output;
pub mod pipeline;
pub mod topics;

pub use error::AnalysisError;
pub use load::{Export, load_export};
pub use output::{WrittenFiles, write_outputs};
pub use pipeline::{Analysis, Pipeline};
pub use topics::TopicClassifier;
