//! # wrap-core
//!
//! Core types shared by every crate of the chat export analyzer.
//!
//! This crate provides:
//! - Export record structs (conversations, messages, projects, memories) that
//!   tolerate missing or malformed optional fields
//! - The derived per-conversation record produced by the pipeline
//! - The summary document and its JSON Schema
//! - Day-of-week and label enums used across the summary
//! - Timestamp and fixed UTC offset parsing
//! - Cross-cutting error types

pub mod derived;
pub mod enums;
pub mod errors;
mod lenient;
pub mod records;
pub mod summary;
pub mod text;
pub mod time;

pub use errors::CoreError;
