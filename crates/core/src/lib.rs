//! Core library for turning loosely-formatted subtitle transcripts into
//! numbered subtitle blocks with start/end timestamp ranges.

pub mod pipeline;
pub mod timestamp;
