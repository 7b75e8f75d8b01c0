//! Session-level streaming types.
//!
//! - [`stream::StreamEvent`] — a single event in a streamed model response

pub mod stream;
