//! Record emission
//!
//! Serializes engine `Message`s to the delivery boundary: JSON lines for
//! machine consumption, or a human-readable rendering. Where the records
//! go after this boundary is the downstream consumer's business.

mod writer;

pub use writer::{message_to_json, Format, MessageWriter};
