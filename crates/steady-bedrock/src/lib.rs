//! steady-bedrock
//!
//! The generative-text boundary: prompt builders for motivational content,
//! chatbot replies, and journal reflections, plus the single Bedrock
//! Converse call that executes them. No streaming; one prompt in, one text
//! out.

pub mod context;
pub mod error;
pub mod generate;
pub mod prompts;
