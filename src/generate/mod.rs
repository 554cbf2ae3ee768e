//! Generation runner: API calls, artifact persistence, and panel merging.
//!
//! - **Client**: [`ImageGenerator`] seam and the Gemini implementation
//! - **Pipeline**: the per-run state machine that writes artifacts
//! - **Compose**: vertical stacking of the two course panels

mod client;
pub mod compose;
mod pipeline;
mod wire;

#[cfg(test)]
mod tests;

pub use client::{GeminiClient, GeneratedImage, ImageGenerator};
pub use pipeline::{Pipeline, RunState};
