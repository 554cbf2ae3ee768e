//! Prompt generation for poster requests.
//!
//! Building prompts is pure: no I/O, no randomness, no global mutable state.
//! The same [`PosterRequest`] always yields the same [`PromptSet`].
//!
//! - **course**: two prompts, upper and lower panel of one tall poster
//! - **event**: one prompt, style block chosen by table lookup
//! - **product**: one prompt, optionally embedding the reference screenshot
//!
//! Templates are fixed text rendered with the `{variable}` engine in
//! [`template`].

mod course;
pub mod event;
mod product;
pub mod template;


pub use product::REFERENCE_MARKER;

use crate::error::Result;
use crate::request::PosterRequest;

/// Prompts produced for one request, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSet {
    /// A single poster image.
    Single(String),
    /// Two panels, stacked top then bottom.
    Panels { top: String, bottom: String },
}

impl PromptSet {
    /// Number of prompts (and therefore API calls).
    pub fn call_count(&self) -> usize {
        match self {
            PromptSet::Single(_) => 1,
            PromptSet::Panels { .. } => 2,
        }
    }

    /// Prompts in submission order.
    pub fn prompts(&self) -> Vec<&str> {
        match self {
            PromptSet::Single(prompt) => vec![prompt.as_str()],
            PromptSet::Panels { top, bottom } => vec![top.as_str(), bottom.as_str()],
        }
    }
}

/// Build the prompt set for a validated request.
pub fn build_prompts(request: &PosterRequest) -> Result<PromptSet> {
    match request {
        PosterRequest::Course(info) => {
            let (top, bottom) = course::build(info)?;
            Ok(PromptSet::Panels { top, bottom })
        }
        PosterRequest::Event(info) => Ok(PromptSet::Single(event::build(info)?)),
        PosterRequest::Product(info) => Ok(PromptSet::Single(product::build(info)?)),
    }
}

/// `"1. a\n2. b\n"` for a list of entries.
fn numbered_lines(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item))
        .collect()
}
