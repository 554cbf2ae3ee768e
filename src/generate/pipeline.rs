//! Per-run generation pipeline.
//!
//! ```text
//! Collecting → Building → Generating[1] ─┬─────────────────────────────────────────→ Done
//!                                        └→ Generating[2] → Merging → Cleanup → Done
//!                       (any step) → Failed
//! ```
//!
//! The request record is written before the first API call and stays on disk
//! whatever happens afterwards. There is no rollback: a failed run keeps the
//! artifacts of the steps that completed.

use super::client::ImageGenerator;
use super::compose::merge_panel_files;
use crate::config::Settings;
use crate::error::Result;
use crate::fs::{atomic_write, atomic_write_file, ensure_dir, remove_if_exists};
use crate::layout::OutputLayout;
use crate::prompt::{PromptSet, build_prompts};
use crate::request::PosterRequest;
use std::fmt;
use std::path::PathBuf;

/// Pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Collecting,
    Building,
    /// Waiting on API call `n` (1-based).
    Generating(usize),
    Merging,
    Cleanup,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Collecting => f.write_str("collecting"),
            RunState::Building => f.write_str("building"),
            RunState::Generating(n) => write!(f, "generating[{n}]"),
            RunState::Merging => f.write_str("merging"),
            RunState::Cleanup => f.write_str("cleanup"),
            RunState::Done => f.write_str("done"),
            RunState::Failed => f.write_str("failed"),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The poster the user should look at.
    pub output_file: PathBuf,
    pub message: String,
}

/// Drives one request through generation.
pub struct Pipeline<'a, G: ImageGenerator + ?Sized> {
    generator: &'a G,
    settings: &'a Settings,
    layout: OutputLayout,
    state: RunState,
}

impl<'a, G: ImageGenerator + ?Sized> Pipeline<'a, G> {
    pub fn new(generator: &'a G, settings: &'a Settings, layout: OutputLayout) -> Self {
        Self {
            generator,
            settings,
            layout,
            state: RunState::Collecting,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run the request to completion or to the first failure.
    pub fn run(&mut self, request: &PosterRequest) -> Result<RunOutcome> {
        match self.execute(request) {
            Ok(outcome) => {
                self.advance(RunState::Done);
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(state = %self.state, error = %err, "poster generation failed");
                self.advance(RunState::Failed);
                Err(err)
            }
        }
    }

    fn execute(&mut self, request: &PosterRequest) -> Result<RunOutcome> {
        self.advance(RunState::Building);

        ensure_dir(self.layout.dir())?;
        let info_path = self.layout.info_path();
        atomic_write_file(&info_path, &request.to_json()?)?;
        tracing::debug!(path = %info_path.display(), "saved request record");

        let prompts = build_prompts(request)?;
        tracing::debug!(calls = prompts.call_count(), "built prompts");

        match prompts {
            PromptSet::Single(prompt) => {
                let name = self.layout.single_name();
                let image = self.generate_step(1, &prompt, &name)?;
                Ok(RunOutcome {
                    output_file: image,
                    message: success_message(request),
                })
            }
            PromptSet::Panels { top, bottom } => {
                let top_name = self.layout.panel_name(1);
                let bottom_name = self.layout.panel_name(2);

                let top_image = self.generate_step(1, &top, &top_name)?;

                if !self.settings.request_delay.is_zero() {
                    tracing::debug!(
                        delay_ms = self.settings.request_delay.as_millis() as u64,
                        "waiting before next request"
                    );
                    std::thread::sleep(self.settings.request_delay);
                }

                let bottom_image = self.generate_step(2, &bottom, &bottom_name)?;

                self.advance(RunState::Merging);
                let merged = self.layout.merged_path();
                merge_panel_files(&top_image, &bottom_image, &merged)?;

                self.advance(RunState::Cleanup);
                self.remove_intermediates(&[top_name.as_str(), bottom_name.as_str()])?;

                Ok(RunOutcome {
                    output_file: merged,
                    message: success_message(request),
                })
            }
        }
    }

    /// Call the API once and persist the image with its prompt.
    fn generate_step(&mut self, step: usize, prompt: &str, name: &str) -> Result<PathBuf> {
        self.advance(RunState::Generating(step));
        tracing::info!(
            step,
            aspect_ratio = %self.settings.aspect_ratio,
            "calling image API"
        );

        let image = self.generator.generate(prompt, &self.settings.aspect_ratio)?;

        // Prompt first; an image on disk always has its prompt beside it.
        let prompt_path = self.layout.prompt_path(name);
        let image_path = self.layout.image_path(name);
        atomic_write_file(&prompt_path, prompt)?;
        if let Err(err) = atomic_write(&image_path, &image.bytes) {
            remove_if_exists(&prompt_path)?;
            return Err(err);
        }

        tracing::info!(
            path = %image_path.display(),
            bytes = image.bytes.len(),
            mime_type = %image.mime_type,
            "saved generated image"
        );
        Ok(image_path)
    }

    /// Delete intermediate images and their prompt files. Safe to repeat.
    pub fn remove_intermediates(&self, names: &[&str]) -> Result<()> {
        for name in names {
            remove_if_exists(self.layout.image_path(name))?;
            remove_if_exists(self.layout.prompt_path(name))?;
        }
        tracing::debug!(count = names.len(), "removed intermediate panels");
        Ok(())
    }

    fn advance(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
    }
}

fn success_message(request: &PosterRequest) -> String {
    match request {
        PosterRequest::Course(_) => "✅ 课程海报已生成并拼接".to_string(),
        PosterRequest::Event(info) => {
            format!("✅ 活动海报已生成 ({})", info.resolved_style().display_name())
        }
        PosterRequest::Product(_) => "✅ 产品海报已生成".to_string(),
    }
}
