//! End-to-end pipeline tests with a scripted generator.

use super::*;
use crate::config::Settings;
use crate::error::{PosterError, Result};
use crate::layout::OutputLayout;
use crate::prompt::REFERENCE_MARKER;
use crate::request::{CourseInfo, EventInfo, PosterRequest, ProductInfo, Scenario};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Returns scripted responses in order and records every call.
struct ScriptedGenerator {
    responses: RefCell<VecDeque<Result<GeneratedImage>>>,
    calls: RefCell<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<GeneratedImage>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl ImageGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), aspect_ratio.to_string()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(PosterError::Api("unexpected call".to_string())))
    }
}

fn png_image(width: u32, height: u32, color: [u8; 3]) -> GeneratedImage {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    GeneratedImage {
        bytes,
        mime_type: "image/png".to_string(),
    }
}

fn test_settings(root: &Path) -> Settings {
    Settings::default()
        .with_request_delay(Duration::ZERO)
        .with_output_root(root.to_path_buf())
}

fn course_request() -> PosterRequest {
    PosterRequest::course(CourseInfo {
        title: "AI实战营".to_string(),
        subtitle: "x".to_string(),
        benefits: vec!["a".to_string(), "b".to_string()],
        schedule: vec!["s1".to_string(), "s2".to_string()],
        ..Default::default()
    })
    .unwrap()
}

fn layout_for(settings: &Settings, request: &PosterRequest) -> OutputLayout {
    OutputLayout::new(
        &settings.output_root,
        None,
        request.scenario(),
        request.title(),
    )
}

#[test]
fn test_course_success_merges_and_removes_intermediates() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = course_request();
    let generator = ScriptedGenerator::new(vec![
        Ok(png_image(8, 6, [255, 0, 0])),
        Ok(png_image(8, 4, [0, 0, 255])),
    ]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    let outcome = pipeline.run(&request).unwrap();

    assert_eq!(pipeline.state(), RunState::Done);
    assert_eq!(outcome.output_file, root.path().join("course/ai实战营/AI实战营_完整.png"));
    assert_eq!(outcome.message, "✅ 课程海报已生成并拼接");
    assert!(outcome.output_file.exists());

    let merged = image::open(&outcome.output_file).unwrap().to_rgb8();
    assert_eq!(merged.dimensions(), (8, 10));
    assert_eq!(merged.get_pixel(0, 0), &Rgb([255, 0, 0]));
    assert_eq!(merged.get_pixel(0, 9), &Rgb([0, 0, 255]));

    for name in [layout.panel_name(1), layout.panel_name(2)] {
        assert!(!layout.image_path(&name).exists(), "{name} image left behind");
        assert!(!layout.prompt_path(&name).exists(), "{name} prompt left behind");
    }
    assert!(layout.info_path().exists());

    let calls = generator.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].0.contains("上半部分"));
    assert!(calls[1].0.contains("下半部分"));
    assert!(calls.iter().all(|(_, ratio)| ratio == "9:16"));
}

#[test]
fn test_course_first_call_failure_skips_second_call() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = course_request();
    let generator = ScriptedGenerator::new(vec![
        Err(PosterError::EmptyResponse),
        Ok(png_image(2, 2, [0, 0, 0])),
    ]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    let err = pipeline.run(&request).unwrap_err();

    assert!(matches!(err, PosterError::EmptyResponse));
    assert_eq!(pipeline.state(), RunState::Failed);
    assert_eq!(generator.calls().len(), 1);
    assert!(!layout.merged_path().exists());
    assert!(!layout.image_path(&layout.panel_name(1)).exists());
    // The request record is written before any call and kept on failure.
    assert!(layout.info_path().exists());
}

#[test]
fn test_course_second_call_failure_keeps_first_panel() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = course_request();
    let generator = ScriptedGenerator::new(vec![
        Ok(png_image(2, 2, [9, 9, 9])),
        Err(PosterError::Api("provider returned 429".to_string())),
    ]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    assert!(pipeline.run(&request).is_err());

    assert_eq!(generator.calls().len(), 2);
    assert!(layout.image_path(&layout.panel_name(1)).exists());
    assert!(layout.prompt_path(&layout.panel_name(1)).exists());
    assert!(!layout.merged_path().exists());
}

#[test]
fn test_event_single_image_with_prompt_file() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = PosterRequest::event(EventInfo {
        style: "tech".to_string(),
        title: "Rust Meetup".to_string(),
        ..Default::default()
    })
    .unwrap();
    let generator = ScriptedGenerator::new(vec![Ok(png_image(3, 3, [1, 1, 1]))]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    let outcome = pipeline.run(&request).unwrap();

    assert_eq!(outcome.output_file, root.path().join("event/rust-meetup/Rust Meetup.png"));
    assert_eq!(outcome.message, "✅ 活动海报已生成 (赛博科技风)");

    let prompt = std::fs::read_to_string(layout.prompt_path(&layout.single_name())).unwrap();
    assert_eq!(prompt, generator.calls()[0].0);

    let record = std::fs::read_to_string(layout.info_path()).unwrap();
    let reloaded = PosterRequest::from_json(Scenario::Event, &record).unwrap();
    assert_eq!(reloaded, request);
}

#[test]
fn test_product_without_reference_image() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = PosterRequest::product(ProductInfo {
        title: "Widget".to_string(),
        ..Default::default()
    })
    .unwrap();
    let generator = ScriptedGenerator::new(vec![Ok(png_image(2, 2, [0, 0, 0]))]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    let outcome = pipeline.run(&request).unwrap();

    assert_eq!(outcome.message, "✅ 产品海报已生成");
    assert!(!generator.calls()[0].0.contains(REFERENCE_MARKER));

    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(layout.info_path()).unwrap()).unwrap();
    assert_eq!(record["product_image"], "");
}

#[test]
fn test_single_failure_writes_no_image() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = PosterRequest::product(ProductInfo {
        title: "Widget".to_string(),
        ..Default::default()
    })
    .unwrap();
    let generator = ScriptedGenerator::new(vec![Err(PosterError::EmptyResponse)]);

    let layout = layout_for(&settings, &request);
    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    assert!(pipeline.run(&request).is_err());

    assert!(!layout.image_path(&layout.single_name()).exists());
    assert!(!layout.prompt_path(&layout.single_name()).exists());
    assert!(layout.info_path().exists());
}

#[test]
fn test_override_directory_is_used() {
    let root = TempDir::new().unwrap();
    let custom = root.path().join("custom");
    let settings = test_settings(root.path());
    let request = course_request();
    let generator = ScriptedGenerator::new(vec![
        Ok(png_image(2, 2, [0, 0, 0])),
        Ok(png_image(2, 2, [0, 0, 0])),
    ]);

    let layout = OutputLayout::new(
        &settings.output_root,
        Some(&custom),
        request.scenario(),
        request.title(),
    );
    let mut pipeline = Pipeline::new(&generator, &settings, layout);
    let outcome = pipeline.run(&request).unwrap();

    assert_eq!(outcome.output_file, custom.join("AI实战营_完整.png"));
    assert!(custom.join("AI实战营_info.json").exists());
}

#[test]
fn test_cleanup_is_idempotent() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = course_request();
    let generator = ScriptedGenerator::new(vec![]);
    let layout = layout_for(&settings, &request);
    let pipeline = Pipeline::new(&generator, &settings, layout.clone());

    let name = layout.panel_name(1);
    std::fs::create_dir_all(layout.dir()).unwrap();
    std::fs::write(layout.image_path(&name), b"png").unwrap();

    pipeline.remove_intermediates(&[name.as_str()]).unwrap();
    pipeline.remove_intermediates(&[name.as_str()]).unwrap();

    assert!(!layout.image_path(&name).exists());
}

#[test]
fn test_run_state_display() {
    assert_eq!(RunState::Generating(2).to_string(), "generating[2]");
    assert_eq!(RunState::Done.to_string(), "done");
}

#[test]
fn test_failed_image_write_leaves_no_orphan_prompt() {
    let root = TempDir::new().unwrap();
    let settings = test_settings(root.path());
    let request = PosterRequest::product(ProductInfo {
        title: "Widget".to_string(),
        ..Default::default()
    })
    .unwrap();
    let generator = ScriptedGenerator::new(vec![Ok(png_image(2, 2, [0, 0, 0]))]);

    let layout = layout_for(&settings, &request);
    let name = layout.single_name();
    // A directory squatting on the image path makes the final rename fail.
    std::fs::create_dir_all(layout.image_path(&name)).unwrap();

    let mut pipeline = Pipeline::new(&generator, &settings, layout.clone());
    let err = pipeline.run(&request).unwrap_err();

    assert!(matches!(err, PosterError::Io(_)));
    assert_eq!(pipeline.state(), RunState::Failed);
    assert!(!layout.prompt_path(&name).exists());
    assert!(layout.image_path(&name).is_dir());
}
