//! Poster request model.
//!
//! A [`PosterRequest`] is the fully populated, validated input for one run.
//! Each scenario has its own explicit structure; the on-disk record is the
//! flat JSON object of that structure (the scenario itself comes from the
//! command line and is not stored in the record).
//!
//! Requests are normalized at construction:
//!
//! - text fields are trimmed, and `title` must be non-empty
//! - empty scalar fields with a fixed default take that default
//! - list entries are trimmed, blank entries dropped, an empty list replaced by
//!   the scenario's default list, and a list over its maximum truncated

pub mod defaults;


use crate::error::{PosterError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fixed poster scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scenario {
    /// Course promotion: two panels stacked into one tall poster.
    Course,
    /// Event promotion: one image in a selectable style.
    Event,
    /// Product promotion: one image, cool-toned tech look.
    Product,
}

impl Scenario {
    /// Directory name and CLI value for this scenario.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Course => "course",
            Scenario::Event => "event",
            Scenario::Product => "product",
        }
    }

    /// Banner text shown at the start of a run.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Course => "课程宣传（两张图拼接，科技风）",
            Scenario::Event => "活动宣传（单张图，可选风格）",
            Scenario::Product => "产品宣传（单张图，冷色调科技风）",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual style for event posters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStyle {
    #[default]
    Warm,
    Tech,
    Minimal,
}

impl EventStyle {
    /// All styles in menu order.
    pub const ALL: [EventStyle; 3] = [EventStyle::Warm, EventStyle::Tech, EventStyle::Minimal];

    /// Look up a style by its exact key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "warm" => Some(EventStyle::Warm),
            "tech" => Some(EventStyle::Tech),
            "minimal" => Some(EventStyle::Minimal),
            _ => None,
        }
    }

    /// Look up a style by key, falling back to [`EventStyle::Warm`].
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key.trim().to_lowercase().as_str()).unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            EventStyle::Warm => "warm",
            EventStyle::Tech => "tech",
            EventStyle::Minimal => "minimal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventStyle::Warm => "温暖治愈风",
            EventStyle::Tech => "赛博科技风",
            EventStyle::Minimal => "极简现代风",
        }
    }
}

/// Course promotion input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseInfo {
    pub title: String,
    pub subtitle: String,
    pub stats1: String,
    pub stats2: String,
    pub benefits: Vec<String>,
    pub schedule: Vec<String>,
    pub audiences: Vec<String>,
    pub cta: String,
}

/// Event promotion input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    /// Style key; unknown keys render as the warm style.
    pub style: String,
    pub title: String,
    pub subtitle: String,
    pub benefits: Vec<String>,
    pub cta: String,
}

impl EventInfo {
    pub fn resolved_style(&self) -> EventStyle {
        EventStyle::resolve(&self.style)
    }
}

/// Product promotion input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    pub title: String,
    pub subtitle: String,
    /// Base64-encoded product screenshot, or empty when none was provided.
    pub product_image: String,
    pub features: Vec<String>,
    pub value: String,
    pub cta: String,
}

impl ProductInfo {
    pub fn has_reference_image(&self) -> bool {
        !self.product_image.is_empty()
    }
}

/// A validated poster request for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PosterRequest {
    Course(CourseInfo),
    Event(EventInfo),
    Product(ProductInfo),
}

impl PosterRequest {
    /// Validate and normalize a course request.
    pub fn course(info: CourseInfo) -> Result<Self> {
        let title = require_title(&info.title)?;
        Ok(PosterRequest::Course(CourseInfo {
            title,
            subtitle: info.subtitle.trim().to_string(),
            stats1: or_default(&info.stats1, defaults::COURSE_STATS1),
            stats2: or_default(&info.stats2, defaults::COURSE_STATS2),
            benefits: normalize_list(
                "benefits",
                info.benefits,
                defaults::MAX_COURSE_BENEFITS,
                defaults::COURSE_BENEFITS,
            ),
            schedule: normalize_list(
                "schedule",
                info.schedule,
                defaults::MAX_COURSE_SCHEDULE,
                defaults::COURSE_SCHEDULE,
            ),
            audiences: normalize_list(
                "audiences",
                info.audiences,
                defaults::MAX_COURSE_AUDIENCES,
                defaults::COURSE_AUDIENCES,
            ),
            cta: or_default(&info.cta, defaults::COURSE_CTA),
        }))
    }

    /// Validate and normalize an event request.
    pub fn event(info: EventInfo) -> Result<Self> {
        let title = require_title(&info.title)?;
        Ok(PosterRequest::Event(EventInfo {
            style: or_default(&info.style, defaults::EVENT_STYLE),
            title,
            subtitle: info.subtitle.trim().to_string(),
            benefits: normalize_list(
                "benefits",
                info.benefits,
                defaults::MAX_EVENT_BENEFITS,
                defaults::EVENT_BENEFITS,
            ),
            cta: or_default(&info.cta, defaults::EVENT_CTA),
        }))
    }

    /// Validate and normalize a product request.
    pub fn product(info: ProductInfo) -> Result<Self> {
        let title = require_title(&info.title)?;
        Ok(PosterRequest::Product(ProductInfo {
            title,
            subtitle: info.subtitle.trim().to_string(),
            product_image: info.product_image.trim().to_string(),
            features: normalize_list(
                "features",
                info.features,
                defaults::MAX_PRODUCT_FEATURES,
                defaults::PRODUCT_FEATURES,
            ),
            value: info.value.trim().to_string(),
            cta: or_default(&info.cta, defaults::PRODUCT_CTA),
        }))
    }

    /// Decode a JSON record for the given scenario and validate it.
    ///
    /// Unknown fields are ignored; missing fields take their defaults.
    pub fn from_json(scenario: Scenario, json: &str) -> Result<Self> {
        let decode_err = |e: serde_json::Error| {
            PosterError::InvalidRequest(format!("failed to parse {} record: {}", scenario, e))
        };
        match scenario {
            Scenario::Course => Self::course(serde_json::from_str(json).map_err(decode_err)?),
            Scenario::Event => Self::event(serde_json::from_str(json).map_err(decode_err)?),
            Scenario::Product => Self::product(serde_json::from_str(json).map_err(decode_err)?),
        }
    }

    /// Serialize to the pretty-printed on-disk record.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PosterError::InvalidRequest(format!("failed to serialize request: {}", e))
        })
    }

    pub fn scenario(&self) -> Scenario {
        match self {
            PosterRequest::Course(_) => Scenario::Course,
            PosterRequest::Event(_) => Scenario::Event,
            PosterRequest::Product(_) => Scenario::Product,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PosterRequest::Course(info) => &info.title,
            PosterRequest::Event(info) => &info.title,
            PosterRequest::Product(info) => &info.title,
        }
    }

    /// Field-by-field view used for the confirmation summary.
    pub fn summary_fields(&self) -> Vec<(&'static str, SummaryValue<'_>)> {
        use SummaryValue::{List, Text};
        match self {
            PosterRequest::Course(c) => vec![
                ("title", Text(&c.title)),
                ("subtitle", Text(&c.subtitle)),
                ("stats1", Text(&c.stats1)),
                ("stats2", Text(&c.stats2)),
                ("benefits", List(&c.benefits)),
                ("schedule", List(&c.schedule)),
                ("audiences", List(&c.audiences)),
                ("cta", Text(&c.cta)),
            ],
            PosterRequest::Event(e) => vec![
                ("style", Text(&e.style)),
                ("title", Text(&e.title)),
                ("subtitle", Text(&e.subtitle)),
                ("benefits", List(&e.benefits)),
                ("cta", Text(&e.cta)),
            ],
            PosterRequest::Product(p) => vec![
                ("title", Text(&p.title)),
                ("subtitle", Text(&p.subtitle)),
                if p.has_reference_image() {
                    ("product_image", SummaryValue::Redacted("[产品截图已加载]"))
                } else {
                    ("product_image", Text(""))
                },
                ("features", List(&p.features)),
                ("value", Text(&p.value)),
                ("cta", Text(&p.cta)),
            ],
        }
    }
}

/// One field of the confirmation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    /// Shown with a placeholder instead of the stored value.
    Redacted(&'static str),
}

fn require_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(PosterError::InvalidRequest(
            "title must not be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}

fn or_default(raw: &str, default: &str) -> String {
    match raw.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

fn normalize_list(
    field: &str,
    items: Vec<String>,
    max: usize,
    default: &[&str],
) -> Vec<String> {
    let mut items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        return default.iter().map(|s| s.to_string()).collect();
    }

    if items.len() > max {
        tracing::warn!(
            field,
            supplied = items.len(),
            max,
            "too many entries, keeping the first {}",
            max
        );
        items.truncate(max);
    }
    items
}
