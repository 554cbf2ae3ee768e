//! Per-scenario question flows.

use super::prompter::Prompter;
use crate::error::Result;
use crate::fs::expand_home;
use crate::request::defaults;
use crate::request::{CourseInfo, EventInfo, EventStyle, PosterRequest, ProductInfo, Scenario};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{BufRead, Write};

const SECTION_RULE: &str = "--------------------------------------------------";

/// Run the interactive flow for `scenario`.
pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    scenario: Scenario,
) -> Result<PosterRequest> {
    match scenario {
        Scenario::Course => collect_course(prompter),
        Scenario::Event => collect_event(prompter),
        Scenario::Product => collect_product(prompter),
    }
}

pub fn collect_course<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PosterRequest> {
    prompter.say("\n📚 课程宣传海报")?;
    prompter.say(SECTION_RULE)?;

    let title = prompter.ask("课程标题（如：AI项目实战营）: ")?;
    let subtitle = prompter.ask("副标题/Slogan（如：转型AI产品经理必看的Agent实战课）: ")?;

    prompter.say("\n📊 信任背书数据（可选）:")?;
    let stats1 = prompter.ask_or(
        &format!("数据1 (默认: {}): ", defaults::COURSE_STATS1),
        defaults::COURSE_STATS1,
    )?;
    let stats2 = prompter.ask_or(
        &format!("数据2 (默认: {}): ", defaults::COURSE_STATS2),
        defaults::COURSE_STATS2,
    )?;

    prompter.say("\n💎 核心卖点（3-4条，口语化表达，如\"你可以收获...\"）:")?;
    let benefits = prompter.ask_list(defaults::MAX_COURSE_BENEFITS, |n| {
        format!("卖点{n} (直接回车结束): ")
    })?;

    prompter.say("\n📅 课程安排（4条左右）:")?;
    let schedule = prompter.ask_list(defaults::MAX_COURSE_SCHEDULE, |n| {
        format!("安排{n} (直接回车结束): ")
    })?;

    prompter.say("\n👥 适合人群（3组）:")?;
    for (i, audience) in defaults::COURSE_AUDIENCES.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, audience))?;
    }
    let use_default = prompter.ask("使用默认? (y/n, 默认y): ")?;
    let audiences = if use_default.eq_ignore_ascii_case("n") {
        prompter.ask_exact(defaults::MAX_COURSE_AUDIENCES, |n| format!("人群{n}: "))?
    } else {
        Vec::new()
    };

    let cta = prompter.ask_or(
        &format!("底部CTA (默认: {}): ", defaults::COURSE_CTA),
        defaults::COURSE_CTA,
    )?;

    PosterRequest::course(CourseInfo {
        title,
        subtitle,
        stats1,
        stats2,
        benefits,
        schedule,
        audiences,
        cta,
    })
}

pub fn collect_event<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PosterRequest> {
    prompter.say("\n🎉 活动宣传海报")?;
    prompter.say(SECTION_RULE)?;

    prompter.say("\n🎨 请选择视觉风格：")?;
    for style in EventStyle::ALL {
        prompter.say(&format!("  {}. {}", style.key(), style.display_name()))?;
    }
    let choice = prompter.ask(&format!("选择 (默认: {}): ", defaults::EVENT_STYLE))?;
    let style = EventStyle::resolve(&choice);
    prompter.say(&format!("已选择：{}", style.display_name()))?;

    let title = prompter.ask("\n活动标题: ")?;
    let subtitle = prompter.ask("副标题: ")?;

    prompter.say("\n🎁 核心福利亮点（3条左右，视觉展示为主）:")?;
    let benefits = prompter.ask_list(defaults::MAX_EVENT_BENEFITS, |n| {
        format!("福利{n} (直接回车结束): ")
    })?;

    let cta = prompter.ask_or(
        &format!("\n底部CTA (如: {}): ", defaults::EVENT_CTA),
        defaults::EVENT_CTA,
    )?;

    PosterRequest::event(EventInfo {
        style: style.key().to_string(),
        title,
        subtitle,
        benefits,
        cta,
    })
}

pub fn collect_product<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<PosterRequest> {
    prompter.say("\n🚀 产品宣传海报")?;
    prompter.say(SECTION_RULE)?;

    let title = prompter.ask("产品名称: ")?;
    let subtitle = prompter.ask("Slogan（可选，按回车跳过）: ")?;

    let screenshot = prompter.ask("\n产品界面截图路径（可选，按回车跳过）: ")?;
    let product_image = load_reference_image(&screenshot);
    if product_image.is_empty() {
        prompter.say("  无产品截图，将使用通用设计")?;
    } else {
        prompter.say("  产品截图已加载")?;
    }

    prompter.say("\n⚡ 核心功能（3-4个，场景化描述用户体验）:")?;
    prompter.say("提示：用场景化方式描述，如\"一键生成，快速验证想法\"")?;
    let features = prompter.ask_list(defaults::MAX_PRODUCT_FEATURES, |n| format!("功能{n}: "))?;

    let value = prompter.ask_or("\n价值主张（可选）: ", defaults::PRODUCT_VALUE)?;
    let cta = prompter.ask_or(
        &format!("底部CTA (默认: {}): ", defaults::PRODUCT_CTA),
        defaults::PRODUCT_CTA,
    )?;

    PosterRequest::product(ProductInfo {
        title,
        subtitle,
        product_image,
        features,
        value,
        cta,
    })
}

/// Read a screenshot and base64-encode it.
///
/// Returns an empty string when `raw` is blank or the file cannot be read;
/// the poster is then designed without a reference image.
pub fn load_reference_image(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let path = expand_home(raw);
    match std::fs::read(&path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded reference image");
            STANDARD.encode(bytes)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "reference image unavailable");
            String::new()
        }
    }
}
