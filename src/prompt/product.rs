//! Product poster prompt, optionally embedding a reference screenshot.

use super::template::render_template;
use crate::error::Result;
use crate::request::ProductInfo;

const TEMPLATE: &str = r#"帮我画一张产品宣传海报：'''
【最高优先级要求】所有文字必须超大、超清晰、毫不含糊！文字清晰度优先于所有视觉效果！

整体风格：互联网科技感，冷色调，简洁大气。
材质：磨砂玻璃面板 + 金属边框 + 渐变背景。
主色调：深灰蓝底色 (#1E293B)，搭配冰蓝色 (#38BDF8)、银灰色 (#94A3B8)。
特效：数据流、连接节点、发光线条、科技粒子。
光影：柔和冷光，边缘发光效果。
{reference}
版式结构（从上到下）：
1. 顶部产品名区：
超大超粗醒目标题："{title}"{slogan}

2. 核心功能区（场景化展示）：
展示产品在实际使用场景中的体验：
{features}{value}
4. 底部 CTA 区：
超大超粗文字："{cta}"
中央大二维码区域，周围有科技感装饰。

注意：冷色调科技风，场景化展示用户体验，文字简洁！
'''"#;

/// Header line of the embedded screenshot block.
pub const REFERENCE_MARKER: &str = "【产品参考】";

pub(super) fn build(info: &ProductInfo) -> Result<String> {
    let reference = if info.has_reference_image() {
        format!(
            "\n{REFERENCE_MARKER}\n请参考这张产品的界面截图，在海报中展示产品界面：\n{}\n",
            info.product_image
        )
    } else {
        String::new()
    };

    let slogan = if info.subtitle.is_empty() {
        String::new()
    } else {
        format!("\n产品slogan：\"{}\"", info.subtitle)
    };

    let value = if info.value.is_empty() {
        String::new()
    } else {
        format!(
            "\n3. 价值主张区：\n简短有力的价值陈述（超大超粗）：\"{}\"",
            info.value
        )
    };

    let features = super::numbered_lines(&info.features);
    let prompt = render_template(
        TEMPLATE,
        &[
            ("reference", reference.as_str()),
            ("title", info.title.as_str()),
            ("slogan", slogan.as_str()),
            ("features", features.as_str()),
            ("value", value.as_str()),
            ("cta", info.cta.as_str()),
        ],
    )?;
    Ok(prompt)
}
