//! Event poster prompt with a selectable visual style.

use super::template::render_template;
use crate::error::Result;
use crate::request::{EventInfo, EventStyle};

const TEMPLATE: &str = r#"帮我画一张活动宣传海报：'''
【最高优先级要求】所有文字必须超大、超清晰、毫不含糊！文字清晰度优先于所有视觉效果！
{style_desc}

版式结构：
1. 顶部标题区：
超大醒目标题："{title}"
副标题（超大清晰）："{subtitle}"

2. 核心视觉区：
{role_desc}

3. 核心福利区：
{card_desc}
内含福利列表：
{benefits}4. 中央大二维码区：
超大二维码区域，周围有装饰性光效。
二维码下方有清晰文字（超大超粗）："扫码立即参与"。

5. 底部 CTA 区：
醒目的横幅。
超大超粗高亮文字："{cta}"

注意：视觉效果突出，文字简洁！留出二维码位置！
'''"#;

/// Fixed description blocks for one visual style.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleBlock {
    pub style: &'static str,
    pub role: &'static str,
    pub card: &'static str,
}

const WARM: StyleBlock = StyleBlock {
    style: "整体风格：温暖治愈系插画风格，柔和舒适。
材质：水彩纸纹理 + 柔和渐变 + 毛绒质感元素。
主色调：奶油米色底色 (#FFF8E7)，搭配蜜桃粉 (#FFB6B9)、薄荷绿 (#98D8C8)、暖黄色 (#FFE066)。
特效：柔和的光斑、飘落的花瓣/羽毛、温暖的发光圆环。
光影：柔和自然光，像午后的阳光透过窗户洒进来。",
    role: "温柔亲和的女性角色（亚洲），穿着舒适毛衣，温暖微笑。
背景有柔和的光斑、飘落的樱花花瓣。",
    card: "宽大的圆角卡片，柔和渐变背景，边缘有温暖发光圆环。",
};

const TECH: StyleBlock = StyleBlock {
    style: "整体风格：赛博朋克科技风格，未来感十足。
材质：磨砂玻璃 + 霓虹光效 + 金属质感边框。
主色调：深空蓝底色 (#0A1929)，搭配霓虹青 (#00E5FF)、电光紫 (#AA00FF)。
特效：全息投影、数据流、能量场、粒子效果。
光影：戏剧性边缘光，霓虹发光效果。",
    role: "充满科技感的虚拟角色，半透明数字身体，数据流环绕。
背景是赛博空间，漂浮的全息界面。",
    card: "发光的玻璃态面板，边缘有霓虹光效，背景有网格纹理。",
};

const MINIMAL: StyleBlock = StyleBlock {
    style: "整体风格：极简现代设计风格，干净利落。
材质：纯色平面 + 细线条 + 几何图形。
主色调：纯白底色 (#FFFFFF)，搭配黑色 (#000000)、单色强调色。
特效：简洁的几何装饰、细线条分隔、大量留白。
光影：平面化设计，最小阴影。",
    role: "简约的几何图形组合，抽象的人物轮廓。
背景干净，大量留白。",
    card: "简洁的扁平卡片，细边框，纯色背景。",
};

/// Table lookup from style to its description blocks.
pub fn style_block(style: EventStyle) -> &'static StyleBlock {
    match style {
        EventStyle::Warm => &WARM,
        EventStyle::Tech => &TECH,
        EventStyle::Minimal => &MINIMAL,
    }
}

pub(super) fn build(info: &EventInfo) -> Result<String> {
    let block = style_block(info.resolved_style());
    let benefits = super::numbered_lines(&info.benefits);
    let prompt = render_template(
        TEMPLATE,
        &[
            ("style_desc", block.style),
            ("role_desc", block.role),
            ("card_desc", block.card),
            ("title", info.title.as_str()),
            ("subtitle", info.subtitle.as_str()),
            ("benefits", benefits.as_str()),
            ("cta", info.cta.as_str()),
        ],
    )?;
    Ok(prompt)
}
