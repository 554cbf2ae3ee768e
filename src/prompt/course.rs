//! Course poster prompts: an upper and a lower panel that are later stacked.

use super::template::render_template;
use crate::error::Result;
use crate::request::CourseInfo;

/// Upper panel: header, hero character, trust badge, benefits.
const UPPER_TEMPLATE: &str = r#"帮我画张课程海报宣传图的上半部分：'''
【最高优先级要求】所有文字必须超大、超清晰、毫不含糊！文字清晰度优先于所有视觉效果！

整体风格与构图定义
高质量 C4D Octane 渲染的 3D 赛博朋克风格。
材质上追求顶级潮玩手办的触感，结合了细腻的哑光乙烯基皮肤、带有微磨损的注塑塑料装甲，以及高反光的玻璃面罩，完美融合赛博朋克科技感。
主色调为深邃的午夜蓝底色，搭配高亮的霓虹青色、电光紫色和暖橙色光效。
大量使用具有真实厚度和光线折射的磨砂玻璃拟态 UI 面板、多层级的发光全息投影和在体积雾中漂浮的科技粒子。
整体光影富有史诗级电影感，强调戏剧性的边缘光勾勒角色轮廓，主光源在材质上产生真实的次表面散射效果，极大地增强体积感和高级感。

版式结构与内容填充（上半部分）

1. 顶部 Header 区域：
最上方是一个发光的胶囊形标题栏，文字为蓝光霓虹效果："{title}"。
紧接着是视觉中心的主标题，采用巨大、醒目的3D立体发光、有质感的字体："{subtitle}"。

2. 核心视觉 Hero 区域：
主角（叙事与质感升级）：
主标题下方，一个设计独特、充满探索欲的 3D 科技潮玩女性角色。
仅展露上半身，穿着带有微小机械细节未来服饰、戴着高科技透明AR 眼镜、发型很潮。

叙事性动作：
角色并非静止操作，而是面向左侧，身体前倾，正伸出手指向面前复杂的全息数据界面进行交互，脸上带着发现新大陆般的惊喜与开心表情，仿佛刚刚解锁了核心科技。

环境互动：
界面中漂浮的数据流环绕在角色周围，光芒照亮了角色的脸部，形成真实的色彩溢出。
背景不再是单纯平面，而是具有深度的赛博空间，隐约可见的数据塔和光缆在体积雾中若隐若现，营造极强的沉浸感。

3. 信任背书（关键点优化融合）：
在主角的头部左侧，因点击全息界面后，悬浮着一个醒目的金色/暖橙色全息数据徽章。
融合感：
徽章是从主界面中延伸投影出的全息荣誉勋章，带有微妙的数字噪点和光线抖动效果。
上面清晰地展示着两行超大超粗高亮数据，每个字都清晰可读："{stats1}" 和 "{stats2}"，
旁边带有一个具有立体浮雕感和内部发光的 3D 点赞（Thumbs up）图标，强调课程的火爆与口碑。

4. 核心卖点区（磨砂玻璃结构）：
容器外观：
宽大的圆角矩形磨砂玻璃面板，边缘带有青色微光，背景有淡淡的网格纹理。
顶部标签：
顶部是醒目的横向通透胶囊标签："你能收获"。

核心内容（所有文字必须超大超粗超清晰！！！）：
竖直排列的卖点列表：
{benefits}注意：保持原有设计感，文字清晰可读即可！上下留出拼接空间！
'''"#;

/// Lower panel: schedule, audiences, value cards, QR/CTA, footer.
const LOWER_TEMPLATE: &str = r#"帮我画张课程海报宣传图的下半部分：'''
【最高优先级要求】所有文字必须超大、超清晰、毫不含糊！文字清晰度优先于所有视觉效果！

整体风格与上图保持一致！高质量 C4D Octane 渲染的 3D 赛博朋克风格。
主色调为深邃的午夜蓝底色，搭配高亮的霓虹青色、电光紫色和暖橙色光效。
大量使用具有真实厚度和光线折射的磨砂玻璃拟态 UI 面板。

版式结构与内容填充（下半部分）

1. 核心信息区（磨砂玻璃结构）：
容器外观：
宽大的圆角矩形磨砂玻璃面板，边缘带有青色微光，背景有淡淡的网格纹理。
顶部标签：
顶部是醒目的横向通透胶囊标签："课程安排"。

核心内容（此模块是海报核心信息，所有文字必须超大超粗超清晰！！！）：
竖直排列的时间轴列表：
{schedule}右侧装饰（关键视觉点）：
在面板的右下角，站着一组（3个）迷你的 Q 版 3D 可爱角色。
动作细节：
它们紧紧挤在一起，表情兴奋，有的拿着笔，有的指着上面的课程表，
仿佛在热烈讨论学习计划，为画面增添生动的故事感。

2. 适合人群区：
容器外观：
一个低调的、扁平的条状磨砂玻璃面板。
高度很窄，边缘带有青色微光，背景有淡淡的网格纹理。
顶部标签：
顶部是醒目的横向通透胶囊标签："适合人群"。

核心布局（横向排列，所有文字必须超大超粗超清晰可读！！！）：
面板中央水平排列着三组信息单元，展示浮动元素与文字。
{audiences}3. 课程价值卡片区（四个并排、扁平）：
四个并排的圆角磨砂玻璃卡片，每张卡片标题左侧有不同颜色的发光3D 图标。
请根据上面课程安排的内容，为每个卡片自动生成一个相关的标题和图标（火箭/齿轮/芯片/奖杯/闪电/钻石等），确保标题与课程内容匹配！
{cards}4. 底部二维码区（空间大、很高）：
顶部的横幅标题栏为一个蓝金双色交织的电光标题栏，
文字"{cta}"以超大超粗高亮发光字体呈现，每个字都清晰可读。
下方是一个很高的、占据底部大部分空间的方形发光二维码区域，
其周围环绕着强烈的蓝色和金色圆形闪电能量场。
电光纹理向外放射，仿佛要冲破屏幕，
二维码本身被一个复杂的能量框包裹，内部有电流涌动。
一个 3D 可爱角色在旁边兴奋地指向这个巨大的电光二维码区域，
其指尖和身体被蓝金色的电光照亮，做出强烈推荐的手势。

5. 页脚 Footer：
海报最底部边缘，小字显示："CAIE人工智能研究院"。

注意：保持与上图风格一致，所有文字清晰可读！
'''"#;

/// Avatar icons paired with audience units, left to right.
const AUDIENCE_ICONS: [&str; 3] = [
    "戴眼镜 3D 男性头像",
    "充满活力的 3D 中国女性头像",
    "好奇宝宝 3D 学生头像",
];
const AUDIENCE_POSITIONS: [&str; 3] = ["左单元", "中单元", "右单元"];

const MAX_VALUE_CARDS: usize = 4;
const CARD_DESC_CHARS: usize = 30;

/// Build the upper and lower panel prompts.
pub(super) fn build(info: &CourseInfo) -> Result<(String, String)> {
    let benefits = super::numbered_lines(&info.benefits);
    let upper = render_template(
        UPPER_TEMPLATE,
        &[
            ("title", info.title.as_str()),
            ("subtitle", info.subtitle.as_str()),
            ("stats1", info.stats1.as_str()),
            ("stats2", info.stats2.as_str()),
            ("benefits", benefits.as_str()),
        ],
    )?;

    let schedule = schedule_lines(&info.schedule);
    let audiences = audience_lines(&info.audiences);
    let cards = value_card_lines(&info.schedule);
    let lower = render_template(
        LOWER_TEMPLATE,
        &[
            ("schedule", schedule.as_str()),
            ("audiences", audiences.as_str()),
            ("cards", cards.as_str()),
            ("cta", info.cta.as_str()),
        ],
    )?;

    Ok((upper, lower))
}

fn schedule_lines(schedule: &[String]) -> String {
    schedule.iter().map(|item| format!("{item}\n")).collect()
}

fn audience_lines(audiences: &[String]) -> String {
    audiences
        .iter()
        .zip(AUDIENCE_ICONS.iter().zip(AUDIENCE_POSITIONS.iter()))
        .map(|(audience, (icon, position))| {
            format!(
                "{position}： 上方悬浮一个{icon}（伴随微小装饰）；紧接着下方是超大超粗清晰文字：\"{audience}\"。\n"
            )
        })
        .collect()
}

fn value_card_lines(schedule: &[String]) -> String {
    schedule
        .iter()
        .take(MAX_VALUE_CARDS)
        .enumerate()
        .map(|(i, item)| {
            let desc = card_description(item);
            format!(
                "[卡片{}]：根据课程内容\"{}\"自动生成合适的标题、图标和描述。\n",
                i + 1,
                desc
            )
        })
        .collect()
}

/// The topic part of a schedule entry (`"<when> <session> - <topic>"`),
/// or the whole entry when it has no ` - ` separator, capped in length.
fn card_description(item: &str) -> String {
    let topic = item.split(" - ").nth(1).unwrap_or(item);
    topic.chars().take(CARD_DESC_CHARS).collect()
}
