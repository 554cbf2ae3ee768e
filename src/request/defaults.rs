//! Fixed fallback values used when a request leaves a field empty.

pub const COURSE_STATS1: &str = "1期200+人报名";
pub const COURSE_STATS2: &str = "好评率高达96.8%";
pub const COURSE_CTA: &str = "扫码锁定席位";

pub const COURSE_BENEFITS: &[&str] = &[
    "你可以收获一套完整的AI产品方法论",
    "你可以带走自己创作的实战作品",
    "你可以掌握Claude Code等顶级工具",
];

pub const COURSE_SCHEDULE: &[&str] = &[
    "12/22（周一) 20:00  开营分享 - 经验拆解",
    "12/23（周二）20:00 第一讲 - 极速上手",
    "12/25（周四）20:00 第二讲 - 硬核实战",
    "12/28（周日）20:00 结营路演 - 学员作品show",
];

pub const COURSE_AUDIENCES: &[&str] = &[
    "想转行的产品经理/运营人员",
    "创业者/自由职业者",
    "有AI产品基础想进阶的产品经理",
];

pub const EVENT_STYLE: &str = "warm";
pub const EVENT_CTA: &str = "限时福利 立即参与";

pub const EVENT_BENEFITS: &[&str] = &[
    "限时特惠，立省50%",
    "前100名送独家资料包",
    "推荐好友双方各得奖励",
];

pub const PRODUCT_CTA: &str = "立即体验";

/// Value proposition offered as the interactive default. Declarative records
/// that omit `value` keep it empty and the prompt skips the block.
pub const PRODUCT_VALUE: &str = "让技术更简单，让创新更快速";

pub const PRODUCT_FEATURES: &[&str] = &[
    "一键生成，快速验证想法",
    "智能协作，提升团队效率",
    "实时预览，所见即所得",
];

/// Maximum entries per list field.
pub const MAX_COURSE_BENEFITS: usize = 4;
pub const MAX_COURSE_SCHEDULE: usize = 6;
pub const MAX_COURSE_AUDIENCES: usize = 3;
pub const MAX_EVENT_BENEFITS: usize = 3;
pub const MAX_PRODUCT_FEATURES: usize = 4;
