//! 天气状况分派
//!
//! 依次尝试：
//! 1. OpenWeather 状况码（最可靠，有就以它为准）
//! 2. 描述文本的子串匹配（兼容只返回文本的旧版 Worker），不区分大小写
//! 3. 都不匹配时绘制短横线，让设备使用者看出上游数据有问题

use log::{debug, warn};

use crate::common::weather::{Condition, Palette};
use crate::render::canvas::Canvas;
use crate::render::icons::IconKind;

/// 与昼夜无关的天气大类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sky {
    Thunderstorm,
    Rain,
    Snow,
    /// 雾、霾、烟等
    Atmosphere,
    Clear,
    PartlyCloudy,
    Overcast,
}

impl Sky {
    /// 按昼夜选择图标
    pub const fn icon(self, is_night: bool) -> IconKind {
        match self {
            Sky::Thunderstorm => IconKind::Thunderstorm,
            Sky::Rain => IconKind::Rain,
            Sky::Snow => IconKind::Snow,
            Sky::Atmosphere | Sky::Overcast => IconKind::Cloudy,
            Sky::Clear if is_night => IconKind::ClearNight,
            Sky::Clear => IconKind::Sunny,
            Sky::PartlyCloudy if is_night => IconKind::PartlyCloudyNight,
            Sky::PartlyCloudy => IconKind::PartlyCloudy,
        }
    }

    /// OpenWeather 状况码分组，不在任何分组内返回 `None`
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            200..=232 => Some(Sky::Thunderstorm),
            300..=531 => Some(Sky::Rain),
            600..=622 => Some(Sky::Snow),
            701..=781 => Some(Sky::Atmosphere),
            800 => Some(Sky::Clear),
            801 | 802 => Some(Sky::PartlyCloudy),
            803 | 804 => Some(Sky::Overcast),
            _ => None,
        }
    }

    /// 按描述文本匹配，规则自上而下，先匹配先生效
    pub fn from_description(description: &str) -> Option<Self> {
        TEXT_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| contains_ignore_case(description, n)))
            .map(|&(_, sky)| sky)
    }
}

// 顺序即优先级："thunderstorm with rain" 应为雷暴，"few clouds" 应先于 "cloud"
const TEXT_RULES: &[(&[&str], Sky)] = &[
    (&["thunder", "storm"], Sky::Thunderstorm),
    (&["rain", "drizzle"], Sky::Rain),
    (&["snow"], Sky::Snow),
    (&["clear"], Sky::Clear),
    (&["few cloud", "scattered"], Sky::PartlyCloudy),
    (&["cloud"], Sky::Overcast),
    (&["mist", "fog", "haze"], Sky::Atmosphere),
];

// needle 须为小写 ASCII；只做 ASCII 大小写折叠，不分配内存
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    if n.is_empty() {
        return true;
    }
    h.windows(n.len()).any(|w| w.eq_ignore_ascii_case(n))
}

/// 状况码优先，其次描述文本
pub fn classify_sky(condition: &Condition<'_>) -> Option<Sky> {
    condition
        .code
        .and_then(Sky::from_code)
        .or_else(|| Sky::from_description(condition.description))
}

/// 选出要绘制的图标，永远有结果，无法识别时为 `IconKind::Unknown`
pub fn classify(condition: &Condition<'_>) -> IconKind {
    match classify_sky(condition) {
        Some(sky) => sky.icon(condition.is_night),
        None => IconKind::Unknown,
    }
}

/// 渲染入口：在 (x, y) 处绘制天气图标，返回实际绘制的图标
///
/// 调用方负责保证 48x32 区域不超出绘图面。
pub fn draw_weather_icon<D: Canvas>(
    g: &mut D,
    x: i32,
    y: i32,
    condition: &Condition<'_>,
    palette: Palette<D::Color>,
) -> Result<IconKind, D::Error> {
    let kind = classify(condition);
    if kind == IconKind::Unknown {
        warn!(
            "Unrecognized weather condition: code={:?}, desc={:?}",
            condition.code, condition.description
        );
    } else {
        debug!(
            "Weather code={:?}, desc={:?}, night={} -> {}",
            condition.code, condition.description, condition.is_night, kind
        );
    }
    kind.draw(g, x, y, palette)?;
    Ok(kind)
}
