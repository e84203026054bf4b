//! 图标渲染模块
//! 每个图标都是若干基础形状在 48x32 包围盒内的固定组合，(x, y) 为包围盒左上角

use core::fmt;

use log::trace;

use crate::common::config::IconLayout;
use crate::common::weather::Palette;
use crate::render::canvas::Canvas;
use crate::render::shapes;

/// 可绘制的天气图标，`Unknown` 对应无法识别时的短横线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Sunny,
    ClearNight,
    PartlyCloudy,
    PartlyCloudyNight,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
    Unknown,
}

impl IconKind {
    pub const ALL: [IconKind; 9] = [
        IconKind::Sunny,
        IconKind::ClearNight,
        IconKind::PartlyCloudy,
        IconKind::PartlyCloudyNight,
        IconKind::Cloudy,
        IconKind::Rain,
        IconKind::Thunderstorm,
        IconKind::Snow,
        IconKind::Unknown,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IconKind::Sunny => "sunny",
            IconKind::ClearNight => "clear-night",
            IconKind::PartlyCloudy => "partly-cloudy",
            IconKind::PartlyCloudyNight => "partly-cloudy-night",
            IconKind::Cloudy => "cloudy",
            IconKind::Rain => "rain",
            IconKind::Thunderstorm => "thunderstorm",
            IconKind::Snow => "snow",
            IconKind::Unknown => "unknown",
        }
    }

    /// 在锚点 (x, y) 绘制该图标
    pub fn draw<D: Canvas>(
        self,
        g: &mut D,
        x: i32,
        y: i32,
        palette: Palette<D::Color>,
    ) -> Result<(), D::Error> {
        trace!("draw icon {} at ({}, {})", self, x, y);
        let Palette {
            foreground: c,
            background: bg,
        } = palette;
        match self {
            IconKind::Sunny => sunny(g, x, y, c),
            IconKind::ClearNight => clear_night(g, x, y, c, bg),
            IconKind::PartlyCloudy => partly_cloudy(g, x, y, c),
            IconKind::PartlyCloudyNight => partly_cloudy_night(g, x, y, c, bg),
            IconKind::Cloudy => cloudy(g, x, y, c),
            IconKind::Rain => rain(g, x, y, c),
            IconKind::Thunderstorm => thunderstorm(g, x, y, c),
            IconKind::Snow => snow(g, x, y, c),
            IconKind::Unknown => unknown(g, x, y, c),
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn sunny<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::sun(g, x + 24, y + 16, 8, 5, c)
}

pub fn clear_night<D: Canvas>(
    g: &mut D,
    x: i32,
    y: i32,
    c: D::Color,
    bg: D::Color,
) -> Result<(), D::Error> {
    shapes::moon(g, x + 24, y + 16, 10, c, bg)?; // 月牙约 4px 宽
    shapes::star(g, x + 8, y + 6, c)?;
    shapes::star(g, x + 40, y + 10, c)?;
    shapes::star(g, x + 10, y + 26, c)
}

pub fn partly_cloudy<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::sun(g, x + 34, y + 10, 5, 4, c)?; // 右上角露出太阳
    shapes::cloud(g, x + 20, y + 26, 7, c) // 云压在左下
}

pub fn partly_cloudy_night<D: Canvas>(
    g: &mut D,
    x: i32,
    y: i32,
    c: D::Color,
    bg: D::Color,
) -> Result<(), D::Error> {
    shapes::moon(g, x + 35, y + 9, 7, c, bg)?;
    shapes::cloud(g, x + 20, y + 26, 7, c)
}

pub fn cloudy<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::cloud(g, x + 24, y + 27, 8, c)
}

pub fn rain<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::cloud(g, x + 24, y + 18, 7, c)?;
    shapes::rain(g, x + 6, y + 21, 36, c)
}

pub fn thunderstorm<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::cloud(g, x + 24, y + 18, 7, c)?;
    shapes::bolt(g, x + 24, y + 20, y + 31, c)
}

pub fn snow<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    shapes::cloud(g, x + 24, y + 18, 7, c)?;
    // 比雨线高 1px，第二排雪点才不会超出底边
    shapes::snow(g, x + 6, y + 22, 36, c)
}

/// 无法识别的天气：包围盒中央的短横线
pub fn unknown<D: Canvas>(g: &mut D, x: i32, y: i32, c: D::Color) -> Result<(), D::Error> {
    g.fill_rect(
        x + IconLayout::DASH_X,
        y + IconLayout::DASH_Y,
        IconLayout::DASH_WIDTH,
        IconLayout::DASH_HEIGHT,
        c,
    )
}
