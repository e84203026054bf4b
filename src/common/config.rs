// src/common/config.rs
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

pub struct IconLayout;

impl IconLayout {
    // 图标包围盒，所有图标都绘制在锚点右下方的该区域内
    pub const ICON_WIDTH: i32 = 48;
    pub const ICON_HEIGHT: i32 = 32;

    // 无法识别天气时绘制的短横线（相对锚点）
    pub const DASH_X: i32 = 20;
    pub const DASH_Y: i32 = 14;
    pub const DASH_WIDTH: i32 = 8;
    pub const DASH_HEIGHT: i32 = 3;

    /// 锚点 (x, y) 处图标占用的区域
    pub const fn region(x: i32, y: i32) -> Rectangle {
        Rectangle::new(
            Point::new(x, y),
            Size::new(Self::ICON_WIDTH as u32, Self::ICON_HEIGHT as u32),
        )
    }
}
