//! 绘图面抽象
//! 图标引擎只通过这五种基础操作写入像素，从不回读

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

/// 只写的立即模式绘图面
pub trait Canvas {
    type Color: Copy;
    type Error;

    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Self::Color)
    -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Self::Color)
    -> Result<(), Self::Error>;

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Self::Color)
    -> Result<(), Self::Error>;

    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error>;
}

// 任何 embedded-graphics 绘图目标（墨水屏缓冲区、模拟器）都可以直接作为绘图面
impl<D> Canvas for D
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn fill_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        if r < 0 {
            return Ok(());
        }
        // 半径 r 覆盖 2r+1 个像素，中心像素两侧各 r 个
        Circle::with_center(Point::new(cx, cy), (2 * r + 1) as u32)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
    }

    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        Triangle::new(Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error> {
        Pixel(Point::new(x, y), color).draw(self)
    }
}
