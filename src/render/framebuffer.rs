//! 渲染缓冲区模块
//! 提供固定尺寸的单色帧缓冲区，用于预览与测试

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// 单色渲染缓冲区，`true` 表示黑色墨点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// 创建新的渲染缓冲区（全白）
    pub const fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    /// 清空为白色
    pub fn clear_all(&mut self) {
        self.pixels = [[false; W]; H];
    }

    /// 越界坐标视为白色
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    pub fn count_set(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    fn set_pixel(&mut self, point: Point, color: BinaryColor) {
        if point.x < 0 || point.y < 0 {
            return;
        }
        if let Some(pixel) = self
            .pixels
            .get_mut(point.y as usize)
            .and_then(|row| row.get_mut(point.x as usize))
        {
            *pixel = color.is_on();
        }
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Framebuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Framebuffer<W, H> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }
}

// 以字符画输出，'#' 为墨点，'.' 为白底
impl<const W: usize, const H: usize> fmt::Display for Framebuffer<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.pixels {
            for &pixel in row {
                f.write_str(if pixel { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn clips_out_of_range_pixels() {
        let mut fb = Framebuffer::<4, 3>::new();
        Rectangle::new(Point::new(-2, -2), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.count_set(), 12);
        assert!(!fb.is_set(4, 0));
        assert!(!fb.is_set(-1, 0));
    }

    #[test]
    fn renders_ascii_rows() {
        let mut fb = Framebuffer::<3, 2>::new();
        Pixel(Point::new(1, 0), BinaryColor::On).draw(&mut fb).unwrap();
        Pixel(Point::new(2, 1), BinaryColor::On).draw(&mut fb).unwrap();

        assert_eq!(std::format!("{fb}"), ".#.\n..#\n");

        fb.clear_all();
        assert_eq!(fb.count_set(), 0);
    }
}
