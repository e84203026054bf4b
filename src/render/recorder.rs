//! 绘图调用记录器
//! 把每次基础绘图调用记录下来而不真正绘制，用于检查图标是否越出包围盒

use embedded_graphics::pixelcolor::BinaryColor;
use heapless::Vec;

use crate::common::error::IconError;
use crate::render::canvas::Canvas;

pub const RECORDER_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    FillCircle { cx: i32, cy: i32, r: i32, color: BinaryColor },
    FillRect { x: i32, y: i32, w: i32, h: i32, color: BinaryColor },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: BinaryColor },
    FillTriangle { points: [(i32, i32); 3], color: BinaryColor },
    Pixel { x: i32, y: i32, color: BinaryColor },
}

impl DrawCall {
    /// 调用可能触及的像素范围 `(min_x, min_y, max_x, max_y)`，闭区间
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        match *self {
            DrawCall::FillCircle { cx, cy, r, .. } => (cx - r, cy - r, cx + r, cy + r),
            DrawCall::FillRect { x, y, w, h, .. } => (x, y, x + w - 1, y + h - 1),
            DrawCall::Line { x0, y0, x1, y1, .. } => {
                (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
            }
            DrawCall::FillTriangle { points, .. } => {
                let xs = points.map(|(x, _)| x);
                let ys = points.map(|(_, y)| y);
                (
                    xs[0].min(xs[1]).min(xs[2]),
                    ys[0].min(ys[1]).min(ys[2]),
                    xs[0].max(xs[1]).max(xs[2]),
                    ys[0].max(ys[1]).max(ys[2]),
                )
            }
            DrawCall::Pixel { x, y, .. } => (x, y, x, y),
        }
    }

    pub fn color(&self) -> BinaryColor {
        match *self {
            DrawCall::FillCircle { color, .. }
            | DrawCall::FillRect { color, .. }
            | DrawCall::Line { color, .. }
            | DrawCall::FillTriangle { color, .. }
            | DrawCall::Pixel { color, .. } => color,
        }
    }
}

#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<DrawCall, RECORDER_CAPACITY>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// 所有调用的合并范围，没有调用时返回 `None`
    pub fn extent(&self) -> Option<(i32, i32, i32, i32)> {
        self.calls.iter().map(DrawCall::bounds).reduce(|a, b| {
            (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
        })
    }

    fn push(&mut self, call: DrawCall) -> Result<(), IconError> {
        self.calls.push(call).map_err(|_| IconError::RecorderFull {
            capacity: RECORDER_CAPACITY,
        })
    }
}

impl Canvas for Recorder {
    type Color = BinaryColor;
    type Error = IconError;

    fn fill_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: BinaryColor,
    ) -> Result<(), IconError> {
        self.push(DrawCall::FillCircle { cx, cy, r, color })
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: BinaryColor,
    ) -> Result<(), IconError> {
        self.push(DrawCall::FillRect { x, y, w, h, color })
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: BinaryColor,
    ) -> Result<(), IconError> {
        self.push(DrawCall::Line { x0, y0, x1, y1, color })
    }

    fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: BinaryColor,
    ) -> Result<(), IconError> {
        self.push(DrawCall::FillTriangle {
            points: [(x0, y0), (x1, y1), (x2, y2)],
            color,
        })
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: BinaryColor) -> Result<(), IconError> {
        self.push(DrawCall::Pixel { x, y, color })
    }
}
