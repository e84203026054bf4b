//! 基础形状
//! 云、太阳、雨、闪电、雪、月牙、星星，全部由五种基础绘图操作组合而成

use crate::render::canvas::Canvas;

/// 定点近似 `v * cos45°`，即 `round(v * 0.707)`，绘制路径上不使用浮点
pub const fn cos45(v: i32) -> i32 {
    (v * 707 + 500) / 1000
}

/// 月牙擦除圆相对实心圆向左的偏移，`round(0.4 * r)`
pub const fn moon_offset(r: i32) -> i32 {
    (r * 2 + 2) / 5
}

/// 云：cx 为水平中心，base_y 为平底，s 为尺寸；宽约 4s，高约 1.5s
pub fn cloud<D: Canvas>(
    g: &mut D,
    cx: i32,
    base_y: i32,
    s: i32,
    c: D::Color,
) -> Result<(), D::Error> {
    let side = (s * 3 + 2) / 4; // ≈ 0.75s
    let top = base_y - s;
    g.fill_circle(cx, top - s / 2, s, c)?; // 中间最高
    g.fill_circle(cx - s * 5 / 4, top, side, c)?;
    g.fill_circle(cx + s * 5 / 4, top, side, c)?;
    g.fill_rect(cx - s * 2, top, s * 4, s, c)
}

/// 太阳：实心圆加 8 条光线，正方向 3px 粗，斜向 2px 粗
pub fn sun<D: Canvas>(
    g: &mut D,
    cx: i32,
    cy: i32,
    r: i32,
    ray: i32,
    c: D::Color,
) -> Result<(), D::Error> {
    g.fill_circle(cx, cy, r, c)?;

    let inner = r + 2;
    let outer = r + 2 + ray;
    for d in -1..=1 {
        g.draw_line(cx + d, cy - inner, cx + d, cy - outer, c)?; // N
        g.draw_line(cx + inner, cy + d, cx + outer, cy + d, c)?; // E
        g.draw_line(cx + d, cy + inner, cx + d, cy + outer, c)?; // S
        g.draw_line(cx - inner, cy + d, cx - outer, cy + d, c)?; // W
    }

    let di = cos45(inner);
    let dout = cos45(outer);
    // (水平方向, 垂直方向)；第二条线朝远离圆心的水平方向偏 1px
    for (sx, sy) in [(1, -1), (1, 1), (-1, 1), (-1, -1)] {
        for shift in [0, sx] {
            g.draw_line(
                cx + sx * di + shift,
                cy + sy * di,
                cx + sx * dout + shift,
                cy + sy * dout,
                c,
            )?;
        }
    }
    Ok(())
}

/// 雨：两排错开的斜雨线，第一排 3 条，第二排 2 条
pub fn rain<D: Canvas>(
    g: &mut D,
    left: i32,
    top: i32,
    w: i32,
    c: D::Color,
) -> Result<(), D::Error> {
    let sp = w / 4;
    let sx = left + sp / 2;
    for i in 0..3 {
        streak(g, sx + i * sp, top, c)?;
    }
    for i in 0..2 {
        streak(g, sx + sp / 2 + i * sp, top + 5, c)?;
    }
    Ok(())
}

// 每 5px 向右 2px，2px 粗
fn streak<D: Canvas>(g: &mut D, px: i32, top: i32, c: D::Color) -> Result<(), D::Error> {
    g.draw_line(px, top, px + 2, top + 5, c)?;
    g.draw_line(px + 1, top, px + 3, top + 5, c)
}

/// 闪电：两个在中线处重叠的三角形组成折线
pub fn bolt<D: Canvas>(
    g: &mut D,
    cx: i32,
    top: i32,
    bottom: i32,
    c: D::Color,
) -> Result<(), D::Error> {
    let mid = (top + bottom) / 2;
    g.fill_triangle(cx - 3, top, cx + 4, top, cx + 1, mid + 1, c)?;
    g.fill_triangle(cx - 1, mid, cx + 5, mid - 1, cx - 4, bottom, c)
}

/// 雪：与雨相同的两排布局，元素换成半径 2 的圆点，第二排下移 7px
pub fn snow<D: Canvas>(
    g: &mut D,
    left: i32,
    top: i32,
    w: i32,
    c: D::Color,
) -> Result<(), D::Error> {
    let sp = w / 4;
    let sx = left + sp / 2;
    for i in 0..3 {
        g.fill_circle(sx + i * sp, top, 2, c)?;
    }
    for i in 0..2 {
        g.fill_circle(sx + sp / 2 + i * sp, top + 7, 2, c)?;
    }
    Ok(())
}

/// 月牙：先画前景色实心圆，再用背景色画一个同半径、左移的圆挖出朝右的月牙
///
/// 绘图面必须能以背景色绘制，以此模拟擦除。
pub fn moon<D: Canvas>(
    g: &mut D,
    cx: i32,
    cy: i32,
    r: i32,
    fg: D::Color,
    bg: D::Color,
) -> Result<(), D::Error> {
    g.fill_circle(cx, cy, r, fg)?;
    g.fill_circle(cx - moon_offset(r), cy, r, bg)
}

/// 星星：5 像素十字
pub fn star<D: Canvas>(g: &mut D, cx: i32, cy: i32, c: D::Color) -> Result<(), D::Error> {
    g.draw_pixel(cx, cy, c)?;
    g.draw_pixel(cx - 1, cy, c)?;
    g.draw_pixel(cx + 1, cy, c)?;
    g.draw_pixel(cx, cy - 1, c)?;
    g.draw_pixel(cx, cy + 1, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};
    use embedded_graphics::pixelcolor::BinaryColor::{Off, On};

    #[test]
    fn cos45_matches_known_pairs() {
        let table = [
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (7, 5),
            (10, 7),
            (11, 8),
            (15, 11),
            (100, 71),
        ];
        for (input, expected) in table {
            assert_eq!(cos45(input), expected, "cos45({input})");
        }
    }

    #[test]
    fn moon_offset_rounds_forty_percent() {
        for r in 1..=200 {
            // round(0.4r) = floor((4r + 5) / 10)
            assert_eq!(moon_offset(r), (4 * r + 5) / 10, "r = {r}");
        }
    }

    #[test]
    fn moon_cuts_with_same_radius_disc() {
        let mut rec = Recorder::new();
        moon(&mut rec, 24, 16, 10, On, Off).unwrap();

        assert_eq!(
            rec.calls(),
            &[
                DrawCall::FillCircle { cx: 24, cy: 16, r: 10, color: On },
                DrawCall::FillCircle { cx: 20, cy: 16, r: 10, color: Off },
            ]
        );
    }

    #[test]
    fn cloud_lobes_and_body() {
        let mut rec = Recorder::new();
        cloud(&mut rec, 24, 18, 7, On).unwrap();

        assert_eq!(
            rec.calls(),
            &[
                DrawCall::FillCircle { cx: 24, cy: 8, r: 7, color: On },
                DrawCall::FillCircle { cx: 16, cy: 11, r: 5, color: On },
                DrawCall::FillCircle { cx: 32, cy: 11, r: 5, color: On },
                DrawCall::FillRect { x: 10, y: 11, w: 28, h: 7, color: On },
            ]
        );
    }

    #[test]
    fn sun_has_twelve_cardinal_and_eight_diagonal_lines() {
        let mut rec = Recorder::new();
        sun(&mut rec, 24, 16, 8, 5, On).unwrap();

        let lines: std::vec::Vec<_> = rec
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .copied()
            .collect();
        assert_eq!(lines.len(), 20);

        // NE 光线：in = 10 -> 7, out = 15 -> 11
        assert!(lines.contains(&DrawCall::Line { x0: 31, y0: 9, x1: 35, y1: 5, color: On }));
        assert!(lines.contains(&DrawCall::Line { x0: 32, y0: 9, x1: 36, y1: 5, color: On }));
        // NW 光线第二条向左偏
        assert!(lines.contains(&DrawCall::Line { x0: 16, y0: 9, x1: 12, y1: 5, color: On }));
        // 北向光线
        assert!(lines.contains(&DrawCall::Line { x0: 23, y0: 6, x1: 23, y1: 1, color: On }));
    }

    #[test]
    fn rain_rows_are_staggered() {
        let mut rec = Recorder::new();
        rain(&mut rec, 6, 21, 36, On).unwrap();

        let starts: std::vec::Vec<_> = rec
            .calls()
            .iter()
            .step_by(2)
            .map(|c| match *c {
                DrawCall::Line { x0, y0, .. } => (x0, y0),
                _ => panic!("unexpected call {c:?}"),
            })
            .collect();
        assert_eq!(starts, [(10, 21), (19, 21), (28, 21), (14, 26), (23, 26)]);
    }

    #[test]
    fn snow_second_row_is_seven_lower() {
        let mut rec = Recorder::new();
        snow(&mut rec, 6, 22, 36, On).unwrap();

        assert_eq!(rec.calls().len(), 5);
        assert_eq!(
            rec.calls()[3],
            DrawCall::FillCircle { cx: 14, cy: 29, r: 2, color: On }
        );
    }

    #[test]
    fn bolt_triangles_overlap_at_midpoint() {
        let mut rec = Recorder::new();
        bolt(&mut rec, 24, 20, 31, On).unwrap();

        assert_eq!(
            rec.calls(),
            &[
                DrawCall::FillTriangle { points: [(21, 20), (28, 20), (25, 26)], color: On },
                DrawCall::FillTriangle { points: [(23, 25), (29, 24), (20, 31)], color: On },
            ]
        );
    }

    #[test]
    fn star_is_a_plus() {
        let mut rec = Recorder::new();
        star(&mut rec, 5, 5, On).unwrap();
        assert_eq!(rec.extent(), Some((4, 4, 6, 6)));
        assert_eq!(rec.calls().len(), 5);
    }
}
