//! ParkPal 天气图标引擎
//!
//! 把天气状况（OpenWeather 状况码、描述文本、昼夜标志）转换成 48x32 的单色图标，
//! 只使用五种基础绘图操作：实心圆、实心矩形、直线、实心三角形、像素点。

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod common;
pub mod render;

pub use common::config::IconLayout;
pub use common::error::{IconError, Result};
pub use common::weather::{Condition, Palette, WeatherReport};
pub use render::canvas::Canvas;
pub use render::dispatch::{Sky, classify, classify_sky, draw_weather_icon};
pub use render::framebuffer::Framebuffer;
pub use render::icons::IconKind;
pub use render::recorder::{DrawCall, Recorder};
