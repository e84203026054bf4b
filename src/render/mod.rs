//! 渲染引擎模块
//! 负责把天气状况绘制成单色图标

pub mod canvas;
pub mod dispatch;
pub mod framebuffer;
pub mod icons;
pub mod recorder;
pub mod shapes;
