//! 天气图标预览程序
//!
//! 在 PC 上把天气图标渲染到 48x32 缓冲区并以字符画输出：
//!
//! ```text
//! weather_icon_preview --code 500
//! weather_icon_preview --desc "scattered clouds" --night
//! weather_icon_preview --report weather.json
//! weather_icon_preview --all
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};

use parkpal_weather_icons::{
    Condition, Framebuffer, IconKind, IconLayout, Palette, WeatherReport, draw_weather_icon,
};

type IconBuffer = Framebuffer<{ IconLayout::ICON_WIDTH as usize }, { IconLayout::ICON_HEIGHT as usize }>;

#[derive(Debug, Default)]
struct Args {
    code: Option<i32>,
    desc: String,
    night: bool,
    report: Option<String>,
    all: bool,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--code" => {
                let value = iter.next().ok_or("--code 需要参数")?;
                args.code = Some(value.parse()?);
            }
            "--desc" => args.desc = iter.next().ok_or("--desc 需要参数")?,
            "--report" => args.report = Some(iter.next().ok_or("--report 需要参数")?),
            "--night" => args.night = true,
            "--all" => args.all = true,
            other => return Err(format!("未知参数: {}", other).into()),
        }
    }
    Ok(args)
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    env_logger::init();

    let args = parse_args()?;
    let palette = Palette::default();
    let mut buffer = IconBuffer::new();

    if args.all {
        for kind in IconKind::ALL {
            buffer.clear_all();
            kind.draw(&mut buffer, 0, 0, palette)?;
            println!("{}\n{}", kind, buffer);
        }
        return Ok(());
    }

    let report;
    let condition = match &args.report {
        Some(path) => {
            info!("读取天气数据: {}", path);
            report = WeatherReport::from_json(&std::fs::read(path)?)?;
            report.condition_at(unix_now())
        }
        None => Condition::new(args.code, &args.desc).night(args.night),
    };

    let kind = draw_weather_icon(&mut buffer, 0, 0, &condition, palette)?;
    if kind == IconKind::Unknown {
        warn!("天气状况无法识别，已绘制短横线");
    }
    println!("{}\n{}", kind, buffer);
    Ok(())
}
