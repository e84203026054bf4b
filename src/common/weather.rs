// src/common/weather.rs
use alloc::string::String;

use embedded_graphics::pixelcolor::BinaryColor;
use serde::Deserialize;

use crate::common::error::Result;

/// 单次绘制的天气输入，用完即弃
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Condition<'a> {
    /// OpenWeather 状况码，缺失时按描述文本匹配
    pub code: Option<i32>,
    pub description: &'a str,
    pub is_night: bool,
}

impl<'a> Condition<'a> {
    pub const fn new(code: Option<i32>, description: &'a str) -> Self {
        Self {
            code,
            description,
            is_night: false,
        }
    }

    pub const fn from_code(code: i32) -> Self {
        Self::new(Some(code), "")
    }

    pub const fn from_description(description: &'a str) -> Self {
        Self::new(None, description)
    }

    pub const fn night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }
}

/// 前景色与背景色；背景色用于月牙的“擦除”圆
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub foreground: C,
    pub background: C,
}

impl<C> Palette<C> {
    pub const fn new(foreground: C, background: C) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

impl Default for Palette<BinaryColor> {
    // On = 黑色墨点, Off = 白底
    fn default() -> Self {
        Self::new(BinaryColor::On, BinaryColor::Off)
    }
}

/// 汇总接口返回的天气块
///
/// ```json
/// { "temp": 24, "desc": "light rain", "sunrise": 1718000000, "sunset": 1718050000 }
/// ```
///
/// 旧版 Worker 不返回 `code`，此时只能靠 `desc` 匹配；获取失败时时间字段为 `null`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub temp: i32,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

impl WeatherReport {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// 日出之前或日落之后为夜间；缺少日出日落时间时按白天处理
    pub fn is_night_at(&self, now: i64) -> bool {
        match (self.sunrise, self.sunset) {
            (Some(sunrise), Some(sunset)) => now < sunrise || now >= sunset,
            _ => false,
        }
    }

    pub fn condition_at(&self, now: i64) -> Condition<'_> {
        Condition::new(self.code, self.desc.as_deref().unwrap_or(""))
            .night(self.is_night_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::IconError;

    #[test]
    fn parses_worker_payload() {
        let json = br#"{"temp":31,"desc":"scattered clouds","sunrise":1000,"sunset":5000}"#;
        let report = WeatherReport::from_json(json).unwrap();

        assert_eq!(report.temp, 31);
        assert_eq!(report.desc.as_deref(), Some("scattered clouds"));
        assert_eq!(report.code, None);
        assert_eq!(report.sunrise, Some(1000));
    }

    #[test]
    fn tolerates_nulls_and_missing_fields() {
        let report =
            WeatherReport::from_json(br#"{"temp":0,"desc":null,"sunrise":null}"#).unwrap();

        assert_eq!(report.desc, None);
        assert_eq!(report.sunset, None);
        assert_eq!(report.condition_at(0), Condition::new(None, ""));
    }

    #[test]
    fn malformed_payload_reports_position() {
        let err = WeatherReport::from_json(b"{\"temp\": }").unwrap_err();
        assert!(matches!(err, IconError::Report { line: 1, .. }));
    }

    #[test]
    fn night_is_outside_daylight_window() {
        let report = WeatherReport {
            sunrise: Some(1000),
            sunset: Some(5000),
            ..Default::default()
        };

        assert!(report.is_night_at(999));
        assert!(!report.is_night_at(1000));
        assert!(!report.is_night_at(4999));
        assert!(report.is_night_at(5000));
    }

    #[test]
    fn unknown_sun_times_mean_day() {
        let report = WeatherReport {
            sunrise: Some(1000),
            ..Default::default()
        };
        assert!(!report.is_night_at(0));
    }

    #[test]
    fn condition_carries_code_and_night_flag() {
        let report = WeatherReport {
            code: Some(800),
            desc: Some("clear sky".into()),
            sunrise: Some(1000),
            sunset: Some(5000),
            ..Default::default()
        };

        let condition = report.condition_at(6000);
        assert_eq!(condition.code, Some(800));
        assert_eq!(condition.description, "clear sky");
        assert!(condition.is_night);
    }
}
