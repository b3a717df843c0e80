//! # sweep 子命令 CLI 定义
//!
//! 固定入射波长、扫描散射角的参数定义，以及角度区间解析。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use crate::error::{ComptonError, Result};

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 扫描输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SweepOutputFormat {
    /// PNG image of the shift curve
    Png,
    /// SVG vector image of the shift curve
    Svg,
    /// CSV data file (angle, wavelengths, shift, electron kinematics)
    Csv,
    /// XY data file (angle, shift)
    Xy,
}

/// 从文件扩展名推断扫描输出格式
pub fn guess_sweep_format(path: &Path) -> SweepOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => SweepOutputFormat::Svg,
        Some("csv") => SweepOutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => SweepOutputFormat::Xy,
        _ => SweepOutputFormat::Png,
    }
}

/// 解析散射角区间（如 "0-180"）
pub fn parse_angle_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(ComptonError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| ComptonError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| ComptonError::InvalidRange(range.to_string()))?;

    if min < 0.0 || max <= min || max > 360.0 {
        return Err(ComptonError::InvalidRange(format!(
            "{} (must be 0 <= min < max <= 360)",
            range
        )));
    }

    Ok((min, max))
}

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Scatter angle range in degrees (e.g., "0-180")
    #[arg(short, long, default_value = "0-180")]
    pub range: String,

    /// Angle step in degrees
    #[arg(short, long, default_value_t = 0.1)]
    pub step: f64,

    /// Incident photon wavelength, in picometers
    #[arg(short, long, default_value_t = 10.0)]
    pub wavelength: f64,

    /// Output file (format auto-detected from extension: png, svg, csv, xy)
    #[arg(short, long, default_value = "compton_sweep.png")]
    pub output: PathBuf,

    /// Output format (overrides extension detection)
    #[arg(short, long, value_enum)]
    pub format: Option<SweepOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot outputs
    #[arg(long, default_value = "Compton Wavelength Shift")]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_angle_range() {
        assert_eq!(parse_angle_range("0-180").unwrap(), (0.0, 180.0));
        assert_eq!(parse_angle_range("10.5-90").unwrap(), (10.5, 90.0));
        assert_eq!(parse_angle_range(" 0 - 360 ").unwrap(), (0.0, 360.0));

        assert!(parse_angle_range("180").is_err());
        assert!(parse_angle_range("90-10").is_err());
        assert!(parse_angle_range("0-361").is_err());
        assert!(parse_angle_range("abc-90").is_err());
    }

    #[test]
    fn test_guess_sweep_format() {
        assert_eq!(
            guess_sweep_format(Path::new("out.svg")),
            SweepOutputFormat::Svg
        );
        assert_eq!(
            guess_sweep_format(Path::new("out.CSV")),
            SweepOutputFormat::Csv
        );
        assert_eq!(
            guess_sweep_format(Path::new("out.dat")),
            SweepOutputFormat::Xy
        );
        assert_eq!(
            guess_sweep_format(Path::new("out.png")),
            SweepOutputFormat::Png
        );
        assert_eq!(guess_sweep_format(Path::new("out")), SweepOutputFormat::Png);
    }
}
