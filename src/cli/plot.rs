//! # plot 子命令 CLI 定义
//!
//! 波形对比图的输入与渲染参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// 从文件扩展名推断图像格式
pub fn guess_plot_format(path: &Path) -> PlotFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotFormat::Svg,
        _ => PlotFormat::Png,
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Photon scatter angle theta, in degrees
    #[arg(short, long, default_value_t = 180.0)]
    pub angle: f64,

    /// Incident photon wavelength, in picometers
    #[arg(short, long, default_value_t = 10.0)]
    pub wavelength: f64,

    /// Output image path
    #[arg(short, long, default_value = "compton_waveform.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long, default_value = "Compton Scattering")]
    pub title: String,
}
