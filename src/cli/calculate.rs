//! # calculate 子命令 CLI 定义
//!
//! 单次散射事件计算的输入参数。默认值沿用原生 UI 的默认设置
//! （θ = 180.0°，λ = 10 pm）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calculate.rs`

use clap::Args;
use std::path::PathBuf;

/// calculate 子命令参数
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Photon scatter angle theta, in degrees (physically meaningful in [0, 360))
    #[arg(short, long, default_value_t = 180.0)]
    pub angle: f64,

    /// Incident photon wavelength, in picometers (must be positive)
    #[arg(short, long, default_value_t = 10.0)]
    pub wavelength: f64,

    /// Export the full result record to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print each derivation step as it is evaluated
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
