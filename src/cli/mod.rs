//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calculate`: 单次散射事件计算
//! - `plot`: 碰撞前后波形对比图
//! - `sweep`: 波长移动量随散射角扫描
//! - `info`: 康普顿效应背景介绍
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calculate, plot, sweep

pub mod calculate;
pub mod plot;
pub mod sweep;

use clap::{Parser, Subcommand};

/// Comptonsim - 康普顿散射运动学工具箱
#[derive(Parser)]
#[command(name = "comptonsim")]
#[command(version)]
#[command(about = "A Compton photon-electron scattering kinematics toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the full kinematics of one scattering event
    Calculate(calculate::CalculateArgs),

    /// Plot the pre- and post-collision photon waveforms
    Plot(plot::PlotArgs),

    /// Sweep the scatter angle and tabulate the wavelength shift
    Sweep(sweep::SweepArgs),

    /// Show background information about the Compton effect
    Info,
}
