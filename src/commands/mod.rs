//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `compton/`, `utils/`
//! - 子模块: calculate, plot, sweep, info

pub mod calculate;
pub mod info;
pub mod plot;
pub mod sweep;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calculate(args) => calculate::execute(args),
        Commands::Plot(args) => plot::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Info => info::execute(),
    }
}
