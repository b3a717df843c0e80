//! # Comptonsim - 康普顿散射运动学工具箱
//!
//! 由两个输入量（光子散射角 θ、入射波长 λ）推导一次光子-电子碰撞
//! 的全部运动学量，并可视化碰撞前后的能量-波长关系。
//!
//! ## 子命令
//! - `calculate` - 单次散射事件计算（表格输出，可导出 CSV）
//! - `plot`      - 碰撞前后光子波形对比图 (PNG/SVG)
//! - `sweep`     - 波长移动量随散射角扫描 (PNG/SVG/CSV/XY)
//! - `info`      - 康普顿效应背景介绍
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── compton/    (散射运动学计算、绘图、导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod compton;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
