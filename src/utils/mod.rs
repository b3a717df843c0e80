//! # 工具模块
//!
//! ## 子模块
//! - `output`: 美化终端输出

pub mod output;
