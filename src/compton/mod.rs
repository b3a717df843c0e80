//! # 康普顿散射计算模块
//!
//! 提供光子-电子散射运动学的计算、绘图与导出功能。
//!
//! ## 子模块
//! - `constants`: 物理常数与单位换算
//! - `event`: 散射事件运动学计算
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 各模块使用

pub mod constants;
pub mod event;
pub mod export;
pub mod plot;

pub use event::ScatteringEvent;
