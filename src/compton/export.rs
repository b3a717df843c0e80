//! # 计算结果数据导出
//!
//! 导出散射事件数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 单次事件的完整结果记录（一行），或扫描模式的逐角度数据
//! - XY: 标准两列数据交换格式（θ, Δλ），带 # 注释头
//!
//! ## 依赖关系
//! - 被 `commands/calculate.rs`, `commands/sweep.rs` 调用
//! - 使用 `compton/event.rs` 的 ScatteringEvent 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::compton::constants::meters_to_picometers;
use crate::compton::ScatteringEvent;
use crate::error::{ComptonError, Result};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出单次事件的完整结果记录为 CSV（表头 + 一行数据）
pub fn to_csv(event: &ScatteringEvent, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.serialize(event)?;

    wtr.flush().map_err(|e| ComptonError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出角度扫描数据为 CSV 格式
pub fn sweep_to_csv(events: &[ScatteringEvent], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "angle_degrees",
        "wavelength_before_m",
        "wavelength_after_m",
        "shift_pm",
        "electron_kinetic_energy_j",
        "electron_scatter_angle_degrees",
    ])?;

    for ev in events {
        wtr.write_record(&[
            format!("{:.4}", ev.angle_degrees),
            format!("{:.5e}", ev.wavelength_before),
            format!("{:.5e}", ev.wavelength_after),
            format!("{:.6}", meters_to_picometers(ev.wavelength_shift())),
            format!("{:.5e}", ev.electron_kinetic_energy),
            format!("{:.4}", ev.electron_scatter_angle),
        ])?;
    }

    wtr.flush().map_err(|e| ComptonError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出角度扫描数据为 XY 格式
pub fn sweep_to_xy(
    events: &[ScatteringEvent],
    incident_wavelength_pm: f64,
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| ComptonError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(write_err)?;

    writeln!(file, "# Compton wavelength shift sweep").map_err(write_err)?;
    writeln!(
        file,
        "# Incident wavelength: {:.4} pm",
        incident_wavelength_pm
    )
    .map_err(write_err)?;
    writeln!(file, "# Columns: theta (degrees), shift (pm)").map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for ev in events {
        writeln!(
            file,
            "{:.4}\t{:.6}",
            ev.angle_degrees,
            meters_to_picometers(ev.wavelength_shift())
        )
        .map_err(write_err)?;
    }

    Ok(())
}
