//! # sweep 子命令实现
//!
//! 固定入射波长，按步长扫描散射角区间，输出波长移动量曲线
//! 数据（CSV/XY）或曲线图（PNG/SVG）。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs 与区间解析
//! - 使用 `compton/` 模块进行计算、绘图与导出

use crate::cli::sweep::{guess_sweep_format, parse_angle_range, SweepArgs, SweepOutputFormat};
use crate::compton::constants::meters_to_picometers;
use crate::compton::{export, plot, ScatteringEvent};
use crate::error::{ComptonError, Result};
use crate::utils::output;

/// 扫描点数上限，防止过小步长耗尽内存
const MAX_SWEEP_POINTS: usize = 1_000_000;

/// 执行散射角扫描
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Compton Wavelength Shift Sweep");

    let (angle_min, angle_max) = parse_angle_range(&args.range)?;

    if !args.step.is_finite() || args.step <= 0.0 {
        return Err(ComptonError::InvalidInput(format!(
            "step must be a positive number of degrees, got {}",
            args.step
        )));
    }

    let n_points = ((angle_max - angle_min) / args.step).ceil() as usize + 1;
    if n_points > MAX_SWEEP_POINTS {
        return Err(ComptonError::InvalidRange(format!(
            "{} with step {} yields {} points (max {})",
            args.range, args.step, n_points, MAX_SWEEP_POINTS
        )));
    }

    output::print_info(&format!(
        "Sweeping θ over {:.2}° - {:.2}° in steps of {}°",
        angle_min, angle_max, args.step
    ));
    output::print_info(&format!("Incident wavelength λ: {} pm", args.wavelength));

    let events = (0..n_points)
        .map(|i| {
            let angle = (angle_min + i as f64 * args.step).min(angle_max);
            ScatteringEvent::new(angle, args.wavelength)
        })
        .collect::<Result<Vec<_>>>()?;

    output::print_info(&format!("Computed {} scattering events", events.len()));

    let max_shift = events
        .iter()
        .map(|ev| ev.wavelength_shift())
        .fold(0.0_f64, f64::max);
    output::print_info(&format!(
        "Maximum shift in range: {:.4} pm",
        meters_to_picometers(max_shift)
    ));

    let format = args
        .format
        .unwrap_or_else(|| guess_sweep_format(&args.output));

    match format {
        SweepOutputFormat::Png | SweepOutputFormat::Svg => {
            plot::generate_shift_plot(
                &events,
                &args.output,
                &args.title,
                args.width,
                args.height,
                format == SweepOutputFormat::Svg,
            )?;
        }
        SweepOutputFormat::Csv => export::sweep_to_csv(&events, &args.output)?,
        SweepOutputFormat::Xy => export::sweep_to_xy(&events, args.wavelength, &args.output)?,
    }

    output::print_success(&format!("Sweep saved to '{}'", args.output.display()));

    Ok(())
}
