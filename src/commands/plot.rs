//! # plot 子命令实现
//!
//! 计算单次散射事件并渲染碰撞前后光子的示意波形对比图。
//! 曲线为 E·cos((2π/λ)·x)，横轴范围 [0, 2λ]，用于定性展示
//! 能量-波长关系，不是物理意义上的波形模拟。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `compton/event.rs` 计算、`compton/plot.rs` 渲染

use crate::cli::plot::{guess_plot_format, PlotArgs, PlotFormat};
use crate::compton::constants::meters_to_picometers;
use crate::compton::{plot, ScatteringEvent};
use crate::error::Result;
use crate::utils::output;

/// 执行波形对比图渲染
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Compton Scattering Waveform Plot");

    output::print_info(&format!("Scatter angle θ: {}°", args.angle));
    output::print_info(&format!("Incident wavelength λ: {} pm", args.wavelength));

    let event = ScatteringEvent::new(args.angle, args.wavelength)?;

    output::print_info(&format!(
        "Wavelength shift Δλ: {:.4} pm",
        meters_to_picometers(event.wavelength_shift())
    ));

    let format = args.format.unwrap_or_else(|| guess_plot_format(&args.output));

    plot::generate_waveform_plot(
        &event,
        &args.output,
        &args.title,
        args.width,
        args.height,
        format == PlotFormat::Svg,
    )?;

    output::print_success(&format!("Waveform plot saved to '{}'", args.output.display()));

    Ok(())
}
