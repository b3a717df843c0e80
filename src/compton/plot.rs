//! # 散射图表生成
//!
//! 使用 `plotters` 库生成两类图表：
//! - 波形对比图: 碰撞前后光子的示意余弦曲线 E·cos((2π/λ)·x)，
//!   定性展示能量-波长关系，并非物理意义上的波形模拟
//! - 移动量曲线图: 波长移动量 Δλ 随散射角 θ 的变化（扫描模式）
//!
//! ## 功能
//! - 支持 PNG 和 SVG 输出
//! - 图内标注 Δλ 数值
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/sweep.rs` 调用
//! - 使用 `compton/event.rs` 的 ScatteringEvent 结构
//! - 使用 `plotters` 渲染图表

use crate::compton::constants::meters_to_picometers;
use crate::compton::ScatteringEvent;
use crate::error::{ComptonError, Result};

use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

/// 波形曲线采样点数
const WAVEFORM_SAMPLES: usize = 800;

/// 生成碰撞前后光子波形对比图
pub fn generate_waveform_plot(
    event: &ScatteringEvent,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_waveform_chart(&root, event, title)?;
        root.present()
            .map_err(|e| ComptonError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_waveform_chart(&root, event, title)?;
        root.present()
            .map_err(|e| ComptonError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制波形对比图的核心逻辑
fn draw_waveform_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    event: &ScatteringEvent,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    // 横轴范围取 [0, 2λ]，纵轴按入射光子能量留 10% 边距
    let x_max = 2.0 * event.wavelength_before;
    let y_max = event.energy_before * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, -y_max..y_max)
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (meters)")
        .y_desc("Energy (joules)")
        .x_label_formatter(&|v| format!("{:.2e}", v))
        .y_label_formatter(&|v| format!("{:.2e}", v))
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    let incident_color = RGBColor(0, 102, 204);
    let deflected_color = RGBColor(204, 51, 0);

    // 入射光子: E·cos((2π/λ)·x)
    let b_before = 2.0 * PI / event.wavelength_before;
    let e_before = event.energy_before;
    chart
        .draw_series(LineSeries::new(
            waveform_points(x_max, e_before, b_before),
            incident_color.stroke_width(2),
        ))
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?
        .label("Incident photon")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], incident_color.stroke_width(2))
        });

    // 偏转光子: E′·cos((2π/λ′)·x)
    let b_after = 2.0 * PI / event.wavelength_after;
    let e_after = event.energy_after;
    chart
        .draw_series(LineSeries::new(
            waveform_points(x_max, e_after, b_after),
            deflected_color.stroke_width(2),
        ))
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?
        .label("Deflected photon")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], deflected_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    // 标注波长移动量
    let shift_text = format!(
        "θ = {:.2}°, Δλ = {:.4} pm",
        event.angle_degrees,
        meters_to_picometers(event.wavelength_shift())
    );
    chart
        .draw_series(std::iter::once(Text::new(
            shift_text,
            (x_max * 0.02, y_max * 0.92),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 余弦波形采样
fn waveform_points(x_max: f64, amplitude: f64, b_value: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..=WAVEFORM_SAMPLES).map(move |i| {
        let x = x_max * i as f64 / WAVEFORM_SAMPLES as f64;
        (x, amplitude * (b_value * x).cos())
    })
}

/// 生成波长移动量随散射角变化的曲线图（扫描模式）
pub fn generate_shift_plot(
    events: &[ScatteringEvent],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_shift_chart(&root, events, title)?;
        root.present()
            .map_err(|e| ComptonError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_shift_chart(&root, events, title)?;
        root.present()
            .map_err(|e| ComptonError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制移动量曲线的核心逻辑
fn draw_shift_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    events: &[ScatteringEvent],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    if events.is_empty() {
        return Err(ComptonError::PlotError(
            "no sweep data to plot".to_string(),
        ));
    }

    root.fill(&WHITE)
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    let data: Vec<(f64, f64)> = events
        .iter()
        .map(|ev| {
            (
                ev.angle_degrees,
                meters_to_picometers(ev.wavelength_shift()),
            )
        })
        .collect();

    let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
    let x_max = data.last().map(|(x, _)| *x).unwrap_or(180.0);
    // 区间全为零移动量时给纵轴一个非零范围
    let y_max = (data.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max) * 1.1).max(1e-6);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Scatter angle θ (°)")
        .y_desc("Wavelength shift Δλ (pm)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    // 填充曲线下方区域
    let fill_color = RGBColor(0, 102, 204).mix(0.2);
    chart
        .draw_series(AreaSeries::new(data.iter().copied(), 0.0, fill_color))
        .map_err(|e| ComptonError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
