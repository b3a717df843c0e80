//! # calculate 子命令实现
//!
//! 计算单次散射事件并以表格展示全部十一个结果量。
//!
//! ## 功能
//! - 输入校验（非有限数、非正波长直接拒绝，不做静默归零）
//! - 可选逐步推导输出（--verbose，对应原生程序的逐步控制台日志）
//! - 可选结果记录 CSV 导出（--export）
//!
//! ## 依赖关系
//! - 使用 `cli/calculate.rs` 定义的 CalculateArgs
//! - 使用 `compton/` 模块进行计算与导出

use crate::cli::calculate::CalculateArgs;
use crate::compton::constants::meters_to_picometers;
use crate::compton::{export, ScatteringEvent};
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行单次散射事件计算
pub fn execute(args: CalculateArgs) -> Result<()> {
    output::print_header("Compton Scattering Calculation");

    output::print_info(&format!("Scatter angle θ: {}°", args.angle));
    output::print_info(&format!("Incident wavelength λ: {} pm", args.wavelength));

    if !(0.0..360.0).contains(&args.angle) {
        output::print_warning(&format!(
            "Angle {}° is outside the physically meaningful range [0°, 360°)",
            args.angle
        ));
    }

    let event = ScatteringEvent::new(args.angle, args.wavelength)?;

    if args.verbose {
        print_derivation_steps(&event);
    }

    print_result_table(&event);

    output::print_info(&format!(
        "Wavelength shift Δλ: {:.4} pm",
        meters_to_picometers(event.wavelength_shift())
    ));

    if let Some(ref path) = args.export {
        export::to_csv(&event, path)?;
        output::print_success(&format!("Result record saved to '{}'", path.display()));
    }

    Ok(())
}

/// 按推导顺序打印每一步的结果（原生程序逐步日志的替代）
fn print_derivation_steps(event: &ScatteringEvent) {
    output::print_quantity("Scatter angle θ (radians)", event.angle_radians, "rad");
    output::print_quantity("Pre-collision wavelength λ", event.wavelength_before, "m");
    output::print_quantity("Post-collision wavelength λ'", event.wavelength_after, "m");
    output::print_quantity("Pre-collision photon momentum", event.momentum_before, "kg·m/s");
    output::print_quantity("Post-collision photon momentum", event.momentum_after, "kg·m/s");
    output::print_quantity("Pre-collision photon energy", event.energy_before, "J");
    output::print_quantity("Post-collision photon energy", event.energy_after, "J");
    output::print_quantity(
        "Electron kinetic energy",
        event.electron_kinetic_energy,
        "J",
    );
    output::print_quantity("Electron velocity", event.electron_velocity, "m/s");
    output::print_quantity("Electron momentum", event.electron_momentum, "kg·m/s");
    output::print_quantity(
        "Electron scatter angle φ",
        event.electron_scatter_angle,
        "°",
    );
}

/// 打印结果表格
fn print_result_table(event: &ScatteringEvent) {
    #[derive(Tabled)]
    struct ResultRow {
        #[tabled(rename = "Quantity")]
        quantity: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Unit")]
        unit: String,
    }

    // 波长等极小量使用科学计数法，5 位有效数字
    let row = |quantity: &str, value: String, unit: &str| ResultRow {
        quantity: quantity.to_string(),
        value,
        unit: unit.to_string(),
    };

    let rows = vec![
        row(
            "Scatter angle θ",
            format!("{:.4}", event.angle_degrees),
            "°",
        ),
        row(
            "Wavelength λ (incident)",
            format!("{:.4e}", event.wavelength_before),
            "m",
        ),
        row(
            "Wavelength λ' (deflected)",
            format!("{:.4e}", event.wavelength_after),
            "m",
        ),
        row(
            "Photon energy (incident)",
            format!("{:.4e}", event.energy_before),
            "J",
        ),
        row(
            "Photon energy (deflected)",
            format!("{:.4e}", event.energy_after),
            "J",
        ),
        row(
            "Photon momentum (incident)",
            format!("{:.4e}", event.momentum_before),
            "kg·m/s",
        ),
        row(
            "Photon momentum (deflected)",
            format!("{:.4e}", event.momentum_after),
            "kg·m/s",
        ),
        row(
            "Electron kinetic energy",
            format!("{:.4e}", event.electron_kinetic_energy),
            "J",
        ),
        row(
            "Electron velocity",
            format!("{:.4e}", event.electron_velocity),
            "m/s",
        ),
        row(
            "Electron momentum",
            format!("{:.4e}", event.electron_momentum),
            "kg·m/s",
        ),
        row(
            "Electron scatter angle φ",
            format!("{:.4}", event.electron_scatter_angle),
            "°",
        ),
    ];

    let table = Table::new(&rows);
    println!("{}", table);
}
