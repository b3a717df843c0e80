//! # info 子命令实现
//!
//! 打印康普顿效应的背景介绍与本模型的适用范围。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `utils/output.rs`

use crate::compton::constants::{meters_to_picometers, COMPTON_WAVELENGTH};
use crate::error::Result;
use crate::utils::output;

/// 打印背景介绍
pub fn execute() -> Result<()> {
    output::print_header("Compton Scattering Information");

    println!(
        "This program models the Compton effect, Arthur Compton's discovery that\n\
         the collision of a photon with a charged particle scatters both particles\n\
         and increases the photon's wavelength. Applying conservation of energy and\n\
         momentum to the photon (massless, but carrying momentum p = h/λ) gives the\n\
         relationship between the pre-collision wavelength (λ), the post-collision\n\
         wavelength (λ'), and the photon scatter angle (θ):\n\
         \n\
             λ' = λ + h/(mₑc) · (1 − cos θ)\n\
         \n\
         The shift depends only on the scatter angle, never on the incident\n\
         wavelength. Its scale is set by the electron Compton wavelength\n\
         h/(mₑc) ≈ {:.4} pm, which is exactly the shift at θ = 90°, and twice\n\
         that at full backscatter (θ = 180°).",
        meters_to_picometers(COMPTON_WAVELENGTH)
    );

    output::print_separator();
    output::print_warning(
        "The electron recoil uses the non-relativistic kinetic energy formula; \
         results degrade as the recoil velocity approaches the speed of light.",
    );

    println!("\nRun `comptonsim calculate` to compute a scattering event.");

    Ok(())
}
