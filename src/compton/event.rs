//! # 康普顿散射事件计算器
//!
//! 由两个输入量（光子散射角 θ、入射波长 λ）推导碰撞前后的全部运动学量。
//!
//! ## 算法概述（推导顺序固定，后一步只消费前面的结果）
//! 1. 角度转弧度，皮米转米
//! 2. 康普顿波长移动公式: λ′ = λ + h/(mₑc)·(1 − cos θ)
//! 3. 德布罗意关系求光子动量: p = h/λ（碰撞前后各一次）
//! 4. 光子能量: E = hc/λ（碰撞前后各一次）
//! 5. 能量守恒求电子动能: KE = E − E′
//! 6. 非相对论动能公式求电子速度: v = √(2·KE/mₑ)
//! 7. 经典动量: pₑ = mₑ·v
//! 8. 横向动量守恒求电子反冲角: φ = asin(p′·sin θ / pₑ)
//!
//! 已知局限: 速度接近光速时非相对论近似失效，本模型不做修正。
//!
//! ## 依赖关系
//! - 被 `commands/` 各模块调用
//! - 使用 `compton/constants.rs` 的物理常数

use crate::compton::constants::{
    picometers_to_meters, COMPTON_WAVELENGTH, ELECTRON_MASS, PLANCK_CONSTANT, SPEED_OF_LIGHT,
};
use crate::error::{ComptonError, Result};

use serde::Serialize;

/// 一次康普顿散射事件的完整运动学记录
///
/// 由构造输入和三个物理常数完全决定，构造后不可变。
/// 每次用户提交创建一个实例，读取完毕即丢弃。
#[derive(Debug, Clone, Serialize)]
pub struct ScatteringEvent {
    /// 光子散射角 θ（度）
    pub angle_degrees: f64,
    /// 光子散射角 θ（弧度）
    pub angle_radians: f64,
    /// 碰撞前光子波长 λ（米）
    pub wavelength_before: f64,
    /// 碰撞后光子波长 λ′（米）
    pub wavelength_after: f64,
    /// 碰撞前光子动量（kg·m/s）
    pub momentum_before: f64,
    /// 碰撞后光子动量（kg·m/s）
    pub momentum_after: f64,
    /// 碰撞前光子能量（J）
    pub energy_before: f64,
    /// 碰撞后光子能量（J）
    pub energy_after: f64,
    /// 电子动能（J）
    pub electron_kinetic_energy: f64,
    /// 电子速度（m/s，非相对论）
    pub electron_velocity: f64,
    /// 电子动量（kg·m/s）
    pub electron_momentum: f64,
    /// 电子反冲角 φ（度）
    pub electron_scatter_angle: f64,
}

impl ScatteringEvent {
    /// 从散射角（度）和入射波长（皮米）计算完整事件
    ///
    /// 输入非有限数或波长不为正时返回 `InvalidInput`（波长在下游作除数）。
    pub fn new(angle_degrees: f64, incident_wavelength_pm: f64) -> Result<Self> {
        if !angle_degrees.is_finite() {
            return Err(ComptonError::InvalidInput(format!(
                "scatter angle must be a finite number, got {}",
                angle_degrees
            )));
        }
        if !incident_wavelength_pm.is_finite() || incident_wavelength_pm <= 0.0 {
            return Err(ComptonError::InvalidInput(format!(
                "incident wavelength must be a positive finite number of picometers, got {}",
                incident_wavelength_pm
            )));
        }

        // 第 1 步: 单位换算
        let angle_radians = angle_degrees.to_radians();
        let wavelength_before = picometers_to_meters(incident_wavelength_pm);

        // 第 2 步: 波长移动量只依赖散射角，与入射波长无关
        let wavelength_after =
            wavelength_before + COMPTON_WAVELENGTH * (1.0 - angle_radians.cos());

        // 第 3 步: 德布罗意关系 p = h/λ
        let momentum_before = PLANCK_CONSTANT / wavelength_before;
        let momentum_after = PLANCK_CONSTANT / wavelength_after;

        // 第 4 步: E = hc/λ
        let energy_before = PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength_before;
        let energy_after = PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength_after;

        // 第 5 步: 能量守恒
        let electron_kinetic_energy = energy_before - energy_after;

        // 第 6、7 步: 非相对论速度与经典动量
        let electron_velocity = (2.0 * electron_kinetic_energy / ELECTRON_MASS).sqrt();
        let electron_momentum = ELECTRON_MASS * electron_velocity;

        // 第 8 步: 横向动量守恒 p′·sin θ = pₑ·sin φ
        // 零散射角时电子无反冲，pₑ = 0，反冲角取 0 而不是 NaN；
        // asin 参数钳制到 [-1, 1]，避免浮点漂移触发定义域错误
        let electron_scatter_angle = if electron_momentum == 0.0 {
            0.0
        } else {
            let sin_phi =
                (momentum_after * angle_radians.sin() / electron_momentum).clamp(-1.0, 1.0);
            sin_phi.asin().to_degrees()
        };

        Ok(Self {
            angle_degrees,
            angle_radians,
            wavelength_before,
            wavelength_after,
            momentum_before,
            momentum_after,
            energy_before,
            energy_after,
            electron_kinetic_energy,
            electron_velocity,
            electron_momentum,
            electron_scatter_angle,
        })
    }

    /// 波长移动量 Δλ = λ′ − λ（米）
    pub fn wavelength_shift(&self) -> f64 {
        self.wavelength_after - self.wavelength_before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compton::constants::meters_to_picometers;

    /// 相对误差断言
    fn assert_rel_eq(actual: f64, expected: f64, rel_tol: f64) {
        let scale = expected.abs().max(f64::MIN_POSITIVE);
        assert!(
            (actual - expected).abs() / scale <= rel_tol,
            "expected {:e}, got {:e} (rel tol {:e})",
            expected,
            actual,
            rel_tol
        );
    }

    #[test]
    fn test_zero_angle_is_degenerate() {
        let ev = ScatteringEvent::new(0.0, 10.0).unwrap();

        assert_eq!(ev.wavelength_after, ev.wavelength_before);
        assert_eq!(ev.electron_kinetic_energy, 0.0);
        assert_eq!(ev.electron_velocity, 0.0);
        assert_eq!(ev.electron_momentum, 0.0);
        // 无反冲时角度特判为 0，不允许出现 NaN
        assert_eq!(ev.electron_scatter_angle, 0.0);
    }

    #[test]
    fn test_maximal_shift_at_180_degrees() {
        // 背散射移动量为 2h/(mₑc)，与入射波长无关
        let expected = 2.0 * COMPTON_WAVELENGTH;

        for wavelength_pm in [1.0, 9.0, 10.0, 500.0] {
            let ev = ScatteringEvent::new(180.0, wavelength_pm).unwrap();
            assert_rel_eq(ev.wavelength_shift(), expected, 1e-12);
        }
    }

    #[test]
    fn test_90_degrees_10_pm_scenario() {
        // 90° 散射的移动量恰为电子康普顿波长 ≈ 2.43 pm
        let ev = ScatteringEvent::new(90.0, 10.0).unwrap();

        assert_rel_eq(ev.wavelength_shift(), 2.4263e-12, 1e-4);
        assert_rel_eq(ev.wavelength_after, 1.24263e-11, 1e-4);
    }

    #[test]
    fn test_180_degrees_9_pm_scenario() {
        let ev = ScatteringEvent::new(180.0, 9.0).unwrap();

        assert_rel_eq(meters_to_picometers(ev.wavelength_shift()), 4.8526, 1e-4);
        assert_rel_eq(ev.wavelength_after, 1.38526e-11, 1e-4);
    }

    #[test]
    fn test_photon_loses_energy_to_electron() {
        for angle in [1.0, 30.0, 90.0, 179.0, 250.0, 359.0] {
            let ev = ScatteringEvent::new(angle, 10.0).unwrap();

            assert!(ev.energy_before > ev.energy_after, "angle {}", angle);
            assert!(ev.energy_after > 0.0, "angle {}", angle);
            assert!(ev.electron_kinetic_energy > 0.0, "angle {}", angle);
        }
    }

    #[test]
    fn test_energy_conservation_round_trip() {
        let ev = ScatteringEvent::new(137.0, 7.5).unwrap();

        assert_rel_eq(
            ev.electron_kinetic_energy,
            ev.energy_before - ev.energy_after,
            1e-12,
        );
    }

    #[test]
    fn test_de_broglie_and_classical_relations() {
        let ev = ScatteringEvent::new(60.0, 12.0).unwrap();

        assert_rel_eq(ev.momentum_before, PLANCK_CONSTANT / ev.wavelength_before, 1e-12);
        assert_rel_eq(ev.momentum_after, PLANCK_CONSTANT / ev.wavelength_after, 1e-12);
        assert_rel_eq(
            ev.electron_velocity,
            (2.0 * ev.electron_kinetic_energy / ELECTRON_MASS).sqrt(),
            1e-12,
        );
        assert_rel_eq(ev.electron_momentum, ELECTRON_MASS * ev.electron_velocity, 1e-12);
    }

    #[test]
    fn test_shift_monotonic_over_0_to_180() {
        let mut previous = 0.0;

        for i in 0..=180 {
            let ev = ScatteringEvent::new(i as f64, 10.0).unwrap();
            let shift = ev.wavelength_shift();

            assert!(
                shift >= previous,
                "shift decreased at {}°: {:e} < {:e}",
                i,
                shift,
                previous
            );
            previous = shift;
        }
    }

    #[test]
    fn test_recoil_angle_is_finite_everywhere() {
        // 360° 时 cos θ 的浮点值极接近 1，动量趋零，asin 钳制必须兜底
        for angle in [0.0, 0.001, 90.0, 180.0, 270.0, 359.999, 360.0] {
            let ev = ScatteringEvent::new(angle, 10.0).unwrap();

            assert!(
                ev.electron_scatter_angle.is_finite(),
                "non-finite recoil angle at {}°",
                angle
            );
            assert!(ev.electron_scatter_angle.abs() <= 90.0);
        }
    }

    #[test]
    fn test_recoil_angle_90_degrees() {
        let ev = ScatteringEvent::new(90.0, 10.0).unwrap();

        // 横向动量守恒: sin φ = p′·sin θ / pₑ
        let expected = (ev.momentum_after / ev.electron_momentum).asin().to_degrees();
        assert_rel_eq(ev.electron_scatter_angle, expected, 1e-12);
        assert!(ev.electron_scatter_angle > 0.0 && ev.electron_scatter_angle < 90.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(ScatteringEvent::new(f64::NAN, 10.0).is_err());
        assert!(ScatteringEvent::new(f64::INFINITY, 10.0).is_err());
        assert!(ScatteringEvent::new(90.0, 0.0).is_err());
        assert!(ScatteringEvent::new(90.0, -9.0).is_err());
        assert!(ScatteringEvent::new(90.0, f64::NAN).is_err());
        assert!(ScatteringEvent::new(90.0, f64::NEG_INFINITY).is_err());
    }
}
