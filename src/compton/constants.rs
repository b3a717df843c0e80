//! # 物理常数与单位换算
//!
//! 康普顿散射计算所需的三个基本物理常数（SI 单位），以及皮米/米换算。
//! 常数为编译期不可变量，不可配置。
//!
//! ## 依赖关系
//! - 被 `compton/event.rs` 使用

/// 电子静止质量 mₑ (kg)
pub const ELECTRON_MASS: f64 = 9.10938356e-31;

/// 真空光速 c (m/s)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// 普朗克常数 h (J·s)
pub const PLANCK_CONSTANT: f64 = 6.626e-34;

/// 电子康普顿波长 h/(mₑc) (m)，即 90° 散射时的波长移动量
pub const COMPTON_WAVELENGTH: f64 = PLANCK_CONSTANT / (ELECTRON_MASS * SPEED_OF_LIGHT);

/// 皮米转米
#[inline]
pub fn picometers_to_meters(v: f64) -> f64 {
    v * 1e-12
}

/// 米转皮米
#[inline]
pub fn meters_to_picometers(v: f64) -> f64 {
    v * 1e12
}
