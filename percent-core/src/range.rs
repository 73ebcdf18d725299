//! # Range 模块
//!
//! 数值映射：把 `(current, maximum)` 转换为各形状需要的范围单位。
//!
//! - 圆弧：角度（0° 在正上方，顺时针为正）
//! - 线性条：像素宽度
//! - 波浪：0..1 的填充比例，以及反转后的基线比例

use crate::error::{PercentResult, ValidationError};

/// 一整圈的角度
pub const FULL_CIRCLE_DEGREES: f32 = 360.0;

/// 经过校验的数值范围
///
/// 不变量：`0 <= current <= maximum`，两者均为有限值。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageRange {
    current: f32,
    maximum: f32,
}

impl PercentageRange {
    /// 创建并校验数值范围
    pub fn new(current: f32, maximum: f32) -> PercentResult<Self> {
        if !current.is_finite() {
            return Err(ValidationError::NonFinite { field: "current" });
        }
        if !maximum.is_finite() {
            return Err(ValidationError::NonFinite { field: "maximum" });
        }
        if current < 0.0 {
            return Err(ValidationError::NegativeCurrent { current });
        }
        if maximum < 0.0 {
            return Err(ValidationError::NegativeMaximum { maximum });
        }
        if current > maximum {
            return Err(ValidationError::ExceedsMaximum { current, maximum });
        }
        Ok(Self { current, maximum })
    }

    /// 空范围（0 / 0）
    pub const fn empty() -> Self {
        Self {
            current: 0.0,
            maximum: 0.0,
        }
    }

    /// 当前值
    pub fn current(&self) -> f32 {
        self.current
    }

    /// 最大值
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// 以相同最大值替换当前值
    pub fn with_current(&self, current: f32) -> PercentResult<Self> {
        Self::new(current, self.maximum)
    }

    /// 归一化比例 `current / maximum`
    ///
    /// 最大值为 0 时比例定义为 0。
    pub fn ratio(&self) -> f32 {
        guard_finite(self.current / self.maximum)
    }

    /// 是否已达到最大值
    pub fn is_full(&self) -> bool {
        self.maximum > 0.0 && self.current >= self.maximum
    }

    /// 映射到指定单位
    pub fn extent(&self, kind: Extent) -> f32 {
        map_to_extent(self.current, self.maximum, kind)
    }
}

impl Default for PercentageRange {
    fn default() -> Self {
        Self::empty()
    }
}

/// 映射目标单位
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// 圆弧扫过的角度
    Degrees,
    /// 线性条的像素宽度
    Pixels {
        /// 容器（轨道）宽度
        container_width: f32,
    },
    /// 波浪填充比例（0 = 空，1 = 满）
    FillRatio,
    /// 波浪基线比例（从顶部量起，0 = 满，1 = 空）
    WaveBaseline,
}

/// 把 `(current, maximum)` 映射为目标单位
///
/// 纯函数。除零等退化情况产生的非有限值一律视为 0 比例。
pub fn map_to_extent(current: f32, maximum: f32, kind: Extent) -> f32 {
    let ratio = guard_finite(current / maximum);
    match kind {
        Extent::Degrees => ratio * FULL_CIRCLE_DEGREES,
        Extent::Pixels { container_width } => guard_finite(ratio * container_width),
        Extent::FillRatio => ratio,
        Extent::WaveBaseline => 1.0 - ratio,
    }
}

/// 角度换算回原始数值，用于标签显示
pub fn degrees_to_value(degrees: f32, maximum: f32) -> f32 {
    guard_finite(degrees / FULL_CIRCLE_DEGREES * maximum)
}

/// 非有限值替换为 0
pub fn guard_finite(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// 标签文本：截断为整数
pub fn label_text(value: f32) -> String {
    // `as` 对 NaN 给 0、对越界值饱和，正好符合显示需求
    (guard_finite(value).trunc() as i64).to_string()
}
