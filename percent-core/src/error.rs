//! # Error 模块
//!
//! 定义 percent-core 中使用的错误类型。

use thiserror::Error;

/// 输入校验错误
///
/// 所有前置条件都在构造或更新组件时同步检查，失败时组件保持原状态不变。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 当前值为负
    #[error("当前值必须大于或等于 0，实际为 {current}")]
    NegativeCurrent { current: f32 },

    /// 最大值为负
    #[error("最大值必须大于或等于 0，实际为 {maximum}")]
    NegativeMaximum { maximum: f32 },

    /// 当前值超过最大值
    #[error("当前值 {current} 必须小于或等于最大值 {maximum}")]
    ExceedsMaximum { current: f32, maximum: f32 },

    /// 数值不是有限值（NaN / 无穷）
    #[error("参数 '{field}' 必须是有限数值")]
    NonFinite { field: &'static str },

    /// 尺寸为负
    #[error("参数 '{field}' 必须大于或等于 0，实际为 {value}")]
    NegativeSize { field: &'static str, value: f32 },

    /// 描边宽度必须为正
    #[error("描边宽度 '{field}' 必须大于 0，实际为 {value}")]
    NonPositiveStroke { field: &'static str, value: f32 },

    /// 时长必须为正（连续波动周期）
    #[error("时长 '{field}' 必须大于 0")]
    ZeroDuration { field: &'static str },

    /// 渐变颜色列表为空
    #[error("渐变颜色列表不能为空")]
    EmptyGradient,

    /// 波形采样点数为 0
    #[error("波形采样点数必须大于 0")]
    ZeroSampleCount,
}

/// Result 类型别名
pub type PercentResult<T> = Result<T, ValidationError>;

/// 校验非负尺寸
pub fn check_size(field: &'static str, value: f32) -> PercentResult<f32> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeSize { field, value });
    }
    Ok(value)
}

/// 校验正数描边宽度
pub fn check_stroke(field: &'static str, value: f32) -> PercentResult<f32> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveStroke { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        assert_eq!(check_size("size", 0.0), Ok(0.0));
        assert_eq!(check_size("size", 12.5), Ok(12.5));
        assert_eq!(
            check_size("size", -1.0),
            Err(ValidationError::NegativeSize {
                field: "size",
                value: -1.0
            })
        );
        assert_eq!(
            check_size("size", f32::INFINITY),
            Err(ValidationError::NonFinite { field: "size" })
        );
    }

    #[test]
    fn test_check_stroke() {
        assert_eq!(check_stroke("stroke", 10.0), Ok(10.0));
        assert!(matches!(
            check_stroke("stroke", 0.0),
            Err(ValidationError::NonPositiveStroke { .. })
        ));
        assert!(matches!(
            check_stroke("stroke", f32::NAN),
            Err(ValidationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::ExceedsMaximum {
            current: 120.0,
            maximum: 100.0,
        };
        assert_eq!(err.to_string(), "当前值 120 必须小于或等于最大值 100");
    }
}
