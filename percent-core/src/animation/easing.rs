//! # Easing 模块
//!
//! 缓动函数库，用于动画的时间插值。
//!
//! 所有曲线满足 `apply(0) = 0`、`apply(1) = 1`，并在 [0, 1] 上单调不减。

use serde::{Deserialize, Serialize};

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 二次缓入
    EaseInQuad,
    /// 二次缓出
    EaseOutQuad,
    /// 标准曲线：快速启动、缓慢停止，cubic-bezier(0.4, 0, 0.2, 1)
    #[default]
    FastOutSlowIn,
    /// 匀速启动、缓慢停止，cubic-bezier(0, 0, 0.2, 1)
    LinearOutSlowIn,
    /// 快速启动、匀速结束，cubic-bezier(0.4, 0, 1, 1)
    FastOutLinearIn,
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::FastOutSlowIn => CubicBezier::FAST_OUT_SLOW_IN.evaluate(t),
            EasingFunction::LinearOutSlowIn => CubicBezier::LINEAR_OUT_SLOW_IN.evaluate(t),
            EasingFunction::FastOutLinearIn => CubicBezier::FAST_OUT_LINEAR_IN.evaluate(t),
        }
    }
}

/// 三次贝塞尔缓动曲线，端点固定为 (0,0) 与 (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const FAST_OUT_SLOW_IN: Self = Self::new(0.4, 0.0, 0.2, 1.0);
    const LINEAR_OUT_SLOW_IN: Self = Self::new(0.0, 0.0, 0.2, 1.0);
    const FAST_OUT_LINEAR_IN: Self = Self::new(0.4, 0.0, 1.0, 1.0);

    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(t: f32, p1: f32, p2: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
    }

    fn sample_dx(&self, t: f32) -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * self.x1 + 6.0 * mt * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    /// 给定 x（时间）求 y（进度）
    ///
    /// 先用 Newton-Raphson 迭代，导数过小时退回二分法。
    fn evaluate(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(t, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return Self::sample(t, self.y1, self.y2).clamp(0.0, 1.0);
            }
            let dx = self.sample_dx(t);
            if dx.abs() < 1e-6 {
                break;
            }
            t = (t - err / dx).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let sx = Self::sample(t, self.x1, self.x2);
            if (sx - x).abs() < 1e-6 {
                break;
            }
            if sx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(t, self.y1, self.y2).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::EaseInQuad,
        EasingFunction::EaseOutQuad,
        EasingFunction::FastOutSlowIn,
        EasingFunction::LinearOutSlowIn,
        EasingFunction::FastOutLinearIn,
    ];

    #[test]
    fn test_linear() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=200 {
                let v = easing.apply(i as f32 / 200.0);
                assert!(v + 1e-5 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_quad_midpoint() {
        assert_eq!(EasingFunction::EaseInQuad.apply(0.5), 0.25);
        assert_eq!(EasingFunction::EaseOutQuad.apply(0.5), 0.75);
    }

    #[test]
    fn test_fast_out_slow_in_shape() {
        let easing = EasingFunction::FastOutSlowIn;
        // 起步略慢，中段明显快于线性
        assert!(easing.apply(0.25) < 0.25);
        assert!(easing.apply(0.5) > 0.5);
        // cubic-bezier(0.4, 0, 0.2, 1) 在 x = 0.5 处约为 0.774
        assert!((easing.apply(0.5) - 0.774).abs() < 0.01);
    }

    #[test]
    fn test_clamp() {
        let easing = EasingFunction::Linear;
        // 超出范围应该被限制
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_default_is_standard_curve() {
        assert_eq!(EasingFunction::default(), EasingFunction::FastOutSlowIn);
    }
}
