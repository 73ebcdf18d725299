//! # Animation 模块
//!
//! 逐帧驱动的动画原语，宿主每帧调用一次 `tick(dt)`。
//!
//! ## 核心概念
//!
//! - `EasingFunction`: 缓动函数
//! - `Tween`: 缓动过渡，目标改变时从当前值重新计时
//! - `PhaseOscillator`: 连续相位振荡器，0 → 2π 循环
//! - `SplashEnvelope`: 两段式振幅脉冲
//! - `AnimationDriver`: 上述驱动器的公共接口
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! let mut tween = Tween::new(0.0, 180.0, AnimationSpec::tween(1_500));
//!
//! // 每帧
//! tween.update(dt);
//! let degrees = tween.value();
//!
//! // 目标改变：从当前值继续
//! tween.retarget(270.0);
//! ```

mod easing;
mod envelope;
mod oscillator;
mod traits;
mod tween;

pub use easing::EasingFunction;
pub use envelope::{SPLASH_PEAK_RATIO, SplashEnvelope};
pub use oscillator::PhaseOscillator;
pub use traits::{AnimationDriver, tick_all};
pub use tween::{AnimationSpec, Tween, TweenState};
