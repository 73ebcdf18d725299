//! # Percent Core
//!
//! 动画百分比指示器的核心逻辑库。
//!
//! ## 架构概述
//!
//! `percent-core` 是纯逻辑核心，不依赖任何 IO 或渲染引擎，只做数值计算：
//!
//! ```text
//! (current, maximum)
//!        │ map_to_extent
//!        ▼
//!   目标范围 ──► Tween ──► 当前动画值 ──► 宿主渲染
//!                                 │
//!   PhaseOscillator ──────────────┤ （仅波浪）
//!   SplashEnvelope  ──────────────┤
//!                                 ▼
//!                          build_wave_path
//! ```
//!
//! ## 模块结构
//!
//! - [`range`]：数值范围校验与映射
//! - [`animation`]：缓动、过渡、振荡器、脉冲包络
//! - [`wave`]：波浪路径构建
//! - [`error`]：校验错误类型

pub mod animation;
pub mod error;
pub mod range;
pub mod wave;

pub use animation::{
    AnimationDriver, AnimationSpec, EasingFunction, PhaseOscillator, SPLASH_PEAK_RATIO,
    SplashEnvelope, Tween, TweenState, tick_all,
};
pub use error::{PercentResult, ValidationError, check_size, check_stroke};
pub use range::{
    Extent, FULL_CIRCLE_DEGREES, PercentageRange, degrees_to_value, guard_finite, label_text,
    map_to_extent,
};
pub use wave::{DEFAULT_SAMPLE_COUNT, PathCommand, Point, WaveParams, WavePath, build_wave_path};
