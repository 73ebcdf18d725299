//! # Tween 模块
//!
//! 缓动过渡驱动器：管理单个 f32 值从 `from` 到 `to` 在 `duration` 内的变化。
//!
//! 目标值改变时调用 [`Tween::retarget`]，新的过渡从当前已渲染的值继续，
//! 而不是从零开始；需要硬重置时先 [`Tween::snap_to`] 再 `retarget`。

use serde::{Deserialize, Serialize};

use super::EasingFunction;
use super::traits::AnimationDriver;
use crate::range::guard_finite;

/// 动画规格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// 动画时长（毫秒）
    pub duration_millis: u32,
    /// 缓动函数
    #[serde(default)]
    pub easing: EasingFunction,
}

impl AnimationSpec {
    /// 创建动画规格
    pub const fn new(duration_millis: u32, easing: EasingFunction) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// 使用默认缓动（FastOutSlowIn）
    pub const fn tween(duration_millis: u32) -> Self {
        Self::new(duration_millis, EasingFunction::FastOutSlowIn)
    }

    /// 时长（秒）
    pub fn duration_secs(&self) -> f32 {
        self.duration_millis as f32 / 1000.0
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(1_500)
    }
}

/// 过渡状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// 正在播放
    Playing,
    /// 已完成，值停留在目标值
    #[default]
    Completed,
}

/// 缓动过渡
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    /// 已经过的时间（秒）
    elapsed: f32,
    state: TweenState,
}

impl Tween {
    /// 创建静止在 `value` 的过渡
    pub fn at_rest(value: f32, spec: AnimationSpec) -> Self {
        let value = guard_finite(value);
        Self {
            from: value,
            to: value,
            spec,
            elapsed: 0.0,
            state: TweenState::Completed,
        }
    }

    /// 创建从 `from` 到 `to` 的过渡
    ///
    /// 非有限的目标值按 0 处理；时长为 0 时直接跳到目标值。
    pub fn new(from: f32, to: f32, spec: AnimationSpec) -> Self {
        let mut tween = Self::at_rest(from, spec);
        tween.start(guard_finite(from), to);
        tween
    }

    fn start(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = guard_finite(to);
        self.elapsed = 0.0;
        self.state = if self.spec.duration_millis == 0 {
            TweenState::Completed
        } else {
            TweenState::Playing
        };
    }

    /// 重定向到新的目标值，从当前值重新计时
    pub fn retarget(&mut self, to: f32) {
        let from = self.value();
        self.start(from, to);
    }

    /// 立即跳到 `value` 并停止
    pub fn snap_to(&mut self, value: f32) {
        let value = guard_finite(value);
        self.from = value;
        self.to = value;
        self.elapsed = 0.0;
        self.state = TweenState::Completed;
    }

    /// 替换动画规格，下一次 `retarget` 生效
    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    /// 推进过渡
    ///
    /// # 返回
    /// - `true`: 过渡仍在进行中
    /// - `false`: 过渡已结束
    pub fn update(&mut self, dt: f32) -> bool {
        match self.state {
            TweenState::Playing => {
                self.elapsed += dt.max(0.0);
                if self.elapsed >= self.spec.duration_secs() {
                    self.state = TweenState::Completed;
                    false
                } else {
                    true
                }
            }
            TweenState::Completed => false,
        }
    }

    /// 已经过时间占总时长的比例（未缓动）
    pub fn fraction(&self) -> f32 {
        match self.state {
            TweenState::Completed => 1.0,
            TweenState::Playing => {
                let duration = self.spec.duration_secs();
                if duration <= 0.0 {
                    1.0
                } else {
                    (self.elapsed / duration).min(1.0)
                }
            }
        }
    }

    /// 距离结束还剩的时间（秒）
    pub fn remaining_secs(&self) -> f32 {
        match self.state {
            TweenState::Completed => 0.0,
            TweenState::Playing => (self.spec.duration_secs() - self.elapsed).max(0.0),
        }
    }

    /// 当前值
    pub fn value(&self) -> f32 {
        match self.state {
            TweenState::Completed => self.to,
            TweenState::Playing => {
                let progress = self.spec.easing.apply(self.fraction());
                self.from + (self.to - self.from) * progress
            }
        }
    }

    /// 起始值
    pub fn initial_value(&self) -> f32 {
        self.from
    }

    /// 目标值
    pub fn target(&self) -> f32 {
        self.to
    }

    /// 动画规格
    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// 当前状态
    pub fn state(&self) -> TweenState {
        self.state
    }

    /// 是否正在播放
    pub fn is_playing(&self) -> bool {
        self.state == TweenState::Playing
    }
}

impl AnimationDriver for Tween {
    fn tick(&mut self, dt: f32) -> bool {
        self.update(dt)
    }

    fn value(&self) -> f32 {
        Tween::value(self)
    }

    fn is_running(&self) -> bool {
        self.is_playing()
    }
}
