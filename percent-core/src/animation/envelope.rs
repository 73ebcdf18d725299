//! # Envelope 模块
//!
//! 振幅脉冲包络（"溅起"效果）：每次数值变化触发一次两段式脉冲。
//!
//! 1. 上升：从当前脉冲振幅到 `0.2 * 基础振幅`，半个脉冲时长，二次缓入
//! 2. 回落：从峰值回到 0，另外半个脉冲时长，二次缓出
//!
//! 脉冲与基础振幅相加，不相乘。

use super::traits::AnimationDriver;
use super::{AnimationSpec, EasingFunction, Tween};

/// 峰值占基础振幅的比例
pub const SPLASH_PEAK_RATIO: f32 = 0.2;

#[derive(Debug, Clone)]
enum Stage {
    Idle,
    Rise(Tween),
    Fall(Tween),
}

/// 两段式振幅脉冲
#[derive(Debug, Clone)]
pub struct SplashEnvelope {
    /// 每段时长（毫秒），为总时长的一半
    half_millis: u32,
    stage: Stage,
}

impl SplashEnvelope {
    /// 创建脉冲包络
    ///
    /// `pulse_millis` 为完整脉冲（上升 + 回落）的时长。
    pub fn new(pulse_millis: u32) -> Self {
        Self {
            half_millis: pulse_millis / 2,
            stage: Stage::Idle,
        }
    }

    fn rise_spec(&self) -> AnimationSpec {
        AnimationSpec::new(self.half_millis, EasingFunction::EaseInQuad)
    }

    fn fall_spec(&self) -> AnimationSpec {
        AnimationSpec::new(self.half_millis, EasingFunction::EaseOutQuad)
    }

    /// 触发一次脉冲
    ///
    /// 脉冲进行中再次触发时，从当前振幅重新开始上升。
    /// 脉冲时长为 0 时不产生脉冲。
    pub fn trigger(&mut self, base_amplitude: f32) {
        if self.half_millis == 0 {
            self.stage = Stage::Idle;
            return;
        }
        let peak = SPLASH_PEAK_RATIO * base_amplitude;
        let from = self.amplitude();
        self.stage = Stage::Rise(Tween::new(from, peak, self.rise_spec()));
    }

    /// 当前脉冲振幅（叠加在基础振幅之上）
    pub fn amplitude(&self) -> f32 {
        match &self.stage {
            Stage::Idle => 0.0,
            Stage::Rise(tween) | Stage::Fall(tween) => tween.value(),
        }
    }

    /// 渲染用振幅：`base + pulse`
    pub fn composite(&self, base_amplitude: f32) -> f32 {
        base_amplitude + self.amplitude()
    }

    /// 是否处于上升段
    pub fn is_rising(&self) -> bool {
        matches!(self.stage, Stage::Rise(_))
    }

    /// 推进脉冲
    ///
    /// 上升段结束时多出来的时间会计入回落段。
    pub fn update(&mut self, dt: f32) -> bool {
        match &mut self.stage {
            Stage::Idle => false,
            Stage::Rise(rise) => {
                let remaining = rise.remaining_secs();
                if rise.update(dt) {
                    return true;
                }
                let peak = rise.target();
                let mut fall = Tween::new(peak, 0.0, self.fall_spec());
                if fall.update((dt - remaining).max(0.0)) {
                    self.stage = Stage::Fall(fall);
                    true
                } else {
                    // 一帧跨过了整个回落段
                    self.stage = Stage::Idle;
                    false
                }
            }
            Stage::Fall(fall) => {
                if fall.update(dt) {
                    true
                } else {
                    self.stage = Stage::Idle;
                    false
                }
            }
        }
    }
}

impl AnimationDriver for SplashEnvelope {
    fn tick(&mut self, dt: f32) -> bool {
        self.update(dt)
    }

    fn value(&self) -> f32 {
        self.amplitude()
    }

    fn is_running(&self) -> bool {
        !matches!(self.stage, Stage::Idle)
    }
}
