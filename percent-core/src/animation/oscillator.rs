//! # Oscillator 模块
//!
//! 连续相位振荡器：激活期间相位在 `period` 内从 0 线性增长到 2π，
//! 然后回绕到 0 无限重复；停用时相位归零并停止。

use std::f32::consts::TAU;

use super::traits::AnimationDriver;

/// 连续相位振荡器
#[derive(Debug, Clone)]
pub struct PhaseOscillator {
    /// 一个周期的时长（秒）
    period: f32,
    /// 当前周期内已经过的时间（秒），始终在 [0, period) 内
    elapsed: f32,
    active: bool,
}

impl PhaseOscillator {
    /// 创建振荡器（初始为停用状态）
    ///
    /// `period_millis` 为 0 时振荡器永远不会推进。
    pub fn new(period_millis: u32) -> Self {
        Self {
            period: period_millis as f32 / 1000.0,
            elapsed: 0.0,
            active: false,
        }
    }

    /// 切换激活状态
    ///
    /// 从停用变为激活时相位从 0 开始；停用时相位立即归零。
    /// 返回状态是否发生了变化。
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        self.elapsed = 0.0;
        true
    }

    /// 是否激活
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 当前相位（弧度，[0, 2π)）
    pub fn phase(&self) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        TAU * (self.elapsed / self.period)
    }

    /// 推进振荡器
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.active || self.period <= 0.0 {
            return false;
        }
        // 非有限的帧间隔不推进相位
        if dt.is_finite() {
            self.elapsed = (self.elapsed + dt.max(0.0)).rem_euclid(self.period);
        }
        true
    }
}

impl AnimationDriver for PhaseOscillator {
    fn tick(&mut self, dt: f32) -> bool {
        self.update(dt)
    }

    fn value(&self) -> f32 {
        self.phase()
    }

    fn is_running(&self) -> bool {
        self.active
    }
}
