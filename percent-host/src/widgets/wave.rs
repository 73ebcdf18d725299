//! # Wave 组件
//!
//! 波浪填充圆。三个独立驱动器：
//!
//! - 数值过渡：每次数值变化先归零再过渡到新值
//! - 相位振荡器：显示值低于最大值时持续波动，到达最大值后停止并把波面压平
//! - 溅起脉冲：每次数值变化触发，叠加在基础振幅上
//!
//! 绘制时先画波浪色的实心圆，再把波面以上的区域裁剪到圆内，用底色覆盖。

use egui::{Align2, Rect, Shape, Vec2, vec2};
use percent_core::{
    Extent, PercentResult, PercentageRange, PhaseOscillator, SplashEnvelope, Tween, WaveParams,
    build_wave_path, map_to_extent, tick_all,
};
use tracing::{debug, warn};

use super::{PercentWidget, square_canvas};
use crate::config::WaveConfig;
use crate::render::{Label, RenderFrame, geometry};

/// 波浪填充圆组件
#[derive(Debug, Clone)]
pub struct WaveWidget {
    config: WaveConfig,
    range: PercentageRange,
    /// 显示值（原始数值单位）
    value: Tween,
    oscillator: PhaseOscillator,
    splash: SplashEnvelope,
    /// 基础振幅，满值时为 0
    base_amplitude: f32,
}

impl WaveWidget {
    pub fn new(config: WaveConfig, range: PercentageRange) -> PercentResult<Self> {
        config.validate()?;
        let mut widget = Self {
            value: Tween::at_rest(0.0, config.animation),
            oscillator: PhaseOscillator::new(config.continuous_millis),
            splash: SplashEnvelope::new(config.splash_millis),
            base_amplitude: config.wave_amplitude,
            config,
            range,
        };
        widget.start_fill();
        Ok(widget)
    }

    /// 从 0 开始填充到当前值，并触发一次溅起
    fn start_fill(&mut self) {
        self.value.snap_to(0.0);
        self.value.retarget(self.range.current());
        self.sync_oscillator();
        self.splash.trigger(self.base_amplitude);
        debug!(
            target = self.range.current(),
            amplitude = self.base_amplitude,
            "波浪重新填充"
        );
    }

    /// 显示值低于最大值时振荡器保持激活
    fn sync_oscillator(&mut self) {
        let active = self.value.value() < self.range.maximum();
        let changed = self.oscillator.set_active(active);
        self.base_amplitude = if active {
            self.config.wave_amplitude
        } else {
            0.0
        };
        if changed {
            debug!(
                active,
                amplitude = self.base_amplitude,
                "波浪振荡器状态变化"
            );
        }
    }

    /// 波面基线比例（从顶部量起，0 = 满）
    pub fn baseline_fraction(&self) -> f32 {
        map_to_extent(
            self.value.value(),
            self.range.maximum(),
            Extent::WaveBaseline,
        )
    }

    /// 当前渲染振幅（基础振幅 + 脉冲）
    pub fn amplitude(&self) -> f32 {
        self.splash.composite(self.base_amplitude)
    }

    /// 当前基础振幅
    pub fn base_amplitude(&self) -> f32 {
        self.base_amplitude
    }

    /// 当前脉冲振幅
    pub fn splash_amplitude(&self) -> f32 {
        self.splash.amplitude()
    }

    pub fn phase(&self) -> f32 {
        self.oscillator.phase()
    }

    pub fn is_oscillating(&self) -> bool {
        self.oscillator.is_active()
    }

    /// 当前帧的波浪参数
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            frequency: self.config.wave_frequency,
            amplitude: self.amplitude(),
            phase: self.phase(),
            sample_count: self.config.sample_count,
        }
    }
}

impl PercentWidget for WaveWidget {
    fn kind(&self) -> &'static str {
        "wave"
    }

    fn range(&self) -> PercentageRange {
        self.range
    }

    fn set_value(&mut self, current: f32) -> PercentResult<()> {
        let range = self.range.with_current(current).inspect_err(|e| {
            warn!(current, error = %e, "波浪组件拒绝无效数值");
        })?;
        if range.current() == self.range.current() {
            return Ok(());
        }
        self.range = range;
        self.start_fill();
        Ok(())
    }

    fn tick(&mut self, dt: f32) -> bool {
        let running = tick_all(
            &mut [&mut self.value, &mut self.oscillator, &mut self.splash],
            dt,
        );
        self.sync_oscillator();
        running || self.oscillator.is_active()
    }

    fn displayed_value(&self) -> f32 {
        self.value.value()
    }

    fn label_suffix(&self) -> &str {
        &self.config.label_suffix
    }

    fn preferred_size(&self) -> Vec2 {
        vec2(self.config.size, self.config.size)
    }

    fn render(&self, rect: Rect) -> RenderFrame {
        let size = self.config.size;
        let canvas = square_canvas(rect.min, size);
        let center = canvas.center();
        let radius = size / 2.0;

        let mut frame = RenderFrame::new();
        frame.push(Shape::circle_filled(center, radius, self.config.wave_color));

        match build_wave_path(self.baseline_fraction(), size, size, self.wave_params()) {
            Ok(path) => {
                let origin = canvas.min;
                let empty = geometry::disc_region_above(
                    center,
                    radius,
                    self.config.background_color.into(),
                    |x| origin.y + path.surface_y(x - origin.x),
                );
                if !empty.vertices.is_empty() {
                    frame.push(Shape::mesh(empty));
                }
            }
            Err(e) => warn!(error = %e, "波浪路径构建失败，跳过波面"),
        }

        frame.label(Label {
            text: self.label(),
            position: center,
            anchor: Align2::CENTER_CENTER,
            style: self.config.center_text.clone(),
        });
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use percent_core::{AnimationSpec, EasingFunction, SPLASH_PEAK_RATIO};

    fn widget(current: f32, maximum: f32) -> WaveWidget {
        WaveWidget::new(
            WaveConfig::default(),
            PercentageRange::new(current, maximum).unwrap(),
        )
        .unwrap()
    }

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
    }

    #[test]
    fn test_initial_state() {
        let wave = widget(70.0, 100.0);
        assert_eq!(wave.displayed_value(), 0.0);
        assert_eq!(wave.baseline_fraction(), 1.0);
        assert!(wave.is_oscillating());
        assert_eq!(wave.phase(), 0.0);
        assert_eq!(wave.amplitude(), 10.0);
    }

    #[test]
    fn test_splash_peaks_at_half_pulse() {
        let mut wave = widget(30.0, 100.0);
        wave.tick(2.0);
        assert_eq!(wave.splash_amplitude(), 0.0);

        wave.set_value(70.0).unwrap();
        assert_eq!(wave.splash_amplitude(), 0.0);

        wave.tick(0.25);
        let peak = SPLASH_PEAK_RATIO * 10.0;
        assert!((wave.splash_amplitude() - peak).abs() < 1e-4);
        assert!((wave.amplitude() - (10.0 + peak)).abs() < 1e-4);

        wave.tick(0.25);
        assert!(wave.splash_amplitude().abs() < 1e-4);
    }

    #[test]
    fn test_value_change_restarts_from_zero() {
        let mut wave = widget(30.0, 100.0);
        wave.tick(2.0);
        assert_eq!(wave.displayed_value(), 30.0);

        wave.set_value(70.0).unwrap();
        assert_eq!(wave.displayed_value(), 0.0);
        wave.tick(2.0);
        assert_eq!(wave.displayed_value(), 70.0);
        assert!((wave.baseline_fraction() - 0.3).abs() < 1e-6);
        assert_eq!(wave.label(), "70");
    }

    #[test]
    fn test_full_flattens_and_stops() {
        let mut wave = widget(100.0, 100.0);
        wave.tick(0.5);
        assert!(wave.is_oscillating());
        wave.tick(2.0);
        assert!(!wave.is_oscillating());
        assert_eq!(wave.phase(), 0.0);
        assert_eq!(wave.base_amplitude(), 0.0);
        assert_eq!(wave.baseline_fraction(), 0.0);

        // 离开满值后恢复
        wave.set_value(40.0).unwrap();
        assert!(wave.is_oscillating());
        assert_eq!(wave.base_amplitude(), 10.0);
    }

    #[test]
    fn test_phase_wraps() {
        let mut wave = widget(50.0, 100.0);
        for _ in 0..10 {
            assert!(wave.tick(0.25));
            assert!((0.0..std::f32::consts::TAU).contains(&wave.phase()));
        }
    }

    #[test]
    fn test_invalid_value_keeps_state() {
        let mut wave = widget(30.0, 100.0);
        wave.tick(0.5);
        let before = wave.displayed_value();
        assert!(wave.set_value(101.0).is_err());
        assert_eq!(wave.displayed_value(), before);
        assert_eq!(wave.range().current(), 30.0);
    }

    #[test]
    fn test_render_layers() {
        let mut wave = widget(50.0, 100.0);
        wave.tick(2.0);
        let frame = wave.render(canvas());
        assert_eq!(frame.shapes.len(), 2);
        assert!(matches!(frame.shapes[0], Shape::Circle(_)));
        let Shape::Mesh(empty) = &frame.shapes[1] else {
            panic!("expected mesh");
        };
        // 空区域在圆内
        for v in &empty.vertices {
            assert!((v.pos - pos2(50.0, 50.0)).length() <= 50.0 + 1e-3);
        }
        assert_eq!(frame.labels[0].text, "50");
    }

    #[test]
    fn test_full_has_no_empty_region() {
        let mut wave = widget(100.0, 100.0);
        wave.tick(2.0);
        wave.tick(1.0);
        let frame = wave.render(canvas());
        assert_eq!(frame.shapes.len(), 1);
    }

    #[test]
    fn test_zero_maximum_is_empty() {
        let wave = widget(0.0, 0.0);
        assert!(!wave.is_oscillating());
        assert_eq!(wave.baseline_fraction(), 1.0);
        assert_eq!(wave.base_amplitude(), 0.0);
        assert_eq!(wave.amplitude(), 0.0);
    }

    #[test]
    fn test_built_full_starts_flat() {
        let config = WaveConfig {
            animation: AnimationSpec::new(0, EasingFunction::Linear),
            ..WaveConfig::default()
        };
        let range = PercentageRange::new(100.0, 100.0).unwrap();
        let wave = WaveWidget::new(config, range).unwrap();
        assert_eq!(wave.displayed_value(), 100.0);
        assert!(!wave.is_oscillating());
        assert_eq!(wave.base_amplitude(), 0.0);
        assert_eq!(wave.amplitude(), 0.0);

        // 只有实心圆
        let frame = wave.render(canvas());
        assert_eq!(frame.shapes.len(), 1);
    }
}
