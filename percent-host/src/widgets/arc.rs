//! # Arc 组件
//!
//! 圆弧进度：背景圆环 + 从正上方顺时针扫过的实心扇形或描边弧线。

use egui::{Align2, Rect, Stroke, Vec2, vec2};
use percent_core::{AnimationSpec, Extent, PercentResult, PercentageRange, Tween, degrees_to_value};
use tracing::{debug, warn};

use super::{PercentWidget, square_canvas};
use crate::config::{ArcConfig, ArcStyle};
use crate::render::{Label, RenderFrame, geometry};

/// 圆弧进度组件
#[derive(Debug, Clone)]
pub struct ArcWidget {
    config: ArcConfig,
    range: PercentageRange,
    /// 扫过角度（度）
    sweep: Tween,
}

impl ArcWidget {
    /// 创建组件，扫过角度从 0 开始动画到目标
    pub fn new(config: ArcConfig, range: PercentageRange) -> PercentResult<Self> {
        config.validate()?;
        let mut sweep = Tween::at_rest(0.0, config.animation);
        sweep.retarget(range.extent(Extent::Degrees));
        debug!(style = ?config.style, target = sweep.target(), "圆弧组件创建");
        Ok(Self {
            config,
            range,
            sweep,
        })
    }

    /// 当前扫过角度
    pub fn sweep_degrees(&self) -> f32 {
        self.sweep.value()
    }

    /// 目标扫过角度
    pub fn target_degrees(&self) -> f32 {
        self.sweep.target()
    }

    /// 替换动画规格，下一次数值变化生效
    pub fn set_animation(&mut self, spec: AnimationSpec) {
        self.sweep.set_spec(spec);
    }

    pub fn style(&self) -> ArcStyle {
        self.config.style
    }
}

impl PercentWidget for ArcWidget {
    fn kind(&self) -> &'static str {
        "arc"
    }

    fn range(&self) -> PercentageRange {
        self.range
    }

    fn set_value(&mut self, current: f32) -> PercentResult<()> {
        let range = self.range.with_current(current).inspect_err(|e| {
            warn!(current, error = %e, "圆弧组件拒绝无效数值");
        })?;
        self.range = range;

        let target = range.extent(Extent::Degrees);
        if target != self.sweep.target() {
            debug!(from = self.sweep.value(), to = target, "圆弧重定向");
            self.sweep.retarget(target);
        }
        Ok(())
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.sweep.update(dt)
    }

    fn displayed_value(&self) -> f32 {
        degrees_to_value(self.sweep.value(), self.range.maximum())
    }

    fn label_suffix(&self) -> &str {
        &self.config.label_suffix
    }

    fn preferred_size(&self) -> Vec2 {
        vec2(self.config.size, self.config.size)
    }

    fn render(&self, rect: Rect) -> RenderFrame {
        let canvas = square_canvas(rect.min, self.config.size);
        let center = canvas.center();
        let radius = self.config.size / 2.0;
        let sweep = self.sweep.value();

        let mut frame = RenderFrame::new();
        frame.push(geometry::ring(
            center,
            radius,
            self.config.background_stroke_width,
            self.config.background_color.into(),
        ));

        let progress = match self.config.style {
            ArcStyle::FilledSector => {
                geometry::sector(center, radius, sweep, self.config.color.into())
            }
            ArcStyle::StrokedRing => geometry::stroked_arc(
                center,
                radius,
                sweep,
                Stroke::new(self.config.stroke_width, self.config.color),
            ),
        };
        if let Some(shape) = progress {
            frame.push(shape);
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
