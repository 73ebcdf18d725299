//! # Gradient 组件
//!
//! 渐变填充圆：纵向线性渐变从顶部铺到 `height * 进度`，超出部分取最后一个颜色，
//! 整体旋转 180° 后渐变从底部升起。

use egui::{Align2, Rect, Shape, Vec2, vec2};
use percent_core::{Extent, PercentResult, PercentageRange, Tween, degrees_to_value};
use tracing::{debug, warn};

use super::{PercentWidget, square_canvas};
use crate::config::{GradientConfig, Rgba};
use crate::render::{Label, RenderFrame, geometry};

/// 渐变在位置 `y` 处的颜色
///
/// 颜色在 `[0, extent]` 内均匀分布；超出范围时截断到两端颜色，
/// `extent` 为 0 时整个区域取最后一个颜色。
pub fn gradient_color(colors: &[Rgba], extent: f32, y: f32) -> Rgba {
    let Some(&last) = colors.last() else {
        return Rgba([0, 0, 0, 0]);
    };
    if colors.len() == 1 || extent <= 0.0 || y >= extent {
        return last;
    }
    let t = (y / extent).clamp(0.0, 1.0);
    let scaled = t * (colors.len() - 1) as f32;
    let index = (scaled.floor() as usize).min(colors.len() - 2);
    colors[index].lerp(colors[index + 1], scaled - index as f32)
}

/// 渐变填充圆组件
#[derive(Debug, Clone)]
pub struct GradientWidget {
    config: GradientConfig,
    range: PercentageRange,
    /// 进度（度）
    progress: Tween,
}

impl GradientWidget {
    pub fn new(config: GradientConfig, range: PercentageRange) -> PercentResult<Self> {
        config.validate()?;
        let mut progress = Tween::at_rest(0.0, config.animation);
        progress.retarget(range.extent(Extent::Degrees));
        debug!(
            colors = config.colors.len(),
            target = progress.target(),
            "渐变组件创建"
        );
        Ok(Self {
            config,
            range,
            progress,
        })
    }

    /// 当前渐变延伸长度（像素，从底部量起）
    pub fn gradient_extent(&self) -> f32 {
        self.config.size * (self.progress.value() / percent_core::FULL_CIRCLE_DEGREES)
    }
}

impl PercentWidget for GradientWidget {
    fn kind(&self) -> &'static str {
        "gradient"
    }

    fn range(&self) -> PercentageRange {
        self.range
    }

    fn set_value(&mut self, current: f32) -> PercentResult<()> {
        let range = self.range.with_current(current).inspect_err(|e| {
            warn!(current, error = %e, "渐变组件拒绝无效数值");
        })?;
        self.range = range;

        let target = range.extent(Extent::Degrees);
        if target != self.progress.target() {
            debug!(from = self.progress.value(), to = target, "渐变重定向");
            self.progress.retarget(target);
        }
        Ok(())
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.progress.update(dt)
    }

    fn displayed_value(&self) -> f32 {
        degrees_to_value(self.progress.value(), self.range.maximum())
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
        let extent = self.gradient_extent();
        let colors = &self.config.colors;

        // 先自上而下铺渐变，再整体翻转
        let mut mesh =
            geometry::disc_with_vertical_colors(center, self.config.size / 2.0, |y| {
                gradient_color(colors, extent, y).into()
            });
        geometry::rotate_half_turn(&mut mesh, center);

        let mut frame = RenderFrame::new();
        frame.push(Shape::mesh(mesh));
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
    use egui::{Color32, pos2};

    const STOPS: [Rgba; 3] = [Rgba::RED, Rgba::GREEN, Rgba::BLUE];

    #[test]
    fn test_even_stops() {
        assert_eq!(gradient_color(&STOPS, 100.0, 0.0), Rgba::RED);
        assert_eq!(gradient_color(&STOPS, 100.0, 50.0), Rgba::GREEN);
        let olive = Rgba([128, 128, 0, 255]);
        assert_eq!(gradient_color(&STOPS, 100.0, 25.0), olive);
        assert_eq!(gradient_color(&STOPS, 100.0, 100.0), Rgba::BLUE);
    }

    #[test]
    fn test_clamps_past_extent() {
        assert_eq!(gradient_color(&STOPS, 40.0, 90.0), Rgba::BLUE);
        assert_eq!(gradient_color(&STOPS, 40.0, -5.0), Rgba::RED);
        // 延伸长度为 0：全部是最后一个颜色
        assert_eq!(gradient_color(&STOPS, 0.0, 0.0), Rgba::BLUE);
        assert_eq!(gradient_color(&[Rgba::WHITE], 50.0, 10.0), Rgba::WHITE);
    }

    #[test]
    fn test_extent_follows_progress() {
        let range = PercentageRange::new(50.0, 100.0).unwrap();
        let mut widget = GradientWidget::new(GradientConfig::default(), range).unwrap();
        assert_eq!(widget.gradient_extent(), 0.0);
        widget.tick(2.0);
        assert!((widget.gradient_extent() - 50.0).abs() < 1e-3);
        assert_eq!(widget.label(), "50");
    }

    #[test]
    fn test_rises_from_bottom() {
        let config = GradientConfig {
            colors: vec![Rgba::GREEN, Rgba::WHITE],
            ..GradientConfig::default()
        };
        let mut widget =
            GradientWidget::new(config, PercentageRange::new(50.0, 100.0).unwrap()).unwrap();
        widget.tick(2.0);

        let frame = widget.render(Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)));
        let Shape::Mesh(mesh) = &frame.shapes[0] else {
            panic!("expected mesh");
        };
        let bottom = mesh
            .vertices
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .unwrap();
        let top = mesh
            .vertices
            .iter()
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .unwrap();
        assert_eq!(bottom.color, Color32::from(Rgba::GREEN));
        assert_eq!(top.color, Color32::from(Rgba::WHITE));
    }

    #[test]
    fn test_empty_colors_rejected() {
        let config = GradientConfig {
            colors: Vec::new(),
            ..GradientConfig::default()
        };
        let result = GradientWidget::new(config, PercentageRange::empty());
        assert!(result.is_err());
    }
}
