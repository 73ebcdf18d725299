//! # Linear 组件
//!
//! 线性进度条：圆角轨道 + 左对齐的指示器，两侧可选标签。
//!
//! ```text
//! ┌ padding ┬ 左标签 ┬ 间距 ┬──────── 轨道 ────────┬ 间距 ┬ 右标签 ┬ padding ┐
//!           │   42   │      │█████████░░░░░░░░░░░░│      │  100   │
//! ```
//!
//! 轨道宽度由宿主布局决定（[`PercentWidget::on_layout`]），宽度变化时指示器重新过渡。
//! 指示器宽度与左标签数值各由一个过渡驱动。

use egui::{Align2, Rect, Vec2, pos2, vec2};
use percent_core::{
    AnimationDriver, Extent, PercentResult, PercentageRange, Tween, label_text, tick_all,
};
use tracing::{debug, warn};

use super::PercentWidget;
use crate::config::{IndicatorCorners, LinearConfig};
use crate::render::{Label, RenderFrame, geometry};

/// 线性进度条组件
#[derive(Debug, Clone)]
pub struct LinearWidget {
    config: LinearConfig,
    range: PercentageRange,
    /// 最近一次布局得到的轨道宽度
    track_width: f32,
    /// 指示器宽度（像素）
    indicator: Tween,
    /// 左标签数值
    value: Tween,
}

impl LinearWidget {
    /// 创建组件
    ///
    /// 布局之前轨道宽度为 0，指示器停在 0。
    pub fn new(config: LinearConfig, range: PercentageRange) -> PercentResult<Self> {
        config.validate()?;
        let spec = config.animation;
        Ok(Self {
            config,
            range,
            track_width: 0.0,
            indicator: Tween::at_rest(0.0, spec),
            value: Tween::at_rest(0.0, spec),
        })
    }

    /// 轨道区域
    pub fn track_rect(&self, row: Rect) -> Rect {
        let c = &self.config;
        let mut left = row.left() + c.horizontal_padding;
        let mut right = row.right() - c.horizontal_padding;
        if c.label_display.shows_left() {
            left += c.label_slot_width + c.start_text_end_padding;
        }
        if c.label_display.shows_right() {
            right -= c.end_text_start_padding + c.label_slot_width;
        }
        let height = c.background_height;
        Rect::from_min_size(
            pos2(left, row.center().y - height / 2.0),
            vec2((right - left).max(0.0), height),
        )
    }

    /// 当前轨道宽度
    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    /// 当前指示器宽度
    pub fn indicator_width(&self) -> f32 {
        self.indicator.value()
    }

    /// 目标指示器宽度
    pub fn target_width(&self) -> f32 {
        self.indicator.target()
    }

    fn retarget(&mut self) {
        let pixels = self.range.extent(Extent::Pixels {
            container_width: self.track_width,
        });
        // 轨道宽度为 0 时标签也停在 0
        let value = if self.track_width > 0.0 {
            self.range.current()
        } else {
            0.0
        };

        if pixels != self.indicator.target() {
            debug!(from = self.indicator.value(), to = pixels, "线性条重定向");
            self.indicator.retarget(pixels);
        }
        if value != self.value.target() {
            self.value.retarget(value);
        }
    }

    /// 标签预留宽度（两侧）
    fn label_extras(&self) -> f32 {
        let c = &self.config;
        let mut extras = 2.0 * c.horizontal_padding;
        if c.label_display.shows_left() {
            extras += c.label_slot_width + c.start_text_end_padding;
        }
        if c.label_display.shows_right() {
            extras += c.label_slot_width + c.end_text_start_padding;
        }
        extras
    }
}

impl PercentWidget for LinearWidget {
    fn kind(&self) -> &'static str {
        "linear"
    }

    fn range(&self) -> PercentageRange {
        self.range
    }

    fn set_value(&mut self, current: f32) -> PercentResult<()> {
        self.range = self.range.with_current(current).inspect_err(|e| {
            warn!(current, error = %e, "线性条拒绝无效数值");
        })?;
        self.retarget();
        Ok(())
    }

    fn on_layout(&mut self, row: Rect) {
        let width = self.track_rect(row).width();
        if width != self.track_width {
            debug!(from = self.track_width, to = width, "线性条轨道宽度变化");
            self.track_width = width;
            self.retarget();
        }
    }

    fn tick(&mut self, dt: f32) -> bool {
        tick_all(&mut [&mut self.indicator, &mut self.value], dt)
    }

    fn displayed_value(&self) -> f32 {
        AnimationDriver::value(&self.value)
    }

    fn preferred_size(&self) -> Vec2 {
        vec2(
            self.track_width + self.label_extras(),
            self.config.background_height,
        )
    }

    fn render(&self, row: Rect) -> RenderFrame {
        let c = &self.config;
        let track = self.track_rect(row);
        let mut frame = RenderFrame::new();

        frame.push(geometry::rounded_rect(
            track,
            c.corner_radius,
            c.corner_radius,
            c.background_color.into(),
        ));

        // 指示器被轨道裁剪
        let width = self.indicator.value().clamp(0.0, track.width());
        if width > 0.0 {
            let height = c.indicator_height.min(track.height());
            let rect = Rect::from_min_size(
                pos2(track.left(), track.center().y - height / 2.0),
                vec2(width, height),
            );
            let (left, right) = match c.indicator_corners {
                IndicatorCorners::Square => (0.0, 0.0),
                IndicatorCorners::Rounded if width >= track.width() - c.corner_radius => {
                    (c.corner_radius, c.corner_radius)
                }
                IndicatorCorners::Rounded => (c.corner_radius, 0.0),
            };
            frame.push(geometry::rounded_rect(
                rect,
                left,
                right,
                c.indicator_color.into(),
            ));
        }

        let y = track.center().y;
        if c.label_display.shows_left() {
            frame.label(Label {
                text: self.label(),
                position: pos2(track.left() - c.start_text_end_padding, y),
                anchor: Align2::RIGHT_CENTER,
                style: c.start_text_style(),
            });
        }
        if c.label_display.shows_right() {
            frame.label(Label {
                text: label_text(self.range.maximum()),
                position: pos2(track.right() + c.end_text_start_padding, y),
                anchor: Align2::LEFT_CENTER,
                style: c.end_text_style(),
            });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LabelDisplay, Rgba};
    use egui::Shape;

    fn row(width: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(width, 20.0))
    }

    fn widget(config: LinearConfig, current: f32, maximum: f32) -> LinearWidget {
        LinearWidget::new(config, PercentageRange::new(current, maximum).unwrap()).unwrap()
    }

    #[test]
    fn test_quarter_of_fifty_on_200px() {
        let mut bar = widget(LinearConfig::default(), 25.0, 50.0);
        assert_eq!(bar.target_width(), 0.0);

        bar.on_layout(row(200.0));
        assert_eq!(bar.track_width(), 200.0);
        assert_eq!(bar.target_width(), 100.0);

        bar.tick(2.0);
        assert_eq!(bar.indicator_width(), 100.0);
        assert_eq!(bar.label(), "25");
    }

    #[test]
    fn test_label_slots_shrink_track() {
        let config = LinearConfig {
            label_display: LabelDisplay::Both,
            horizontal_padding: 10.0,
            ..LinearConfig::default()
        };
        let mut bar = widget(config, 50.0, 100.0);
        bar.on_layout(row(300.0));
        // 300 - 2*10 - (32 + 5) * 2
        assert_eq!(bar.track_width(), 206.0);
        assert_eq!(bar.preferred_size(), vec2(300.0, 20.0));

        bar.tick(2.0);
        let frame = bar.render(row(300.0));
        assert_eq!(frame.labels.len(), 2);

        let left = &frame.labels[0];
        assert_eq!(left.text, "50");
        assert_eq!(left.anchor, Align2::RIGHT_CENTER);
        assert_eq!(left.position, pos2(42.0, 10.0));

        let right = &frame.labels[1];
        assert_eq!(right.text, "100");
        assert_eq!(right.anchor, Align2::LEFT_CENTER);
        assert_eq!(right.position, pos2(258.0, 10.0));
        assert_eq!(right.style.color, Rgba::BLACK);
    }

    #[test]
    fn test_width_change_retargets_from_current() {
        let mut bar = widget(LinearConfig::default(), 50.0, 100.0);
        bar.on_layout(row(200.0));
        bar.tick(0.5);
        let interrupted = bar.indicator_width();
        assert!(interrupted > 0.0 && interrupted < 100.0);

        bar.on_layout(row(400.0));
        assert_eq!(bar.indicator_width(), interrupted);
        assert_eq!(bar.target_width(), 200.0);

        // 宽度不变时不会重新计时
        bar.tick(0.2);
        let before = bar.indicator_width();
        bar.on_layout(row(400.0));
        assert_eq!(bar.indicator_width(), before);
    }

    #[test]
    fn test_invalid_value_keeps_state() {
        let mut bar = widget(LinearConfig::default(), 10.0, 20.0);
        bar.on_layout(row(100.0));
        assert!(bar.set_value(21.0).is_err());
        assert_eq!(bar.range().current(), 10.0);
        assert_eq!(bar.target_width(), 50.0);
    }

    #[test]
    fn test_render_shapes() {
        let config = LinearConfig {
            corner_radius: 6.0,
            indicator_corners: IndicatorCorners::Square,
            ..LinearConfig::default()
        };
        let mut bar = widget(config, 0.0, 100.0);
        bar.on_layout(row(100.0));
        // 数值为 0：只有轨道
        assert_eq!(bar.render(row(100.0)).shapes.len(), 1);

        bar.set_value(25.0).unwrap();
        bar.tick(2.0);
        let frame = bar.render(row(100.0));
        assert_eq!(frame.shapes.len(), 2);
        assert!(frame.labels.is_empty());
        let Shape::Rect(indicator) = &frame.shapes[1] else {
            panic!("expected rect");
        };
        assert_eq!(
            indicator.rect,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(25.0, 20.0))
        );
    }

    #[test]
    fn test_zero_width_track() {
        let mut bar = widget(LinearConfig::default(), 10.0, 20.0);
        bar.on_layout(row(0.0));
        bar.tick(2.0);
        assert_eq!(bar.indicator_width(), 0.0);
        assert_eq!(bar.label(), "0");
    }
}
