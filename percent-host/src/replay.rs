//! # Replay 模块
//!
//! headless 回放：按固定帧率推进配置中的所有组件，执行数值时间表，
//! 每帧输出一条摘要。

use egui::{Pos2, Rect, pos2, vec2};
use percent_core::PercentageRange;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ConfigError, DemoConfig, ValueStep, WidgetConfig};
use crate::widgets::{PercentWidget, build_widget};

/// 组件之间的纵向间距
const ROW_GAP: f32 = 10.0;

/// 单个组件一帧的摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u32,
    pub time_millis: u32,
    pub widget: String,
    pub kind: &'static str,
    /// 标签文本
    pub label: String,
    /// 标签数值（动画中）
    pub value: f32,
    /// 图元数量
    pub shapes: usize,
    /// 是否仍在动画
    pub animating: bool,
}

struct Slot {
    name: String,
    rect: Rect,
    widget: Box<dyn PercentWidget>,
    schedule: Vec<ValueStep>,
    /// 下一个待执行的时间表下标
    next_step: usize,
    animating: bool,
}

/// 回放器
pub struct Replay {
    slots: Vec<Slot>,
    frame: u32,
    frame_secs: f32,
    frame_count: u32,
}

impl Replay {
    /// 从配置创建回放器
    ///
    /// 组件从 0 开始，时间表中的数值按时间依次生效。
    pub fn new(config: &DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut origin = pos2(0.0, 0.0);
        let mut slots = Vec::with_capacity(config.widgets.len());
        for demo in &config.widgets {
            let invalid = |source| ConfigError::Invalid {
                widget: demo.name.clone(),
                source,
            };
            let range = PercentageRange::new(0.0, demo.maximum).map_err(invalid)?;
            let widget = build_widget(&demo.widget, range).map_err(invalid)?;

            let rect = slot_rect(origin, &demo.widget, demo.row_width);
            origin.y = rect.bottom() + ROW_GAP;

            let mut schedule = demo.schedule.clone();
            schedule.sort_by_key(|step| step.at_millis);

            debug!(name = %demo.name, kind = widget.kind(), rect = ?rect, "回放组件就绪");
            slots.push(Slot {
                name: demo.name.clone(),
                rect,
                widget,
                schedule,
                next_step: 0,
                animating: true,
            });
        }

        Ok(Self {
            slots,
            frame: 0,
            frame_secs: config.frame_secs(),
            frame_count: config.frame_count(),
        })
    }

    /// 总帧数
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// 是否已播放完毕
    pub fn is_finished(&self) -> bool {
        self.frame > self.frame_count
    }

    /// 当前时间（毫秒）
    pub fn time_millis(&self) -> u32 {
        (self.frame as f32 * self.frame_secs * 1000.0).round() as u32
    }

    /// 推进一帧并返回每个组件的摘要
    ///
    /// 第 0 帧不推进动画，只执行 0 时刻的时间表。
    pub fn step(&mut self) -> Vec<FrameReport> {
        let time_millis = self.time_millis();
        let dt = if self.frame == 0 {
            0.0
        } else {
            self.frame_secs
        };

        let mut reports = Vec::with_capacity(self.slots.len());
        for slot in &mut self.slots {
            while let Some(step) = slot.schedule.get(slot.next_step) {
                if step.at_millis > time_millis {
                    break;
                }
                if let Err(e) = slot.widget.set_value(step.value) {
                    warn!(name = %slot.name, value = step.value, error = %e, "时间表数值被拒绝");
                }
                slot.animating = true;
                slot.next_step += 1;
            }

            slot.widget.on_layout(slot.rect);
            if dt > 0.0 {
                slot.animating = slot.widget.tick(dt);
            }

            let frame = slot.widget.render(slot.rect);
            reports.push(FrameReport {
                frame: self.frame,
                time_millis,
                widget: slot.name.clone(),
                kind: slot.widget.kind(),
                label: slot.widget.label(),
                value: slot.widget.displayed_value(),
                shapes: frame.shapes.len(),
                animating: slot.animating,
            });
        }

        self.frame += 1;
        reports
    }
}

/// 组件在回放画布上的区域
fn slot_rect(origin: Pos2, widget: &WidgetConfig, row_width: f32) -> Rect {
    let size = match widget {
        WidgetConfig::Arc(c) => vec2(c.size, c.size),
        WidgetConfig::Gradient(c) => vec2(c.size, c.size),
        WidgetConfig::Wave(c) => vec2(c.size, c.size),
        WidgetConfig::Linear(c) => vec2(row_width, c.background_height),
    };
    Rect::from_min_size(origin, size)
}
