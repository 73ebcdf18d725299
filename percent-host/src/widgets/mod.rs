//! # Widgets 模块
//!
//! 动画百分比指示器组件。
//!
//! 每个组件持有自己的动画状态，按帧推进：
//!
//! ```text
//! set_value ──► 映射 + 重定向过渡
//! on_layout ──► 更新容器尺寸（仅线性条）
//! tick(dt)  ──► 推进所有驱动器
//! render    ──► 纯函数，输出 RenderFrame
//! ```

mod arc;
mod gradient;
mod linear;
mod wave;

pub use arc::ArcWidget;
pub use gradient::{GradientWidget, gradient_color};
pub use linear::LinearWidget;
pub use wave::WaveWidget;

use egui::{Pos2, Rect, vec2};
use percent_core::{PercentResult, PercentageRange, label_text};

use crate::config::WidgetConfig;
use crate::render::RenderFrame;

/// 百分比指示器
pub trait PercentWidget {
    /// 种类名称
    fn kind(&self) -> &'static str;

    /// 当前（目标）数值范围
    fn range(&self) -> PercentageRange;

    /// 设置新的当前值
    ///
    /// 参数无效时返回错误，组件状态保持不变。
    fn set_value(&mut self, current: f32) -> PercentResult<()>;

    /// 宿主布局完成后通知组件可用区域
    fn on_layout(&mut self, _rect: Rect) {}

    /// 推进动画
    ///
    /// # 返回
    /// - `true`: 仍有动画在进行
    /// - `false`: 所有动画已停止
    fn tick(&mut self, dt: f32) -> bool;

    /// 标签显示的数值（动画中的值，换算回原始数值单位）
    fn displayed_value(&self) -> f32;

    /// 标签后缀
    fn label_suffix(&self) -> &str {
        ""
    }

    /// 标签文本
    fn label(&self) -> String {
        let text = label_text(self.displayed_value());
        format!("{text}{}", self.label_suffix())
    }

    /// 组件占用的尺寸
    fn preferred_size(&self) -> egui::Vec2;

    /// 在 `rect` 内绘制当前帧
    fn render(&self, rect: Rect) -> RenderFrame;
}

/// 从配置创建组件
pub fn build_widget(
    config: &WidgetConfig,
    range: PercentageRange,
) -> PercentResult<Box<dyn PercentWidget>> {
    Ok(match config {
        WidgetConfig::Arc(c) => Box::new(ArcWidget::new(c.clone(), range)?),
        WidgetConfig::Gradient(c) => Box::new(GradientWidget::new(c.clone(), range)?),
        WidgetConfig::Linear(c) => Box::new(LinearWidget::new(c.clone(), range)?),
        WidgetConfig::Wave(c) => Box::new(WaveWidget::new(c.clone(), range)?),
    })
}

/// 以 `origin` 为左上角、边长 `size` 的正方形画布
pub(crate) fn square_canvas(origin: Pos2, size: f32) -> Rect {
    Rect::from_min_size(origin, vec2(size, size))
}
