//! # Percent Host
//!
//! 动画百分比指示器的宿主层：组件、egui 图元渲染、配置与 headless 回放。
//!
//! ## 模块结构
//!
//! - [`config`]：组件配置与回放配置（JSON）
//! - [`widgets`]：圆弧、渐变圆、线性条、波浪圆
//! - [`render`]：把动画值转换为 `egui::Shape`
//! - [`replay`]：按固定帧率回放配置

pub mod config;
pub mod render;
pub mod replay;
pub mod widgets;

pub use config::{
    ArcConfig, ArcStyle, ConfigError, DemoConfig, DemoWidget, GradientConfig, IndicatorCorners,
    LabelDisplay, LinearConfig, Rgba, TextStyleConfig, ValueStep, WaveConfig, WidgetConfig,
};
pub use render::{Label, RenderFrame};
pub use replay::{FrameReport, Replay};
pub use widgets::{
    ArcWidget, GradientWidget, LinearWidget, PercentWidget, WaveWidget, build_widget,
    gradient_color,
};
