//! # Render 模块
//!
//! 把动画值转换为 egui 绘制图元。
//!
//! ## 渲染层顺序
//!
//! 1. 背景层（圆环、轨道、底色圆）
//! 2. 进度层（扇形、弧线、指示器、波浪）
//! 3. 标签层（由宿主完成文字排版）
//!
//! 渲染函数都是纯函数：只读取组件状态，不推进动画。

pub mod geometry;

use egui::{Align2, Pos2, Shape};

use crate::config::TextStyleConfig;

/// 待宿主排版的文字标签
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// 锚点位置
    pub position: Pos2,
    /// 文字相对锚点的对齐方式
    pub anchor: Align2,
    pub style: TextStyleConfig,
}

/// 一帧的绘制结果
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl RenderFrame {
    /// 创建空帧
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加图元
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// 添加标签
    pub fn label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// 是否没有任何内容
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.labels.is_empty()
    }

    /// 按文本查找标签
    pub fn find_label(&self, text: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.text == text)
    }
}
