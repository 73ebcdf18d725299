//! # Style 模块
//!
//! 颜色与文字样式配置。颜色在 JSON 中写成 `[r, g, b, a]`。

use egui::Color32;
use serde::{Deserialize, Serialize};

/// RGBA 颜色（未预乘）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const LIGHT_GRAY: Self = Self([204, 204, 204, 255]);
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);

    /// 从 RGB 创建不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// 替换透明度（0.0 - 1.0）
    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8])
    }

    /// 按通道线性插值
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let a = self.0[i] as f32;
            let b = other.0[i] as f32;
            *channel = (a + (b - a) * t).round() as u8;
        }
        Self(out)
    }
}

impl From<Rgba> for Color32 {
    fn from(color: Rgba) -> Self {
        let [r, g, b, a] = color.0;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// 文字样式
///
/// 文字排版由宿主完成，这里只携带样式参数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyleConfig {
    #[serde(default = "default_text_color")]
    pub color: Rgba,

    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for TextStyleConfig {
    fn default() -> Self {
        Self {
            color: default_text_color(),
            font_size: default_font_size(),
        }
    }
}

fn default_text_color() -> Rgba {
    Rgba::BLACK
}

fn default_font_size() -> f32 {
    15.0
}
