//! # Widget Config 模块
//!
//! 各类指示器的外观与动画参数。默认值与原组件库保持一致。

use percent_core::{
    AnimationSpec, DEFAULT_SAMPLE_COUNT, PercentResult, ValidationError, check_size, check_stroke,
};
use serde::{Deserialize, Serialize};

use super::style::{Rgba, TextStyleConfig};

/// 圆弧绘制方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcStyle {
    /// 实心扇形（从圆心填充）
    FilledSector,
    /// 描边圆环（开放弧线）
    #[default]
    StrokedRing,
}

/// 线性条两侧标签的显示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelDisplay {
    /// 只显示左侧（当前值）
    LeftOnly,
    /// 只显示右侧（最大值）
    RightOnly,
    /// 两侧都显示
    Both,
    /// 都不显示
    #[default]
    None,
}

impl LabelDisplay {
    /// 是否显示左侧标签
    pub fn shows_left(self) -> bool {
        matches!(self, Self::LeftOnly | Self::Both)
    }

    /// 是否显示右侧标签
    pub fn shows_right(self) -> bool {
        matches!(self, Self::RightOnly | Self::Both)
    }
}

/// 线性条指示器的角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCorners {
    /// 跟随轨道圆角
    #[default]
    Rounded,
    /// 直角
    Square,
}

/// 圆弧 / 实心圆指示器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcConfig {
    #[serde(default)]
    pub style: ArcStyle,

    /// 画布边长
    #[serde(default = "default_size")]
    pub size: f32,

    #[serde(default)]
    pub animation: AnimationSpec,

    /// 背景圆环颜色
    #[serde(default = "default_arc_background")]
    pub background_color: Rgba,

    /// 进度颜色
    #[serde(default = "default_arc_color")]
    pub color: Rgba,

    /// 背景圆环描边宽度
    #[serde(default = "default_stroke_width")]
    pub background_stroke_width: f32,

    /// 进度弧描边宽度（仅 `StrokedRing`）
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    #[serde(default)]
    pub center_text: TextStyleConfig,

    /// 标签后缀，例如 `"%"`
    #[serde(default)]
    pub label_suffix: String,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            style: ArcStyle::default(),
            size: default_size(),
            animation: AnimationSpec::default(),
            background_color: default_arc_background(),
            color: default_arc_color(),
            background_stroke_width: default_stroke_width(),
            stroke_width: default_stroke_width(),
            center_text: TextStyleConfig::default(),
            label_suffix: String::new(),
        }
    }
}

impl ArcConfig {
    /// 校验配置
    pub fn validate(&self) -> PercentResult<()> {
        check_size("size", self.size)?;
        check_stroke("background_stroke_width", self.background_stroke_width)?;
        if self.style == ArcStyle::StrokedRing {
            check_stroke("stroke_width", self.stroke_width)?;
        }
        Ok(())
    }
}

/// 渐变填充圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    #[serde(default = "default_size")]
    pub size: f32,

    #[serde(default)]
    pub animation: AnimationSpec,

    /// 渐变颜色（从底部往上，均匀分布）
    #[serde(default = "default_gradient_colors")]
    pub colors: Vec<Rgba>,

    #[serde(default)]
    pub center_text: TextStyleConfig,

    #[serde(default)]
    pub label_suffix: String,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            animation: AnimationSpec::default(),
            colors: default_gradient_colors(),
            center_text: TextStyleConfig::default(),
            label_suffix: String::new(),
        }
    }
}

impl GradientConfig {
    /// 校验配置
    pub fn validate(&self) -> PercentResult<()> {
        check_size("size", self.size)?;
        if self.colors.is_empty() {
            return Err(ValidationError::EmptyGradient);
        }
        Ok(())
    }
}

/// 线性进度条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConfig {
    #[serde(default)]
    pub animation: AnimationSpec,

    /// 轨道高度
    #[serde(default = "default_bar_height")]
    pub background_height: f32,

    /// 指示器高度
    #[serde(default = "default_bar_height")]
    pub indicator_height: f32,

    #[serde(default = "default_arc_background")]
    pub background_color: Rgba,

    #[serde(default = "default_arc_color")]
    pub indicator_color: Rgba,

    /// 左侧标签与轨道的间距
    #[serde(default = "default_text_padding")]
    pub start_text_end_padding: f32,

    /// 右侧标签与轨道的间距
    #[serde(default = "default_text_padding")]
    pub end_text_start_padding: f32,

    /// 轨道圆角半径
    #[serde(default)]
    pub corner_radius: f32,

    /// 整行左右内边距
    #[serde(default)]
    pub horizontal_padding: f32,

    /// 为每个标签预留的宽度（文字测量由宿主完成）
    #[serde(default = "default_label_slot_width")]
    pub label_slot_width: f32,

    #[serde(default)]
    pub start_text: Option<TextStyleConfig>,

    #[serde(default)]
    pub end_text: Option<TextStyleConfig>,

    #[serde(default)]
    pub label_display: LabelDisplay,

    #[serde(default)]
    pub indicator_corners: IndicatorCorners,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            animation: AnimationSpec::default(),
            background_height: default_bar_height(),
            indicator_height: default_bar_height(),
            background_color: default_arc_background(),
            indicator_color: default_arc_color(),
            start_text_end_padding: default_text_padding(),
            end_text_start_padding: default_text_padding(),
            corner_radius: 0.0,
            horizontal_padding: 0.0,
            label_slot_width: default_label_slot_width(),
            start_text: None,
            end_text: None,
            label_display: LabelDisplay::default(),
            indicator_corners: IndicatorCorners::default(),
        }
    }
}

impl LinearConfig {
    /// 校验配置
    pub fn validate(&self) -> PercentResult<()> {
        check_size("background_height", self.background_height)?;
        check_size("indicator_height", self.indicator_height)?;
        check_size("start_text_end_padding", self.start_text_end_padding)?;
        check_size("end_text_start_padding", self.end_text_start_padding)?;
        check_size("corner_radius", self.corner_radius)?;
        check_size("horizontal_padding", self.horizontal_padding)?;
        check_size("label_slot_width", self.label_slot_width)?;
        Ok(())
    }

    /// 左侧标签样式（未配置时为黑色）
    pub fn start_text_style(&self) -> TextStyleConfig {
        self.start_text.clone().unwrap_or_default()
    }

    /// 右侧标签样式（未配置时为黑色）
    pub fn end_text_style(&self) -> TextStyleConfig {
        self.end_text.clone().unwrap_or_default()
    }
}

/// 波浪填充圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    #[serde(default = "default_size")]
    pub size: f32,

    /// 圆的底色（液面以上）
    #[serde(default = "default_wave_background")]
    pub background_color: Rgba,

    /// 液体颜色
    #[serde(default = "default_wave_color")]
    pub wave_color: Rgba,

    /// 数值过渡
    #[serde(default)]
    pub animation: AnimationSpec,

    /// 容器宽度内的波峰数
    #[serde(default = "default_wave_frequency")]
    pub wave_frequency: f32,

    /// 基础振幅
    #[serde(default = "default_wave_amplitude")]
    pub wave_amplitude: f32,

    /// 溅起脉冲总时长（毫秒）
    #[serde(default = "default_splash_millis")]
    pub splash_millis: u32,

    /// 连续波动周期（毫秒），必须大于 0
    #[serde(default = "default_continuous_millis")]
    pub continuous_millis: u32,

    /// 波形采样点数
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    #[serde(default)]
    pub center_text: TextStyleConfig,

    #[serde(default)]
    pub label_suffix: String,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            background_color: default_wave_background(),
            wave_color: default_wave_color(),
            animation: AnimationSpec::default(),
            wave_frequency: default_wave_frequency(),
            wave_amplitude: default_wave_amplitude(),
            splash_millis: default_splash_millis(),
            continuous_millis: default_continuous_millis(),
            sample_count: default_sample_count(),
            center_text: TextStyleConfig::default(),
            label_suffix: String::new(),
        }
    }
}

impl WaveConfig {
    /// 校验配置
    pub fn validate(&self) -> PercentResult<()> {
        check_size("size", self.size)?;
        check_size("wave_amplitude", self.wave_amplitude)?;
        if !self.wave_frequency.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "wave_frequency",
            });
        }
        if self.continuous_millis == 0 {
            return Err(ValidationError::ZeroDuration {
                field: "continuous_millis",
            });
        }
        if self.sample_count == 0 {
            return Err(ValidationError::ZeroSampleCount);
        }
        Ok(())
    }
}

// 默认值函数
fn default_size() -> f32 {
    100.0
}

fn default_stroke_width() -> f32 {
    10.0
}

fn default_arc_background() -> Rgba {
    Rgba::LIGHT_GRAY
}

fn default_arc_color() -> Rgba {
    Rgba::BLACK
}

fn default_gradient_colors() -> Vec<Rgba> {
    vec![Rgba::GREEN, Rgba::GREEN.with_alpha(0.3), Rgba::WHITE]
}

fn default_bar_height() -> f32 {
    20.0
}

fn default_text_padding() -> f32 {
    5.0
}

fn default_label_slot_width() -> f32 {
    32.0
}

fn default_wave_background() -> Rgba {
    Rgba::WHITE
}

fn default_wave_color() -> Rgba {
    Rgba::GREEN
}

fn default_wave_frequency() -> f32 {
    1.5
}

fn default_wave_amplitude() -> f32 {
    10.0
}

fn default_splash_millis() -> u32 {
    500
}

fn default_continuous_millis() -> u32 {
    2_000
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}
