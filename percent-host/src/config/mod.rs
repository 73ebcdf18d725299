//! # Config 模块
//!
//! 指示器配置与 headless 回放配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (demo.json)
//! 3. 默认值（最低）

mod style;
mod widget;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use percent_core::{PercentageRange, ValidationError};

pub use style::{Rgba, TextStyleConfig};
pub use widget::{
    ArcConfig, ArcStyle, GradientConfig, IndicatorCorners, LabelDisplay, LinearConfig, WaveConfig,
};

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析 / 序列化失败
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    /// 参数校验失败
    #[error("组件 '{widget}' 配置无效: {source}")]
    Invalid {
        widget: String,
        #[source]
        source: ValidationError,
    },
}

/// 指示器种类及其配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetConfig {
    Arc(ArcConfig),
    Gradient(GradientConfig),
    Linear(LinearConfig),
    Wave(WaveConfig),
}

impl WidgetConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            WidgetConfig::Arc(c) => c.validate(),
            WidgetConfig::Gradient(c) => c.validate(),
            WidgetConfig::Linear(c) => c.validate(),
            WidgetConfig::Wave(c) => c.validate(),
        }
    }

    /// 种类名称（用于日志）
    pub fn kind_name(&self) -> &'static str {
        match self {
            WidgetConfig::Arc(_) => "arc",
            WidgetConfig::Gradient(_) => "gradient",
            WidgetConfig::Linear(_) => "linear",
            WidgetConfig::Wave(_) => "wave",
        }
    }
}

/// 数值时间表中的一步
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueStep {
    /// 触发时间（毫秒，从回放开始计）
    pub at_millis: u32,
    /// 新的当前值
    pub value: f32,
}

/// 回放中的一个指示器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoWidget {
    pub name: String,

    #[serde(default = "default_maximum")]
    pub maximum: f32,

    /// 线性条的行宽（其它种类忽略）
    #[serde(default = "default_row_width")]
    pub row_width: f32,

    pub widget: WidgetConfig,

    /// 数值变化时间表
    #[serde(default)]
    pub schedule: Vec<ValueStep>,
}

/// headless 回放配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 帧率
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// 回放时长（毫秒）
    #[serde(default = "default_duration_millis")]
    pub duration_millis: u32,

    #[serde(default = "default_widgets")]
    pub widgets: Vec<DemoWidget>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            duration_millis: default_duration_millis(),
            widgets: default_widgets(),
        }
    }
}

impl DemoConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = ?path, "配置文件不存在，使用默认配置");
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => {
                info!(path = ?path, widgets = config.widgets.len(), "配置文件加载成功");
                config
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "配置文件加载失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 加载配置文件，失败时返回错误
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        for demo in &self.widgets {
            let invalid = |source| ConfigError::Invalid {
                widget: demo.name.clone(),
                source,
            };
            demo.widget.validate().map_err(invalid)?;
            PercentageRange::new(0.0, demo.maximum).map_err(invalid)?;
            for step in &demo.schedule {
                PercentageRange::new(step.value, demo.maximum).map_err(invalid)?;
            }
        }
        Ok(())
    }

    /// 每帧时长（秒）
    pub fn frame_secs(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// 总帧数
    pub fn frame_count(&self) -> u32 {
        (self.duration_millis as u64 * self.fps as u64 / 1000) as u32
    }
}

// 默认值函数
fn default_fps() -> u32 {
    60
}

fn default_duration_millis() -> u32 {
    3_000
}

fn default_maximum() -> f32 {
    100.0
}

fn default_row_width() -> f32 {
    300.0
}

fn default_widgets() -> Vec<DemoWidget> {
    let schedule = vec![
        ValueStep {
            at_millis: 0,
            value: 50.0,
        },
        ValueStep {
            at_millis: 1_500,
            value: 70.0,
        },
    ];
    vec![
        DemoWidget {
            name: "circular".to_string(),
            maximum: default_maximum(),
            row_width: default_row_width(),
            widget: WidgetConfig::Arc(ArcConfig::default()),
            schedule: schedule.clone(),
        },
        DemoWidget {
            name: "wave".to_string(),
            maximum: default_maximum(),
            row_width: default_row_width(),
            widget: WidgetConfig::Wave(WaveConfig::default()),
            schedule,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.frame_count(), 180);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = DemoConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();

        // 反序列化
        let loaded: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_widget_tag() {
        let json = r#"{ "name": "bar", "widget": { "kind": "linear", "label_display": "both" } }"#;
        let demo: DemoWidget = serde_json::from_str(json).unwrap();
        assert_eq!(demo.maximum, 100.0);
        match demo.widget {
            WidgetConfig::Linear(linear) => assert_eq!(linear.label_display, LabelDisplay::Both),
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = DemoConfig::default();

        // 时间表中的值超过最大值
        config.widgets[0].schedule.push(ValueStep {
            at_millis: 2_000,
            value: 150.0,
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                source: ValidationError::ExceedsMaximum { .. },
                ..
            }
        ));
        assert!(err.to_string().contains("circular"));
    }
}
