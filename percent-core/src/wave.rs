//! # Wave 模块
//!
//! 波浪路径构建：在容器宽度上对正弦波均匀采样，相邻采样点之间用
//! 二次曲线连接（控制点取两点中点），再连到容器顶部两角闭合。
//!
//! 闭合区域是波浪线以上的"空"部分，渲染时裁剪到内切圆并填充背景色，
//! 剩下的波浪色就是液面以下的部分。
//!
//! ```text
//! (0,0) ┌────────────────┐ (w,0)
//!       │      空        │
//!       │～～～～～～～～│  ← baseline = h * fill_fraction
//!       │     液体       │
//!       └────────────────┘
//! ```

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::error::{PercentResult, ValidationError};

/// 默认采样点数
pub const DEFAULT_SAMPLE_COUNT: usize = 30;

/// 二维点
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// 创建新的点
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 两点中点
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// 路径指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    QuadTo { ctrl: Point, to: Point },
    LineTo(Point),
    Close,
}

/// 波浪参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// 容器宽度内的波峰数
    pub frequency: f32,
    /// 振幅（像素）
    pub amplitude: f32,
    /// 相位（弧度）
    pub phase: f32,
    /// 采样点数（区间数），至少为 1
    pub sample_count: usize,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 1.5,
            amplitude: 10.0,
            phase: 0.0,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// 一帧的波浪路径
#[derive(Debug, Clone, PartialEq)]
pub struct WavePath {
    width: f32,
    height: f32,
    baseline: f32,
    samples: Vec<Point>,
    commands: Vec<PathCommand>,
}

/// 构建波浪路径
///
/// `fill_fraction` 是从顶部量起的基线比例（0 = 满，1 = 空），超出 [0, 1] 时被截断。
pub fn build_wave_path(
    fill_fraction: f32,
    width: f32,
    height: f32,
    params: WaveParams,
) -> PercentResult<WavePath> {
    if params.sample_count == 0 {
        return Err(ValidationError::ZeroSampleCount);
    }
    for (field, value) in [
        ("fill_fraction", fill_fraction),
        ("width", width),
        ("height", height),
        ("frequency", params.frequency),
        ("amplitude", params.amplitude),
        ("phase", params.phase),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field });
        }
    }

    let baseline = height * fill_fraction.clamp(0.0, 1.0);
    let center_x = width / 2.0;
    let step = width / params.sample_count as f32;
    // 宽度为 0 时角频率无意义，退化为水平线
    let angular = if width > 0.0 {
        params.frequency / width * TAU
    } else {
        0.0
    };

    let samples: Vec<Point> = (0..=params.sample_count)
        .map(|i| {
            let x = i as f32 * step;
            let y = baseline
                + params.amplitude * (angular * (x - center_x) + FRAC_PI_2 + params.phase).sin();
            Point::new(x, y)
        })
        .collect();

    let mut commands = Vec::with_capacity(samples.len() + 3);
    commands.push(PathCommand::MoveTo(samples[0]));
    for pair in samples.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        commands.push(PathCommand::QuadTo {
            ctrl: prev.midpoint(next),
            to: next,
        });
    }
    commands.push(PathCommand::LineTo(Point::new(width, 0.0)));
    commands.push(PathCommand::LineTo(Point::new(0.0, 0.0)));
    commands.push(PathCommand::Close);

    Ok(WavePath {
        width,
        height,
        baseline,
        samples,
        commands,
    })
}

impl WavePath {
    /// 路径指令序列
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// 正弦采样点（从左到右）
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// 基线高度（像素，从顶部量起）
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// 容器尺寸
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// 波浪线在 `x` 处的 y 坐标
    ///
    /// 沿二次曲线段求值；`x` 超出容器时取端点。
    pub fn surface_y(&self, x: f32) -> f32 {
        let mut start = self.samples[0];
        if x <= start.x || self.samples.len() == 1 {
            return start.y;
        }
        for command in &self.commands[1..] {
            let PathCommand::QuadTo { ctrl, to } = *command else {
                break;
            };
            if x <= to.x {
                let span = to.x - start.x;
                let t = if span > 0.0 {
                    (x - start.x) / span
                } else {
                    1.0
                };
                return quad_at(start, ctrl, to, t).y;
            }
            start = to;
        }
        start.y
    }

    /// 把路径展平为多边形顶点，每段二次曲线细分为 `segments` 段
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points = Vec::new();
        let mut cursor = Point::default();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    points.push(p);
                    cursor = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        points.push(quad_at(cursor, ctrl, to, t));
                    }
                    cursor = to;
                }
                PathCommand::Close => {}
            }
        }
        points
    }
}

/// 二次贝塞尔曲线求值
fn quad_at(p0: Point, ctrl: Point, p1: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * mt * t * ctrl.x + t * t * p1.x,
        mt * mt * p0.y + 2.0 * mt * t * ctrl.y + t * t * p1.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(path: &WavePath) -> String {
        path.commands()
            .iter()
            .map(|c| match c {
                PathCommand::MoveTo(p) => format!("M {:.1} {:.1}", p.x, p.y),
                PathCommand::QuadTo { ctrl, to } => {
                    format!("Q {:.1} {:.1} {:.1} {:.1}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCommand::LineTo(p) => format!("L {:.1} {:.1}", p.x, p.y),
                PathCommand::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wave_path_geometry() {
        let params = WaveParams {
            frequency: 1.0,
            amplitude: 10.0,
            phase: 0.0,
            sample_count: 4,
        };
        let path = build_wave_path(0.5, 100.0, 100.0, params).unwrap();
        insta::assert_snapshot!(describe(&path), @r"
        M 0.0 40.0
        Q 12.5 45.0 25.0 50.0
        Q 37.5 55.0 50.0 60.0
        Q 62.5 55.0 75.0 50.0
        Q 87.5 45.0 100.0 40.0
        L 100.0 0.0
        L 0.0 0.0
        Z
        ");
    }

    #[test]
    fn test_sample_count_and_closing() {
        let path = build_wave_path(0.3, 200.0, 200.0, WaveParams::default()).unwrap();
        assert_eq!(path.samples().len(), DEFAULT_SAMPLE_COUNT + 1);
        // MoveTo + 30 段曲线 + 两条边 + Close
        assert_eq!(path.commands().len(), 1 + DEFAULT_SAMPLE_COUNT + 3);
        assert_eq!(path.samples()[0].x, 0.0);
        let last = path.samples()[DEFAULT_SAMPLE_COUNT];
        assert!((last.x - 200.0).abs() < 1e-3);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_flat_wave_sits_on_baseline() {
        let params = WaveParams {
            amplitude: 0.0,
            ..WaveParams::default()
        };
        let path = build_wave_path(0.25, 80.0, 120.0, params).unwrap();
        assert_eq!(path.baseline(), 30.0);
        for sample in path.samples() {
            assert_eq!(sample.y, 30.0);
        }
        assert_eq!(path.surface_y(17.0), 30.0);
    }

    #[test]
    fn test_full_baseline_at_top() {
        let params = WaveParams {
            amplitude: 0.0,
            ..WaveParams::default()
        };
        let path = build_wave_path(0.0, 100.0, 100.0, params).unwrap();
        assert_eq!(path.baseline(), 0.0);
    }

    #[test]
    fn test_fill_fraction_is_clamped() {
        let params = WaveParams {
            amplitude: 0.0,
            ..WaveParams::default()
        };
        let below = build_wave_path(-0.5, 100.0, 100.0, params).unwrap();
        assert_eq!(below.baseline(), 0.0);
        let above = build_wave_path(1.5, 100.0, 100.0, params).unwrap();
        assert_eq!(above.baseline(), 100.0);
    }

    #[test]
    fn test_phase_shifts_wave() {
        let base = WaveParams {
            frequency: 1.0,
            amplitude: 10.0,
            phase: 0.0,
            sample_count: 4,
        };
        let a = build_wave_path(0.5, 100.0, 100.0, base).unwrap();
        let b = build_wave_path(
            0.5,
            100.0,
            100.0,
            WaveParams {
                phase: std::f32::consts::PI,
                ..base
            },
        )
        .unwrap();
        // 相位差 π：中心点从波谷（y=60）变成波峰（y=40）
        assert!((a.samples()[2].y - 60.0).abs() < 1e-3);
        assert!((b.samples()[2].y - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_surface_y_follows_segments() {
        let params = WaveParams {
            frequency: 1.0,
            amplitude: 10.0,
            phase: 0.0,
            sample_count: 4,
        };
        let path = build_wave_path(0.5, 100.0, 100.0, params).unwrap();
        assert!((path.surface_y(0.0) - 40.0).abs() < 1e-3);
        assert!((path.surface_y(50.0) - 60.0).abs() < 1e-3);
        assert!((path.surface_y(12.5) - 45.0).abs() < 1e-3);
        assert!((path.surface_y(150.0) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_flatten_is_closed_polygon() {
        let path = build_wave_path(0.5, 100.0, 100.0, WaveParams::default()).unwrap();
        let points = path.flatten(4);
        // 起点 + 每段 4 个点 + 两个顶角
        assert_eq!(points.len(), 1 + DEFAULT_SAMPLE_COUNT * 4 + 2);
        assert_eq!(points[points.len() - 1], Point::new(0.0, 0.0));
        assert_eq!(points[points.len() - 2], Point::new(100.0, 0.0));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let params = WaveParams {
            sample_count: 0,
            ..WaveParams::default()
        };
        assert_eq!(
            build_wave_path(0.5, 100.0, 100.0, params),
            Err(ValidationError::ZeroSampleCount)
        );
        assert_eq!(
            build_wave_path(f32::NAN, 100.0, 100.0, WaveParams::default()),
            Err(ValidationError::NonFinite {
                field: "fill_fraction"
            })
        );
    }
}
