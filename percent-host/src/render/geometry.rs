//! # Geometry 模块
//!
//! 圆弧、扇形、裁剪到圆内的区域等网格构建。
//!
//! 角度约定与屏幕坐标一致：0° 指向 +x，顺时针为正（y 轴向下），
//! 因此 -90° 在正上方。

use egui::epaint::{CornerRadius, Mesh};
use egui::{Color32, Pos2, Rect, Shape, Stroke, pos2};

/// 进度弧的起始角度（正上方）
pub const ARC_START_DEGREES: f32 = -90.0;

/// 一整圈的折线段数
pub const SEGMENTS_PER_TURN: usize = 120;

/// 圆被切分的竖条 / 横条数
pub const DISC_SLICES: usize = 64;

/// 圆上指定角度的点
pub fn point_on_circle(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    pos2(center.x + radius * cos, center.y + radius * sin)
}

/// 圆弧折线顶点（包含两个端点）
pub fn arc_points(center: Pos2, radius: f32, start_degrees: f32, sweep_degrees: f32) -> Vec<Pos2> {
    let segments = ((sweep_degrees.abs() / 360.0) * SEGMENTS_PER_TURN as f32)
        .ceil()
        .max(1.0) as usize;
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            point_on_circle(center, radius, start_degrees + sweep_degrees * t)
        })
        .collect()
}

/// 背景圆环
pub fn ring(center: Pos2, radius: f32, width: f32, color: Color32) -> Shape {
    Shape::circle_stroke(center, radius, Stroke::new(width, color))
}

/// 从正上方开始的实心扇形（三角扇）
///
/// 扫过角度不大于 0 时返回 `None`。
pub fn sector(center: Pos2, radius: f32, sweep_degrees: f32, color: Color32) -> Option<Shape> {
    if sweep_degrees <= 0.0 {
        return None;
    }
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for p in arc_points(center, radius, ARC_START_DEGREES, sweep_degrees) {
        mesh.colored_vertex(p, color);
    }
    let rim = mesh.vertices.len() as u32;
    for i in 1..rim - 1 {
        mesh.add_triangle(0, i, i + 1);
    }
    Some(Shape::mesh(mesh))
}

/// 从正上方开始的开放描边弧线
pub fn stroked_arc(center: Pos2, radius: f32, sweep_degrees: f32, stroke: Stroke) -> Option<Shape> {
    if sweep_degrees <= 0.0 {
        return None;
    }
    Some(Shape::line(
        arc_points(center, radius, ARC_START_DEGREES, sweep_degrees),
        stroke,
    ))
}

/// 圆在横坐标 `x` 处的上下边界
fn disc_span_at_x(center: Pos2, radius: f32, x: f32) -> (f32, f32) {
    let dx = (x - center.x).clamp(-radius, radius);
    let half = (radius * radius - dx * dx).max(0.0).sqrt();
    (center.y - half, center.y + half)
}

/// 圆在纵坐标 `y` 处的半宽
fn disc_half_width_at_y(center: Pos2, radius: f32, y: f32) -> f32 {
    let dy = (y - center.y).clamp(-radius, radius);
    (radius * radius - dy * dy).max(0.0).sqrt()
}

/// 圆内、曲线 `lower(x)` 以上的区域
///
/// 用竖条逼近：每条的上边是圆的上边界，下边是曲线截断到圆内后的值。
pub fn disc_region_above(
    center: Pos2,
    radius: f32,
    color: Color32,
    lower: impl Fn(f32) -> f32,
) -> Mesh {
    let mut mesh = Mesh::default();
    if radius <= 0.0 {
        return mesh;
    }
    let left = center.x - radius;
    let step = 2.0 * radius / DISC_SLICES as f32;
    let edge = |i: usize| {
        let x = left + step * i as f32;
        let (top, bottom) = disc_span_at_x(center, radius, x);
        let y = lower(x).clamp(top, bottom);
        (pos2(x, top), pos2(x, y))
    };

    let (mut prev_top, mut prev_bottom) = edge(0);
    for i in 1..=DISC_SLICES {
        let (top, bottom) = edge(i);
        // 两边都没有高度的竖条直接跳过
        if prev_bottom.y > prev_top.y || bottom.y > top.y {
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(prev_top, color);
            mesh.colored_vertex(top, color);
            mesh.colored_vertex(bottom, color);
            mesh.colored_vertex(prev_bottom, color);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
        prev_top = top;
        prev_bottom = bottom;
    }
    mesh
}

/// 按纵向颜色函数填充的圆
///
/// `color_at` 的参数是相对圆外接正方形顶部的距离。
pub fn disc_with_vertical_colors(
    center: Pos2,
    radius: f32,
    color_at: impl Fn(f32) -> Color32,
) -> Mesh {
    let mut mesh = Mesh::default();
    if radius <= 0.0 {
        return mesh;
    }
    let top = center.y - radius;
    let step = 2.0 * radius / DISC_SLICES as f32;
    for i in 0..DISC_SLICES {
        let y0 = top + step * i as f32;
        let y1 = y0 + step;
        let w0 = disc_half_width_at_y(center, radius, y0);
        let w1 = disc_half_width_at_y(center, radius, y1);
        let c0 = color_at(y0 - top);
        let c1 = color_at(y1 - top);

        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(pos2(center.x - w0, y0), c0);
        mesh.colored_vertex(pos2(center.x + w0, y0), c0);
        mesh.colored_vertex(pos2(center.x + w1, y1), c1);
        mesh.colored_vertex(pos2(center.x - w1, y1), c1);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}

/// 绕 `center` 旋转 180°
pub fn rotate_half_turn(mesh: &mut Mesh, center: Pos2) {
    for vertex in &mut mesh.vertices {
        vertex.pos = pos2(2.0 * center.x - vertex.pos.x, 2.0 * center.y - vertex.pos.y);
    }
}

/// 圆角半径换算为 egui 的整数半径
pub fn corner_radius(radius: f32) -> u8 {
    radius.round().clamp(0.0, u8::MAX as f32) as u8
}

/// 填充矩形，可分别指定左右两侧的圆角
pub fn rounded_rect(rect: Rect, left_radius: f32, right_radius: f32, color: Color32) -> Shape {
    // 圆角不超过短边的一半
    let limit = rect.width().min(rect.height()) / 2.0;
    let left = corner_radius(left_radius.min(limit));
    let right = corner_radius(right_radius.min(limit));
    let radius = CornerRadius {
        nw: left,
        sw: left,
        ne: right,
        se: right,
    };
    Shape::rect_filled(rect, radius, color)
}
