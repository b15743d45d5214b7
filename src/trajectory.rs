// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 螺旋轨迹 (绘图测试用)
//!
//! 第 i 帧: t = 0.1 * i, x = t * sin(t), y = t * cos(t)

/// 动画帧数
pub const FRAMES: usize = 400;
/// 帧间隔 (毫秒)
pub const INTERVAL_MS: u64 = 20;
/// 坐标轴范围 [-AXIS_LIMIT, AXIS_LIMIT]
pub const AXIS_LIMIT: f32 = 50.0;

/// 第 `frame` 帧的轨迹点
pub fn spiral_point(frame: usize) -> (f32, f32) {
    let t = 0.1 * frame as f32;
    (t * t.sin(), t * t.cos())
}

/// 累积点的螺旋轨迹动画状态
#[derive(Debug, Clone, Default)]
pub struct SpiralTrajectory {
    frame: usize,
    points: Vec<(f32, f32)>,
}

impl SpiralTrajectory {
    pub fn new() -> Self {
        Self {
            frame: 0,
            points: Vec::with_capacity(FRAMES),
        }
    }

    /// 推进一帧; 播放完毕后清空重新开始
    pub fn advance(&mut self) {
        if self.frame >= FRAMES {
            self.frame = 0;
            self.points.clear();
        }
        self.points.push(spiral_point(self.frame));
        self.frame += 1;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }
}

/// 绘图坐标 -> 窗口像素 (y轴向上)
pub fn plot_to_screen(point: (f32, f32), width: f32, height: f32) -> (f32, f32) {
    let sx = (point.0 + AXIS_LIMIT) / (2.0 * AXIS_LIMIT) * width;
    let sy = (AXIS_LIMIT - point.1) / (2.0 * AXIS_LIMIT) * height;
    (sx, sy)
}
