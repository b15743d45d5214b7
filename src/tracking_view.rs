// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 鸟瞰轨迹视图配置
//!
//! 保存鸟瞰视图的尺度与时间步参数, 每次修改 FPS 或 Z 范围时重新计算派生字段。
//! 鸟瞰视图本身不渲染, 主循环只维护这些参数。

use crate::detection::TrackColor;
use serde::{Deserialize, Serialize};

/// 左目相机标定参数 (原样保存)
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraCalibration {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
    /// 畸变系数 [k1, k2, k3, p1, p2]
    #[serde(default)]
    pub disto: [f32; 5],
    pub image_width: u32,
    pub image_height: u32,
}

/// 鸟瞰视图参数
#[derive(Clone, Debug)]
pub struct TrackingViewConfig {
    // 对象范围
    x_min: f32,
    x_max: f32,
    z_min: f32,

    // 窗口尺寸
    window_width: u32,
    window_height: u32,

    // 可视化
    end_of_track_color: TrackColor,
    background_color: TrackColor,
    camera_offset: u32,
    x_step: f32,
    z_step: f32,
    min_length_to_draw: usize,

    // 由FPS派生
    fps: u32,
    frame_time_step: u64,
    history_size: usize,
    max_missing_points: u32,
    smoothing_window_size: u32,

    // 相机
    camera_calibration: Option<CameraCalibration>,
    fov: f32,
}

impl Default for TrackingViewConfig {
    fn default() -> Self {
        let x_min = -6250.0f32;
        let x_max = -x_min;
        let z_min = -12500.0f32;
        let window_width = 800;
        let window_height = 800;

        let mut config = Self {
            x_min,
            x_max,
            z_min,
            window_width,
            window_height,
            end_of_track_color: TrackColor::from_bgr(255, 40, 40),
            background_color: TrackColor::from_bgr(248, 248, 248),
            camera_offset: 50,
            x_step: (x_max - x_min) / window_width as f32,
            // 初始值不扣除 camera_offset, 与 set_z_min 之后的值不同
            z_step: z_min.abs() / window_height as f32,
            min_length_to_draw: 3,
            fps: 30,
            frame_time_step: 0,
            history_size: 0,
            max_missing_points: 0,
            smoothing_window_size: 0,
            camera_calibration: None,
            fov: -1.0,
        };
        config.configure_from_fps();
        config
    }
}

impl TrackingViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置最远深度 (负值, 位于相机前方), X 范围取其一半并对称
    pub fn set_z_min(&mut self, z: f32) {
        self.z_min = z;
        self.x_min = z / 2.0;
        self.x_max = -self.x_min;
        self.recompute_steps();
    }

    /// 设置FPS; `configure_all` 时同时重算历史长度等参数
    pub fn set_fps(&mut self, fps: u32, configure_all: bool) {
        self.fps = fps.max(1);
        self.frame_time_step = frame_time_step(self.fps);
        if configure_all {
            self.configure_from_fps();
        }
    }

    /// 根据当前FPS重算所有时间相关参数
    pub fn configure_from_fps(&mut self) {
        self.frame_time_step = frame_time_step(self.fps);
        // 显示最近1.5秒
        self.history_size = (1.5 * self.fps as f32) as usize;
        // 轨迹删除阈值
        self.max_missing_points = (self.fps / 6).max(4);
        // 平滑窗口: 80ms
        self.smoothing_window_size = (0.08 * self.fps as f32).ceil() as u32;
    }

    pub fn set_camera_calibration(&mut self, calib: CameraCalibration) {
        self.camera_calibration = Some(calib);
    }

    /// 由标定参数计算水平视场角
    pub fn compute_fov(&mut self) {
        if let Some(calib) = &self.camera_calibration {
            if calib.fx > 0.0 {
                self.fov = 2.0 * (calib.image_width as f32 / (2.0 * calib.fx)).atan();
            }
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom(0.9);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(1.0 / 0.9);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.x_min *= factor;
        self.x_max *= factor;
        self.z_min *= factor;
        self.recompute_steps();
    }

    fn recompute_steps(&mut self) {
        self.x_step = (self.x_max - self.x_min) / self.window_width as f32;
        let usable_height = self.window_height.saturating_sub(self.camera_offset).max(1);
        self.z_step = self.z_min.abs() / usable_height as f32;
    }

    pub fn x_min(&self) -> f32 {
        self.x_min
    }

    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    pub fn z_min(&self) -> f32 {
        self.z_min
    }

    pub fn x_step(&self) -> f32 {
        self.x_step
    }

    pub fn z_step(&self) -> f32 {
        self.z_step
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    pub fn camera_offset(&self) -> u32 {
        self.camera_offset
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_time_step(&self) -> u64 {
        self.frame_time_step
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    pub fn max_missing_points(&self) -> u32 {
        self.max_missing_points
    }

    pub fn smoothing_window_size(&self) -> u32 {
        self.smoothing_window_size
    }

    pub fn min_length_to_draw(&self) -> usize {
        self.min_length_to_draw
    }

    pub fn end_of_track_color(&self) -> TrackColor {
        self.end_of_track_color
    }

    pub fn background_color(&self) -> TrackColor {
        self.background_color
    }

    pub fn camera_calibration(&self) -> Option<&CameraCalibration> {
        self.camera_calibration.as_ref()
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }
}

/// 每帧时长 (纳秒), 向上取整
fn frame_time_step(fps: u32) -> u64 {
    (1_000_000_000.0f64 / fps as f64).ceil() as u64
}
