// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// 相机会话 (Camera session)
///
/// 检测、跟踪与深度估计全部由外部相机SDK完成, 这里只定义会话接口
/// - CameraSession: 每帧抓取图像与检测结果
/// - RecordingSession: 回放录制的检测日志 (*.jsonl)
pub mod recording;

pub use recording::{RecordedFrame, RecordingHeader, RecordingSession};

use crate::config::{DemoConfig, Resolution};
use crate::detection::ObjectsStatus;
use crate::tracking_view::CameraCalibration;
use image::RgbaImage;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// 输入源
#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
    /// 实时相机
    Live,
    /// 录像回放 (非实时)
    Playback(PathBuf),
}

/// 会话初始化参数
#[derive(Clone, Debug)]
pub struct InitParameters {
    pub source: InputSource,
    pub resolution: Resolution,
    pub fps: u32,
    pub depth_maximum_distance: f32,
    pub detection_confidence: u32,
}

impl InitParameters {
    pub fn new(recording: Option<PathBuf>, config: &DemoConfig) -> Self {
        let source = match recording {
            Some(path) => InputSource::Playback(path),
            None => InputSource::Live,
        };
        Self {
            source,
            resolution: config.camera_resolution,
            fps: config.camera_fps,
            depth_maximum_distance: config.depth_maximum_distance,
            detection_confidence: config.detection_confidence,
        }
    }

    pub fn is_playback(&self) -> bool {
        matches!(self.source, InputSource::Playback(_))
    }
}

/// 相机信息
#[derive(Clone, Debug, PartialEq)]
pub struct CameraInformation {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub calibration: Option<CameraCalibration>,
}

/// 一次抓取的数据
#[derive(Clone, Debug)]
pub struct FrameData {
    /// 左目图像, 录像中缺失时为 None
    pub image: Option<RgbaImage>,
    pub objects: ObjectsStatus,
}

/// 抓取结果
#[derive(Clone, Debug)]
pub enum GrabOutcome {
    Frame(FrameData),
    EndOfStream,
}

/// 会话初始化失败 (均为致命错误)
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    CameraOpen(String),
    PositionalTracking(String),
    ObjectDetection(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::CameraOpen(reason) => write!(f, "Camera Open failed: {}", reason),
            SessionError::PositionalTracking(reason) => {
                write!(f, "Enable positional tracking failed: {}", reason)
            }
            SessionError::ObjectDetection(reason) => {
                write!(f, "Enable object detection failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// 相机会话接口
pub trait CameraSession {
    fn camera_information(&self) -> CameraInformation;

    /// 对象跟踪依赖位置跟踪, 需先启用
    fn enable_positional_tracking(&mut self) -> Result<(), SessionError>;

    fn enable_object_detection(&mut self, confidence: u32) -> Result<(), SessionError>;

    /// 抓取下一帧
    fn grab(&mut self) -> anyhow::Result<GrabOutcome>;

    fn close(&mut self);
}

/// 按初始化参数打开会话
///
/// 实时相机与 *.svo 录像需要闭源相机SDK, 未链接时返回 `SessionError::CameraOpen`
pub fn open_session(params: &InitParameters) -> anyhow::Result<Box<dyn CameraSession>> {
    match &params.source {
        InputSource::Playback(path) => {
            let is_log = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("jsonl"))
                .unwrap_or(false);
            if !is_log {
                return Err(SessionError::CameraOpen(format!(
                    "{}: SVO playback requires the camera SDK backend",
                    path.display()
                ))
                .into());
            }
            info!("📹 使用检测记录回放: {}", path.display());
            let session = RecordingSession::open(path)?;
            Ok(Box::new(session))
        }
        InputSource::Live => {
            let (width, height) = params.resolution.dimensions();
            Err(SessionError::CameraOpen(format!(
                "no camera backend available for live capture ({}x{} @ {}fps)",
                width, height, params.fps
            ))
            .into())
        }
    }
}
