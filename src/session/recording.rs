// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 检测日志回放
//!
//! JSON Lines 格式: 第一行为相机信息头, 之后每个非空行为一帧检测结果。
//! 图像路径相对于日志文件所在目录。

use super::{CameraInformation, CameraSession, FrameData, GrabOutcome, SessionError};
use crate::detection::ObjectsStatus;
use crate::tracking_view::CameraCalibration;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 日志头 (第一行)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordingHeader {
    pub camera: RecordedCamera,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedCamera {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    #[serde(default)]
    pub calibration: Option<CameraCalibration>,
}

/// 一帧记录
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedFrame {
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(flatten)]
    pub objects: ObjectsStatus,
}

/// 回放会话
pub struct RecordingSession {
    info: CameraInformation,
    reader: Box<dyn BufRead>,
    base_dir: PathBuf,
    line_no: usize,
    frames_read: u64,
}

impl RecordingSession {
    /// 打开日志文件
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open recording {}", path.display()))?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_reader(Box::new(BufReader::new(file)), base_dir)
    }

    /// 从任意读取器构造, 读取并解析日志头
    pub fn from_reader(mut reader: Box<dyn BufRead>, base_dir: PathBuf) -> Result<Self> {
        let mut line = String::new();
        let mut line_no = 0;
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                bail!("recording is empty: missing camera header");
            }
            line_no += 1;
            if !line.trim().is_empty() {
                break;
            }
        }
        let header: RecordingHeader = serde_json::from_str(line.trim())
            .with_context(|| format!("invalid recording header at line {}", line_no))?;
        let camera = header.camera;
        if camera.fps == 0 {
            bail!("invalid recording header: fps must be positive");
        }
        info!(
            "✅ 录像打开成功: {}x{} @ {}fps",
            camera.width, camera.height, camera.fps
        );

        Ok(Self {
            info: CameraInformation {
                width: camera.width,
                height: camera.height,
                fps: camera.fps,
                calibration: camera.calibration,
            },
            reader,
            base_dir,
            line_no,
            frames_read: 0,
        })
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// 读取下一条帧记录, 文件结束时返回 None
    fn next_record(&mut self) -> Result<Option<RecordedFrame>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let record = serde_json::from_str(trimmed)
                .with_context(|| format!("invalid frame record at line {}", self.line_no))?;
            return Ok(Some(record));
        }
    }

    fn load_image(&self, relative: &Path) -> Option<image::RgbaImage> {
        let path = self.base_dir.join(relative);
        match image::open(&path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                warn!("⚠️ 图像加载失败 {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl CameraSession for RecordingSession {
    fn camera_information(&self) -> CameraInformation {
        self.info.clone()
    }

    // 日志中已包含跟踪结果
    fn enable_positional_tracking(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    fn enable_object_detection(&mut self, confidence: u32) -> Result<(), SessionError> {
        debug!("🎯 回放已记录的检测结果 (置信度 {})", confidence);
        Ok(())
    }

    fn grab(&mut self) -> Result<GrabOutcome> {
        let Some(record) = self.next_record()? else {
            info!("📼 录像播放结束, 共 {} 帧", self.frames_read);
            return Ok(GrabOutcome::EndOfStream);
        };
        self.frames_read += 1;
        let image = record.image.as_deref().and_then(|p| self.load_image(p));
        debug!(
            "🎞️ 第 {} 帧 @ {}ns: {} 个对象",
            self.frames_read,
            record.objects.timestamp_ns,
            record.objects.object_list.len()
        );
        Ok(GrabOutcome::Frame(FrameData {
            image,
            objects: record.objects,
        }))
    }

    fn close(&mut self) {
        info!("📴 录像已关闭");
    }
}
