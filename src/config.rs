// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 演示程序配置 - 命令行参数与可选JSON文件

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::detection::VIOLATION_DISTANCE;

/// 可识别的录像扩展名
pub const RECORDING_EXTENSIONS: [&str; 2] = ["svo", "jsonl"];

/// 默认配置文件 (工作目录下, 可不存在)
pub const DEFAULT_CONFIG_PATH: &str = "social_distance.json";

/// 社交距离检测演示参数
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Social distancing demo over stereo camera detections",
    long_about = None
)]
pub struct Args {
    /// 录像路径 (*.svo / *.jsonl); 省略时打开实时相机
    #[arg(value_name = "RECORDING", value_parser = parse_recording_path)]
    pub recording: Option<PathBuf>,
}

/// 只接受已知录像扩展名
pub fn parse_recording_path(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if is_recording_path(&path) {
        Ok(path)
    } else {
        Err(format!(
            "please specify a recording file path ({})",
            RECORDING_EXTENSIONS
                .iter()
                .map(|ext| format!("*.{}", ext))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}

pub fn is_recording_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECORDING_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// 相机分辨率
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Resolution {
    Hd2k,
    Hd1080,
    Hd720,
    Vga,
}

impl Resolution {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::Hd2k => (2208, 1242),
            Resolution::Hd1080 => (1920, 1080),
            Resolution::Hd720 => (1280, 720),
            Resolution::Vga => (672, 376),
        }
    }
}

/// 演示程序参数配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    // === 违规判定 ===
    pub violation_distance: f32, // 距离阈值 (毫米)

    // === 相机会话 ===
    pub detection_confidence: u32,   // 检测置信度阈值 (0-100)
    pub camera_fps: u32,             // 实时相机帧率
    pub camera_resolution: Resolution,
    pub depth_maximum_distance: f32, // 最远深度 (毫米)

    // === 显示 ===
    pub font_path: Option<PathBuf>, // 标签字体, 缺省使用内置字体
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            violation_distance: VIOLATION_DISTANCE,
            detection_confidence: 50,
            camera_fps: 15,
            camera_resolution: Resolution::Hd720,
            depth_maximum_distance: 20.0 * 1000.0,
            font_path: None,
        }
    }
}

impl DemoConfig {
    /// 从JSON文件加载配置; 文件不存在或解析失败时使用默认值
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                warn!("⚠️  配置文件解析失败: {}, 使用默认值", e);
                Self::default()
            }),
            Err(_) => {
                info!("📝 未找到配置文件 {}, 使用默认配置", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// 打印当前配置
    pub fn print_summary(&self) {
        info!("🎛️  当前配置:");
        info!("  距离阈值: {:.0}", self.violation_distance);
        info!("  检测置信度: {}", self.detection_confidence);
        info!(
            "  相机: {:?} @ {}fps, 最远深度 {:.0}",
            self.camera_resolution, self.camera_fps, self.depth_maximum_distance
        );
    }
}
