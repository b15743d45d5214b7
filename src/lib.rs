// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license
pub mod config; // 命令行与配置参数
pub mod detection; // 违规判定与ID配色
pub mod pipeline; // 逐帧处理
pub mod renderer; // 叠加层绘制 (macroquad)
pub mod session; // 相机会话与录像回放
pub mod tracking_view; // 鸟瞰视图参数 (不渲染)
pub mod trajectory; // 螺旋轨迹绘图测试

pub use crate::config::{Args, DemoConfig};
pub use crate::detection::{color_for_id, detect_violation, ClassFilter, TrackedObject};
pub use crate::pipeline::process_frame;
pub use crate::session::{open_session, CameraSession, InitParameters};
pub use crate::tracking_view::TrackingViewConfig;

/// 初始化日志; `RUST_LOG` 未设置时使用 `default_filter`
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
