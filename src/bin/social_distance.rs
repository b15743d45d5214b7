// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 社交距离检测演示 (Social distancing demo)
//!
//! 单线程逐帧处理:
//! 1. 抓取: 从相机会话获取图像与检测结果
//! 2. 判定: 本帧任意两人距离过近即违规
//! 3. 显示: 绘制检测框与标签 (macroquad)
//!
//! 按键: q 退出, i/o 缩放鸟瞰视图范围, a 仅行人, z 仅车辆, e 不过滤

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use social_distance::config::{Args, DemoConfig, DEFAULT_CONFIG_PATH};
use social_distance::detection::ClassFilter;
use social_distance::pipeline::process_frame;
use social_distance::renderer::Renderer;
use social_distance::session::{open_session, CameraSession, GrabOutcome, InitParameters};
use social_distance::tracking_view::TrackingViewConfig;
use tracing::{error, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "ZED".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    social_distance::init_tracing("social_distance=info");
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = DemoConfig::load(DEFAULT_CONFIG_PATH);
    config.print_summary();

    let params = InitParameters::new(args.recording, &config);
    let mut session = open_session(&params)?;

    // 对象跟踪需先启用位置跟踪
    if let Err(e) = session.enable_positional_tracking() {
        session.close();
        return Err(e.into());
    }
    if let Err(e) = session.enable_object_detection(params.detection_confidence) {
        session.close();
        return Err(e.into());
    }
    info!("✅ 对象检测已启用");

    let camera = session.camera_information();

    // 鸟瞰视图参数: 负 z 位于相机前方
    let mut track_view = TrackingViewConfig::new();
    track_view.set_z_min(-params.depth_maximum_distance);
    track_view.set_fps(camera.fps, true);
    if let Some(calibration) = camera.calibration.clone() {
        track_view.set_camera_calibration(calibration);
        track_view.compute_fov();
    }

    let mut renderer = Renderer::new(config.font_path.as_deref(), (camera.width, camera.height));
    let result = event_loop(session.as_mut(), &mut renderer, &mut track_view, &config).await;
    session.close();
    info!("👋 退出, 渲染帧率 {:.1}", renderer.render_fps());
    result
}

async fn event_loop(
    session: &mut dyn CameraSession,
    renderer: &mut Renderer,
    track_view: &mut TrackingViewConfig,
    config: &DemoConfig,
) -> Result<()> {
    let mut filter = ClassFilter::All;
    loop {
        if is_key_pressed(KeyCode::Q) {
            info!("🛑 收到退出请求");
            return Ok(());
        }
        if is_key_pressed(KeyCode::I) {
            track_view.zoom_in();
            info!("🔍 鸟瞰视图范围: z_min {:.0}", track_view.z_min());
        } else if is_key_pressed(KeyCode::O) {
            track_view.zoom_out();
            info!("🔍 鸟瞰视图范围: z_min {:.0}", track_view.z_min());
        }

        let requested = if is_key_pressed(KeyCode::A) {
            Some(ClassFilter::Person)
        } else if is_key_pressed(KeyCode::Z) {
            Some(ClassFilter::Vehicle)
        } else if is_key_pressed(KeyCode::E) {
            Some(ClassFilter::All)
        } else {
            None
        };
        if let Some(next) = requested {
            filter = next;
            info!("🏷️ 类别过滤: {}", filter);
        }

        match session.grab()? {
            GrabOutcome::EndOfStream => return Ok(()),
            GrabOutcome::Frame(frame) => {
                // 非新结果时保留上一帧画面与叠加层
                if let Some(overlay) = process_frame(&frame, filter, config.violation_distance) {
                    if let Some(image) = &frame.image {
                        renderer.update_frame(image);
                    }
                    renderer.set_overlay(overlay);
                }
            }
        }

        renderer.draw();
        next_frame().await;
    }
}
