//! End-to-end smoke tests for the full homewatchd stack.
//!
//! Each test wires the real adapters (tokio file system over a temporary
//! directory, reqwest clients against a local stand-in for the pv server),
//! the real services and the real axum router, and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot`.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use homewatch_adapter_fs::{JpegRenderer, TokioFileSystem};
use homewatch_adapter_http_axum::router;
use homewatch_adapter_http_axum::state::{AppState, PageSettings};
use homewatch_adapter_http_client::{HttpFeedClient, HttpRelaySwitch, build_client};
use homewatch_app::poller::{PollTarget, Poller};
use homewatch_app::services::image_service::ImageService;
use homewatch_app::services::panel_service::PanelService;
use homewatch_app::services::relay_service::RelayService;
use homewatch_app::services::sensor_service::SensorService;
use homewatch_app::services::video_service::VideoService;
use homewatch_app::services::weather_service::{WeatherPaths, WeatherService};
use homewatch_domain::dashboard::{Feed, RuleTable};
use homewatch_domain::sensor_log::SensorLogFilter;

/// Serve a stand-in for the pv server: two feeds and the relay gateway.
async fn pv_server() -> String {
    let app = axum::Router::new()
        .route(
            "/pv/data/pstate.json",
            get(|| async { axum::Json(json!({"grid": -1500, "soc": 755, "unknown": 1})) }),
        )
        .route(
            "/pv/data/devices.json",
            get(|| async {
                axum::Json(json!([
                    {"host": "shelly1", "id": "a1b2c3", "r": 0, "name": "Boiler",
                     "load": 300, "total": 600, "state": 1}
                ]))
            }),
        )
        .route("/{host}/cm", get(|| async { "{\"POWER\":\"ON\"}" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Build a fully-wired router over `dir` and the pv server at `base_url`.
fn app(dir: &Path, base_url: &str, panel: Arc<PanelService>) -> axum::Router {
    let fs = TokioFileSystem;
    let client = build_client(Duration::from_secs(2)).unwrap();
    let weather = WeatherPaths {
        mtime: dir.join("webcam/.mtime"),
        temperature: dir.join("temperature_C"),
        humidity: dir.join("humidity"),
        luminosity: dir.join("lum_percent"),
        barometric: dir.join("baro"),
    };

    let state = AppState::new(
        SensorService::new(fs, dir.join("433.json"), SensorLogFilter::default()),
        WeatherService::new(fs, weather),
        VideoService::new(fs, dir.join("videos")),
        ImageService::new(fs, JpegRenderer::default(), dir.join("webcam")),
        panel,
        RelayService::new(HttpRelaySwitch::new(client, base_url).unwrap()),
        PageSettings {
            video_dir: Some(dir.join("videos")),
            ..PageSettings::default()
        },
    );

    router::build(state)
}

async fn body_text(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_text(resp).await)
}

fn empty_panel() -> Arc<PanelService> {
    Arc::new(PanelService::new(&RuleTable::default()))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_text(
        app(dir.path(), "http://127.0.0.1:9", empty_panel()),
        "/health",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Webcam
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_webcam_snapshots_from_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "temperature_C", "18.2\n");
    write(dir.path(), "baro", "1009\n");
    write(
        dir.path(),
        "433.json",
        concat!(
            r#"{"model":"Bresser-6in1","id":7,"time":"10:00","temperature_F":212}"#,
            "\n",
            r#"{"model":"Nexus-TH","id":60,"temperature_C":20.1}"#,
            "\n",
        ),
    );
    write(dir.path(), "videos/gartencam-20180823-drecksau.mp4", "mp4");
    let app = app(dir.path(), "http://127.0.0.1:9", empty_panel());

    let (_, weather) = get_text(app.clone(), "/webcam/weather.json").await;
    let weather: Value = serde_json::from_str(&weather).unwrap();
    assert_eq!(weather["temp"], "18.2 °C");
    assert_eq!(weather["baro"], "1009 hPa");
    assert_eq!(weather["lumi"], "");

    let (_, sensors) = get_text(app.clone(), "/webcam/sensors.json").await;
    let sensors: Value = serde_json::from_str(&sensors).unwrap();
    assert_eq!(sensors["Bresser-6in1"]["7"]["temperature_C"], json!(["100"]));
    assert!(sensors.get("Nexus-TH").is_none());

    let (_, videos) = get_text(app.clone(), "/webcam/videos.json").await;
    let videos: Value = serde_json::from_str(&videos).unwrap();
    assert_eq!(videos[0]["file"], "gartencam-20180823-drecksau.mp4");

    let (status, clip) = get_text(
        app.clone(),
        "/webcam/videos/gartencam-20180823-drecksau.mp4",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(clip, "mp4");

    let (status, page) = get_text(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("18.2 °C"));
    assert!(page.contains("Drecksau"));
}

#[tokio::test]
async fn should_skip_undecodable_sensor_lines() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = br#"{"model":"Bresser-6in1","id":7,"humidity":40}"#.to_vec();
    log.extend_from_slice(b"\n\xff\xfe garbage\n");
    log.extend_from_slice(br#"{"model":"Bresser-6in1","id":7,"humidity":41}"#);
    log.push(b'\n');
    std::fs::write(dir.path().join("433.json"), log).unwrap();
    let app = app(dir.path(), "http://127.0.0.1:9", empty_panel());

    let (status, sensors) = get_text(app, "/webcam/sensors.json").await;
    assert_eq!(status, StatusCode::OK);
    let sensors: Value = serde_json::from_str(&sensors).unwrap();
    assert_eq!(sensors["Bresser-6in1"]["7"]["humidity"], json!([40, 41]));
}

#[tokio::test]
async fn should_fail_closed_on_broken_image() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "webcam/webcam.jpg", "not a jpeg");
    let app = app(dir.path(), "http://127.0.0.1:9", empty_panel());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/webcam/image?url=webcam.jpg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::CONTENT_TYPE).is_none());
    assert!(body_text(resp).await.is_empty());
}

// ---------------------------------------------------------------------------
// PV
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_poll_feeds_into_panel() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = pv_server().await;
    let panel = empty_panel();
    let client = build_client(Duration::from_secs(2)).unwrap();
    let feeds = Arc::new(HttpFeedClient::new(client, &base_url).unwrap());
    let poller = Poller::spawn(
        vec![
            PollTarget::new(
                Feed::Pstate,
                PollTarget::default_path(Feed::Pstate),
                Duration::from_millis(50),
            ),
            PollTarget::new(
                Feed::Devices,
                PollTarget::default_path(Feed::Devices),
                Duration::from_millis(50),
            ),
        ],
        feeds,
        Arc::clone(&panel),
    );

    for _ in 0..100 {
        let snapshot = panel.snapshot().await;
        if snapshot.updated(Feed::Pstate).is_some()
            && snapshot.updated(Feed::Devices).is_some()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    poller.shutdown();

    let app = app(dir.path(), &base_url, panel);
    let (_, body) = get_text(app.clone(), "/pv/panel.json").await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["sections"]["pstate"]["grid"]["text"], "-1.500");
    assert_eq!(body["sections"]["pstate"]["grid"]["classes"], json!(["grid-m"]));
    assert_eq!(body["sections"]["pstate"]["soc"]["text"], "75,5");
    assert!(body["sections"]["pstate"]["unknown"].is_null());
    assert_eq!(body["devices"][0]["name"], "Boiler");
    assert_eq!(body["devices"][0]["class"], "plus");

    let (status, page) = get_text(app, "/pv").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("-1.500"));
    assert!(page.contains("Boiler"));
}

#[tokio::test]
async fn should_toggle_relay_against_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = pv_server().await;
    let app = app(dir.path(), &base_url, empty_panel());

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/relay/toggle")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"host":"shelly1","id":"a1b2c3","r":0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body, json!({"accepted": true, "status": 200}));
}

#[tokio::test]
async fn should_report_unreachable_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path(), "http://127.0.0.1:9", empty_panel());

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/relay/toggle")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"host":"shelly1","id":"a1b2c3"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["accepted"], false);
    assert!(body["status"].is_null());
}
