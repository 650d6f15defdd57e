//! Pipeline construction, time codec, and interactor round-trip tests

use std::sync::Arc;

use fragpack_cli::adapters::MockEngineAdapter;
use fragpack_cli::app::container::AppContainer;
use fragpack_cli::app::probe_interactor::ProbeRequest;
use fragpack_cli::app::transcode_interactor::TranscodeRequest;
use fragpack_cli::domain::model::{MediaDescription, TranscodeProfile, TrimWindow};
use fragpack_cli::planner::PipelineBuilder;
use fragpack_cli::utils::time::TimeCodec;

fn gif_profile(source: &str, start: u64, duration: u64) -> TranscodeProfile {
    TranscodeProfile::GifExtraction {
        source: source.to_string(),
        window: TrimWindow::new(start, duration),
    }
}

fn dash_profile(source: &str, start: u64, duration: u64) -> TranscodeProfile {
    TranscodeProfile::FragmentedDashPackage {
        source: source.to_string(),
        window: TrimWindow::new(start, duration),
    }
}

#[test]
fn test_probe_vector() {
    assert_eq!(
        PipelineBuilder::probe_args("a.mp4"),
        ["-hide_banner", "-i", "a.mp4"]
    );
}

#[test]
fn test_gif_vector_exact_sequence() {
    let args = PipelineBuilder::build(&gif_profile("a.mp4", 5, 10));
    assert_eq!(
        args,
        ["-i", "a.mp4", "-t", "10", "-ss", "5", "-f", "gif", "out.gif"]
    );
}

#[test]
fn test_dash_vector_exact_sequence() {
    let args = PipelineBuilder::build(&dash_profile("movie.mp4", 100, 30));
    let expected: Vec<&str> = vec![
        "-hide_banner",
        "-i",
        "movie.mp4",
        "-map",
        "0",
        "-map",
        "0",
        "-map",
        "0",
        "-map",
        "0",
        "-f",
        "dash",
        "-r",
        "25",
        "-t",
        "30",
        "-ss",
        "100",
        "-seg_duration",
        "2",
        "-use_template",
        "1",
        "-use_timeline",
        "1",
        "-init_seg_name",
        "init-$RepresentationID$.$ext$",
        "-media_seg_name",
        "media-$RepresentationID$-$Number$.$ext$",
        "-frag_duration",
        "2",
        "-c:v",
        "libx264",
        "-b:v:0",
        "800k",
        "-profile:v:0",
        "main",
        "-b:v:1",
        "300k",
        "-s:v:1",
        "320x170",
        "-profile:v:1",
        "baseline",
        "-adaptation_sets",
        "id=0,streams=v id=1,streams=a",
        "-adaptation_sets",
        "id=2,streams=v id=3,streams=a",
        "out.mpd",
    ];
    assert_eq!(args, expected);
}

#[test]
fn test_builder_is_pure() {
    let profile = dash_profile("movie.mp4", 7, 3);
    assert_eq!(
        PipelineBuilder::build(&profile),
        PipelineBuilder::build(&profile)
    );
}

#[test]
fn test_clock_to_seconds_truncates_fraction() {
    let codec = TimeCodec::new();
    assert_eq!(codec.clock_to_seconds("00:01:23.45"), 83);
    assert_eq!(codec.clock_to_seconds("00:00:10"), 10);
    assert_eq!(codec.clock_to_seconds("02:00:00.999"), 7200);
}

#[test]
fn test_seconds_to_clock_zero_pads() {
    let codec = TimeCodec::new();
    assert_eq!(codec.seconds_to_clock(0), "00:00:00");
    assert_eq!(codec.seconds_to_clock(83), "00:01:23");
    assert_eq!(codec.seconds_to_clock(5400), "01:30:00");
    assert_eq!(codec.seconds_to_clock(86399), "23:59:59");
}

#[test]
fn test_time_codec_round_trip_below_one_day() {
    let codec = TimeCodec::new();
    for n in (0u64..86400).step_by(61) {
        assert_eq!(codec.clock_to_seconds(&codec.seconds_to_clock(n)), n);
    }
    assert_eq!(codec.clock_to_seconds(&codec.seconds_to_clock(86399)), 86399);
}

#[tokio::test]
async fn test_probe_interactor_round_trip() {
    let engine = Arc::new(MockEngineAdapter::new());
    engine.script_run(vec![
        "Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'clip.mp4':",
        "  Duration: 00:00:42.10, start: 0.000000, bitrate: 900 kb/s",
        "  Stream #0:0: Video: h264, yuv420p, 1280x720 [SAR 1:1 DAR 16:9], 800 kb/s, 24 fps,",
        "  Stream #0:1: Audio: aac, 48000 Hz, stereo, 2 channels",
    ]);
    let container = AppContainer::with_engine(engine.clone());

    let response = container
        .probe_interactor()
        .execute(ProbeRequest {
            source_name: "clip.mp4".to_string(),
            bytes: vec![0u8; 16],
        })
        .await
        .unwrap();

    let description = response.description;
    assert_eq!(description.container, "mov,mp4,m4a,3gp,3g2,mj2");
    assert_eq!(description.duration, "00:00:42.10");
    assert_eq!(description.video_streams.len(), 1);
    assert_eq!(description.audio_streams.len(), 1);

    // The engine saw the staged input and the minimal probe vector
    assert_eq!(engine.staged_file("clip.mp4"), Some(vec![0u8; 16]));
    assert_eq!(
        engine.invocations(),
        vec![vec!["-hide_banner", "-i", "clip.mp4"]]
    );
}

#[tokio::test]
async fn test_gif_transcode_materializes_literal_output() {
    let engine = Arc::new(MockEngineAdapter::new());
    engine.script_run(vec!["frame=  250 fps=0.0 q=-0.0 size=  512kB"]);
    engine.preload_output("out.gif", b"GIF89a");
    let container = AppContainer::with_engine(engine.clone());

    let response = container
        .transcode_interactor()
        .execute(TranscodeRequest {
            bytes: vec![1, 2, 3],
            profile: gif_profile("clip.mp4", 5, 10),
        })
        .await
        .unwrap();

    assert_eq!(response.artifacts.len(), 1);
    assert_eq!(response.artifacts[0].name, "out.gif");
    assert_eq!(response.artifacts[0].bytes, b"GIF89a");

    let invocations = engine.invocations();
    assert_eq!(
        invocations[0],
        ["-i", "clip.mp4", "-t", "10", "-ss", "5", "-f", "gif", "out.gif"]
    );
}

#[tokio::test]
async fn test_dash_transcode_discovers_artifacts_from_diagnostics() {
    let engine = Arc::new(MockEngineAdapter::new());
    engine.script_run(vec![
        "[dash @ 0x1] Opening 'init-0.mp4.tmp' for writing",
        "[dash @ 0x1] Opening 'init-0.mp4.tmp' for writing",
        "[dash @ 0x1] Opening 'media-0-1.mp4.tmp' for writing",
        "[dash @ 0x1] Opening 'out.mpd.tmp' for writing",
    ]);
    engine.preload_output("init-0.mp4", b"init");
    engine.preload_output("media-0-1.mp4", b"media");
    engine.preload_output("out.mpd", b"<MPD/>");
    let container = AppContainer::with_engine(engine.clone());

    let response = container
        .transcode_interactor()
        .execute(TranscodeRequest {
            bytes: vec![9, 9, 9],
            profile: dash_profile("clip.mp4", 0, 4),
        })
        .await
        .unwrap();

    let names: Vec<&str> = response.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["init-0.mp4", "media-0-1.mp4", "out.mpd"]);
    assert_eq!(response.artifacts[2].bytes, b"<MPD/>");
}

#[tokio::test]
async fn test_dash_transcode_with_silent_diagnostics_yields_no_artifacts() {
    let engine = Arc::new(MockEngineAdapter::new());
    engine.script_run(vec!["nothing useful"]);
    let container = AppContainer::with_engine(engine);

    let response = container
        .transcode_interactor()
        .execute(TranscodeRequest {
            bytes: vec![],
            profile: dash_profile("clip.mp4", 0, 4),
        })
        .await
        .unwrap();

    assert!(response.artifacts.is_empty());
}

#[tokio::test]
async fn test_transcode_rejects_path_sources() {
    let engine = Arc::new(MockEngineAdapter::new());
    let container = AppContainer::with_engine(engine);

    let result = container
        .transcode_interactor()
        .execute(TranscodeRequest {
            bytes: vec![],
            profile: gif_profile("../escape.mp4", 0, 1),
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_render_formats() {
    let engine = Arc::new(MockEngineAdapter::new());
    engine.script_run(vec![
        "Input #0, matroska,webm, from 'clip.mkv':",
        "  Duration: 00:00:05.00, start: 0.000000, bitrate: 100 kb/s",
        "  Stream #0:0: Video: vp9, yuv420p, 640x360, 25 fps,",
    ]);
    let container = AppContainer::with_engine(engine);
    let interactor = container.probe_interactor();

    let description = interactor
        .execute(ProbeRequest {
            source_name: "clip.mkv".to_string(),
            bytes: vec![],
        })
        .await
        .unwrap()
        .description;

    // JSON renders and round-trips
    let json = interactor.render(&description, "json").unwrap();
    let parsed: MediaDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, description);

    // YAML renders
    let yaml = interactor.render(&description, "yaml").unwrap();
    assert!(yaml.contains("vp9"));

    // Text renders sentinels verbatim and includes the trim bound
    let text = interactor.render(&description, "text").unwrap();
    assert!(text.contains("matroska,webm"));
    assert!(text.contains("SAR -1"));
    assert!(text.contains("Trim bound: 00:00:05 (5 s)"));

    // Unknown formats are rejected
    assert!(interactor.render(&description, "xml").is_err());
}
