// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod mock_engine;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FfmpegExecAdapter;
pub use mock_engine::MockEngineAdapter;
pub use toml_config::AppConfig;
