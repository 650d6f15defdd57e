// Application layer - Use case interactors

pub mod container;
pub mod probe_interactor;
pub mod transcode_interactor;

// Re-export interactors
pub use container::AppContainer;
pub use probe_interactor::ProbeInteractor;
pub use transcode_interactor::TranscodeInteractor;
