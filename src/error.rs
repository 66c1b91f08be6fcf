use thiserror::Error;

/// Everything that can go wrong outside the animation itself.
///
/// The particle layer never fails: a missing surface just means nothing is drawn.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize page content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("browser API error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
