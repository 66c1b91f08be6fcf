// Library exports for the native viewer and the WebAssembly page
pub mod background;
pub mod canvas;
pub mod config;
pub mod error;
pub mod page;
pub mod particle_system;

#[cfg(not(target_arch = "wasm32"))]
pub mod line_overlay;
#[cfg(not(target_arch = "wasm32"))]
pub mod renderer;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

// Re-export main types
pub use background::{FrameStats, ParticleBackground, Viewport};
pub use canvas::{Canvas, DrawList, Rgba};
pub use config::ViewerConfig;
pub use error::{PortfolioError, Result};
pub use page::{Page, Section};
pub use particle_system::{Connection, Particle, ParticleSystem};

#[cfg(not(target_arch = "wasm32"))]
pub use renderer::Renderer;
