#[cfg(not(target_arch = "wasm32"))]
use portfolio::{
    background::{ParticleBackground, Viewport},
    canvas::DrawList,
    config::ViewerConfig,
    error::Result,
    page::Page,
    renderer::Renderer,
};
#[cfg(not(target_arch = "wasm32"))]
use std::{path::PathBuf, sync::Arc};
#[cfg(not(target_arch = "wasm32"))]
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

#[cfg(not(target_arch = "wasm32"))]
struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    background: Option<ParticleBackground<DrawList>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            background: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        self.window = Some(window.clone());

        // Initialize renderer
        let size = window.inner_size();
        let renderer = pollster::block_on(Renderer::new(window))?;
        self.renderer = Some(renderer);

        // Initialize particle background
        self.background = Some(ParticleBackground::mount(
            DrawList::default(),
            Viewport::new(size.width, size.height),
        ));

        Ok(())
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(background)) = (&mut self.renderer, &mut self.background) else {
            return;
        };

        background.frame();

        match renderer.render(background.canvas()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, closing viewer");
                self.shutdown(event_loop);
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(background) = &mut self.background {
            background.unmount();
        }
        event_loop.exit();
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("Failed to start viewer: {}", e);
                eprintln!("\n❌ Failed to start viewer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                if let Some(background) = &mut self.background {
                    background.resize(Viewport::new(physical_size.width, physical_size.height));
                }
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let running = self.background.as_ref().is_some_and(|b| b.is_running());
        if let (true, Some(renderer)) = (running, &self.renderer) {
            renderer.window().request_redraw();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Set up logging
    env_logger::init();

    let config = ViewerConfig::from_env();
    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None => run_viewer(config),
        Some("export") => {
            let path = args
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| config.export_path.clone());
            run_export(&path)
        }
        Some("json") => run_json(),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("❌ Unknown command: {}\n", other);
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_usage() {
    println!("Usage: portfolio [COMMAND]");
    println!();
    println!("Commands:");
    println!("   (none)          Open the particle background viewer (Esc to quit)");
    println!("   export [PATH]   Write the portfolio page as HTML");
    println!("   json            Print the page content as JSON");
}

/// Viewer mode: the hero's particle layer in a native window
#[cfg(not(target_arch = "wasm32"))]
fn run_viewer(config: ViewerConfig) -> Result<()> {
    println!("\n✨ {}", config.title);
    println!("   Press ESC to quit\n");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Export mode: render the page once and write it to disk
#[cfg(not(target_arch = "wasm32"))]
fn run_export(path: &std::path::Path) -> Result<()> {
    let page = Page::portfolio();
    page.write_html(path)?;
    println!("📄 Page written to {}", path.display());
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    println!("   Build the wasm package into {}/pkg to animate it", dir.display());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn run_json() -> Result<()> {
    println!("{}", Page::portfolio().to_json()?);
    Ok(())
}

// The browser entry point lives in the library (`web::start`)
#[cfg(target_arch = "wasm32")]
fn main() {}
