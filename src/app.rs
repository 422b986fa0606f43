use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::cli::Cli;
use crate::clock::Clock;
use crate::controller::{ControllerConfig, FirstPersonController, InputProfile};
use crate::input::WinitInput;
use crate::joystick::VirtualJoystick;
use crate::renderer::PlaneRenderer;

/// Winit application: owns the window, renderer, camera and controller,
/// and drives the request-next-frame-on-completion loop.
pub struct App {
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    renderer: Option<PlaneRenderer>,
    camera: Camera,
    controller: FirstPersonController,
    input: WinitInput,
    joystick: VirtualJoystick,
    clock: Clock,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let profile = if cli.touch {
            InputProfile::Touch
        } else {
            InputProfile::Desktop
        };

        Self {
            width: cli.width,
            height: cli.height,
            window: None,
            renderer: None,
            camera: Camera::new(cli.width.max(1) as f32 / cli.height.max(1) as f32),
            controller: FirstPersonController::new(profile, ControllerConfig::default()),
            input: WinitInput::new(profile),
            joystick: VirtualJoystick::default(),
            clock: Clock::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("First Person")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(PlaneRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera
                .set_aspect(size.width.max(1) as f32 / size.height.max(1) as f32);

            self.window = Some(window);
            self.renderer = Some(renderer);
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
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.camera
                    .set_aspect(size.width.max(1) as f32 / size.height.max(1) as f32);
            }
            WindowEvent::RedrawRequested => {
                let elapsed = self.clock.elapsed();
                self.clock.tick();
                self.controller.update(&mut self.camera, elapsed);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&self.camera) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("render error: {e}"),
                    }
                }
            }
            other => {
                if let Some(window) = &self.window {
                    self.input.process_window_event(
                        window,
                        &mut self.controller,
                        &mut self.joystick,
                        &other,
                    );
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&mut self.controller, &event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
