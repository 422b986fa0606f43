use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Fullscreen, Window};

use crate::controller::{Button, FirstPersonController, InputProfile};
use crate::joystick::VirtualJoystick;

/// Adapter that bridges winit events to the controller and joystick.
///
/// All host interaction lives here: pointer capture, fullscreen, touch
/// routing. The controller itself only ever sees plain values.
pub struct WinitInput {
    profile: InputProfile,
}

impl WinitInput {
    pub fn new(profile: InputProfile) -> Self {
        Self { profile }
    }

    /// Process a winit WindowEvent, forwarding input to the controller.
    pub fn process_window_event(
        &mut self,
        window: &Window,
        controller: &mut FirstPersonController,
        joystick: &mut VirtualJoystick,
        event: &WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => controller.button_pressed(button),
                            ElementState::Released => controller.button_released(button),
                        }
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.engage(window, controller),
            WindowEvent::Focused(false) => {
                if self.profile == InputProfile::Desktop && controller.engaged() {
                    self.disengage(window, controller);
                }
            }
            WindowEvent::Touch(touch) => self.process_touch(window, controller, joystick, touch),
            _ => {}
        }
    }

    /// Process a winit DeviceEvent. Raw mouse motion is the native
    /// equivalent of pointer-locked movement deltas.
    pub fn process_device_event(
        &mut self,
        controller: &mut FirstPersonController,
        event: &DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            controller.mouse_look(*dx as f32, *dy as f32);
        }
    }

    /// Click-to-engage. On desktop this requests exclusive pointer capture
    /// and fullscreen; capture confirmation flips the engagement gate. On
    /// touch there is no OS-level capture, so engagement is immediate.
    fn engage(&mut self, window: &Window, controller: &mut FirstPersonController) {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));

        if self.profile == InputProfile::Touch {
            controller.set_engaged(true);
            return;
        }

        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                controller.set_engaged(true);
                log::info!("pointer captured");
            }
            Err(err) => {
                // Denied by the host. Stay disengaged; the user can click
                // again.
                log::warn!("pointer capture denied: {err}");
            }
        }
    }

    fn disengage(&mut self, window: &Window, controller: &mut FirstPersonController) {
        if window.set_cursor_grab(CursorGrabMode::None).is_ok() {
            window.set_cursor_visible(true);
        }
        controller.set_engaged(false);
        log::info!("pointer capture lost");
    }

    fn process_touch(
        &mut self,
        window: &Window,
        controller: &mut FirstPersonController,
        joystick: &mut VirtualJoystick,
        touch: &Touch,
    ) {
        let pos = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        let width = window.inner_size().width as f32;
        let route_to_joystick = self.profile == InputProfile::Touch && pos.x <= width / 2.0;

        match touch.phase {
            TouchPhase::Started => {
                if route_to_joystick {
                    if let Some(event) = joystick.touch_started(touch.id, pos) {
                        controller.joystick_event(event);
                    }
                }
                controller.touch_started(touch.id, pos, width);
            }
            TouchPhase::Moved => {
                if let Some(event) = joystick.touch_moved(touch.id, pos) {
                    controller.joystick_event(event);
                }
                controller.touch_moved(touch.id, pos);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if let Some(event) = joystick.touch_ended(touch.id) {
                    controller.joystick_event(event);
                }
                controller.touch_ended(touch.id);
            }
        }
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            _ => None,
        }
    }
}
