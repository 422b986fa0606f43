use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::joystick::JoystickEvent;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
}

/// Which input surface drives the controller.
///
/// Chosen once at construction instead of sniffed from the environment, so
/// the controller behaves identically on every host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProfile {
    /// Keyboard movement + captured-mouse look.
    Desktop,
    /// Virtual joystick movement + right-half touch look.
    Touch,
}

/// Tuning constants for the controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Degrees of yaw per pixel of horizontal look delta
    pub look_speed_x: f32,
    /// Degrees of pitch per pixel of vertical look delta
    pub look_speed_y: f32,
    /// Lower pitch limit in degrees
    pub pitch_min: f32,
    /// Upper pitch limit in degrees
    pub pitch_max: f32,
    /// Intent units are divided by this per frame to get world displacement
    pub move_divisor: f32,
    /// Joystick deflection (pixels) is divided by this to get intent
    pub joystick_divisor: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            look_speed_x: 0.5,
            look_speed_y: 0.5,
            pitch_min: -90.0,
            pitch_max: 90.0,
            move_divisor: 20.0,
            joystick_divisor: 50.0,
        }
    }
}

/// One tracked touch: id plus the last reported position, which serves as
/// the reference point for the next relative delta.
#[derive(Debug, Clone, Copy)]
struct TouchPoint {
    id: u64,
    last: Vec2,
}

const MAX_TOUCHES: usize = 2;

/// First-person camera controller.
///
/// Holds directional intent (what the user wants to do) and accumulated
/// look deltas, and folds both into a camera pose once per frame via
/// [`update`](Self::update). It never talks to the windowing system itself;
/// the winit adapter feeds it plain values, which keeps it deterministic.
pub struct FirstPersonController {
    profile: InputProfile,
    config: ControllerConfig,
    engaged: bool,
    /// x = strafe intent, z = forward/back intent (negative z is forward)
    intent: Vec3,
    /// x = accumulated yaw delta, y = accumulated pitch delta, in degrees
    look: Vec2,
    touches: [Option<TouchPoint>; MAX_TOUCHES],
    /// Id of the touch currently driving the look, if any
    look_touch: Option<u64>,
    surface_width: f32,
}

impl FirstPersonController {
    pub fn new(profile: InputProfile, config: ControllerConfig) -> Self {
        Self {
            profile,
            config,
            engaged: false,
            intent: Vec3::ZERO,
            look: Vec2::ZERO,
            touches: [None; MAX_TOUCHES],
            look_touch: None,
            surface_width: 0.0,
        }
    }

    pub fn profile(&self) -> InputProfile {
        self.profile
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Whether look input currently reaches the accumulators.
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Set by the input adapter: on desktop when pointer capture is
    /// confirmed or lost, on touch immediately on the first interaction.
    pub fn set_engaged(&mut self, engaged: bool) {
        self.engaged = engaged;
    }

    /// Current movement intent (x = strafe, z = forward/back).
    pub fn intent(&self) -> Vec3 {
        self.intent
    }

    /// Accumulated look deltas in degrees (x = yaw, y = pitch).
    pub fn look(&self) -> Vec2 {
        self.look
    }

    /// Key press. Last-processed key wins per axis; there is no stacking.
    /// Ignored under the touch profile, which has no keyboard.
    pub fn button_pressed(&mut self, button: Button) {
        if self.profile == InputProfile::Touch {
            return;
        }
        match button {
            Button::KeyW => self.intent.z = -1.0,
            Button::KeyS => self.intent.z = 1.0,
            Button::KeyA => self.intent.x = -1.0,
            Button::KeyD => self.intent.x = 1.0,
        }
    }

    /// Key release. Releasing either key of a pair zeroes that axis.
    pub fn button_released(&mut self, button: Button) {
        if self.profile == InputProfile::Touch {
            return;
        }
        match button {
            Button::KeyW | Button::KeyS => self.intent.z = 0.0,
            Button::KeyA | Button::KeyD => self.intent.x = 0.0,
        }
    }

    /// Relative mouse delta from the captured pointer. Gated on engagement
    /// so stray motion before capture never rotates the view.
    pub fn mouse_look(&mut self, dx: f32, dy: f32) {
        if !self.engaged {
            return;
        }
        self.apply_look_delta(dx, dy);
    }

    /// A touch landed on the surface. Up to two concurrent touches are
    /// tracked; whichever one is in the right half of the surface becomes
    /// the look touch, taking over from any previous look touch.
    pub fn touch_started(&mut self, id: u64, pos: Vec2, surface_width: f32) {
        self.surface_width = surface_width;
        if self.profile == InputProfile::Touch {
            // Touch has no OS-level capture concept, so the first
            // interaction engages without waiting for confirmation.
            self.engaged = true;
        }

        if let Some(point) = self.touches.iter_mut().flatten().find(|p| p.id == id) {
            point.last = pos;
        } else if let Some(slot) = self.touches.iter_mut().find(|s| s.is_none()) {
            *slot = Some(TouchPoint { id, last: pos });
        } else {
            // Already tracking the maximum number of touches.
            return;
        }

        if pos.x > self.surface_width / 2.0 {
            self.look_touch = Some(id);
        }
    }

    /// A tracked touch moved. Applies a relative delta from the last
    /// reference point, then advances the reference point. Touches in the
    /// left half and unknown ids alter nothing.
    pub fn touch_moved(&mut self, id: u64, pos: Vec2) {
        if !self.engaged {
            return;
        }
        if self.look_touch != Some(id) {
            return;
        }
        let Some(point) = self.touches.iter_mut().flatten().find(|p| p.id == id) else {
            return;
        };
        if pos.x <= self.surface_width / 2.0 {
            return;
        }
        let delta = pos - point.last;
        point.last = pos;
        self.apply_look_delta(delta.x, delta.y);
    }

    /// A touch lifted or was cancelled.
    pub fn touch_ended(&mut self, id: u64) {
        for slot in self.touches.iter_mut() {
            if slot.map(|p| p.id) == Some(id) {
                *slot = None;
            }
        }
        if self.look_touch == Some(id) {
            self.look_touch = None;
        }
    }

    /// Event from the virtual joystick overlay. Deflection is in window
    /// coordinates (y grows downward), so pushing up maps to forward.
    pub fn joystick_event(&mut self, event: JoystickEvent) {
        match event {
            JoystickEvent::Added => {}
            JoystickEvent::Moved(v) => {
                self.intent.z = v.y / self.config.joystick_divisor;
                self.intent.x = v.x / self.config.joystick_divisor;
            }
            JoystickEvent::Removed => {
                self.intent.x = 0.0;
                self.intent.z = 0.0;
            }
        }
    }

    /// Per-frame pose update, called by the render loop before each draw.
    ///
    /// Movement is deliberately not scaled by `_elapsed_seconds`: like the
    /// behavior it reproduces, displacement is per-frame and therefore
    /// frame-rate dependent. The parameter stays in the signature so callers
    /// see the seam where delta-time scaling would go.
    pub fn update(&mut self, camera: &mut Camera, _elapsed_seconds: f32) {
        // The right axis (column 0 of the YXZ rotation) is horizontal for
        // zero roll, so forward = up x right keeps movement in the ground
        // plane regardless of pitch.
        let right = camera.right_axis();
        let forward = camera.up.cross(right);

        camera.position += forward * (-self.intent.z / self.config.move_divisor);
        camera.position += right * (self.intent.x / self.config.move_divisor);

        camera.yaw = (-self.look.x).to_radians();
        camera.pitch = self.look.y.to_radians();
    }

    fn apply_look_delta(&mut self, dx: f32, dy: f32) {
        self.look.x += dx * self.config.look_speed_x;
        self.look.y -= dy * self.config.look_speed_y;
        self.look.y = self.look.y.clamp(self.config.pitch_min, self.config.pitch_max);
    }
}
