use glam::Vec2;

/// Lifecycle and movement events emitted by the virtual joystick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEvent {
    /// A touch claimed the stick
    Added,
    /// Current deflection from the anchor, window coordinates, clamped
    Moved(Vec2),
    /// The owning touch lifted
    Removed,
}

pub const DEFAULT_MAX_RADIUS: f32 = 64.0;

/// In-process stand-in for a virtual joystick overlay.
///
/// Owns at most one movement touch, anchored where that touch landed, and
/// reports deflection clamped to `max_radius`. Touches it does not own
/// produce no events; routing (left half of the screen) is the input
/// adapter's job.
pub struct VirtualJoystick {
    touch_id: Option<u64>,
    anchor: Vec2,
    max_radius: f32,
}

impl VirtualJoystick {
    pub fn new(max_radius: f32) -> Self {
        Self {
            touch_id: None,
            anchor: Vec2::ZERO,
            max_radius,
        }
    }

    /// Whether a touch currently owns the stick.
    pub fn active(&self) -> bool {
        self.touch_id.is_some()
    }

    pub fn touch_started(&mut self, id: u64, pos: Vec2) -> Option<JoystickEvent> {
        if self.touch_id.is_some() {
            return None;
        }
        self.touch_id = Some(id);
        self.anchor = pos;
        Some(JoystickEvent::Added)
    }

    pub fn touch_moved(&mut self, id: u64, pos: Vec2) -> Option<JoystickEvent> {
        if self.touch_id != Some(id) {
            return None;
        }
        let deflection = (pos - self.anchor).clamp_length_max(self.max_radius);
        Some(JoystickEvent::Moved(deflection))
    }

    pub fn touch_ended(&mut self, id: u64) -> Option<JoystickEvent> {
        if self.touch_id != Some(id) {
            return None;
        }
        self.touch_id = None;
        Some(JoystickEvent::Removed)
    }
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_touch_claims_stick() {
        let mut stick = VirtualJoystick::default();

        assert_eq!(
            stick.touch_started(1, Vec2::new(100.0, 400.0)),
            Some(JoystickEvent::Added)
        );
        assert!(stick.active());

        // A second touch is not picked up.
        assert_eq!(stick.touch_started(2, Vec2::new(120.0, 400.0)), None);
    }

    #[test]
    fn test_deflection_relative_to_anchor() {
        let mut stick = VirtualJoystick::default();
        stick.touch_started(1, Vec2::new(100.0, 400.0));

        let event = stick.touch_moved(1, Vec2::new(130.0, 360.0));
        assert_eq!(event, Some(JoystickEvent::Moved(Vec2::new(30.0, -40.0))));
    }

    #[test]
    fn test_deflection_clamped_to_max_radius() {
        let mut stick = VirtualJoystick::new(50.0);
        stick.touch_started(1, Vec2::new(100.0, 400.0));

        let event = stick.touch_moved(1, Vec2::new(400.0, 0.0));
        match event {
            Some(JoystickEvent::Moved(v)) => assert!((v.length() - 50.0).abs() < 1e-3),
            other => panic!("expected Moved, got {:?}", other),
        }
    }

    #[test]
    fn test_unowned_touch_produces_no_events() {
        let mut stick = VirtualJoystick::default();
        stick.touch_started(1, Vec2::new(100.0, 400.0));

        assert_eq!(stick.touch_moved(2, Vec2::new(150.0, 400.0)), None);
        assert_eq!(stick.touch_ended(2), None);
        assert!(stick.active());
    }

    #[test]
    fn test_release_emits_removed_and_frees_stick() {
        let mut stick = VirtualJoystick::default();
        stick.touch_started(1, Vec2::new(100.0, 400.0));

        assert_eq!(stick.touch_ended(1), Some(JoystickEvent::Removed));
        assert!(!stick.active());

        // Stick can be claimed again afterwards.
        assert_eq!(
            stick.touch_started(2, Vec2::new(90.0, 410.0)),
            Some(JoystickEvent::Added)
        );
    }
}
