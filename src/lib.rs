pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod controller;
pub mod input;
pub mod joystick;
pub mod renderer;
pub mod scene;

pub use camera::Camera;
pub use controller::{Button, ControllerConfig, FirstPersonController, InputProfile};
pub use joystick::{JoystickEvent, VirtualJoystick};
