// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "first-person")]
#[command(about = "First-person camera demo", long_about = None)]
pub struct Cli {
    /// Use the touch input profile (virtual joystick + touch look)
    /// instead of keyboard + captured mouse
    #[arg(long = "touch", default_value = "false")]
    pub touch: bool,

    /// Initial window width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,
}
