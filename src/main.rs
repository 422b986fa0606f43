use clap::Parser;
use winit::event_loop::EventLoop;

use first_person::app::App;
use first_person::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli);

    println!("First Person - Controls: click to capture the mouse, WASD to move, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
