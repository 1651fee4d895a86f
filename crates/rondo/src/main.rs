use clap::Parser;
use relm4::prelude::*;
use rondo::config;
use rondo::gui::app::AppModel;
use rondo::sys::runtime;
use rondo_core::DialController;

#[derive(Parser, Debug)]
#[command(name = "rondo", version, about, long_about = None)]
struct Cli {
    /// Start on this value instead of the configured one
    #[arg(short, long)]
    value: Option<i64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = config::load_or_setup();
    let mut options = config.dial_options();
    if let Some(value) = cli.value {
        options.initial = value.clamp(1, i64::from(options.count.max(1))) as u32;
    }
    let controller = DialController::new(options);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.troia.rondo").with_args(Vec::new());

    app.run::<AppModel>((controller, rx));
}
