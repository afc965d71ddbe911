use clap::Parser;
use std::process;

use ink_frame::cli::{Args, Settings};
use ink_frame::compose::FrameComposer;
use ink_frame::config::Config;
use ink_frame::display::FramebufferSink;
use ink_frame::host::{self, PatternHost, SHUTDOWN_REQUESTED};
use ink_frame::input::RawInputSource;
use ink_frame::session::Session;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}

#[cfg(target_os = "linux")]
fn open_input(settings: &Settings) -> Option<Box<dyn RawInputSource>> {
    match ink_frame::input::EvdevInput::open(&settings.input, settings.grab) {
        Ok(input) => Some(Box::new(input)),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn open_input(_settings: &Settings) -> Option<Box<dyn RawInputSource>> {
    log::warn!("Raw input devices are only supported on Linux");
    None
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let settings = match Settings::resolve(&args, config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    log::info!("Display mode: {}", settings.mode);

    let sink = match FramebufferSink::open(
        &settings.framebuffer,
        &settings.refresh,
        settings.frame_len,
    ) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let input = open_input(&settings);

    let composer = match FrameComposer::new(settings.width, settings.height, settings.mode) {
        Ok(composer) => composer,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let mut session = match Session::open(composer, Box::new(sink), input) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = host::setup_ctrlc_handler() {
        log::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let mut pattern = PatternHost::default();
    let result = host::run(
        &mut session,
        &mut pattern,
        settings.run_options(),
        &SHUTDOWN_REQUESTED,
    );
    // Close the devices before exiting.
    drop(session);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
