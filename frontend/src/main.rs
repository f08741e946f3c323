use log::info;

mod assets;
mod config;
mod dom;
mod roi;
mod startup;
mod tour;

mod animation {
    pub mod fill;
    pub mod scheduler;
    pub mod surface;
    pub mod typing;
    pub mod workflow;
}

mod components {
    pub mod nav_bar;
    pub mod screenshot;
    pub mod tour_progress;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting product tour");
    startup::run_when_ready(startup::boot);
}
