use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::animation::fill::{BAR_CHART, CONFIDENCE_METER};
use crate::animation::scheduler::{BrowserScheduler, Scheduler};
use crate::animation::typing::{self, TypingConfig};
use crate::animation::workflow::{self, WorkflowConfig};
use crate::components::{nav_bar, screenshot, tour_progress};
use crate::config;
use crate::dom;
use crate::roi;
use crate::tour::{self, PageBehavior, TOUR};

/// Runs `start` once the document is parsed, immediately if that already happened.
pub fn run_when_ready(start: fn()) {
    let Some(document) = dom::document() else {
        warn!("No document, nothing to start");
        return;
    };
    if document.ready_state() != "loading" {
        start();
        return;
    }

    let listener = Closure::once(move || start());
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", listener.as_ref().unchecked_ref())
    {
        warn!("Could not wait for DOMContentLoaded: {:?}", err);
    }
    listener.forget();
}

/// Wires every tour feature to whatever the current page contains.
pub fn boot() {
    let Some(document) = dom::document() else {
        warn!("No document to boot the tour on");
        return;
    };
    let scheduler = BrowserScheduler;

    let current = tour::current_step_index();
    let step = &TOUR[current];
    info!("Tour page {} ({} of {})", step.label, current + 1, TOUR.len());

    tour_progress::mount(&document, current);
    nav_bar::mount(&document, current);
    screenshot::mount_all(&document);
    CONFIDENCE_METER.run(&document, scheduler);
    BAR_CHART.run(&document, scheduler);

    match step.behavior {
        PageBehavior::Workflow {
            container_id,
            step_delay_ms,
        } => workflow::simulate_workflow(
            &document,
            container_id,
            scheduler,
            WorkflowConfig::default().with_step_delay(step_delay_ms),
        ),
        PageBehavior::RoiCalculator => roi::init_roi_calculator(&document),
        PageBehavior::None => {}
    }

    scheduler.after(
        config::TYPE_IN_START_DELAY_MS,
        Box::new(move || {
            let speed = TypingConfig {
                speed_ms: config::TYPE_IN_SPEED_MS,
            };
            typing::init_type_in_animations(&document, scheduler, speed);
        }),
    );
}
