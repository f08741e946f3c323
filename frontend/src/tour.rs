//! The fixed tour: page order, labels, where the visitor currently is, and
//! what the progress indicator and navigation bar should show for that position.

use log::{debug, warn};
use web_sys::window;

/// Page-specific initialization run once the page has loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageBehavior {
    None,
    Workflow {
        container_id: &'static str,
        step_delay_ms: u32,
    },
    RoiCalculator,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourStep {
    pub page_file: &'static str,
    pub label: &'static str,
    pub behavior: PageBehavior,
}

pub const TOUR: [TourStep; 6] = [
    TourStep {
        page_file: "index.html",
        label: "Home",
        behavior: PageBehavior::None,
    },
    TourStep {
        page_file: "knowledge.html",
        label: "Knowledge",
        behavior: PageBehavior::None,
    },
    TourStep {
        page_file: "automation.html",
        label: "Automation",
        behavior: PageBehavior::Workflow {
            container_id: "workflow-viz",
            step_delay_ms: 900,
        },
    },
    TourStep {
        page_file: "agentic.html",
        label: "Agentic",
        behavior: PageBehavior::Workflow {
            container_id: "workflow-viz-agentic",
            step_delay_ms: 700,
        },
    },
    TourStep {
        page_file: "autopilot.html",
        label: "AutoPilot",
        behavior: PageBehavior::None,
    },
    TourStep {
        page_file: "roi.html",
        label: "ROI",
        behavior: PageBehavior::RoiCalculator,
    },
];

pub fn home_file() -> &'static str {
    TOUR[0].page_file
}

/// Filename component of a location path. An empty component (`/`, `/tour/`)
/// means the first page of the tour.
///
/// `location.pathname` is percent-encoded, so the component is decoded before
/// it is compared with the tour's file names (`my%20page.html` reads as
/// `my page.html`). Tour file names are plain ASCII, so their lookup is the
/// same either way; names that do not decode to UTF-8 are used as-is.
pub fn page_file_from_path(path: &str) -> String {
    let raw = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    if raw.is_empty() {
        return home_file().to_string();
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Position of `file` in the tour. Pages outside the tour are treated as the
/// first step rather than an error.
pub fn step_index_for(file: &str) -> usize {
    TOUR.iter()
        .position(|step| step.page_file == file)
        .unwrap_or(0)
}

pub fn current_page_file() -> String {
    let path = window().and_then(|w| w.location().pathname().ok());
    match path {
        Some(path) => page_file_from_path(&path),
        None => home_file().to_string(),
    }
}

pub fn current_step_index() -> usize {
    step_index_for(&current_page_file())
}

/// Full page load to `file`; every piece of state is rebuilt on arrival.
pub fn goto(file: &str) {
    debug!("Navigating to {}", file);
    let Some(window) = window() else {
        warn!("No window to navigate with");
        return;
    };
    if let Err(err) = window.location().set_href(file) {
        warn!("Navigation to {} failed: {:?}", file, err);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

impl StepStatus {
    pub fn classify(index: usize, current: usize) -> Self {
        if index < current {
            StepStatus::Completed
        } else if index == current {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            StepStatus::Completed => Some("completed"),
            StepStatus::Active => Some("active"),
            StepStatus::Upcoming => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProgressMarker {
    Step {
        label: &'static str,
        status: StepStatus,
    },
    /// Separator between two consecutive steps, classified by the earlier one.
    Line { status: StepStatus },
}

pub fn progress_markers(current: usize) -> Vec<ProgressMarker> {
    let mut markers = Vec::with_capacity(TOUR.len() * 2 - 1);
    for (i, step) in TOUR.iter().enumerate() {
        let status = StepStatus::classify(i, current);
        markers.push(ProgressMarker::Step {
            label: step.label,
            status,
        });
        if i + 1 < TOUR.len() {
            markers.push(ProgressMarker::Line { status });
        }
    }
    markers
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub target: &'static str,
}

/// Which controls the bottom navigation bar shows for a tour position.
#[derive(Clone, Debug, PartialEq)]
pub struct NavPlan {
    pub back: Option<NavLink>,
    pub home: Option<NavLink>,
    pub forward: NavLink,
}

impl NavPlan {
    pub fn for_step(current: usize) -> Self {
        let current = current.min(TOUR.len() - 1);
        let is_first = current == 0;
        let is_last = current == TOUR.len() - 1;

        let back = (!is_first).then(|| NavLink {
            label: format!("\u{2190} {}", TOUR[current - 1].label),
            target: TOUR[current - 1].page_file,
        });
        let home = (!is_first).then(|| NavLink {
            label: "\u{2302} Home".to_string(),
            target: home_file(),
        });
        let forward = if is_last {
            NavLink {
                label: "\u{2302} Back to Home".to_string(),
                target: home_file(),
            }
        } else {
            NavLink {
                label: format!("{} \u{2192}", TOUR[current + 1].label),
                target: TOUR[current + 1].page_file,
            }
        };

        NavPlan { back, home, forward }
    }
}
