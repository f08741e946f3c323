//! Walks a row of `.workflow-step` elements through active → completed, one
//! step per tick, lighting the `.workflow-connector` elements between them.

use log::{debug, info};
use web_sys::Document;

use super::scheduler::Scheduler;
use super::surface::Surface;
use crate::config;
use crate::dom;

pub const STEP_SELECTOR: &str = ".workflow-step";
pub const CONNECTOR_SELECTOR: &str = ".workflow-connector";

pub const ACTIVE_CLASS: &str = "active";
pub const COMPLETED_CLASS: &str = "completed";
pub const PULSE_CLASS: &str = "animate-flow-pulse";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkflowConfig {
    pub start_delay_ms: u32,
    pub step_delay_ms: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: config::WORKFLOW_START_DELAY_MS,
            step_delay_ms: config::DEFAULT_WORKFLOW_STEP_MS,
        }
    }
}

impl WorkflowConfig {
    pub fn with_step_delay(mut self, step_delay_ms: u32) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Step(usize),
    Connector(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Activate,
    Complete,
}

/// Tick `k` completes step `k - 1` and activates step `k`. With `n` steps
/// there are `n + 1` ticks; the last one only completes the final step.
#[derive(Clone, Debug)]
pub struct WorkflowSim {
    steps: usize,
    connectors: usize,
    tick: usize,
}

impl WorkflowSim {
    pub fn new(steps: usize, connectors: usize) -> Self {
        Self {
            steps,
            connectors,
            tick: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.tick > self.steps
    }

    pub fn advance(&mut self) -> Vec<(Part, Change)> {
        if self.is_finished() {
            return Vec::new();
        }

        let k = self.tick;
        let mut changes = Vec::with_capacity(4);
        if k > 0 {
            changes.push((Part::Step(k - 1), Change::Complete));
            if k - 1 < self.connectors {
                changes.push((Part::Connector(k - 1), Change::Complete));
            }
        }
        if k < self.steps {
            changes.push((Part::Step(k), Change::Activate));
            if k < self.connectors {
                changes.push((Part::Connector(k), Change::Activate));
            }
        }
        self.tick += 1;
        changes
    }
}

struct Track<S> {
    steps: Vec<S>,
    connectors: Vec<S>,
}

impl<S: Surface> Track<S> {
    fn reset(&self) {
        for el in self.steps.iter().chain(self.connectors.iter()) {
            el.remove_class(ACTIVE_CLASS);
            el.remove_class(COMPLETED_CLASS);
            el.remove_class(PULSE_CLASS);
        }
    }

    fn apply(&self, part: Part, change: Change) {
        let target = match part {
            Part::Step(i) => self.steps.get(i),
            Part::Connector(i) => self.connectors.get(i),
        };
        let Some(el) = target else {
            return;
        };
        match change {
            Change::Activate => {
                el.add_class(ACTIVE_CLASS);
                if let Part::Step(_) = part {
                    el.add_class(PULSE_CLASS);
                }
            }
            Change::Complete => {
                el.remove_class(ACTIVE_CLASS);
                el.add_class(COMPLETED_CLASS);
            }
        }
    }
}

/// No-op when the page has no container with `container_id`.
pub fn simulate_workflow<C: Scheduler>(
    document: &Document,
    container_id: &str,
    scheduler: C,
    config: WorkflowConfig,
) {
    let Some(container) = document.get_element_by_id(container_id) else {
        debug!("No #{} on this page, skipping workflow", container_id);
        return;
    };
    let steps = dom::query_all_in(&container, STEP_SELECTOR);
    let connectors = dom::query_all_in(&container, CONNECTOR_SELECTOR);
    info!(
        "Simulating #{}: {} steps, {}ms per step",
        container_id,
        steps.len(),
        config.step_delay_ms
    );
    run_workflow(steps, connectors, scheduler, config);
}

/// Resets every element to neutral, then starts the tick chain.
pub fn run_workflow<S: Surface, C: Scheduler>(
    steps: Vec<S>,
    connectors: Vec<S>,
    scheduler: C,
    config: WorkflowConfig,
) {
    let track = Track { steps, connectors };
    track.reset();
    let sim = WorkflowSim::new(track.steps.len(), track.connectors.len());
    schedule_tick(track, sim, scheduler, config.start_delay_ms, config.step_delay_ms);
}

fn schedule_tick<S: Surface, C: Scheduler>(
    track: Track<S>,
    mut sim: WorkflowSim,
    scheduler: C,
    delay_ms: u32,
    step_delay_ms: u32,
) {
    let next = scheduler.clone();
    scheduler.after(
        delay_ms,
        Box::new(move || {
            for (part, change) in sim.advance() {
                track.apply(part, change);
            }
            if !sim.is_finished() {
                schedule_tick(track, sim, next, step_delay_ms, step_delay_ms);
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scheduler::ManualScheduler;
    use crate::animation::surface::FakeSurface;
    use proptest::prelude::*;

    fn surfaces(n: usize) -> Vec<FakeSurface> {
        (0..n).map(|_| FakeSurface::new()).collect()
    }

    fn count(els: &[FakeSurface], class: &str) -> usize {
        els.iter().filter(|el| el.has_class(class)).count()
    }

    #[test]
    fn first_tick_only_activates() {
        let mut sim = WorkflowSim::new(3, 2);
        assert_eq!(
            sim.advance(),
            vec![
                (Part::Step(0), Change::Activate),
                (Part::Connector(0), Change::Activate)
            ]
        );
    }

    #[test]
    fn last_connector_is_skipped() {
        let mut sim = WorkflowSim::new(3, 2);
        sim.advance();
        sim.advance();
        assert_eq!(
            sim.advance(),
            vec![
                (Part::Step(1), Change::Complete),
                (Part::Connector(1), Change::Complete),
                (Part::Step(2), Change::Activate),
            ]
        );
        assert_eq!(sim.advance(), vec![(Part::Step(2), Change::Complete)]);
        assert!(sim.is_finished());
        assert!(sim.advance().is_empty());
    }

    #[test]
    fn empty_workflow_finishes_immediately() {
        let mut sim = WorkflowSim::new(0, 0);
        assert!(sim.advance().is_empty());
        assert!(sim.is_finished());
    }

    #[test]
    fn timing_follows_start_and_step_delays() {
        let scheduler = ManualScheduler::new();
        let steps = surfaces(3);
        let connectors = surfaces(2);
        let config = WorkflowConfig::default().with_step_delay(900);

        run_workflow(steps.clone(), connectors.clone(), scheduler.clone(), config);

        scheduler.advance(499);
        assert_eq!(count(&steps, ACTIVE_CLASS), 0);

        scheduler.advance(1);
        assert!(steps[0].has_class(ACTIVE_CLASS));
        assert!(steps[0].has_class(PULSE_CLASS));
        assert!(connectors[0].has_class(ACTIVE_CLASS));

        scheduler.advance(900);
        assert!(steps[0].has_class(COMPLETED_CLASS));
        assert!(!steps[0].has_class(ACTIVE_CLASS));
        assert!(connectors[0].has_class(COMPLETED_CLASS));
        assert!(steps[1].has_class(ACTIVE_CLASS));
        assert!(connectors[1].has_class(ACTIVE_CLASS));
        assert!(!steps[2].has_class(ACTIVE_CLASS));
    }

    #[test]
    fn reset_clears_previous_run() {
        let scheduler = ManualScheduler::new();
        let steps = vec![
            FakeSurface::new().with_class(COMPLETED_CLASS).with_class(PULSE_CLASS),
            FakeSurface::new().with_class(ACTIVE_CLASS),
        ];
        let connectors = vec![FakeSurface::new().with_class(COMPLETED_CLASS)];

        run_workflow(steps.clone(), connectors.clone(), scheduler.clone(), WorkflowConfig::default());

        assert_eq!(count(&steps, COMPLETED_CLASS), 0);
        assert_eq!(count(&steps, ACTIVE_CLASS), 0);
        assert_eq!(count(&steps, PULSE_CLASS), 0);
        assert_eq!(count(&connectors, COMPLETED_CLASS), 0);
    }

    proptest! {
        #[test]
        fn every_step_completes(n in 0usize..12, step_delay in 1u32..2_000) {
            let scheduler = ManualScheduler::new();
            let steps = surfaces(n);
            let connectors = surfaces(n.saturating_sub(1));
            let config = WorkflowConfig::default().with_step_delay(step_delay);

            run_workflow(steps.clone(), connectors.clone(), scheduler.clone(), config);
            scheduler.run_all();

            prop_assert_eq!(count(&steps, COMPLETED_CLASS), n);
            prop_assert_eq!(count(&steps, ACTIVE_CLASS), 0);
            prop_assert_eq!(count(&connectors, COMPLETED_CLASS), connectors.len());
            prop_assert_eq!(count(&connectors, ACTIVE_CLASS), 0);
            prop_assert_eq!(scheduler.pending(), 0);
        }
    }
}
