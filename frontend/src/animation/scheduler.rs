//! Timer seam for the animations. In the browser every delay is a
//! `setTimeout`; tests drive the same state machines off a virtual clock.

use gloo_timers::callback::Timeout;

pub trait Scheduler: Clone + 'static {
    /// Runs `task` once, `delay_ms` from now. There is no cancellation: a page
    /// navigation tears every pending timer down.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn tasks_run_only_once_due() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, name) in [(300, "late"), (100, "early"), (100, "early-second")] {
            let log = Rc::clone(&log);
            scheduler.after(delay, Box::new(move || log.borrow_mut().push(name)));
        }

        scheduler.advance(99);
        assert!(log.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["early", "early-second"]);

        scheduler.advance(200);
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn chained_tasks_are_timed_from_their_parent() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(RefCell::new(None));

        let inner = scheduler.clone();
        let fired = Rc::clone(&fired_at);
        scheduler.after(
            50,
            Box::new(move || {
                let clock = inner.clone();
                inner.after(25, Box::new(move || *fired.borrow_mut() = Some(clock.now())));
            }),
        );

        scheduler.advance(1_000);
        assert_eq!(*fired_at.borrow(), Some(75));
        assert_eq!(scheduler.now(), 1_000);
    }
}
