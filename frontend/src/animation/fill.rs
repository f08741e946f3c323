use log::debug;
use web_sys::Document;

use super::scheduler::Scheduler;
use super::surface::Surface;
use crate::config;
use crate::dom;

/// Width animation for meter/bar fills. The CSS transition on the element does
/// the actual easing; this only flips the width from 0 to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillAnimation {
    pub selector: &'static str,
    pub delay_ms: u32,
}

pub const CONFIDENCE_METER: FillAnimation = FillAnimation {
    selector: ".confidence-meter__fill",
    delay_ms: config::CONFIDENCE_METER_DELAY_MS,
};

pub const BAR_CHART: FillAnimation = FillAnimation {
    selector: ".bar-chart__fill",
    delay_ms: config::BAR_CHART_DELAY_MS,
};

impl FillAnimation {
    pub fn run<C: Scheduler>(&self, document: &Document, scheduler: C) {
        let fills = dom::query_all(document, self.selector);
        if !fills.is_empty() {
            debug!("Animating {} {} fill(s)", fills.len(), self.selector);
        }
        for fill in fills {
            self.animate(fill, scheduler.clone());
        }
    }

    pub fn animate<S: Surface, C: Scheduler>(&self, fill: S, scheduler: C) {
        let target = fill
            .attribute("data-width")
            .filter(|width| !width.is_empty())
            .unwrap_or_else(|| "0%".to_string());
        fill.set_style("width", "0%");
        scheduler.after(
            self.delay_ms,
            Box::new(move || fill.set_style("width", &target)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scheduler::ManualScheduler;
    use crate::animation::surface::FakeSurface;

    #[test]
    fn meter_grows_after_its_delay() {
        let scheduler = ManualScheduler::new();
        let fill = FakeSurface::new().with_attribute("data-width", "87%");

        CONFIDENCE_METER.animate(fill.clone(), scheduler.clone());
        assert_eq!(fill.style("width").as_deref(), Some("0%"));

        scheduler.advance(599);
        assert_eq!(fill.style("width").as_deref(), Some("0%"));
        scheduler.advance(1);
        assert_eq!(fill.style("width").as_deref(), Some("87%"));
    }

    #[test]
    fn bar_chart_is_quicker_than_meter() {
        let scheduler = ManualScheduler::new();
        let bar = FakeSurface::new().with_attribute("data-width", "40%");
        let meter = FakeSurface::new().with_attribute("data-width", "90%");

        BAR_CHART.animate(bar.clone(), scheduler.clone());
        CONFIDENCE_METER.animate(meter.clone(), scheduler.clone());

        scheduler.advance(400);
        assert_eq!(bar.style("width").as_deref(), Some("40%"));
        assert_eq!(meter.style("width").as_deref(), Some("0%"));
    }

    #[test]
    fn missing_target_stays_empty() {
        let scheduler = ManualScheduler::new();
        let fill = FakeSurface::new();

        BAR_CHART.animate(fill.clone(), scheduler.clone());
        scheduler.run_all();
        assert_eq!(fill.style("width").as_deref(), Some("0%"));
    }
}
