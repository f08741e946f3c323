//! Character-by-character text reveal for `.type-in` elements.

use log::debug;
use web_sys::Document;

use super::scheduler::Scheduler;
use super::surface::Surface;
use crate::config;
use crate::dom;

pub const TYPE_IN_SELECTOR: &str = ".type-in";
pub const DONE_CLASS: &str = "type-in--done";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingConfig {
    pub speed_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed_ms: config::DEFAULT_TYPE_IN_SPEED_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeStep {
    /// Text visible after this tick.
    Reveal(String),
    Done,
}

pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// One character per tick; the tick after the last character reports `Done`.
    pub fn tick(&mut self) -> TypeStep {
        if self.shown < self.chars.len() {
            self.shown += 1;
            TypeStep::Reveal(self.chars[..self.shown].iter().collect())
        } else {
            TypeStep::Done
        }
    }
}

pub fn init_type_in_animations<C: Scheduler>(document: &Document, scheduler: C, config: TypingConfig) {
    let elements = dom::query_all(document, TYPE_IN_SELECTOR);
    debug!("Typing {} element(s) at {}ms/char", elements.len(), config.speed_ms);
    for element in elements {
        type_in(element, scheduler.clone(), config);
    }
}

/// Clears `target` and types its text back in on its own timer chain.
pub fn type_in<S: Surface, C: Scheduler>(target: S, scheduler: C, config: TypingConfig) {
    let text = target
        .attribute("data-text")
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| target.text());
    target.set_text("");
    target.set_style("visibility", "visible");
    schedule_tick(target, scheduler, Typewriter::new(&text), config.speed_ms);
}

fn schedule_tick<S: Surface, C: Scheduler>(target: S, scheduler: C, mut machine: Typewriter, speed_ms: u32) {
    let next = scheduler.clone();
    scheduler.after(
        speed_ms,
        Box::new(move || match machine.tick() {
            TypeStep::Reveal(text) => {
                target.set_text(&text);
                schedule_tick(target, next, machine, speed_ms);
            }
            TypeStep::Done => target.add_class(DONE_CLASS),
        }),
    );
}
