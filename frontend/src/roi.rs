//! Return-on-investment estimate for the ROI page.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::dom;

pub const RATE_INPUT_ID: &str = "roi-rate";
pub const MINUTES_INPUT_ID: &str = "roi-minutes";
pub const VOLUME_INPUT_ID: &str = "roi-volume";

pub const HOURS_OUTPUT_ID: &str = "roi-hours-saved";
pub const COST_MONTH_OUTPUT_ID: &str = "roi-cost-month";
pub const COST_YEAR_OUTPUT_ID: &str = "roi-cost-year";
pub const RUNS_OUTPUT_ID: &str = "roi-runs";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoiInputs {
    pub hourly_rate: f64,
    pub minutes_saved: f64,
    pub monthly_volume: f64,
}

impl RoiInputs {
    pub fn parse(rate: &str, minutes: &str, volume: &str) -> Self {
        Self {
            hourly_rate: parse_field(rate),
            minutes_saved: parse_field(minutes),
            monthly_volume: parse_field(volume),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiEstimate {
    pub hours_saved_per_month: f64,
    pub cost_saved_per_month: f64,
    pub cost_saved_per_year: f64,
    /// One automation run per task.
    pub automation_runs: f64,
}

impl RoiEstimate {
    pub fn compute(inputs: RoiInputs) -> Self {
        let hours_saved_per_month = inputs.minutes_saved * inputs.monthly_volume / 60.0;
        let cost_saved_per_month = hours_saved_per_month * inputs.hourly_rate;
        Self {
            hours_saved_per_month,
            cost_saved_per_month,
            cost_saved_per_year: cost_saved_per_month * 12.0,
            automation_runs: inputs.monthly_volume,
        }
    }

    pub fn readout(&self) -> RoiReadout {
        RoiReadout {
            hours_saved: to_fixed(self.hours_saved_per_month, 1),
            cost_month: format_currency(self.cost_saved_per_month),
            cost_year: format_currency(self.cost_saved_per_year),
            runs: format_count(self.automation_runs),
        }
    }
}

/// Display strings for the four output fields.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiReadout {
    pub hours_saved: String,
    pub cost_month: String,
    pub cost_year: String,
    pub runs: String,
}

impl RoiReadout {
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (HOURS_OUTPUT_ID, self.hours_saved.as_str()),
            (COST_MONTH_OUTPUT_ID, self.cost_month.as_str()),
            (COST_YEAR_OUTPUT_ID, self.cost_year.as_str()),
            (RUNS_OUTPUT_ID, self.runs.as_str()),
        ]
    }
}

/// Longest numeric prefix of `raw` (after leading whitespace), the way browsers
/// read a loosely-typed number field. Anything that does not start with a
/// number, or is not finite, reads as 0.
pub fn parse_field(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        // -0 reads as plain 0
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

/// Enough fractional digits to print any `f64` exactly.
const F64_EXACT_DIGITS: usize = 1_074;

/// Fixed-point rendering with exact halves rounded away from zero. A value is
/// only a half when its exact binary value is one; `1.45` is stored below the
/// half and stays `1.4`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && is_exact_half(value, digits) {
        let factor = 10f64.powi(digits as i32);
        format!("{:.*}", digits, (value * factor).round() / factor)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// True when the digits of `value` past position `digits` are exactly `5000…`.
fn is_exact_half(value: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", F64_EXACT_DIGITS, value);
    let Some((_, frac)) = exact.split_once('.') else {
        return false;
    };
    match frac.get(digits..) {
        Some(rest) => rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0'),
        None => false,
    }
}

pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${}M", to_fixed(value / 1_000_000.0, 2))
    } else if value >= 1_000.0 {
        format!("${}K", to_fixed(value / 1_000.0, 1))
    } else {
        format!("${}", to_fixed(value, 0))
    }
}

/// Thousands separators and at most three decimals, e.g. `12,500` or `1,234.5`.
pub fn format_count(value: f64) -> String {
    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Binds the calculator to the page's three inputs. Pages without all three
/// inputs are left alone.
pub fn init_roi_calculator(document: &Document) {
    let rate = dom::element_by_id::<HtmlInputElement>(document, RATE_INPUT_ID);
    let minutes = dom::element_by_id::<HtmlInputElement>(document, MINUTES_INPUT_ID);
    let volume = dom::element_by_id::<HtmlInputElement>(document, VOLUME_INPUT_ID);
    let (Some(rate), Some(minutes), Some(volume)) = (rate, minutes, volume) else {
        debug!("ROI inputs not on this page");
        return;
    };

    let inputs = [rate, minutes, volume];
    let calculate: Rc<dyn Fn()> = {
        let document = document.clone();
        let inputs = inputs.clone();
        Rc::new(move || {
            let [rate, minutes, volume] = &inputs;
            let estimate = RoiEstimate::compute(RoiInputs::parse(
                &rate.value(),
                &minutes.value(),
                &volume.value(),
            ));
            debug!("ROI recomputed: {:?}", estimate);
            let readout = estimate.readout();
            for (id, text) in readout.fields() {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            }
        })
    };

    for input in &inputs {
        for event in ["input", "change"] {
            let calculate = Rc::clone(&calculate);
            let listener = Closure::wrap(Box::new(move |_: Event| {
                calculate();
            }) as Box<dyn FnMut(Event)>);
            if let Err(err) =
                input.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                warn!("Could not bind {} on ROI input: {:?}", event, err);
            }
            listener.forget();
        }
    }

    calculate();
}
