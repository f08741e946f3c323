use log::debug;
use web_sys::Document;
use yew::prelude::*;

use crate::dom;
use crate::tour::{progress_markers, ProgressMarker};

pub const MOUNT_ID: &str = "tour-progress";

#[derive(Properties, PartialEq)]
pub struct TourProgressProps {
    pub current: usize,
}

#[function_component(TourProgress)]
pub fn tour_progress(props: &TourProgressProps) -> Html {
    let markers = progress_markers(props.current).into_iter().map(|marker| match marker {
        ProgressMarker::Step { label, status } => html! {
            <div class={classes!("tour-progress__step", status.css_class())}>
                <span class="tour-progress__dot"></span>
                <span class="tour-progress__label">{label}</span>
            </div>
        },
        ProgressMarker::Line { status } => html! {
            <span class={classes!("tour-progress__line", status.css_class())}></span>
        },
    });

    html! {
        <>
            { for markers }
        </>
    }
}

pub fn mount(document: &Document, current: usize) {
    match document.get_element_by_id(MOUNT_ID) {
        Some(root) => dom::mount::<TourProgress>(root, TourProgressProps { current }),
        None => debug!("No #{} on this page", MOUNT_ID),
    }
}
