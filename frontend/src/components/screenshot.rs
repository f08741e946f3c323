use log::{debug, warn};
use web_sys::{Document, Event};
use yew::prelude::*;

use crate::assets::{self, AssetState};
use crate::dom;

pub const PLACEHOLDER_ICON: &str = "\u{1F4F7}";

#[derive(Properties, PartialEq)]
pub struct ScreenshotProps {
    pub asset_key: String,
    pub label: String,
}

/// What a screenshot area shows for a given load state.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenshotView {
    /// Image in flight, kept hidden so a broken icon never flashes.
    Loading { src: String, alt: String },
    Image { src: String, alt: String },
    Placeholder { label: String, reason: &'static str },
}

impl ScreenshotView {
    pub fn for_state(state: &AssetState, label: &str) -> Self {
        match state {
            AssetState::Pending(url) => ScreenshotView::Loading {
                src: url.clone(),
                alt: label.to_string(),
            },
            AssetState::Loaded(url) => ScreenshotView::Image {
                src: url.clone(),
                alt: label.to_string(),
            },
            AssetState::Placeholder(reason) => ScreenshotView::Placeholder {
                label: label.to_string(),
                reason: reason.as_str(),
            },
        }
    }

    pub fn render(self, onload: Callback<Event>, onerror: Callback<Event>) -> Html {
        match self {
            ScreenshotView::Loading { src, alt } => html! {
                <img src={src} alt={alt} style="display: none;" onload={onload} onerror={onerror} />
            },
            ScreenshotView::Image { src, alt } => html! {
                <img src={src} alt={alt} />
            },
            ScreenshotView::Placeholder { label, reason } => html! {
                <div class="screenshot-placeholder" data-reason={reason}>
                    <div class="screenshot-placeholder__icon">{PLACEHOLDER_ICON}</div>
                    <div class="screenshot-placeholder__label">{label}</div>
                </div>
            },
        }
    }
}

#[function_component(Screenshot)]
pub fn screenshot(props: &ScreenshotProps) -> Html {
    let state = use_state(|| AssetState::for_key(&props.asset_key));

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set((*state).clone().loaded()))
    };
    let onerror = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            if let AssetState::Pending(url) = &*state {
                warn!("Screenshot {} failed to load, showing placeholder", url);
            }
            state.set((*state).clone().failed());
        })
    };

    ScreenshotView::for_state(&state, &props.label).render(onload, onerror)
}

/// Mounts a `Screenshot` into every screenshot area on the page.
pub fn mount_all(document: &Document) {
    for area in dom::query_all(document, assets::SCREENSHOT_SELECTOR) {
        let asset_key = area.get_attribute("data-asset").unwrap_or_default();
        let label = assets::caption(area.get_attribute("data-label"));
        if assets::resolve(&asset_key).is_none() {
            debug!("Asset key {:?} is not mapped, using placeholder", asset_key);
        }
        dom::mount::<Screenshot>(area.into(), ScreenshotProps { asset_key, label });
    }
}
