use log::debug;
use web_sys::{Document, MouseEvent};
use yew::prelude::*;

use crate::dom;
use crate::tour::{self, NavLink, NavPlan};

pub const MOUNT_ID: &str = "nav-bar";

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: usize,
}

fn nav_button(link: NavLink, class: &'static str) -> Html {
    let target = link.target;
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        tour::goto(target);
    });

    html! {
        <button class={class} onclick={onclick}>{link.label}</button>
    }
}

// Keeps the three-column layout when a control is absent.
fn spacer() -> Html {
    html! { <div></div> }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavPlan { back, home, forward } = NavPlan::for_step(props.current);

    html! {
        <>
            {
                match back {
                    Some(link) => nav_button(link, "btn btn-secondary"),
                    None => spacer(),
                }
            }
            {
                match home {
                    Some(link) => nav_button(link, "btn btn-dark btn-sm"),
                    None => spacer(),
                }
            }
            { nav_button(forward, "btn btn-primary") }
        </>
    }
}

pub fn mount(document: &Document, current: usize) {
    match document.get_element_by_id(MOUNT_ID) {
        Some(root) => dom::mount::<NavBar>(root, NavBarProps { current }),
        None => debug!("No #{} on this page", MOUNT_ID),
    }
}
