use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, NodeList};
use yew::html::BaseComponent;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    collect_elements(selector, document.query_selector_all(selector))
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    collect_elements(selector, root.query_selector_all(selector))
}

fn collect_elements(selector: &str, result: Result<NodeList, JsValue>) -> Vec<HtmlElement> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
        Err(err) => {
            warn!("Selector {} could not be queried: {:?}", selector, err);
            Vec::new()
        }
    }
}

/// Renders `C` inside an existing page element, replacing whatever the
/// static markup had there.
pub fn mount<C: BaseComponent>(root: Element, props: C::Properties) {
    root.set_inner_html("");
    yew::Renderer::<C>::with_root_and_props(root, props).render();
}
