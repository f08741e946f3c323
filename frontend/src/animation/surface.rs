use log::warn;
use web_sys::HtmlElement;

/// The handful of element mutations the animations perform.
pub trait Surface: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
}

impl Surface for HtmlElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            warn!("Could not add class {}: {:?}", class, err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            warn!("Could not remove class {}: {:?}", class, err);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            warn!("Could not set {} to {}: {:?}", property, value, err);
        }
    }
}

#[cfg(test)]
pub use fake::FakeSurface;
