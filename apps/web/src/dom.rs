use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn apply_style(element: &HtmlElement, properties: &[(&str, String)]) -> Result<(), JsValue> {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

pub fn set_text(document: &Document, id: &str, value: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(value));
    }
}

pub fn text_of(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
}
