// File: crates/colorline-core/src/page.rs
// Summary: In-memory HTML page with a container element the chart is appended to.

use crate::error::{Error, Result};
use crate::svg::Element;

/// Id of the element charts are drawn into by default.
pub const DEFAULT_CONTAINER_ID: &str = "wrapper";

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub title: String,
    body: Element,
}

impl Page {
    /// Empty page with a body.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: Element::new("body") }
    }

    /// Page whose body holds one empty `<div id=container_id>`.
    pub fn with_container(title: impl Into<String>, container_id: &str) -> Self {
        let mut page = Self::new(title);
        page.body.append(Element::new("div").attr("id", container_id));
        page
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn select_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| Error::ContainerNotFound(id.to_string()))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>");
        out.push_str(&crate::svg::escape_xml(&self.title));
        out.push_str("</title>\n</head>\n");
        self.body.write_to(&mut out);
        out.push_str("\n</html>\n");
        out
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::with_container("Paintings by number of colors", DEFAULT_CONTAINER_ID)
    }
}
