//! Human-readable descriptions of catalog items and configurations.
//!
//! Renderers match on [`Element`] instead of double-dispatching through the
//! items, so new renderers need no changes to the domain types.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use cartaylor_core::{Category, PartType};
use cartaylor_engine::Configuration;

/// Anything a renderer can describe.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    PartType(&'a PartType),
    Category(&'a Category),
    Configuration(&'a Configuration),
}

impl<'a> From<&'a PartType> for Element<'a> {
    fn from(part_type: &'a PartType) -> Self {
        Element::PartType(part_type)
    }
}

impl<'a> From<&'a Category> for Element<'a> {
    fn from(category: &'a Category) -> Self {
        Element::Category(category)
    }
}

impl<'a> From<&'a Configuration> for Element<'a> {
    fn from(configuration: &'a Configuration) -> Self {
        Element::Configuration(configuration)
    }
}
