use std::fmt::Write as _;
use std::io;

use cartaylor_core::{Category, PartType};
use cartaylor_engine::Configuration;

use super::Element;

/// Line-oriented plain-text descriptions.
///
/// ```
/// use cartaylor::report::{Element, TextRenderer};
/// use cartaylor::{Category, PartType};
///
/// let engine = Category::new("Engine").unwrap();
/// let v8 = PartType::new("V8", engine, 10_000).unwrap();
///
/// assert_eq!(
///     TextRenderer::new().render(Element::from(&v8)),
///     "Category: Engine\nPartType: V8, Price: 10000\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<'a>(&self, element: impl Into<Element<'a>>) -> String {
        let mut out = String::new();
        match element.into() {
            Element::Category(category) => self.category(&mut out, category),
            Element::PartType(part_type) => self.part_type(&mut out, part_type),
            Element::Configuration(configuration) => self.configuration(&mut out, configuration),
        }
        out
    }

    /// Renders into a writer.
    pub fn write<'a>(
        &self,
        writer: &mut impl io::Write,
        element: impl Into<Element<'a>>,
    ) -> io::Result<()> {
        writer.write_all(self.render(element).as_bytes())
    }

    fn category(&self, out: &mut String, category: &Category) {
        let _ = writeln!(out, "Category: {}", category.name());
    }

    fn part_type(&self, out: &mut String, part_type: &PartType) {
        self.category(out, part_type.category());
        let _ = writeln!(
            out,
            "PartType: {}, Price: {}",
            part_type.name(),
            part_type.price()
        );
    }

    // Parts in (category, name, price) order so output is reproducible.
    fn configuration(&self, out: &mut String, configuration: &Configuration) {
        out.push_str("Configuration: \n");
        for part_type in configuration.sorted_parts() {
            self.part_type(out, &part_type);
        }
    }
}
