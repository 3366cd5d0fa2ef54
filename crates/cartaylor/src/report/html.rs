use std::fmt::Write as _;

use cartaylor_engine::{Catalog, CompatibilityChecker, Configuration};

const INVALID_PARAGRAPH: &str =
    "<p style='color: red'>The configuration is invalid or incomplete.</p>";

/// HTML fragment summarizing a final configuration.
///
/// Only valid and complete configurations get a summary; anything else
/// renders as a single warning paragraph.
pub struct HtmlRenderer<'a> {
    catalog: &'a Catalog,
    checker: &'a dyn CompatibilityChecker,
    currency: String,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(catalog: &'a Catalog, checker: &'a dyn CompatibilityChecker) -> Self {
        Self {
            catalog,
            checker,
            currency: "€".to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn render(&self, configuration: &Configuration) -> String {
        if !configuration.is_valid(self.checker) || !configuration.is_complete(self.catalog) {
            return INVALID_PARAGRAPH.to_string();
        }

        let mut out =
            String::from("<div class='configuration'><h3>Vehicle configuration</h3><ul>");
        // Catalog categories are keyed by name, so this walks them sorted.
        for category in self.catalog.iter_categories() {
            if let Some(part_type) = configuration.selection_for_category(category) {
                let _ = write!(
                    out,
                    "<li><strong>{}:</strong> {}<br>Price: {} {}</li>",
                    escape(category.name()),
                    escape(part_type.name()),
                    part_type.price(),
                    self.currency
                );
            }
        }
        let _ = write!(
            out,
            "<li>Total price: {} {}</li></ul></div>",
            configuration.total_price(),
            self.currency
        );
        out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
