//! # Option Markup
//!
//! Projects ordered lists into `<option>` fragments for selection controls.
//! One element per entry, in input order, concatenated with no separator.
//! Nothing is sorted, filtered or deduplicated.

/// Anything that can be rendered as one `<option>` element.
pub trait OptionEntry {
    /// The submitted `value` attribute.
    fn option_value(&self) -> &str;
    /// The visible label.
    fn option_label(&self) -> &str;
}

/// Plain names (counties) submit their own text.
impl OptionEntry for str {
    fn option_value(&self) -> &str {
        self
    }

    fn option_label(&self) -> &str {
        self
    }
}

impl OptionEntry for String {
    fn option_value(&self) -> &str {
        self
    }

    fn option_label(&self) -> &str {
        self
    }
}

impl<T: OptionEntry + ?Sized> OptionEntry for &T {
    fn option_value(&self) -> &str {
        (**self).option_value()
    }

    fn option_label(&self) -> &str {
        (**self).option_label()
    }
}

/// Render every entry as `<option value="…">…</option>`.
pub fn render_options<I>(entries: I) -> String
where
    I: IntoIterator,
    I::Item: OptionEntry,
{
    let mut out = String::new();
    for entry in entries {
        out.push_str("<option value=\"");
        out.push_str(&escape_html(entry.option_value()));
        out.push_str("\">");
        out.push_str(&escape_html(entry.option_label()));
        out.push_str("</option>");
    }
    out
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
