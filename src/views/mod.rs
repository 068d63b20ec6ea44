//! HTML rendering
//!
//! One page layout: the sidebar selector on the left and the selected form on
//! the right. Values are only ever echoed back into the form they were
//! submitted with.

use std::collections::HashMap;
use std::fmt::Write;

use crate::models::{Disease, FormDescriptor};

pub const APP_TITLE: &str = "Prediction of Disease Outbreaks System";

/// Message shown under the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
nav { width: 260px; background: #f0f2f6; padding: 1.5rem 1rem; }
nav h2 { font-size: 1.1rem; margin-top: 0; }
nav a { display: block; padding: 0.6rem 0.8rem; margin-bottom: 0.3rem; border-radius: 6px; color: #262730; text-decoration: none; }
nav a.active { background: #ff4b4b; color: #fff; }
main { flex: 1; padding: 2rem 3rem; }
.grid { display: grid; gap: 1rem 1.5rem; }
.grid label { display: block; font-size: 0.9rem; margin-bottom: 0.3rem; }
.grid input { width: 100%; box-sizing: border-box; padding: 0.5rem; }
button { margin-top: 1.5rem; padding: 0.6rem 1.2rem; }
.message { margin-top: 1.5rem; padding: 1rem; border-radius: 6px; }
.success { background: #dff0d8; color: #1e5128; }
.error { background: #fde2e2; color: #7d1d1d; }
"#;

/// Render a full page for `disease`
pub fn page(
    disease: Disease,
    form: &FormDescriptor,
    values: &HashMap<String, String>,
    outcome: Option<&Outcome>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(APP_TITLE),
        STYLE
    );

    html.push_str(&sidebar(disease));

    let _ = write!(html, "<main>\n<h1>{}</h1>\n", escape(disease.title()));
    html.push_str(&form_body(disease, form, values));

    if let Some(outcome) = outcome {
        let (class, text) = match outcome {
            Outcome::Success(text) => ("success", text),
            Outcome::Error(text) => ("error", text),
        };
        let _ = write!(
            html,
            "<div class=\"message {}\" role=\"status\">{}</div>\n",
            class,
            escape(text)
        );
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn sidebar(selected: Disease) -> String {
    let mut html = String::new();
    let _ = write!(html, "<nav>\n<h2>{}</h2>\n", escape(APP_TITLE));

    for disease in Disease::ALL {
        let class = if disease == selected { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a href=\"/{}\"{}>{}</a>\n",
            disease.slug(),
            class,
            escape(disease.menu_label())
        );
    }

    html.push_str("</nav>\n");
    html
}

fn form_body(disease: Disease, form: &FormDescriptor, values: &HashMap<String, String>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/{}\">\n\
         <div class=\"grid\" style=\"grid-template-columns: repeat({}, 1fr)\">\n",
        disease.slug(),
        form.columns
    );

    for field in &form.fields {
        let value = values.get(&field.name).map(String::as_str).unwrap_or("");
        let _ = write!(
            html,
            "<div><label for=\"{name}\">{label}</label>\
             <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></div>\n",
            name = escape(&field.name),
            label = escape(&field.label),
            value = escape(value)
        );
    }

    let _ = write!(
        html,
        "</div>\n<button type=\"submit\">{}</button>\n</form>\n",
        escape(disease.button_label())
    );
    html
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
