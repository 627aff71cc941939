pub mod pages;

use std::fmt;

pub use pages::{HomePage, ListingPage, LookupResultsPage};

/// Writes the wrapped text with HTML special characters escaped.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#x27;")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// Adapts a closure into a `Display` value.
pub(crate) struct FromFn<F>(F);

pub(crate) fn from_fn<F>(render: F) -> FromFn<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    FromFn(render)
}

impl<F> fmt::Display for FromFn<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

const BASE_STYLE: &str = r#"
body { background-color: #DBDBDB; font-family: Arial, sans-serif; }
h1, h2 { color: blue; font-style: italic; font-family: "Roboto", serif; font-weight: bold; text-decoration: underline; }
.button { display: inline-block; margin: 10px; padding: 10px 20px; background-color: #4CAF50; color: white; text-decoration: none; border-radius: 5px; }
.button:hover { background-color: #45a049; }
.form-container { margin-top: 20px; }
.form-container input[type=text], .form-container input[type=number], .form-container input[type=date] { padding: 10px; margin: 5px; }
.form-container input[type=submit] { padding: 10px 20px; margin: 5px; background-color: #4CAF50; color: white; border: none; cursor: pointer; }
.form-container input[type=submit]:hover { background-color: #45a049; }
"#;

/// Common `<html>` shell around a page body.
pub(crate) fn layout(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    extra_style: &str,
    body: impl fmt::Display,
) -> fmt::Result {
    write!(
        f,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        Escaped(title),
        BASE_STYLE,
        extra_style,
        body
    )
}
