//! HTML content helpers for the hbnbweb pages.
//!
//! Every templated route renders through one of the builders here: a
//! shared document skeleton filled with a per-page body. Entity names
//! and ids pass through `escape` before interpolation. Keep all HTML in
//! this module to avoid runtime template dependencies.
//!
use hbnbmodels::{City, State};

/// Wrap a page body in the shared HBNB document skeleton
fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <title>HBNB</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>"
    )
}

/// Escape text for safe interpolation into HTML element content
fn escape(text: &str) -> String {
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

/// One `<li>` entry for an entity id/name pair
fn item(id: &str, name: &str) -> String {
    format!("<li>{}: <b>{}</b></li>", escape(id), escape(name))
}

/// Page showing a single number
pub fn number_page(n: i64) -> String {
    page(&format!("    <h1>Number: {n}</h1>"))
}

/// Page showing a number and its parity ("odd" or "even")
pub fn odd_or_even_page(n: i64, parity: &str) -> String {
    page(&format!("    <h1>Number: {n} is {parity}</h1>"))
}

/// Page listing states in the order given by the caller
pub fn states_list_page(states: &[State]) -> String {
    let mut body = String::from("    <h1>States</h1>\n    <ul>\n");
    for state in states {
        body.push_str("        ");
        body.push_str(&item(&state.id, &state.name));
        body.push('\n');
    }
    body.push_str("    </ul>");
    page(&body)
}

/// Page listing states with their cities nested under each one
pub fn cities_by_states_page(states: &[(State, Vec<City>)]) -> String {
    let mut body = String::from("    <h1>States</h1>\n    <ul>\n");
    for (state, cities) in states {
        body.push_str("        ");
        body.push_str(&format!(
            "<li>{}: <b>{}</b>\n            <ul>\n",
            escape(&state.id),
            escape(&state.name)
        ));
        for city in cities {
            body.push_str("                ");
            body.push_str(&item(&city.id, &city.name));
            body.push('\n');
        }
        body.push_str("            </ul>\n        </li>\n");
    }
    body.push_str("    </ul>");
    page(&body)
}

/// Page for a single state with its cities, or the absent-state variant
/// when the requested id matched nothing
pub fn state_page(found: Option<(&State, &[City])>) -> String {
    match found {
        Some((state, cities)) => {
            let mut body = format!(
                "    <h1>State: {}</h1>\n    <h3>Cities:</h3>\n    <ul>\n",
                escape(&state.name)
            );
            for city in cities {
                body.push_str("        ");
                body.push_str(&item(&city.id, &city.name));
                body.push('\n');
            }
            body.push_str("    </ul>");
            page(&body)
        }
        None => page("    <h1>Not found!</h1>"),
    }
}
