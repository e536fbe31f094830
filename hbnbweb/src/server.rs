//! Web server module for the HBNB front end.
//!
//! Builds the axum router over the storage collaborator and serves it.
//! Handlers are stateless: each one reads from storage, sorts a local
//! copy where a listing needs ordering, and renders text or a page from
//! the `html` module. A teardown layer closes the storage handle after
//! every request, matched or not.
//!
use axum::{
    Router,
    extract::{Path, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
};
use std::sync::Arc;

use hbnbmodels::{City, FileStorage, Storage};

use crate::{config::CONFIG, html};

/// Application state shared across all handlers
pub(crate) struct AppState<S> {
    /// Storage collaborator, read by handlers and closed by teardown
    pub(crate) storage: S,
}

/// Start the web server over the configured JSON object file
pub async fn run() {
    let storage = FileStorage::open(&CONFIG.data_file)
        .expect("failed to load storage object file");

    let addr = format!("{}:{}", CONFIG.host, CONFIG.port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    println!("🌐 HBNB web running on http://{addr}");
    println!("   📄 Storage object file: {}", CONFIG.data_file.display());

    axum_server::bind(addr)
        .serve(app(storage).into_make_service())
        .await
        .unwrap();
}

/// Build the full router over any storage backend
pub fn app<S: Storage>(storage: S) -> Router {
    let state = Arc::new(AppState { storage });

    Router::new()
        .route("/", get(hello_hbnb))
        .route("/hbnb", get(hbnb))
        .route("/c/{text}", get(c_text))
        .route("/python", get(python_default))
        .route("/python/{text}", get(python_text))
        .route("/number/{n}", get(number))
        .route("/number_template/{n}", get(number_template))
        .route("/number_odd_or_even/{n}", get(number_odd_or_even))
        .route("/states", get(states_list::<S>))
        .route("/states_list", get(states_list::<S>))
        .route("/cities_by_states", get(cities_by_states::<S>))
        .route("/states/{id}", get(state_by_id::<S>))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            close_storage::<S>,
        ))
        .layer(middleware::map_request(normalize_trailing_slash))
        .with_state(state)
}

/// Route `/hbnb/` like `/hbnb`: trailing slashes are not significant
async fn normalize_trailing_slash(mut req: Request) -> Request {
    let replacement = {
        let uri = req.uri();
        let path = uri.path();
        if path.len() > 1 && path.ends_with('/') {
            let trimmed = path.trim_end_matches('/');
            let normalized = if trimmed.is_empty() { "/" } else { trimmed };
            let full = match uri.query() {
                Some(q) => format!("{normalized}?{q}"),
                None => normalized.to_owned(),
            };
            full.parse::<Uri>().ok()
        } else {
            None
        }
    };
    if let Some(uri) = replacement {
        *req.uri_mut() = uri;
    }
    req
}

/// Release the storage handle once the response is built, on every exit
/// path including unmatched routes and handler failures
async fn close_storage<S: Storage>(
    State(app): State<Arc<AppState<S>>>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;
    app.storage.close();
    response
}

/// Parse an integer path segment; anything else is a 404, not a 400 —
/// a non-integer segment means the route does not match
fn int_segment(raw: &str) -> Result<i64, StatusCode> {
    raw.parse().map_err(|_| StatusCode::NOT_FOUND)
}

/// Display hello message
async fn hello_hbnb() -> &'static str {
    "Hello HBNB!"
}

/// Display HBNB
async fn hbnb() -> &'static str {
    "HBNB"
}

/// Display `C ` followed by the text, underscores shown as spaces
async fn c_text(Path(text): Path<String>) -> String {
    format!("C {}", text.replace('_', " "))
}

/// Display `Python is cool` when no text is given
async fn python_default() -> String {
    python_text(Path("is cool".to_owned())).await
}

/// Display `Python ` followed by the text, underscores shown as spaces
async fn python_text(Path(text): Path<String>) -> String {
    format!("Python {}", text.replace('_', " "))
}

/// Display the number, integers only
async fn number(Path(n): Path<String>) -> Result<String, StatusCode> {
    let n = int_segment(&n)?;
    Ok(format!("{n} is a number"))
}

/// Display the number page, integers only
async fn number_template(Path(n): Path<String>) -> Result<Html<String>, StatusCode> {
    let n = int_segment(&n)?;
    Ok(Html(html::number_page(n)))
}

/// Display the number page with its parity, integers only
async fn number_odd_or_even(Path(n): Path<String>) -> Result<Html<String>, StatusCode> {
    let n = int_segment(&n)?;
    let parity = if n % 2 == 0 { "even" } else { "odd" };
    Ok(Html(html::odd_or_even_page(n, parity)))
}

/// Display all states sorted by name
async fn states_list<S: Storage>(State(app): State<Arc<AppState<S>>>) -> Html<String> {
    let mut states: Vec<hbnbmodels::State> =
        app.storage.all::<hbnbmodels::State>().into_values().collect();
    states.sort_by(|a, b| a.name.cmp(&b.name));
    Html(html::states_list_page(&states))
}

/// Display all states sorted by name, each with its cities sorted by name
async fn cities_by_states<S: Storage>(State(app): State<Arc<AppState<S>>>) -> Html<String> {
    let cities: Vec<City> = app.storage.all::<City>().into_values().collect();
    let mut states: Vec<(hbnbmodels::State, Vec<City>)> = app
        .storage
        .all::<hbnbmodels::State>()
        .into_values()
        .map(|state| {
            let mut owned: Vec<City> = cities
                .iter()
                .filter(|city| city.state_id == state.id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| a.name.cmp(&b.name));
            (state, owned)
        })
        .collect();
    states.sort_by(|a, b| a.0.name.cmp(&b.0.name));
    Html(html::cities_by_states_page(&states))
}

/// Display one state with its cities sorted by name, or the not-found
/// page when the id matches nothing
async fn state_by_id<S: Storage>(
    Path(id): Path<String>,
    State(app): State<Arc<AppState<S>>>,
) -> Html<String> {
    match app.storage.get::<hbnbmodels::State>(&id) {
        Some(state) => {
            let mut cities: Vec<City> = app
                .storage
                .all::<City>()
                .into_values()
                .filter(|city| city.state_id == state.id)
                .collect();
            cities.sort_by(|a, b| a.name.cmp(&b.name));
            Html(html::state_page(Some((&state, &cities))))
        }
        None => Html(html::state_page(None)),
    }
}
