use axum::Router;
use axum::response::Html;
use axum::routing::get;

pub fn dashboard_router() -> Router {
    Router::new().route("/", get(dashboard))
}

/// Serves the control page. The page is a plain API client: it polls the
/// three read endpoints once per second and posts on user interaction.
#[utoipa::path(
    get,
    path = "/",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard page", content_type = "text/html")
    )
)]
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}
