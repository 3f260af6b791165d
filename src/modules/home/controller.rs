#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Plain-text greeting", body = String)),
    tag = "Home"
)]
pub async fn hello() -> &'static str {
    "Hello World!"
}
