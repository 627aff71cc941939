use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use crate::views::HomePage;

pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HomePage.to_string())
}
