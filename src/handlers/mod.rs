pub mod associate;
pub mod home;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::read_root)))
        .service(
            web::resource("/lookup_associate")
                .route(web::post().to(associate::lookup_associate)),
        )
        .service(
            web::resource("/associates")
                .route(web::get().to(associate::get_associates))
                .route(web::post().to(associate::create_associate)),
        )
        .service(
            web::resource("/delete_associate")
                .route(web::post().to(associate::delete_associate)),
        )
        .service(
            web::resource("/edit_associate")
                .route(web::post().to(associate::edit_associate)),
        );
}
