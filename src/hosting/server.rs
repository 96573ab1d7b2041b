use super::*;
use crate::arena::Arena;
use crate::arena::Dice;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let parlor = web::Data::new(Parlor::from(Arena::new(Dice::from(config.seed))));
        match config.seed {
            Some(seed) => log::info!("seeding dice with {}", seed),
            None => log::info!("seeding dice from OS entropy"),
        }
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(parlor.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

/// Route table shared by the server and its tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .content_type(|_| true)
            .error_handler(handlers::malformed),
    )
    .app_data(web::QueryConfig::default().error_handler(handlers::malformed_query))
    .route("/health", web::get().to(handlers::health))
    .service(
        web::scope("/api")
            .route("/start",       web::post().to(handlers::start))
            .route("/play",        web::post().to(handlers::play))
            .route("/leaderboard", web::get().to(handlers::leaderboard)),
    );
}
