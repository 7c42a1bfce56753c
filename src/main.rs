use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use content_admin_server::{app_state::AppState, config::Config, handlers};

fn cors(config: &Config) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    match &config.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allowed_origin_fn(|origin, _req| {
            origin.as_bytes().starts_with(b"http://localhost")
        }),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production().map_err(std::io::Error::other)?;
    }

    let state = AppState::new(config.clone())
        .await
        .map_err(std::io::Error::other)?;

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
