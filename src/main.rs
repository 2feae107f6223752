use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_server::{
    app_state::AppState, config::Config, docs::OPENAPI_PATH, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = config.bind_address();
    let server_url = config.server_url();
    let state = AppState::new(config);

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );
    log::info!("API docs available at {}/api-docs ({})", server_url, OPENAPI_PATH);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %{x-request-id}o %Dms"#))
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
