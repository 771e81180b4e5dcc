use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use turnos_server::{admin, config::Config, user, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("Invalid configuration");
    let state = web::Data::new(AppState::from_config(&config));

    info!(bind = %config.bind_addr, seeded = config.seed_sample_data, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // administrator
            .service(
                web::scope("/admin")
                    .configure(admin::config),
            )
            // patient
            .service(
                web::scope("/user")
                    .configure(user::config),
            )
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
