use std::io;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;

use pushkind_wardrobe::db::{establish_connection_pool, run_migrations};
use pushkind_wardrobe::generation::OpenAiClient;
use pushkind_wardrobe::models::config::{DEFAULT_SETTINGS_PATH, ServerConfig};
use pushkind_wardrobe::repository::DieselRepository;
use pushkind_wardrobe::routes;
use pushkind_wardrobe::weather::OpenWeatherClient;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    log::error!("{context}: {err}");
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path =
        std::env::var("APP_SETTINGS").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
    let server_config = ServerConfig::load(&settings_path)
        .map_err(|e| startup_error("Failed to load configuration", e))?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(|e| startup_error("Failed to establish database connection", e))?;
    {
        let mut conn = pool
            .get()
            .map_err(|e| startup_error("Failed to get database connection", e))?;
        run_migrations(&mut conn).map_err(|e| startup_error("Failed to run migrations", e))?;
    }

    let repo = web::Data::new(DieselRepository::new(pool));
    let generator = web::Data::new(
        OpenAiClient::new(&server_config.openai)
            .map_err(|e| startup_error("Failed to build generation client", e))?,
    );
    let weather = web::Data::new(
        OpenWeatherClient::new(&server_config.weather)
            .map_err(|e| startup_error("Failed to build weather client", e))?,
    );
    if server_config.weather.api_key.is_none() {
        log::info!("OPENWEATHER_API_KEY is not set; /api/weather will answer 503");
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    let static_dir = server_config.static_dir.clone();
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(generator.clone())
            .app_data(weather.clone())
            .configure(routes::configure);

        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind(bind_address)?
    .run()
    .await
}
