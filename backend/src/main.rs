use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;
use todo_backend::config::Config;
use todo_backend::database::{ConnectionStatus, Database};
use todo_backend::services;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const UI_NOT_BUILT: &str =
    "The todo UI has not been built. Run `trunk build --release` in frontend/ and rebuild the server.";

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(UI_NOT_BUILT),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let database = match Database::connect(&config.database_uri) {
        ConnectionStatus::Connected(database) => database,
        ConnectionStatus::Failed(reason) => {
            return Err(io::Error::other(format!("database connection failed: {}", reason)));
        }
    };

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Server running at {}", url);

    let max_body_bytes = config.max_body_bytes;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(database.clone()))
            .service(services::todos::configure_routes(max_body_bytes))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
