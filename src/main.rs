use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use folderbox::api::folders;
use folderbox::api::middleware::RequestId;
use folderbox::app_state::AppState;
use folderbox::config::Config;
use folderbox::database;
use folderbox::errors::ApiError;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");
    let db = database::connect().await?;

    #[derive(OpenApi)]
    #[openapi(
        paths(
            folders::create_folders,
            folders::list_folders,
        ),
        components(
            schemas(
                folders::FolderCreateRequest,
                folders::FolderView,
                ApiError,
            )
        ),
        tags(
            (name = "Folders", description = "Folder management endpoints")
        )
    )]
    struct ApiDoc;

    let host = config.host.clone();
    let port = config.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    let app_state = web::Data::new(AppState { db, config });

    HttpServer::new(move || {
        let config = &app_state.config;
        let cors = match config.public_url.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(RequestId)
            .wrap(cors)
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().limit(config.effective_max_body_bytes()))
            .service(web::scope("/api").configure(folders::init_routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .workers(num_cpus::get())
    .bind((host, port))?
    .run()
    .await
}
