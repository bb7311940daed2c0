#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use devpad::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            middleware::{self, RouteMatcher},
            model::app::AppState,
            session::DbSessionStore,
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await?;
        let auth = startup::build_auth_service(&config, db.clone())?;

        let store = DbSessionStore::new(db.clone());
        startup::start_session_cleanup(store.clone());
        let session = startup::session_layer(store, &config);

        tracing::info!("Starting server on {}", config.auth_url);

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { db, auth })
            .layer(session);
        router = router.merge(server_routes);

        Ok(middleware::protect(router, RouteMatcher::default()))
    })
}
