mod config;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod utils;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use chrono::Local;
use std::io;
use std::io::Write;

use crate::config::Config;
use crate::middleware::RequestLogging;
use crate::routes::{api_routes, public_routes};
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e)) // 转换为 io::Result
        })
        .init();

    // 加载并校验配置
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let bind_address = config.bind_address();
    let workers = config.server.workers;

    let app_state = web::Data::new(AppState::new(&config));
    log::info!(
        "Loaded {} partner(s) into the directory",
        app_state.directory.len()
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(RequestLogging)
            .service(api_routes())
            .service(public_routes())
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    log::info!("Server listening on {}", bind_address);
    server.run().await.context("Server error")?;

    Ok(())
}
