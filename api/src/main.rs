//! Department API Server
//!
//! A REST service for departments and the employees that belong to them.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresDepartmentRepository, PostgresEmployeeRepository};
use app::{seed_demo_data, DepartmentService};
use config::Config;
use domain::ports::{DepartmentRepository, EmployeeRepository};

/// Application state shared across all handlers
pub struct AppState<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    pub department_service: Arc<DepartmentService<D, E>>,
}

impl<D, E> AppState<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    pub fn new(department_service: DepartmentService<D, E>) -> Self {
        Self {
            department_service: Arc::new(department_service),
        }
    }
}

// Derived Clone would require D: Clone and E: Clone
impl<D, E> Clone for AppState<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    fn clone(&self) -> Self {
        Self {
            department_service: self.department_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any repository implementation
pub fn router<D, E>(state: AppState<D, E>) -> Router
where
    D: DepartmentRepository + 'static,
    E: EmployeeRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Departments
        .route(
            "/api/departments",
            get(handlers::list_departments::<D, E>).post(handlers::create_department::<D, E>),
        )
        .route(
            "/api/departments/:id",
            get(handlers::get_department::<D, E>)
                .put(handlers::update_department::<D, E>)
                .delete(handlers::delete_department::<D, E>),
        )
        // Employees (nested under departments)
        .route(
            "/api/departments/:id/employees",
            post(handlers::add_employee::<D, E>),
        )
        .route(
            "/api/departments/:id/employees/:employee_id",
            delete(handlers::remove_employee::<D, E>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,department_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Department API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    // Create adapters
    let department_repo = Arc::new(PostgresDepartmentRepository::new(db.clone()));
    let employee_repo = Arc::new(PostgresEmployeeRepository::new(db));

    // Create application services
    let department_service = DepartmentService::new(department_repo, employee_repo);

    if config.seed_demo_data {
        seed_demo_data(&department_service)
            .await
            .context("Failed to seed demo data")?;
    }

    let app = router(AppState::new(department_service));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
