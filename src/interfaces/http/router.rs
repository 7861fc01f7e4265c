//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::{
    employees::{self, EmployeeState},
    health::{self, HealthState},
    metrics::{http_metrics_middleware, prometheus_metrics, MetricsState},
    products::{self, ProductState},
    request_id::request_id_middleware,
    sections::{self, SectionState},
};
use crate::application::inventory::{EmployeeService, ProductService, SectionService};

/// Everything the HTTP layer needs. Handlers pull their own slice via `FromRef`.
#[derive(Clone)]
pub struct InventoryState {
    pub employees: Arc<EmployeeService>,
    pub sections: Arc<SectionService>,
    pub products: Arc<ProductService>,
    pub db: Option<DatabaseConnection>,
    pub backend: &'static str,
    pub metrics: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl FromRef<InventoryState> for EmployeeState {
    fn from_ref(s: &InventoryState) -> Self {
        EmployeeState {
            service: Arc::clone(&s.employees),
        }
    }
}

impl FromRef<InventoryState> for SectionState {
    fn from_ref(s: &InventoryState) -> Self {
        SectionState {
            service: Arc::clone(&s.sections),
        }
    }
}

impl FromRef<InventoryState> for ProductState {
    fn from_ref(s: &InventoryState) -> Self {
        ProductState {
            service: Arc::clone(&s.products),
        }
    }
}

impl FromRef<InventoryState> for HealthState {
    fn from_ref(s: &InventoryState) -> Self {
        HealthState {
            db: s.db.clone(),
            backend: s.backend,
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<InventoryState> for MetricsState {
    fn from_ref(s: &InventoryState) -> Self {
        MetricsState {
            handle: s.metrics.clone(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        employees::list_employees,
        employees::get_employee,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        sections::list_sections,
        sections::get_section,
        sections::create_section,
        sections::update_section,
        sections::delete_section,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            employees::EmployeeResponse,
            employees::CreateEmployeeRequest,
            employees::UpdateEmployeeRequest,
            sections::SectionResponse,
            sections::CreateSectionRequest,
            sections::UpdateSectionRequest,
            products::ProductResponse,
            products::CreateProductRequest,
            products::UpdateProductRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Employees", description = "Warehouse staff, unique by card_number_id"),
        (name = "Sections", description = "Warehouse sections, unique by section_number"),
        (name = "Products", description = "Product catalog, unique by product_code"),
    ),
    info(
        title = "Warehouse Inventory API",
        version = "1.0.0",
        description = "CRUD over employees, sections and products",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the full application router.
pub fn create_router(state: InventoryState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let employee_routes = Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .patch(employees::update_employee)
                .delete(employees::delete_employee),
        );

    let section_routes = Router::new()
        .route(
            "/",
            get(sections::list_sections).post(sections::create_section),
        )
        .route(
            "/{id}",
            get(sections::get_section)
                .patch(sections::update_section)
                .delete(sections::delete_section),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        );

    let swagger_routes =
        SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route("/metrics", get(prometheus_metrics))
        .nest("/api/v1/employees", employee_routes)
        .nest("/api/v1/sections", section_routes)
        .nest("/api/v1/products", product_routes)
        .with_state(state)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
