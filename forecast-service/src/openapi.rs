use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use common::models::{ForecastRequest, ForecastResponse, ForecastStatistics, GenerateResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_forecasts,
        handlers::create_forecast,
        handlers::get_forecast,
        handlers::update_forecast,
        handlers::delete_forecast,
        handlers::get_statistics,
        handlers::generate_samples,
    ),
    components(schemas(
        ForecastRequest,
        ForecastResponse,
        ForecastStatistics,
        GenerateResponse,
    )),
    tags(
        (name = "forecasts", description = "Forecast CRUD endpoints"),
        (name = "statistics", description = "Temperature statistics"),
        (name = "samples", description = "Sample data generation"),
    ),
)]
struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
