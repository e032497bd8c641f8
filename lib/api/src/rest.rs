use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use etoile_core::RestaurantRecord;
use etoile_engine::{EngineError, Recommendation, RecommendationEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct NameQuery {
    q: String,
}

#[derive(Deserialize)]
struct RecommendQuery {
    q: String,
    top_n: Option<usize>,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RecommendResult<'a> {
    matched: &'a str,
    recommendations: &'a [etoile_engine::ScoredRestaurant],
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<RecommendationEngine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .configure(Self::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register all routes; expects `web::Data<Arc<RecommendationEngine>>`
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/statistics", web::get().to(get_statistics))
            .route("/restaurants", web::get().to(list_restaurants))
            .route("/restaurants/{name}", web::get().to(get_restaurant))
            .route("/match", web::get().to(find_match))
            .route("/recommend", web::get().to(recommend))
            .route("/suggestions", web::get().to(suggestions))
            .route("/search/cuisine", web::get().to(search_by_cuisine))
            .route("/search/location", web::get().to(search_by_location));
    }
}

async fn get_statistics(
    engine: web::Data<Arc<RecommendationEngine>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(engine.statistics()))
}

async fn list_restaurants(
    engine: web::Data<Arc<RecommendationEngine>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": engine.restaurant_names()
    })))
}

async fn get_restaurant(
    engine: web::Data<Arc<RecommendationEngine>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    match engine.restaurant_details(&name) {
        Some(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": record
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Restaurant not found"
        }))),
    }
}

async fn find_match(
    engine: web::Data<Arc<RecommendationEngine>>,
    query: web::Query<NameQuery>,
) -> ActixResult<HttpResponse> {
    match engine.find_closest_match(&query.q) {
        Some(name) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": name
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "No matching restaurant"
        }))),
    }
}

async fn recommend(
    engine: web::Data<Arc<RecommendationEngine>>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let top_n = query.top_n.unwrap_or(engine.config().default_top_n);

    match engine.recommend(&query.q, top_n) {
        Ok(Recommendation::Found { matched, results }) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": RecommendResult {
                matched: &matched,
                recommendations: &results,
            }
        }))),
        Ok(Recommendation::NotFound {
            reason,
            message,
            suggestions,
            ..
        }) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": message,
            "reason": reason,
            "suggestions": suggestions,
        }))),
        Err(e @ EngineError::InvalidArgument(_)) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
        Err(e) => {
            tracing::error!("Recommendation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

async fn suggestions(
    engine: web::Data<Arc<RecommendationEngine>>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query.limit.unwrap_or(engine.config().default_limit);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": engine.suggestions(&query.q, limit)
    })))
}

async fn search_by_cuisine(
    engine: web::Data<Arc<RecommendationEngine>>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query.limit.unwrap_or(engine.config().default_limit);
    Ok(records_response(engine.search_by_cuisine(&query.q, limit)))
}

async fn search_by_location(
    engine: web::Data<Arc<RecommendationEngine>>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query.limit.unwrap_or(engine.config().default_limit);
    Ok(records_response(engine.search_by_location(&query.q, limit)))
}

fn records_response(records: Vec<&RestaurantRecord>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "result": records
    }))
}
