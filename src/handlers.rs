use crate::ai_client::{parse_json_response, AiClient};
use crate::config::Config;
use crate::dataset;
use crate::errors::{AppError, ResultExt};
use crate::images::{enrich_with_images, ImageClient};
use crate::models::*;
use crate::prompts::{build_structured_prompt, language_name, PromptValue};
use crate::prompts_config;
use crate::sanitize::{sanitize_placeholders, MISSING_DATA};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

const MAX_PLACE_RESULTS: usize = 25;
const MAX_GALLERY_IMAGES: usize = 8;

/// Shared application state injected into handlers.
///
/// Everything here is read-only at request time; the pipeline itself keeps
/// no state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the language-model provider.
    pub ai: AiClient,
    /// Client for stock-photo lookups.
    pub images: ImageClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ai = AiClient::new(&config);
        let images = ImageClient::new(&config);
        Self { config, ai, images }
    }
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-travel-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/trip-architect
///
/// Recommends a destination country for a budget, continent selection and
/// known languages, then attaches a hero image and an attraction gallery.
pub async fn trip_architect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Value>, AppError> {
    tracing::info!("POST /trip-architect - language: {}", req.language);
    let form = &req.form_data;

    let known_langs = match form.get("knownLanguages").and_then(|v| v.as_array()) {
        Some(items) if !items.is_empty() => items
            .iter()
            .filter_map(|l| {
                let language = l.get("language").and_then(|v| v.as_str())?;
                let level = l.get("level").and_then(|v| v.as_str())?;
                Some(format!("{} ({})", language, level))
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => "English (B1)".to_string(),
    };

    let continent =
        str_or_list_field(form, "continent").unwrap_or_else(|| MISSING_DATA.to_string());
    let budget = str_field(form, "budget").unwrap_or_else(|| MISSING_DATA.to_string());

    let entries = [
        ("Budget", Some(PromptValue::Text(format!("{} USD", budget)))),
        ("Selected continent(s)", Some(PromptValue::Text(continent))),
        ("Languages known", Some(PromptValue::Text(known_langs))),
    ];
    let user_prompt = format!(
        "{}\nOutput language: {}",
        build_structured_prompt(&entries, &req.language),
        language_name(&req.language)
    );

    let response_text = state
        .ai
        .complete(&prompts_config::trip_architect_system(), &user_prompt, Some(0.8))
        .await
        .context("Trip Architect")?;

    let raw: Value = parse_json_response(&response_text).context("Trip Architect")?;
    let sanitized = sanitize_placeholders(raw);
    let mut data = match sanitized {
        Value::Object(map) => map,
        other => {
            // Parser accepted a JSON value that is not an object; treat the
            // same as unparseable output.
            tracing::error!("Trip Architect: model returned non-object JSON: {}", other);
            return Err(AppError::Parse("AI did not return valid JSON".to_string()));
        }
    };

    let recommended_country = data
        .get("recommended_country")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    // Ensure country_code for the flag - use the AI value or the bundled table
    let has_code = data
        .get("country_code")
        .and_then(|v| v.as_str())
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);
    if !has_code {
        if let Some(code) = dataset::country_code_for_name(&recommended_country) {
            data.insert("country_code".to_string(), Value::String(code.to_string()));
        }
    }

    // Gallery: one image per recommended attraction. Each slot is an
    // independent top-level fetch, so these resolve concurrently - the one
    // place the pipeline fans out.
    let attractions = string_array(&data, "attractions_activities");
    let gallery_queries: Vec<String> = attractions
        .iter()
        .take(MAX_GALLERY_IMAGES)
        .map(|name| format!("{} {} landmark", name, recommended_country))
        .collect();
    let gallery_images: Vec<Option<String>> = futures::future::join_all(
        gallery_queries
            .iter()
            .map(|q| state.images.image_for_query(q, 400, 300)),
    )
    .await;

    let country_image = match gallery_images.first().and_then(|i| i.clone()) {
        Some(url) => Some(url),
        None => {
            state
                .images
                .image_for_query(
                    &format!(
                        "{} cultural landmark popular attraction",
                        recommended_country
                    ),
                    800,
                    400,
                )
                .await
        }
    };

    let resolved: Vec<String> = gallery_images.into_iter().flatten().collect();
    let captions: Vec<String> = attractions.into_iter().take(resolved.len()).collect();

    data.insert(
        "image_url".to_string(),
        country_image.map(Value::String).unwrap_or(Value::Null),
    );
    data.insert("gallery_images".to_string(), json!(resolved));
    data.insert("gallery_captions".to_string(), json!(captions));

    Ok(Json(json!({ "data": data })))
}

/// POST /api/v1/generate-plan
///
/// Full itinerary generation. The prompt is a direct template (three
/// variants keyed on `formData.type`) rather than the structured builder.
pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Value>, AppError> {
    tracing::info!("POST /generate-plan - language: {}", req.language);
    let form = &req.form_data;
    let lang_name = language_name(&req.language);

    let plan_type = str_field(form, "type").unwrap_or_default();
    let user_prompt = if plan_type == "discovery" {
        format!(
            "\nACT AS: Professional Travel Analyst.\nCOUNTRY: {}\nINTEREST: {}\n\nTASK: Provide country_overview, 7-10 best hidden gems/iconic spots, and 7-8 food recommendations.\nLANGUAGE: {}.",
            str_field(form, "to")
                .or_else(|| str_field(form, "country"))
                .unwrap_or_else(|| MISSING_DATA.to_string()),
            str_field(form, "interest").unwrap_or_else(|| "Adventure".to_string()),
            lang_name
        )
    } else if plan_type == "gastro" {
        format!(
            "\nACT AS: Budget & Culinary Architect.\nDESTINATION: {}\nTRAVELERS: {}\nDURATION: {} days\nFOOD PREF: {}\n\nTASK: Country overview, detailed budget breakdown, 10+ restaurants with signature dishes.\nLANGUAGE: {}.",
            str_field(form, "to").unwrap_or_else(|| MISSING_DATA.to_string()),
            str_field(form, "travelers").unwrap_or_else(|| "1".to_string()),
            str_field(form, "duration").unwrap_or_else(|| "7".to_string()),
            str_field(form, "foodPreference").unwrap_or_else(|| "Various".to_string()),
            lang_name
        )
    } else {
        format!(
            "\nACT AS: Travel Architect.\nFROM: {}\nTO: {}\nDATE: {}\nDURATION: {} days\nINTERESTS: {}\n\nTASK: Country overview, day-by-day itinerary, 8+ food recommendations.\nLANGUAGE: {}.",
            str_field(form, "from").unwrap_or_else(|| "Baku".to_string()),
            str_field(form, "to").unwrap_or_else(|| "Europe".to_string()),
            str_field(form, "travelDate").unwrap_or_else(|| "Flexible".to_string()),
            str_field(form, "duration").unwrap_or_else(|| "7".to_string()),
            str_or_list_field(form, "interests").unwrap_or_else(|| "Sightseeing".to_string()),
            lang_name
        )
    };

    let response_text = state
        .ai
        .complete(&prompts_config::generate_plan_system(), &user_prompt, None)
        .await
        .context("Generate Plan")?;

    let raw: Value = parse_json_response(&response_text).context("Generate Plan")?;
    let mut plan = match sanitize_placeholders(raw) {
        Value::Object(map) => map,
        other => {
            tracing::error!("Generate Plan: model returned non-object JSON: {}", other);
            return Err(AppError::Parse("AI did not return valid JSON".to_string()));
        }
    };

    // Hero image for the country overview
    let country = plan
        .get("recommended_destinations")
        .and_then(|d| d.get(0))
        .and_then(|d| d.get("name"))
        .and_then(|n| n.as_str())
        .map(String::from)
        .or_else(|| str_field(form, "to"))
        .or_else(|| str_field(form, "country"))
        .unwrap_or_else(|| "travel".to_string());
    let hero_image = state
        .images
        .image_for_query(&format!("{} travel", country), 800, 400)
        .await;

    let destinations = take_object_array(&mut plan, "recommended_destinations");
    let destinations = enrich_with_images(
        &state.images,
        destinations,
        |d| {
            d.get("name")
                .and_then(|v| v.as_str())
                .map(|name| format!("{} travel destination", name))
                .unwrap_or_default()
        },
        "image_url",
    )
    .await;

    let attractions = take_object_array(&mut plan, "attractions");
    let attractions = enrich_with_images(
        &state.images,
        attractions,
        |a| {
            a.get("name")
                .and_then(|v| v.as_str())
                .map(|name| format!("{} landmark", name))
                .unwrap_or_default()
        },
        "image_url",
    )
    .await;

    let food_recs = take_object_array(&mut plan, "food_recommendations");
    let food_recs = enrich_with_images(
        &state.images,
        food_recs,
        |f| {
            f.get("restaurant")
                .and_then(|v| v.as_str())
                .map(|name| format!("{} restaurant food", name))
                .unwrap_or_default()
        },
        "image_url",
    )
    .await;

    plan.insert(
        "hero_image_url".to_string(),
        hero_image.map(Value::String).unwrap_or(Value::Null),
    );
    plan.insert("recommended_destinations".to_string(), json!(destinations));
    plan.insert("attractions".to_string(), json!(attractions));
    plan.insert("food_recommendations".to_string(), json!(food_recs));

    Ok(Json(json!({ "plan": plan })))
}

/// POST /api/v1/spot-discovery
///
/// Finds sights in a country matching an interest and illustrates each one.
pub async fn spot_discovery(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Value>, AppError> {
    tracing::info!("POST /spot-discovery - language: {}", req.language);
    let form = &req.form_data;

    let entries = [
        (
            "Country",
            Some(PromptValue::Text(
                str_field(form, "country").unwrap_or_else(|| MISSING_DATA.to_string()),
            )),
        ),
        (
            "Interest",
            Some(PromptValue::Text(
                str_field(form, "interest").unwrap_or_else(|| "Adventure".to_string()),
            )),
        ),
    ];
    let user_prompt = format!(
        "{}\nTask: Analyze the country and find 6-10 best spots matching the interest. Output language: {}",
        build_structured_prompt(&entries, &req.language),
        language_name(&req.language)
    );

    let response_text = state
        .ai
        .complete(&prompts_config::spot_discovery_system(), &user_prompt, Some(0.7))
        .await
        .context("Spot Discovery")?;

    let raw: Value = parse_json_response(&response_text).context("Spot Discovery")?;
    let mut data = match sanitize_placeholders(raw) {
        Value::Object(map) => map,
        other => {
            tracing::error!("Spot Discovery: model returned non-object JSON: {}", other);
            return Err(AppError::Parse("AI did not return valid JSON".to_string()));
        }
    };

    let spots = take_object_array(&mut data, "spots");
    let spots = enrich_with_images(
        &state.images,
        spots,
        |s| {
            let name = s.get("name").and_then(|v| v.as_str()).unwrap_or_default();
            let location = s
                .get("location")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            if name.is_empty() {
                String::new()
            } else {
                format!("{} {} landmark", name, location)
            }
        },
        "image_url",
    )
    .await;

    data.insert("spots".to_string(), json!(spots));

    Ok(Json(json!({ "data": data })))
}

/// POST /api/v1/food-discovery
///
/// Culinary recommendations for a destination, each illustrated.
pub async fn food_discovery(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Value>, AppError> {
    tracing::info!("POST /food-discovery - language: {}", req.language);
    let form = &req.form_data;

    let entries = [
        (
            "Country or city",
            Some(PromptValue::Text(
                str_field(form, "country").unwrap_or_else(|| MISSING_DATA.to_string()),
            )),
        ),
        (
            "Taste preference",
            Some(PromptValue::Text(
                str_field(form, "tastes").unwrap_or_else(|| "Various".to_string()),
            )),
        ),
        (
            "Budget",
            Some(PromptValue::Text(
                str_field(form, "budget").unwrap_or_else(|| MISSING_DATA.to_string()),
            )),
        ),
        (
            "Special requirements",
            Some(PromptValue::Text(
                str_field(form, "special").unwrap_or_else(|| "None".to_string()),
            )),
        ),
    ];
    let user_prompt = format!(
        "{}\nOutput language: {}",
        build_structured_prompt(&entries, &req.language),
        language_name(&req.language)
    );

    let response_text = state
        .ai
        .complete(&prompts_config::food_discovery_system(), &user_prompt, Some(0.7))
        .await
        .context("Food Discovery")?;

    let raw: Value = parse_json_response(&response_text).context("Food Discovery")?;
    let mut data = match sanitize_placeholders(raw) {
        Value::Object(map) => map,
        other => {
            tracing::error!("Food Discovery: model returned non-object JSON: {}", other);
            return Err(AppError::Parse("AI did not return valid JSON".to_string()));
        }
    };

    let country = data
        .get("country")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let recommendations = take_object_array(&mut data, "recommendations");
    let recommendations = enrich_with_images(
        &state.images,
        recommendations,
        |r| {
            r.get("name")
                .and_then(|v| v.as_str())
                .map(|name| format!("{} {} food", name, country))
                .unwrap_or_default()
        },
        "image_url",
    )
    .await;

    let famous_spots = take_object_array(&mut data, "famous_culinary_spots");
    let famous_spots = enrich_with_images(
        &state.images,
        famous_spots,
        |s| {
            let name = s.get("name").and_then(|v| v.as_str()).unwrap_or_default();
            let city = s.get("city").and_then(|v| v.as_str()).unwrap_or_default();
            if name.is_empty() {
                String::new()
            } else {
                format!("{} {} food market", name, city)
            }
        },
        "image_url",
    )
    .await;

    data.insert("recommendations".to_string(), json!(recommendations));
    data.insert("famous_culinary_spots".to_string(), json!(famous_spots));

    Ok(Json(json!({ "data": data })))
}

/// GET /api/v1/places?q=&type=
///
/// Typeahead search over the bundled country/city table. A miss is not an
/// error: short or unmatched queries return empty arrays with 200.
pub async fn places(Query(params): Query<PlacesQuery>) -> Json<PlacesResponse> {
    let q = params.q.trim().to_lowercase();
    let search_type = params.search_type.as_str();

    if q.len() < 2 {
        return Json(PlacesResponse::default());
    }

    let mut response = PlacesResponse::default();

    if search_type == "countries" || search_type == "all" {
        response.countries = dataset::COUNTRIES
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&q))
            .take(MAX_PLACE_RESULTS)
            .map(|(name, code)| CountryHit {
                name: name.to_string(),
                iso_code: code.to_string(),
            })
            .collect();
    }

    if search_type == "places" || search_type == "all" {
        response.places = dataset::CITIES
            .iter()
            .filter(|(city, country_code)| {
                let country = dataset::country_name_for_code(country_code).unwrap_or_default();
                format!("{} {}", city, country).to_lowercase().contains(&q)
            })
            .take(MAX_PLACE_RESULTS)
            .map(|(city, country_code)| {
                let country = dataset::country_name_for_code(country_code)
                    .unwrap_or(country_code)
                    .to_string();
                let label = format!("{}, {}", city, country);
                PlaceHit {
                    value: label.clone(),
                    label,
                    city: city.to_string(),
                    country,
                }
            })
            .collect();
    }

    tracing::debug!(
        "GET /places q='{}' type='{}' -> {} countries, {} places",
        q,
        search_type,
        response.countries.len(),
        response.places.len()
    );

    Json(response)
}
