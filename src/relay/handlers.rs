//! Per-resource relay handlers.

use std::time::Instant;

use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::error::RelayError;
use crate::relay::resource::Resource;

pub type RelayResult = Result<Json<Envelope>, RelayError>;

/// Routes for every relayed resource.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(Resource::Banks.route(), get(banks))
        .route(Resource::Cambio.route(), get(cambio))
        .route(Resource::Cep.route(), get(cep))
        .route(Resource::Cnpj.route(), get(cnpj))
        .route(Resource::Corretoras.route(), get(corretoras))
        .route(Resource::Cptec.route(), get(cptec))
        .route(Resource::Ddd.route(), get(ddd))
        .route(Resource::Feriados.route(), get(feriados))
        .route(Resource::Fipe.route(), get(fipe))
        .route(Resource::IbgeNomes.route(), get(ibge_nomes))
        .route(Resource::Isbn.route(), get(isbn))
        .route(Resource::Ncm.route(), get(ncm))
        .route(Resource::Pix.route(), get(pix))
        .route(Resource::RegistroBr.route(), get(registrobr))
        .route(Resource::Taxas.route(), get(taxas))
}

/// The path parameter of a keyed route.
///
/// Unlike a bare `Path<String>`, an unreadable segment is rejected with the
/// JSON envelope.
pub struct Key(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Key {
    type Rejection = RelayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(key)) => Ok(Key(key)),
            Err(rejection) => {
                tracing::warn!(
                    path = %parts.uri.path(),
                    error = %rejection.body_text(),
                    "Unreadable path parameter"
                );
                Err(RelayError::Path(rejection))
            }
        }
    }
}

/// Validate → forward → envelope for one request.
pub async fn relay(state: &AppState, resource: Resource, key: Option<&str>) -> RelayResult {
    let start_time = Instant::now();
    let outcome = forward(state, resource, key).await;

    let status = match &outcome {
        Ok(_) => 200,
        Err(e) => e.status_code().as_u16(),
    };
    metrics::record_relay(resource.name(), status, start_time);

    outcome.map(|data| Json(Envelope::success(data)))
}

async fn forward(state: &AppState, resource: Resource, key: Option<&str>) -> Result<Value, RelayError> {
    if let Some(key) = key {
        if let Err(e) = resource.validate(key) {
            tracing::warn!(resource = %resource, key = %key, "Invalid parameter received");
            return Err(e.into());
        }
    }

    let url = state.upstream.resource_url(resource, key);
    tracing::info!(resource = %resource, url = %url, "Querying upstream");

    match state.upstream.get_json(url.clone()).await {
        Ok(data) => Ok(resource.shape(data)),
        Err(e) => {
            tracing::error!(
                resource = %resource,
                url = %url,
                upstream_status = ?e.upstream_status(),
                error = %e,
                "Upstream query failed"
            );
            Err(e.into())
        }
    }
}

pub async fn banks(State(state): State<AppState>) -> RelayResult {
    relay(&state, Resource::Banks, None).await
}

pub async fn cambio(State(state): State<AppState>) -> RelayResult {
    relay(&state, Resource::Cambio, None).await
}

pub async fn cep(State(state): State<AppState>, Key(cep): Key) -> RelayResult {
    relay(&state, Resource::Cep, Some(&cep)).await
}

pub async fn cnpj(State(state): State<AppState>, Key(cnpj): Key) -> RelayResult {
    relay(&state, Resource::Cnpj, Some(&cnpj)).await
}

pub async fn corretoras(State(state): State<AppState>) -> RelayResult {
    relay(&state, Resource::Corretoras, None).await
}

/// Weather forecast for a CPTEC city code.
pub async fn cptec(State(state): State<AppState>, Key(city_code): Key) -> RelayResult {
    relay(&state, Resource::Cptec, Some(&city_code)).await
}

pub async fn ddd(State(state): State<AppState>, Key(ddd): Key) -> RelayResult {
    relay(&state, Resource::Ddd, Some(&ddd)).await
}

// Taken as text so a non-numeric year gets the same envelope as an out-of-range one.
pub async fn feriados(State(state): State<AppState>, Key(ano): Key) -> RelayResult {
    relay(&state, Resource::Feriados, Some(&ano)).await
}

pub async fn fipe(State(state): State<AppState>, Key(codigo_fipe): Key) -> RelayResult {
    relay(&state, Resource::Fipe, Some(&codigo_fipe)).await
}

/// Name frequency statistics.
pub async fn ibge_nomes(State(state): State<AppState>, Key(nome): Key) -> RelayResult {
    relay(&state, Resource::IbgeNomes, Some(&nome)).await
}

pub async fn isbn(State(state): State<AppState>, Key(isbn): Key) -> RelayResult {
    relay(&state, Resource::Isbn, Some(&isbn)).await
}

pub async fn ncm(State(state): State<AppState>, Key(code): Key) -> RelayResult {
    relay(&state, Resource::Ncm, Some(&code)).await
}

pub async fn pix(State(state): State<AppState>) -> RelayResult {
    relay(&state, Resource::Pix, None).await
}

pub async fn registrobr(State(state): State<AppState>, Key(domain): Key) -> RelayResult {
    relay(&state, Resource::RegistroBr, Some(&domain)).await
}

pub async fn taxas(State(state): State<AppState>) -> RelayResult {
    relay(&state, Resource::Taxas, None).await
}
