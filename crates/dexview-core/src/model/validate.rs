//! Structural validation at the network boundary.
//!
//! Upstream payloads are untrusted JSON. Each `decode_*` function checks the
//! shape the rest of the crate relies on and returns a typed model, or a
//! [`CoreError::Malformed`] naming the resource and the first problem found.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{CoreError, CoreResult};
use crate::model::{EntityDetail, EvolutionChain, ListResponse, SpeciesDetail};

/// Check the fields the species view depends on:
/// - `genera` is an array
/// - `flavor_text_entries` is an array
/// - `evolution_chain.url` is a string
pub fn validate_species_value(v: &Value) -> CoreResult<()> {
    let obj = v
        .as_object()
        .ok_or_else(|| CoreError::malformed("species", "expected JSON object"))?;

    if !obj.get("genera").is_some_and(Value::is_array) {
        return Err(CoreError::malformed("species", "missing or non-array `genera`"));
    }
    if !obj.get("flavor_text_entries").is_some_and(Value::is_array) {
        return Err(CoreError::malformed(
            "species",
            "missing or non-array `flavor_text_entries`",
        ));
    }
    let chain_url = obj
        .get("evolution_chain")
        .and_then(Value::as_object)
        .and_then(|c| c.get("url"));
    if !chain_url.is_some_and(Value::is_string) {
        return Err(CoreError::malformed(
            "species",
            "missing or non-string `evolution_chain.url`",
        ));
    }
    Ok(())
}

pub fn decode_species(v: Value) -> CoreResult<SpeciesDetail> {
    validate_species_value(&v)?;
    decode_as("species", v)
}

pub fn decode_detail(v: Value) -> CoreResult<EntityDetail> {
    let detail: EntityDetail = decode_as("detail", v)?;
    detail.validate()?;
    Ok(detail)
}

pub fn decode_list(v: Value) -> CoreResult<ListResponse> {
    decode_as("list", v)
}

pub fn decode_evolution_chain(v: Value) -> CoreResult<EvolutionChain> {
    decode_as("evolution chain", v)
}

fn decode_as<T: DeserializeOwned>(resource: &'static str, v: Value) -> CoreResult<T> {
    serde_json::from_value(v).map_err(|e| CoreError::malformed(resource, e.to_string()))
}
