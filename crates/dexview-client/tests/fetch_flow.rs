//! fetch_flow.rs
//!
//! Exercises `CatalogClient` against a local mock of the upstream API.

use std::time::Duration;

use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dexview_client::{CatalogClient, Evolution, FetchError};
use dexview_core::config::CatalogConfig;

const STATS: [&str; 6] = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];

fn client_for(server: &MockServer) -> CatalogClient {
    let mut cfg = CatalogConfig::default();
    cfg.api.base_url = server.uri();
    cfg.api.list_limit = 3;
    CatalogClient::new(&cfg).unwrap()
}

fn detail_json(base: &str, id: u32, name: &str, types: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 100,
        "base_experience": 64,
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": { "name": t, "url": format!("{base}/type/{t}/") }
        })).collect::<Vec<_>>(),
        "stats": STATS.iter().map(|s| json!({
            "base_stat": 45,
            "effort": 0,
            "stat": { "name": s, "url": format!("{base}/stat/{s}/") }
        })).collect::<Vec<_>>(),
        "species": { "name": name, "url": format!("{base}/pokemon-species/{id}/") },
        "sprites": {
            "front_default": format!("{base}/sprites/{id}.png"),
            "other": { "official-artwork": { "front_default": null } }
        }
    })
}

fn species_json(base: &str, chain_id: u32) -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "genera": [
            { "genus": "たねポケモン", "language": { "name": "ja", "url": format!("{base}/language/1/") } },
            { "genus": "Seed Pokémon", "language": { "name": "en", "url": format!("{base}/language/9/") } }
        ],
        "flavor_text_entries": [
            { "flavor_text": "old text", "language": { "name": "en", "url": format!("{base}/language/9/") } },
            { "flavor_text": "A strange seed was\nplanted on its\u{000C}back at birth.", "language": { "name": "en", "url": format!("{base}/language/9/") } }
        ],
        "evolution_chain": { "url": format!("{base}/evolution-chain/{chain_id}/") }
    })
}

fn chain_json(base: &str) -> Value {
    let node = |id: u32, children: Vec<Value>| {
        json!({
            "species": { "name": format!("s{id}"), "url": format!("{base}/pokemon-species/{id}/") },
            "evolves_to": children
        })
    };
    json!({
        "id": 1,
        "chain": node(1, vec![node(2, vec![node(3, vec![])])])
    })
}

async fn mount_list(server: &MockServer, names: &[(u32, &str)]) {
    let base = server.uri();
    let results: Vec<Value> = names
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": format!("{base}/pokemon/{id}/") }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        })))
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, id: u32, name: &str, delay_ms: u64) {
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{id}/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(detail_json(&base, id, name, &["grass"]))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn collection_preserves_list_order() {
    let server = MockServer::start().await;
    let entries = [(1, "bulbasaur"), (2, "ivysaur"), (3, "venusaur")];
    mount_list(&server, &entries).await;
    // Earlier entries answer last.
    mount_detail(&server, 1, "bulbasaur", 150).await;
    mount_detail(&server, 2, "ivysaur", 75).await;
    mount_detail(&server, 3, "venusaur", 0).await;

    let client = client_for(&server);
    let all = client.fetch_collection().await.unwrap();

    let ids: Vec<u32> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(all[0].artwork_url(), Some(format!("{}/sprites/1.png", server.uri()).as_str()));
}

#[tokio::test]
async fn one_failed_detail_fails_the_batch() {
    let server = MockServer::start().await;
    mount_list(&server, &[(1, "bulbasaur"), (2, "ivysaur"), (3, "venusaur")]).await;
    mount_detail(&server, 1, "bulbasaur", 0).await;
    mount_detail(&server, 3, "venusaur", 0).await;
    Mock::given(method("GET"))
        .and(path("/pokemon/2/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_collection().await.unwrap_err();
    assert_matches!(err, FetchError::DetailFetch { status: 500, ref url } if url.ends_with("/pokemon/2/"));
}

#[tokio::test]
async fn list_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_collection().await.unwrap_err();
    assert_eq!(err.kind(), "list_fetch");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn malformed_detail_is_reported() {
    let server = MockServer::start().await;
    mount_list(&server, &[(1, "bulbasaur")]).await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "name": "bulbasaur" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_collection().await.unwrap_err();
    assert_matches!(err, FetchError::MalformedDetailResponse { .. });
}

#[tokio::test]
async fn evolution_columns_are_resolved() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/evolution-chain/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chain_json(&base)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cols = client
        .resolve_evolution_columns(&format!("{base}/evolution-chain/1/"))
        .await
        .unwrap();
    assert_eq!(cols, vec![vec!["1"], vec!["2"], vec!["3"]]);
}

#[tokio::test]
async fn evolution_status_is_reported() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    // Nothing mounted: wiremock answers 404.
    let err = client
        .resolve_evolution_columns(&format!("{}/evolution-chain/9/", server.uri()))
        .await
        .unwrap_err();
    assert_matches!(err, FetchError::EvolutionFetch { .. });
}

#[tokio::test]
async fn unreachable_evolution_chain_keeps_its_kind() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    // Port 9 (discard) has no listener, so the connection is refused.
    let err = client
        .resolve_evolution_columns("http://127.0.0.1:9/evolution-chain/1/")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "evolution_fetch");
    assert_matches!(err, FetchError::EvolutionFetch { url, .. } if url.ends_with("/evolution-chain/1/"));
}

#[tokio::test]
async fn profile_uses_latest_english_text() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_detail(&server, 1, "bulbasaur", 0).await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_json(&base, 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/evolution-chain/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chain_json(&base)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entity = client.fetch_entity("1").await.unwrap();
    let profile = client.load_profile(&entity).await.unwrap();

    assert_eq!(profile.genus(), Some("Seed Pokémon"));
    assert_eq!(profile.description(), "A strange seed was planted on its back at birth.");
    assert_eq!(profile.evolution.columns().map(|c| c.len()), Some(3));
}

#[tokio::test]
async fn evolution_failure_is_isolated_from_profile() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_detail(&server, 1, "bulbasaur", 0).await;
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_json(&base, 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/evolution-chain/1/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entity = client.fetch_entity("1").await.unwrap();
    let profile = client.load_profile(&entity).await.unwrap();

    assert_matches!(profile.evolution, Evolution::Unavailable(ref reason) if reason.contains("503"));
    assert!(profile.evolution.is_empty());
}

#[tokio::test]
async fn malformed_species_is_reported() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_detail(&server, 1, "bulbasaur", 0).await;
    let mut species = species_json(&base, 1);
    species.as_object_mut().unwrap().remove("flavor_text_entries");
    Mock::given(method("GET"))
        .and(path("/pokemon-species/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entity = client.fetch_entity("1").await.unwrap();
    let err = client.load_profile(&entity).await.unwrap_err();
    assert_matches!(err, FetchError::MalformedSpeciesResponse { ref reason, .. } if reason.contains("flavor_text_entries"));
}

#[tokio::test]
async fn species_status_is_a_detail_failure() {
    let server = MockServer::start().await;
    mount_detail(&server, 1, "bulbasaur", 0).await;

    let client = client_for(&server);
    let entity = client.fetch_entity("1").await.unwrap();
    let err = client.load_profile(&entity).await.unwrap_err();
    assert_matches!(err, FetchError::DetailFetch { status: 404, .. });
}

#[tokio::test]
async fn column_entities_keep_layout() {
    let server = MockServer::start().await;
    mount_detail(&server, 1, "bulbasaur", 0).await;
    mount_detail(&server, 2, "ivysaur", 0).await;

    let client = client_for(&server);
    let cols = vec![vec!["1".to_string()], vec!["2".to_string()]];
    let resolved = client.fetch_column_entities(&cols, &[]).await.unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[1][0].name, "ivysaur");
}

#[tokio::test]
async fn known_column_entities_are_not_refetched() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(&base, 1, "bulbasaur", &["grass"])))
        .expect(0)
        .mount(&server)
        .await;
    mount_detail(&server, 2, "ivysaur", 0).await;

    let client = client_for(&server);
    let known = client.fetch_detail(&format!("{base}/pokemon/2/")).await.unwrap();
    let bulbasaur: dexview_core::model::EntityDetail =
        serde_json::from_value(detail_json(&base, 1, "bulbasaur", &["grass"])).unwrap();

    let cols = vec![vec!["1".to_string()], vec!["2".to_string()]];
    let resolved = client
        .fetch_column_entities(&cols, &[bulbasaur, known])
        .await
        .unwrap();
    assert_eq!(resolved[0][0].name, "bulbasaur");
    assert_eq!(resolved[1][0].id, 2);
}

#[tokio::test]
async fn ping_hits_list_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302, "next": null, "previous": null, "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).ping().await.unwrap();
}

#[test]
fn invalid_base_url_is_rejected() {
    let mut cfg = CatalogConfig::default();
    cfg.api.base_url = "not a url".to_string();
    let err = CatalogClient::new(&cfg).unwrap_err();
    assert_eq!(err.kind(), "config");
}
