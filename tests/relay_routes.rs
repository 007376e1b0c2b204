//! End-to-end tests: relay in front of a mock upstream.

use serde_json::{json, Value};

mod common;

async fn get(url: String) -> (u16, Value, reqwest::header::HeaderMap) {
    let res = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
        .get(url)
        .send()
        .await
        .expect("relay unreachable");
    let status = res.status().as_u16();
    let headers = res.headers().clone();
    (status, res.json().await.unwrap(), headers)
}

fn ten_items() -> Value {
    Value::Array((0..10).map(|i| json!({"ispb": format!("{i:08}"), "rank": i})).collect())
}

#[tokio::test]
async fn test_catalogs_truncated_to_first_five() {
    let upstream = common::start_mock_upstream(200, ten_items()).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for path in ["/api/banks", "/api/corretoras", "/api/pix"] {
        let (status, body, _) = get(relay.url(path)).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body["status"], "success");

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 5, "{path}");
        for (i, item) in data.iter().enumerate() {
            assert_eq!(item["rank"], i, "{path}");
        }
    }

    assert_eq!(
        upstream.hits(),
        vec!["/api/banks/v1", "/api/corretoras/v1", "/api/pix/v1/participants"]
    );
}

#[tokio::test]
async fn test_non_catalog_lists_pass_through_whole() {
    let upstream = common::start_mock_upstream(200, ten_items()).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, body, _) = get(relay.url("/api/feriados/2024")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], ten_items());
}

#[tokio::test]
async fn test_object_payload_is_forwarded_unmodified() {
    let payload = json!({"cep": "01001000", "state": "SP", "city": "São Paulo"});
    let upstream = common::start_mock_upstream(200, payload.clone()).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, body, _) = get(relay.url("/api/cep/01001000")).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"status": "success", "data": payload}));
    assert_eq!(upstream.hits(), vec!["/api/cep/v2/01001000"]);
}

#[tokio::test]
async fn test_cambio_selects_usd() {
    let upstream = common::start_mock_upstream(200, json!({"cotacoes": []})).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, _, _) = get(relay.url("/api/cambio")).await;
    assert_eq!(status, 200);
    assert_eq!(upstream.hits(), vec!["/api/cambio?currency=USD"]);
}

#[tokio::test]
async fn test_upstream_503_maps_to_500_on_every_route() {
    let upstream = common::start_mock_upstream(503, json!({"message": "down"})).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for path in common::ALL_ROUTES {
        let (status, body, _) = get(relay.url(path)).await;
        assert_eq!(status, 500, "{path}");
        assert_eq!(body["status"], "error", "{path}");

        let message = body["message"].as_str().unwrap();
        assert!(!message.is_empty(), "{path}");
        assert!(message.contains("503"), "{path}: {message}");
    }

    assert_eq!(upstream.hits().len(), common::ALL_ROUTES.len());
}

#[tokio::test]
async fn test_holiday_year_bounds() {
    let upstream = common::start_mock_upstream(200, json!([])).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for year in [1900, 1901, 2000, 2099, 2100] {
        let (status, _, _) = get(relay.url(&format!("/api/feriados/{year}"))).await;
        assert_eq!(status, 200, "{year}");
    }
    for year in [0, 1000, 1899, 2101, 3000] {
        let (status, body, _) = get(relay.url(&format!("/api/feriados/{year}"))).await;
        assert_eq!(status, 400, "{year}");
        assert_eq!(body["message"], "Ano deve estar entre 1900 e 2100");
    }

    let hits = upstream.hits();
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0], "/api/feriados/v1/1900");
    assert_eq!(hits[4], "/api/feriados/v1/2100");
}

#[tokio::test]
async fn test_non_canonical_years_are_rejected() {
    let upstream = common::start_mock_upstream(200, json!([])).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for year in ["%2B2024", "02024", "-2024", "2024.0"] {
        let (status, body, _) = get(relay.url(&format!("/api/feriados/{year}"))).await;
        assert_eq!(status, 400, "{year}");
        assert_eq!(body["status"], "error", "{year}");
        assert_eq!(body["message"], "Ano deve estar entre 1900 e 2100");
    }
    assert!(upstream.hits().is_empty(), "{:?}", upstream.hits());

    let (status, _, _) = get(relay.url("/api/feriados/2024")).await;
    assert_eq!(status, 200);
    assert_eq!(upstream.hits(), vec!["/api/feriados/v1/2024".to_string()]);
}

#[tokio::test]
async fn test_undecodable_key_gets_json_envelope() {
    let upstream = common::start_mock_upstream(200, json!({})).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for path in ["/api/cep/%FF", "/api/ibge/nomes/%C3%28", "/api/registrobr/a%FF.br"] {
        let (status, body, headers) = get(relay.url(path)).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(headers["content-type"], "application/json", "{path}");
        assert_eq!(body["status"], "error", "{path}");
        assert!(!body["message"].as_str().unwrap().is_empty(), "{path}");
    }
    assert!(upstream.hits().is_empty());
}

#[tokio::test]
async fn test_invalid_parameters_never_reach_upstream() {
    let upstream = common::start_mock_upstream(200, json!({})).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for path in [
        "/api/cep/0100100",
        "/api/cep/0100100a",
        "/api/cnpj/1913124300019",
        "/api/ddd/011",
        "/api/fipe/0380031",
        "/api/fipe/038-0031",
        "/api/isbn/978854570287",
        "/api/ncm/01012100",
        "/api/registrobr/localhost",
    ] {
        let (status, body, _) = get(relay.url(path)).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(body["status"], "error", "{path}");
    }

    assert!(upstream.hits().is_empty());
}

#[tokio::test]
async fn test_non_json_upstream_body_is_an_error() {
    let upstream =
        common::start_raw_upstream(200, "text/html", "<html>maintenance</html>".into()).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, body, _) = get(relay.url("/api/taxas")).await;
    assert_eq!(status, 500);
    assert_eq!(body["status"], "error");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_json_scalar_payload_is_relayed() {
    let upstream = common::start_mock_upstream(200, json!("ok")).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, body, _) = get(relay.url("/api/taxas")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], "ok");
}

#[tokio::test]
async fn test_landing_page_status_and_fallback() {
    let upstream = common::start_mock_upstream(200, json!({})).await;
    let relay = common::start_relay(&upstream.base_url()).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(relay.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(res.text().await.unwrap().contains("/api/cep/"));

    let (status, body, _) = get(relay.url("/status")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["state"], "operational");
    assert_eq!(body["data"]["upstream"], upstream.base_url());

    let (status, body, _) = get(relay.url("/api/unknown")).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"status": "error", "message": "Not Found"}));

    assert!(upstream.hits().is_empty());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let upstream = common::start_mock_upstream(200, json!({})).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (_, _, headers) = get(relay.url("/api/taxas")).await;
    let generated = headers["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let res = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
        .get(relay.url("/api/taxas"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-me");
}
