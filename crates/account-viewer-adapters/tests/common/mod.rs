#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::json;
use tiny_http::{Method, Response, Server, StatusCode};

use account_viewer_adapters::ViewerConfig;
use account_viewer_core::PublicKey;

pub const KEY: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
pub const UNKNOWN_KEY: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

pub fn key() -> PublicKey {
    PublicKey::parse(KEY).expect("valid key")
}

pub fn unknown_key() -> PublicKey {
    PublicKey::parse(UNKNOWN_KEY).expect("valid key")
}

pub type Calls = Arc<Mutex<Vec<String>>>;

pub fn config_for(base_url: String) -> ViewerConfig {
    ViewerConfig {
        horizon_url: base_url,
        http_enabled: true,
        http_timeout_ms: 5_000,
        poll_interval_ms: 100,
        payments_limit: 2,
        ..ViewerConfig::default()
    }
}

/// Serves a fixed Horizon fixture until the process exits.
pub fn spawn_mock_horizon(calls: Calls) -> String {
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());

    thread::spawn(move || {
        for req in server.incoming_requests() {
            let path = req.url().to_owned();
            if let Ok(mut g) = calls.lock() {
                g.push(path.clone());
            }

            let account_path = format!("/accounts/{KEY}");
            let payments_path = format!("/accounts/{KEY}/payments");
            let (code, payload) = match (req.method(), path.as_str()) {
                (Method::Get, p) if p == account_path => (
                    200,
                    json!({
                        "id": KEY,
                        "account_id": KEY,
                        "sequence": "123456789",
                        "balances": [
                            {"balance": "9999.9999900", "asset_type": "native"},
                            {
                                "balance": "12.5000000",
                                "asset_type": "credit_alphanum4",
                                "asset_code": "USDC",
                                "asset_issuer": UNKNOWN_KEY
                            }
                        ]
                    }),
                ),
                (Method::Get, p) if p.starts_with(&payments_path) => (
                    200,
                    json!({
                        "_embedded": {
                            "records": [
                                {
                                    "id": "2",
                                    "type": "payment",
                                    "created_at": "2024-05-02T10:00:00Z",
                                    "transaction_hash": "bb",
                                    "amount": "5.0000000",
                                    "asset_type": "native",
                                    "from": KEY,
                                    "to": UNKNOWN_KEY
                                },
                                {
                                    "id": "1",
                                    "type": "create_account",
                                    "created_at": "2024-05-01T10:00:00Z",
                                    "transaction_hash": "aa"
                                }
                            ]
                        }
                    }),
                ),
                _ => (404, json!({"status": 404, "title": "Resource Missing"})),
            };

            let response =
                Response::from_string(payload.to_string()).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    addr
}
