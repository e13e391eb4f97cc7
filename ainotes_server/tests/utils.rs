#![allow(dead_code)]

use ainotes::GenerationRequest;
use ainotes_server::models::{
    client::HttpClientConfig,
    config::{AiNotesConfig, MEMORY_DATABASE_URL, ServerConfig},
};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use reqwest::Response;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub type TestError = Box<dyn std::error::Error + Send + Sync>;
pub type TestResult = Result<(), TestError>;

/// Address of a closed port, for apps whose model API should never be hit.
pub const OFFLINE_MODEL_API: &str = "http://127.0.0.1:9";

pub async fn assert_ok_response(response: Response) -> Result<Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let body = response.text().await.map_err(|err| format!("{err:?}"))?;
        Err(body)
    }
}

/// Serve a router on a random local port and return its base URL.
pub async fn serve(router: Router) -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://{addr}"))
}

/// Spawn the app with an in-memory store and the given model API.
pub async fn spawn_app(model_api_url: &str) -> Result<String, TestError> {
    let config = AiNotesConfig {
        database_url: MEMORY_DATABASE_URL.to_string(),
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
        },
        generation: HttpClientConfig::new(model_api_url).with_bearer_token("test-key"),
    };
    let state = ainotes_server::init(config).await?;
    serve(ainotes_server::app(state)).await
}

async fn describe_completion_request(
    headers: HeaderMap,
    Json(request): Json<GenerationRequest>,
) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let system = request
        .messages
        .first()
        .map(|message| message.content.clone())
        .unwrap_or_default();
    let prompt = request
        .messages
        .last()
        .map(|message| message.content.clone())
        .unwrap_or_default();
    let content = format!(
        "model={}\nauth={auth}\ntemperature={:?}\nsystem={system}\n{prompt}",
        request.model, request.temperature
    );
    Json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    }))
}

/// OpenAI-compatible API whose completions describe the request they got.
pub async fn spawn_model_api() -> Result<String, TestError> {
    let router = Router::new().route("/chat/completions", post(describe_completion_request));
    serve(router).await
}

/// OpenAI-compatible API that rejects every request.
pub async fn spawn_failing_model_api() -> Result<String, TestError> {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": {"message": "rate limit reached"}})),
            )
        }),
    );
    serve(router).await
}

/// A PDF with one page of text per entry in `pages`.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content should encode"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("PDF should save");
    bytes
}
