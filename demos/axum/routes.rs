use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Joke {
    joke: &'static str,
    response: &'static str,
}

pub async fn joke() -> Json<Joke> {
    Json(Joke {
        joke: "Why do programmers prefer dark mode?",
        response: "Because light attracts bugs.",
    })
}

pub async fn health() -> &'static str {
    "ok"
}
