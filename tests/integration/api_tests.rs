//! API integration tests
//!
//! The router is driven in-process with a fake remote API that answers canned
//! payloads by method and path and records every call it receives. Answers can also
//! be queued with a delay to make requests overlap.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use reqwest::Method;
use serde_json::{json, Value};
use tower::ServiceExt;

use biblioteca_server::{
    api,
    client::{RemoteRequest, Transport},
    config::AppConfig,
    services::Services,
    AppError, AppResult, AppState,
};

enum Canned {
    Json(Value),
    Status(u16),
}

#[derive(Default)]
struct FakeRemote {
    routes: Mutex<HashMap<(Method, String), Canned>>,
    delayed: Mutex<HashMap<(Method, String), VecDeque<(Duration, Value)>>>,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl FakeRemote {
    fn answer(&self, method: Method, path: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Canned::Json(body));
    }

    /// Queue a one-off answer sent after `delay`, ahead of the canned one
    fn answer_after(&self, method: Method, path: &str, delay: Duration, body: Value) {
        self.delayed
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back((delay, body));
    }

    fn fail(&self, method: Method, path: &str, status: u16) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Canned::Status(status));
    }

    fn calls_to(&self, method: Method, path: &str) -> Vec<RemoteRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeRemote {
    async fn send(&self, request: RemoteRequest) -> AppResult<Value> {
        self.calls.lock().unwrap().push(request.clone());
        let key = (request.method.clone(), request.path.clone());

        let queued = self
            .delayed
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        if let Some((delay, body)) = queued {
            tokio::time::sleep(delay).await;
            return Ok(body);
        }

        let routes = self.routes.lock().unwrap();
        match routes.get(&key) {
            Some(Canned::Json(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(AppError::Remote {
                status: *status,
                message: "fake failure".to_string(),
            }),
            None => Err(AppError::Network(format!(
                "connection refused: {} {}",
                request.method, request.path
            ))),
        }
    }
}

fn aluno(id: i64, email: &str) -> Value {
    json!({
        "id": id, "cpf": "12345678900", "nome": "Test", "sobrenome": "Student",
        "nascimento": "2000-01-01", "email": email, "tel1": "123", "tel2": "456",
        "endereco": "Test Address 123"
    })
}

fn livro(id: i64, titulo: &str, tiragens: Value) -> Value {
    json!({
        "id": id, "url": format!("http://remote/api/v1/exemplares/{}/", id), "titulo": titulo,
        "descricao": "", "editora": "Garnier", "autor": "Machado de Assis",
        "ano_publicacao": "1899", "total_exemplares": 2, "tiragens": tiragens
    })
}

fn emprestimo(id: i64, dt_devolucao: Option<&str>) -> Value {
    json!({
        "id": id, "aluno": 1, "nome_aluno": "Test Student", "tiragem": 10 + id,
        "titulo_livro": format!("Book {}", id), "isbn_livro": "978",
        "dt_emprestimo": "2023-01-01", "previsao_devolucao": "2023-01-15",
        "dt_devolucao": dt_devolucao
    })
}

/// Fake remote with a working token exchange
fn remote() -> Arc<FakeRemote> {
    let remote = Arc::new(FakeRemote::default());
    remote.answer(Method::POST, "/token/", json!({"access": "acc", "refresh": "ref"}));
    remote
}

fn build_app(remote: &Arc<FakeRemote>) -> (Router, AppState) {
    let mut config = AppConfig::default();
    config.remote_api.token_url = Some("/token/".to_string());
    config.retry.attempts = 1;

    let services = Services::new(remote.clone(), &config);
    let state = AppState::new(config, services);
    (api::create_router(state.clone()), state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let remote = remote();
    let (app, _) = build_app(&remote);

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(remote.call_count(), 0);
}

#[tokio::test]
async fn test_readiness_reflects_token_exchange() {
    let remote = remote();
    let (app, state) = build_app(&remote);
    let (status, _) = call(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(remote.calls_to(Method::POST, "/token/").len(), 1);
    // Checking readiness leaves the session tokens alone
    assert_eq!(state.context.auth.get_access_token(), None);

    let remote = Arc::new(FakeRemote::default());
    let (app, _) = build_app(&remote);
    let (status, body) = call(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_empty_partial_update_never_reaches_remote() {
    let remote = remote();
    let (app, _) = build_app(&remote);

    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/rpc/alunos/1")
        .header(header::AUTHORIZATION, "Bearer acc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .expect("Failed to build request");
    let response = app.clone().oneshot(request).await.expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(remote.call_count(), 0);

    let (_, banner) = call(&app, Method::GET, "/api/banner", None).await;
    assert_eq!(banner["kind"], "error");
}

#[tokio::test]
async fn test_missing_token_is_an_authentication_error() {
    let remote = remote();
    let (app, _) = build_app(&remote);

    // No header and nothing in the auth store yet
    let (status, body) = call(&app, Method::GET, "/api/rpc/alunos", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Erro de autenticação. Faça login novamente.");
    assert_eq!(remote.call_count(), 0);
}

#[tokio::test]
async fn test_rpc_uses_token_from_page_load() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    let (app, _) = build_app(&remote);

    let (status, _) = call(&app, Method::GET, "/alunos", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::GET, "/api/rpc/alunos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["email"], "a@x.com");

    let calls = remote.calls_to(Method::GET, "/alunos/");
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.bearer.as_deref() == Some("acc")));
}

#[tokio::test]
async fn test_student_detail_shows_loan_statuses() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.answer(
        Method::GET,
        "/aluno/1/emprestimos/",
        json!([emprestimo(1, None), emprestimo(2, Some("2023-02-10"))]),
    );
    let (app, _) = build_app(&remote);

    let (status, page) = call(&app, Method::GET, "/alunos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["state"], "ready");
    assert_eq!(page["data"]["aluno"]["email"], "a@x.com");
    assert_eq!(page["data"]["editando"], false);

    let statuses: Vec<&str> = page["data"]["emprestimos"]
        .as_array()
        .expect("loan rows")
        .iter()
        .filter_map(|row| row["status"].as_str())
        .collect();
    assert_eq!(statuses, ["Em andamento", "Devolvido em 10/02/2023"]);
}

#[tokio::test]
async fn test_student_without_loans_and_unknown_student() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.fail(Method::GET, "/aluno/1/emprestimos/", 404);
    let (app, _) = build_app(&remote);

    let (_, page) = call(&app, Method::GET, "/alunos/1", None).await;
    assert_eq!(page["state"], "ready");
    assert_eq!(page["data"]["emprestimos"], json!([]));

    let (status, page) = call(&app, Method::GET, "/alunos/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["state"], "not_found");
    assert_eq!(page["data"]["message"], "Aluno não encontrado.");
}

#[tokio::test]
async fn test_page_failure_renders_fallback() {
    // Token exchange works, the catalog listing does not
    let remote = remote();
    remote.fail(Method::GET, "/api/v1/exemplares/", 500);
    let (app, _) = build_app(&remote);

    let (status, page) = call(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["state"], "failed");
    assert_eq!(
        page["data"]["message"],
        "Erro ao carregar os dados. Por favor, tente novamente."
    );

    let (_, page) = call(&app, Method::GET, "/7", None).await;
    assert_eq!(page["state"], "failed");
    assert_eq!(
        page["data"]["message"],
        "Erro ao carregar os detalhes do livro. Por favor, tente novamente."
    );
}

#[tokio::test]
async fn test_book_detail() {
    let remote = remote();
    remote.answer(
        Method::GET,
        "/api/v1/exemplares/1/",
        livro(1, "Dom Casmurro", json!([
            {"id": 10, "isbn": "978", "livro": 1, "disponivel": false},
            {"id": 11, "isbn": "979", "livro": 1, "disponivel": true}
        ])),
    );
    remote.fail(Method::GET, "/api/v1/exemplares/2/", 404);
    let (app, state) = build_app(&remote);

    let (_, page) = call(&app, Method::GET, "/1", None).await;
    assert_eq!(page["state"], "ready");
    assert_eq!(page["data"]["disponiveis"], 1);
    assert_eq!(page["data"]["livro"]["ano_publicacao"], 1899);

    // Visiting twice does not duplicate the cached book
    call(&app, Method::GET, "/1", None).await;
    assert_eq!(state.context.livros.len(), 1);

    let (_, page) = call(&app, Method::GET, "/2", None).await;
    assert_eq!(page["state"], "not_found");
    assert_eq!(page["data"]["message"], "Livro não encontrado.");
}

#[tokio::test(start_paused = true)]
async fn test_edit_mode_round_trip() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.answer(Method::GET, "/aluno/1/emprestimos/", json!([]));
    remote.answer(
        Method::PATCH,
        "/alunos/1/",
        json!({"status": "atualizado", "dados": aluno(1, "b@x.com")}),
    );
    let (app, state) = build_app(&remote);
    call(&app, Method::GET, "/alunos/1", None).await;

    // Cancel restores the displayed value
    let (_, view) = call(&app, Method::POST, "/api/alunos/1/edicao", None).await;
    assert_eq!(view["editando"], true);
    let (_, view) = call(
        &app,
        Method::PUT,
        "/api/alunos/1/edicao",
        Some(json!({"field": "email", "value": "b@x.com"})),
    )
    .await;
    assert_eq!(view["aluno"]["email"], "b@x.com");
    let (_, view) = call(&app, Method::DELETE, "/api/alunos/1/edicao", None).await;
    assert_eq!(view["aluno"]["email"], "a@x.com");
    assert_eq!(view["editando"], false);
    assert!(remote.calls_to(Method::PATCH, "/alunos/1/").is_empty());

    // Saving sends only the changed field and patches the store
    call(&app, Method::POST, "/api/alunos/1/edicao", None).await;
    call(
        &app,
        Method::PUT,
        "/api/alunos/1/edicao",
        Some(json!({"field": "email", "value": "b@x.com"})),
    )
    .await;
    let (status, outcome) = call(&app, Method::POST, "/api/alunos/1/edicao/salvar", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["banner"]["message"], "Alterações salvas com sucesso!");

    let patches = remote.calls_to(Method::PATCH, "/alunos/1/");
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].body, Some(json!({"email": "b@x.com"})));
    assert_eq!(patches[0].bearer.as_deref(), Some("acc"));
    assert_eq!(
        state.context.alunos.get_aluno_by_id(1).map(|a| a.email),
        Some("b@x.com".to_string())
    );

    let (_, banner) = call(&app, Method::GET, "/api/banner", None).await;
    assert_eq!(banner["kind"], "success");

    tokio::time::advance(Duration::from_millis(3000)).await;
    let (_, banner) = call(&app, Method::GET, "/api/banner", None).await;
    assert!(banner.is_null());
}

#[tokio::test]
async fn test_save_without_changes_is_rejected() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.answer(Method::GET, "/aluno/1/emprestimos/", json!([]));
    let (app, _) = build_app(&remote);
    call(&app, Method::GET, "/alunos/1", None).await;

    call(&app, Method::POST, "/api/alunos/1/edicao", None).await;
    let (status, body) = call(&app, Method::POST, "/api/alunos/1/edicao/salvar", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Informe ao menos um campo para atualizar");
    assert!(remote.calls_to(Method::PATCH, "/alunos/1/").is_empty());
}

fn loans_page_remote() -> Arc<FakeRemote> {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.answer(
        Method::GET,
        "/api/v1/exemplares/",
        json!([
            livro(1, "Dom Casmurro", json!([
                {"id": 10, "isbn": "978", "livro": 1, "disponivel": false},
                {"id": 11, "isbn": "979", "livro": 1, "disponivel": true}
            ])),
            livro(2, "Memórias Póstumas", json!([
                {"id": 20, "isbn": "980", "livro": 2, "disponivel": false}
            ]))
        ]),
    );
    remote.answer(
        Method::GET,
        "/emprestimos/",
        json!([emprestimo(1, None), emprestimo(2, Some("2023-02-10"))]),
    );
    remote.answer(
        Method::GET,
        "/api/v1/livros/disponiveis/",
        json!([{"id": 11, "isbn": "979", "livro": 1, "disponivel": true}]),
    );
    remote.answer(Method::POST, "/emprestimos/", json!({"id": 42, "mensagem": "ok"}));
    remote
}

#[tokio::test]
async fn test_loans_page_and_pending_filter() {
    let remote = loans_page_remote();
    let (app, _) = build_app(&remote);

    let (_, page) = call(&app, Method::GET, "/emprestimos", None).await;
    assert_eq!(page["state"], "ready");
    assert_eq!(page["data"]["emprestimos"].as_array().map(Vec::len), Some(2));
    assert_eq!(page["data"]["tiragens_disponiveis"], 1);

    let livros = &page["data"]["formulario"]["livros"];
    assert_eq!(livros[0]["selectable"], true);
    assert_eq!(livros[1]["selectable"], false);
    assert_eq!(livros[1]["aviso"], "Sem exemplares disponíveis");

    let (_, page) = call(&app, Method::GET, "/emprestimos?pendentes=true", None).await;
    let rows = page["data"]["emprestimos"].as_array().expect("loan rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Em andamento");
}

#[tokio::test]
async fn test_loan_registration_gated_by_availability() {
    let remote = loans_page_remote();
    let (app, state) = build_app(&remote);
    call(&app, Method::GET, "/emprestimos", None).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/emprestimos/registrar",
        Some(json!({"aluno": 1, "livro": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Sem exemplares disponíveis");
    assert!(remote.calls_to(Method::POST, "/emprestimos/").is_empty());

    let (status, outcome) = call(
        &app,
        Method::POST,
        "/api/emprestimos/registrar",
        Some(json!({"aluno": 1, "livro": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["banner"]["message"], "Empréstimo registrado com sucesso! ID: 42");

    let posts = remote.calls_to(Method::POST, "/emprestimos/");
    assert_eq!(posts.len(), 1);
    let body = posts[0].body.as_ref().expect("loan payload");
    assert_eq!(body["aluno"], 1);
    assert_eq!(body["tiragem"], 11);

    // The loaned print-run is no longer offered
    let livro = state.context.livros.get_livro_by_id(1).expect("cached book");
    assert!(!livro.has_available_tiragem());
    let (_, form) = call(&app, Method::GET, "/api/emprestimos/formulario?busca_livro=casmurro", None).await;
    assert_eq!(form["livros"].as_array().map(Vec::len), Some(1));
    assert_eq!(form["livros"][0]["selectable"], false);
}

#[tokio::test]
async fn test_return_of_unknown_loan() {
    let remote = remote();
    remote.fail(Method::PATCH, "/devolucao/9/registrar/", 404);
    remote.answer(
        Method::PATCH,
        "/devolucao/3/registrar/",
        json!({"status": "devolvido", "data_devolucao": "2024-03-05"}),
    );
    let (app, _) = build_app(&remote);
    call(
        &app,
        Method::POST,
        "/api/rpc/tokens",
        Some(json!({"username": "fernando", "password": "admin***"})),
    )
    .await;

    let (status, body) = call(&app, Method::PATCH, "/api/rpc/emprestimos/9/devolucao", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Empréstimo não encontrado");

    let (status, outcome) = call(&app, Method::PATCH, "/api/rpc/emprestimos/3/devolucao", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        outcome["banner"]["message"],
        "Devolução registrada com sucesso em 05/03/2024"
    );
}

#[tokio::test]
async fn test_returned_copy_can_be_loaned_again() {
    let remote = loans_page_remote();
    remote.answer(
        Method::PATCH,
        "/devolucao/42/registrar/",
        json!({"status": "devolvido", "data_devolucao": "2024-03-05"}),
    );
    let (app, state) = build_app(&remote);
    call(&app, Method::GET, "/emprestimos", None).await;
    let loan = json!({"aluno": 1, "livro": 1});

    let (status, _) = call(&app, Method::POST, "/api/emprestimos/registrar", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let cached = state.context.livros.get_livro_by_id(1).expect("cached book");
    assert!(!cached.has_available_tiragem());

    // The catalog reloaded after the return shows print-run 11 on the shelf again
    let (status, _) = call(&app, Method::PATCH, "/api/rpc/emprestimos/42/devolucao", None).await;
    assert_eq!(status, StatusCode::OK);
    let cached = state.context.livros.get_livro_by_id(1).expect("cached book");
    assert!(cached.has_available_tiragem());

    let (status, outcome) = call(&app, Method::POST, "/api/emprestimos/registrar", Some(loan)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["data"]["id"], 42);

    let posts = remote.calls_to(Method::POST, "/emprestimos/");
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.body.as_ref().map(|b| b["tiragem"].clone()) == Some(json!(11))));
}

#[tokio::test(start_paused = true)]
async fn test_slower_older_update_does_not_overwrite_newer() {
    let remote = remote();
    remote.answer(Method::GET, "/alunos/", json!([aluno(1, "a@x.com")]));
    remote.answer_after(
        Method::PATCH,
        "/alunos/1/",
        Duration::from_millis(500),
        json!({"status": "atualizado", "dados": aluno(1, "old@x.com")}),
    );
    remote.answer_after(
        Method::PATCH,
        "/alunos/1/",
        Duration::from_millis(10),
        json!({"status": "atualizado", "dados": aluno(1, "new@x.com")}),
    );
    let (app, state) = build_app(&remote);
    call(&app, Method::GET, "/alunos", None).await;

    let first = tokio::spawn({
        let app = app.clone();
        async move {
            call(&app, Method::PATCH, "/api/rpc/alunos/1", Some(json!({"email": "old@x.com"}))).await
        }
    });
    // Let the first request reach the remote before the second one starts
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = tokio::spawn({
        let app = app.clone();
        async move {
            call(&app, Method::PATCH, "/api/rpc/alunos/1", Some(json!({"email": "new@x.com"}))).await
        }
    });

    let (second_status, _) = second.await.unwrap();
    assert_eq!(
        state.context.alunos.get_aluno_by_id(1).map(|a| a.email),
        Some("new@x.com".to_string())
    );

    let (first_status, first_body) = first.await.unwrap();
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body["data"]["dados"]["email"], "old@x.com");
    // The late answer of the earlier request is not applied
    assert_eq!(
        state.context.alunos.get_aluno_by_id(1).map(|a| a.email),
        Some("new@x.com".to_string())
    );
    assert_eq!(remote.calls_to(Method::PATCH, "/alunos/1/").len(), 2);
}

#[tokio::test]
async fn test_statistics_page() {
    let remote = loans_page_remote();
    remote.answer(
        Method::GET,
        "/estatisticas/totais/",
        json!({
            "total_alunos": 1, "total_livros": 2, "total_tiragens": 3,
            "livros_disponiveis": 1, "livros_emprestados": 2
        }),
    );
    remote.answer(Method::GET, "/api/v1/livros/indisponiveis/", json!([]));
    let (app, _) = build_app(&remote);

    let (_, page) = call(&app, Method::GET, "/estatistica", None).await;
    assert_eq!(page["state"], "ready");
    assert_eq!(page["data"]["totais"]["livros_emprestados"], 2);
    assert_eq!(page["data"]["emprestimos"]["total_tiragens"], 3);
    assert_eq!(page["data"]["emprestimos"]["emprestimos_ativos"], 1);
    assert_eq!(
        page["data"]["emprestimos"]["emprestimos_por_mes"]
            .as_array()
            .map(Vec::len),
        Some(6)
    );

    remote.fail(Method::GET, "/estatisticas/totais/", 503);
    let (_, page) = call(&app, Method::GET, "/estatistica", None).await;
    assert_eq!(page["state"], "failed");
    assert_eq!(
        page["data"]["message"],
        "Erro ao carregar estatísticas. Por favor, tente novamente mais tarde."
    );
}

#[tokio::test]
#[ignore] // Needs a running server: cargo test -- --ignored
async fn test_live_health_check() {
    let response = reqwest::Client::new()
        .get("http://localhost:3000/health")
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}
