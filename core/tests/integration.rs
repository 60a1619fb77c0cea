//! Full lifecycle test against the live todo server.
//!
//! # Design
//! Starts the server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that request building and
//! response parsing work end-to-end with the actual server.

use todo_core::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Start the server on a random port in a background thread.
fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn ids(todos: &[todo_core::Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn crud_lifecycle() {
    let addr = spawn_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 1: list — the three seed todos.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(ids(&todos), ["1", "2", "3"]);
    assert_eq!(todos[1].task, "Second task");
    assert!(todos[1].completed);

    // Step 2: create — id follows the current length.
    let req = client.build_create_todo(&CreateTodo::new("Integration test")).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, "4");
    assert_eq!(created.task, "Integration test");
    assert!(!created.completed);

    // Step 3: delete an existing todo.
    let message = client
        .parse_delete_todo(execute(client.build_delete_todo("2")))
        .unwrap();
    assert_eq!(message, "Todo deleted!");

    // Step 4: delete again — same answer, nothing removed.
    let message = client
        .parse_delete_todo(execute(client.build_delete_todo("2")))
        .unwrap();
    assert_eq!(message, "Todo deleted!");

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(ids(&todos), ["1", "3", "4"]);

    // Step 5: create after delete reuses an id that is still present.
    let req = client.build_create_todo(&CreateTodo::new(42)).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, "4");
    assert_eq!(created.task, 42);

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(ids(&todos), ["1", "3", "4", "4"]);
}

#[test]
fn malformed_create_is_reported_as_bad_request() {
    let addr = spawn_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    let mut req = client.build_create_todo(&CreateTodo::new("x")).unwrap();
    req.body = Some(r#"{"task":"x","completed":"yes"}"#.to_string());
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)), "got {err:?}");

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 3);
}
