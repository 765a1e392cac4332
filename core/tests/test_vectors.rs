//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, PatchTodo, ReplaceTodo,
    SortDirection, Todo, TodoClient,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        other => panic!("unknown method: {other}"),
    }
}

/// Compare a built request against `expected_request`. Headers and body are
/// only checked when the vector lists them; otherwise both must be empty.
fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check a parse result against either `expected_error` or `expected_result`.
fn check_result<T>(name: &str, case: &serde_json::Value, result: Result<T, ApiError>)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
            "Validation" => assert!(matches!(err, ApiError::Validation(_)), "{name}: expected Validation"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        let value = result.unwrap();
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(value, expected, "{name}: parsed result");
    }
}

fn input_id(case: &serde_json::Value) -> u64 {
    case["input_id"].as_u64().unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        check_request(name, &req, &case["expected_request"]);

        check_result::<Vec<Todo>>(name, &case, c.parse_list_todos(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        check_result::<Todo>(name, &case, c.parse_create_todo(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[test]
fn replace_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/replace.json")) {
        let name = case["name"].as_str().unwrap();
        let input: ReplaceTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_replace_todo(input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        check_result::<Todo>(name, &case, c.parse_replace_todo(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

#[test]
fn patch_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/patch.json")) {
        let name = case["name"].as_str().unwrap();
        let input: PatchTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_patch_todo(input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        check_result::<Todo>(name, &case, c.parse_patch_todo(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[test]
fn sort_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/sort.json")) {
        let name = case["name"].as_str().unwrap();
        let direction = match case["direction"].as_str().unwrap() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => panic!("{name}: unknown direction: {other}"),
        };

        let req = match case["field"].as_str().unwrap() {
            "id" => c.build_sort_by_id(direction),
            "message" => c.build_sort_by_message(direction),
            other => panic!("{name}: unknown sort field: {other}"),
        };
        check_request(name, &req, &case["expected_request"]);

        check_result::<Vec<Todo>>(name, &case, c.parse_sorted_todos(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/search.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_search(case["input_query"].as_str().unwrap());
        check_request(name, &req, &case["expected_request"]);

        check_result::<Vec<Todo>>(name, &case, c.parse_search(simulated(&case)));
    }
}
