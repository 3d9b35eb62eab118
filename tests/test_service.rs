use coordswap::paraphrase::ParaphraseError;
use coordswap::service::{
    ParaphraseRequest, ParaphraseResponse, RequestError, STATUS_BAD_REQUEST,
    STATUS_INTERNAL_ERROR, STATUS_OK, ServiceError, handle, parse_limit, respond,
};
use serde_json::json;

const CAT_AND_DOG: &str =
    "(S (NP (NP (DT the) (NN cat)) (, ,) (CC and) (NP (DT the) (NN dog))) (VP (VBD ran)))";

// --- TESTS PARAMETER VALIDATION ---
#[test]
fn test_missing_tree() {
    assert_eq!(
        ParaphraseRequest::from_params(None, None),
        Err(RequestError::MissingParameter)
    );
    assert_eq!(
        ParaphraseRequest::from_params(Some(""), Some("5")),
        Err(RequestError::MissingParameter)
    );
}

#[test]
fn test_limit_defaults_to_twenty() {
    let request = ParaphraseRequest::from_params(Some(CAT_AND_DOG), None).unwrap();
    assert_eq!(request.limit, 20);
    assert_eq!(request.tree, CAT_AND_DOG);
}

#[test]
fn test_limit_parsing() {
    assert_eq!(parse_limit(Some("3")), Ok(3));
    assert_eq!(parse_limit(Some(" 7 ")), Ok(7));
    assert_eq!(parse_limit(Some("-1")), Ok(-1));
    assert_eq!(
        parse_limit(Some("ten")),
        Err(RequestError::BadInteger {
            value: "ten".to_string()
        })
    );
    assert!(parse_limit(Some("2.5")).is_err());
    assert!(parse_limit(Some("")).is_err());
}

#[test]
fn test_limit_beyond_i64_is_clamped() {
    assert_eq!(parse_limit(Some("99999999999999999999")), Ok(i64::MAX));
    assert_eq!(parse_limit(Some(" -99999999999999999999 ")), Ok(i64::MIN));
    assert_eq!(parse_limit(Some("9223372036854775807")), Ok(i64::MAX));

    let response = respond(Some(CAT_AND_DOG), Some("99999999999999999999"));
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(response.body["paraphrases"].as_array().unwrap().len(), 2);

    let response = respond(Some(CAT_AND_DOG), Some("-99999999999999999999"));
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(response.body, json!({ "paraphrases": [] }));
}

#[test]
fn test_request_from_json() {
    let request: ParaphraseRequest = serde_json::from_value(json!({ "tree": "(NP (NN cat))" })).unwrap();
    assert_eq!(request, ParaphraseRequest::new("(NP (NN cat))", 20));
}

// --- TESTS HANDLING ---
#[test]
fn test_handle() {
    let response = handle(&ParaphraseRequest::new(CAT_AND_DOG, 2)).unwrap();
    assert_eq!(response.paraphrases.len(), 2);
    assert_eq!(response.paraphrases[0].tree, CAT_AND_DOG);
}

#[test]
fn test_handle_malformed_tree() {
    let err = handle(&ParaphraseRequest::new("(S (NP", 2)).unwrap_err();
    assert!(matches!(err, ServiceError::Paraphrase(_)));
    assert_eq!(err.status_code(), STATUS_BAD_REQUEST);
    assert!(err.to_response().error.starts_with("Malformed tree: "));
}

#[test]
fn test_handle_too_deep_tree() {
    let depth = 10_000;
    let tree = format!("{}(NN x){}", "(NP ".repeat(depth), ")".repeat(depth));
    let response = respond(Some(tree.as_str()), Some("1"));
    assert_eq!(response.status, STATUS_BAD_REQUEST);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Malformed tree: Tree nested deeper than 500 levels"));
}

#[test]
fn test_status_codes() {
    let mismatch = ServiceError::from(ParaphraseError::StructuralMismatch {
        sites: 1,
        orderings: 2,
    });
    assert_eq!(mismatch.status_code(), STATUS_INTERNAL_ERROR);

    let invalid = ServiceError::from(ParaphraseError::InvalidOrdering {
        group: 0,
        members: 2,
        ordering: vec![0, 0],
    });
    assert_eq!(invalid.status_code(), STATUS_INTERNAL_ERROR);

    let missing = ServiceError::from(RequestError::MissingParameter);
    assert_eq!(missing.status_code(), STATUS_BAD_REQUEST);
}

// --- TESTS ENVELOPE ---
#[test]
fn test_respond_success_envelope() {
    let response = respond(Some(CAT_AND_DOG), Some("2"));
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(
        response.body,
        json!({
            "paraphrases": [
                { "tree": CAT_AND_DOG },
                { "tree": "(S (NP (NP (DT the) (NN dog)) (, ,) (CC and) (NP (DT the) (NN cat))) (VP (VBD ran)))" },
            ]
        })
    );

    let parsed: ParaphraseResponse = serde_json::from_value(response.body).unwrap();
    assert_eq!(parsed.paraphrases.len(), 2);
}

#[test]
fn test_respond_zero_limit() {
    let response = respond(Some(CAT_AND_DOG), Some("0"));
    assert_eq!(response.status, STATUS_OK);
    assert_eq!(response.body, json!({ "paraphrases": [] }));
}

#[test]
fn test_respond_errors() {
    let response = respond(None, None);
    assert_eq!(response.status, STATUS_BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "The 'tree' parameter is required." }));

    let response = respond(Some(CAT_AND_DOG), Some("many"));
    assert_eq!(response.status, STATUS_BAD_REQUEST);
    assert_eq!(response.body, json!({ "error": "The 'limit' parameter must be an integer." }));

    let response = respond(Some("(S (NP (NN cat)))))"), None);
    assert_eq!(response.status, STATUS_BAD_REQUEST);
    assert!(response.body["error"].as_str().unwrap().starts_with("Malformed tree: "));
}

#[test]
fn test_pretty_json_keeps_unicode() {
    let response = respond(Some("(NP (NP (NNP Zürich)) (CC und) (NP (NNP Genève)))"), Some("1"));
    let body = response.to_json_pretty().unwrap();
    assert!(body.contains("Zürich"));
    assert!(body.starts_with("{\n  \"paraphrases\": [\n    {\n      \"tree\": "));
}
