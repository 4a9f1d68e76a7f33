use super::*;

// =============================================================
// Login response shapes
// =============================================================

#[test]
fn login_response_parses_role_object() {
    let body = r#"{
        "access_token": "abc",
        "username": "jdoe",
        "user_id": 7,
        "role": {"id": 2, "name": "operador"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(resp.access_token, "abc");
    assert_eq!(resp.user_id, 7);
    assert_eq!(
        resp.role,
        Some(RoleInfo {
            id: 2,
            name: "operador".to_owned()
        })
    );
}

#[test]
fn login_response_role_is_optional() {
    let body = r#"{"access_token": "abc", "username": "jdoe", "user_id": 7}"#;
    let resp: LoginResponse = serde_json::from_str(body).expect("parse");
    assert!(resp.role.is_none());
}

#[test]
fn login_response_ignores_extra_fields() {
    let body = r#"{
        "message": "Login exitoso",
        "access_token": "abc",
        "username": "jdoe",
        "user_id": 7
    }"#;
    assert!(serde_json::from_str::<LoginResponse>(body).is_ok());
}

// =============================================================
// Recovery payloads
// =============================================================

#[test]
fn questions_response_parses_list() {
    let body = r#"{"username": "jdoe", "questions": ["Pet name?", "Birth city?"]}"#;
    let resp: SecurityQuestionsResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(resp.questions, vec!["Pet name?", "Birth city?"]);
}

#[test]
fn verify_response_parses_reset_token() {
    let body = r#"{"reset_token": "abc123", "message": "Verificación exitosa"}"#;
    let resp: VerifyAnswersResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(resp.reset_token, "abc123");
}

#[test]
fn error_body_detail_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"detail": "Token inválido"}"#).expect("parse");
    assert_eq!(with.detail.as_deref(), Some("Token inválido"));

    let without: ErrorBody = serde_json::from_str("{}").expect("parse");
    assert!(without.detail.is_none());
}

#[test]
fn register_request_serializes_fixed_questions() {
    let req = RegisterRequest {
        username: "jdoe".to_owned(),
        password: "Str0ng!Pw".to_owned(),
        security_question1: SECURITY_QUESTION_1.to_owned(),
        security_answer1: "Rex".to_owned(),
        security_question2: SECURITY_QUESTION_2.to_owned(),
        security_answer2: "Bogota".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["security_question1"], SECURITY_QUESTION_1);
    assert_eq!(value["security_answer2"], "Bogota");
}
