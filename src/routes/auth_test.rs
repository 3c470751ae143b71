use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_MA_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_MA_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_MA_INVALID_17__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// profile_for — two terminal variants on a single equality test
// =============================================================================

#[test]
fn admin_gets_wildcard_permissions() {
    let profile = profile_for("admin");
    assert_eq!(profile.username, "admin");
    assert_eq!(profile.roles, vec!["admin"]);
    assert_eq!(profile.permissions, vec!["*:*:*"]);
    assert_eq!(profile.access_token, "eyJhbGciOiJIUzUxMiJ9.admin");
    assert_eq!(profile.refresh_token, "eyJhbGciOiJIUzUxMiJ9.adminRefresh");
}

#[test]
fn any_other_username_gets_common_profile() {
    for username in ["common", "guest", "ADMIN", " admin", ""] {
        let profile = profile_for(username);
        assert_eq!(profile.username, "common", "for submitted username {username:?}");
        assert_eq!(profile.roles, vec!["common"]);
        assert_eq!(profile.permissions, vec!["permission:btn:add", "permission:btn:edit"]);
        assert_eq!(profile.access_token, "eyJhbGciOiJIUzUxMiJ9.common");
    }
}

#[test]
fn both_profiles_share_static_fixture_fields() {
    let admin = profile_for("admin");
    let common = profile_for("anyone");
    assert_eq!(admin.avatar, common.avatar);
    assert_eq!(admin.nickname, common.nickname);
    assert_eq!(admin.expires, common.expires);
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn login_response_tokens_are_camel_case() {
    let response = LoginResponse { success: true, data: profile_for("admin") };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["data"].get("accessToken").is_some());
    assert!(json["data"].get("refreshToken").is_some());
    assert!(json["data"].get("access_token").is_none());
}

#[test]
fn login_request_password_is_optional() {
    let request: LoginRequest = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
    assert_eq!(request.username, "admin");
    assert!(request.password.is_empty());
}

#[tokio::test]
async fn login_handler_succeeds_unconditionally() {
    let request = LoginRequest { username: "whoever".to_string(), password: "wrong".to_string() };
    let response = login(Json(request)).await.expect("mock login has no failure branch");
    assert!(response.0.success);
    assert_eq!(response.0.data.roles, vec!["common"]);
}
