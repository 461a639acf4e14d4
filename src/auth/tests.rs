//! Authentication Module Tests
//!
//! ## Test Scopes
//! - **CredentialStore**: append and scan behaviour of the flat credential file.
//! - **SessionTable**: token format, lookup, removal and cookie parsing.

#[cfg(test)]
mod tests {
    use crate::auth::credentials::CredentialStore;
    use crate::auth::session::{generate_token, session_token, SessionTable, SESSION_COOKIE};
    use crate::error::ForumError;
    use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    // ============================================================
    // CREDENTIAL STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_register_then_verify() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("user.txt"));

        store.register("alice", "pw1").await.unwrap();

        assert!(store.verify("alice", "pw1").await.unwrap());
        assert!(!store.verify("alice", "wrong").await.unwrap());
        assert!(!store.verify("bob", "pw1").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_writes_name_comma_password_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        let store = CredentialStore::new(path.clone());

        store.register("alice", "pw1").await.unwrap();
        store.register("bob", "pw2").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "alice,pw1\nbob,pw2\n");
    }

    #[tokio::test]
    async fn test_register_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("user.txt");
        let store = CredentialStore::new(path.clone());

        store.register("alice", "pw1").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_duplicate_names_are_accepted_and_first_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("user.txt"));

        store.register("alice", "first").await.unwrap();
        store.register("alice", "second").await.unwrap();

        // Both lines exist, either password logs in
        assert!(store.verify("alice", "first").await.unwrap());
        assert!(store.verify("alice", "second").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_refuses_separator_characters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        let store = CredentialStore::new(path.clone());

        let result = store.register("ali,ce", "pw").await;
        assert!(matches!(result, Err(ForumError::InvalidInput(_))));

        let result = store.register("alice", "pw\nbob,pw").await;
        assert!(matches!(result, Err(ForumError::InvalidInput(_))));

        // Nothing was written
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_verify_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("missing.txt"));

        let result = store.verify("alice", "pw1").await;
        assert!(matches!(result, Err(ForumError::Io(_))));
    }

    #[tokio::test]
    async fn test_verify_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        std::fs::write(&path, "garbage\n\nalice,pw1\n").unwrap();
        let store = CredentialStore::new(path);

        assert!(store.verify("alice", "pw1").await.unwrap());
        assert!(!store.verify("garbage", "").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_continues_past_non_utf8_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        std::fs::write(&path, b"bad\xff,x\nbob,pw2\r\n").unwrap();
        let store = CredentialStore::new(path);

        assert!(store.verify("bob", "pw2").await.unwrap());
        assert!(!store.verify("bob", "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_lines_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        let store = Arc::new(CredentialStore::new(path.clone()));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .register(&format!("user{}", i), &format!("pw{}", i))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 20);
        for i in 0..20 {
            assert!(store
                .verify(&format!("user{}", i), &format!("pw{}", i))
                .await
                .unwrap());
        }
    }

    // ============================================================
    // SESSION TABLE TESTS
    // ============================================================

    #[test]
    fn test_token_is_sixteen_uppercase_letters() {
        let token = generate_token();

        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_do_not_repeat_in_quick_succession() {
        let sessions = SessionTable::new(86_400);
        let tokens: HashSet<String> = (0..1000).map(|_| sessions.create("alice")).collect();

        assert_eq!(tokens.len(), 1000);
        assert_eq!(sessions.len(), 1000);
    }

    #[test]
    fn test_create_lookup_remove() {
        let sessions = SessionTable::new(86_400);
        let token = sessions.create("alice");

        assert_eq!(sessions.lookup(&token), Some("alice".to_string()));
        assert_eq!(sessions.remove(&token), Some("alice".to_string()));
        assert_eq!(sessions.lookup(&token), None);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_empty_name_is_not_a_session() {
        let sessions = SessionTable::new(86_400);
        let token = sessions.create("");

        assert_eq!(sessions.lookup(&token), None);
    }

    #[test]
    fn test_remove_unknown_token_is_noop() {
        let sessions = SessionTable::new(86_400);
        sessions.create("alice");

        assert_eq!(sessions.remove("NOSUCHTOKEN"), None);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_is_logged_in_follows_session_lifecycle() {
        let sessions = SessionTable::new(86_400);
        let token = sessions.create("alice");
        let headers = headers_with_cookie(&format!("{}={}", SESSION_COOKIE, token));

        assert!(sessions.is_logged_in(&headers));

        sessions.remove(&token);
        assert!(!sessions.is_logged_in(&headers));
    }

    #[test]
    fn test_is_logged_in_without_cookie() {
        let sessions = SessionTable::new(86_400);
        sessions.create("alice");

        assert!(!sessions.is_logged_in(&HeaderMap::new()));
        assert!(!sessions.is_logged_in(&headers_with_cookie("other=1")));
    }

    #[test]
    fn test_session_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; token=ABCDEFGHIJKLMNOP; lang=en");

        assert_eq!(
            session_token(&headers),
            Some("ABCDEFGHIJKLMNOP".to_string())
        );
    }

    #[test]
    fn test_cookie_attributes() {
        let sessions = SessionTable::new(86_400);

        let cookie = sessions.cookie_for("ABCDEFGHIJKLMNOP");
        assert!(cookie.starts_with("token=ABCDEFGHIJKLMNOP;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("Path=/"));

        assert!(sessions.expired_cookie().contains("Max-Age=0"));
    }
}
