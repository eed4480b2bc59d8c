//! Unit tests for the token service

use std::time::Duration;

use crate::errors::TokenError;
use crate::services::token::{TokenConfig, TokenService};

fn service_with_ttl(ttl_secs: u64) -> TokenService {
    TokenService::new(TokenConfig {
        secret: "unit-test-secret".to_string(),
        ttl_secs,
        issuer: "dialpass".to_string(),
    })
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = service_with_ttl(3600);

    let token = service.issue("+1234567890").unwrap();
    assert!(!token.is_empty());

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.subject(), "+1234567890");
    assert_eq!(claims.iss, "dialpass");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let service = service_with_ttl(0);

    let token = service.issue("+1234567890").unwrap();
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(service.verify(&token), Err(TokenError::Expired));
}

#[test]
fn test_tampered_token_is_invalid() {
    let service = service_with_ttl(3600);
    let token = service.issue("+1234567890").unwrap();

    // Flip a character in the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'a' { 'b' } else { 'a' });

    assert_eq!(service.verify(&tampered), Err(TokenError::Invalid));
}

#[test]
fn test_wrong_secret_is_invalid() {
    let issuer = service_with_ttl(3600);
    let verifier = TokenService::new(TokenConfig {
        secret: "a-different-secret".to_string(),
        ttl_secs: 3600,
        issuer: "dialpass".to_string(),
    });

    let token = issuer.issue("+1234567890").unwrap();
    assert_eq!(verifier.verify(&token), Err(TokenError::Invalid));
}

#[test]
fn test_wrong_issuer_is_invalid() {
    let issuer = TokenService::new(TokenConfig {
        secret: "unit-test-secret".to_string(),
        ttl_secs: 3600,
        issuer: "someone-else".to_string(),
    });
    let verifier = service_with_ttl(3600);

    let token = issuer.issue("+1234567890").unwrap();
    assert_eq!(verifier.verify(&token), Err(TokenError::Invalid));
}

#[test]
fn test_garbage_is_invalid() {
    let service = service_with_ttl(3600);
    assert_eq!(service.verify("not-a-token"), Err(TokenError::Invalid));
    assert_eq!(service.verify(""), Err(TokenError::Invalid));
}
