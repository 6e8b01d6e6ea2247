//! Per-issuance verification strategies and the process-wide registry

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jwtmint::{check_token, default_check, registry, CheckFn, Error, Token, TokenBuilder};

#[test]
fn test_each_token_recalls_its_own_strategy() {
    let strict = TokenBuilder::new()
        .subject("strict")
        .secret("s3cret")
        .check_with(|_, _| Err(Error::SignatureMismatch))
        .issue()
        .unwrap();

    let lenient = TokenBuilder::new()
        .subject("lenient")
        .secret("s3cret")
        .issue()
        .unwrap();

    // The strict token's strategy rejects everything, the default-checked
    // one still verifies: strategies are per issued string, not global.
    assert!(matches!(
        check_token(strict.render(), "s3cret"),
        Err(Error::SignatureMismatch)
    ));
    assert_eq!(
        check_token(lenient.render(), "s3cret")
            .unwrap()
            .payload()
            .subject,
        "lenient"
    );
}

#[test]
fn test_custom_strategy_receives_token_and_secret() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let token = TokenBuilder::new()
        .secret("s3cret")
        .check_with(move |token, secret| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(secret, "s3cret");
            default_check(token, secret)
        })
        .issue()
        .unwrap();

    let verified = check_token(token.render(), "s3cret").unwrap();
    assert_eq!(verified.render(), token.render());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    check_token(token.render(), "s3cret").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_register_accepts_foreign_tokens() {
    // A token "issued elsewhere": built by hand, unknown to this registry
    let foreign = {
        let token = TokenBuilder::new()
            .subject("foreign")
            .secret("other-secret")
            .issue()
            .unwrap();
        token.render().to_string()
    };

    // Simulate a fresh process by registering under a distinct string
    let alias = format!("{foreign} ");
    assert!(matches!(
        check_token(&alias, "other-secret"),
        Err(Error::VerifierNotFound)
    ));

    let strategy: CheckFn = Arc::new(|token: &str, secret: &str| {
        default_check(token.trim_end(), secret)
    });
    registry::register(&alias, strategy);

    assert_eq!(
        check_token(&alias, "other-secret")
            .unwrap()
            .payload()
            .subject,
        "foreign"
    );
}

#[test]
fn test_concurrent_issue_and_check() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            std::thread::spawn(move || {
                for i in 0..25 {
                    let token = Token::builder()
                        .subject(format!("w{worker}-{i}"))
                        .secret("s3cret")
                        .issue()
                        .expect("issue failed");

                    let verified = check_token(token.render(), "s3cret").expect("check failed");
                    assert_eq!(verified.payload().subject, format!("w{worker}-{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
