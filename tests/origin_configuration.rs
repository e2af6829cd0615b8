mod common;

use bobapp_cors::constants::header;
use bobapp_cors::{Cors, CorsOptions, Origin, OriginMatcher, ValidationError};
use common::BOBAPP_FRONT;
use common::asserts::{assert_header_eq, assert_simple, assert_simple_rejected};
use common::builders::{bobapp, cors, simple_request};

#[test]
fn trailing_slash_in_configured_origin_is_ignored() {
    let cors = cors()
        .origin(Origin::exact("http://178.62.54.206:8089/"))
        .build();

    let headers = assert_simple(simple_request().origin(BOBAPP_FRONT).check(&cors));

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, BOBAPP_FRONT);
}

#[test]
fn origin_list_accepts_each_entry() {
    let cors = cors()
        .origin(Origin::list([BOBAPP_FRONT, "http://localhost:4200"]))
        .credentials(true)
        .build();

    for origin in [BOBAPP_FRONT, "http://localhost:4200"] {
        let headers = assert_simple(simple_request().origin(origin).check(&cors));
        assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    assert_simple_rejected(simple_request().origin("http://localhost:4201").check(&cors));
}

#[test]
fn wildcard_pattern_with_credentials_mirrors_matching_origin() {
    let cors = cors()
        .origin(Origin::List(vec![
            OriginMatcher::wildcard("https://*.bobapp.dev").expect("valid pattern"),
        ]))
        .credentials(true)
        .build();

    let headers = assert_simple(
        simple_request()
            .origin("https://preview-42.bobapp.dev")
            .check(&cors),
    );

    assert_header_eq(
        &headers,
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        "https://preview-42.bobapp.dev",
    );
    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
}

#[test]
fn wildcard_origin_with_credentials_fails_validation() {
    let options = cors().origin(Origin::any()).credentials(true).into_options();

    let result = Cors::new(options);

    assert!(matches!(
        result,
        Err(ValidationError::AnyOriginWithCredentials)
    ));
}

#[test]
fn host_without_scheme_fails_validation() {
    let options = CorsOptions {
        origin: Origin::exact("178.62.54.206:8089"),
        ..bobapp(false).into_options()
    };

    let result = Cors::new(options);

    assert_eq!(
        result.err(),
        Some(ValidationError::InvalidOrigin("178.62.54.206:8089".to_string()))
    );
}

#[test]
fn empty_origin_list_refuses_every_origin() {
    let cors = cors().origin(Origin::none()).build();

    assert_simple_rejected(simple_request().origin(BOBAPP_FRONT).check(&cors));
}
