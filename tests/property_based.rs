mod common;

use bobapp_cors::constants::{header, method};
use bobapp_cors::{AllowedHeaders, CorsDecision, Origin, PathPattern};
use common::BOBAPP_FRONT;
use common::asserts::assert_simple;
use common::builders::{bobapp, cors, preflight_request, simple_request};
use common::headers::header_value;
use proptest::prelude::*;

fn staggered_case(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx % 2 == 0 {
                ch.to_ascii_lowercase()
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

fn port_strategy() -> impl Strategy<Value = u16> {
    (1u16..=u16::MAX).prop_filter("configured port", |port| *port != 8089)
}

fn header_name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,16}").unwrap()
}

fn segment_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,12}").unwrap()
}

proptest! {
    #[test]
    fn other_ports_on_the_same_host_are_never_allowed(port in port_strategy()) {
        let origin = format!("http://178.62.54.206:{port}");
        let cors = bobapp(true).build();

        let decision = simple_request().origin(origin).check(&cors);

        let rejected = matches!(decision, CorsDecision::SimpleRejected(_));
        prop_assert!(rejected, "expected rejected simple request, got {:?}", decision);
    }

    #[test]
    fn credentials_never_produce_a_wildcard_origin(
        requested in header_name_strategy(),
        verb in prop::sample::select(vec![method::GET, method::POST, method::PUT, method::DELETE]),
    ) {
        let cors = bobapp(true).build();

        let decision = preflight_request()
            .origin(BOBAPP_FRONT)
            .request_method(verb)
            .request_headers(requested)
            .check(&cors);

        let headers = decision.headers().expect("CORS request carries headers");
        prop_assert_eq!(
            header_value(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(BOBAPP_FRONT)
        );
        prop_assert_ne!(header_value(headers, header::ACCESS_CONTROL_ALLOW_METHODS), Some("*"));
        prop_assert_ne!(header_value(headers, header::ACCESS_CONTROL_ALLOW_HEADERS), Some("*"));
    }

    #[test]
    fn allowed_headers_matching_is_case_insensitive(header in header_name_strategy()) {
        let allowed = header.to_uppercase();
        let request_variant = staggered_case(&header);

        let decision = preflight_request()
            .origin("https://prop.test")
            .request_method(method::GET)
            .request_headers(request_variant)
            .check(&cors().allowed_headers(AllowedHeaders::list([allowed])).build());

        let accepted = matches!(decision, CorsDecision::PreflightAccepted { .. });
        prop_assert!(accepted, "expected accepted preflight, got {:?}", decision);
    }

    #[test]
    fn exact_origin_is_echoed_for_arbitrary_hosts(subdomain in segment_strategy()) {
        let origin = format!("https://{}.example.com", subdomain);

        let headers = assert_simple(
            simple_request()
                .origin(origin.as_str())
                .check(&cors().origin(Origin::exact(origin.clone())).credentials(true).build()),
        );

        prop_assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin.as_str())
        );
    }

    #[test]
    fn global_pattern_matches_every_path(segments in prop::collection::vec(segment_strategy(), 0..6)) {
        let path = format!("/{}", segments.join("/"));

        prop_assert!(PathPattern::all().matches(&path));
    }
}
