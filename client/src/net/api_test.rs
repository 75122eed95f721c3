use super::*;

#[test]
fn suggestions_endpoint_encodes_query() {
    assert_eq!(suggestions_endpoint("coca cola"), "/api/suggestions?query=coca%20cola");
    assert_eq!(suggestions_endpoint("a&b=c"), "/api/suggestions?query=a%26b%3Dc");
}

#[test]
fn suggestions_failed_message_includes_status() {
    assert_eq!(suggestions_failed_message(503), "suggestions request failed: 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_suggestions_is_unavailable_natively() {
    let result = block_on(fetch_suggestions("pepsi"));
    assert!(result.is_err());
}

/// Minimal executor for a future that completes on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete synchronously"),
    }
}
