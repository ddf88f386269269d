use super::*;
use futures::executor::block_on;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(" abc "), "Bearer abc");
}

#[test]
fn transport_is_unavailable_outside_browser() {
    let err = block_on(client().students().list(&records::ListQuery::new())).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
