//! Form submission over `fetch`.

use super::error::SubmitError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, HtmlFormElement, Request, RequestInit, Response};

/// POST a form's current data to its resolved `action` URL.
///
/// Returns the HTTP status code of the response. Any HTTP status counts as a
/// response; only failures to build or deliver the request are errors.
pub async fn post_form(form: &HtmlFormElement) -> Result<u16, SubmitError> {
    let window = web_sys::window().ok_or_else(|| SubmitError::Request("no window".to_string()))?;

    let body = FormData::new_with_form(form).map_err(request_error)?;
    let headers = Headers::new().map_err(request_error)?;
    headers
        .set("Accept", "application/json")
        .map_err(request_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(&form.action(), &init).map_err(request_error)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| SubmitError::Network(describe(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| SubmitError::Network(describe(&err)))?;
    Ok(response.status())
}

fn request_error(err: JsValue) -> SubmitError {
    SubmitError::Request(describe(&err))
}

/// Human-readable text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_describe_error_message() {
        let err: JsValue = js_sys::Error::new("boom").into();
        assert_eq!(describe(&err), "boom");
        assert_eq!(describe(&JsValue::from_str("plain")), "plain");
    }

    #[wasm_bindgen_test]
    async fn test_invalid_action_is_request_error() {
        let document = web_sys::window().unwrap().document().unwrap();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<form id="f" action="http://[bad"></form>"#);
        let form = document
            .get_element_by_id("f")
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        let result = post_form(&form).await;
        assert!(matches!(result, Err(SubmitError::Request(_))));
    }
}
