#![allow(dead_code)]

pub mod pdf;

#[allow(unused_imports)]
pub use pdf::{PageFont, build_pdf, build_pdf_with_fonts};

/// Serves `body` with status 200 at `url_path`
pub async fn mount_page(
    server: &wiremock::MockServer,
    url_path: &str,
    body: impl Into<Vec<u8>>,
    content_type: &str,
) {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body.into(), content_type),
        )
        .mount(server)
        .await;
}
