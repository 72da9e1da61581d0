use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    Error,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};

pub const ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
pub const ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// Stamps the access-control headers onto every response, replacing any
/// value set further in (CORS preflight answers included).
pub struct AccessControlHeaders;

impl<S, B> Transform<S, ServiceRequest> for AccessControlHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AccessControlHeadersService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessControlHeadersService { service }))
    }
}

pub struct AccessControlHeadersService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessControlHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOW_HEADERS),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS),
            );
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn replaces_headers_set_by_the_handler() {
        let app = test::init_service(App::new().wrap(AccessControlHeaders).route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok()
                    .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "GET"))
                    .finish()
            }),
        ))
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let methods: Vec<_> = resp
            .headers()
            .get_all(ACCESS_CONTROL_ALLOW_METHODS)
            .collect();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0], ALLOW_METHODS);
        assert_eq!(
            resp.headers().get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            ALLOW_HEADERS
        );
    }
}
