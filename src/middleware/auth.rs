use crate::services::identity_service::{Claims, IdentityVerifier};
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Barreira de autenticação dos scopes protegidos. Extrai o bearer token,
/// valida com o IdentityVerifier e deixa os Claims disponíveis para os
/// handlers via request extensions.
pub struct AuthMiddleware {
    verifier: IdentityVerifier,
}

impl AuthMiddleware {
    pub fn new(verifier: IdentityVerifier) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            verifier: self.verifier.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    verifier: IdentityVerifier,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Get Authorization header
        let auth_header = req.headers().get("Authorization");

        let token = match auth_header.and_then(|value| value.to_str().ok()) {
            Some(header_str) if header_str.starts_with("Bearer ") => header_str[7..].to_string(),
            _ => {
                return Box::pin(async move {
                    Ok(reject(req, "Unauthorized - No token provided"))
                });
            }
        };

        match self.verifier.verify(&token) {
            Ok(claims) => {
                req.extensions_mut().insert::<Claims>(claims);

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(e) => {
                log::debug!("Token rejected: {}", e);
                Box::pin(async move { Ok(reject(req, "Unauthorized - Invalid token")) })
            }
        }
    }
}

fn reject<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(serde_json::json!({ "error": message }))
        .map_into_right_body();

    req.into_response(response)
}
