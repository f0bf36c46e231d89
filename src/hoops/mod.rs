use salvo::cors::{AllowOrigin, Cors, CorsHandler};
use salvo::http::Method;
use salvo::prelude::*;

use crate::interface::http::Rejection;

/// Any origin; GET, POST, OPTIONS; Content-Type and Authorization headers.
pub fn cors_hoop() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec!["content-type", "authorization"])
        .into_handler()
}

/// Catcher hoop: renders unknown routes with the same JSON shape as other rejections.
#[handler]
pub async fn error_404(res: &mut Response, ctrl: &mut FlowCtrl) {
    if let Some(StatusCode::NOT_FOUND) = res.status_code {
        res.render(Json(Rejection::new("Not found")));
        ctrl.skip_rest();
    }
}
