use salvo::affix_state;
use salvo::catch_panic::CatchPanic;
use salvo::catcher::Catcher;
use salvo::logging::Logger;
use salvo::prelude::*;

mod news;

use crate::core::services::NewsGateway;
use crate::hoops;

pub fn root(gateway: NewsGateway) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(Logger::new())
        .hoop(affix_state::inject(gateway))
        .push(Router::with_path("search").get(news::search))
        .push(Router::with_path("headlines").get(news::headlines));
    let doc = OpenApi::new("news gateway", env!("CARGO_PKG_VERSION")).merge_router(&router);
    router
        .unshift(doc.into_router("/api-doc/openapi.json"))
        .unshift(Scalar::new("/api-doc/openapi.json").into_router("scalar"))
}

/// Router plus the process-wide hoops: CORS and the 404 catcher.
pub fn service(gateway: NewsGateway) -> Service {
    Service::new(root(gateway))
        .catcher(Catcher::default().hoop(hoops::error_404))
        .hoop(hoops::cors_hoop())
}
