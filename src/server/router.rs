use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{admin, order, partner, product, tracking, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        description = "Delivery marketplace backend with live courier tracking"
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "user", description = "Own profile"),
        (name = "admin", description = "User and role administration"),
        (name = "partner", description = "Merchants selling through the marketplace"),
        (name = "product", description = "Partner catalogs"),
        (name = "order", description = "Order placement and delivery status"),
        (name = "tracking", description = "Courier locations")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// REST endpoints under `/api`.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::upsert_me, user::get_me))
        .routes(routes!(admin::get_all_users))
        .routes(routes!(admin::set_user_role))
        .routes(routes!(partner::create_partner, partner::get_partners))
        .routes(routes!(
            partner::get_partner_by_id,
            partner::update_partner,
            partner::delete_partner
        ))
        .routes(routes!(product::create_product, product::get_products))
        .routes(routes!(product::update_product, product::delete_product))
        .routes(routes!(order::create_order, order::get_orders))
        .routes(routes!(order::get_order_by_id))
        .routes(routes!(order::update_order_status))
        .routes(routes!(order::assign_courier))
        .routes(routes!(tracking::get_latest_location))
}

/// Websocket endpoints, kept apart from `/api` so they skip its rate limit.
pub fn socket_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(tracking::tracking_socket))
}
