use aide::{
	axum::{routing::get, ApiRouter, IntoApiResponse},
	openapi::OpenApi,
	scalar::Scalar,
};
use axum::{response::IntoResponse, Extension, Json};

pub fn handler() -> ApiRouter {
	ApiRouter::new()
		.route(
			"/docs",
			Scalar::new("/openapi.json")
				.with_title("enVoi Names API")
				.axum_route(),
		)
		.route("/openapi.json", get(openapi))
}

async fn openapi(Extension(api): Extension<OpenApi>) -> impl IntoApiResponse {
	Json(api).into_response()
}
