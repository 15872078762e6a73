use serde::Serialize;

/// Plain message body.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Competitive programming statistics API")]
    pub message: String,
}
