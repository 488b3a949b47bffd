use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CuboidDtoDoc {
    pub id: Option<i64>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub bag_id: i64,
}

#[derive(ToSchema)]
pub struct BagDtoDoc {
    pub id: Option<i64>,
    pub title: String,
    pub volume: f32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cuboids::list,
        crate::routes::cuboids::create,
        crate::routes::cuboids::get,
        crate::routes::cuboids::update,
        crate::routes::cuboids::delete,
        crate::routes::bags::list,
        crate::routes::bags::create,
        crate::routes::bags::get,
    ),
    components(
        schemas(
            HealthResponse,
            CuboidDtoDoc,
            BagDtoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cuboids"),
        (name = "bags")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_cuboid_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/cuboids"));
        assert!(doc.paths.paths.contains_key("/cuboids/{id}"));
        assert!(doc.paths.paths.contains_key("/bags"));
    }
}
