use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Author attributes in snake_case; `birthDate` is accepted as an alias of `birth_date`.
/// `name` is required on create. On update an absent key is left unchanged and `null`
/// clears the attribute (`name` cannot be cleared).
#[derive(ToSchema)]
pub struct AuthorPayloadDoc {
    pub name: Option<String>,
    pub nationality: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub active: Option<bool>,
}

/// Book attributes in snake_case; `publicationYear` is accepted as an alias of `publication_year`.
/// `title` is required on create. On update an absent key is left unchanged and `null`
/// clears the attribute (`title` cannot be cleared).
#[derive(ToSchema)]
pub struct BookPayloadDoc {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub pages: Option<i32>,
    pub price: Option<f64>,
}

/// `{ ok, datos, mensaje }` wrapper used by every catalog response.
#[derive(ToSchema)]
pub struct EnvelopeDoc {
    pub ok: bool,
    #[schema(value_type = Object)]
    pub datos: Option<String>,
    pub mensaje: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::authors::list,
        crate::routes::authors::create,
        crate::routes::authors::get,
        crate::routes::authors::update,
        crate::routes::authors::delete,
        crate::routes::authors::filter_by_birth_year,
        crate::routes::books::list,
        crate::routes::books::create,
        crate::routes::books::get,
        crate::routes::books::update,
        crate::routes::books::delete,
        crate::routes::books::filter_by_pages,
    ),
    components(
        schemas(
            HealthResponse,
            AuthorPayloadDoc,
            BookPayloadDoc,
            EnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "authors"),
        (name = "books")
    )
)]
pub struct ApiDoc;
