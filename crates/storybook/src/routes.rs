//! HTTP routes for the storybook.

use actix_web::{HttpResponse, get, web};
use maud::Markup;

use crate::error::StoryError;
use crate::layout::{PLAYGROUND_SLUG, base_layout};
use crate::reload;
use crate::stories::{self, PlaygroundQuery, STORIES, Story, playground_story};

/// Configure routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| StoryError::InvalidQuery(err.to_string()).into());

    cfg.app_data(query_config)
        .service(index)
        .service(button_index)
        // Registered before `{slug}` so it isn't taken for a story name.
        .service(playground)
        .service(story_page)
        .route("/__ws_reload", web::get().to(reload::ws_reload));
}

fn html_response(page: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.into_string())
}

fn story_response(story: &Story) -> HttpResponse {
    html_response(base_layout(story.title, story.slug, (story.render)()))
}

/// Home page - shows the default button story
#[get("/")]
async fn index() -> HttpResponse {
    story_response(&STORIES[0])
}

#[get("/stories/button")]
async fn button_index() -> HttpResponse {
    story_response(&STORIES[0])
}

#[get("/stories/button/playground")]
async fn playground(query: web::Query<PlaygroundQuery>) -> Result<HttpResponse, StoryError> {
    let content = playground_story(&query)?;
    Ok(html_response(base_layout("Playground", PLAYGROUND_SLUG, content)))
}

#[get("/stories/button/{slug}")]
async fn story_page(slug: web::Path<String>) -> Result<HttpResponse, StoryError> {
    let slug = slug.into_inner();
    let story = stories::find(&slug).ok_or(StoryError::NotFound(slug))?;
    tracing::debug!(slug = story.slug, "rendering story");
    Ok(story_response(story))
}
