use crate::constants::{CARD_LIMIT_ATTR, PROJECTS_GRID_ID, PROJECTS_URL, PROJECT_COUNT_ID};
use portfolio_core::{cards, grid_html, parse_feed, project_count, CardLimit, Project};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {} returned a non-Response", url))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{} body is not text", url))
}

pub async fn fetch_projects(window: &web::Window) -> anyhow::Result<Vec<Project>> {
    let body = fetch_text(window, PROJECTS_URL).await?;
    Ok(parse_feed(&body)?)
}

/// Fill the project grid and the `PROJECT` counter.
pub fn render(document: &web::Document, projects: &[Project]) {
    if let Some(grid) = document.get_element_by_id(PROJECTS_GRID_ID) {
        let limit = CardLimit::from_attr(grid.get_attribute(CARD_LIMIT_ATTR).as_deref());
        grid.set_inner_html(&grid_html(&cards(projects, limit)));
    }
    if let Some(count) = document.get_element_by_id(PROJECT_COUNT_ID) {
        count.set_text_content(Some(&project_count(projects).to_string()));
    }
}

/// Fetch and render the feed. Failure is logged and leaves the grid empty.
pub async fn load(window: web::Window, document: web::Document) {
    match fetch_projects(&window).await {
        Ok(projects) => {
            log::info!("[projects] loaded {} records", projects.len());
            render(&document, &projects);
        }
        Err(e) => {
            log::error!("[projects] load failed: {:?}", e);
            render(&document, &[]);
        }
    }
}
