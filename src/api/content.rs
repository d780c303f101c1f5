//! Blog Endpoints

use crate::error::AppResult;
use crate::models::BlogPost;
use super::{get, Backend};

pub async fn list_posts<B: Backend + ?Sized>(backend: &B) -> AppResult<Vec<BlogPost>> {
    get(backend, "/blog").await
}

pub async fn get_post<B: Backend + ?Sized>(backend: &B, id: u32) -> AppResult<BlogPost> {
    get(backend, &format!("/blog/{}", id)).await
}
