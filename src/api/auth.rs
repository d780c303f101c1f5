//! Auth Endpoints

use crate::error::AppResult;
use crate::models::{Home, LoginRequest, SessionUser, Student};
use super::{get, send, Backend, HttpMethod};

pub async fn login<B: Backend + ?Sized>(backend: &B, email: &str, password: &str) -> AppResult<SessionUser> {
    send(backend, HttpMethod::Post, "/auth/login", &LoginRequest { email, password }).await
}

pub async fn get_home<B: Backend + ?Sized>(backend: &B, home_id: u32) -> AppResult<Home> {
    get(backend, &format!("/home/{}", home_id)).await
}

/// Children linked to a parent account
pub async fn list_children<B: Backend + ?Sized>(backend: &B, parent_id: &str) -> AppResult<Vec<Student>> {
    get(backend, &format!("/parent/{}/students", parent_id)).await
}

