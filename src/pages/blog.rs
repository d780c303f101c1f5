use leptos::prelude::*;

use crate::api::{get_post, list_posts};
use crate::campaign_utils::format_date;
use crate::components::{load_view, EmptyState};
use crate::context::use_fetch;
use crate::markdown::{excerpt, parse_markdown};
use crate::models::BlogPost;
use crate::pages::{invalid_id, use_id_param};

const EXCERPT_CHARS: usize = 160;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let (posts, retry) = use_fetch("Không thể tải bài viết", move |api| async move { list_posts(&api).await });

    let cards = |list: Vec<BlogPost>| {
        if list.is_empty() {
            return view! { <EmptyState message="Chưa có bài viết nào" /> }.into_any();
        }
        view! {
            <div class="blog-grid">
                {list
                    .into_iter()
                    .map(|post| view! {
                        <a class="blog-card" href=format!("/blog/{}", post.id)>
                            {post.thumbnail_url.clone().map(|src| view! { <img src=src alt="" /> })}
                            <h3>{post.title.clone()}</h3>
                            <span class="blog-date">{format_date(&post.created_at)}</span>
                            <p>{excerpt(&post.content, EXCERPT_CHARS)}</p>
                        </a>
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <h2>"Góc sức khỏe"</h2>
        {move || load_view(posts.get(), retry, cards)}
    }
}

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let post_id = use_id_param();
    let (post, retry) = use_fetch("Không thể tải bài viết", move |api| {
        let id = post_id();
        async move { get_post(&api, id.ok_or_else(invalid_id)?).await }
    });

    let article = |post: BlogPost| {
        view! {
            <article class="blog-post">
                <h1>{post.title}</h1>
                <span class="blog-date">{format_date(&post.created_at)}</span>
                {post.thumbnail_url.map(|src| view! { <img class="blog-cover" src=src alt="" /> })}
                <div class="markdown-body" inner_html=parse_markdown(&post.content)></div>
            </article>
        }
        .into_any()
    };

    view! {
        <a class="back-link" href="/blog">"← Tất cả bài viết"</a>
        {move || load_view(post.get(), retry, article)}
    }
}
