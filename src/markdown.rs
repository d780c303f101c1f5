//! Markdown Rendering
//!
//! Blog posts and AI chat answers arrive as markdown from the backend.
//! Rendering goes through pulldown-cmark with two restrictions:
//! - raw HTML is escaped and shown as text
//! - links and images only keep `http`, `https`, `mailto` or relative targets

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to an HTML string safe for `inner_html`
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(sanitize_event);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Plain-text teaser for list cards
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut plain = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => plain.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::End(_) => {
                if !plain.ends_with(' ') && !plain.is_empty() {
                    plain.push(' ');
                }
            }
            _ => {}
        }
        if plain.chars().count() > max_chars {
            break;
        }
    }
    let plain = plain.trim();
    match plain.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", plain[..idx].trim_end()),
        None => plain.to_string(),
    }
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_lowercase();
    let allowed = match lower.split_once(':') {
        // A colon after a slash, `?` or `#` is part of a relative path
        Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => {
            matches!(scheme, "http" | "https" | "mailto")
        }
        _ => true,
    };
    if allowed {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("**Lưu ý:** uống nhiều nước");
        assert!(html.contains("<strong>Lưu ý:</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = parse_markdown("xin <img src=x onerror=alert(1)> chào");
        assert!(!inline.contains("<img"));
    }

    #[test]
    fn test_javascript_links_are_neutralized() {
        let html = parse_markdown("[bấm](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));

        let html = parse_markdown("[trang](https://benhvien.vn/tiem-chung)");
        assert!(html.contains(r#"href="https://benhvien.vn/tiem-chung""#));

        let html = parse_markdown("[nội bộ](/blog/2)");
        assert!(html.contains(r#"href="/blog/2""#));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("# Tiêu đề\n\nNội dung bài viết", 100), "Tiêu đề Nội dung bài viết");
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
    }
}
