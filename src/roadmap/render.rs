// src/roadmap/render.rs
//! HTML serialization of the roadmap view
//!
//! Produces a display-ready markup fragment: short-term cards first, then
//! medium- and long-term bullet lists. Skill names and recommendation text
//! derive (indirectly) from user-submitted resume and job text, so every
//! interpolated value goes through `escape_html`.

use crate::analysis::models::Recommendations;

use super::catalog::SkillGuideCatalog;
use super::resolver::{resolve, RoadmapCard};

/// Minimal HTML escaping for text and attribute positions.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a full recommendations object to an HTML fragment.
///
/// Medium- and long-term entries are passed through verbatim as bullet items
/// (escaped, but not interpreted). An empty short-term list renders a
/// placeholder paragraph rather than nothing.
pub fn render_roadmap(rec: &Recommendations, catalog: &SkillGuideCatalog) -> String {
    let mut html = String::new();

    html.push_str("<h4>Short-term (1-3 months)</h4>");
    let view = resolve(&rec.short_term, catalog);
    if view.is_empty() {
        html.push_str("<p>No specific learning path available.</p>");
    } else {
        for card in &view.cards {
            render_card(&mut html, card);
        }
    }

    html.push_str("<h4>Medium-term (3-6 months)</h4><ul>");
    for item in &rec.medium_term {
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");

    html.push_str("<h4>Long-term (6-12 months)</h4><ul>");
    for item in &rec.long_term {
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");

    html
}

fn render_card(html: &mut String, card: &RoadmapCard) {
    match card {
        RoadmapCard::Curated {
            skill,
            videos,
            hours,
            project,
            certificate,
        } => {
            html.push_str("<div class=\"roadmap-card\">");
            html.push_str(&format!("<h5>{}</h5>", escape_html(skill)));
            html.push_str(&format!("<p><strong>Est. hours:</strong> {}</p>", hours));
            html.push_str(&format!(
                "<p><strong>Project:</strong> {}</p>",
                escape_html(project)
            ));
            html.push_str(&format!(
                "<p><strong>Certificate:</strong> {}</p>",
                escape_html(certificate)
            ));
            html.push_str("<p><strong>Videos:</strong></p><ol>");
            for video in videos {
                html.push_str(&format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">▶ Watch</a></li>",
                    escape_html(video)
                ));
            }
            html.push_str("</ol></div>");
        }
        RoadmapCard::Fallback {
            skill,
            youtube_url,
            google_url,
            ..
        } => {
            html.push_str("<div class=\"roadmap-card\">");
            html.push_str(&format!("<h5>{}</h5>", escape_html(skill)));
            html.push_str("<p>No curated path yet – start here:</p><ul>");
            html.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">YouTube</a></li>",
                escape_html(youtube_url)
            ));
            html.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">Google</a></li>",
                escape_html(google_url)
            ));
            html.push_str("</ul></div>");
        }
    }
}
