use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::domain::sentence::SentenceRecord;
use crate::error::AppError;
use crate::utils::state::AppState;

/// GET /
pub async fn homepage(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let records = state.sentences.list_all().await?;
    Ok(Html(render_homepage(&records)))
}

fn render_homepage(records: &[SentenceRecord]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Sentiboard</title></head>\n<body>\n\
         <h1>Sentence sentiment</h1>\n\
         <form action=\"/upload-text\" method=\"post\">\n\
         <textarea name=\"text\" rows=\"4\" cols=\"60\"></textarea><br>\n\
         <button type=\"submit\">Analyze text</button>\n\
         </form>\n\
         <form action=\"/upload-file\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\">\n\
         <button type=\"submit\">Analyze file</button>\n\
         </form>\n\
         <ul>\n",
    );
    for record in records {
        page.push_str(&format!(
            "<li><blockquote>{}</blockquote> <b>{}</b> <i>{}</i></li>\n",
            escape_html(&record.text),
            record.sentiment,
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        ));
    }
    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentence::Sentiment;
    use chrono::Utc;

    #[test]
    fn renders_record_text_and_label() {
        let records = vec![SentenceRecord {
            key: "sample_task".to_string(),
            text: "I love this.".to_string(),
            timestamp: Utc::now(),
            sentiment: Sentiment::Positive,
        }];
        let page = render_homepage(&records);
        assert!(page.contains("I love this."));
        assert!(page.contains("<b>positive</b>"));
    }

    #[test]
    fn renders_submission_forms_when_empty() {
        let page = render_homepage(&[]);
        assert!(page.contains("action=\"/upload-text\""));
        assert!(page.contains("action=\"/upload-file\""));
        assert!(!page.contains("<li>"));
    }

    #[test]
    fn escapes_markup_in_stored_text() {
        let records = vec![SentenceRecord {
            key: "sample_task".to_string(),
            text: "<script>alert('hi')</script>".to_string(),
            timestamp: Utc::now(),
            sentiment: Sentiment::Neutral,
        }];
        let page = render_homepage(&records);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
