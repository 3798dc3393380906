use crate::change::PriceChange;
use crate::news::Article;

/// Renders the text sent for one headline:
///
/// ```text
/// RIVN🔺4%\r\nHeadline: \r\n<title>\r\nBrief: \r\n<description>
/// ```
///
/// The percentage is unsigned; the glyph carries the direction.
pub fn render_alert(symbol: &str, change: &PriceChange, article: &Article) -> String {
    format!(
        "{symbol}{glyph}{pct}%\r\nHeadline: \r\n{title}\r\nBrief: \r\n{brief}",
        glyph = change.direction().glyph(),
        pct = change.rounded_magnitude(),
        title = article.title,
        brief = article.description.as_deref().unwrap_or_default(),
    )
}
