extern crate regex;

use regex::{Captures, Regex};
use std::borrow::Cow;

const SOURCE_MARKER: &str = "program-source-text";
const OPEN_TAG: &str = "<pre";
const CLOSE_TAG: &str = "</pre>";

// Challenge interstitials and error pages carry no marker, so they all
// collapse to None here.
pub fn source_text(page: &str) -> Option<String> {
    let marker = page.find(SOURCE_MARKER)?;
    let open = page[..marker].rfind(OPEN_TAG)?;
    let body = open + page[open..].find('>')? + 1;
    let end = body + page[body..].find(CLOSE_TAG)?;
    let decoded = decode_entities(&page[body..end]);
    if decoded.trim().is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

// `&amp;` last, so that `&amp;lt;` decodes to the literal `&lt;`.
const NAMED_ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let numeric = Regex::new(r"&#(\d+);").unwrap();
    let mut decoded = text.to_string();
    for (entity, plain) in &NAMED_ENTITIES {
        decoded = decoded.replace(entity, plain);
    }
    decoded = numeric
        .replace_all(&decoded, |caps: &Captures<'_>| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(std::char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned();
    Cow::Owned(decoded.replace("&amp;", "&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!(
            "<html><body><pre id=\"program-source-text\" class=\"prettyprint\">{}</pre></body></html>",
            body
        )
    }

    #[test]
    fn extracts_and_decodes_source() {
        let html = page("#include &lt;iostream&gt;\nint main() {}\n");
        assert_eq!(
            source_text(&html).unwrap(),
            "#include <iostream>\nint main() {}\n"
        );
    }

    #[test]
    fn round_trips_escaped_markup() {
        let html = page("&lt;code&gt;");
        assert_eq!(source_text(&html).unwrap(), "<code>");
    }

    #[test]
    fn missing_marker_yields_none() {
        let html = "<html><body><pre>int main() {}</pre></body></html>";
        assert_eq!(source_text(html), None);
    }

    #[test]
    fn empty_block_yields_none() {
        assert_eq!(source_text(&page("")), None);
        assert_eq!(source_text(&page("  \n ")), None);
    }

    #[test]
    fn unterminated_block_yields_none() {
        let html = "<pre id=\"program-source-text\">int main() {}";
        assert_eq!(source_text(html), None);
    }

    #[test]
    fn decodes_double_escaped_and_numeric_entities() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("a &#38; b"), "a & b");
        assert_eq!(decode_entities("s = &quot;x&quot;; c = &#39;y&#39;"), "s = \"x\"; c = 'y'");
        assert_eq!(decode_entities("no entities"), "no entities");
    }
}
