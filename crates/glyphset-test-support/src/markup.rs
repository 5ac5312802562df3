//! Inspection helpers for rendered SVG/HTML strings.
//!
//! These read markup produced by either the core serializer or Yew's server
//! renderer, so they tolerate both `/>` and `></tag>` forms and hydration
//! comments between elements.

/// Attributes of the first `<tag ...>` element in `markup`, unescaped.
#[must_use]
pub fn element_attrs(markup: &str, tag: &str) -> Option<Vec<(String, String)>> {
    let start = find_open_tag(markup, tag)?;
    Some(parse_attrs(&markup[start + tag.len() + 1..]))
}

/// Value of `name` on the first `<tag>` element.
#[must_use]
pub fn attr(markup: &str, tag: &str, name: &str) -> Option<String> {
    element_attrs(markup, tag)?
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Class tokens on the first `<tag>` element.
#[must_use]
pub fn class_tokens(markup: &str, tag: &str) -> Vec<String> {
    attr(markup, tag, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Number of `<tag>` opening elements in `markup`.
#[must_use]
pub fn count_elements(markup: &str, tag: &str) -> usize {
    let mut count = 0;
    let mut rest = markup;
    while let Some(start) = find_open_tag(rest, tag) {
        count += 1;
        rest = &rest[start + tag.len() + 1..];
    }
    count
}

fn find_open_tag(markup: &str, tag: &str) -> Option<usize> {
    let needle = format!("<{tag}");
    let mut offset = 0;
    while let Some(found) = markup[offset..].find(&needle) {
        let start = offset + found;
        let next = markup[start + needle.len()..].chars().next();
        if matches!(next, Some(ch) if ch.is_whitespace() || ch == '>' || ch == '/') {
            return Some(start);
        }
        offset = start + needle.len();
    }
    None
}

fn parse_attrs(source: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = source.chars().peekable();
    loop {
        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
        match chars.peek() {
            None | Some('>' | '/') => break,
            Some(_) => {}
        }

        let mut name = String::new();
        while let Some(ch) = chars.next_if(|ch| !ch.is_whitespace() && !matches!(ch, '=' | '>' | '/')) {
            name.push(ch);
        }
        if chars.next_if_eq(&'=').is_none() {
            attrs.push((name, String::new()));
            continue;
        }

        let mut value = String::new();
        match chars.next() {
            Some(quote @ ('"' | '\'')) => {
                for ch in chars.by_ref() {
                    if ch == quote {
                        break;
                    }
                    value.push(ch);
                }
            }
            Some(first) => {
                value.push(first);
                while let Some(ch) = chars.next_if(|ch| !ch.is_whitespace() && *ch != '>') {
                    value.push(ch);
                }
            }
            None => {}
        }
        attrs.push((name, unescape(&value)));
    }
    attrs
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!--<[C]>--><svg width="32" class="a  b" data-x='1' hidden aria-label="say &quot;hi&quot;"><title>t</title><path d="M0 0"/><path d="M1 1"></path></svg>"#;

    #[test]
    fn reads_attributes_of_first_element() {
        assert_eq!(attr(SAMPLE, "svg", "width").as_deref(), Some("32"));
        assert_eq!(attr(SAMPLE, "svg", "data-x").as_deref(), Some("1"));
        assert_eq!(attr(SAMPLE, "svg", "hidden").as_deref(), Some(""));
        assert_eq!(attr(SAMPLE, "svg", "aria-label").as_deref(), Some("say \"hi\""));
        assert_eq!(attr(SAMPLE, "path", "d").as_deref(), Some("M0 0"));
        assert!(attr(SAMPLE, "svg", "height").is_none());
    }

    #[test]
    fn splits_class_tokens() {
        assert_eq!(class_tokens(SAMPLE, "svg"), vec!["a", "b"]);
        assert!(class_tokens(SAMPLE, "path").is_empty());
    }

    #[test]
    fn counts_only_exact_tag_names() {
        assert_eq!(count_elements(SAMPLE, "path"), 2);
        assert_eq!(count_elements(SAMPLE, "svg"), 1);
        assert_eq!(count_elements("<pathx/><path/>", "path"), 1);
    }
}
