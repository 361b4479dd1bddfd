use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::lines::Span;

/// A `[text](url)` construct found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Byte span of the whole construct within the line.
    pub span: Span,
    pub text: &'a str,
    pub url: &'a str,
}

/// A `![alt](src)` construct found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMatch<'a> {
    pub span: Span,
    pub alt: &'a str,
    pub src: &'a str,
}

pub struct Link;

impl Link {
    /// A bracket preceded by this byte opens an image, not a link.
    pub const IMAGE_BANG: u8 = b'!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }

    /// All links in `line`, left to right, skipping image constructs.
    pub fn find_all(line: &str) -> Vec<LinkMatch<'_>> {
        let bytes = line.as_bytes();
        Self::regex()
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if whole.start() > 0 && bytes[whole.start() - 1] == Self::IMAGE_BANG {
                    return None;
                }
                Some(LinkMatch {
                    span: Span::new(whole.start(), whole.end()),
                    text: caps.get(1)?.as_str(),
                    url: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }
}

pub struct Image;

impl Image {
    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"))
    }

    /// The first image in `line`. Further images on the same line are ignored.
    pub fn find_first(line: &str) -> Option<ImageMatch<'_>> {
        let caps = Self::regex().captures(line)?;
        let whole = caps.get(0)?;
        Some(ImageMatch {
            span: Span::new(whole.start(), whole.end()),
            alt: caps.get(1).map_or("", |m| m.as_str()),
            src: caps.get(2)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_every_link() {
        let links = Link::find_all("see [a](http://a) and [b](http://b)");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "a");
        assert_eq!(links[0].url, "http://a");
        assert_eq!(links[0].span, Span::new(4, 17));
        assert_eq!(links[1].text, "b");
    }

    #[test]
    fn image_is_not_a_link() {
        assert!(Link::find_all("![cat](cat.png)").is_empty());
    }

    #[test]
    fn empty_text_or_url_is_not_a_link() {
        assert!(Link::find_all("[](http://a)").is_empty());
        assert!(Link::find_all("[a]()").is_empty());
    }

    #[test]
    fn first_image_only() {
        let img = Image::find_first("![one](1.png) ![two](2.png)").unwrap();
        assert_eq!(img.alt, "one");
        assert_eq!(img.src, "1.png");
    }

    #[test]
    fn image_alt_may_be_empty() {
        let img = Image::find_first("![](pic.jpg)").unwrap();
        assert_eq!(img.alt, "");
        assert_eq!(img.src, "pic.jpg");
    }
}
