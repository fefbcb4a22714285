// src/specs/listing.rs

use scraper::{ElementRef, Html};

use crate::config::consts::{ALIAS_PREFIX, AUTHOR_SELECTOR, USER_PATH_PREFIX, VISITS_SELECTOR, VOTES_SELECTOR};
use crate::core::html::{count_matches, select_texts, selector, text_of};
use crate::error::Result;

/// Anything carrying an `href`.
pub trait HasHref {
    fn href(&self) -> Option<&str>;
}

impl HasHref for ElementRef<'_> {
    fn href(&self) -> Option<&str> {
        self.value().attr("href")
    }
}

impl HasHref for &str {
    fn href(&self) -> Option<&str> {
        Some(*self)
    }
}

/// One author link as found on the listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorLink {
    pub text: String,
    pub href: Option<String>,
}

impl HasHref for AuthorLink {
    fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Raw per-field lists from one listing page, each in document order.
/// The lists are independent and may differ in length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingFields {
    pub authors: Vec<AuthorLink>,
    pub visit_texts: Vec<String>,
    pub vote_texts: Vec<String>,
}

impl ListingFields {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.visit_texts.is_empty() && self.vote_texts.is_empty()
    }
}

/// Number of author elements currently in the page.
pub fn count_authors(page_source: &str) -> Result<usize> {
    let doc = Html::parse_document(page_source);
    count_matches(&doc, AUTHOR_SELECTOR)
}

pub fn parse_listing(page_source: &str) -> Result<ListingFields> {
    let doc = Html::parse_document(page_source);

    let author_sel = selector(AUTHOR_SELECTOR)?;
    let authors = doc
        .select(&author_sel)
        .map(|el| AuthorLink {
            text: text_of(&el),
            href: el.href().map(String::from),
        })
        .collect();

    Ok(ListingFields {
        authors,
        visit_texts: select_texts(&doc, VISITS_SELECTOR)?,
        vote_texts: select_texts(&doc, VOTES_SELECTOR)?,
    })
}

/// Usernames from `/user/<name>` links.
///
/// Links without that prefix (or without an href) are dropped, so the output
/// can be shorter than the input and no longer index-aligned with it.
pub fn extract_usernames<T: HasHref>(links: &[T]) -> Vec<String> {
    logd!("Extracting usernames from {} author links", links.len());
    links
        .iter()
        .filter_map(|l| l.href())
        .filter_map(|href| href.strip_prefix(USER_PATH_PREFIX))
        .map(|rest| rest.split(USER_PATH_PREFIX).next().unwrap_or(rest).to_string())
        .collect()
}

/// Aliases from link texts of the form "by <alias>".
/// Every segment after a "by " becomes one alias; texts without one yield none.
pub fn extract_aliases(authors: &[AuthorLink]) -> Vec<String> {
    authors
        .iter()
        .flat_map(|a| a.text.split(ALIAS_PREFIX).skip(1).map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="story">
            <a class="username meta on-navigate" href="/user/johndoe">by JohnDoe</a>
            <span class="read-count">1.2K</span><span class="vote-count">87</span>
          </div>
          <div class="story">
            <a class="username meta on-navigate" href="/user/ana_lee">by Ana Lee!</a>
            <span class="read-count">250</span><span class="vote-count">12</span>
          </div>
          <div class="story">
            <a class="username meta on-navigate" href="/stories/tag">by Nobody</a>
            <span class="read-count">3</span>
          </div>
          <a class="username" href="/user/not-an-author">plain username link</a>
        </body></html>
    "#;

    #[test]
    fn usernames_drop_foreign_links_in_order() {
        let links = ["/user/johndoe", "/user/janedoe", "/other"];
        assert_eq!(extract_usernames(&links), vec!["johndoe", "janedoe"]);
    }

    #[test]
    fn username_stops_at_second_prefix() {
        assert_eq!(extract_usernames(&["/user/a/user/b"]), vec!["a"]);
        assert_eq!(extract_usernames(&["/user/"]), vec![""]);
    }

    #[test]
    fn missing_href_is_skipped() {
        let links = vec![
            AuthorLink { text: s!("by X"), href: None },
            AuthorLink { text: s!("by Y"), href: Some(s!("/user/y")) },
        ];
        assert_eq!(extract_usernames(&links), vec!["y"]);
    }

    #[test]
    fn aliases_follow_by_prefix() {
        let authors = vec![
            AuthorLink { text: s!("by JohnDoe"), href: None },
            AuthorLink { text: s!("no prefix"), href: None },
            AuthorLink { text: s!("by A by B"), href: None },
        ];
        assert_eq!(extract_aliases(&authors), vec!["JohnDoe", "A ", "B"]);
    }

    #[test]
    fn listing_page_fields() {
        let f = parse_listing(PAGE).unwrap();
        assert_eq!(f.authors.len(), 3);
        assert_eq!(f.authors[1].text, "by Ana Lee!");
        assert_eq!(f.visit_texts, vec!["1.2K", "250", "3"]);
        assert_eq!(f.vote_texts, vec!["87", "12"]);
        assert_eq!(extract_usernames(&f.authors), vec!["johndoe", "ana_lee"]);
        assert_eq!(count_authors(PAGE).unwrap(), 3);
    }

    #[test]
    fn empty_page_has_no_fields() {
        let f = parse_listing("<html><body></body></html>").unwrap();
        assert!(f.is_empty());
        assert_eq!(count_authors("").unwrap(), 0);
    }
}
