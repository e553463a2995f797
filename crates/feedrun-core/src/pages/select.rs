//! Narrowing the pages file down to what this run processes.

use super::{Page, PagesError, PagesFile};

/// Keyword that selects every page.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Slug(String),
}

impl Selector {
    /// No argument and the literal `all` both mean every page.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(ALL) => Selector::All,
            Some(slug) => Selector::Slug(slug.to_string()),
        }
    }
}

/// Pages to process, in file order.
pub fn select<'a>(file: &'a PagesFile, selector: &Selector) -> Result<Vec<&'a Page>, PagesError> {
    match selector {
        Selector::All => Ok(file.pages.iter().collect()),
        Selector::Slug(slug) => match file.find(slug) {
            Some(page) => Ok(vec![page]),
            None => Err(PagesError::UnknownPage {
                slug: slug.clone(),
                available: file.slugs(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(slug: &str) -> Page {
        Page {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            url: format!("https://example.com/{slug}"),
        }
    }

    fn sample() -> PagesFile {
        PagesFile {
            pages: vec![page("a"), page("b"), page("c")],
        }
    }

    #[test]
    fn all_keyword_matches_no_argument() {
        assert_eq!(Selector::from_arg(None), Selector::All);
        assert_eq!(Selector::from_arg(Some("all")), Selector::All);
        assert_eq!(Selector::from_arg(Some("b")), Selector::Slug("b".into()));
        // Case-sensitive, like slugs themselves.
        assert_eq!(Selector::from_arg(Some("ALL")), Selector::Slug("ALL".into()));
    }

    #[test]
    fn select_all_keeps_file_order() {
        let file = sample();
        let slugs: Vec<_> = select(&file, &Selector::All)
            .unwrap()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn select_one_slug() {
        let file = sample();
        let picked = select(&file, &Selector::Slug("b".into())).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].slug, "b");
    }

    #[test]
    fn unknown_slug_lists_available() {
        let file = sample();
        let err = select(&file, &Selector::Slug("zzz".into())).unwrap_err();
        match &err {
            PagesError::UnknownPage { slug, available } => {
                assert_eq!(slug, "zzz");
                assert_eq!(available, &vec!["a", "b", "c"]);
            }
            other => panic!("expected UnknownPage, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "page 'zzz' not found in config (available pages: a, b, c)"
        );
    }

    #[test]
    fn empty_file_selects_nothing() {
        let file = PagesFile::default();
        assert!(select(&file, &Selector::All).unwrap().is_empty());
    }
}
