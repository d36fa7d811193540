//! Pagination state and the list loader's parse/apply pipeline.
//!
//! The cursor is owned here and mutated only by [`Catalog::apply_page`],
//! which the controller calls on the main loop after a successful parse.
//! A fetch or parse failure therefore never leaves the cursor half-updated.

use serde::Deserialize;

use crate::api::PAGE_LIMIT;
use crate::error::Result;
use crate::types::{PokemonSummary, TypeTag};

/// Offset/limit/next state determining which slice of the catalog to fetch
/// next. `next` mirrors the server-supplied pointer and is authoritative;
/// it is never computed locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub limit: u32,
    pub offset: u32,
    pub total_count: u32,
    pub next: Option<String>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            limit: PAGE_LIMIT,
            offset: 0,
            total_count: 0,
            next: None,
        }
    }
}

// Wire shapes for the v1 list endpoint. `offset`, `total_count` and
// `objects` are required; a body missing them (or carrying the wrong types)
// is a parse error, not a silent default. `next` is nullable by contract:
// null marks the end of the catalog.

#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub meta: RawMeta,
    pub objects: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawMeta {
    pub offset: u32,
    pub total_count: u32,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeTag>,
    pub sprites: Option<Vec<SpriteRef>>,
}

#[derive(Debug, Deserialize)]
pub struct SpriteRef {
    pub resource_uri: String,
}

impl RawEntry {
    fn into_summary(self) -> PokemonSummary {
        // Some records ship no sprite collection at all; that is a valid
        // entry, not an error.
        let sprite = self
            .sprites
            .and_then(|s| s.into_iter().next())
            .map(|s| s.resource_uri);

        PokemonSummary {
            name: self.name,
            types: self.types,
            sprite,
        }
    }
}

pub fn parse_page(body: &str) -> Result<RawPage> {
    Ok(serde_json::from_str(body)?)
}

/// One applied page: the summaries to render, in server order, plus whether
/// the catalog ended with this page.
#[derive(Debug)]
pub struct PageBatch {
    pub summaries: Vec<PokemonSummary>,
    pub end_of_catalog: bool,
}

/// Sole owner of the session's pagination cursor.
#[derive(Debug, Default)]
pub struct Catalog {
    cursor: PageCursor,
}

impl Catalog {
    /// URL for the next page, or `None` when the server reported the end of
    /// the catalog (or no page has been applied yet).
    pub fn next_url(&self) -> Option<&str> {
        self.cursor.next.as_deref()
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Update the cursor from a parsed page and slice out the records to
    /// render. The final page is short: the batch is `total_count - offset`
    /// when that is smaller than the limit, and zero on a catalog that is
    /// already exhausted (never negative).
    pub fn apply_page(&mut self, page: RawPage) -> PageBatch {
        let RawPage { meta, objects } = page;

        self.cursor.offset = meta.offset;
        self.cursor.total_count = meta.total_count;
        self.cursor.next = meta.next;

        let batch = batch_size(self.cursor.limit, meta.total_count, meta.offset);

        let summaries = objects
            .into_iter()
            .take(batch)
            .map(RawEntry::into_summary)
            .collect();

        PageBatch {
            summaries,
            end_of_catalog: self.cursor.next.is_none(),
        }
    }
}

fn batch_size(limit: u32, total_count: u32, offset: u32) -> usize {
    limit.min(total_count.saturating_sub(offset)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_body(offset: u32, total: u32, next: Option<&str>, count: usize) -> String {
        let objects: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"name": "mon{}", "types": [{{"name": "grass"}}], "sprites": [{{"resource_uri": "/api/v1/sprite/{}/"}}]}}"#,
                    offset as usize + i,
                    offset as usize + i + 1
                )
            })
            .collect();

        let next = match next {
            Some(n) => format!(r#""{}""#, n),
            None => "null".to_string(),
        };

        format!(
            r#"{{"meta": {{"limit": 12, "offset": {}, "total_count": {}, "next": {}, "previous": null}}, "objects": [{}]}}"#,
            offset,
            total,
            next,
            objects.join(",")
        )
    }

    #[test]
    fn batch_size_is_min_of_limit_and_remaining() {
        assert_eq!(batch_size(12, 718, 0), 12);
        assert_eq!(batch_size(12, 20, 12), 8);
        assert_eq!(batch_size(12, 12, 0), 12);
        assert_eq!(batch_size(12, 5, 0), 5);
    }

    #[test]
    fn batch_size_on_exhausted_catalog_is_zero() {
        assert_eq!(batch_size(12, 20, 20), 0);
        // Offset past the total must clamp, not wrap.
        assert_eq!(batch_size(12, 20, 32), 0);
        assert_eq!(batch_size(12, 0, 0), 0);
    }

    #[test]
    fn two_page_catalog_renders_twelve_then_eight() {
        let mut catalog = Catalog::default();

        let first = parse_page(&page_body(
            0,
            20,
            Some("/api/v1/pokemon/?limit=12&offset=12"),
            12,
        ))
        .unwrap();
        let batch = catalog.apply_page(first);
        assert_eq!(batch.summaries.len(), 12);
        assert!(!batch.end_of_catalog);
        assert_eq!(
            catalog.next_url(),
            Some("/api/v1/pokemon/?limit=12&offset=12")
        );

        let second = parse_page(&page_body(12, 20, None, 12)).unwrap();
        let batch = catalog.apply_page(second);
        assert_eq!(batch.summaries.len(), 8);
        assert!(batch.end_of_catalog);
        assert_eq!(catalog.next_url(), None);
    }

    #[test]
    fn summaries_keep_server_order() {
        let mut catalog = Catalog::default();
        let page = parse_page(&page_body(0, 3, None, 3)).unwrap();
        let names: Vec<String> = catalog
            .apply_page(page)
            .summaries
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["mon0", "mon1", "mon2"]);
    }

    #[test]
    fn missing_sprite_collection_is_not_an_error() {
        let body = r#"{
            "meta": {"limit": 12, "offset": 0, "total_count": 1, "next": null},
            "objects": [{"name": "missingno", "types": [{"name": "bird"}]}]
        }"#;
        let mut catalog = Catalog::default();
        let batch = catalog.apply_page(parse_page(body).unwrap());
        assert_eq!(batch.summaries.len(), 1);
        assert_eq!(batch.summaries[0].sprite, None);
    }

    #[test]
    fn summary_takes_the_first_sprite() {
        let body = r#"{
            "meta": {"limit": 12, "offset": 0, "total_count": 1, "next": null},
            "objects": [{
                "name": "eevee",
                "types": [{"name": "normal"}],
                "sprites": [{"resource_uri": "/api/v1/sprite/134/"},
                            {"resource_uri": "/api/v1/sprite/900/"}]
            }]
        }"#;
        let mut catalog = Catalog::default();
        let batch = catalog.apply_page(parse_page(body).unwrap());
        assert_eq!(
            batch.summaries[0].sprite.as_deref(),
            Some("/api/v1/sprite/134/")
        );
    }

    #[test]
    fn body_missing_meta_fields_fails_to_parse() {
        assert!(parse_page(r#"{"objects": []}"#).is_err());
        assert!(parse_page(r#"{"meta": {"offset": 0, "next": null}, "objects": []}"#).is_err());
        assert!(parse_page(r#"{"meta": {"offset": 0, "total_count": 5, "next": null}}"#).is_err());
    }

    #[test]
    fn wrong_shaped_fields_fail_to_parse() {
        assert!(parse_page(
            r#"{"meta": {"offset": "zero", "total_count": 5, "next": null}, "objects": []}"#
        )
        .is_err());
        assert!(parse_page(
            r#"{"meta": {"offset": 0, "total_count": 5, "next": null}, "objects": 42}"#
        )
        .is_err());
        assert!(parse_page("not json at all").is_err());
    }

    #[test]
    fn failed_parse_leaves_the_cursor_untouched() {
        let mut catalog = Catalog::default();
        let page = parse_page(&page_body(0, 20, Some("/next"), 12)).unwrap();
        catalog.apply_page(page);
        let before = catalog.cursor().clone();

        assert!(parse_page("garbage").is_err());
        assert_eq!(catalog.cursor(), &before);
    }
}
