//! Ordering and tag aggregation shared by every collection.
//!
//! Chapters and journal posts are sorted and counted through the same
//! functions so both collections agree on tie-breaking and on how
//! unparsable dates are treated.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

use super::types::TagCount;
use crate::utils::date::sort_key;

/// A record that can be ordered by date and grouped by tag.
pub trait Entry {
    fn slug(&self) -> &str;

    /// Raw date string as written in the source.
    fn date(&self) -> &str;

    fn tags(&self) -> impl Iterator<Item = &str>;

    /// Exact, case-sensitive tag membership.
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

impl<T: Entry + ?Sized> Entry for &T {
    fn slug(&self) -> &str {
        (**self).slug()
    }

    fn date(&self) -> &str {
        (**self).date()
    }

    fn tags(&self) -> impl Iterator<Item = &str> {
        (**self).tags()
    }
}

/// Sort newest first. Stable: equal dates keep their input order, and
/// entries with unparsable dates go last in input order.
pub fn sort_newest_first<T: Entry>(items: &mut [T]) {
    items.sort_by_cached_key(|item| Reverse(sort_key(item.date())));
}

/// Keep entries carrying `tag`, preserving order.
pub fn with_tag<T: Entry>(items: Vec<T>, tag: &str) -> Vec<T> {
    items.into_iter().filter(|item| item.has_tag(tag)).collect()
}

/// Count tag occurrences across `items`.
///
/// Every occurrence counts, so a tag listed twice on one entry adds two.
/// The result is sorted by count descending; equal counts keep the order
/// in which tags were first seen.
pub fn count_tags<'a, T, I>(items: I) -> Vec<TagCount>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<TagCount> = Vec::new();

    for item in items {
        for tag in item.tags() {
            match index.get(tag) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(tag, counts.len());
                    counts.push(TagCount {
                        tag: tag.to_owned(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        slug: &'static str,
        date: &'static str,
        tags: Vec<&'static str>,
    }

    impl Entry for Item {
        fn slug(&self) -> &str {
            self.slug
        }

        fn date(&self) -> &str {
            self.date
        }

        fn tags(&self) -> impl Iterator<Item = &str> {
            self.tags.iter().copied()
        }
    }

    fn item(slug: &'static str, date: &'static str, tags: &[&'static str]) -> Item {
        Item {
            slug,
            date,
            tags: tags.to_vec(),
        }
    }

    fn slugs(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.slug).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut items = vec![
            item("a", "2024-01", &[]),
            item("b", "2025-03", &[]),
            item("c", "2024-06-15", &[]),
        ];
        sort_newest_first(&mut items);
        assert_eq!(slugs(&items), ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut items = vec![
            item("first", "2024-05", &[]),
            item("second", "2024-05-01", &[]),
            item("third", "2024-05", &[]),
        ];
        sort_newest_first(&mut items);
        assert_eq!(slugs(&items), ["first", "second", "third"]);

        // Sorting again must not swap equal entries
        sort_newest_first(&mut items);
        assert_eq!(slugs(&items), ["first", "second", "third"]);
    }

    #[test]
    fn test_sort_unparsable_dates_last() {
        let mut items = vec![
            item("bad-1", "someday", &[]),
            item("old", "1999-01-01", &[]),
            item("bad-2", "", &[]),
            item("new", "2025-01-01", &[]),
        ];
        sort_newest_first(&mut items);
        assert_eq!(slugs(&items), ["new", "old", "bad-1", "bad-2"]);
    }

    #[test]
    fn test_sort_on_references() {
        let owned = [item("a", "2020", &[]), item("b", "2021", &[])];
        let mut refs: Vec<&Item> = owned.iter().collect();
        sort_newest_first(&mut refs);
        assert_eq!(refs[0].slug, "b");
    }

    #[test]
    fn test_with_tag_exact_match() {
        let items = vec![
            item("a", "2024", &["rust", "web"]),
            item("b", "2024", &["Rust"]),
            item("c", "2024", &["rusty"]),
        ];
        let tagged = with_tag(items, "rust");
        assert_eq!(slugs(&tagged), ["a"]);
    }

    #[test]
    fn test_count_tags_orders_by_count() {
        let items = [item("p1", "2024", &["x", "y"]), item("p2", "2024", &["y"])];
        let counts = count_tags(&items);
        assert_eq!(
            counts,
            vec![
                TagCount { tag: "y".into(), count: 2 },
                TagCount { tag: "x".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_count_tags_ties_keep_first_seen_order() {
        let items = [item("p1", "2024", &["b", "a"]), item("p2", "2024", &["c"])];
        let tags: Vec<_> = count_tags(&items).into_iter().map(|t| t.tag).collect();
        assert_eq!(tags, ["b", "a", "c"]);
    }

    #[test]
    fn test_count_tags_counts_duplicates_within_entry() {
        // Literal behavior: a tag repeated on one entry counts each time
        let items = [item("p1", "2024", &["x", "x"]), item("p2", "2024", &["y"])];
        let counts = count_tags(&items);
        assert_eq!(counts[0], TagCount { tag: "x".into(), count: 2 });
        assert_eq!(counts[1], TagCount { tag: "y".into(), count: 1 });
    }

    #[test]
    fn test_count_tags_sum_matches_occurrences() {
        let items = [
            item("p1", "2024", &["a", "b", "c"]),
            item("p2", "2024", &["a"]),
            item("p3", "2024", &[]),
            item("p4", "2024", &["c", "a"]),
        ];
        let counts = count_tags(&items);
        let total: usize = counts.iter().map(|t| t.count).sum();
        let occurrences: usize = items.iter().map(|i| i.tags.len()).sum();
        assert_eq!(total, occurrences);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_count_tags_empty() {
        let items: [Item; 0] = [];
        assert!(count_tags(&items).is_empty());
    }
}
