use std::collections::{HashMap, HashSet};
use std::future::Future;

/// Anything that carries a document identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Fetches documents by id in sequential chunks of `batch_size`.
///
/// The underlying store caps how many ids a single lookup may carry, so the
/// ids are split, each chunk is awaited before the next one is issued, and the
/// results are concatenated. Documents returned twice (duplicate ids, or a
/// store that answers overlapping chunks) are kept once, first occurrence
/// wins. A `batch_size` of zero is treated as one.
pub async fn fetch_in_batches<T, E, F, Fut>(
    ids: &[String],
    batch_size: usize,
    mut fetch: F,
) -> Result<Vec<T>, E>
where
    T: Identified,
    F: FnMut(Vec<String>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut loaded = Vec::with_capacity(ids.len());
    let mut seen = HashSet::new();

    for chunk in ids.chunks(batch_size.max(1)) {
        for item in fetch(chunk.to_vec()).await? {
            if seen.insert(item.id().to_string()) {
                loaded.push(item);
            }
        }
    }

    Ok(loaded)
}

/// Reorders `items` to follow `ids`. Items whose id is not listed go last.
pub fn order_by_ids<T: Identified>(mut items: Vec<T>, ids: &[String]) -> Vec<T> {
    let positions: HashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .rev()
        .map(|(position, id)| (id.as_str(), position))
        .collect();

    items.sort_by_key(|item| positions.get(item.id()).copied().unwrap_or(usize::MAX));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc(String);

    impl Identified for Doc {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_chunks_are_sequential_and_bounded() {
        let requested = RefCell::new(Vec::new());
        let all = ids(&["a", "b", "c", "d", "e"]);

        let loaded: Vec<Doc> = fetch_in_batches(&all, 2, |chunk| {
            requested.borrow_mut().push(chunk.clone());
            async move { Ok::<_, ()>(chunk.into_iter().map(Doc).collect()) }
        })
        .await
        .unwrap();

        assert_eq!(
            requested.into_inner(),
            vec![ids(&["a", "b"]), ids(&["c", "d"]), ids(&["e"])]
        );
        assert_eq!(loaded.len(), 5);
    }

    #[tokio::test]
    async fn test_duplicates_are_dropped() {
        let all = ids(&["a", "b", "a"]);

        let loaded: Vec<Doc> = fetch_in_batches(&all, 10, |chunk| async move {
            Ok::<_, ()>(chunk.into_iter().map(Doc).collect())
        })
        .await
        .unwrap();

        assert_eq!(loaded, vec![Doc("a".into()), Doc("b".into())]);
    }

    #[tokio::test]
    async fn test_error_stops_fetching() {
        let calls = RefCell::new(0);
        let all = ids(&["a", "b", "c"]);

        let result: Result<Vec<Doc>, &str> = fetch_in_batches(&all, 1, |_| {
            *calls.borrow_mut() += 1;
            async { Err("boom") }
        })
        .await;

        assert_eq!(result, Err("boom"));
        assert_eq!(calls.into_inner(), 1);
    }

    #[tokio::test]
    async fn test_zero_batch_size_is_treated_as_one() {
        let all = ids(&["a", "b"]);
        let calls = RefCell::new(0);

        let loaded: Vec<Doc> = fetch_in_batches(&all, 0, |chunk| {
            *calls.borrow_mut() += 1;
            async move { Ok::<_, ()>(chunk.into_iter().map(Doc).collect()) }
        })
        .await
        .unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(calls.into_inner(), 2);
    }

    #[test]
    fn test_order_by_ids_restores_requested_order() {
        let items = vec![Doc("c".into()), Doc("x".into()), Doc("a".into())];
        let ordered = order_by_ids(items, &ids(&["a", "b", "c"]));
        assert_eq!(
            ordered,
            vec![Doc("a".into()), Doc("c".into()), Doc("x".into())]
        );
    }
}
