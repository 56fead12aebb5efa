//! 検索フィルタ
//!
//! タイトル・場所・説明文に対する部分一致検索。
//! 大文字小文字は区別せず、入力順を保持する。

use crate::types::{Item, ItemKind};

/// アイテムリストを検索する
///
/// `kind` を指定すると、まずその区分に絞り込む。
/// 空クエリは全件にマッチする。
pub fn search(query: &str, items: &[Item], kind: Option<ItemKind>) -> Vec<Item> {
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| kind.map_or(true, |k| item.kind == k))
        .filter(|item| {
            item.title.to_lowercase().contains(&q)
                || item.place.to_lowercase().contains(&q)
                || item.description.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, kind: ItemKind, title: &str, place: &str, description: &str) -> Item {
        Item {
            id,
            kind,
            title: title.to_string(),
            place: place.to_string(),
            date: String::new(),
            description: description.to_string(),
            poster: "poster".to_string(),
            contact: "contact".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let items = vec![
            item(1, ItemKind::Lost, "Keys", "Cafe", ""),
            item(2, ItemKind::Found, "Phone", "Gym", ""),
        ];

        let result = search("", &items, None);
        assert_eq!(result, items);
    }

    #[test]
    fn test_case_insensitive_title_match() {
        let items = vec![
            item(1, ItemKind::Lost, "Black Umbrella", "Station", ""),
            item(2, ItemKind::Lost, "Wallet", "Station", ""),
        ];

        let result = search("UMBRELLA", &items, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_matches_place_and_description() {
        let items = vec![
            item(1, ItemKind::Lost, "Keys", "North Cafe", ""),
            item(2, ItemKind::Found, "Phone", "Gym", "left near the cafe door"),
            item(3, ItemKind::Found, "Bag", "Library", ""),
        ];

        let result = search("cafe", &items, None);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[1].id, 2);
    }

    #[test]
    fn test_kind_filter_restricts_first() {
        let items = vec![
            item(1, ItemKind::Lost, "Keys", "Cafe", ""),
            item(2, ItemKind::Found, "Phone", "Cafe", ""),
        ];

        let result = search("cafe", &items, Some(ItemKind::Lost));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, ItemKind::Lost);
    }

    #[test]
    fn test_order_preserved() {
        let items = vec![
            item(3, ItemKind::Lost, "Red scarf", "Park", ""),
            item(1, ItemKind::Lost, "Red hat", "Park", ""),
            item(2, ItemKind::Lost, "Gloves", "Park", ""),
        ];

        let result = search("red", &items, None);
        let ids: Vec<i64> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = vec![item(1, ItemKind::Lost, "Keys", "Cafe", "")];
        assert!(search("bicycle", &items, None).is_empty());
    }
}
