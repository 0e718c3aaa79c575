//! Fixed placeholder results served in demo mode.

use crate::models::item::ResultItem;

/// The two placeholder items returned for every valid demo request.
pub fn demo_items() -> Vec<ResultItem> {
    vec![
        ResultItem::new(
            "【サンプル1】ショートヘアの新人OL",
            "https://via.placeholder.com/200x300.png?text=Sample+1",
            &["田中みな実 (サンプル)"],
            95,
            "ユーザーの記憶とシチュエーションが完全に一致します。",
        ),
        ResultItem::new(
            "【サンプル2】出張先の温泉旅館",
            "https://via.placeholder.com/200x300.png?text=Sample+2",
            &["新木優子 (サンプル)"],
            80,
            "「出張」と「旅館」の要素が含まれています。",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_items_are_fixed() {
        let items = demo_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "【サンプル1】ショートヘアの新人OL");
        assert_eq!(items[0].score, 95);
        assert_eq!(items[1].score, 80);
        assert!(items.iter().all(|item| item.affiliate_url == "#"));
        assert_eq!(items, demo_items());
    }
}
