//! Prompt sent to the text generator in live mode.

/// Number of items the generator is asked to invent.
pub const GENERATED_ITEM_COUNT: usize = 3;

/// Placeholder thumbnail every generated item must use.
pub const GENERATED_IMAGE_URL: &str =
    "https://via.placeholder.com/200x300.png?text=Generated+Image";

/// Build the instruction asking for fictitious items matching `user_query`.
///
/// The query is embedded verbatim. The output rules pin every field of
/// `ResultItem` and require a bare JSON array with no surrounding prose.
pub fn build_prompt(user_query: &str) -> String {
    format!(
        r##"あなたは非常に優秀なAV作品の検索エンジンです。
以下のユーザーの曖昧な記憶を元に、それに合致しそうな架空のAV作品のリストを{count}つ生成してください。

# ユーザーの記憶:
"{query}"

# 出力ルール:
- 必ずJSON配列形式のみで出力し、説明文やコードブロックは付けないでください。
- 配列の要素数はちょうど{count}つにしてください。
- 各作品には以下のキーを含めてください: title, affiliateURL, imageURL, iteminfo, score, reason
- 'title': 記憶に沿った架空の作品タイトルを創作してください。
- 'affiliateURL': "#" という固定文字列にしてください。
- 'imageURL': {{ "large": "{image}" }} という固定のオブジェクトにしてください。
- 'iteminfo': {{ "actress": [{{"name": "架空の女優名"}}] }} という形式で、架空の女優名を創作してください。
- 'score': ユーザーの記憶との一致度を0〜100の整数で評価してください。
- 'reason': なぜその作品が一致すると考えたか、簡潔な理由を述べてください。

# 出力形式 (JSON配列のみを出力):
[
  {{
    "title": "架空のタイトル1", "affiliateURL": "#",
    "imageURL": {{ "large": "{image}" }},
    "iteminfo": {{ "actress": [{{"name": "架空 花子"}}] }},
    "score": 98, "reason": "「OL」と「出張」の要素が完全に一致します。"
  }}
]
"##,
        count = GENERATED_ITEM_COUNT,
        query = user_query,
        image = GENERATED_IMAGE_URL,
    )
}
