//! 汎用係り受け木インタフェース
//!
//! このモジュールは、下流の解析・学習処理と受け渡しするための最小限の
//! 係り受け木表現を定義します。CoNLL形式との変換の唯一の接点であり、
//! ノードは順序付きの（表層形、品詞タグ、係り先）の3つ組です。

/// 係り受け木の1ノード
///
/// 先頭要素（インデックス0）は人工ルートを表します。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyNode {
    /// 表層形
    pub word: String,

    /// 品詞タグ
    pub tag: String,

    /// 係り先ノードの位置（0はルート、未割り当ては[`NO_HEAD`]）
    ///
    /// [`NO_HEAD`]: crate::NO_HEAD
    pub head: i32,
}

impl DependencyNode {
    /// 新しいノードを作成します。
    ///
    /// # 引数
    ///
    /// * `word` - 表層形
    /// * `tag` - 品詞タグ
    /// * `head` - 係り先ノードの位置
    pub fn new<W, T>(word: W, tag: T, head: i32) -> Self
    where
        W: Into<String>,
        T: Into<String>,
    {
        Self {
            word: word.into(),
            tag: tag.into(),
            head,
        }
    }
}

/// 係り受け木の表現
///
/// ルートを含むノードの順序付き列です。
pub type DependencyTree = Vec<DependencyNode>;
