//! 文コンテナ
//!
//! このモジュールは、トークンレコードの順序付き列としての文を提供します。
//! コンテナの先頭要素（インデックス0）は常に人工ルートトークンであり、
//! 実際のトークンはインデックス1..Nを占めます。新規作成直後および
//! [`clear`]直後のコンテナは、ちょうどルート1個だけを含みます。
//!
//! コンテナは再利用可能なバッファとして設計されており、[`Reader`]は
//! 各パース呼び出しの先頭でコンテナをリセットします。ストリームを
//! 順に読む呼び出し側は、1個のコンテナを確保するだけで済みます。
//!
//! [`clear`]: InputSentence::clear
//! [`Reader`]: crate::Reader

use std::ops::Deref;

use crate::dependency::{DependencyNode, DependencyTree};
use crate::errors::{ConllError, Result};
use crate::token::{InputToken, OutputToken};

/// 入力形式の文
///
/// [`InputToken`]の順序付き列です。先頭要素は常にルートです。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSentence {
    tokens: Vec<InputToken>,
}

impl InputSentence {
    /// ルートのみを含む新しい文を作成します。
    pub fn new() -> Self {
        Self {
            tokens: vec![InputToken::root()],
        }
    }

    /// 文の内容を破棄し、ルートのみの状態に戻します。
    ///
    /// 確保済みの容量は保持されるため、ストリーム読み込みで
    /// コンテナを再利用しても再確保は発生しません。
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.tokens.push(InputToken::root());
    }

    /// トークンを末尾に追加します。
    ///
    /// # 引数
    ///
    /// * `token` - 追加するトークン
    pub fn push(&mut self, token: InputToken) {
        self.tokens.push(token);
    }

    /// ルートを含む要素数を返します。
    ///
    /// 常に1以上です。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// ルート以外のトークンを1個も含まない場合に`true`を返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// 指定位置のトークンを返します。
    ///
    /// # 引数
    ///
    /// * `i` - 位置（0はルート）
    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<&InputToken> {
        self.tokens.get(i)
    }

    /// ルートを含む全トークンのイテレータを返します。
    pub fn iter(&self) -> std::slice::Iter<'_, InputToken> {
        self.tokens.iter()
    }
}

impl Default for InputSentence {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for InputSentence {
    type Target = [InputToken];

    // Read-only slice access. DerefMut is deliberately not provided, so the
    // root placeholder at index 0 cannot be removed or overwritten.
    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

/// 出力形式の文
///
/// [`OutputToken`]の順序付き列です。先頭要素は常にルートです。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSentence {
    tokens: Vec<OutputToken>,
}

impl OutputSentence {
    /// ルートのみを含む新しい文を作成します。
    pub fn new() -> Self {
        Self {
            tokens: vec![OutputToken::root()],
        }
    }

    /// 文の内容を破棄し、ルートのみの状態に戻します。
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.tokens.push(OutputToken::root());
    }

    /// トークンを末尾に追加します。
    ///
    /// # 引数
    ///
    /// * `token` - 追加するトークン
    pub fn push(&mut self, token: OutputToken) {
        self.tokens.push(token);
    }

    /// ルートを含む要素数を返します。
    ///
    /// 常に1以上です。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// ルート以外のトークンを1個も含まない場合に`true`を返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// 指定位置のトークンを返します。
    ///
    /// # 引数
    ///
    /// * `i` - 位置（0はルート）
    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<&OutputToken> {
        self.tokens.get(i)
    }

    /// ルートを含む全トークンのイテレータを返します。
    pub fn iter(&self) -> std::slice::Iter<'_, OutputToken> {
        self.tokens.iter()
    }

    /// 入力形式の文から出力形式の文を構築します。
    ///
    /// 共通プレフィックスの6カラムを要素ごとにコピーします。拡張カラムは
    /// 初期値（係り先は[`NO_HEAD`]、ラベルは空）のままです。要素の対応は
    /// 構築時に1:1で保証されます。
    ///
    /// # 引数
    ///
    /// * `input` - コピー元の文
    ///
    /// [`NO_HEAD`]: crate::NO_HEAD
    pub fn from_input(input: &InputSentence) -> Self {
        let mut tokens = Vec::with_capacity(input.len());
        for token in input.iter() {
            tokens.push(OutputToken::from(token.clone()));
        }
        Self { tokens }
    }

    /// 係り受け木から`head`カラムを要素ごとにコピーします。
    ///
    /// 木と文は同じ長さで、同じインデックス対応（0はルート）を持つ
    /// 必要があります。
    ///
    /// # 引数
    ///
    /// * `tree` - コピー元の係り受け木
    ///
    /// # エラー
    ///
    /// 木と文の長さが異なる場合は[`ConllError::IndexMismatch`]が返され、
    /// コピーは一切行われません。
    pub fn copy_dependency_heads(&mut self, tree: &DependencyTree) -> Result<()> {
        if tree.len() != self.tokens.len() {
            return Err(ConllError::index_mismatch(self.tokens.len(), tree.len()));
        }
        for (token, node) in self.tokens.iter_mut().zip(tree.iter()) {
            token.head = node.head;
        }
        Ok(())
    }

    /// 文を汎用係り受け木に変換します。
    ///
    /// ルートを含むすべての要素について、（表層形、品詞タグ、係り先）の
    /// ノードを順序を保って生成します。この関数がCoNLL形式と木表現の
    /// 唯一の変換点です。
    ///
    /// # 戻り値
    ///
    /// 文と同じ長さの係り受け木
    pub fn to_dependency_tree(&self) -> DependencyTree {
        self.tokens
            .iter()
            .map(|t| DependencyNode::new(t.input.word.clone(), t.input.tag.clone(), t.head))
            .collect()
    }
}

impl Default for OutputSentence {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for OutputSentence {
    type Target = [OutputToken];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ROOT_TAG, NO_HEAD};

    #[test]
    fn test_root_invariant() {
        let mut sent = InputSentence::new();
        assert_eq!(sent.len(), 1);
        assert!(sent.is_empty());
        assert_eq!(sent[0], InputToken::root());
        assert_eq!(sent[0].ctag(), ROOT_TAG);

        sent.push(InputToken::new(1, "The", "the", "DT", "DT", "_"));
        assert_eq!(sent.len(), 2);
        assert!(!sent.is_empty());

        sent.clear();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], InputToken::root());
    }

    #[test]
    fn test_output_root_invariant() {
        let mut sent = OutputSentence::new();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], OutputToken::root());

        sent.push(OutputToken::from_line("1\ta\ta\tDT\tDT\t_\t0\tROOT\t_\t_").unwrap());
        sent.clear();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], OutputToken::root());
    }

    #[test]
    fn test_from_input() {
        let mut input = InputSentence::new();
        input.push(InputToken::new(1, "The", "the", "DT", "DT", "_"));
        input.push(InputToken::new(2, "dog", "dog", "NN", "NN", "_"));

        let output = OutputSentence::from_input(&input);
        assert_eq!(output.len(), input.len());
        for (o, i) in output.iter().zip(input.iter()) {
            assert_eq!(o.input(), i);
        }
        assert_eq!(output[1].head(), NO_HEAD);
        assert_eq!(output[1].phead(), NO_HEAD);
        assert_eq!(output[1].label(), "");
    }

    #[test]
    fn test_copy_dependency_heads() {
        let mut input = InputSentence::new();
        input.push(InputToken::new(1, "The", "the", "DT", "DT", "_"));
        input.push(InputToken::new(2, "dog", "dog", "NN", "NN", "_"));
        let mut output = OutputSentence::from_input(&input);

        let tree = vec![
            DependencyNode::new("", ROOT_TAG, NO_HEAD),
            DependencyNode::new("The", "DT", 2),
            DependencyNode::new("dog", "NN", 0),
        ];
        output.copy_dependency_heads(&tree).unwrap();
        assert_eq!(output[1].head(), 2);
        assert_eq!(output[2].head(), 0);
    }

    #[test]
    fn test_copy_dependency_heads_length_mismatch() {
        let mut output = OutputSentence::new();
        let tree = vec![
            DependencyNode::new("", ROOT_TAG, NO_HEAD),
            DependencyNode::new("dog", "NN", 0),
        ];
        let e = output.copy_dependency_heads(&tree).unwrap_err();
        assert!(matches!(e, ConllError::IndexMismatch(_)));
    }

    #[test]
    fn test_tree_conversion_fidelity() {
        let mut input = InputSentence::new();
        input.push(InputToken::new(1, "The", "the", "DT", "DT", "_"));
        input.push(InputToken::new(2, "dog", "dog", "NN", "NN", "_"));
        input.push(InputToken::new(3, "barks", "bark", "VB", "VBZ", "_"));

        let tree = vec![
            DependencyNode::new("", ROOT_TAG, NO_HEAD),
            DependencyNode::new("The", "DT", 2),
            DependencyNode::new("dog", "NN", 3),
            DependencyNode::new("barks", "VBZ", 0),
        ];

        let mut output = OutputSentence::from_input(&input);
        output.copy_dependency_heads(&tree).unwrap();
        assert_eq!(output.to_dependency_tree(), tree);
    }
}
