//! エラー型の定義
//!
//! このモジュールは、CoNLLコーパスの読み書きで発生するすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// conll専用のResult型
///
/// エラー型としてデフォルトで[`ConllError`]を使用します。
pub type Result<T, E = ConllError> = std::result::Result<T, E>;

/// CoNLL入出力のエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// パースエラーは発生時点で当該文の読み込みを中断します。読み込みを
/// 打ち切るか、次の空行まで読み飛ばして再試行するかは呼び出し側が決定します。
#[derive(Debug, thiserror::Error)]
pub enum ConllError {
    /// 必須カラム欠損エラー
    ///
    /// [`MissingFieldError`]のエラーバリアント。
    #[error(transparent)]
    MissingField(MissingFieldError),

    /// 整数カラムのパースエラー
    ///
    /// [`InvalidIntegerError`]のエラーバリアント。
    #[error(transparent)]
    InvalidInteger(InvalidIntegerError),

    /// コンテナ長不一致エラー
    ///
    /// [`IndexMismatchError`]のエラーバリアント。
    #[error(transparent)]
    IndexMismatch(IndexMismatchError),

    /// 標準I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConllError {
    /// 必須カラム欠損エラーを生成します
    ///
    /// # 引数
    ///
    /// * `column` - カラム名
    /// * `line` - 問題のある行の内容
    pub(crate) fn missing_field<S>(column: &'static str, line: S) -> Self
    where
        S: Into<String>,
    {
        Self::MissingField(MissingFieldError {
            column,
            line: line.into(),
        })
    }

    /// 整数カラムのパースエラーを生成します
    ///
    /// # 引数
    ///
    /// * `column` - カラム名
    /// * `text` - パースに失敗した文字列
    /// * `line` - 問題のある行の内容
    pub(crate) fn invalid_integer<S, T>(column: &'static str, text: S, line: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self::InvalidInteger(InvalidIntegerError {
            column,
            text: text.into(),
            line: line.into(),
        })
    }

    /// コンテナ長不一致エラーを生成します
    ///
    /// # 引数
    ///
    /// * `expected` - 期待される要素数
    /// * `actual` - 実際の要素数
    pub(crate) fn index_mismatch(expected: usize, actual: usize) -> Self {
        Self::IndexMismatch(IndexMismatchError { expected, actual })
    }
}

/// 必須カラムが欠損または空の場合に使用されるエラー
#[derive(Debug)]
pub struct MissingFieldError {
    /// カラム名
    pub(crate) column: &'static str,

    /// 問題のある行の内容
    pub(crate) line: String,
}

impl fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MissingFieldError: {}: not found in line {:?}",
            self.column, self.line
        )
    }
}

impl Error for MissingFieldError {}

/// 整数カラムが整数としてパースできない場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidIntegerError {
    /// カラム名
    pub(crate) column: &'static str,

    /// パースに失敗した文字列
    pub(crate) text: String,

    /// 問題のある行の内容
    pub(crate) line: String,
}

impl fmt::Display for InvalidIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InvalidIntegerError: {}: {:?} is not an integer in line {:?}",
            self.column, self.text, self.line
        )
    }
}

impl Error for InvalidIntegerError {}

/// 長さの異なるコンテナ間で要素対応を取ろうとした場合に使用されるエラー
#[derive(Debug)]
pub struct IndexMismatchError {
    /// 期待される要素数
    pub(crate) expected: usize,

    /// 実際の要素数
    pub(crate) actual: usize,
}

impl fmt::Display for IndexMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "IndexMismatchError: containers must have the same length: {} vs {}",
            self.expected, self.actual
        )
    }
}

impl Error for IndexMismatchError {}
