//! ストリームへの文の書き出し
//!
//! このモジュールは、文をタブ区切りのテキスト行としてストリームに
//! 書き出すライターを提供します。文ごとに、ルート以外の各トークンを
//! 1行ずつ出力した後、文区切りの空行をちょうど1行出力します。

use std::io::Write;

use crate::errors::Result;
use crate::sentence::{InputSentence, OutputSentence};

/// CoNLL形式の文ライター
pub struct Writer<W> {
    wtr: W,
}

impl<W> Writer<W>
where
    W: Write,
{
    /// 新しいライターを作成します。
    ///
    /// # 引数
    ///
    /// * `wtr` - 書き込み先のストリーム
    pub fn new(wtr: W) -> Self {
        Self { wtr }
    }

    /// 入力形式の文を書き出します。
    ///
    /// インデックス1..Nのトークンをエンコードして1行ずつ出力し、
    /// 最後に空行を1行出力します。ルートは出力されません。
    ///
    /// # 引数
    ///
    /// * `sent` - 書き出す文
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合、I/Oエラーが返されます。
    pub fn write_input_sentence(&mut self, sent: &InputSentence) -> Result<()> {
        for token in sent.iter().skip(1) {
            writeln!(self.wtr, "{}", token)?;
        }
        writeln!(self.wtr)?;
        Ok(())
    }

    /// 出力形式の文を書き出します。
    ///
    /// [`write_input_sentence`]と同じ流れで、10カラムの行を出力します。
    ///
    /// # 引数
    ///
    /// * `sent` - 書き出す文
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合、I/Oエラーが返されます。
    ///
    /// [`write_input_sentence`]: Self::write_input_sentence
    pub fn write_output_sentence(&mut self, sent: &OutputSentence) -> Result<()> {
        for token in sent.iter().skip(1) {
            writeln!(self.wtr, "{}", token)?;
        }
        writeln!(self.wtr)?;
        Ok(())
    }

    /// 内部のストリームを取り出します。
    pub fn into_inner(self) -> W {
        self.wtr
    }
}
