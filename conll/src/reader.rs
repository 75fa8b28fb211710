//! ストリームからの文の読み込み
//!
//! このモジュールは、テキストストリームから空行区切りの文を1つずつ
//! 読み込むリーダーを提供します。1行が1トークンレコードに対応し、
//! 最初の空行（またはストリーム終端）で文が終わります。

use std::io::BufRead;

use crate::errors::Result;
use crate::sentence::{InputSentence, OutputSentence};
use crate::token::{InputToken, OutputToken};

/// CoNLL形式の文リーダー
///
/// 行バッファは呼び出し間で再利用されます。呼び出し側のコンテナも
/// 各呼び出しの先頭でリセットの上で再利用されるため、ストリーム全体の
/// 読み込みでの確保はコンテナ1個分で済みます。
///
/// 複数のリーダーで1個のコンテナを共有することはできません。並列に
/// 読み込む場合は、ワーカーごとにリーダーとコンテナを用意してください。
pub struct Reader<R> {
    rdr: R,
    line: String,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// 新しいリーダーを作成します。
    ///
    /// # 引数
    ///
    /// * `rdr` - 読み込み元のストリーム
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
        }
    }

    /// 次の1行を読み込み、行末の改行を除いて返します。
    ///
    /// ストリーム終端では`None`を返します。CRLFも許容します。
    fn next_line(&mut self) -> Result<Option<&str>> {
        self.line.clear();
        if self.rdr.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(Some(&self.line))
    }

    /// 入力形式の文を1つ読み込みます。
    ///
    /// コンテナをルートのみの状態にリセットした後、行頭の空白を除いて
    /// 空でない行を1行1トークンとしてデコード・追加し、最初の空行または
    /// ストリーム終端で停止します。末尾に空行のない最終文も受理されます。
    ///
    /// # 引数
    ///
    /// * `sent` - 読み込み先のコンテナ
    ///
    /// # 戻り値
    ///
    /// トークンが1個以上追加された場合は`Ok(true)`。追加されずに停止した
    /// 場合は`Ok(false)`で、これが「文がもう無い」ことの通知になります。
    /// どちらの場合もコンテナは有効な状態（少なくともルートを含む）です。
    ///
    /// # エラー
    ///
    /// 行のデコードに失敗した場合、エラーは即座に呼び出し側へ伝播し、
    /// 当該呼び出しは中断されます。部分的なレコードの復旧は行いません。
    pub fn read_input_sentence(&mut self, sent: &mut InputSentence) -> Result<bool> {
        sent.clear();
        while let Some(line) = self.next_line()? {
            if line.trim_start().is_empty() {
                break;
            }
            sent.push(InputToken::from_line(line)?);
        }
        Ok(!sent.is_empty())
    }

    /// 出力形式の文を1つ読み込みます。
    ///
    /// [`read_input_sentence`]と同じ流れですが、文の終端判定は行頭の
    /// 空白を除かず、行そのものが空かどうかで行います。
    ///
    /// # 引数
    ///
    /// * `sent` - 読み込み先のコンテナ
    ///
    /// # 戻り値
    ///
    /// トークンが1個以上追加された場合は`Ok(true)`、追加されずに
    /// 停止した場合は`Ok(false)`
    ///
    /// [`read_input_sentence`]: Self::read_input_sentence
    pub fn read_output_sentence(&mut self, sent: &mut OutputSentence) -> Result<bool> {
        sent.clear();
        while let Some(line) = self.next_line()? {
            if line.is_empty() {
                break;
            }
            sent.push(OutputToken::from_line(line)?);
        }
        Ok(!sent.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConllError;

    #[test]
    fn test_read_input_corpus() {
        let corpus = "\
1\tThe\tthe\tDT\tDT\t_
2\tdog\tdog\tNN\tNN\t_

1\tMars\tmars\tNNP\tNNP\t_

";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();

        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1].word(), "The");
        assert_eq!(sent[2].word(), "dog");

        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].word(), "Mars");

        assert!(!rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 1);
    }

    #[test]
    fn test_read_input_without_trailing_blank() {
        let corpus = "1\tThe\tthe\tDT\tDT\t_";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();
        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 2);
        assert!(!rdr.read_input_sentence(&mut sent).unwrap());
    }

    #[test]
    fn test_read_blank_only_stream() {
        let mut rdr = Reader::new("\n".as_bytes());
        let mut sent = InputSentence::new();
        assert!(!rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 1);
    }

    #[test]
    fn test_read_empty_stream() {
        let mut rdr = Reader::new("".as_bytes());
        let mut sent = InputSentence::new();
        assert!(!rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 1);
    }

    #[test]
    fn test_input_terminator_allows_leading_whitespace() {
        // A whitespace-only line terminates a sentence in the input format.
        let corpus = "1\tThe\tthe\tDT\tDT\t_\n \t \n1\tMars\tmars\tNNP\tNNP\t_\n";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();
        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 2);
        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent[1].word(), "Mars");
    }

    #[test]
    fn test_read_crlf_lines() {
        let corpus = "1\tThe\tthe\tDT\tDT\t_\r\n\r\n";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();
        assert!(rdr.read_input_sentence(&mut sent).unwrap());
        assert_eq!(sent[1].feats(), "_");
    }

    #[test]
    fn test_read_output_corpus() {
        let corpus = "\
1\tThe\tthe\tDT\tDT\t_\t2\tNMOD\t_\t_
2\tdog\tdog\tNN\tNN\t_\t0\tROOT\t_\t_

";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = OutputSentence::new();
        assert!(rdr.read_output_sentence(&mut sent).unwrap());
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1].head(), 2);
        assert_eq!(sent[2].label(), "ROOT");
        assert!(!rdr.read_output_sentence(&mut sent).unwrap());
    }

    #[test]
    fn test_read_malformed_line_fails() {
        let corpus = "1\tThe\tthe\tDT\tDT\t_\n2\tdog\tdog\n\n";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();
        let e = rdr.read_input_sentence(&mut sent).unwrap_err();
        assert!(matches!(e, ConllError::MissingField(_)));
    }

    #[test]
    fn test_container_reuse_discards_previous_tokens() {
        let corpus = "\
1\tThe\tthe\tDT\tDT\t_
2\tdog\tdog\tNN\tNN\t_

1\tMars\tmars\tNNP\tNNP\t_

";
        let mut rdr = Reader::new(corpus.as_bytes());
        let mut sent = InputSentence::new();
        rdr.read_input_sentence(&mut sent).unwrap();
        rdr.read_input_sentence(&mut sent).unwrap();
        // The second parse must not retain tokens from the first one.
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].id(), 0);
        assert_eq!(sent[1].word(), "Mars");
    }
}
