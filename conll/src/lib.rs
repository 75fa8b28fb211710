//! # conll
//!
//! CoNLL形式の係り受けコーパスを読み書きするためのライブラリです。
//!
//! ## 概要
//!
//! CoNLL形式は、1行に1トークンをタブ区切りで並べ、空行を文の区切りと
//! するテキスト形式です。このライブラリは、解析前のアノテーションを持つ
//! 入力形式（6カラム）と、係り先・ラベル情報を加えた出力形式（10カラム）の
//! 両方について、行単位のパース、文単位の集約、元のカラム順を保った
//! 可逆なシリアライズを提供します。
//!
//! 各文コンテナの先頭（インデックス0）には常に人工ルートトークンが
//! 置かれ、実際のトークンはインデックス1..Nを占めます。コンテナは
//! 再利用可能なバッファであり、ストリーム読み込みで確保を繰り返しません。
//!
//! トークン化や言語的な解析はこのライブラリの範囲外です。係り受け木は
//! （表層形、品詞タグ、係り先）の列という最小限の表現で受け渡しします。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use conll::{InputSentence, Reader, Writer};
//!
//! let corpus = "1\tThe\tthe\tDT\tDT\t_\n2\tdog\tdog\tNN\tNN\t_\n\n";
//!
//! let mut rdr = Reader::new(corpus.as_bytes());
//! let mut sent = InputSentence::new();
//!
//! assert!(rdr.read_input_sentence(&mut sent)?);
//! assert_eq!(sent.len(), 3); // ルートを含む
//! assert_eq!(sent[1].word(), "The");
//! assert_eq!(sent[2].tag(), "NN");
//!
//! let mut wtr = Writer::new(Vec::new());
//! wtr.write_input_sentence(&sent)?;
//! assert_eq!(wtr.into_inner(), corpus.as_bytes());
//!
//! assert!(!rdr.read_input_sentence(&mut sent)?);
//! # Ok(())
//! # }
//! ```

pub mod dependency;
pub mod errors;
pub mod reader;
pub mod sentence;
pub mod token;
pub mod writer;

pub use dependency::{DependencyNode, DependencyTree};
pub use errors::{ConllError, Result};
pub use reader::Reader;
pub use sentence::{InputSentence, OutputSentence};
pub use token::{InputToken, OutputToken, NO_HEAD};
pub use writer::Writer;
