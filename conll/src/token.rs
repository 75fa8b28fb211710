//! トークンレコードとフィールドコーデック
//!
//! このモジュールは、CoNLL形式の1行分のトークンレコードを表現する型と、
//! タブ区切りテキスト行との相互変換を提供します。入力形式（6カラム）と
//! 出力形式（10カラム）の2種類のレコードがあり、出力レコードは入力レコードを
//! 共通プレフィックスとして埋め込みます。

use std::fmt;
use std::str::Split;

use crate::errors::{ConllError, Result};

/// 係り先が未割り当てであることを表す番兵値
///
/// `head`および`phead`カラムのデコード・エンコード・比較のすべてで、
/// この定数を共通に使用します。テキスト上で`_`として表現されるのは
/// `phead`カラムのみです。
pub const NO_HEAD: i32 = -1;

/// 文頭の人工ルートトークンが持つ品詞タグ
pub(crate) const ROOT_TAG: &str = "-BEGIN-";

/// 入力形式（6カラム）のトークンレコード
///
/// 係り受け解析前のアノテーションを保持します。カラムは順に
/// `ID`、`WORD`、`LEMMA`、`CPOSTAG`、`POSTAG`、`FEATS`です。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputToken {
    /// 文内の1始まり位置（0はルート専用）
    pub(crate) id: u32,

    /// 表層形
    pub(crate) word: String,

    /// 基本形
    pub(crate) lemma: String,

    /// 粗粒度品詞タグ
    pub(crate) ctag: String,

    /// 細粒度品詞タグ
    pub(crate) tag: String,

    /// 素性文字列（内容は解釈されない不透明な文字列）
    pub(crate) feats: String,
}

impl InputToken {
    /// 新しいトークンを作成します。
    ///
    /// # 引数
    ///
    /// * `id` - 文内の1始まり位置
    /// * `word` - 表層形
    /// * `lemma` - 基本形
    /// * `ctag` - 粗粒度品詞タグ
    /// * `tag` - 細粒度品詞タグ
    /// * `feats` - 素性文字列
    pub fn new<W, L, C, T, F>(id: u32, word: W, lemma: L, ctag: C, tag: T, feats: F) -> Self
    where
        W: Into<String>,
        L: Into<String>,
        C: Into<String>,
        T: Into<String>,
        F: Into<String>,
    {
        Self {
            id,
            word: word.into(),
            lemma: lemma.into(),
            ctag: ctag.into(),
            tag: tag.into(),
            feats: feats.into(),
        }
    }

    /// 人工ルートトークンを作成します。
    ///
    /// ルートはid=0、表層形・基本形・素性は空、品詞タグは`-BEGIN-`です。
    /// 実際のコーパス行からパースされることはありません。
    pub fn root() -> Self {
        Self::new(0, "", "", ROOT_TAG, ROOT_TAG, "")
    }

    /// タブ区切りの1行をトークンレコードにデコードします。
    ///
    /// 行は6個以上のタブ区切りカラムを持つ必要があり、先頭6カラムが
    /// 順に使用されます。余分なカラムは無視されます。
    ///
    /// # 引数
    ///
    /// * `line` - デコード対象の行（行末の改行は含まない）
    ///
    /// # エラー
    ///
    /// 必須カラムが欠損または空の場合は[`ConllError::MissingField`]、
    /// `id`カラムが整数でない場合は[`ConllError::InvalidInteger`]が
    /// 返されます。
    pub fn from_line(line: &str) -> Result<Self> {
        let mut fields = line.split('\t');
        Self::decode_fields(&mut fields, line)
    }

    /// タブ区切りカラム列から共通プレフィックスをデコードします。
    ///
    /// 出力レコードのデコードでも、まずこの関数でプレフィックスを読んだ後、
    /// 続く拡張カラムを読み進めます。
    pub(crate) fn decode_fields(fields: &mut Split<'_, char>, line: &str) -> Result<Self> {
        let id = next_field(fields, "id", line)?;
        let id = id
            .parse()
            .map_err(|_| ConllError::invalid_integer("id", id, line))?;
        let word = next_field(fields, "word", line)?.to_string();
        let lemma = next_field(fields, "lemma", line)?.to_string();
        let ctag = next_field(fields, "ctag", line)?.to_string();
        let tag = next_field(fields, "tag", line)?.to_string();
        let feats = next_field(fields, "feats", line)?.to_string();
        Ok(Self {
            id,
            word,
            lemma,
            ctag,
            tag,
            feats,
        })
    }

    /// 文内の位置を返します。
    #[inline(always)]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// 表層形を返します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 基本形を返します。
    #[inline(always)]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// 粗粒度品詞タグを返します。
    #[inline(always)]
    pub fn ctag(&self) -> &str {
        &self.ctag
    }

    /// 細粒度品詞タグを返します。
    #[inline(always)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 素性文字列を返します。
    #[inline(always)]
    pub fn feats(&self) -> &str {
        &self.feats
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.id, self.word, self.lemma, self.ctag, self.tag, self.feats
        )
    }
}

/// 出力形式（10カラム）のトークンレコード
///
/// 入力レコードの6カラムに、係り先情報の4カラム
/// （`HEAD`、`DEPREL`、`PHEAD`、`PDEPREL`）を加えたものです。
/// `phead`/`plabel`はゴールドとシステム出力の比較や代替候補の保持に
/// 使用されます。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputToken {
    /// 共通プレフィックス
    pub(crate) input: InputToken,

    /// 係り先トークンの位置（0はルート）
    pub(crate) head: i32,

    /// 係り受けラベル
    pub(crate) label: String,

    /// 代替・予測の係り先。[`NO_HEAD`]はテキスト上で`_`となる
    pub(crate) phead: i32,

    /// 代替・予測の係り受けラベル
    pub(crate) plabel: String,
}

impl OutputToken {
    /// 新しいトークンを作成します。
    ///
    /// # 引数
    ///
    /// * `input` - 共通プレフィックス
    /// * `head` - 係り先トークンの位置
    /// * `label` - 係り受けラベル
    /// * `phead` - 代替・予測の係り先
    /// * `plabel` - 代替・予測の係り受けラベル
    pub fn new<L, P>(input: InputToken, head: i32, label: L, phead: i32, plabel: P) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        Self {
            input,
            head,
            label: label.into(),
            phead,
            plabel: plabel.into(),
        }
    }

    /// 人工ルートトークンを作成します。
    ///
    /// 係り先情報は[`NO_HEAD`]、ラベルは空で初期化されます。
    pub fn root() -> Self {
        Self::new(InputToken::root(), NO_HEAD, "", NO_HEAD, "")
    }

    /// タブ区切りの1行をトークンレコードにデコードします。
    ///
    /// まず入力レコードの6カラムをデコードし、続いて拡張4カラムを
    /// 固定順でデコードします。`phead`カラムに限り、リテラル`_`が
    /// [`NO_HEAD`]としてデコードされます。余分なカラムは無視されます。
    ///
    /// # 引数
    ///
    /// * `line` - デコード対象の行（行末の改行は含まない）
    ///
    /// # エラー
    ///
    /// 必須カラムが欠損または空の場合は[`ConllError::MissingField`]、
    /// 整数カラム（`id`、`head`、`phead`）が整数でない場合は
    /// [`ConllError::InvalidInteger`]が返されます。`head`カラムの`_`は
    /// 認識されず、パースエラーになります。
    pub fn from_line(line: &str) -> Result<Self> {
        let mut fields = line.split('\t');
        let input = InputToken::decode_fields(&mut fields, line)?;
        let head = next_field(&mut fields, "head", line)?;
        let head = head
            .parse()
            .map_err(|_| ConllError::invalid_integer("head", head, line))?;
        let label = next_field(&mut fields, "label", line)?.to_string();
        let phead = next_field(&mut fields, "phead", line)?;
        let phead = if phead == "_" {
            NO_HEAD
        } else {
            phead
                .parse()
                .map_err(|_| ConllError::invalid_integer("phead", phead, line))?
        };
        let plabel = next_field(&mut fields, "plabel", line)?.to_string();
        Ok(Self {
            input,
            head,
            label,
            phead,
            plabel,
        })
    }

    /// 共通プレフィックスへの参照を返します。
    #[inline(always)]
    pub fn input(&self) -> &InputToken {
        &self.input
    }

    /// 係り先トークンの位置を返します。
    #[inline(always)]
    pub fn head(&self) -> i32 {
        self.head
    }

    /// 係り受けラベルを返します。
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 代替・予測の係り先を返します。
    #[inline(always)]
    pub fn phead(&self) -> i32 {
        self.phead
    }

    /// 代替・予測の係り受けラベルを返します。
    #[inline(always)]
    pub fn plabel(&self) -> &str {
        &self.plabel
    }
}

impl From<InputToken> for OutputToken {
    /// 共通プレフィックスのみを持つトークンを作成します。
    ///
    /// 拡張カラムは[`OutputToken::root`]と同じ初期値になります。
    fn from(input: InputToken) -> Self {
        Self::new(input, NO_HEAD, "", NO_HEAD, "")
    }
}

impl fmt::Display for OutputToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t", self.input, self.head, self.label)?;
        // The underscore placeholder is valid only in the phead column;
        // head is always printed numerically, even when it equals NO_HEAD.
        if self.phead == NO_HEAD {
            write!(f, "_")?;
        } else {
            write!(f, "{}", self.phead)?;
        }
        write!(f, "\t{}", self.plabel)
    }
}

/// 次の必須カラムを取り出します。
///
/// カラムが存在しないか空の場合は[`ConllError::MissingField`]を返します。
fn next_field<'a>(fields: &mut Split<'a, char>, column: &'static str, line: &str) -> Result<&'a str> {
    match fields.next() {
        Some(field) if !field.is_empty() => Ok(field),
        _ => Err(ConllError::missing_field(column, line)),
    }
}
