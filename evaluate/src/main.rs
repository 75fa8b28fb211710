//! 係り受け解析の精度を評価するユーティリティ
//!
//! このバイナリは、ゴールドコーパスとシステム出力を10カラムのCoNLL
//! 出力形式で読み込み、係り先の一致率（UAS）およびラベル付き一致率（LAS）を
//! 計算します。2つのコーパスは文数・文長・表層形が一致している必要があります。

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use conll::{OutputSentence, Reader};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "evaluate", about = "Evaluates dependency attachment accuracy")]
struct Args {
    /// Gold-standard corpus (in the CoNLL output format).
    #[clap(short = 'g', long)]
    gold_in: PathBuf,

    /// System output (in the CoNLL output format).
    #[clap(short = 's', long)]
    system_in: PathBuf,

    /// Excludes punctuation tokens from scoring.
    #[clap(short = 'P', long)]
    ignore_punct: bool,
}

/// トークンが句読点かどうかを判定します
///
/// 細粒度品詞タグがASCII記号のみからなる場合に句読点とみなします。
///
/// # 引数
///
/// * `tag` - 細粒度品詞タグ
fn is_punct(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_punctuation())
}

/// メイン関数
///
/// 2つのコーパスを文単位で並行に読み込み、トークンごとに係り先と
/// ラベルを比較して、集計結果を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Evaluating {:?} against {:?}", args.system_in, args.gold_in);

    let mut gold_rdr = Reader::new(BufReader::new(File::open(&args.gold_in)?));
    let mut system_rdr = Reader::new(BufReader::new(File::open(&args.system_in)?));

    let mut gold = OutputSentence::new();
    let mut system = OutputSentence::new();

    let mut num_sents = 0usize;
    let mut num_tokens = 0usize;
    let mut num_head_matches = 0usize;
    let mut num_label_matches = 0usize;

    loop {
        let has_gold = gold_rdr.read_output_sentence(&mut gold)?;
        let has_system = system_rdr.read_output_sentence(&mut system)?;
        if !has_gold && !has_system {
            break;
        }
        num_sents += 1;
        if gold.len() != system.len() {
            return Err(format!(
                "sentence {}: gold has {} tokens, but system has {}",
                num_sents,
                gold.len() - 1,
                system.len() - 1
            )
            .into());
        }
        for (g, s) in gold.iter().skip(1).zip(system.iter().skip(1)) {
            if g.input().word() != s.input().word() {
                return Err(format!(
                    "sentence {}: token {} differs: {:?} vs {:?}",
                    num_sents,
                    g.input().id(),
                    g.input().word(),
                    s.input().word()
                )
                .into());
            }
            if args.ignore_punct && is_punct(g.input().tag()) {
                continue;
            }
            num_tokens += 1;
            if g.head() == s.head() {
                num_head_matches += 1;
                if g.label() == s.label() {
                    num_label_matches += 1;
                }
            }
        }
    }

    let denom = num_tokens.max(1) as f64;
    println!("sentences: {}", num_sents);
    println!("tokens: {}", num_tokens);
    println!("UAS: {:.4}", num_head_matches as f64 / denom);
    println!("LAS: {:.4}", num_label_matches as f64 / denom);

    Ok(())
}
