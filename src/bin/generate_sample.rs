use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

const REVIEWS: usize = 40;
const EPOCHS: u32 = 5;
const ITERATIONS: u32 = 20;

const ASPECTS: [&str; 4] = ["atraksi", "fasilitas", "harga", "akses"];
const SENTIMENTS: [&str; 3] = ["positif", "negatif", "netral"];

const PHRASES: [&str; 10] = [
    "Pemandangan telaga sangat indah",
    "Tempat parkir sempit dan MAHAL",
    "Naik perahu keliling telaga seru banget 😍",
    "Toiletnya kotor, tolong diperbaiki",
    "Harga tiket masuk terjangkau",
    "Jalan menuju lokasi berkelok tapi mulus",
    "Banyak pedagang sate kelinci enak",
    "Udara sejuk, cocok untuk keluarga",
    "Terlalu ramai saat akhir pekan",
    "Pelayanan petugas ramah 👍",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

// ---------------------------------------------------------------------------
// Row layouts, one per file
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CrawlRow<'a> {
    #[serde(rename = "userName")]
    user_name: String,
    score: u8,
    content: &'a str,
}

#[derive(Serialize)]
struct LossRow {
    epoch: u32,
    iteration: u32,
    train_loss: f64,
    val_loss: f64,
}

#[derive(Serialize)]
struct EvaluationRow {
    epoch: u32,
    precision: f64,
    recall: f64,
    f1: f64,
    hamming_loss: f64,
}

fn sentiment(rng: &mut SimpleRng) -> &'static str {
    if rng.next_u64() % 4 == 0 {
        "-"
    } else {
        rng.pick(&SENTIMENTS)
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

// ---------------------------------------------------------------------------
// Preprocessing stages (just enough to make each column look different)
// ---------------------------------------------------------------------------

fn preprocessing_stages(text: &str) -> Vec<String> {
    let cleaning: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let no_emoji: String = cleaning
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string();
    let replaced = no_emoji.replace("telaga", "Telaga Sarangan");
    let folded = replaced.to_lowercase();
    let tokens: Vec<&str> = folded.split_whitespace().collect();
    let tokenized = format!("{tokens:?}");
    let formal: Vec<&str> = tokens
        .iter()
        .map(|t| match *t {
            "banget" => "sekali",
            "tapi" => "tetapi",
            other => other,
        })
        .collect();
    let stop: Vec<&str> = formal
        .iter()
        .copied()
        .filter(|t| !["dan", "untuk", "saat", "sangat", "sekali"].contains(t))
        .collect();
    let stemmed: Vec<String> = stop
        .iter()
        .map(|t| t.strip_suffix("nya").unwrap_or(t).to_string())
        .collect();

    vec![
        cleaning,
        no_emoji,
        replaced,
        folded.clone(),
        tokenized,
        format!("{formal:?}"),
        format!("{stop:?}"),
        stemmed.join(" "),
    ]
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

fn write_rows<T: Serialize>(path: &Path, rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_records(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data".into()));
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut rng = SimpleRng::new(42);

    let reviews: Vec<&str> = (0..REVIEWS).map(|_| rng.pick(&PHRASES)).collect();

    // Raw crawl
    let crawl: Vec<CrawlRow> = reviews
        .iter()
        .enumerate()
        .map(|(i, text)| CrawlRow {
            user_name: format!("pengunjung_{i:03}"),
            score: 1 + (rng.next_u64() % 5) as u8,
            content: *text,
        })
        .collect();
    write_rows(&out_dir.join("crawl1.csv"), crawl)?;

    // Labeled: one sentiment per aspect
    let labeled_header: Vec<String> = std::iter::once("ulasan".to_string())
        .chain(ASPECTS.iter().map(|a| a.to_string()))
        .collect();
    let labeled: Vec<Vec<String>> = reviews
        .iter()
        .map(|text| {
            std::iter::once(text.to_string())
                .chain(ASPECTS.iter().map(|_| sentiment(&mut rng).to_string()))
                .collect()
        })
        .collect();
    write_records(&out_dir.join("data_berlabel.csv"), &labeled_header, &labeled)?;

    // Preprocessing stages
    let stage_header: Vec<String> = [
        "Cleaning",
        "Hapus Emoji",
        "Replace TOM",
        "Case Folding",
        "Tokenizing",
        "Formalisasi",
        "Stopword Removal",
        "Stemming",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let stages: Vec<Vec<String>> = reviews.iter().map(|t| preprocessing_stages(t)).collect();
    write_records(&out_dir.join("data_bersih.csv"), &stage_header, &stages)?;

    // Binary relevance: aspect_sentiment → 0/1
    let br_header: Vec<String> = std::iter::once("Stemming".to_string())
        .chain(ASPECTS.iter().flat_map(|a| {
            SENTIMENTS.into_iter().map(move |s| format!("{a}_{s}"))
        }))
        .collect();
    let br: Vec<Vec<String>> = labeled
        .iter()
        .zip(&stages)
        .map(|(lab, stage)| {
            std::iter::once(stage[7].clone())
                .chain(lab[1..].iter().flat_map(|s| {
                    SENTIMENTS
                        .into_iter()
                        .map(move |want| u8::from(s.as_str() == want).to_string())
                }))
                .collect()
        })
        .collect();
    write_records(&out_dir.join("data_label_final.csv"), &br_header, &br)?;

    // Loss curves: decaying with noise
    let mut loss_rows = Vec::new();
    for epoch in 1..=EPOCHS {
        for iteration in 0..ITERATIONS {
            let t = ((epoch - 1) * ITERATIONS + iteration) as f64;
            let base = 0.7 * (-t / 40.0).exp() + 0.08;
            loss_rows.push(LossRow {
                epoch,
                iteration,
                train_loss: round4(base + 0.02 * rng.next_f64()),
                val_loss: round4(base * 1.1 + 0.03 + 0.03 * rng.next_f64()),
            });
        }
    }
    write_rows(&out_dir.join("loss_data.csv"), loss_rows)?;

    // Evaluation: improving metrics per epoch
    let eval_rows = (1..=EPOCHS).map(|epoch| {
        let progress = epoch as f64 / EPOCHS as f64;
        let precision = round4(0.6 + 0.3 * progress - 0.02 * rng.next_f64());
        let recall = round4(0.55 + 0.3 * progress - 0.02 * rng.next_f64());
        EvaluationRow {
            epoch,
            precision,
            recall,
            f1: round4(2.0 * precision * recall / (precision + recall)),
            hamming_loss: round4(0.3 - 0.2 * progress + 0.01 * rng.next_f64()),
        }
    });
    write_rows(&out_dir.join("evaluation.csv"), eval_rows.collect::<Vec<_>>())?;

    println!("Wrote sample CSV files to {}", out_dir.display());
    Ok(())
}
