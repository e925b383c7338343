//! Lexical feature embedding
//!
//! Layout of the 100-dimensional vector:
//!
//! | dims    | feature                                   |
//! |---------|-------------------------------------------|
//! | 0..=25  | count of each ASCII letter `a`..=`z`      |
//! | 26      | whitespace-separated token count          |
//! | 27      | average token length                      |
//! | 28..=29 | reserved, always zero                     |
//! | 30..    | occurrences of each entry of [`KEYWORDS`] |
//!
//! Text without any letter or keyword embeds to the zero vector; otherwise
//! the raw counts are L2-normalized. Changing [`KEYWORDS`] or this layout
//! changes every search result; bump [`FEATURE_TABLE_VERSION`] when doing so.

/// Dimension count of every embedding vector
pub const EMBEDDING_DIM: usize = 100;

/// Version of the keyword table and dimension layout
pub const FEATURE_TABLE_VERSION: u32 = 1;

const LETTER_OFFSET: usize = 0;
const WORD_COUNT_DIM: usize = 26;
const AVG_WORD_LEN_DIM: usize = 27;
const KEYWORD_OFFSET: usize = 30;

/// Domain keywords counted from dimension 30 onwards
pub const KEYWORDS: &[&str] = &[
    "strategy", "family", "cooperative", "competitive", "card", "board", "dice",
    "puzzle", "adventure", "fantasy", "sci-fi", "war", "economic", "abstract",
    "party", "educational", "thematic", "euro", "ameritrash", "worker", "placement",
    "deck", "building", "area", "control", "engine", "tile", "resource", "management",
];

const _: () = assert!(KEYWORD_OFFSET + KEYWORDS.len() <= EMBEDDING_DIM);

/// Fixed-length, L2-normalized feature vector
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding([f64; EMBEDDING_DIM]);

impl Embedding {
    pub fn zero() -> Self {
        Self([0.0; EMBEDDING_DIM])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn norm(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0.0)
    }

    /// Cosine similarity, 0 when either side has zero norm
    pub fn cosine_similarity(&self, other: &Embedding) -> f64 {
        cosine_similarity(&self.0, &other.0)
    }
}

/// Embed text into the lexical feature space
pub fn embed(text: &str) -> Embedding {
    let normalized = text.to_lowercase();
    let mut features = [0.0f64; EMBEDDING_DIM];

    for byte in normalized.bytes() {
        if byte.is_ascii_lowercase() {
            features[LETTER_OFFSET + usize::from(byte - b'a')] += 1.0;
        }
    }

    for (i, keyword) in KEYWORDS.iter().enumerate() {
        features[KEYWORD_OFFSET + i] = normalized.matches(keyword).count() as f64;
    }

    // No letters and no keywords: nothing lexical to compare
    if features.iter().all(|&x| x == 0.0) {
        return Embedding::zero();
    }

    let (word_count, total_len) = normalized
        .split_whitespace()
        .fold((0usize, 0usize), |(count, len), word| {
            (count + 1, len + word.chars().count())
        });
    features[WORD_COUNT_DIM] = word_count as f64;
    features[AVG_WORD_LEN_DIM] = if word_count > 0 {
        total_len as f64 / word_count as f64
    } else {
        0.0
    };

    let norm = features.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in &mut features {
            *value /= norm;
        }
    }

    Embedding(features)
}

/// Cosine similarity between two equal-length vectors
///
/// Returns exactly 0 when either vector has zero norm or the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
