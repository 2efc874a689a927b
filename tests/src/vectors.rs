//! Typed view of the TOML vector files

use std::fs;
use std::path::{Path, PathBuf};

use pbcrypt_api::GroupKind;
use serde::Deserialize;

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors")
}

/// `k · base = expected` on one of the source groups
#[derive(Debug, Deserialize)]
pub struct MultipleVector {
    pub preset: String,
    pub group: String,
    pub base: Vec<String>,
    pub k: String,
    pub expected: Vec<String>,
}

impl MultipleVector {
    pub fn group(&self) -> GroupKind {
        parse_group(&self.group)
    }
}

/// `e(p, q) = expected`
#[derive(Debug, Deserialize)]
pub struct PairingVector {
    pub preset: String,
    pub p: Vec<String>,
    pub q: Vec<String>,
    pub expected: Vec<String>,
    /// Canonical GT encoding, hex
    #[serde(default)]
    pub encoded: Option<String>,
}

/// Published generators of a preset
#[derive(Debug, Deserialize)]
pub struct GeneratorVector {
    pub preset: String,
    pub g1: Vec<String>,
    pub g2: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    #[serde(default)]
    pub multiple: Vec<MultipleVector>,
    #[serde(default)]
    pub pairing: Vec<PairingVector>,
    #[serde(default)]
    pub generator: Vec<GeneratorVector>,
}

/// Read and parse `vectors/<name>.toml`
pub fn load(name: &str) -> VectorFile {
    let path = vector_dir().join(format!("{}.toml", name));
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    toml::from_str(&text).unwrap_or_else(|e| panic!("cannot parse {}: {}", path.display(), e))
}

fn parse_group(name: &str) -> GroupKind {
    match name {
        "G1" => GroupKind::G1,
        "G2" => GroupKind::G2,
        "GT" => GroupKind::GT,
        "Zr" => GroupKind::Zr,
        other => panic!("unknown group {}", other),
    }
}
