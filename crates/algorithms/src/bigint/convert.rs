//! Conversions between `BigInt`, bytes, machine words, and text

use core::fmt;
use core::str::FromStr;

use byteorder::{BigEndian, ByteOrder};

use super::{limbs, BigInt};
use crate::error::{Error, Result};

/// Largest power of ten that fits in a limb
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

impl BigInt {
    /// Interpret big-endian bytes as a non-negative integer
    pub fn from_bytes_be(bytes: &[u8]) -> BigInt {
        let pad = (8 - bytes.len() % 8) % 8;
        let mut buf = vec![0u8; pad];
        buf.extend_from_slice(bytes);
        let limbs = buf
            .chunks_exact(8)
            .rev()
            .map(BigEndian::read_u64)
            .collect();
        BigInt::from_limbs(false, limbs)
    }

    /// Minimal big-endian encoding of the magnitude (empty for zero)
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.limbs.len() * 8];
        for (i, limb) in self.limbs.iter().rev().enumerate() {
            BigEndian::write_u64(&mut out[i * 8..(i + 1) * 8], *limb);
        }
        let first = out.iter().position(|&b| b != 0).unwrap_or(out.len());
        out.drain(..first);
        out
    }

    /// Big-endian encoding of the magnitude left-padded to exactly `len` bytes
    pub fn to_bytes_be_padded(&self, len: usize) -> Result<Vec<u8>> {
        let raw = self.to_bytes_be();
        if raw.len() > len {
            return Err(Error::Length {
                context: "BigInt::to_bytes_be_padded",
                expected: len,
                actual: raw.len(),
            });
        }
        let mut out = vec![0u8; len - raw.len()];
        out.extend_from_slice(&raw);
        Ok(out)
    }

    /// Parse an optionally signed integer in radix 10 or 16
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(Error::encoding("BigInt::from_str_radix", "no digits"));
        }
        let magnitude = match radix {
            10 => parse_decimal(digits)?,
            16 => parse_hex(digits)?,
            _ => return Err(Error::param("radix", "only 10 and 16 are supported")),
        };
        Ok(BigInt::from_limbs(negative, magnitude.limbs))
    }

    fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut chunks = Vec::new();
        let mut rest = self.limbs.clone();
        while !rest.is_empty() {
            let (q, r) = limbs::div_small(&rest, DECIMAL_CHUNK);
            chunks.push(r);
            rest = q;
        }
        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            out.push_str(&top.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        out
    }
}

fn parse_decimal(digits: &str) -> Result<BigInt> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::encoding(
            "BigInt::from_str_radix",
            format!("invalid decimal digits in {:?}", digits),
        ));
    }
    let mut acc: Vec<u64> = Vec::new();
    let head = digits.len() % DECIMAL_CHUNK_DIGITS;
    let mut start = 0;
    if head > 0 {
        acc = limbs::mul_small(&acc, 1, parse_chunk(&digits[..head])?);
        start = head;
    }
    while start < digits.len() {
        let chunk = parse_chunk(&digits[start..start + DECIMAL_CHUNK_DIGITS])?;
        acc = limbs::mul_small(&acc, DECIMAL_CHUNK, chunk);
        start += DECIMAL_CHUNK_DIGITS;
    }
    Ok(BigInt::from_limbs(false, acc))
}

fn parse_chunk(s: &str) -> Result<u64> {
    s.parse::<u64>()
        .map_err(|e| Error::encoding("BigInt::from_str_radix", e.to_string()))
}

fn parse_hex(digits: &str) -> Result<BigInt> {
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.is_empty() {
        return Err(Error::encoding("BigInt::from_str_radix", "no hex digits"));
    }
    let bytes = if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    }
    .map_err(|e| Error::encoding("BigInt::from_str_radix", e.to_string()))?;
    Ok(BigInt::from_bytes_be(&bytes))
}

impl FromStr for BigInt {
    type Err = Error;

    /// Decimal, or hexadecimal with a `0x` prefix after the optional sign
    fn from_str(s: &str) -> Result<BigInt> {
        let unsigned = s.trim_start_matches(|c: char| c == '-' || c == '+');
        if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
            BigInt::from_str_radix(s, 16)
        } else {
            BigInt::from_str_radix(s, 10)
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.to_decimal_string())
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.to_bytes_be());
        let trimmed = encoded.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        f.pad_integral(!self.negative, "0x", digits)
    }
}

impl From<u64> for BigInt {
    fn from(v: u64) -> Self {
        BigInt::from_u64(v)
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        BigInt::from_u64(v as u64)
    }
}

impl From<usize> for BigInt {
    fn from(v: usize) -> Self {
        BigInt::from_u64(v as u64)
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        BigInt::from_i64(v)
    }
}

impl From<i32> for BigInt {
    fn from(v: i32) -> Self {
        BigInt::from_i64(v as i64)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
