//! Unsigned magnitude arithmetic on little-endian `u64` limb slices.
//!
//! Every function accepts unnormalized input but returns normalized output
//! (no high zero limbs; zero is the empty vector).

use core::cmp::Ordering;

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Normalization and Comparison
// ============================================================================

/// Strip high zero limbs
#[inline]
pub(crate) fn normalize(limbs: &mut Vec<u64>) {
    while let Some(&0) = limbs.last() {
        limbs.pop();
    }
}

/// Length ignoring high zero limbs
#[inline]
fn significant_len(a: &[u64]) -> usize {
    let mut n = a.len();
    while n > 0 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

/// Compare two magnitudes
pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

// ============================================================================
// Addition, Subtraction, Multiplication
// ============================================================================

/// a + b
pub(crate) fn add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for i in 0..long.len() {
        let rhs = if i < short.len() { short[i] } else { 0 };
        let (s, c) = adc(long[i], rhs, carry);
        out.push(s);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    normalize(&mut out);
    out
}

/// a - b, requires a >= b
pub(crate) fn sub(a: &[u64], b: &[u64]) -> Vec<u64> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u64;
    for i in 0..a.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        let (d, br) = sbb(a[i], rhs, borrow);
        out.push(d);
        borrow = br;
    }
    normalize(&mut out);
    out
}

/// Schoolbook a * b
pub(crate) fn mul(a: &[u64], b: &[u64]) -> Vec<u64> {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = mac(out[i + j], ai, bj, carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
    normalize(&mut out);
    out
}

/// a * m + c for single-limb m and c
pub(crate) fn mul_small(a: &[u64], m: u64, c: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = c;
    for &ai in a {
        let (lo, hi) = mac(0, ai, m, carry);
        out.push(lo);
        carry = hi;
    }
    if carry != 0 {
        out.push(carry);
    }
    normalize(&mut out);
    out
}

// ============================================================================
// Shifts
// ============================================================================

/// a << n
pub(crate) fn shl(a: &[u64], n: usize) -> Vec<u64> {
    let a = &a[..significant_len(a)];
    if a.is_empty() {
        return Vec::new();
    }
    let limbs = n / 64;
    let bits = (n % 64) as u32;
    let mut out = vec![0u64; limbs];
    out.reserve(a.len() + 1);
    if bits == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &ai in a {
            out.push((ai << bits) | carry);
            carry = ai >> (64 - bits);
        }
        out.push(carry);
    }
    normalize(&mut out);
    out
}

/// a >> n
pub(crate) fn shr(a: &[u64], n: usize) -> Vec<u64> {
    let limbs = n / 64;
    if limbs >= a.len() {
        return Vec::new();
    }
    let bits = (n % 64) as u32;
    let src = &a[limbs..];
    let mut out = Vec::with_capacity(src.len());
    if bits == 0 {
        out.extend_from_slice(src);
    } else {
        for i in 0..src.len() {
            let hi = if i + 1 < src.len() {
                src[i + 1] << (64 - bits)
            } else {
                0
            };
            out.push((src[i] >> bits) | hi);
        }
    }
    normalize(&mut out);
    out
}

// ============================================================================
// Division
// ============================================================================

/// Divide by a single nonzero limb, returning (quotient, remainder)
pub(crate) fn div_small(a: &[u64], d: u64) -> (Vec<u64>, u64) {
    debug_assert!(d != 0);
    let mut q = vec![0u64; a.len()];
    let mut rem = 0u128;
    for i in (0..a.len()).rev() {
        let cur = (rem << 64) | a[i] as u128;
        q[i] = (cur / d as u128) as u64;
        rem = cur % d as u128;
    }
    normalize(&mut q);
    (q, rem as u64)
}

/// Knuth algorithm D: (u / v, u % v) for nonzero v
pub(crate) fn div_rem(u: &[u64], v: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let u = &u[..significant_len(u)];
    let v = &v[..significant_len(v)];
    debug_assert!(!v.is_empty(), "division by zero");

    if cmp(u, v) == Ordering::Less {
        return (Vec::new(), u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = div_small(u, v[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    const B: u128 = 1u128 << 64;
    let n = v.len();
    let m = u.len() - n;

    // Normalize so the top limb of the divisor has its high bit set
    let s = v[n - 1].leading_zeros();
    let vn = shift_left_fixed(v, s, n);
    let mut un = shift_left_fixed(u, s, u.len() + 1);

    let mut q = vec![0u64; m + 1];
    let vtop = vn[n - 1] as u128;
    let vnext = vn[n - 2] as u128;

    for j in (0..=m).rev() {
        let num = ((un[j + n] as u128) << 64) | un[j + n - 1] as u128;
        let mut qhat = num / vtop;
        let mut rhat = num % vtop;

        loop {
            if qhat >= B || qhat * vnext > ((rhat << 64) | un[j + n - 2] as u128) {
                qhat -= 1;
                rhat += vtop;
                if rhat < B {
                    continue;
                }
            }
            break;
        }

        // Multiply and subtract
        let mut k: i128 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as u128;
            let t = un[i + j] as i128 - k - (p as u64) as i128;
            un[i + j] = t as u64;
            k = (p >> 64) as i128 - (t >> 64);
        }
        let t = un[j + n] as i128 - k;
        un[j + n] = t as u64;

        q[j] = qhat as u64;
        if t < 0 {
            // Add back
            q[j] = q[j].wrapping_sub(1);
            let mut carry = 0u128;
            for i in 0..n {
                let sum = un[i + j] as u128 + vn[i] as u128 + carry;
                un[i + j] = sum as u64;
                carry = sum >> 64;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u64);
        }
    }

    normalize(&mut q);
    un.truncate(n);
    let r = shr(&un, s as usize);
    (q, r)
}

/// Shift left by fewer than 64 bits into a buffer of exactly `len` limbs
fn shift_left_fixed(a: &[u64], s: u32, len: usize) -> Vec<u64> {
    let mut out = vec![0u64; len];
    if s == 0 {
        out[..a.len()].copy_from_slice(a);
        return out;
    }
    let mut carry = 0u64;
    for (i, &ai) in a.iter().enumerate() {
        out[i] = (ai << s) | carry;
        carry = ai >> (64 - s);
    }
    if a.len() < len {
        out[a.len()] = carry;
    }
    out
}
