//! Type F presets: Barreto–Naehrig curves, embedding degree 12

/// BN curve for `u = 1`: `q = 103`, `r = 97`, `y² = x³ + 5`
///
/// `F_q² = F_q[i] / (i² + 1)` and the sextic twist uses `ξ = 2 + i`.
pub const TYPE_F_TOY: &str = "\
type f
q 103
r 97
b 5
beta 102
alpha0 2
alpha1 1
";

/// alt_bn128: `y² = x³ + 3` over the 254-bit prime, twist by `ξ = 9 + i`
pub const TYPE_F_BN254: &str = "\
type f
q 21888242871839275222246405745257275088696311157297823662689037894645226208583
r 21888242871839275222246405745257275088548364400416034343698204186575808495617
b 3
beta 21888242871839275222246405745257275088696311157297823662689037894645226208582
alpha0 9
alpha1 1
";
