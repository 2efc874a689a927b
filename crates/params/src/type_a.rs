//! Type A presets: supersingular `y² = x³ + x`, embedding degree 2

/// Toy curve over `F_103`: 104 points, subgroup order `13 = 2³ + 2² + 1`
///
/// Small enough to check by hand; offers no security.
pub const TYPE_A_TOY: &str = "\
type a
q 103
h 8
r 13
exp2 3
exp1 2
sign1 1
sign0 1
";

/// The 512-bit base field curve distributed with PBC as `a.param`
///
/// `r = 2¹⁵⁹ + 2¹⁰⁷ + 1` is a 160-bit prime.
pub const TYPE_A_512: &str = "\
type a
q 8780710799663312522437781984754049815806883199414208211028653399266475630880222957078625179422662221423155858769582317459277713367317481324925129998224791
h 12016012264891146079388821366740534204802954401251311822919615131047207289359704531102844802183906537786776
r 730750818665451621361119245571504901405976559617
exp2 159
exp1 107
sign1 1
sign0 1
";
