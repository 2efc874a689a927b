//! Group and ring operations on elements

use pbcrypt_algorithms::error::to_core_result;
use pbcrypt_algorithms::{BigInt, FieldElement};
use pbcrypt_api::{Error, GroupKind, Result};

use super::{reduce, Element, Scalar, Value};

impl Element {
    fn check_same(&self, rhs: &Element, context: &'static str) -> Result<()> {
        if self.pairing != rhs.pairing {
            return Err(Error::group_mismatch(
                context,
                "elements belong to different pairings",
            ));
        }
        if self.group != rhs.group {
            return Err(Error::group_mismatch(
                context,
                format!("cannot combine {} with {}", self.group, rhs.group),
            ));
        }
        Ok(())
    }

    /// The integer behind a Z_r operand of this pairing
    fn exponent<'a>(&self, e: &'a Element, context: &'static str) -> Result<&'a BigInt> {
        if self.pairing != e.pairing {
            return Err(Error::group_mismatch(
                context,
                "elements belong to different pairings",
            ));
        }
        match &e.value {
            Value::Scalar(s) => Ok(&s.0),
            _ => Err(Error::group_mismatch(
                context,
                format!("exponent must be in Zr, got {}", e.group),
            )),
        }
    }

    fn scalar_op(
        &self,
        rhs: &Element,
        context: &'static str,
        op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
    ) -> Result<Option<Element>> {
        match (&self.value, &rhs.value) {
            (Value::Scalar(a), Value::Scalar(b)) => {
                let v = reduce(&self.pairing, &op(&a.0, &b.0), context)?;
                Ok(Some(self.with_value(Value::Scalar(v))))
            }
            _ => Ok(None),
        }
    }

    /// The group law of G1, G2 and GT
    fn group_op(&self, rhs: &Element, context: &'static str) -> Result<Element> {
        let value = match (&self.value, &rhs.value) {
            (Value::Base(a), Value::Base(b)) => Value::Base(a + b),
            (Value::Twist(a), Value::Twist(b)) => Value::Twist(a + b),
            (Value::Quadratic(a), Value::Quadratic(b)) => Value::Quadratic(a * b),
            (Value::Dodecic(a), Value::Dodecic(b)) => Value::Dodecic(a * b),
            _ => {
                return Err(Error::group_mismatch(
                    context,
                    "element representations differ",
                ))
            }
        };
        Ok(self.with_value(value))
    }

    /// Inverse under the group law of G1, G2 and GT
    ///
    /// GT sits in the norm-one subgroup of the target field, where the
    /// conjugate is the inverse.
    fn group_inverse(&self) -> Value {
        match &self.value {
            Value::Scalar(s) => Value::Scalar(Scalar(if s.0.is_zero() {
                BigInt::zero()
            } else {
                self.order() - &s.0
            })),
            Value::Base(p) => Value::Base(-p),
            Value::Twist(p) => Value::Twist(-p),
            Value::Quadratic(f) => Value::Quadratic(f.conjugate()),
            Value::Dodecic(f) => Value::Dodecic(f.conjugate()),
        }
    }

    /// `k`-fold group operation, or the `k`-th power in Z_r
    fn power(&self, k: &BigInt, context: &'static str) -> Result<Element> {
        let value = match &self.value {
            Value::Scalar(s) => Value::Scalar(Scalar(to_core_result(
                s.0.mod_pow(k, self.order()),
                context,
            )?)),
            Value::Base(p) => Value::Base(p.mul_scalar(k)),
            Value::Twist(p) => Value::Twist(p.mul_scalar(k)),
            Value::Quadratic(f) if k.is_negative() => Value::Quadratic(f.conjugate().pow(k)),
            Value::Quadratic(f) => Value::Quadratic(f.pow(k)),
            Value::Dodecic(f) if k.is_negative() => Value::Dodecic(f.conjugate().pow(k)),
            Value::Dodecic(f) => Value::Dodecic(f.pow(k)),
        };
        Ok(self.with_value(value))
    }

    /// Sum in Z_r, or the group operation
    pub fn add(&self, rhs: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::add";
        self.check_same(rhs, CONTEXT)?;
        match self.scalar_op(rhs, CONTEXT, |a, b| a + b)? {
            Some(e) => Ok(e),
            None => self.group_op(rhs, CONTEXT),
        }
    }

    /// Difference in Z_r, or the group operation with the inverse of `rhs`
    pub fn sub(&self, rhs: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::sub";
        self.check_same(rhs, CONTEXT)?;
        match self.scalar_op(rhs, CONTEXT, |a, b| a - b)? {
            Some(e) => Ok(e),
            None => self.group_op(&rhs.with_value(rhs.group_inverse()), CONTEXT),
        }
    }

    /// Product in Z_r, or the group operation
    ///
    /// G1, G2 and GT have a single operation, so `mul` and `add` agree there.
    pub fn mul(&self, rhs: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::mul";
        self.check_same(rhs, CONTEXT)?;
        match self.scalar_op(rhs, CONTEXT, |a, b| a * b)? {
            Some(e) => Ok(e),
            None => self.group_op(rhs, CONTEXT),
        }
    }

    /// Quotient in Z_r, or the group operation with the inverse of `rhs`
    ///
    /// Fails with `NoInverse` when dividing by zero in Z_r.
    pub fn div(&self, rhs: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::div";
        self.check_same(rhs, CONTEXT)?;
        if self.group == GroupKind::Zr {
            return self.mul(&rhs.invert()?).map_err(|e| e.with_context(CONTEXT));
        }
        self.group_op(&rhs.with_value(rhs.group_inverse()), CONTEXT)
    }

    /// Additive inverse in Z_r, or the group inverse
    pub fn neg(&self) -> Element {
        self.with_value(self.group_inverse())
    }

    /// Multiplicative inverse in Z_r, or the group inverse
    ///
    /// Fails with `NoInverse` for zero in Z_r.
    pub fn invert(&self) -> Result<Element> {
        match &self.value {
            Value::Scalar(s) => {
                let inv = to_core_result(s.0.mod_inverse(self.order()), "Element::invert")?;
                Ok(self.with_value(Value::Scalar(Scalar(inv))))
            }
            _ => Ok(self.neg()),
        }
    }

    /// `self^e` for `e` in Z_r; in G1 and G2 this is scalar multiplication
    pub fn pow_zn(&self, e: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::pow_zn";
        let k = self.exponent(e, CONTEXT)?;
        self.power(k, CONTEXT)
    }

    /// `self^n` for any integer; negative exponents raise the inverse
    pub fn pow_int(&self, n: &BigInt) -> Result<Element> {
        self.power(n, "Element::pow_int")
    }

    /// Scale by `z` in Z_r
    ///
    /// In Z_r this is the ring product; elsewhere it is the `z`-fold group
    /// operation, the same as [`Element::pow_zn`].
    pub fn mul_zn(&self, z: &Element) -> Result<Element> {
        const CONTEXT: &str = "Element::mul_zn";
        let k = self.exponent(z, CONTEXT)?;
        self.mul_int_inner(k, CONTEXT)
    }

    /// Scale by an integer: the ring product in Z_r, the group power elsewhere
    pub fn mul_int(&self, n: &BigInt) -> Result<Element> {
        self.mul_int_inner(n, "Element::mul_int")
    }

    fn mul_int_inner(&self, n: &BigInt, context: &'static str) -> Result<Element> {
        match &self.value {
            Value::Scalar(s) => {
                let v = reduce(&self.pairing, &(&s.0 * n), context)?;
                Ok(self.with_value(Value::Scalar(v)))
            }
            _ => self.power(n, context),
        }
    }
}
