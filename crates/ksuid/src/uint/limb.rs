//! Single-limb add-with-carry and subtract-with-borrow primitives.

#[inline(always)]
pub(crate) const fn adc32(x: u32, y: u32, carry: bool) -> (u32, bool) {
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry as u32);
    (sum, c1 | c2)
}

#[inline(always)]
pub(crate) const fn sbb32(x: u32, y: u32, borrow: bool) -> (u32, bool) {
    let (diff, b1) = x.overflowing_sub(y);
    let (diff, b2) = diff.overflowing_sub(borrow as u32);
    (diff, b1 | b2)
}

#[inline(always)]
pub(crate) const fn adc64(x: u64, y: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry as u64);
    (sum, c1 | c2)
}

#[inline(always)]
pub(crate) const fn sbb64(x: u64, y: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = x.overflowing_sub(y);
    let (diff, b2) = diff.overflowing_sub(borrow as u64);
    (diff, b1 | b2)
}
