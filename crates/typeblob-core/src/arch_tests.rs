use crate::{ArchContext, ArchWidth};

#[test]
fn from_bytes_accepts_only_four_and_eight() {
    assert_eq!(ArchWidth::from_bytes(4), Some(ArchWidth::Four));
    assert_eq!(ArchWidth::from_bytes(8), Some(ArchWidth::Eight));
    assert_eq!(ArchWidth::from_bytes(0), None);
    assert_eq!(ArchWidth::from_bytes(16), None);
}

#[test]
fn header_size_is_two_arch_words() {
    assert_eq!(ArchWidth::Four.header_size(), 8);
    assert_eq!(ArchWidth::Eight.header_size(), 16);
}

#[test]
fn first_fix_wins() {
    let mut ctx = ArchContext::new();

    assert!(ctx.fix(ArchWidth::Four));
    assert!(!ctx.fix(ArchWidth::Eight));
    assert_eq!(ctx.get(), Some(ArchWidth::Four));
}

#[test]
fn resolve_fixes_the_default() {
    let mut ctx = ArchContext::new();
    assert_eq!(ctx.get(), None);

    assert_eq!(ctx.resolve(), ArchWidth::Eight);
    assert!(!ctx.fix(ArchWidth::Four));
    assert_eq!(ctx.resolve(), ArchWidth::Eight);
}
