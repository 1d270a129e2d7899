//! Identifier character classes for PHP-flavored names.

/// Check if a character can start a PHP identifier.
///
/// PHP accepts ASCII letters, underscore, and any byte outside the ASCII
/// range; on top of that we admit the Unicode Standard Annex #31 start set
/// so decoded multi-byte letters classify the same way they would in source.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c) || !c.is_ascii()
}

/// Check if a character can continue a PHP identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || !c.is_ascii()
}

/// Check that `name` is a well-formed PHP identifier (no `$` sigil).
pub fn is_valid_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}
