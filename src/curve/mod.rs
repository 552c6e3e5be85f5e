//! Curve registry: named short-Weierstrass curves plus the two Montgomery
//! curves, addressed through one [`CurveId`] enum.

pub mod montgomery;
pub mod params;
pub mod weierstrass;

pub use montgomery::MontgomeryId;
pub use params::{CurveFamily, CurveId, CurveParams};
pub use weierstrass::AffinePoint;

impl CurveId {
    /// Looks up a curve by any of its registered names (case-sensitive,
    /// matching OpenSSL/RFC spelling), e.g. `"secp256k1"`, `"P-256"`,
    /// `"prime256v1"`, `"x25519"`.
    pub fn by_name(name: &str) -> Option<CurveId> {
        if name.eq_ignore_ascii_case("x25519") {
            return Some(CurveId::X25519);
        }
        if name.eq_ignore_ascii_case("x448") {
            return Some(CurveId::X448);
        }
        for id in ALL_WEIERSTRASS_IDS {
            if let Some(p) = params::weierstrass_params(id) {
                if p.names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                    return Some(id);
                }
            }
        }
        None
    }

    pub fn family(self) -> CurveFamily {
        match self {
            CurveId::X25519 | CurveId::X448 => CurveFamily::Montgomery,
            _ => CurveFamily::ShortWeierstrass,
        }
    }
}

/// All registered curve ids, short-Weierstrass and Montgomery alike.
pub fn all_curve_ids() -> impl Iterator<Item = CurveId> {
    ALL_WEIERSTRASS_IDS.iter().copied().chain([CurveId::X25519, CurveId::X448])
}

const ALL_WEIERSTRASS_IDS: &[CurveId] = &[
    CurveId::Secp192k1,
    CurveId::Secp192r1,
    CurveId::Secp256k1,
    CurveId::Secp256r1,
    CurveId::Secp384r1,
    CurveId::Secp521r1,
    CurveId::BrainpoolP192r1,
    CurveId::BrainpoolP224r1,
    CurveId::BrainpoolP256r1,
    CurveId::BrainpoolP320r1,
    CurveId::BrainpoolP384r1,
    CurveId::BrainpoolP512r1,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_curve_by_canonical_and_alias_name() {
        assert_eq!(CurveId::by_name("secp256k1"), Some(CurveId::Secp256k1));
        assert_eq!(CurveId::by_name("P-256"), Some(CurveId::Secp256r1));
        assert_eq!(CurveId::by_name("prime256v1"), Some(CurveId::Secp256r1));
        assert_eq!(CurveId::by_name("x25519"), Some(CurveId::X25519));
        assert_eq!(CurveId::by_name("nonexistent-curve"), None);
    }

    #[test]
    fn families_are_reported_correctly() {
        assert_eq!(CurveId::Secp256k1.family(), CurveFamily::ShortWeierstrass);
        assert_eq!(CurveId::X25519.family(), CurveFamily::Montgomery);
    }
}
