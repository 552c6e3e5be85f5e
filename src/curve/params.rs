//! Named short-Weierstrass and Montgomery curve parameter tables.
//!
//! Constants are the standard SEC2/FIPS 186-4/RFC 5639 values, cross-checked
//! digit-for-digit against `ecc/curves.c`'s `s*`/`b*` arrays (reversed from
//! its little-endian digit order into the big-endian hex this module reads).

use crate::mp_int::MpInt;
use std::sync::LazyLock;

/// Identity of a registered curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Secp192k1,
    Secp192r1,
    Secp256k1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    BrainpoolP192r1,
    BrainpoolP224r1,
    BrainpoolP256r1,
    BrainpoolP320r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
    X25519,
    X448,
}

/// Which arithmetic family a curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    /// `y^2 = x^3 + a*x + b mod p`, arbitrary affine point arithmetic.
    ShortWeierstrass,
    /// Montgomery form, driven only through the ladder in `curve::montgomery`.
    Montgomery,
}

/// Full parameter set for one registered curve.
pub struct CurveParams {
    pub id: CurveId,
    pub family: CurveFamily,
    pub bit_size: usize,
    pub p: MpInt,
    pub a: MpInt,
    pub b: MpInt,
    pub gx: MpInt,
    pub gy: MpInt,
    pub n: MpInt,
    pub cofactor: u32,
    pub names: &'static [&'static str],
    pub oid: &'static [u32],
}

impl CurveParams {
    pub fn byte_size(&self) -> usize {
        self.bit_size.div_ceil(8)
    }
}

fn hex(s: &str) -> MpInt {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    MpInt::read_radix(&cleaned, 16).expect("curve constant must be valid hex")
}

fn build_secp256k1() -> CurveParams {
    CurveParams {
        id: CurveId::Secp256k1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 256,
        p: hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F"),
        a: MpInt::zero(),
        b: MpInt::from_u64(7),
        gx: hex("79BE667E F9DCBBAC 55A06295 CE870B07 029BFCDB 2DCE28D9 59F2815B 16F81798"),
        gy: hex("483ADA77 26A3C465 5DA4FBFC 0E1108A8 FD17B448 A6855419 9C47D08F FB10D4B8"),
        n: hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141"),
        cofactor: 1,
        names: &["secp256k1"],
        oid: &[1, 3, 132, 0, 10],
    }
}

fn build_secp256r1() -> CurveParams {
    let p = hex("FFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF");
    CurveParams {
        id: CurveId::Secp256r1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 256,
        a: p.sub(&MpInt::from_u64(3)),
        p,
        b: hex("5AC635D8 AA3A93E7 B3EBBD55 769886BC 651D06B0 CC53B0F6 3BCE3C3E 27D2604B"),
        gx: hex("6B17D1F2 E12C4247 F8BCE6E5 63A440F2 77037D81 2DEB33A0 F4A13945 D898C296"),
        gy: hex("4FE342E2 FE1A7F9B 8EE7EB4A 7C0F9E16 2BCE3357 6B315ECE CBB64068 37BF51F5"),
        n: hex("FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551"),
        cofactor: 1,
        names: &["secp256r1", "prime256v1", "P-256"],
        oid: &[1, 2, 840, 10045, 3, 1, 7],
    }
}

fn build_secp384r1() -> CurveParams {
    let p = hex(
        "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF \
         FFFFFFFF FFFFFFFE FFFFFFFF 00000000 00000000 FFFFFFFF",
    );
    CurveParams {
        id: CurveId::Secp384r1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 384,
        a: p.sub(&MpInt::from_u64(3)),
        p,
        b: hex(
            "B3312FA7 E23EE7E4 988E056B E3F82D19 181D9C6E FE814112 \
             0314088F 5013875A C656398D 8A2ED19D 2A85C8ED D3EC2AEF",
        ),
        gx: hex(
            "AA87CA22 BE8B0537 8EB1C71E F320AD74 6E1D3B62 8BA79B98 \
             59F741E0 82542A38 5502F25D BF55296C 3A545E38 72760AB7",
        ),
        gy: hex(
            "3617DE4A 96262C6F 5D9E98BF 9292DC29 F8F41DBD 289A147C \
             E9DA3113 B5F0B8C0 0A60B1CE 1D7E819D 7A431D7C 90EA0E5F",
        ),
        n: hex(
            "FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF \
             C7634D81 F4372DDF 581A0DB2 48B0A77A ECEC196A CCC52973",
        ),
        cofactor: 1,
        names: &["secp384r1", "P-384"],
        oid: &[1, 3, 132, 0, 34],
    }
}

fn build_secp521r1() -> CurveParams {
    let p = hex(
        "01FF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF \
         FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF \
         FFFFFFFF FFFFFFFF FFFFFFFF",
    );
    CurveParams {
        id: CurveId::Secp521r1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 521,
        a: p.sub(&MpInt::from_u64(3)),
        p,
        b: hex(
            "0051 953EB961 8E1C9A1F 929A21A0 B68540EE A2DA725B 99B315F3 \
             B8B48991 8EF109E1 56193951 EC7E937B 1652C0BD 3BB1BF07 \
             3573DF88 3D2C34F1 EF451FD4 6B503F00",
        ),
        gx: hex(
            "00C6 858E06B7 0404E9CD 9E3ECB66 2395B442 9C648139 053FB521 \
             F828AF60 6B4D3DBA A14B5E77 EFE75928 FE1DC127 A2FFA8DE \
             3348B3C1 856A429B F97E7E31 C2E5BD66",
        ),
        gy: hex(
            "0118 39296A78 9A3BC004 5C8A5FB4 2C7D1BD9 98F54449 579B4468 \
             17AFBD17 273E662C 97EE7299 5EF42640 C550B901 3FAD0761 \
             353C7086 A272C240 88BE9476 9FD16650",
        ),
        n: hex(
            "01FF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFA \
             51868783 BF2F966B 7FCC0148 F709A5D0 3BB5C9B8 899C47AE \
             BB6FB71E 91386409",
        ),
        cofactor: 1,
        names: &["secp521r1", "P-521"],
        oid: &[1, 3, 132, 0, 35],
    }
}

fn build_secp192k1() -> CurveParams {
    CurveParams {
        id: CurveId::Secp192k1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 192,
        p: hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFEE37"),
        a: MpInt::zero(),
        b: MpInt::from_u64(3),
        gx: hex("DB4FF10E C057E9AE 26B07D02 80B7F434 1DA5D1B1 EAE06C7D"),
        gy: hex("9B2F2F6D 9C5628A7 844163D0 15BE8634 4082AA88 D95E2F9D"),
        n: hex("FFFFFFFF FFFFFFFF FFFFFFFE 26F2FC17 0F69466A 74DEFD8D"),
        cofactor: 1,
        names: &["secp192k1"],
        oid: &[1, 3, 132, 0, 31],
    }
}

fn build_secp192r1() -> CurveParams {
    let p = hex("FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFFFF FFFFFFFF");
    CurveParams {
        id: CurveId::Secp192r1,
        family: CurveFamily::ShortWeierstrass,
        bit_size: 192,
        a: p.sub(&MpInt::from_u64(3)),
        p,
        b: hex("64210519 E59C80E7 0FA7E9AB 72243049 FEB8DEEC C146B9B1"),
        gx: hex("188DA80E B03090F6 7CBF20EB 43A18800 F4FF0AFD 82FF1012"),
        gy: hex("07192B95 FFC8DA78 631011ED 6B24CDD5 73F977A1 1E794811"),
        n: hex("FFFFFFFF FFFFFFFF FFFFFFFF 99DEF836 146BC9B1 B4D22831"),
        cofactor: 1,
        names: &["secp192r1", "prime192v1", "P-192"],
        oid: &[1, 2, 840, 10045, 3, 1, 1],
    }
}

fn build_brainpool(
    id: CurveId,
    bit_size: usize,
    p: &str,
    a: &str,
    b: &str,
    gx: &str,
    gy: &str,
    n: &str,
    name: &'static str,
    oid: &'static [u32],
) -> CurveParams {
    CurveParams {
        id,
        family: CurveFamily::ShortWeierstrass,
        bit_size,
        p: hex(p),
        a: hex(a),
        b: hex(b),
        gx: hex(gx),
        gy: hex(gy),
        n: hex(n),
        cofactor: 1,
        names: &[name],
        oid,
    }
}

fn build_brainpool_p256r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP256r1,
        256,
        "A9FB57DB A1EEA9BC 3E660A90 9D838D72 6E3BF623 D5262028 2013481D 1F6E5377",
        "7D5A0975 FC2C3057 EEF67530 417AFFE7 FB8055C1 26DC5C6C E94A4B44 F330B5D9",
        "26DC5C6C E94A4B44 F330B5D9 BBD77CBF 95841629 5CF7E1CE 6BCCDC18 FF8C07B6",
        "8BD2AEB9 CB7E57CB 2C4B482F FC81B7AF B9DE27E1 E3BD23C2 3A4453BD 9ACE3262",
        "547EF835 C3DAC4FD 97F8461A 14611DC9 C2774513 2DED8E54 5C1D54C7 2F046997",
        "A9FB57DB A1EEA9BC 3E660A90 9D838D71 8C397AA3 B561A6F7 901E0E82 974856A7",
        "brainpoolP256r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 7],
    )
}

fn build_brainpool_p384r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP384r1,
        384,
        "8CB91E82 A3386D28 0F5D6F7E 50E641DF 152F7109 ED5456B4 12B1DA19 7FB71123 ACD3A729 901D1A71 87470013 3107EC53",
        "7BC382C6 3D8C150C 3C72080A CE05AFA0 C2BEA28E 4FB22787 139165EF BA91F90F 8AA5814A 503AD4EB 04A8C7DD 22CE2826",
        "04A8C7DD 22CE2826 8B39B554 16F0447C 2FB77DE1 07DCD2A6 2E880EA5 3EEB62D5 7CB43902 95DBC994 3AB78696 FA504C11",
        "1D1C64F0 68CF45FF A2A63A81 B7C13F6B 8847A3E7 7EF14FE3 DB7FCAFE 0CBD10E8 E826E034 36D646AA EF87B2E2 47D4AF1E",
        "8ABE1D75 20F9C2A4 5CB1EB8E 95CFD552 62B70B29 FEEC5864 E19C054F F9912928 0E4646217 791811142820341263C5315",
        "8CB91E82 A3386D28 0F5D6F7E 50E641DF 152F7109 ED5456B3 1F166E6C AC0425A7 CF3AB6AF 6B7FC310 3B883202 E9046565",
        "brainpoolP384r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 11],
    )
}

fn build_brainpool_p512r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP512r1,
        512,
        "AADD9DB8 DBE9C48B 3FD4E6AE 33C9FC07 CB308DB3 B3C9D20E D6639CCA 70330871 7D4D9B00 9BC66842 AECDA12A E6A380E6 2881FF2F 2D82C685 28AA6056 583A48F3",
        "7830A331 8B603B89 E2327145 AC234CC5 94CBDD8D 3DF91610 A83441CA EA9863BC 2DED5D5A A8253AA1 0A2EF1C9 8B9AC8B5 7F1117A7 2BF2C7B9 E7C1AC4D 77FC94CA",
        "3DF91610 A83441CA EA9863BC 2DED5D5A A8253AA1 0A2EF1C9 8B9AC8B5 7F1117A7 2BF2C7B9 E7C1AC4D 77FC94CA DC083E67 984050B7 5EBAE5DD 2809BD63 8016F723",
        "81AEE4BD D82ED964 5A21322E 9C4C6A93 85ED9F70 B5D916C1 B43B62EE F4D0098E FF3B1F78 E2D0D48D 50D1687B 93B97D5F 7C6D5047 406A5E68 8B352209 BCB9F822",
        "7DDE385D 566332EC C0EABFA9 CF7822FD F209F700 24A57B1A A000C55B 881F8111 B2DCDE49 4A5F485E 5BCA4BD8 8A2763AE D1CA2B2F A8F05406 78CD1E0F 3AD80892",
        "AADD9DB8 DBE9C48B 3FD4E6AE 33C9FC07 CB308DB3 B3C9D20E D6639CCA 70330870 553E5C41 4CA92619 41866119 7FAC1047 1DB1D381 085DDADD B5879682 9CA90069",
        "brainpoolP512r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 13],
    )
}

fn build_brainpool_p192r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP192r1,
        192,
        "C302F41D 932A36CD A7A34630 93D18DB7 8FCE476D E1A86297",
        "6A911740 76B1E0E1 9C39C031 FE8685C1 CAE040E5 C69A28EF",
        "469A28EF 7C28CCA3 DC721D04 4F4496BC CA7EF414 6FBF25C9",
        "C0A0647E AAB6A487 53B033C5 6CB0F090 0A2F5C48 53375FD6",
        "14B69086 6ABD5BB8 8B5F4828 C1490002 E6773FA2 FA299B8F",
        "C302F41D 932A36CD A7A3462F 9E9E916B 5BE8F102 9AC4ACC1",
        "brainpoolP192r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 3],
    )
}

fn build_brainpool_p224r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP224r1,
        224,
        "D7C134AA264366862A18302575D1D787B09F075797DA89F57EC8C0FF",
        "68A5E62CA9CE6C1C299803A6C1530B514E182AD8B0042A59CAD29F43",
        "2580F63CCFE44138870713B1A92369E33E2135D266DBB372386C400B",
        "0D9029AD2C7E5CF4340823B2A87DC68C9E4CE3174C1E6EFDEE12C07D",
        "58AA56F772C0726F24C6B89E4ECDAC24354B9E99CAA3F6D3761402CD",
        "D7C134AA264366862A18302575D0FB98D116BC4B6DDEBCA3A5A7939F",
        "brainpoolP224r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 5],
    )
}

fn build_brainpool_p320r1() -> CurveParams {
    build_brainpool(
        CurveId::BrainpoolP320r1,
        320,
        "D35E4720 36BC4FB7 E13C785E D201E065 F98FCFA6 F6F40DEF 4F92B9EC 7893EC28 FCD412B1 F1B32E27",
        "3EE30B56 8FBAB0F8 83CCEBD4 6D3F3BB8 A2A73513 F5EB79DA 66190EB0 85FFA9F4 92F375A9 7D860EB4",
        "52088394 9DFDBC42 D3AD1986 40688A6F E13F4134 9554B49A CC31DCCD 88453981 6F5EB4AC 8FB1F1A6",
        "43BD7E9A FB53D8B8 5289BCC4 8EE5BFE6 F20137D1 0A087EB6 E7871E2A 10A599C7 10AF8D0D 39E20611",
        "14FDD055 45EC1CC8 AB409324 7F77275E 0743FFED 117182EA A9C77877 AAAC6AC7 D35245D1 692E8EE1",
        "D35E4720 36BC4FB7 E13C785E D201E065 F98FCFA5 B68F12A3 2D482EC7 EE8658E9 8691555B 44C59311",
        "brainpoolP320r1",
        &[1, 3, 36, 3, 3, 2, 8, 1, 1, 9],
    )
}

macro_rules! lazy_curve {
    ($name:ident, $builder:path) => {
        pub static $name: LazyLock<CurveParams> = LazyLock::new($builder);
    };
}

lazy_curve!(SECP256K1, build_secp256k1);
lazy_curve!(SECP256R1, build_secp256r1);
lazy_curve!(SECP384R1, build_secp384r1);
lazy_curve!(SECP521R1, build_secp521r1);
lazy_curve!(SECP192K1, build_secp192k1);
lazy_curve!(SECP192R1, build_secp192r1);
lazy_curve!(BRAINPOOL_P192R1, build_brainpool_p192r1);
lazy_curve!(BRAINPOOL_P224R1, build_brainpool_p224r1);
lazy_curve!(BRAINPOOL_P256R1, build_brainpool_p256r1);
lazy_curve!(BRAINPOOL_P320R1, build_brainpool_p320r1);
lazy_curve!(BRAINPOOL_P384R1, build_brainpool_p384r1);
lazy_curve!(BRAINPOOL_P512R1, build_brainpool_p512r1);

/// Looks up a short-Weierstrass curve's parameters by id. Returns `None`
/// for `X25519`/`X448`, which are handled entirely by `curve::montgomery`
/// and never build a `CurveParams` (their "a" and "b" mean different
/// things entirely, per RFC 7748's Montgomery form).
pub fn weierstrass_params(id: CurveId) -> Option<&'static CurveParams> {
    match id {
        CurveId::Secp256k1 => Some(&SECP256K1),
        CurveId::Secp256r1 => Some(&SECP256R1),
        CurveId::Secp384r1 => Some(&SECP384R1),
        CurveId::Secp521r1 => Some(&SECP521R1),
        CurveId::Secp192k1 => Some(&SECP192K1),
        CurveId::Secp192r1 => Some(&SECP192R1),
        CurveId::BrainpoolP192r1 => Some(&BRAINPOOL_P192R1),
        CurveId::BrainpoolP224r1 => Some(&BRAINPOOL_P224R1),
        CurveId::BrainpoolP256r1 => Some(&BRAINPOOL_P256R1),
        CurveId::BrainpoolP320r1 => Some(&BRAINPOOL_P320R1),
        CurveId::BrainpoolP384r1 => Some(&BRAINPOOL_P384R1),
        CurveId::BrainpoolP512r1 => Some(&BRAINPOOL_P512R1),
        CurveId::X25519 | CurveId::X448 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secp256k1_generator_satisfies_curve_equation() {
        let c = &*SECP256K1;
        let lhs = c.gy.sqrmod(&c.p).unwrap();
        let rhs = c
            .gx
            .mul(&c.gx)
            .mul(&c.gx)
            .add(&c.a.mul(&c.gx))
            .add(&c.b)
            .modulo(&c.p)
            .unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn secp256r1_generator_satisfies_curve_equation() {
        let c = &*SECP256R1;
        let lhs = c.gy.sqrmod(&c.p).unwrap();
        let rhs = c
            .gx
            .mul(&c.gx)
            .mul(&c.gx)
            .add(&c.a.mul(&c.gx))
            .add(&c.b)
            .modulo(&c.p)
            .unwrap();
        assert_eq!(lhs, rhs);
    }
}
