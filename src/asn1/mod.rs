//! ASN.1/DER encoding, PEM armoring, and the PKCS#8/PKCS#1/SEC1 key shapes
//! that tie RSA and ECC key material to a concrete wire format.

pub mod der;
pub mod pem;
pub mod pkcs8;
pub mod shapes;
