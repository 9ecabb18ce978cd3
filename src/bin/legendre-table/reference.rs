//! Published values the generated tables can be compared against.

use legendre_coefficients::Kind;

pub struct Reference {
    pub degree: u32,
    pub line: &'static str,
}

pub fn published(kind: Kind) -> Reference {
    match kind {
        Kind::Ordinary => Reference {
            degree: 13,
            line: "P(13,x) = 1/1024 ( 1300075 x^13 - 4056234 x^11 + 4849845 x^9 - 2771340 x^7 + 765765 x^5 - 90090 x^3 + 3003 x )",
        },
        Kind::Shifted => Reference {
            degree: 5,
            line: "/P(5,x) = 252 x^5 - 630 x^4 + 560 x^3 - 210 x^2 + 30 x - 1",
        },
    }
}
