/// GF(256) arithmetic for Reed-Solomon coding
/// QR codes use the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
pub struct Gf256;

const PRIMITIVE: u16 = 0x11D;

struct Tables {
    /// alpha^i, doubled in length so log sums need no reduction
    exp: [u8; 512],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    Tables { exp, log }
}

static TABLES: Tables = build_tables();

impl Gf256 {
    /// alpha^n for any n
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }

    /// Discrete log of a nonzero element
    pub fn log(a: u8) -> Option<u8> {
        (a != 0).then(|| TABLES.log[a as usize])
    }

    /// Field multiplication through the log/exp tables
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[log_a + log_b]
    }

    /// Generator polynomial prod_{i<degree} (x - alpha^i), highest power first.
    pub fn generator_polynomial(degree: usize) -> Vec<u8> {
        let mut poly = vec![1u8];
        for i in 0..degree {
            let factor = [1u8, TABLES.exp[i]];
            let mut next = vec![0u8; poly.len() + 1];
            for (j, &p) in poly.iter().enumerate() {
                for (k, &f) in factor.iter().enumerate() {
                    next[j + k] ^= Self::mul(p, f);
                }
            }
            poly = next;
        }
        poly
    }
}
