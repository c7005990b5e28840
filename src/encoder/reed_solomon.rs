/// Reed-Solomon error correction for QR codes
/// Systematic code over GF(256); the generator has roots alpha^0 .. alpha^(n-1)
use crate::encoder::gf256::Gf256;

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Precompute the generator polynomial of degree `num_ecc_codewords`
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            generator: Gf256::generator_polynomial(num_ecc_codewords),
        }
    }

    /// Number of EC codewords produced per block
    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    /// EC codewords for `data`: remainder of data * x^n divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut message = Vec::with_capacity(data.len() + self.num_ecc_codewords());
        message.extend_from_slice(data);
        message.resize(data.len() + self.num_ecc_codewords(), 0);
        self.remainder(&message)
    }

    /// Remainder of `codeword` (highest power first) modulo the generator.
    /// All zeros for a valid `data ++ ec` codeword.
    pub fn remainder(&self, codeword: &[u8]) -> Vec<u8> {
        let n = self.num_ecc_codewords();
        let mut work = codeword.to_vec();
        if work.len() < n {
            let pad = n - work.len();
            work.splice(0..0, std::iter::repeat_n(0, pad));
        }
        let steps = work.len() - n;
        for i in 0..steps {
            let coef = work[i];
            if coef == 0 {
                continue;
            }
            for (j, &g) in self.generator.iter().enumerate().skip(1) {
                work[i + j] ^= Gf256::mul(g, coef);
            }
        }
        work.split_off(steps)
    }
}

/// Compute `ec_count` error correction codewords for `data`
pub fn encode_error_correction(data: &[u8], ec_count: usize) -> Vec<u8> {
    ReedSolomonEncoder::new(ec_count).encode(data)
}

/// Syndromes S_i = c(alpha^i) for i in 0..num_ecc; all zero when `codeword`
/// is a valid codeword.
pub fn syndromes(codeword: &[u8], num_ecc: usize) -> Vec<u8> {
    (0..num_ecc)
        .map(|i| {
            let root = Gf256::exp(i);
            codeword
                .iter()
                .fold(0u8, |acc, &c| Gf256::mul(acc, root) ^ c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rs_output_length() {
        for ec_count in [7, 10, 15, 18, 30] {
            let ec = encode_error_correction(&[0x40, 0x14, 0x10], ec_count);
            assert_eq!(ec.len(), ec_count);
        }
    }

    #[test]
    fn test_rs_zero_remainder() {
        let data = vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60];
        let encoder = ReedSolomonEncoder::new(10);
        let ec = encoder.encode(&data);

        let mut codeword = data.clone();
        codeword.extend_from_slice(&ec);
        assert!(encoder.remainder(&codeword).iter().all(|&b| b == 0));
        assert!(syndromes(&codeword, 10).iter().all(|&s| s == 0));
    }

    #[test]
    fn test_rs_detects_corruption() {
        let data: Vec<u8> = "4376471154038".bytes().collect();
        let ec = encode_error_correction(&data, 8);
        let mut codeword = data.clone();
        codeword.extend_from_slice(&ec);
        codeword[3] ^= 0x55;
        assert!(syndromes(&codeword, 8).iter().any(|&s| s != 0));
    }

    #[test]
    fn test_rs_known_vector() {
        // "01234567" numeric example from ISO/IEC 18004 annex I, version 1-M
        let data = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let ec = encode_error_correction(&data, 10);
        assert_eq!(ec, vec![0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]);
    }

    #[test]
    fn test_rs_zero_data() {
        let ec = encode_error_correction(&[0u8; 19], 7);
        assert_eq!(ec, vec![0u8; 7]);
    }
}
