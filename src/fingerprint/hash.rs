// FNV-1a, folded over the little-endian bytes of each pushed field
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Order-sensitive combining hash shared by every layer of the fingerprint.
///
/// Each field is fed as eight bytes, so sequences of different lengths
/// produce different byte streams.
#[derive(Debug, Clone, Copy)]
pub struct InvariantHasher {
    state: u64,
}

impl Default for InvariantHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantHasher {
    pub fn new() -> Self {
        Self { state: FNV_OFFSET }
    }

    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        for byte in value.to_le_bytes() {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
        self
    }

    pub fn push_i64(&mut self, value: i64) -> &mut Self {
        self.push_u64(value as u64)
    }

    pub fn push_f64(&mut self, value: f64) -> &mut Self {
        self.push_u64(value.to_bits())
    }

    pub fn finish(&self) -> u64 {
        self.state
    }
}
