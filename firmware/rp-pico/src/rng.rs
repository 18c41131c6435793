use rand_core::{RngCore, impls};
use rp_pico::hal::rosc::{Enabled, RingOscillator};

/// Random source built from the ring oscillator's random bit
///
/// Each output bit is one sample of the ROSC jitter, so a `u32` costs 32
/// register reads. Plenty for one draw per round.
pub struct RoscRng {
    rosc: RingOscillator<Enabled>,
}

impl RoscRng {
    pub fn new(rosc: RingOscillator<Enabled>) -> Self {
        Self { rosc }
    }
}

impl RngCore for RoscRng {
    fn next_u32(&mut self) -> u32 {
        (0..32).fold(0u32, |acc, _| (acc << 1) | u32::from(self.rosc.get_random_bit()))
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
