use crate::i2c::I2CBus;
use crate::sensors::motion::Lsm303d;

/// Carte Enviro pHAT.
/// Seul le capteur de mouvement est pris en charge (pas de LEDs, lumière, pression ni entrées analogiques).
pub struct EnviroPhat<B> {
    pub motion: Lsm303d<B>,
}

impl<B: I2CBus> EnviroPhat<B> {
    /// Constructeur, `motion_addr` remplace l'adresse par défaut du LSM303D
    pub fn new(bus: B, motion_addr: Option<u8>) -> Self {
        Self {
            motion: Lsm303d::new(bus, motion_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i2c::mock::MockBus;

    #[test]
    fn test_motion_address() {
        assert_eq!(EnviroPhat::new(MockBus::new(), None).motion.address(), 0x1D);
        assert_eq!(EnviroPhat::new(MockBus::new(), Some(0x1E)).motion.address(), 0x1E);
    }

    #[test]
    fn test_motion_is_lazy() {
        let bus = MockBus::new();
        let board = EnviroPhat::new(bus.clone(), None);

        assert!(!board.motion.is_configured());
        assert!(bus.transactions().is_empty());
    }
}
