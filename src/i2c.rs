#[cfg(feature = "real-sensors")]
use rppal::i2c::I2c;

#[cfg(test)]
pub(crate) mod mock;

/// Primitives de bus nécessaires aux capteurs (lecture/écriture de registres 8 bits)
pub trait I2CBus {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ecrit un octet dans un registre 8 bits
    fn write_byte(&mut self, addr: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Lecture d'un octet dans un registre 8 bits
    fn read_byte(&mut self, addr: u8, register: u8) -> Result<u8, Self::Error>;

    /// Lecture de 2 registres consécutifs (little-endian).
    /// Le bit d'auto-incrément doit être porté par `register`.
    fn read_word(&mut self, addr: u8, register: u8) -> Result<u16, Self::Error>;
}

impl<T: I2CBus + ?Sized> I2CBus for &mut T {
    type Error = T::Error;

    fn write_byte(&mut self, addr: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(addr, register, value)
    }

    fn read_byte(&mut self, addr: u8, register: u8) -> Result<u8, Self::Error> {
        (**self).read_byte(addr, register)
    }

    fn read_word(&mut self, addr: u8, register: u8) -> Result<u16, Self::Error> {
        (**self).read_word(addr, register)
    }
}

#[cfg(feature = "real-sensors")]
impl I2CBus for I2c {
    type Error = rppal::i2c::Error;

    // Le bus est partagé entre plusieurs capteurs : l'esclave est redéfini à chaque transaction
    fn write_byte(&mut self, addr: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.set_slave_address(u16::from(addr))?;
        self.smbus_write_byte(register, value)
    }

    fn read_byte(&mut self, addr: u8, register: u8) -> Result<u8, Self::Error> {
        self.set_slave_address(u16::from(addr))?;
        self.smbus_read_byte(register)
    }

    fn read_word(&mut self, addr: u8, register: u8) -> Result<u16, Self::Error> {
        self.set_slave_address(u16::from(addr))?;
        self.smbus_read_word(register)
    }
}

#[cfg(feature = "fake-sensors")]
pub use fake::FakeBus;

#[cfg(feature = "fake-sensors")]
mod fake {
    use std::convert::Infallible;

    use log::trace;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::I2CBus;
    use crate::sensors::motion::registry;

    /// Bus simulé : répond comme un LSM303D avec des mesures aléatoires
    pub struct FakeBus {
        rng: StdRng,
    }

    impl FakeBus {
        pub fn new() -> Self {
            Self { rng: StdRng::from_entropy() }
        }
    }

    impl Default for FakeBus {
        fn default() -> Self {
            Self::new()
        }
    }

    impl I2CBus for FakeBus {
        type Error = Infallible;

        fn write_byte(&mut self, addr: u8, register: u8, value: u8) -> Result<(), Infallible> {
            trace!("[I2C][FAKE] {:#04x} W {:#04x} <= {:#04x}", addr, register, value);
            Ok(())
        }

        fn read_byte(&mut self, _addr: u8, register: u8) -> Result<u8, Infallible> {
            Ok(match register {
                registry::WHO_AM_I => registry::LSM303D_WHO_AM_I_VAL,
                registry::STATUS_REG_M => registry::STATUS_REG_M_NEW_DATA,
                _ => self.rng.gen(),
            })
        }

        fn read_word(&mut self, _addr: u8, register: u8) -> Result<u16, Infallible> {
            let raw: i16 = match register & !registry::AUTO_INCREMENT {
                // ~1g sur Z, un peu de bruit sur X/Y
                registry::OUT_X_L_A | registry::OUT_Y_L_A => self.rng.gen_range(-800..800),
                registry::OUT_Z_L_A => self.rng.gen_range(15_500..17_000),
                registry::TEMP_OUT_L => self.rng.gen_range(-64..256),
                _ => self.rng.gen_range(-4_000..4_000),
            };
            Ok(raw as u16)
        }
    }
}
