use log::{debug, info, trace, warn};

use crate::i2c::I2CBus;

use super::heading;
use super::registry;
use super::vector::Vector;
use super::MotionData;

/// Erreurs du LSM303D. Les erreurs du bus sont transmises telles quelles.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// Le registre WHO_AM_I ne correspond pas à un LSM303D
    #[error("Aucun LSM303D détecté (WHO_AM_I: {0:#04x})")]
    DeviceNotFound(u8),

    /// Erreur du bus I2C
    #[error("Erreur de bus I2C: {0}")]
    Bus(#[source] E),
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;

// Configuration appliquée une seule fois, après identification
const CONFIGURATION: [(u8, u8); 7] = [
    (registry::CTRL_REG1, registry::CTRL_REG1_ODR_50HZ_XYZ),
    (registry::CTRL_REG2, registry::CTRL_REG2_AFS_2G),
    (registry::CTRL_REG3, 0x00), // pas d'interruption
    (registry::CTRL_REG4, 0x00), // pas d'interruption
    (registry::CTRL_REG5, registry::CTRL_REG5_TEMP_EN | registry::CTRL_REG5_M_ODR_50HZ),
    (registry::CTRL_REG6, registry::MAG_SCALE_2),
    (registry::CTRL_REG7, registry::CTRL_REG7_MD_CONTINUOUS),
];

/// Dernières valeurs lues ou calculées
#[derive(Clone, Copy, Debug, Default)]
struct State {
    accel: Vector<f64>,
    mag: Vector<i16>,
    tiltcomp: Vector<f64>,
    raw_heading: f64,
    heading: Option<f64>,
}

/// Accéléromètre/magnétomètre 3 axes LSM303D.
///
/// Le capteur est configuré à la première lecture. Les méthodes prennent
/// `&mut self` : un driver partagé entre plusieurs threads doit être protégé
/// par l'appelant (ex. `Mutex`).
pub struct Lsm303d<B> {
    bus: B,
    addr: u8,
    configured: bool,
    state: State,
}

/// Décodage complément à deux d'une valeur de `bits` bits (1..=16)
pub fn twos_comp(value: u16, bits: u32) -> i16 {
    let mask = ((1u32 << bits) - 1) as i32;
    let value = i32::from(value) & mask;

    if value & (1 << (bits - 1)) != 0 {
        (value - (1 << bits)) as i16
    } else {
        value as i16
    }
}

impl<B: I2CBus> Lsm303d<B> {
    /// Constructeur, `addr` par défaut : 0x1D
    pub fn new(bus: B, addr: Option<u8>) -> Self {
        Self {
            bus,
            addr: addr.unwrap_or(registry::LSM303D_ADDR),
            configured: false,
            state: State::default(),
        }
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Identifie et configure le capteur (une seule fois).
    /// En cas d'échec d'identification, la prochaine lecture réessaie.
    pub fn setup(&mut self) -> Result<(), B::Error> {
        if self.configured {
            return Ok(());
        }

        let whoami = self.bus.read_byte(self.addr, registry::WHO_AM_I).map_err(Error::Bus)?;
        if whoami != registry::LSM303D_WHO_AM_I_VAL {
            warn!("[LSM303D] Capteur non reconnu à {:#04x} (WHO_AM_I: {:#04x})", self.addr, whoami);
            return Err(Error::DeviceNotFound(whoami));
        }

        info!("[LSM303D] Initialisation ({:#04x}) ...", self.addr);
        for (register, value) in CONFIGURATION {
            self.bus.write_byte(self.addr, register, value).map_err(Error::Bus)?;
        }

        self.configured = true;
        info!("[LSM303D] Fin d'initialisation.");

        Ok(())
    }

    /// Lecture d'un mot 16 bits en auto-incrément
    fn read_word(&mut self, register: u8) -> Result<u16, B::Error> {
        let word = self
            .bus
            .read_word(self.addr, register | registry::AUTO_INCREMENT)
            .map_err(Error::Bus)?;
        trace!("[LSM303D] {:#04x} => {:#06x}", register, word);
        Ok(word)
    }

    /// Lecture des 3 axes (X, Y, Z) en complément à deux 16 bits
    fn read_axes(&mut self, x: u8, y: u8, z: u8) -> Result<Vector<i16>, B::Error> {
        let x = twos_comp(self.read_word(x)?, registry::AXIS_BITS);
        let y = twos_comp(self.read_word(y)?, registry::AXIS_BITS);
        let z = twos_comp(self.read_word(z)?, registry::AXIS_BITS);
        Ok(Vector::new(x, y, z))
    }

    /// Température brute en 1/8 de °C. Valeur relative, non calibrée.
    pub fn temperature(&mut self) -> Result<i16, B::Error> {
        self.setup()?;

        let raw = self.read_word(registry::TEMP_OUT_L)?;
        Ok(twos_comp(raw, registry::TEMP_BITS))
    }

    /// Champ magnétique brut (X, Y, Z)
    pub fn magnetometer(&mut self) -> Result<Vector<i16>, B::Error> {
        self.setup()?;

        let mag = self.read_axes(registry::OUT_X_L_M, registry::OUT_Y_L_M, registry::OUT_Z_L_M)?;
        self.state.mag = mag;
        debug!("[LSM303D] MAG: {}", mag);

        Ok(mag)
    }

    /// Accélération (X, Y, Z) en g
    pub fn accelerometer(&mut self) -> Result<Vector<f64>, B::Error> {
        self.setup()?;

        let raw = self.read_axes(registry::OUT_X_L_A, registry::OUT_Y_L_A, registry::OUT_Z_L_A)?;
        let to_g = |axis: i16| f64::from(axis) / 32768.0 * registry::ACCEL_SCALE;
        let accel = Vector::new(to_g(raw.x), to_g(raw.y), to_g(raw.z));
        self.state.accel = accel;
        debug!("[LSM303D] ACCEL: {}", accel);

        Ok(accel)
    }

    /// Vérifie si le magnétomètre a de nouvelles données.
    /// Ne déclenche pas l'initialisation du capteur.
    pub fn is_mag_ready(&mut self) -> Result<bool, B::Error> {
        let status = self.bus.read_byte(self.addr, registry::STATUS_REG_M).map_err(Error::Bus)?;
        Ok(status & registry::STATUS_REG_M_NEW_DATA != 0)
    }

    /// Mets à jour l'accéléromètre puis le magnétomètre
    pub fn update(&mut self) -> Result<(), B::Error> {
        self.accelerometer()?;
        self.magnetometer()?;
        Ok(())
    }

    /// Cap brut (degrés) à partir de la dernière mesure du magnétomètre, sans nouvelle lecture
    pub fn raw_heading(&mut self) -> f64 {
        self.state.raw_heading = heading::raw_heading(&self.state.mag);
        self.state.raw_heading
    }

    /// Cap compensé en inclinaison (degrés) après une nouvelle mesure complète.
    /// `Ok(None)` si le calcul n'a pas de solution.
    pub fn heading(&mut self) -> Result<Option<f64>, B::Error> {
        self.update()?;

        match heading::tilt_compensate(&self.state.accel, &self.state.mag) {
            Some((tiltcomp, heading)) => {
                self.state.tiltcomp = tiltcomp;
                self.state.heading = Some(heading);
                Ok(Some(heading))
            }
            None => {
                debug!("[LSM303D] Cap compensé indisponible (ACCEL: {})", self.state.accel);
                self.state.heading = None;
                Ok(None)
            }
        }
    }

    /// Toutes les valeurs du capteur en une fois
    pub fn snapshot(&mut self) -> Result<MotionData, B::Error> {
        let heading = self.heading()?;
        let temperature = self.temperature()?;

        Ok(MotionData {
            accelerometer: self.state.accel,
            magnetometer: self.state.mag,
            temperature,
            raw_heading: self.raw_heading(),
            heading,
            tilt_compensated: heading.map(|_| self.state.tiltcomp),
        })
    }

    pub fn last_accelerometer(&self) -> Vector<f64> {
        self.state.accel
    }

    pub fn last_magnetometer(&self) -> Vector<i16> {
        self.state.mag
    }

    pub fn last_tilt_compensated(&self) -> Vector<f64> {
        self.state.tiltcomp
    }

    pub fn last_raw_heading(&self) -> f64 {
        self.state.raw_heading
    }

    pub fn last_heading(&self) -> Option<f64> {
        self.state.heading
    }
}
