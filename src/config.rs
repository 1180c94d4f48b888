use serde::{Deserialize, Serialize};

use envirophat_motion::sensors::motion::registry;

use crate::cli::Cli;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub(crate) bus: u8,
    pub(crate) address: u8,
    pub(crate) json: bool,
}

impl Config {
    pub fn new() -> Self {
        Config {
            bus: 1,
            address: registry::LSM303D_ADDR,
            json: false,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let defaut = Config::new();

        Config {
            bus: cli.bus.unwrap_or(defaut.bus),
            address: cli.address.unwrap_or(defaut.address),
            json: cli.json,
        }
    }
}
