mod cli;
mod config;

use std::fmt::Display;

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;
use tokio::signal;

use envirophat_motion::board::EnviroPhat;
use envirophat_motion::i2c::I2CBus;
use envirophat_motion::sensors::motion::Lsm303d;

use cli::{Cli, Commande};
use config::Config;

#[cfg(not(any(feature = "real-sensors", feature = "fake-sensors")))]
compile_error!("Activer la feature `real-sensors` ou `fake-sensors`.");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from(&cli);
    let commande = cli.commande;

    // Les transactions I2C sont bloquantes
    let lecture = tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
        let bus = open_bus(&config)?;
        let mut board = EnviroPhat::new(bus, Some(config.address));
        execute(&mut board.motion, commande, config.json)
    });

    tokio::select! {
        resultat = lecture => {
            let sortie = resultat.context("[MAIN] Tâche de lecture interrompue")??;
            println!("{}", sortie);
        },
        _ = signal::ctrl_c() => {
            info!("[MAIN] Signal de contrôle C reçu");
        },
    }

    Ok(())
}

#[cfg(all(feature = "real-sensors", not(feature = "fake-sensors")))]
fn open_bus(config: &Config) -> anyhow::Result<rppal::i2c::I2c> {
    info!("[I2C] Ouverture du bus {} ...", config.bus);
    rppal::i2c::I2c::with_bus(config.bus).with_context(|| format!("[I2C] Erreur de bus {}", config.bus))
}

#[cfg(feature = "fake-sensors")]
fn open_bus(config: &Config) -> anyhow::Result<envirophat_motion::i2c::FakeBus> {
    info!("[I2C] Bus simulé {} [FAKE]", config.bus);
    Ok(envirophat_motion::i2c::FakeBus::new())
}

/// Exécute la commande demandée et prépare la sortie
fn execute<B: I2CBus>(motion: &mut Lsm303d<B>, commande: Commande, json: bool) -> anyhow::Result<String> {
    match commande {
        Commande::Temperature => render(motion.temperature()?, json),
        Commande::Accel => render(motion.accelerometer()?, json),
        Commande::Mag => render(motion.magnetometer()?, json),
        Commande::RawHeading => {
            motion.magnetometer()?;
            render(motion.raw_heading(), json)
        }
        Commande::Heading => {
            let heading = motion.heading()?;
            match (heading, json) {
                (_, true) => Ok(serde_json::to_string(&heading)?),
                (Some(heading), false) => Ok(format!("{:.2}", heading)),
                (None, false) => Ok("Cap indisponible".to_string()),
            }
        }
        Commande::Status => render(motion.is_mag_ready()?, json),
        Commande::All => render(motion.snapshot()?, json),
    }
}

fn render<T: Serialize + Display>(value: T, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envirophat_motion::sensors::motion::Vector;

    #[test]
    fn test_render_text() {
        assert_eq!(render(Vector::new(1, -2, 3), false).unwrap(), "1,-2,3");
        assert_eq!(render(true, false).unwrap(), "true");
    }

    #[test]
    fn test_render_json() {
        assert_eq!(render(Vector::new(1, -2, 3), true).unwrap(), r#"{"x":1,"y":-2,"z":3}"#);
        assert_eq!(render(90.0, true).unwrap(), "90.0");
    }
}
