use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[command(version, about = "Lecture de l'accéléromètre/magnétomètre LSM303D de l'Enviro pHAT")]
pub struct Cli {
    /// Numéro du bus I2C
    #[arg(long)]
    pub bus: Option<u8>,

    /// Adresse du LSM303D (ex. 0x1d ou 29)
    #[arg(long, value_parser = parse_address)]
    pub address: Option<u8>,

    /// Sortie au format JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub commande: Commande,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Commande {
    /// Température brute (1/8 °C, non calibrée)
    Temperature,
    /// Accélération en g
    Accel,
    /// Champ magnétique brut
    Mag,
    /// Cap magnétique sans compensation
    RawHeading,
    /// Cap compensé en inclinaison
    Heading,
    /// Nouvelles données disponibles sur le magnétomètre ?
    Status,
    /// Toutes les valeurs
    All,
}

fn parse_address(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };

    parsed.map_err(|e| format!("Adresse invalide '{}': {}", value, e))
}
