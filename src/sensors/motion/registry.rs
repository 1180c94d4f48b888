#![allow(unused)]

// LSM303D (SA0 à la masse sur l'Enviro pHAT)
pub const LSM303D_ADDR: u8 = 0x1D;
pub const LSM303D_WHO_AM_I_VAL: u8 = 0x49;

// Lecture multi-octets : le bit haut de la sous-adresse active l'auto-incrément
pub const AUTO_INCREMENT: u8 = 0x80;

pub const TEMP_OUT_L: u8 = 0x05;
pub const TEMP_OUT_H: u8 = 0x06;
pub const STATUS_REG_M: u8 = 0x07;
pub const OUT_X_L_M: u8 = 0x08;
pub const OUT_X_H_M: u8 = 0x09;
pub const OUT_Y_L_M: u8 = 0x0A;
pub const OUT_Y_H_M: u8 = 0x0B;
pub const OUT_Z_L_M: u8 = 0x0C;
pub const OUT_Z_H_M: u8 = 0x0D;
pub const WHO_AM_I: u8 = 0x0F;
pub const INT_CTRL_M: u8 = 0x12;
pub const INT_SRC_M: u8 = 0x13;
pub const INT_THS_L_M: u8 = 0x14;
pub const INT_THS_H_M: u8 = 0x15;
pub const OFFSET_X_L_M: u8 = 0x16;
pub const OFFSET_X_H_M: u8 = 0x17;
pub const OFFSET_Y_L_M: u8 = 0x18;
pub const OFFSET_Y_H_M: u8 = 0x19;
pub const OFFSET_Z_L_M: u8 = 0x1A;
pub const OFFSET_Z_H_M: u8 = 0x1B;
pub const REFERENCE_X: u8 = 0x1C;
pub const REFERENCE_Y: u8 = 0x1D;
pub const REFERENCE_Z: u8 = 0x1E;
pub const CTRL_REG0: u8 = 0x1F;
pub const CTRL_REG1: u8 = 0x20;
pub const CTRL_REG2: u8 = 0x21;
pub const CTRL_REG3: u8 = 0x22;
pub const CTRL_REG4: u8 = 0x23;
pub const CTRL_REG5: u8 = 0x24;
pub const CTRL_REG6: u8 = 0x25;
pub const CTRL_REG7: u8 = 0x26;
pub const STATUS_REG_A: u8 = 0x27;
pub const OUT_X_L_A: u8 = 0x28;
pub const OUT_X_H_A: u8 = 0x29;
pub const OUT_Y_L_A: u8 = 0x2A;
pub const OUT_Y_H_A: u8 = 0x2B;
pub const OUT_Z_L_A: u8 = 0x2C;
pub const OUT_Z_H_A: u8 = 0x2D;
pub const FIFO_CTRL: u8 = 0x2E;
pub const FIFO_SRC: u8 = 0x2F;
pub const IG_CFG1: u8 = 0x30;
pub const IG_SRC1: u8 = 0x31;
pub const IG_THS1: u8 = 0x32;
pub const IG_DUR1: u8 = 0x33;
pub const IG_CFG2: u8 = 0x34;
pub const IG_SRC2: u8 = 0x35;
pub const IG_THS2: u8 = 0x36;
pub const IG_DUR2: u8 = 0x37;
pub const CLICK_CFG: u8 = 0x38;
pub const CLICK_SRC: u8 = 0x39;
pub const CLICK_THS: u8 = 0x3A;
pub const TIME_LIMIT: u8 = 0x3B;
pub const TIME_LATENCY: u8 = 0x3C;
pub const TIME_WINDOW: u8 = 0x3D;
pub const ACT_THS: u8 = 0x3E;
pub const ACT_DUR: u8 = 0x3F;

// STATUS_REG_M : XMDA | YMDA (nouvelles données)
pub const STATUS_REG_M_NEW_DATA: u8 = 0x03;

// CTRL_REG1 : ODR 50 Hz, axes X/Y/Z actifs
pub const CTRL_REG1_ODR_50HZ_XYZ: u8 = 0x57;
// CTRL_REG2 : filtre anti-repliement 50 Hz, AFS = 0
pub const CTRL_REG2_AFS_2G: u8 = (3 << 6) | (0 << 3);
// CTRL_REG5 : capteur de température + magnétomètre 50 Hz
pub const CTRL_REG5_TEMP_EN: u8 = 0x80;
pub const CTRL_REG5_M_ODR_50HZ: u8 = 4 << 2;
// CTRL_REG7 : conversion continue
pub const CTRL_REG7_MD_CONTINUOUS: u8 = 0x00;

// Echelles du magnétomètre (CTRL_REG6)
pub const MAG_SCALE_2: u8 = 0x00;
pub const MAG_SCALE_4: u8 = 0x20;
pub const MAG_SCALE_8: u8 = 0x40;
pub const MAG_SCALE_12: u8 = 0x60;

// Echelle de l'accéléromètre (+/- 2g)
pub const ACCEL_SCALE: f64 = 2.0;

// Largeurs de décodage
pub const TEMP_BITS: u32 = 12;
pub const AXIS_BITS: u32 = 16;
