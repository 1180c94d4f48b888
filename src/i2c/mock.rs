//! Bus simulé pour les tests unitaires

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use super::I2CBus;

#[derive(Debug, thiserror::Error)]
pub(crate) enum MockError {
    #[error("Pas de réponse du registre {0:#04x}")]
    Nack(u8),
}

/// Transaction enregistrée par le bus simulé
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transaction {
    Write { addr: u8, register: u8, value: u8 },
    ReadByte { addr: u8, register: u8 },
    ReadWord { addr: u8, register: u8 },
}

#[derive(Clone, Default)]
pub(crate) struct MockBus {
    inner: Arc<Mutex<MockBusInner>>,
}

#[derive(Default)]
struct MockBusInner {
    bytes: HashMap<u8, u8>,
    words: HashMap<u8, VecDeque<u16>>,
    failing: HashSet<u8>,
    log: Vec<Transaction>,
}

impl MockBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Valeur renvoyée par `read_byte` pour ce registre
    pub(crate) fn set_byte(&self, register: u8, value: u8) {
        self.inner.lock().unwrap().bytes.insert(register, value);
    }

    /// Ajoute une réponse pour `read_word` (sous-adresse complète, bit d'auto-incrément compris)
    pub(crate) fn push_word(&self, register: u8, value: u16) {
        self.inner
            .lock()
            .unwrap()
            .words
            .entry(register)
            .or_default()
            .push_back(value);
    }

    /// Toute transaction sur ce registre échoue
    pub(crate) fn fail_on(&self, register: u8) {
        self.inner.lock().unwrap().failing.insert(register);
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.inner.lock().unwrap().log.clone()
    }

    pub(crate) fn writes(&self) -> Vec<(u8, u8)> {
        self.transactions()
            .into_iter()
            .filter_map(|t| match t {
                Transaction::Write { register, value, .. } => Some((register, value)),
                _ => None,
            })
            .collect()
    }
}

impl I2CBus for MockBus {
    type Error = MockError;

    fn write_byte(&mut self, addr: u8, register: u8, value: u8) -> Result<(), MockError> {
        let mut inner = self.inner.lock().unwrap();
        inner.log.push(Transaction::Write { addr, register, value });
        if inner.failing.contains(&register) {
            return Err(MockError::Nack(register));
        }
        Ok(())
    }

    fn read_byte(&mut self, addr: u8, register: u8) -> Result<u8, MockError> {
        let mut inner = self.inner.lock().unwrap();
        inner.log.push(Transaction::ReadByte { addr, register });
        if inner.failing.contains(&register) {
            return Err(MockError::Nack(register));
        }
        Ok(inner.bytes.get(&register).copied().unwrap_or(0))
    }

    fn read_word(&mut self, addr: u8, register: u8) -> Result<u16, MockError> {
        let mut inner = self.inner.lock().unwrap();
        inner.log.push(Transaction::ReadWord { addr, register });
        if inner.failing.contains(&register) {
            return Err(MockError::Nack(register));
        }
        Ok(inner
            .words
            .get_mut(&register)
            .and_then(VecDeque::pop_front)
            .unwrap_or(0))
    }
}
