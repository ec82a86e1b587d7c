//! Montos de dinero en punto fijo.
use std::{fmt, ops::Add};

/// Cantidad de digitos decimales que se guardan
const FRACTION_DIGITS: usize = 4;

/// Unidades minimas que hay en una unidad entera de dinero
const SCALE: u64 = 10_000;

/// Unidades minimas que hay en un centavo
const UNITS_PER_CENT: u64 = SCALE / 100;

/// Monto no negativo guardado como entero de diez-milesimos.
/// Se usan cuatro decimales para que el impuesto de un monto en centavos sea exacto.
/// Las operaciones saturan en `u64::MAX` unidades en lugar de desbordar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Price {
        Price(cents.saturating_mul(UNITS_PER_CENT))
    }

    /// Devuelve el `percentage` por ciento del monto, truncando por debajo de la unidad minima.
    /// Es exacto para montos en centavos de hasta `u64::MAX / percentage` unidades.
    pub fn percentage(&self, percentage: u64) -> Price {
        Price(self.0.saturating_mul(percentage) / 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let whole = self.0 / SCALE;
        let mut fraction = format!("{:0width$}", self.0 % SCALE, width = FRACTION_DIGITS);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }
        write!(f, "{}.{}", whole, fraction)
    }
}
