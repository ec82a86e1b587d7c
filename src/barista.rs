//! Barista de la cafeteria. Prepara los pedidos agregando de a un ingrediente.
use log::{debug, info};

use crate::{
    beverage::{describe, Beverage},
    order::Order,
    statistics::SalesStatistics,
};

/// Representa al barista. Lleva la cuenta de los pedidos que fue preparando.
#[derive(Default)]
pub struct Barista {
    statistics: SalesStatistics,
}

impl Barista {
    pub fn new() -> Barista {
        Barista::default()
    }

    /// Prepara el pedido e imprime el estado de la bebida antes del primer agregado
    /// y despues de cada uno
    pub fn prepare(&mut self, order: &Order) -> Box<dyn Beverage> {
        let beverage = order.build(|step| {
            debug!("[BARISTA] Order {} has {:?}", order.id, step.ingredients());
            println!("{}", describe(step));
        });
        self.statistics.record();
        info!(
            "[BARISTA] Finished order {} with {} addons",
            order.id,
            order.addons.len()
        );
        beverage
    }

    pub fn prepare_all(&mut self, orders: &[Order]) {
        for order in orders {
            self.prepare(order);
        }
    }

    pub fn statistics(&self) -> &SalesStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{addon::AddonKind, price::Price};

    #[test]
    fn should_return_the_finished_beverage() {
        let mut barista = Barista::new();
        let beverage = barista.prepare(&Order::new(0, vec![AddonKind::Milk, AddonKind::Milk]));
        assert_eq!(Price::from_cents(150), beverage.cost());
        assert_eq!(1, barista.statistics().processed());
    }

    #[test]
    fn should_count_every_prepared_order() {
        let mut barista = Barista::new();
        barista.prepare_all(&[Order::demo(), Order::new(1, Vec::new())]);
        assert_eq!(2, barista.statistics().processed());
    }
}
