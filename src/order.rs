//! Pedidos de la cafeteria
use crate::{
    addon::{Addon, AddonKind},
    beverage::{Beverage, Coffee},
    constants::DEMO_ADDONS,
};

/// Pedido de un cafe con los agregados en el orden en que se aplican
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: usize,
    pub addons: Vec<AddonKind>,
}

impl Order {
    pub fn new(id: usize, addons: Vec<AddonKind>) -> Order {
        Order { id, addons }
    }

    /// Pedido que se prepara cuando no se indica un archivo de pedidos
    pub fn demo() -> Order {
        Order::new(0, DEMO_ADDONS.to_vec())
    }

    /// Arma la bebida del pedido, del cafe base hacia afuera.
    /// `on_step` recibe el cafe base y luego la bebida despues de cada agregado.
    pub fn build<F: FnMut(&dyn Beverage)>(&self, mut on_step: F) -> Box<dyn Beverage> {
        let mut beverage: Box<dyn Beverage> = Box::new(Coffee::new());
        on_step(beverage.as_ref());
        for kind in &self.addons {
            beverage = Box::new(Addon::new(*kind, beverage));
            on_step(beverage.as_ref());
        }
        beverage
    }
}
