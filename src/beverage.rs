//! Contrato comun de las bebidas y el cafe base.
use crate::{
    addon::{Addon, AddonKind},
    constants::{COFFEE_COST, TAX_PERCENTAGE},
    ingredient::Ingredient,
    price::Price,
};

/// Cualquier bebida, sea el cafe base o un cafe envuelto por agregados.
/// Una vez construida no se modifica, por eso se puede consultar desde varios hilos.
pub trait Beverage: Send + Sync {
    fn cost(&self) -> Price;

    fn ingredients(&self) -> Vec<Ingredient>;

    /// Impuesto sobre el costo final de la bebida. Ninguna implementacion lo redefine.
    fn tax(&self) -> Price {
        self.cost().percentage(TAX_PERCENTAGE)
    }

    /// Envuelve la bebida con un nuevo agregado
    fn with(self, kind: AddonKind) -> Addon
    where
        Self: Sized + 'static,
    {
        Addon::new(kind, Box::new(self))
    }
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn cost(&self) -> Price {
        (**self).cost()
    }

    fn ingredients(&self) -> Vec<Ingredient> {
        (**self).ingredients()
    }
}

/// Cafe sin agregados. Es siempre la bebida mas interna de la cadena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coffee;

impl Coffee {
    pub fn new() -> Coffee {
        Coffee
    }
}

impl Beverage for Coffee {
    fn cost(&self) -> Price {
        COFFEE_COST
    }

    fn ingredients(&self) -> Vec<Ingredient> {
        vec![Ingredient::Coffee]
    }
}

/// Linea que se imprime para mostrar el estado de una bebida
pub fn describe(beverage: &dyn Beverage) -> String {
    let ingredients: Vec<String> = beverage
        .ingredients()
        .iter()
        .map(Ingredient::to_string)
        .collect();
    format!(
        "Ingredients: {}; Cost: {}",
        ingredients.join(", "),
        beverage.cost()
    )
}
