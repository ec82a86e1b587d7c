//! Agregados que envuelven a una bebida y modifican su costo e ingredientes.
use serde::Deserialize;

use crate::{
    beverage::Beverage,
    constants::{MILK_COST, SUGAR_COST, VANILLA_COST},
    ingredient::Ingredient,
    price::Price,
};

/// Tipos de agregado disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddonKind {
    Sugar,
    Milk,
    Vanilla,
}

impl AddonKind {
    /// Costo que el agregado suma a la bebida que envuelve
    pub fn price(&self) -> Price {
        match self {
            AddonKind::Sugar => SUGAR_COST,
            AddonKind::Milk => MILK_COST,
            AddonKind::Vanilla => VANILLA_COST,
        }
    }

    /// Ingrediente que el agregado suma al final de la lista
    pub fn ingredient(&self) -> Ingredient {
        match self {
            AddonKind::Sugar => Ingredient::Sugar,
            AddonKind::Milk => Ingredient::Milk,
            AddonKind::Vanilla => Ingredient::Vanilla,
        }
    }
}

/// Bebida envuelta por un agregado. Es duenio exclusivo de la bebida interna.
pub struct Addon {
    kind: AddonKind,
    inner: Box<dyn Beverage>,
}

impl Addon {
    pub fn new(kind: AddonKind, inner: Box<dyn Beverage>) -> Addon {
        Addon { kind, inner }
    }
}

impl Beverage for Addon {
    fn cost(&self) -> Price {
        self.inner.cost() + self.kind.price()
    }

    fn ingredients(&self) -> Vec<Ingredient> {
        let mut ingredients = self.inner.ingredients();
        ingredients.push(self.kind.ingredient());
        ingredients
    }
}
