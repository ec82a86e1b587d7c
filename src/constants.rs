//! Parametros fijos de la cafeteria

use crate::{addon::AddonKind, price::Price};

/// Precio del cafe base, sin agregados
pub const COFFEE_COST: Price = Price::from_cents(100);

/// Costo adicional del azucar (es gratis)
pub const SUGAR_COST: Price = Price::from_cents(0);

/// Costo adicional de la leche
pub const MILK_COST: Price = Price::from_cents(25);

/// Costo adicional de la vainilla
pub const VANILLA_COST: Price = Price::from_cents(75);

/// Porcentaje de impuesto que se aplica sobre el costo final de la bebida
pub const TAX_PERCENTAGE: u64 = 10;

/// Agregados del pedido de demostracion, en el orden en que se aplican
pub const DEMO_ADDONS: [AddonKind; 3] = [AddonKind::Milk, AddonKind::Vanilla, AddonKind::Sugar];
