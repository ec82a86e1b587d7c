use log::{debug, error, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::addon::AddonKind;
use crate::errors::CoffeeShopError;
use crate::order::Order;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    #[serde(default)]
    addons: Vec<AddonKind>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

/// Lee los pedidos de un archivo JSON
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, CoffeeShopError> {
    let file = File::open(&path).map_err(|err| {
        error!(
            "[READER] Could not open {}: {}",
            path.as_ref().display(),
            err
        );
        CoffeeShopError::FileReaderError
    })?;
    parse_orders(BufReader::new(file))
}

/// Interpreta los pedidos y les asigna ids consecutivos desde 0
pub fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>, CoffeeShopError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    let orders: Vec<Order> = orders_config
        .orders
        .into_iter()
        .enumerate()
        .map(|(id, json_order)| {
            debug!("[READER] Added order {} with {:?}", id, json_order.addons);
            Order::new(id, json_order.addons)
        })
        .collect();
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}
